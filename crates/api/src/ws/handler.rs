use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};

use crate::error::AppResult;
use crate::handlers::thread::ensure_room_exists;
use crate::state::AppState;
use crate::ws::fanout;
use crate::ws::manager::RoomRegistry;

/// HTTP handler that upgrades the connection to WebSocket and joins the
/// requested room.
///
/// The room is validated before the upgrade, so a socket never joins a
/// room no video owns. After the upgrade the connection is registered
/// with [`RoomRegistry`] and receives the current thread snapshot
/// immediately, then a fresh one after every room mutation.
pub async fn room_ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    ensure_room_exists(&state.pool, &room_id).await?;
    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, room_id)))
}

/// Manage a single WebSocket connection after upgrade.
///
/// Splits the socket into a sink (outbound) and stream (inbound), then:
///   1. Registers the connection with the registry (join-room).
///   2. Pushes the initial thread snapshot.
///   3. Spawns a sender task that forwards messages from the registry channel.
///   4. Drains inbound messages on the current task.
///   5. Cleans up on disconnect (leave-room).
async fn handle_socket(socket: WebSocket, state: AppState, room_id: String) {
    let conn_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(conn_id = %conn_id, room_id = %room_id, "WebSocket joined room");

    let registry: Arc<RoomRegistry> = Arc::clone(&state.rooms);
    let mut rx = registry.add(conn_id.clone(), room_id.clone()).await;

    let (mut sink, mut stream) = socket.split();

    // Initial snapshot, so a late joiner starts from the current state.
    match fanout::snapshot_message(&state.pool, &room_id).await {
        Ok(message) => {
            if sink.send(message).await.is_err() {
                registry.remove(&conn_id).await;
                return;
            }
        }
        Err(e) => {
            tracing::error!(room_id = %room_id, error = %e, "Failed to load initial snapshot");
        }
    }

    // Sender task: forward channel messages to the WebSocket sink.
    let sender_conn_id = conn_id.clone();
    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sink.send(msg).await.is_err() {
                tracing::debug!(conn_id = %sender_conn_id, "WebSocket sink closed");
                break;
            }
        }
    });

    // Receiver loop: clients only listen today, so inbound traffic is
    // drained until the socket closes.
    while let Some(result) = stream.next().await {
        match result {
            Ok(Message::Close(_)) => break,
            Ok(Message::Pong(_)) => {
                tracing::trace!(conn_id = %conn_id, "Pong received");
            }
            Ok(_msg) => {}
            Err(e) => {
                tracing::debug!(conn_id = %conn_id, error = %e, "WebSocket receive error");
                break;
            }
        }
    }

    // Clean up: leave the room and abort the sender task.
    registry.remove(&conn_id).await;
    send_task.abort();
    tracing::info!(conn_id = %conn_id, room_id = %room_id, "WebSocket left room");
}
