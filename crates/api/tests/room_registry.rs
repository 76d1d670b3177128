//! Unit tests for `RoomRegistry`.
//!
//! These tests exercise the WebSocket room registry directly, without
//! performing any HTTP upgrades. They verify join/leave semantics, room-
//! scoped delivery, and graceful shutdown behaviour.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::ws::Message;
use framenote_api::ws::{start_heartbeat, RoomRegistry};

// ---------------------------------------------------------------------------
// Test: new registry starts with zero connections
// ---------------------------------------------------------------------------

#[tokio::test]
async fn new_registry_has_zero_connections() {
    let registry = RoomRegistry::new();

    assert_eq!(registry.connection_count().await, 0);
}

// ---------------------------------------------------------------------------
// Test: add() joins a room and increments the connection count
// ---------------------------------------------------------------------------

#[tokio::test]
async fn add_joins_room_and_increments_count() {
    let registry = RoomRegistry::new();

    let _rx = registry.add("conn-1".to_string(), "7-abc".to_string()).await;

    assert_eq!(registry.connection_count().await, 1);
    assert_eq!(registry.room_member_count("7-abc").await, 1);
    assert_eq!(registry.room_member_count("8-xyz").await, 0);
}

// ---------------------------------------------------------------------------
// Test: remove() leaves the room
// ---------------------------------------------------------------------------

#[tokio::test]
async fn remove_leaves_room() {
    let registry = RoomRegistry::new();

    let _rx = registry.add("conn-1".to_string(), "7-abc".to_string()).await;
    assert_eq!(registry.room_member_count("7-abc").await, 1);

    registry.remove("conn-1").await;
    assert_eq!(registry.room_member_count("7-abc").await, 0);
    assert_eq!(registry.connection_count().await, 0);
}

// ---------------------------------------------------------------------------
// Test: remove() with unknown ID is a no-op
// ---------------------------------------------------------------------------

#[tokio::test]
async fn remove_unknown_id_is_noop() {
    let registry = RoomRegistry::new();

    let _rx = registry.add("conn-1".to_string(), "7-abc".to_string()).await;
    registry.remove("nonexistent").await;

    assert_eq!(registry.connection_count().await, 1);
}

// ---------------------------------------------------------------------------
// Test: send_to_room() reaches only members of that room
// ---------------------------------------------------------------------------

#[tokio::test]
async fn send_to_room_reaches_only_that_room() {
    let registry = RoomRegistry::new();

    let mut rx1 = registry.add("conn-1".to_string(), "7-abc".to_string()).await;
    let mut rx2 = registry.add("conn-2".to_string(), "7-abc".to_string()).await;
    let mut rx3 = registry.add("conn-3".to_string(), "8-xyz".to_string()).await;

    let sent = registry
        .send_to_room("7-abc", Message::Text("snapshot".into()))
        .await;
    assert_eq!(sent, 2);

    let msg1 = rx1.recv().await.expect("rx1 should receive message");
    let msg2 = rx2.recv().await.expect("rx2 should receive message");
    assert!(matches!(&msg1, Message::Text(t) if *t == "snapshot"));
    assert!(matches!(&msg2, Message::Text(t) if *t == "snapshot"));

    // The other room must see nothing.
    assert!(rx3.try_recv().is_err());
}

// ---------------------------------------------------------------------------
// Test: send_to_room() to an empty room delivers nothing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn send_to_empty_room_delivers_nothing() {
    let registry = RoomRegistry::new();

    let sent = registry
        .send_to_room("7-abc", Message::Text("snapshot".into()))
        .await;
    assert_eq!(sent, 0);
}

// ---------------------------------------------------------------------------
// Test: shutdown_all() sends Close and clears all connections
// ---------------------------------------------------------------------------

#[tokio::test]
async fn shutdown_all_sends_close_and_clears() {
    let registry = RoomRegistry::new();

    let mut rx1 = registry.add("conn-1".to_string(), "7-abc".to_string()).await;
    let mut rx2 = registry.add("conn-2".to_string(), "8-xyz".to_string()).await;
    assert_eq!(registry.connection_count().await, 2);

    registry.shutdown_all().await;

    // Connection count should be zero after shutdown.
    assert_eq!(registry.connection_count().await, 0);

    // Both receivers should have received a Close message.
    let msg1 = rx1.recv().await.expect("rx1 should receive Close");
    assert!(
        matches!(msg1, Message::Close(None)),
        "Expected Close(None), got: {msg1:?}"
    );

    let msg2 = rx2.recv().await.expect("rx2 should receive Close");
    assert!(
        matches!(msg2, Message::Close(None)),
        "Expected Close(None), got: {msg2:?}"
    );

    // After Close, the channel should be closed (no more messages).
    assert!(
        rx1.recv().await.is_none(),
        "Channel should be closed after shutdown"
    );
}

// ---------------------------------------------------------------------------
// Test: ping_all() reaches every room
// ---------------------------------------------------------------------------

// ---------------------------------------------------------------------------
// Test: heartbeat task pings occupied rooms at the configured interval
// ---------------------------------------------------------------------------

#[tokio::test]
async fn heartbeat_pings_active_connections() {
    let registry = Arc::new(RoomRegistry::new());
    let mut rx = registry.add("conn-1".to_string(), "7-abc".to_string()).await;

    let handle = start_heartbeat(Arc::clone(&registry), 1);

    let message = tokio::time::timeout(Duration::from_secs(3), rx.recv())
        .await
        .expect("ping should arrive within the interval")
        .expect("channel should stay open");
    assert!(matches!(message, Message::Ping(_)));

    handle.abort();
}

#[tokio::test]
async fn ping_all_reaches_every_room() {
    let registry = RoomRegistry::new();

    let mut rx1 = registry.add("conn-1".to_string(), "7-abc".to_string()).await;
    let mut rx2 = registry.add("conn-2".to_string(), "8-xyz".to_string()).await;

    registry.ping_all().await;

    assert!(matches!(
        rx1.recv().await.expect("rx1 should receive ping"),
        Message::Ping(_)
    ));
    assert!(matches!(
        rx2.recv().await.expect("rx2 should receive ping"),
        Message::Ping(_)
    ));
}
