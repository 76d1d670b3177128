/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables. Nothing secret is
/// ever compiled in; the collaboration key the original deployment
/// embedded in source has no equivalent here.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Graceful shutdown timeout in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Root directory for uploaded video files.
    pub storage_root: String,
    /// Maximum accepted upload body size in bytes (default: 512 MiB).
    /// Raises the extractor's 2 MB default on the upload route only.
    pub max_upload_bytes: usize,
    /// Interval between WebSocket heartbeat pings in seconds (default: `30`).
    pub ws_heartbeat_secs: u64,
    /// Reviewer identities offered as mention suggestions, parsed from
    /// comma-separated `MENTION_USERS`.
    pub mention_users: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                             |
    /// |-------------------------|-------------------------------------|
    /// | `HOST`                  | `0.0.0.0`                           |
    /// | `PORT`                  | `3000`                              |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`             |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                                |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                                |
    /// | `STORAGE_ROOT`          | `storage/videos`                    |
    /// | `MAX_UPLOAD_BYTES`      | `536870912` (512 MiB)               |
    /// | `WS_HEARTBEAT_SECS`     | `30`                                |
    /// | `MENTION_USERS`         | (empty)                             |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_csv(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let storage_root =
            std::env::var("STORAGE_ROOT").unwrap_or_else(|_| "storage/videos".into());

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| "536870912".into())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        let ws_heartbeat_secs: u64 = std::env::var("WS_HEARTBEAT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("WS_HEARTBEAT_SECS must be a valid u64");

        let mention_users = parse_csv(&std::env::var("MENTION_USERS").unwrap_or_default());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            storage_root,
            max_upload_bytes,
            ws_heartbeat_secs,
            mention_users,
        }
    }
}

fn parse_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
