use std::path::PathBuf;

use stickerlab_core::CategorySet;

/// URL mount point for the static file tree.
pub const STATIC_MOUNT: &str = "/static";

/// Public URL prefix for scanned assets.
///
/// Must agree with [`STATIC_MOUNT`]: the indexer synthesizes
/// `<prefix>/<category>/<filename>` URLs and the static service resolves
/// them against `<static_dir>/assets`.
pub const PUBLIC_ASSETS_PREFIX: &str = "/static/assets";

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
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
    /// Root of the static file tree (default: `static`). Assets are scanned
    /// under `<static_dir>/assets/<category>`.
    pub static_dir: PathBuf,
    /// Ordered category list driving the scan and the response key order.
    pub categories: CategorySet,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                      |
    /// |------------------------|------------------------------|
    /// | `HOST`                 | `0.0.0.0`                    |
    /// | `PORT`                 | `3000`                       |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`      |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                         |
    /// | `STATIC_DIR`           | `static`                     |
    /// | `ASSET_CATEGORIES`     | built-in 11-category list    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let static_dir = PathBuf::from(std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into()));

        // Invalid category lists must fail at startup, not per request.
        let categories = match std::env::var("ASSET_CATEGORIES") {
            Ok(list) => CategorySet::parse_list(&list)
                .expect("ASSET_CATEGORIES must be a non-empty list of unique names"),
            Err(_) => CategorySet::default(),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            static_dir,
            categories,
        }
    }

    /// Directory scanned for category subdirectories.
    pub fn assets_dir(&self) -> PathBuf {
        self.static_dir.join("assets")
    }
}
