// Application state module
// Immutable per-process state shared by every connection

use std::path::PathBuf;

use super::types::Config;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Port the listener actually bound (may differ from `config.server.port`)
    pub port: u16,
}

impl AppState {
    pub const fn new(config: Config, port: u16) -> Self {
        Self { config, port }
    }

    pub fn static_root(&self) -> PathBuf {
        PathBuf::from(&self.config.http.static_root)
    }
}
