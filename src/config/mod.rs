// Configuration module entry point
// Assembles built-in defaults and the command-line port override

mod state;
mod types;

use std::net::{IpAddr, SocketAddr};

use crate::error::{Result, ServerError};

// Re-export public types
pub use state::AppState;
pub use types::{Config, HttpConfig, LoggingConfig, ServerConfig};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_PORT_ATTEMPTS: u16 = 10;

impl Config {
    /// Load configuration, letting `port` (from the command line) override the default
    pub fn load(port: Option<u16>) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("server.max_port_attempts", i64::from(DEFAULT_MAX_PORT_ATTEMPTS))?
            .set_default("server.shutdown_timeout", 30)?
            .set_default("logging.access_log", true)?
            .set_default("http.static_root", ".")?
            .set_default("http.keep_alive", true)?
            .set_default("http.index_files", vec!["index.html", "index.htm"])?
            .set_override_option("server.port", port.map(i64::from))?
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Socket address for a candidate port on the configured host
    pub fn socket_addr(&self, port: u16) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .server
            .host
            .parse()
            .map_err(|_| ServerError::InvalidHost(self.server.host.clone()))?;
        Ok(SocketAddr::new(ip, port))
    }
}
