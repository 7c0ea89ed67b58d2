// Command-line interface

use clap::Parser;

/// Mock backend for the BeiDou satellite visibility front-end.
///
/// Serves static files from the working directory and synthetic JSON under /api/.
#[derive(Debug, Parser)]
#[command(name = "beidou-mock-server", version)]
pub struct Cli {
    /// Port to listen on; the next free port is used if it is taken (default 8080)
    pub port: Option<u16>,
}
