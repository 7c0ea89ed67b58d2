//! Logger module
//!
//! Console logging for the mock server:
//! - Server lifecycle logging (bind, start, shutdown)
//! - Access logging, one line per request
//! - Error and warning logging

mod format;

pub use format::AccessLogEntry;

use std::net::SocketAddr;

/// Write to info/access log
fn write_info(message: &str) {
    println!("{message}");
}

/// Write to error log
fn write_error(message: &str) {
    eprintln!("{message}");
}

pub fn log_server_start(addr: &SocketAddr, base_url: &str, static_root: &str) {
    write_info("=========================================");
    write_info("BeiDou satellite visibility mock server");
    write_info("=========================================");
    write_info(&format!("Listening on: {addr} (port {})", addr.port()));
    write_info(&format!("Base URL: {base_url}"));
    write_info(&format!("Static root: {static_root}"));
    write_info("Press Ctrl+C to stop the server");
    write_info("=========================================\n");
}

pub fn log_port_in_use(port: u16, next: Option<u16>) {
    match next {
        Some(next) => write_info(&format!("[Bind] Port {port} is in use, trying port {next}")),
        None => write_info(&format!("[Bind] Port {port} is in use")),
    }
}

pub fn log_port_adjusted(requested: u16, bound: u16) {
    write_info(&format!(
        "[Bind] Requested port {requested} unavailable, using port {bound} instead"
    ));
}

pub fn log_worker_threads(workers: Option<usize>) {
    match workers {
        Some(n) => write_info(&format!("[Config] Using {n} worker threads")),
        None => write_info("[Config] Using default worker threads (CPU cores)"),
    }
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry) {
    write_info(&entry.format());
}

pub fn log_connection_error(peer_addr: &SocketAddr, err: &impl std::fmt::Display) {
    write_error(&format!("[ERROR] Failed to serve connection from {peer_addr}: {err}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_shutdown_requested(signal: &str) {
    write_info(&format!("\n[Shutdown] {signal} received, stopping server..."));
}

pub fn log_shutdown_draining(active: usize) {
    write_info(&format!(
        "[Shutdown] Listener closed, waiting for {active} active connection(s)"
    ));
}

pub fn log_shutdown_complete() {
    write_info("[Shutdown] Server stopped");
}
