//! Development mock server for the BeiDou satellite visibility front-end.
//!
//! Static files are served from the working directory; `/api/status`,
//! `/api/satellite`, `/api/trajectory` and `/api/analysis` return freshly
//! randomized JSON so the UI can run without the real backend.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
