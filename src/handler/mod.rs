//! Request handler module
//!
//! Responsible for request routing dispatch: mock API endpoints and static file serving.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::{handle_request, route};
