//! HTTP protocol layer module
//!
//! Response builders and MIME detection, decoupled from the mock API and static file logic.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_405_response, build_file_response, build_json_response,
    build_options_response, build_redirect_response,
};
