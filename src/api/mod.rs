// API module entry
// Mock endpoints: an explicit path -> generator table

mod generators;
mod response;
mod types;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use rand::RngCore;

pub use generators::{
    coverage_quality, is_visible, MockContext, FUSELAGE_OBSTRUCTION, NO_OBSTRUCTION,
    TOTAL_SATELLITES,
};
pub use response::{endpoint_not_found, json_response};
pub use types::MockPayload;

/// Paths under this prefix never fall through to static files
pub const API_PREFIX: &str = "/api/";

/// Generator producing one mock document
pub type Generator = fn(&MockContext, &mut dyn RngCore) -> MockPayload;

/// Registered mock endpoints, matched by exact path
pub const ENDPOINTS: &[(&str, Generator)] = &[
    ("/api/status", generators::status),
    ("/api/satellite", generators::satellite),
    ("/api/trajectory", generators::trajectory),
    ("/api/analysis", generators::analysis),
];

/// Where a request path is dispatched
#[derive(Clone, Copy)]
pub enum Route {
    Mock(Generator),
    UnknownApi,
    Static,
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mock(_) => f.write_str("Mock"),
            Self::UnknownApi => f.write_str("UnknownApi"),
            Self::Static => f.write_str("Static"),
        }
    }
}

pub fn resolve(path: &str) -> Route {
    if !path.starts_with(API_PREFIX) {
        return Route::Static;
    }
    ENDPOINTS
        .iter()
        .find(|(endpoint, _)| *endpoint == path)
        .map_or(Route::UnknownApi, |(_, generator)| Route::Mock(*generator))
}

/// Run a generator with a fresh context and the thread-local random source
pub fn serve_mock(generator: Generator, port: u16, is_head: bool) -> Response<Full<Bytes>> {
    let ctx = MockContext::now(port);
    let payload = generator(&ctx, &mut rand::thread_rng());
    json_response(StatusCode::OK, &payload, is_head)
}
