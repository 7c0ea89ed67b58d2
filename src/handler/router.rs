//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, `/api/` versus
//! static dispatch, and the per-request access log line.

use crate::api::{self, Route};
use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    drop(req);

    let response = route(&method, &path, &state).await;

    if state.config.logging.access_log {
        logger::log_access(&AccessLogEntry::new(
            method.as_str(),
            &path,
            response.status().as_u16(),
        ));
    }

    Ok(response)
}

/// Produce the response for a method and path; the query string never reaches here
pub async fn route(method: &Method, path: &str, state: &AppState) -> Response<Full<Bytes>> {
    // 1. Check HTTP method
    let is_head = match *method {
        Method::GET => false,
        Method::HEAD => true,
        Method::OPTIONS => return http::build_options_response(),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method} {path}"));
            return http::build_405_response();
        }
    };

    // 2. Dispatch by path
    match api::resolve(path) {
        Route::Mock(generator) => api::serve_mock(generator, state.port, is_head),
        Route::UnknownApi => api::endpoint_not_found(path, is_head),
        Route::Static => {
            static_files::serve(
                &state.static_root(),
                path,
                &state.config.http.index_files,
                is_head,
            )
            .await
        }
    }
}
