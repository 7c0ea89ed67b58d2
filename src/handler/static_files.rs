//! Static file serving module
//!
//! Maps a request path to a file under the static root and serves its bytes.

use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Outcome of resolving a request path against the static root
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup {
    File(PathBuf),
    /// Directory requested without trailing slash; redirect to this location
    Redirect(String),
    NotFound,
}

/// Serve a static file for `path`, or the matching 301/404
pub async fn serve(
    root: &Path,
    path: &str,
    index_files: &[String],
    is_head: bool,
) -> Response<Full<Bytes>> {
    match lookup(root, path, index_files).await {
        Lookup::File(file_path) => match fs::read(&file_path).await {
            Ok(content) => {
                let content_type =
                    mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));
                http::build_file_response(content, content_type, is_head)
            }
            Err(e) => {
                logger::log_error(&format!(
                    "Failed to read file '{}': {}",
                    file_path.display(),
                    e
                ));
                http::build_404_response()
            }
        },
        Lookup::Redirect(target) => http::build_redirect_response(&target),
        Lookup::NotFound => http::build_404_response(),
    }
}

/// Resolve `path` under `root`, trying index files for directories
pub async fn lookup(root: &Path, path: &str, index_files: &[String]) -> Lookup {
    // Decode before the root guard so an encoded `..` is still caught by it
    let Ok(decoded) = urlencoding::decode(path) else {
        return Lookup::NotFound;
    };
    let relative = decoded.trim_start_matches('/');

    // Security: the resolved file must stay within the static root
    let root_canonical = match fs::canonicalize(root).await {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static root not found or inaccessible '{}': {e}",
                root.display()
            ));
            return Lookup::NotFound;
        }
    };

    // File not found is common (404), no need to log
    let Ok(candidate) = fs::canonicalize(root.join(relative)).await else {
        return Lookup::NotFound;
    };
    if !candidate.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            candidate.display()
        ));
        return Lookup::NotFound;
    }

    let Ok(metadata) = fs::metadata(&candidate).await else {
        return Lookup::NotFound;
    };
    if metadata.is_file() {
        return Lookup::File(candidate);
    }
    if !path.ends_with('/') {
        return Lookup::Redirect(format!("{path}/"));
    }

    for index_file in index_files {
        let index_path = candidate.join(index_file);
        if fs::metadata(&index_path)
            .await
            .is_ok_and(|m| m.is_file())
        {
            return Lookup::File(index_path);
        }
    }
    Lookup::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use hyper::StatusCode;

    fn index_files() -> Vec<String> {
        vec!["index.html".to_string(), "index.htm".to_string()]
    }

    #[tokio::test]
    async fn test_serves_file_with_content_type() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("style.css"), "body{}").unwrap();

        let resp = serve(dir.path(), "/style.css", &index_files(), false).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["content-type"], "text/css; charset=utf-8");
        assert_eq!(resp.headers()["content-length"], "6");
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, Bytes::from("body{}"));
    }

    #[tokio::test]
    async fn test_missing_file_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let resp = serve(dir.path(), "/nope.html", &index_files(), false).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>hi</h1>").unwrap();

        let resp = serve(dir.path(), "/", &index_files(), false).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["content-type"], "text/html; charset=utf-8");
    }

    #[tokio::test]
    async fn test_nested_directory_index_and_redirect() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("web")).unwrap();
        std::fs::write(dir.path().join("web").join("index.htm"), "x").unwrap();

        let found = lookup(dir.path(), "/web/", &index_files()).await;
        assert!(matches!(found, Lookup::File(p) if p.ends_with("web/index.htm")));

        let redirect = lookup(dir.path(), "/web", &index_files()).await;
        assert_eq!(redirect, Lookup::Redirect("/web/".to_string()));
    }

    #[tokio::test]
    async fn test_directory_without_index_is_404() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("empty")).unwrap();
        assert_eq!(
            lookup(dir.path(), "/empty/", &index_files()).await,
            Lookup::NotFound
        );
    }

    #[tokio::test]
    async fn test_percent_encoded_name_is_decoded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("my app.js"), "x").unwrap();

        let found = lookup(dir.path(), "/my%20app.js", &index_files()).await;
        assert!(matches!(found, Lookup::File(p) if p.ends_with("my app.js")));
    }

    #[tokio::test]
    async fn test_invalid_utf8_escape_is_404() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            lookup(dir.path(), "/%ff%fe.js", &index_files()).await,
            Lookup::NotFound
        );
    }

    #[tokio::test]
    async fn test_encoded_traversal_outside_root_blocked() {
        let outer = tempfile::tempdir().unwrap();
        let root = outer.path().join("root");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(outer.path().join("secret.txt"), "secret").unwrap();

        for path in ["/%2e%2e/secret.txt", "/%2E%2E%2Fsecret.txt"] {
            assert_eq!(
                lookup(&root, path, &index_files()).await,
                Lookup::NotFound,
                "{path}"
            );
        }
    }

    #[tokio::test]
    async fn test_traversal_outside_root_blocked() {
        let outer = tempfile::tempdir().unwrap();
        let root = outer.path().join("root");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(outer.path().join("secret.txt"), "secret").unwrap();

        assert_eq!(
            lookup(&root, "/../secret.txt", &index_files()).await,
            Lookup::NotFound
        );
    }
}
