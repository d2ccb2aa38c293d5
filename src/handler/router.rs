//! Request entry point: method gating, context extraction, dispatch to
//! the static tree, and the isolation decorator over every response.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger::{self, AccessEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Per-request context handed to the static file responder.
pub struct RequestContext<'a> {
    /// Raw request path, still percent-encoded.
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
}

/// Handle one HTTP request.
///
/// Every path through here, including 405 and 404, ends in
/// [`http::apply_isolation_headers`]; the service is infallible so a bad
/// request can never tear down the connection.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let version = version_label(req.version());

    let response = if method == Method::GET || method == Method::HEAD {
        let ctx = RequestContext {
            path: &path,
            is_head: method == Method::HEAD,
            if_none_match: req
                .headers()
                .get("if-none-match")
                .and_then(|v| v.to_str().ok())
                .map(ToString::to_string),
        };
        static_files::serve_path(&ctx, &state).await
    } else {
        logger::log_warning(&format!("Method not allowed: {method}"));
        http::build_405_response()
    };

    if state.config.logging.access_log {
        let mut entry = AccessEntry::new(peer_addr.to_string(), method.to_string(), path);
        entry.http_version = version.to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = content_length(&response);
        logger::log_access(&entry);
    }

    Ok(http::apply_isolation_headers(response))
}

fn content_length<B>(response: &Response<B>) -> usize {
    response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

fn version_label(version: Version) -> &'static str {
    if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_2 {
        "2"
    } else {
        "1.1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::isolation::{EMBEDDER_POLICY, OPENER_POLICY};

    fn temp_state(tag: &str) -> Arc<AppState> {
        let dir = std::env::temp_dir().join(format!("coiserve-router-{tag}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<html>OK</html>").unwrap();
        let root = dir.canonicalize().unwrap();

        let mut config = crate::config::Config::load().unwrap();
        config.resources.root_dir = root.clone();
        config.logging.access_log = false;
        Arc::new(AppState::new(config, root))
    }

    fn peer() -> SocketAddr {
        "127.0.0.1:54321".parse().unwrap()
    }

    fn request(method: Method, path: &str) -> Request<Full<Bytes>> {
        Request::builder()
            .method(method)
            .uri(path)
            .body(Full::new(Bytes::new()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_get_existing_file() {
        let state = temp_state("get");
        let resp = handle_request(request(Method::GET, "/index.html"), state, peer())
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get(OPENER_POLICY).unwrap(),
            "same-origin"
        );
        assert_eq!(
            resp.headers().get(EMBEDDER_POLICY).unwrap(),
            "require-corp"
        );
    }

    #[tokio::test]
    async fn test_404_still_isolated() {
        let state = temp_state("missing");
        let resp = handle_request(request(Method::GET, "/nope.js"), state, peer())
            .await
            .unwrap();
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers().get(OPENER_POLICY).unwrap(), "same-origin");
        assert_eq!(resp.headers().get(EMBEDDER_POLICY).unwrap(), "require-corp");
    }

    #[tokio::test]
    async fn test_post_rejected_with_isolation_headers() {
        let state = temp_state("post");
        let resp = handle_request(request(Method::POST, "/index.html"), state, peer())
            .await
            .unwrap();
        assert_eq!(resp.status(), 405);
        assert_eq!(resp.headers().get("Allow").unwrap(), "GET, HEAD");
        assert_eq!(resp.headers().get(OPENER_POLICY).unwrap(), "same-origin");
    }

    #[tokio::test]
    async fn test_head_keeps_length() {
        let state = temp_state("head");
        let resp = handle_request(request(Method::HEAD, "/index.html"), state, peer())
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers().get("Content-Length").unwrap(), "15");
    }

    #[test]
    fn test_version_label() {
        assert_eq!(version_label(Version::HTTP_10), "1.0");
        assert_eq!(version_label(Version::HTTP_11), "1.1");
        assert_eq!(version_label(Version::HTTP_2), "2");
    }
}
