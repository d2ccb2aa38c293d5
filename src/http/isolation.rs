//! Cross-origin isolation decorator.
//!
//! Browsers only grant access to shared-memory features (for example
//! `SharedArrayBuffer` backing threaded wasm) on pages whose responses opt
//! in to cross-origin isolation. The opt-in is a fixed pair of response
//! headers, and it must be present on every response the server emits,
//! not just document loads.

use hyper::header::{HeaderName, HeaderValue};
use hyper::Response;

pub const EMBEDDER_POLICY: &str = "cross-origin-embedder-policy";
pub const OPENER_POLICY: &str = "cross-origin-opener-policy";

const EMBEDDER_POLICY_VALUE: &str = "require-corp";
const OPENER_POLICY_VALUE: &str = "same-origin";

/// Append the two isolation headers to a finished response.
///
/// Applied unconditionally, whatever the status code, after the base
/// handler has produced the response.
pub fn apply_isolation_headers<B>(mut response: Response<B>) -> Response<B> {
    let headers = response.headers_mut();
    headers.insert(
        HeaderName::from_static(EMBEDDER_POLICY),
        HeaderValue::from_static(EMBEDDER_POLICY_VALUE),
    );
    headers.insert(
        HeaderName::from_static(OPENER_POLICY),
        HeaderValue::from_static(OPENER_POLICY_VALUE),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::Full;
    use hyper::body::Bytes;

    fn header<B>(response: &Response<B>, name: &str) -> Option<String> {
        response
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    }

    #[test]
    fn test_headers_added_to_ok_response() {
        let response = Response::new(Full::new(Bytes::from("body")));
        let response = apply_isolation_headers(response);

        assert_eq!(
            header(&response, EMBEDDER_POLICY).as_deref(),
            Some("require-corp")
        );
        assert_eq!(
            header(&response, OPENER_POLICY).as_deref(),
            Some("same-origin")
        );
    }

    #[test]
    fn test_headers_added_regardless_of_status() {
        for status in [200u16, 304, 404, 405] {
            let response = Response::builder()
                .status(status)
                .body(Full::new(Bytes::new()))
                .expect("response should build");
            let response = apply_isolation_headers(response);

            assert_eq!(
                header(&response, EMBEDDER_POLICY).as_deref(),
                Some("require-corp"),
                "missing COEP on status {status}"
            );
            assert_eq!(
                header(&response, OPENER_POLICY).as_deref(),
                Some("same-origin"),
                "missing COOP on status {status}"
            );
        }
    }

    #[test]
    fn test_existing_values_overwritten() {
        let response = Response::builder()
            .header(OPENER_POLICY, "unsafe-none")
            .body(Full::new(Bytes::new()))
            .expect("response should build");
        let response = apply_isolation_headers(response);

        assert_eq!(
            header(&response, OPENER_POLICY).as_deref(),
            Some("same-origin")
        );
        assert_eq!(response.headers().get_all(OPENER_POLICY).iter().count(), 1);
    }
}
