//! HTTP protocol helpers shared by the request handler: response builders,
//! MIME lookup, conditional-GET support, and the cross-origin isolation
//! decorator applied to every outgoing response.

pub mod cache;
pub mod isolation;
pub mod mime;
pub mod response;

pub use isolation::apply_isolation_headers;
pub use response::{
    build_304_response, build_404_response, build_405_response, build_file_response,
    build_html_response, build_redirect_response,
};
