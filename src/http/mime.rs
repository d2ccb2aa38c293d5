//! Content-Type lookup by file extension.

/// Map a file extension to its `Content-Type`.
///
/// The table is weighted toward what a cross-origin-isolated web build
/// actually ships: HTML, scripts, wasm, and their assets. Anything
/// unrecognized is served as `application/octet-stream`.
///
/// # Examples
/// ```
/// use coiserve::http::mime::content_type_for;
/// assert_eq!(content_type_for(Some("wasm")), "application/wasm");
/// assert_eq!(content_type_for(None), "application/octet-stream");
/// ```
pub fn content_type_for(extension: Option<&str>) -> &'static str {
    match extension {
        // Application code
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("js" | "mjs") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("css") => "text/css",

        // Text
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Media and documents
        Some("mp3") => "audio/mpeg",
        Some("mp4") => "video/mp4",
        Some("pdf") => "application/pdf",

        _ => "application/octet-stream",
    }
}
