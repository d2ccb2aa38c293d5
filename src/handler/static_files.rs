//! Path resolution and file serving against the configured root.
//!
//! Request paths are percent-decoded, resolved under the canonical root
//! with a traversal guard, and answered with the file bytes, an index
//! file, a generated directory listing, or a 404.

use crate::config::AppState;
use crate::handler::listing::{self, ListingEntry};
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Serve a request path from the static tree.
pub async fn serve_path(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let decoded = percent_decode(ctx.path);
    let Some(resolved) = resolve_under_root(&decoded, &state.root_dir) else {
        return http::build_404_response();
    };

    if resolved.is_dir() {
        // Relative hrefs in listings and index pages require the trailing
        // slash; redirect like any standard static server.
        if !decoded.ends_with('/') {
            return http::build_redirect_response(&format!("{}/", ctx.path));
        }

        for index in &state.config.resources.index_files {
            let candidate = resolved.join(index);
            if candidate.is_file() {
                return serve_file(ctx, &candidate).await;
            }
        }

        return serve_listing(ctx, &decoded, &resolved).await;
    }

    serve_file(ctx, &resolved).await
}

/// Resolve a decoded request path to a canonical filesystem path under
/// `root`, or None for missing paths and blocked traversal attempts.
///
/// `root` must already be canonical; canonicalizing the candidate resolves
/// `..` and symlinks before the prefix check.
pub fn resolve_under_root(path: &str, root: &Path) -> Option<PathBuf> {
    let relative = path.trim_start_matches('/');
    let candidate = root.join(relative);

    // Missing paths fail canonicalization; that is the ordinary 404 case.
    let canonical = candidate.canonicalize().ok()?;

    if canonical.starts_with(root) {
        Some(canonical)
    } else {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            canonical.display()
        ));
        None
    }
}

async fn serve_file(ctx: &RequestContext<'_>, file_path: &Path) -> Response<Full<Bytes>> {
    let content = match fs::read(file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_path.display(),
                e
            ));
            return http::build_404_response();
        }
    };

    let etag = cache::etag_for(&content);
    if cache::etag_matches(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag);
    }

    let content_type = mime::content_type_for(file_path.extension().and_then(|e| e.to_str()));
    http::build_file_response(Bytes::from(content), content_type, &etag, ctx.is_head)
}

async fn serve_listing(
    ctx: &RequestContext<'_>,
    display_path: &str,
    dir: &Path,
) -> Response<Full<Bytes>> {
    let mut entries = Vec::new();
    let mut reader = match fs::read_dir(dir).await {
        Ok(r) => r,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to list directory '{}': {}",
                dir.display(),
                e
            ));
            return http::build_404_response();
        }
    };

    while let Ok(Some(entry)) = reader.next_entry().await {
        let is_dir = entry.file_type().await.is_ok_and(|t| t.is_dir());
        entries.push(ListingEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir,
        });
    }

    http::build_html_response(listing::render_listing(display_path, entries), ctx.is_head)
}

/// Decode `%XX` escapes in a request path. Invalid escapes pass through
/// unchanged; decoded bytes that are not valid UTF-8 are replaced.
pub fn percent_decode(path: &str) -> String {
    let bytes = path.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(high), Some(low)) = (hex_val(bytes[i + 1]), hex_val(bytes[i + 2])) {
                decoded.push((high << 4) | low);
                i += 3;
                continue;
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&decoded).into_owned()
}

const fn hex_val(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
