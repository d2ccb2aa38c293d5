//! Directory listing page, generated when a requested directory has no
//! index file.

/// One directory entry in a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Render the listing HTML for a directory.
///
/// Entries are sorted by name; directories carry a trailing `/` in both
/// the displayed name and the link target. Names are HTML-escaped for
/// display and percent-encoded in hrefs.
pub fn render_listing(display_path: &str, mut entries: Vec<ListingEntry>) -> String {
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    let title = format!("Directory listing for {}", html_escape(display_path));
    let mut items = String::new();
    for entry in &entries {
        let suffix = if entry.is_dir { "/" } else { "" };
        items.push_str(&format!(
            "<li><a href=\"{href}{suffix}\">{name}{suffix}</a></li>\n",
            href = percent_encode(&entry.name),
            name = html_escape(&entry.name),
        ));
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n<hr>\n\
         <ul>\n{items}</ul>\n<hr>\n</body>\n</html>\n"
    )
}

/// Escape text for embedding in HTML.
pub fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Percent-encode a path segment for use in an href.
///
/// Unreserved characters (RFC 3986) pass through; everything else is
/// encoded byte-wise.
pub fn percent_encode(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char);
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}
