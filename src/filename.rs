//! Filename choice for a download URL.
//!
//! The last path segment of the URL is only a hint; it gets sanitized for
//! on-disk use, and a fixed fallback covers URLs with no usable segment.

use url::Url;

/// Fallback used when the URL yields no usable name.
pub const DEFAULT_FILE_NAME: &str = "download.bin";

/// Linux NAME_MAX.
const NAME_MAX: usize = 255;

/// Last non-empty path segment of `url`, as a filename hint.
///
/// Returns `None` if the URL does not parse or the path is empty, root, or
/// a dot segment. Query and fragment never leak into the name.
pub fn filename_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let segment = parsed.path().rsplit('/').find(|s| !s.is_empty())?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

/// Sanitizes a candidate filename for on-disk use.
///
/// Separators, NUL, control characters, and whitespace become `_`, runs of
/// `_` collapse, edge dots and underscores are trimmed, and the result is
/// capped at 255 bytes on a char boundary.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        let mapped = match c {
            '/' | '\\' | '\0' => '_',
            c if c.is_control() || c.is_whitespace() => '_',
            c => c,
        };
        if mapped == '_' && out.ends_with('_') {
            continue;
        }
        out.push(mapped);
    }
    let trimmed = out.trim_matches(|c: char| c == '_' || c == '.');
    let mut take = trimmed.len().min(NAME_MAX);
    while take > 0 && !trimmed.is_char_boundary(take) {
        take -= 1;
    }
    trimmed[..take].to_string()
}

/// Filename for `url`: sanitized last path segment, or `download.bin`.
pub fn guess_filename(url: &str) -> String {
    match filename_from_url(url) {
        Some(segment) => {
            let clean = sanitize_filename(&segment);
            if clean.is_empty() {
                DEFAULT_FILE_NAME.to_string()
            } else {
                clean
            }
        }
        None => DEFAULT_FILE_NAME.to_string(),
    }
}
