use std::path::Path;

pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Maps a file extension to the MIME type used in the data URI.
/// Accepts an optional leading dot and ignores case. Unknown or empty
/// extensions fall back to `application/octet-stream`.
pub fn mime_for_extension(ext: &str) -> &'static str {
    let ext = ext.trim_start_matches('.').to_ascii_lowercase();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => FALLBACK_MIME,
    }
}

pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_default();

    mime_for_extension(&ext)
}
