//! MIME classification by file extension
//!
//! Extension lookup with an octet-stream fallback, plus the two predicates
//! the UI needs: "is this binary" (no text preview) and "can the browser show
//! this inline" (image/video/audio/PDF/text).

/// MIME type used when the extension is unknown
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Returns the extension of the last path segment, without the dot
pub fn extension_of(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() => Some(&name[idx + 1..]),
        _ => None,
    }
}

/// Returns the MIME type for a path based on its extension
pub fn mime_type_for(path: &str) -> &'static str {
    let ext = match extension_of(path) {
        Some(ext) => ext.to_ascii_lowercase(),
        None => return FALLBACK_MIME,
    };

    match ext.as_str() {
        // Text
        "txt" | "log" | "conf" | "cfg" | "ini" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",

        // Code
        "go" => "text/x-go",
        "rs" => "text/x-rust",
        "js" => "application/javascript",
        "ts" => "application/typescript",
        "py" => "text/x-python",
        "java" => "text/x-java-source",
        "c" | "h" => "text/x-c",
        "cpp" => "text/x-c++",
        "rb" => "text/x-ruby",
        "sh" => "application/x-sh",

        // Web
        "html" | "htm" => "text/html",
        "css" => "text/css",

        // Data
        "json" => "application/json",
        "xml" => "application/xml",
        "yaml" | "yml" => "application/x-yaml",
        "toml" => "application/toml",

        // Images
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "ico" => "image/x-icon",

        // Documents
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",

        // Archives
        "zip" => "application/zip",
        "tar" => "application/x-tar",
        "gz" => "application/gzip",
        "7z" => "application/x-7z-compressed",

        // Audio / video
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",

        _ => FALLBACK_MIME,
    }
}

/// Checks whether a MIME type represents binary content
pub fn is_binary(mime_type: &str) -> bool {
    const TEXT_FAMILIES: &[&str] = &[
        "text/",
        "application/json",
        "application/xml",
        "application/javascript",
        "application/typescript",
        "application/x-yaml",
        "application/toml",
        "application/x-sh",
    ];

    !TEXT_FAMILIES.iter().any(|t| mime_type.starts_with(t))
}

/// Checks whether a MIME type can be displayed inline by a browser
pub fn is_inline(mime_type: &str) -> bool {
    const INLINE_FAMILIES: &[&str] = &[
        "image/",
        "video/",
        "audio/",
        "text/",
        "application/pdf",
        "application/json",
        "application/xml",
        "application/javascript",
    ];

    INLINE_FAMILIES.iter().any(|t| mime_type.starts_with(t))
}
