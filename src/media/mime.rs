//! MIME type resolution for attachments.
//!
//! Explicit metadata stored in the archive always wins. Extension lookup is a
//! best-effort fallback for rows where the MIME column is missing or blank.
//!
//! CHANGELOG:
//! - 02/14/2026 - Resolver expressed as ordered step list
//! - 02/11/2026 - Initial implementation

use super::path::extension;

/// Sentinel returned when nothing identifies the attachment type.
pub const UNKNOWN_MIME: &str = "unknown/unknown";

/// Known extensions (lowercase, no dot) and their MIME types.
const MIME_BY_EXTENSION: &[(&str, &str)] = &[
    // Images
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("webp", "image/webp"),
    ("gif", "image/gif"),
    ("heic", "image/heic"),
    ("heif", "image/heif"),
    // Video
    ("mp4", "video/mp4"),
    ("mov", "video/quicktime"),
    ("m4v", "video/x-m4v"),
    ("webm", "video/webm"),
    ("3gp", "video/3gpp"),
    // Audio
    ("opus", "audio/ogg; codecs=opus"),
    ("ogg", "audio/ogg"),
    ("mp3", "audio/mpeg"),
    ("m4a", "audio/mp4"),
    ("wav", "audio/wav"),
    ("aac", "audio/aac"),
    // Documents
    ("pdf", "application/pdf"),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    ("xls", "application/vnd.ms-excel"),
    (
        "xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    ("ppt", "application/vnd.ms-powerpoint"),
    (
        "pptx",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    ),
    ("txt", "text/plain"),
    ("csv", "text/csv"),
    ("vcf", "text/vcard"),
];

/// One step of the resolver chain.
type MimeStep = fn(Option<&str>, Option<&str>, Option<&str>) -> Option<String>;

/// Resolution order: explicit value, file name extension, file path extension.
const MIME_STEPS: &[MimeStep] = &[from_explicit, from_file_name, from_file_path];

/// Look up a MIME type by extension (case-insensitive).
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    let ext = ext.to_lowercase();
    MIME_BY_EXTENSION
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
}

/// Best known MIME type for an attachment. Never fails.
pub fn resolve_mime(
    explicit_mime: Option<&str>,
    file_name: Option<&str>,
    file_path: Option<&str>,
) -> String {
    MIME_STEPS
        .iter()
        .find_map(|step| step(explicit_mime, file_name, file_path))
        .unwrap_or_else(|| UNKNOWN_MIME.to_string())
}

fn from_explicit(explicit: Option<&str>, _: Option<&str>, _: Option<&str>) -> Option<String> {
    explicit
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

fn from_file_name(_: Option<&str>, file_name: Option<&str>, _: Option<&str>) -> Option<String> {
    from_extension_of(file_name)
}

fn from_file_path(_: Option<&str>, _: Option<&str>, file_path: Option<&str>) -> Option<String> {
    from_extension_of(file_path)
}

fn from_extension_of(value: Option<&str>) -> Option<String> {
    extension(value)
        .and_then(|ext| mime_for_extension(&ext))
        .map(str::to_string)
}
