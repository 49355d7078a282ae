use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::{Error, Result};

pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

pub const DEFAULT_ALLOWED_TYPES: [&str; 3] = ["application/pdf", DOCX_MIME_TYPE, "text/plain"];

static UNSAFE_FILENAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\-.]").unwrap());

const MIME_TYPES: &[(&str, &str)] = &[
    ("pdf", "application/pdf"),
    ("docx", DOCX_MIME_TYPE),
    ("txt", "text/plain"),
    ("text", "text/plain"),
    ("md", "text/markdown"),
    ("csv", "text/csv"),
    ("html", "text/html"),
    ("htm", "text/html"),
    ("json", "application/json"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("wav", "audio/wav"),
];

/// MIME type from the file extension, case-insensitive
pub fn guess_mime_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    MIME_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
}

/// Preferred extension for a MIME type (first entry in the table)
pub fn extension_for(mime_type: &str) -> Option<&'static str> {
    MIME_TYPES
        .iter()
        .find(|(_, mime)| *mime == mime_type)
        .map(|(ext, _)| *ext)
}

/// Replace everything but word characters, `-` and `.` with `_`
pub fn sanitize_file_name(name: &str) -> String {
    UNSAFE_FILENAME_CHARS.replace_all(name, "_").into_owned()
}

/// Copy `source` into `folder` if its type is allowed.
///
/// The stored name is the sanitized stem plus the canonical extension of the
/// detected type, so `My Report.PDF` lands as `My_Report.pdf`.
pub fn upload_file(source: &Path, folder: &Path, allowed_types: &[String]) -> Result<PathBuf> {
    let mime_type = guess_mime_type(source)
        .ok_or_else(|| Error::UploadRejected(format!("unknown type: {}", source.display())))?;

    if !allowed_types.iter().any(|t| t == mime_type) {
        return Err(Error::UploadRejected(mime_type.to_string()));
    }

    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            Error::InvalidOperation(format!("no file name in {}", source.display()))
        })?;

    let ext = extension_for(mime_type).unwrap_or("bin");
    let file_name = format!("{}.{}", sanitize_file_name(stem), ext);

    std::fs::create_dir_all(folder)?;
    let target = folder.join(file_name);
    std::fs::copy(source, &target)?;

    tracing::info!(
        source = %source.display(),
        target = %target.display(),
        mime_type,
        "file uploaded"
    );
    Ok(target)
}
