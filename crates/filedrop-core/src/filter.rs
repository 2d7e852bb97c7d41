//! Upload filtering policy.
//!
//! Uploads are screened against two fixed denylists covering executables,
//! scripts, installers, and browser-executed formats. The extension check runs
//! first, then the declared content type; anything not listed is accepted.

use std::collections::HashSet;
use std::sync::LazyLock;

/// File extensions rejected regardless of declared content type.
static BLOCKED_EXTENSIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "exe", "bat", "cmd", "com", "msi", "scr", "vbs", "ps1", "sh", "bash", "app", "dmg",
        "apk", "jar", "deb", "rpm", "php", "asp", "aspx", "jsp", "cgi", "pl", "py", "rb",
        "html", "htm", "hta", "lnk", "pif", "reg", "dll", "sys",
    ])
});

/// Declared content types rejected even when the extension passes.
static BLOCKED_CONTENT_TYPES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "application/x-msdownload",
        "application/x-executable",
        "application/x-sh",
        "application/x-bat",
        "application/x-msdos-program",
        "text/html",
        "text/javascript",
        "application/javascript",
        "application/x-httpd-php",
    ])
});

/// Reasons the filter rejects an upload.
#[derive(Debug, thiserror::Error)]
pub enum FileRejected {
    #[error("File type not allowed: .{extension} files are blocked for security reasons")]
    Extension { extension: String },

    #[error("File type not allowed: {content_type} is blocked for security reasons")]
    ContentType { content_type: String },
}

/// Check a declared filename and content type against the denylists.
///
/// The extension check runs before the content type check, so a file matching
/// both denylists is always reported by its extension.
pub fn check_upload(filename: &str, content_type: &str) -> Result<(), FileRejected> {
    let extension = file_extension(filename);
    if BLOCKED_EXTENSIONS.contains(extension.as_str()) {
        return Err(FileRejected::Extension { extension });
    }

    if BLOCKED_CONTENT_TYPES.contains(content_type) {
        return Err(FileRejected::ContentType {
            content_type: content_type.to_string(),
        });
    }

    Ok(())
}

/// Extension of `filename`: the lowercased part after the last `.`, or the
/// whole lowercased name when there is no dot. A dotless name only matches a
/// denylist entry on exact equality.
fn file_extension(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((_, extension)) => extension.to_lowercase(),
        None => filename.to_lowercase(),
    }
}
