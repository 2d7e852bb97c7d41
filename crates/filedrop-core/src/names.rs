//! Internal storage names.
//!
//! Stored blobs are never named after client input. Every accepted upload gets
//! a fresh server-generated name, and that name is the only key accepted for
//! deletion.

use uuid::Uuid;

/// Generate a fresh internal name for a stored blob.
///
/// Simple (hyphen-free) UUIDv4 form: 32 lowercase hex characters. Generated
/// names always satisfy [`is_safe_internal_name`].
pub fn generate_internal_name() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Whether `name` is usable as a bare filename inside the upload directory.
///
/// Rejects empty names and anything containing `..`, `/`, or `\`. This is the
/// gate on the deletion path; the storage backend applies the same rule to
/// every key it maps to a filesystem path.
pub fn is_safe_internal_name(name: &str) -> bool {
    !name.is_empty() && !name.contains("..") && !name.contains('/') && !name.contains('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_name_is_32_hex_chars() {
        let name = generate_internal_name();
        assert_eq!(name.len(), 32);
        assert!(name.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generated_names_are_unique() {
        assert_ne!(generate_internal_name(), generate_internal_name());
    }

    #[test]
    fn test_generated_name_is_safe() {
        assert!(is_safe_internal_name(&generate_internal_name()));
    }

    #[test]
    fn test_rejects_traversal_sequences() {
        assert!(!is_safe_internal_name(".."));
        assert!(!is_safe_internal_name("../../etc/passwd"));
        assert!(!is_safe_internal_name("..\\windows\\system32"));
    }

    #[test]
    fn test_rejects_separators() {
        assert!(!is_safe_internal_name("a/b"));
        assert!(!is_safe_internal_name("a\\b"));
        assert!(!is_safe_internal_name("/absolute"));
    }

    #[test]
    fn test_rejects_empty_name() {
        assert!(!is_safe_internal_name(""));
    }

    #[test]
    fn test_accepts_plain_names() {
        assert!(is_safe_internal_name("d41d8cd98f00b204e9800998ecf8427e"));
        assert!(is_safe_internal_name("file.txt"));
    }
}
