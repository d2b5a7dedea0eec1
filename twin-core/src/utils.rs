//! Shared naming helpers.

use std::path::PathBuf;

/// Uppercase the first character (e.g., "firstName" -> "FirstName")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first character (e.g., "Customer" -> "customer")
pub fn uncapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Turn a dotted namespace into a relative directory path
/// (e.g., "com.acme.domain" -> "com/acme/domain")
pub fn package_path(namespace: &str) -> PathBuf {
    namespace
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect()
}
