//! Name slugs used as matching keys

/// Reduce a name to lowercase ASCII letters only.
///
/// `"Martin Kalanda-Phiri"` becomes `"martinkalandaphiri"`.
pub fn slugify_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}
