//! String canonicalisation for comparisons
//!
//! Every equality, substring and membership test in the search engine goes
//! through [`normalize`], on both sides of the comparison. Accents are kept:
//! "crème" and "creme" are different words here. Accent-insensitivity only
//! applies to ordering (see [`super::collate`]).

/// Lowercase a string for comparison
///
/// No trimming is done; callers that accept raw user input trim it first.
#[must_use]
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_unicode() {
        assert_eq!(normalize("ŒUF Crème"), "œuf crème");
        assert_eq!(normalize("Poêle À Crêpe"), "poêle à crêpe");
    }

    #[test]
    fn test_keeps_accents_and_whitespace() {
        assert_ne!(normalize("Crème"), normalize("Creme"));
        assert_eq!(normalize("  Lait "), "  lait ");
    }
}
