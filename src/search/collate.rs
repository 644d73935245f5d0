//! French label ordering for filter menus
//!
//! Labels are compared on a folded key first: lowercase, ligatures spelled
//! out and accents removed, so "Œuf" lands next to "Oeuf" and "Épice" next
//! to "epice". Ties on the folded key are broken on the unfolded lowercase
//! form, then lowercase before uppercase, then raw code points, which makes
//! the order total and deterministic.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Accent- and case-insensitive key for a label
#[must_use]
pub fn sort_key(label: &str) -> String {
    let mut key = String::with_capacity(label.len());
    for c in label.to_lowercase().nfd() {
        match c {
            'œ' => key.push_str("oe"),
            'æ' => key.push_str("ae"),
            'ß' => key.push_str("ss"),
            c if is_combining_mark(c) => {}
            c => key.push(c),
        }
    }
    key
}

/// Full ordering key: folded key, lowercase form, case pattern, raw label
///
/// In the case pattern `false` (lowercase) sorts before `true`.
fn collation_key(label: &str) -> (String, String, Vec<bool>, String) {
    (
        sort_key(label),
        label.to_lowercase(),
        label.chars().map(char::is_uppercase).collect(),
        label.to_string(),
    )
}

/// Compare two labels using French, case- and diacritic-insensitive rules
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

/// Sort labels in place, in [`compare`] order
///
/// Each key is computed once per label.
pub fn sort_labels(labels: &mut [String]) {
    labels.sort_by_cached_key(|label| collation_key(label));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(input: &[&str]) -> Vec<String> {
        let mut labels: Vec<String> = input.iter().map(ToString::to_string).collect();
        sort_labels(&mut labels);
        labels
    }

    #[test]
    fn test_sort_key_folds_accents_and_ligatures() {
        assert_eq!(sort_key("Œuf"), "oeuf");
        assert_eq!(sort_key("Crème Fraîche"), "creme fraiche");
        assert_eq!(sort_key("Épice"), "epice");
    }

    #[test]
    fn test_case_insensitive_order() {
        assert_eq!(sorted(&["Lait", "beurre", "Ananas"]), vec!["Ananas", "beurre", "Lait"]);
    }

    #[test]
    fn test_ligature_adjacent_to_spelled_out_form() {
        assert_eq!(
            sorted(&["Lait", "beurre", "Œuf", "oeuf"]),
            vec!["beurre", "Lait", "oeuf", "Œuf"]
        );
        assert_eq!(
            sorted(&["Œuf", "Olive", "Oeuf", "Oignon"]),
            vec!["Oeuf", "Œuf", "Oignon", "Olive"]
        );
    }

    #[test]
    fn test_accented_sorts_with_base_letter() {
        assert_eq!(
            sorted(&["Fraise", "Épinard", "Eau", "farine"]),
            vec!["Eau", "Épinard", "farine", "Fraise"]
        );
    }

    #[test]
    fn test_sort_labels_agrees_with_compare() {
        let labels = sorted(&["Œuf", "oeuf", "OEUF", "Épice", "epice", "Lait", "lait", "Lait de coco", "beurre"]);
        for pair in labels.windows(2) {
            assert_eq!(compare(&pair[0], &pair[1]), Ordering::Less, "{pair:?}");
        }
        assert_eq!(&labels[..2], ["beurre", "epice"]);
    }

    #[test]
    fn test_lowercase_before_uppercase_on_tie() {
        assert_eq!(compare("lait", "Lait"), Ordering::Less);
        assert_eq!(compare("Lait", "Lait"), Ordering::Equal);
    }
}
