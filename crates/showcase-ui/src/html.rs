//! Markup helpers.

pub use showcase_streaming::html_escape;

/// Join the non-empty class names with single spaces.
pub(crate) fn class_list(classes: &[&str]) -> String {
    classes
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list_skips_empty() {
        assert_eq!(class_list(&["card", "", "  ", "featured "]), "card featured");
    }
}
