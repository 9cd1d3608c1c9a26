/// Derives the flag spellings of an option from its space-separated names.
///
/// One-character names get a single dash, longer names get two. The order of
/// the input is kept.
///
/// ```
/// use argbind_core::names::option_flags;
///
/// assert_eq!(option_flags("f force"), vec!["-f", "--force"]);
/// ```
#[must_use]
pub fn option_flags(names: &str) -> Vec<String> {
    names
        .split(' ')
        .filter(|name| !name.is_empty())
        .map(|name| {
            let prefix = if name.chars().count() == 1 { "-" } else { "--" };
            format!("{prefix}{name}")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_and_long() {
        assert_eq!(option_flags("f force"), vec!["-f", "--force"]);
    }

    #[test]
    fn test_single_short() {
        assert_eq!(option_flags("x"), vec!["-x"]);
    }

    #[test]
    fn test_order_is_kept() {
        assert_eq!(option_flags("verbose v"), vec!["--verbose", "-v"]);
    }

    #[test]
    fn test_repeated_spaces_are_skipped() {
        assert_eq!(option_flags("  n  dry-run "), vec!["-n", "--dry-run"]);
    }

    #[test]
    fn test_multibyte_single_character() {
        assert_eq!(option_flags("é"), vec!["-é"]);
    }

    #[test]
    fn test_empty() {
        assert!(option_flags("").is_empty());
    }
}
