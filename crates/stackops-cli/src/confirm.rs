// Confirmation gate for destructive commands

/// Only the exact literal "yes" confirms. Anything else, including
/// case or whitespace variants, declines.
pub(crate) fn confirms(input: &str) -> bool {
    input == "yes"
}

#[cfg(test)]
mod tests {
    use super::confirms;

    #[test]
    fn exact_literal_confirms() {
        assert!(confirms("yes"));
    }

    #[test]
    fn near_misses_decline() {
        assert!(!confirms(""));
        assert!(!confirms("y"));
        assert!(!confirms("YES"));
        assert!(!confirms("Yes"));
        assert!(!confirms("yes "));
        assert!(!confirms(" yes"));
        assert!(!confirms("no"));
    }
}
