/// Thematic break: a line made only of three or more `-`.
pub struct ThematicRule;

impl ThematicRule {
    pub const DASH: char = '-';
    pub const MIN_LEN: usize = 3;

    pub fn matches(trimmed: &str) -> bool {
        trimmed.len() >= Self::MIN_LEN && trimmed.chars().all(|c| c == Self::DASH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_or_more_dashes() {
        assert!(ThematicRule::matches("---"));
        assert!(ThematicRule::matches("----------"));
    }

    #[test]
    fn short_or_mixed_runs_are_not_rules() {
        assert!(!ThematicRule::matches("--"));
        assert!(!ThematicRule::matches("- - -"));
        assert!(!ThematicRule::matches("***"));
        assert!(!ThematicRule::matches(""));
    }
}
