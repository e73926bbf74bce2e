// Line-by-line comparison of captured output against expectations

use serde::Serialize;

/// First point where captured output diverges from the expectation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// 1-based line number
    pub line: usize,
    /// Expected text at that line, `None` when the output ran longer
    pub expected: Option<String>,
    /// Captured text at that line, `None` when the output ran short
    pub actual: Option<String>,
}

/// Verdict of comparing a run against its expected output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum ExpectationCheck {
    Matched,
    Mismatched(Mismatch),
    NotChecked,
}

impl ExpectationCheck {
    pub fn is_checked(&self) -> bool {
        !matches!(self, Self::NotChecked)
    }

    /// `Some(true)` when matched, `Some(false)` when not, `None` when unchecked
    pub fn matched(&self) -> Option<bool> {
        match self {
            Self::Matched => Some(true),
            Self::Mismatched(_) => Some(false),
            Self::NotChecked => None,
        }
    }
}

/// Compare in order; equal length and byte-identical lines are required.
pub fn compare_lines(expected: &[String], actual: &[String]) -> ExpectationCheck {
    let longest = expected.len().max(actual.len());

    for index in 0..longest {
        let want = expected.get(index);
        let got = actual.get(index);
        if want != got {
            return ExpectationCheck::Mismatched(Mismatch {
                line: index + 1,
                expected: want.cloned(),
                actual: got.cloned(),
            });
        }
    }

    ExpectationCheck::Matched
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.expected, &self.actual) {
            (Some(want), Some(got)) => {
                write!(f, "line {}: expected {:?}, got {:?}", self.line, want, got)
            }
            (Some(want), None) => write!(f, "line {}: expected {:?}, got nothing", self.line, want),
            (None, Some(got)) => write!(f, "line {}: unexpected {:?}", self.line, got),
            (None, None) => write!(f, "line {}", self.line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_match() {
        let check = compare_lines(&lines(&["a", "b"]), &lines(&["a", "b"]));
        assert_eq!(check, ExpectationCheck::Matched);
        assert_eq!(check.matched(), Some(true));
    }

    #[test]
    fn test_both_empty_match() {
        assert_eq!(compare_lines(&[], &[]), ExpectationCheck::Matched);
    }

    #[test]
    fn test_single_character_difference() {
        let check = compare_lines(&lines(&["hello"]), &lines(&["hellp"]));
        assert_eq!(
            check,
            ExpectationCheck::Mismatched(Mismatch {
                line: 1,
                expected: Some("hello".into()),
                actual: Some("hellp".into()),
            })
        );
    }

    #[test]
    fn test_output_too_short() {
        let check = compare_lines(&lines(&["a", "b"]), &lines(&["a"]));
        match check {
            ExpectationCheck::Mismatched(m) => {
                assert_eq!(m.line, 2);
                assert_eq!(m.actual, None);
                assert_eq!(m.to_string(), "line 2: expected \"b\", got nothing");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_output_too_long() {
        let check = compare_lines(&lines(&["a"]), &lines(&["a", "extra"]));
        assert_eq!(check.matched(), Some(false));
    }

    #[test]
    fn test_trailing_whitespace_counts() {
        let check = compare_lines(&lines(&["a"]), &lines(&["a "]));
        assert!(check.is_checked());
        assert_eq!(check.matched(), Some(false));
    }

    #[test]
    fn test_not_checked() {
        assert!(!ExpectationCheck::NotChecked.is_checked());
        assert_eq!(ExpectationCheck::NotChecked.matched(), None);
    }
}
