//! Magic numbers: more than two numeric literals anywhere in the snippet.

use super::PatternCheck;
use crate::{Category, Issue, LineRef, Severity, SourceText};
use regex::Regex;

/// Highest numeric-literal count that goes unreported
const ALLOWED_LITERALS: usize = 2;

/// Check for an excess of bare numeric literals
pub struct MagicNumbersCheck {
    pattern: Regex,
}

impl MagicNumbersCheck {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"\d+").unwrap(),
        }
    }
}

impl Default for MagicNumbersCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternCheck for MagicNumbersCheck {
    fn name(&self) -> &'static str {
        "magic-numbers"
    }

    fn penalty(&self) -> f64 {
        0.5
    }

    fn check(&self, source: &SourceText) -> Vec<Issue> {
        let count = self.pattern.find_iter(source.as_str()).count();
        if count <= ALLOWED_LITERALS {
            return Vec::new();
        }
        vec![Issue {
            severity: Severity::Low,
            category: Category::Maintainability,
            description: "Magic numbers found in code".to_string(),
            line: LineRef::Multiple,
            fix: "Extract numbers into named constants".to_string(),
        }]
    }
}
