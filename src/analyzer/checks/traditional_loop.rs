//! Traditional `for (...)` loops that could be array methods.

use super::PatternCheck;
use crate::{Category, Issue, Severity, SourceText};
use regex::Regex;

/// Check for traditional for-loops
pub struct TraditionalLoopCheck {
    pattern: Regex,
}

impl TraditionalLoopCheck {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"for\s*\(").unwrap(),
        }
    }
}

impl Default for TraditionalLoopCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternCheck for TraditionalLoopCheck {
    fn name(&self) -> &'static str {
        "traditional-loop"
    }

    fn penalty(&self) -> f64 {
        0.5
    }

    fn check(&self, source: &SourceText) -> Vec<Issue> {
        if !self.pattern.is_match(source.as_str()) {
            return Vec::new();
        }
        // One issue regardless of how many loops match
        vec![Issue {
            severity: Severity::Low,
            category: Category::Modernization,
            description: "Traditional for-loops found".to_string(),
            line: source.find_line("for"),
            fix: "Consider using Array methods like forEach(), map(), or filter()".to_string(),
        }]
    }
}
