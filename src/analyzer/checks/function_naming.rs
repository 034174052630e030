//! Named function declarations with identifiers under 3 characters.

use super::PatternCheck;
use crate::{Category, Issue, Severity, SourceText};
use regex::Regex;

/// Check for too-short function names. One issue per offending declaration.
pub struct FunctionNamingCheck {
    pattern: Regex,
}

/// Minimum acceptable identifier length
const MIN_NAME_LEN: usize = 3;

impl FunctionNamingCheck {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"function\s+(\w+)").unwrap(),
        }
    }
}

impl Default for FunctionNamingCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternCheck for FunctionNamingCheck {
    fn name(&self) -> &'static str {
        "short-function-name"
    }

    fn penalty(&self) -> f64 {
        0.5
    }

    fn check(&self, source: &SourceText) -> Vec<Issue> {
        let mut issues = Vec::new();
        for caps in self.pattern.captures_iter(source.as_str()) {
            let name = &caps[1];
            if name.len() >= MIN_NAME_LEN {
                continue;
            }
            issues.push(Issue {
                severity: Severity::Low,
                category: Category::Naming,
                description: format!("Function name \"{}\" is too short", name),
                // Locate by the full declaration text, not just the name
                line: source.find_line(&caps[0]),
                fix: "Use descriptive function names (3+ characters)".to_string(),
            });
        }
        issues
    }
}
