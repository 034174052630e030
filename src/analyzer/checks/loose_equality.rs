//! Loose equality (`==`) where strict equality (`===`) is never used.
//!
//! The gate is global: a single `===` anywhere in the snippet disables this
//! check for the whole run, even when loose comparisons exist elsewhere.
//! The suggestion path (see `suggestions`) deliberately does not apply this
//! gate.

use super::PatternCheck;
use crate::{Category, Issue, Severity, SourceText};

/// Check for `==` comparisons in snippets that never use `===`
pub struct LooseEqualityCheck;

impl LooseEqualityCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LooseEqualityCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternCheck for LooseEqualityCheck {
    fn name(&self) -> &'static str {
        "loose-equality"
    }

    fn penalty(&self) -> f64 {
        2.0
    }

    fn check(&self, source: &SourceText) -> Vec<Issue> {
        if !source.contains("==") || source.contains("===") {
            return Vec::new();
        }
        vec![Issue {
            severity: Severity::High,
            category: Category::BugRisk,
            description: "Using loose equality (==) instead of strict equality (===)".to_string(),
            line: source.find_line("=="),
            fix: "Replace \"==\" with \"===\" for type-safe comparisons".to_string(),
        }]
    }
}
