//! Mutable declarations without block scoping (`var`).

use super::PatternCheck;
use crate::{Category, Issue, Severity, SourceText};

/// Check for `var` declarations that should be `const` or `let`
pub struct LegacyDeclarationCheck;

impl LegacyDeclarationCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LegacyDeclarationCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternCheck for LegacyDeclarationCheck {
    fn name(&self) -> &'static str {
        "legacy-declaration"
    }

    fn penalty(&self) -> f64 {
        1.0
    }

    fn check(&self, source: &SourceText) -> Vec<Issue> {
        if !source.contains("var ") {
            return Vec::new();
        }
        vec![Issue {
            severity: Severity::Medium,
            category: Category::BestPractice,
            description: "Using \"var\" instead of \"const\" or \"let\"".to_string(),
            // Lookup scans for the bare token, not the declaration form
            line: source.find_line("var"),
            fix: "Replace \"var\" with \"const\" for constants or \"let\" for variables"
                .to_string(),
        }]
    }
}
