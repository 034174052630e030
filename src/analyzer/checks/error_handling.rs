//! Missing error handling: no `try` or `catch` marker anywhere.

use super::PatternCheck;
use crate::{Category, Issue, LineRef, Severity, SourceText};

/// Check for the complete absence of try/catch
pub struct ErrorHandlingCheck;

impl ErrorHandlingCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ErrorHandlingCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternCheck for ErrorHandlingCheck {
    fn name(&self) -> &'static str {
        "missing-error-handling"
    }

    fn penalty(&self) -> f64 {
        1.0
    }

    fn check(&self, source: &SourceText) -> Vec<Issue> {
        if source.contains("try") || source.contains("catch") {
            return Vec::new();
        }
        vec![Issue {
            severity: Severity::Medium,
            category: Category::ErrorHandling,
            description: "No error handling found".to_string(),
            line: LineRef::NotApplicable,
            fix: "Add try-catch blocks for robust error handling".to_string(),
        }]
    }
}
