//! Improvement suggestions derived straight from the raw snippet.
//!
//! Trigger conditions here are re-evaluated independently of the issue
//! checks. In particular the equality hint fires on any `==`, even when a
//! `===` elsewhere suppresses the corresponding issue; the two paths are
//! intentionally not unified.

use crate::SourceText;
use regex::Regex;

/// Derive the suggestion list for a snippet, in fixed order.
pub fn derive(source: &SourceText) -> Vec<String> {
    let mut suggestions = Vec::new();

    if source.contains("var ") {
        suggestions.push("Refactor: Use const/let instead of var for better scoping".to_string());
    }

    if source.contains("==") {
        suggestions.push("Refactor: Use === for type-safe equality checks".to_string());
    }

    let for_loop = Regex::new(r"for\s*\(").unwrap();
    if for_loop.is_match(source.as_str()) {
        suggestions.push(
            "Modernize: Replace for-loops with Array methods (map, filter, reduce)".to_string(),
        );
    }

    suggestions
}
