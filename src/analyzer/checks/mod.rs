//! Pattern checks over the raw snippet text.
//!
//! Checks are independent: one firing never suppresses or alters another,
//! with the single exception of the loose-equality check's own internal
//! strict-equality gate.

pub mod error_handling;
pub mod function_naming;
pub mod legacy_declaration;
pub mod loose_equality;
pub mod magic_numbers;
pub mod traditional_loop;

pub use error_handling::ErrorHandlingCheck;
pub use function_naming::FunctionNamingCheck;
pub use legacy_declaration::LegacyDeclarationCheck;
pub use loose_equality::LooseEqualityCheck;
pub use magic_numbers::MagicNumbersCheck;
pub use traditional_loop::TraditionalLoopCheck;

use crate::{Issue, SourceText};

/// Trait for pattern checks
pub trait PatternCheck {
    /// Name of the check
    fn name(&self) -> &'static str;

    /// Score deduction per issue this check reports
    fn penalty(&self) -> f64;

    /// Inspect the snippet and return issues found
    fn check(&self, source: &SourceText) -> Vec<Issue>;
}
