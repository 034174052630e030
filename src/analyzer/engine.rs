//! Analysis engine - runs the ordered check list as a single pure fold

use crate::suggestions;
use crate::{AnalysisResult, SourceText};

use super::checks::{
    ErrorHandlingCheck, FunctionNamingCheck, LegacyDeclarationCheck, LooseEqualityCheck,
    MagicNumbersCheck, PatternCheck, TraditionalLoopCheck,
};

/// Starting score before any deductions
const BASE_SCORE: f64 = 10.0;

/// Runs every check against the snippet in a fixed order
pub struct AnalysisEngine {
    checks: Vec<Box<dyn PatternCheck>>,
}

impl AnalysisEngine {
    /// Create an engine with the full check roster in report order
    pub fn new() -> Self {
        Self {
            checks: vec![
                Box::new(LegacyDeclarationCheck::new()),
                Box::new(LooseEqualityCheck::new()),
                Box::new(TraditionalLoopCheck::new()),
                Box::new(ErrorHandlingCheck::new()),
                Box::new(FunctionNamingCheck::new()),
                Box::new(MagicNumbersCheck::new()),
            ],
        }
    }

    /// Analyze a snippet. Pure and total: the same input always yields the
    /// same result, and no input can fail.
    pub fn analyze(&self, source: &SourceText) -> AnalysisResult {
        let (penalty, issues) =
            self.checks
                .iter()
                .fold((0.0_f64, Vec::new()), |(penalty, mut issues), check| {
                    let found = check.check(source);
                    let penalty = penalty + check.penalty() * found.len() as f64;
                    issues.extend(found);
                    (penalty, issues)
                });

        AnalysisResult {
            score: (BASE_SCORE - penalty).max(0.0),
            issues,
            suggestions: suggestions::derive(source),
        }
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}
