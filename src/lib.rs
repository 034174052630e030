//! Snipcheck: heuristic quality analyzer for JavaScript snippets
//!
//! This library scans a single in-memory source snippet for a fixed set of
//! pattern-based quality issues, assigns a 0-10 score, derives improvement
//! suggestions, and produces a naive text-substitution rewrite. All checks
//! are substring and regex predicates over raw text; there is no parsing.

pub mod analyzer;
pub mod refactor;
pub mod reporter;
pub mod suggestions;

use serde::{Deserialize, Serialize};

/// Demo snippet analyzed when no input is supplied to the binary.
pub const DEMO_SNIPPET: &str = r#"
function calculateTotal(items) {
  var total = 0;
  for (var idx in items) {
    total = total + items[idx].price;
  }
  return total;
}

function processOrders(orders) {
  var results = [];
  for (var idx in orders) {
    if (orders[idx].status == "pending") {
      results.push(orders[idx]);
    }
  }
  return results;
}
"#;

/// The snippet under analysis. Checks only ever see this immutable wrapper;
/// no tokenization or structure is imposed on the text.
#[derive(Debug, Clone)]
pub struct SourceText(String);

impl SourceText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }

    /// First line (1-based) whose text contains `needle`, scanning from the
    /// top. Returns the N/A marker when no line matches.
    pub fn find_line(&self, needle: &str) -> LineRef {
        for (idx, line) in self.0.lines().enumerate() {
            if line.contains(needle) {
                return LineRef::Line(idx + 1);
            }
        }
        LineRef::NotApplicable
    }
}

impl From<&str> for SourceText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Severity levels for issues, ordered from least to most serious
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "Low"),
            Severity::Medium => write!(f, "Medium"),
            Severity::High => write!(f, "High"),
        }
    }
}

/// Issue categories, one per check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Best Practice")]
    BestPractice,
    #[serde(rename = "Bug Risk")]
    BugRisk,
    Modernization,
    #[serde(rename = "Error Handling")]
    ErrorHandling,
    Naming,
    Maintainability,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::BestPractice => write!(f, "Best Practice"),
            Category::BugRisk => write!(f, "Bug Risk"),
            Category::Modernization => write!(f, "Modernization"),
            Category::ErrorHandling => write!(f, "Error Handling"),
            Category::Naming => write!(f, "Naming"),
            Category::Maintainability => write!(f, "Maintainability"),
        }
    }
}

/// Location hint for an issue. Serializes as the line number, `"N/A"`, or
/// `"Multiple"` to match the persisted report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRef {
    /// A 1-based line number
    Line(usize),
    /// No single line applies
    NotApplicable,
    /// The issue spans several locations
    Multiple,
}

impl std::fmt::Display for LineRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineRef::Line(n) => write!(f, "{}", n),
            LineRef::NotApplicable => write!(f, "N/A"),
            LineRef::Multiple => write!(f, "Multiple"),
        }
    }
}

impl Serialize for LineRef {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LineRef::Line(n) => serializer.serialize_u64(*n as u64),
            LineRef::NotApplicable => serializer.serialize_str("N/A"),
            LineRef::Multiple => serializer.serialize_str("Multiple"),
        }
    }
}

impl<'de> Deserialize<'de> for LineRef {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LineRefVisitor;

        impl serde::de::Visitor<'_> for LineRefVisitor {
            type Value = LineRef;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a line number, \"N/A\", or \"Multiple\"")
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<LineRef, E> {
                Ok(LineRef::Line(v as usize))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<LineRef, E> {
                Ok(LineRef::Line(v as usize))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<LineRef, E> {
                match v {
                    "N/A" => Ok(LineRef::NotApplicable),
                    "Multiple" => Ok(LineRef::Multiple),
                    other => Err(E::invalid_value(serde::de::Unexpected::Str(other), &self)),
                }
            }
        }

        deserializer.deserialize_any(LineRefVisitor)
    }
}

/// An issue found during analysis. Issues are appended in fixed check order
/// and never mutated or sorted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Severity of the issue
    pub severity: Severity,
    /// Category of the triggering check
    #[serde(rename = "type")]
    pub category: Category,
    /// Human-readable description
    #[serde(rename = "issue")]
    pub description: String,
    /// Location hint
    pub line: LineRef,
    /// Suggested fix
    pub fix: String,
}

/// Status label derived from the quality score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "EXCELLENT")]
    Excellent,
    #[serde(rename = "GOOD")]
    Good,
    #[serde(rename = "NEEDS IMPROVEMENT")]
    NeedsImprovement,
}

impl Status {
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            Status::Excellent
        } else if score >= 6.0 {
            Status::Good
        } else {
            Status::NeedsImprovement
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Excellent => write!(f, "EXCELLENT"),
            Status::Good => write!(f, "GOOD"),
            Status::NeedsImprovement => write!(f, "NEEDS IMPROVEMENT"),
        }
    }
}

/// The result of analyzing one snippet
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Quality score: starts at 10, fixed penalty per triggered check,
    /// floored at 0
    pub score: f64,
    /// Issues in check order
    pub issues: Vec<Issue>,
    /// Free-text suggestions, derived independently of the issue list
    pub suggestions: Vec<String>,
}

impl AnalysisResult {
    pub fn status(&self) -> Status {
        Status::from_score(self.score)
    }
}

/// Public API: analyze a snippet held in memory with the full check roster.
pub fn analyze_snippet(text: &str) -> AnalysisResult {
    let engine = crate::analyzer::AnalysisEngine::new();
    engine.analyze(&SourceText::new(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_line_returns_first_match() {
        let source = SourceText::new("let a = 1;\nvar b = 2;\nvar c = 3;");
        assert_eq!(source.find_line("var"), LineRef::Line(2));
    }

    #[test]
    fn find_line_missing_is_not_applicable() {
        let source = SourceText::new("let a = 1;");
        assert_eq!(source.find_line("while"), LineRef::NotApplicable);
    }

    #[test]
    fn severity_is_ordered() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn status_thresholds() {
        assert_eq!(Status::from_score(10.0), Status::Excellent);
        assert_eq!(Status::from_score(8.0), Status::Excellent);
        assert_eq!(Status::from_score(7.5), Status::Good);
        assert_eq!(Status::from_score(6.0), Status::Good);
        assert_eq!(Status::from_score(5.5), Status::NeedsImprovement);
        assert_eq!(Status::from_score(0.0), Status::NeedsImprovement);
    }

    #[test]
    fn line_ref_serializes_to_wire_format() {
        assert_eq!(serde_json::to_string(&LineRef::Line(4)).unwrap(), "4");
        assert_eq!(
            serde_json::to_string(&LineRef::NotApplicable).unwrap(),
            "\"N/A\""
        );
        assert_eq!(
            serde_json::to_string(&LineRef::Multiple).unwrap(),
            "\"Multiple\""
        );
    }

    #[test]
    fn line_ref_round_trips() {
        for line in [LineRef::Line(12), LineRef::NotApplicable, LineRef::Multiple] {
            let json = serde_json::to_string(&line).unwrap();
            let back: LineRef = serde_json::from_str(&json).unwrap();
            assert_eq!(back, line);
        }
    }

    #[test]
    fn issue_json_uses_report_keys() {
        let issue = Issue {
            severity: Severity::High,
            category: Category::BugRisk,
            description: "Using loose equality".to_string(),
            line: LineRef::Line(3),
            fix: "Use ===".to_string(),
        };
        let json = serde_json::to_string(&issue).unwrap();
        assert!(json.contains("\"severity\":\"High\""));
        assert!(json.contains("\"type\":\"Bug Risk\""));
        assert!(json.contains("\"issue\":"));
        assert!(json.contains("\"line\":3"));
    }
}
