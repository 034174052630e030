//! Console reporter with colored output

use crate::{AnalysisResult, Severity, Status};
use colored::{ColoredString, Colorize};

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Print the run banner
    pub fn banner(&self) {
        println!();
        println!("{}", "🤖 SNIPPET ANALYZER".bold());
        println!("Analyzing JavaScript code...");
    }

    /// Render the full report: score, status, issues, suggestions, and the
    /// rewritten snippet. Writes to stdout only; the result is not touched.
    pub fn report(&self, result: &AnalysisResult, refactored: &str) {
        println!("{}", "=".repeat(70));
        println!("{}", "📊 CODE ANALYSIS RESULTS".bold());
        println!("{}", "=".repeat(70));

        println!();
        println!("⭐ QUALITY SCORE: {}/10", result.score);
        println!("📈 STATUS: {}", self.status_label(result.status()));

        println!();
        println!("🚨 ISSUES FOUND:");
        if result.issues.is_empty() {
            println!("   ✅ No issues found!");
        } else {
            for (i, issue) in result.issues.iter().enumerate() {
                println!();
                println!(
                    "   {}. [{}] {}",
                    i + 1,
                    self.colorize_severity(issue.severity),
                    issue.category
                );
                println!("      Issue: {}", issue.description);
                println!("      Line: {}", issue.line);
                println!("      Fix: {}", issue.fix);
            }
        }

        println!();
        println!("💡 IMPROVEMENT SUGGESTIONS:");
        if result.suggestions.is_empty() {
            println!("   ✅ Code looks good!");
        } else {
            for (i, suggestion) in result.suggestions.iter().enumerate() {
                println!("   {}. {}", i + 1, suggestion);
            }
        }

        println!();
        println!("🔄 REFACTORED CODE:");
        println!("{}", "─".repeat(70));
        println!("{}", refactored);
        println!("{}", "─".repeat(70));

        println!();
        println!("{}", "=".repeat(70));
    }

    fn status_label(&self, status: Status) -> String {
        let icon = match status {
            Status::Excellent => "✅",
            Status::Good => "⚠️ ",
            Status::NeedsImprovement => "❌",
        };
        let label = status.to_string();
        let label = if self.use_colors {
            match status {
                Status::Excellent => label.green().bold(),
                Status::Good => label.yellow(),
                Status::NeedsImprovement => label.red().bold(),
            }
            .to_string()
        } else {
            label
        };
        format!("{} {}", icon, label)
    }

    fn colorize_severity(&self, severity: Severity) -> ColoredString {
        let s = severity.to_string();
        if !self.use_colors {
            return s.normal();
        }
        match severity {
            Severity::High => s.red().bold(),
            Severity::Medium => s.yellow(),
            Severity::Low => s.blue(),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
