//! Plain-text rendering of analysis results for copy and download flows.

use std::fmt::Write;

use super::AnalysisResult;

/// Default title line for exported reports.
pub const DEFAULT_EXPORT_TITLE: &str = "Decision Analysis Results";

/// Renders analysis results as an exportable plain-text summary.
pub struct ReportExporter;

impl ReportExporter {
    /// Renders one block per result, two decimals, in result order.
    ///
    /// When a title is given it is emitted first, followed by a blank line.
    /// Each block ends with a blank line of its own.
    pub fn render(title: Option<&str>, results: &[AnalysisResult]) -> String {
        let mut text = String::new();
        if let Some(title) = title {
            text.push_str(title);
            text.push_str("\n\n");
        }
        for r in results {
            // write! to a String cannot fail.
            let _ = write!(
                text,
                "Option: {}\n  Expected Value: {:.2}\n  Risk: {:.2}\n  Sensitivity: {:.2}\n\n",
                r.name, r.expected_value, r.risk, r.sensitivity
            );
        }
        text
    }
}
