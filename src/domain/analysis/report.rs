//! Headline insights derived from a full set of analysis results.

use serde::{Deserialize, Serialize};

use super::AnalysisResult;

/// Headline picks over a set of results.
///
/// Ties go to the first result encountered, which matches input order since
/// the analyzer preserves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    /// Name of the choice with the highest expected value.
    pub best_option: Option<String>,
    /// Name of the choice with the lowest risk.
    pub lowest_risk: Option<String>,
    /// Name of the choice most sensitive to assumption error.
    pub most_sensitive: Option<String>,
}

impl Insights {
    /// Derives insights from analysis results.
    pub fn from_results(results: &[AnalysisResult]) -> Self {
        Self {
            best_option: Self::best(results).map(|r| r.name.clone()),
            lowest_risk: Self::lowest_risk(results).map(|r| r.name.clone()),
            most_sensitive: Self::most_sensitive(results).map(|r| r.name.clone()),
        }
    }

    /// Result with the maximum expected value; first wins ties.
    pub fn best(results: &[AnalysisResult]) -> Option<&AnalysisResult> {
        results
            .iter()
            .reduce(|a, b| if b.expected_value > a.expected_value { b } else { a })
    }

    /// Result with the minimum risk; first wins ties.
    pub fn lowest_risk(results: &[AnalysisResult]) -> Option<&AnalysisResult> {
        results.iter().reduce(|a, b| if b.risk < a.risk { b } else { a })
    }

    /// Result with the maximum sensitivity; first wins ties.
    pub fn most_sensitive(results: &[AnalysisResult]) -> Option<&AnalysisResult> {
        results
            .iter()
            .reduce(|a, b| if b.sensitivity > a.sensitivity { b } else { a })
    }
}
