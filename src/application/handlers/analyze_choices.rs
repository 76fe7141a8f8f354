//! Analyze Choices handler.
//!
//! Wires the validator and analyzer together for one analysis run. The
//! analyzer never sees a choice set the validator rejected; callers get
//! either the full result set or the first violation, never both.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{
    AnalysisResult, Choice, ChoiceAnalyzer, ChoiceValidator, Insights,
};
use crate::domain::foundation::ValidationError;

/// Command: a candidate set of choices to analyze.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeChoicesCommand {
    pub choices: Vec<Choice>,
}

/// Result: per-choice statistics plus headline insights.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeChoicesResult {
    pub results: Vec<AnalysisResult>,
    pub insights: Insights,
}

/// Handler for the analyze-choices command.
pub struct AnalyzeChoicesHandler;

impl AnalyzeChoicesHandler {
    /// Validates then analyzes, returning one result per choice in order.
    pub fn handle(command: AnalyzeChoicesCommand) -> Result<AnalyzeChoicesResult, ValidationError> {
        ChoiceValidator::validate(&command.choices)?;

        let results = ChoiceAnalyzer::analyze(&command.choices);
        let insights = Insights::from_results(&results);

        tracing::debug!(
            choices = command.choices.len(),
            best = insights.best_option.as_deref().unwrap_or(""),
            "analysis complete"
        );

        Ok(AnalyzeChoicesResult { results, insights })
    }
}
