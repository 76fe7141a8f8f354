//! Choice Analyzer - expected value, risk, and sensitivity per choice.

use super::{AnalysisResult, Choice};

/// Multiplier applied per outcome for the optimistic projection.
pub const OPTIMISTIC_FACTOR: f64 = 1.25;

/// Multiplier applied per outcome for the pessimistic projection.
pub const PESSIMISTIC_FACTOR: f64 = 0.75;

/// Pure analysis functions over validated choices.
pub struct ChoiceAnalyzer;

impl ChoiceAnalyzer {
    /// Computes statistics for every choice, one result per input, same order.
    ///
    /// # Algorithm
    /// Per choice: contribution = impact * probability * importance for each
    /// outcome; expected value = Σ contribution; risk = population standard
    /// deviation of the contributions; plus/minus = per-outcome accumulation
    /// of 1.25x / 0.75x contributions; sensitivity = |plus - minus|.
    ///
    /// # Edge Cases
    /// - Empty input: Returns empty Vec
    /// - Choice with no outcomes: Yields all-zero statistics (the divisor is
    ///   guarded to 1); the validator is the gatekeeper, this function is
    ///   total over any input
    /// - Single outcome: risk is always 0
    pub fn analyze(choices: &[Choice]) -> Vec<AnalysisResult> {
        choices.iter().map(Self::analyze_choice).collect()
    }

    fn analyze_choice(choice: &Choice) -> AnalysisResult {
        let mut contributions = Vec::with_capacity(choice.outcomes.len());
        let mut expected_value = 0.0;
        for outcome in &choice.outcomes {
            let value = outcome.contribution();
            contributions.push(value);
            expected_value += value;
        }

        let divisor = contributions.len().max(1) as f64;
        let mean = expected_value / divisor;
        let mut variance = 0.0;
        for value in &contributions {
            variance += (value - mean).powi(2);
        }
        variance /= divisor;

        // plus/minus accumulate per outcome rather than scaling the summed
        // expected value, so rounding matches the per-outcome arithmetic.
        let mut plus = 0.0;
        let mut minus = 0.0;
        for outcome in &choice.outcomes {
            plus += OPTIMISTIC_FACTOR * outcome.contribution();
            minus += PESSIMISTIC_FACTOR * outcome.contribution();
        }
        let sensitivity = (plus - minus).abs();

        AnalysisResult {
            name: choice.name.clone(),
            expected_value,
            risk: variance.sqrt(),
            plus,
            minus,
            sensitivity,
            current: expected_value,
        }
    }
}
