//! Choice Validator - structural and range checks before analysis.

use crate::domain::foundation::ValidationError;

use super::Choice;

/// Minimum number of choices required for a comparison.
pub const MIN_CHOICES: usize = 2;

/// Maximum length of a choice name.
pub const MAX_NAME_CHARS: usize = 50;

/// Maximum length of an outcome description.
pub const MAX_DESCRIPTION_CHARS: usize = 100;

/// Valid range for an outcome's impact.
pub const IMPACT_RANGE: (f64, f64) = (-10.0, 10.0);

/// Valid range for an outcome's probability.
pub const PROBABILITY_RANGE: (f64, f64) = (0.0, 1.0);

/// Valid range for an outcome's importance.
pub const IMPORTANCE_RANGE: (f64, f64) = (1.0, 10.0);

/// Validation functions for candidate choice sets.
pub struct ChoiceValidator;

impl ChoiceValidator {
    /// Checks a candidate set of choices, stopping at the FIRST violation.
    ///
    /// Check order matters for user feedback: choices in input order, and
    /// within each choice the name, then the outcome count, then each
    /// outcome's description, impact, probability, and importance.
    ///
    /// Pure check; the analyzer never sees a set this function rejected.
    pub fn validate(choices: &[Choice]) -> Result<(), ValidationError> {
        if choices.len() < MIN_CHOICES {
            return Err(ValidationError::NotEnoughChoices {
                count: choices.len(),
            });
        }

        for (i, choice) in choices.iter().enumerate() {
            let option = i + 1;

            if choice.name.trim().is_empty() {
                return Err(ValidationError::NameRequired { option });
            }
            if choice.name.chars().count() > MAX_NAME_CHARS {
                return Err(ValidationError::NameTooLong { option });
            }
            if choice.outcomes.is_empty() {
                return Err(ValidationError::NoOutcomes { option });
            }

            for (j, o) in choice.outcomes.iter().enumerate() {
                let outcome = j + 1;

                if o.description.trim().is_empty() {
                    return Err(ValidationError::DescriptionRequired { option, outcome });
                }
                if o.description.chars().count() > MAX_DESCRIPTION_CHARS {
                    return Err(ValidationError::DescriptionTooLong { option, outcome });
                }
                if !Self::in_range(o.impact, IMPACT_RANGE) {
                    return Err(ValidationError::ImpactOutOfRange { option, outcome });
                }
                if !Self::in_range(o.probability, PROBABILITY_RANGE) {
                    return Err(ValidationError::ProbabilityOutOfRange { option, outcome });
                }
                if !Self::in_range(o.importance, IMPORTANCE_RANGE) {
                    return Err(ValidationError::ImportanceOutOfRange { option, outcome });
                }
            }
        }

        Ok(())
    }

    /// NaN and infinity fail the range check along with out-of-range values.
    fn in_range(value: f64, (min, max): (f64, f64)) -> bool {
        value.is_finite() && value >= min && value <= max
    }
}
