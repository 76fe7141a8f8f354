//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur when a candidate set of choices fails validation.
///
/// The `Display` strings are the exact messages surfaced to the user, so the
/// HTTP layer forwards them verbatim. Positions are 1-based to match what
/// the user sees on screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please add at least two options before analyzing.")]
    NotEnoughChoices { count: usize },

    #[error("Option {option}: Name is required.")]
    NameRequired { option: usize },

    #[error("Option {option}: Name is too long (max 50 characters).")]
    NameTooLong { option: usize },

    #[error("Option {option}: Must have at least one outcome.")]
    NoOutcomes { option: usize },

    #[error("Option {option}, Outcome {outcome}: Description is required.")]
    DescriptionRequired { option: usize, outcome: usize },

    #[error("Option {option}, Outcome {outcome}: Description is too long (max 100 characters).")]
    DescriptionTooLong { option: usize, outcome: usize },

    #[error("Option {option}, Outcome {outcome}: Impact must be a number between -10 and 10.")]
    ImpactOutOfRange { option: usize, outcome: usize },

    #[error("Option {option}, Outcome {outcome}: Probability must be a number between 0 and 1.")]
    ProbabilityOutOfRange { option: usize, outcome: usize },

    #[error("Option {option}, Outcome {outcome}: Importance must be a number between 1 and 10.")]
    ImportanceOutOfRange { option: usize, outcome: usize },
}
