//! Choice and Outcome input types.

use serde::{Deserialize, Serialize};

/// One possible consequence of picking a choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    /// What might happen.
    pub description: String,
    /// Size of the effect: -10 (very bad) to +10 (very good).
    pub impact: f64,
    /// Likelihood the outcome occurs: 0 (never) to 1 (certain).
    pub probability: f64,
    /// Subjective weight: 1 (not important) to 10 (critical).
    pub importance: f64,
}

impl Outcome {
    /// Creates a new outcome.
    pub fn new(
        description: impl Into<String>,
        impact: f64,
        probability: f64,
        importance: f64,
    ) -> Self {
        Self {
            description: description.into(),
            impact,
            probability,
            importance,
        }
    }

    /// Weighted contribution of this outcome to its choice's statistics.
    pub fn contribution(&self) -> f64 {
        self.impact * self.probability * self.importance
    }
}

/// A candidate decision under evaluation.
///
/// Choices are constructed transiently for a single analysis run; they have
/// no identity beyond their position in the input list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    pub name: String,
    pub outcomes: Vec<Outcome>,
}

impl Choice {
    /// Creates a new choice.
    pub fn new(name: impl Into<String>, outcomes: Vec<Outcome>) -> Self {
        Self {
            name: name.into(),
            outcomes,
        }
    }
}
