//! Taste blending errors

use thiserror::Error;

/// Errors raised by [`blend`](crate::blend)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TasteError {
    #[error("cannot blend an empty set of taste observations")]
    EmptyObservations,

    #[error("observation {observation} has negative weight {weight}")]
    NegativeWeight { observation: String, weight: f32 },

    #[error("observation {observation} has a non-finite weight")]
    NonFiniteWeight { observation: String },

    #[error("taste observation weights sum to zero")]
    ZeroTotalWeight,
}

pub type Result<T> = std::result::Result<T, TasteError>;
