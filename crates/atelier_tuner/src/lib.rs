//! Atelier Tuners
//!
//! Five continuous parameters in `[0, 1]` that perturb resolved style output
//! without touching the underlying theme pack:
//!
//! | tuner         | effect                                              |
//! |---------------|-----------------------------------------------------|
//! | `abstraction` | literal / balanced / geometric imagery (discrete)   |
//! | `density`     | shrinks gaps, padding and row heights               |
//! | `motion`      | lengthens transitions and travel distance           |
//! | `contrast`    | raises border and muted-text opacity                |
//! | `narrative`   | utility / editorial / cinematic layout (discrete)   |
//!
//! The pipeline is stateless:
//!
//! ```rust
//! use atelier_tuner::{compute_overrides, deserialize, normalize, serialize, TunerPatch};
//!
//! let values = normalize(&TunerPatch { density: Some(1.7), ..Default::default() }, None);
//! assert_eq!(values.density, 1.0);
//!
//! let overrides = compute_overrides(&values);
//! assert_eq!(overrides.get("--tuner-gap"), Some("8px"));
//!
//! // URL round trip
//! let query = serialize(&values);
//! let restored = normalize(&deserialize(&query), None);
//! assert_eq!(restored, values);
//! ```
//!
//! Out-of-range input is clamped or dropped, never rejected.

mod overrides;
mod query;
mod values;

pub use overrides::{compute_overrides, AbstractionVariant, NarrativeVariant, StyleOverrideSet};
pub use query::{deserialize, from_query_string, serialize, to_query_string};
pub use values::{normalize, round_tenth, TunerField, TunerPatch, TunerValues, DEFAULT_TUNER_VALUE};
