//! Atelier Taste
//!
//! Blends weighted aesthetic observations into a single [`TasteProfile`].
//!
//! Observations come from upstream lookups (named references, URLs, images);
//! this crate only resolves them through a [`TasteLookup`] and combines them:
//!
//! - continuous fields take the weight-normalized average
//! - color temperature takes a weighted vote
//! - motifs take the union
//!
//! ```rust
//! use atelier_taste::{blend, observe, ReferenceTable, TasteProfile, TasteSource};
//!
//! let mut table = ReferenceTable::new();
//! table.insert("Swiss Poster", TasteProfile { restraint: 0.9, ..TasteProfile::neutral() });
//!
//! let observations = [
//!     observe(&table, TasteSource::Reference("swiss poster".into()), 1.0),
//!     observe(&table, TasteSource::Url("https://example.com".into()), 1.0),
//! ];
//! let profile = blend(&observations).unwrap();
//! assert!(profile.restraint > 0.5);
//! ```

mod blend;
mod error;
mod observe;
mod profile;

pub use blend::blend;
pub use error::{Result, TasteError};
pub use observe::{
    observe, ReferenceTable, TasteLookup, TasteObservation, TasteSource, UNKNOWN_SOURCE_DISCOUNT,
};
pub use profile::{ColorTemperature, TasteProfile};
