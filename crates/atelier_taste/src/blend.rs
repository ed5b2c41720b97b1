//! Blending weighted observations into one profile

use std::collections::BTreeSet;

use tracing::trace;

use crate::error::{Result, TasteError};
use crate::observe::TasteObservation;
use crate::profile::{ColorTemperature, TasteProfile};

/// Blend observations into one profile
///
/// Weights must be finite and non-negative with a positive sum. Continuous
/// fields are the weight-normalized mean, color temperature the heaviest
/// vote (exact ties go cool, then neutral, then warm), motifs the union.
pub fn blend(observations: &[TasteObservation]) -> Result<TasteProfile> {
    if observations.is_empty() {
        return Err(TasteError::EmptyObservations);
    }

    let mut total = 0.0f64;
    for observation in observations {
        let weight = observation.weight;
        if !weight.is_finite() {
            return Err(TasteError::NonFiniteWeight {
                observation: observation.source.to_string(),
            });
        }
        if weight < 0.0 {
            return Err(TasteError::NegativeWeight {
                observation: observation.source.to_string(),
                weight,
            });
        }
        total += f64::from(weight);
    }
    if total <= 0.0 {
        return Err(TasteError::ZeroTotalWeight);
    }

    let mut sums = [0.0f64; TasteProfile::CONTINUOUS_FIELDS];
    let mut votes = [0.0f64; 3];
    let mut motifs = BTreeSet::new();

    for observation in observations {
        let share = f64::from(observation.weight) / total;
        let profile = observation.profile.clone().clamped();
        for (sum, value) in sums.iter_mut().zip(profile.continuous()) {
            *sum += share * f64::from(value);
        }
        votes[vote_slot(profile.color_temperature)] += f64::from(observation.weight);
        motifs.extend(profile.motifs);
    }

    let color_temperature = pick_temperature(votes);
    trace!(
        observations = observations.len(),
        total,
        %color_temperature,
        "blended taste profile"
    );

    let mut blended = TasteProfile {
        color_temperature,
        motifs,
        ..TasteProfile::neutral()
    };
    blended.set_continuous(sums.map(|v| v as f32));
    Ok(blended.clamped())
}

fn vote_slot(temperature: ColorTemperature) -> usize {
    ColorTemperature::TIE_ORDER
        .iter()
        .position(|&t| t == temperature)
        .unwrap_or(0)
}

/// Strictly heaviest vote; earlier entries in `TIE_ORDER` keep ties
fn pick_temperature(votes: [f64; 3]) -> ColorTemperature {
    let mut best = 0;
    for slot in 1..votes.len() {
        if votes[slot] > votes[best] {
            best = slot;
        }
    }
    ColorTemperature::TIE_ORDER[best]
}
