//! Flat key/value form of tuner values, for URL query strings

use indexmap::IndexMap;
use tracing::trace;

use crate::values::{round_tenth, TunerField, TunerPatch, TunerValues};

/// One entry per tuner, in fixed order, each value with one decimal place
pub fn serialize(values: &TunerValues) -> IndexMap<&'static str, String> {
    TunerField::ALL
        .into_iter()
        .map(|field| (field.key(), format!("{:.1}", round_tenth(values.get(field)))))
        .collect()
}

/// Parse flat pairs back into a patch
///
/// Unknown keys are ignored. Values that do not parse, are not finite, or
/// fall outside `[0, 1]` are dropped so [`normalize`](crate::normalize)
/// falls back for them. A repeated key keeps its last valid value.
pub fn deserialize<I, K, V>(pairs: I) -> TunerPatch
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut patch = TunerPatch::default();
    for (key, value) in pairs {
        let key = key.as_ref();
        let Some(field) = TunerField::from_key(key) else {
            continue;
        };
        match value.as_ref().trim().parse::<f32>() {
            Ok(v) if v.is_finite() && (0.0..=1.0).contains(&v) => patch.set(field, v),
            _ => trace!(key, value = value.as_ref(), "dropped tuner entry"),
        }
    }
    patch
}

/// `abstraction=0.5&density=0.5&...`
pub fn to_query_string(values: &TunerValues) -> String {
    serialize(values)
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Inverse of [`to_query_string`]; a leading `?` and empty segments are skipped
pub fn from_query_string(query: &str) -> TunerPatch {
    let query = query.strip_prefix('?').unwrap_or(query);
    deserialize(
        query
            .split('&')
            .filter(|segment| !segment.is_empty())
            .filter_map(|segment| segment.split_once('=')),
    )
}
