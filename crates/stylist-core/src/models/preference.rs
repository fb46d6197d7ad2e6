//! Accumulating user preference profile.
//!
//! Appended to on every turn, never overwritten; repeated observations of
//! the same value gain weight instead of duplicating.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::constraint::{Constraint, ConstraintSet, PriceBand};

/// Which preference dimension a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceKey {
    Category,
    Style,
    Color,
    PriceBand,
    Brand,
}

/// A single observed preference value with its accumulated weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservedValue {
    pub value: String,
    pub weight: f64,
    pub count: u64,
}

/// Session-lifetime preference store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceProfile {
    entries: HashMap<PreferenceKey, Vec<ObservedValue>>,
}

impl PreferenceProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation of a value, with the given weight.
    pub fn observe(&mut self, key: PreferenceKey, value: &str, weight: f64) {
        let values = self.entries.entry(key).or_default();
        if let Some(existing) = values.iter_mut().find(|v| v.value == value) {
            existing.weight += weight;
            existing.count += 1;
        } else {
            values.push(ObservedValue {
                value: value.to_string(),
                weight,
                count: 1,
            });
        }
    }

    /// Fold every extractable constraint from a turn into the profile.
    /// Feedback and size constraints are transient and not remembered.
    pub fn observe_constraints(&mut self, constraints: &ConstraintSet) {
        for c in constraints.iter() {
            match c {
                Constraint::Category(v) => self.observe(PreferenceKey::Category, v, 1.0),
                Constraint::Style(v) => self.observe(PreferenceKey::Style, v, 1.0),
                Constraint::Color(v) => self.observe(PreferenceKey::Color, v, 1.0),
                Constraint::Brand(v) => self.observe(PreferenceKey::Brand, v, 1.0),
                Constraint::PriceBand(b) => {
                    self.observe(PreferenceKey::PriceBand, band_label(*b), 1.0)
                }
                Constraint::Size(_) | Constraint::Feedback(_) => {}
            }
        }
    }

    pub fn values(&self, key: PreferenceKey) -> &[ObservedValue] {
        self.entries.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All observed values across all keys, for overlap scoring.
    pub fn all_values(&self) -> impl Iterator<Item = (PreferenceKey, &ObservedValue)> {
        self.entries
            .iter()
            .flat_map(|(k, vs)| vs.iter().map(move |v| (*k, v)))
    }

    /// Number of preference dimensions with at least one observation.
    pub fn key_count(&self) -> usize {
        self.entries.values().filter(|v| !v.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.key_count() == 0
    }
}

fn band_label(band: PriceBand) -> &'static str {
    match band {
        PriceBand::Budget => "저렴",
        PriceBand::Mid => "보통",
        PriceBand::Premium => "고급",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_observation_accumulates_weight() {
        let mut profile = PreferenceProfile::new();
        profile.observe(PreferenceKey::Style, "스트릿", 1.0);
        profile.observe(PreferenceKey::Style, "스트릿", 1.0);
        profile.observe(PreferenceKey::Style, "베이직", 1.0);

        let styles = profile.values(PreferenceKey::Style);
        assert_eq!(styles.len(), 2);
        let street = styles.iter().find(|v| v.value == "스트릿").unwrap();
        assert_eq!(street.count, 2);
        assert!((street.weight - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn constraints_fold_in_without_feedback() {
        let mut profile = PreferenceProfile::new();
        let set: ConstraintSet = [
            Constraint::Category("상의".into()),
            Constraint::Feedback(super::super::constraint::FeedbackSignal::Cheaper),
        ]
        .into_iter()
        .collect();
        profile.observe_constraints(&set);
        assert_eq!(profile.key_count(), 1);
    }
}
