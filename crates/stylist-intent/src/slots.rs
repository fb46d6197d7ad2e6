//! Slot extraction: vocabulary matches plus regex-based numeric bounds.

use std::sync::LazyLock;

use regex::Regex;

use stylist_core::models::{CmpOp, Constraint, ConstraintSet, SizeBound, SizeDimension};

use crate::vocabulary;

/// Extract every constraint the closed vocabulary recognizes in the text.
/// First matching pattern per table wins; no backtracking.
pub fn extract_constraints(text: &str) -> ConstraintSet {
    let mut set = ConstraintSet::new();

    if let Some(category) = vocabulary::match_category(text) {
        set.insert(Constraint::Category(category.to_string()));
    }
    if let Some(style) = vocabulary::match_style(text) {
        set.insert(Constraint::Style(style.to_string()));
    }
    if let Some(color) = vocabulary::match_color(text) {
        set.insert(Constraint::Color(color.to_string()));
    }
    if let Some(band) = vocabulary::match_price_band(text) {
        set.insert(Constraint::PriceBand(band));
    }
    if let Some(signal) = vocabulary::match_feedback_signal(text) {
        set.insert(Constraint::Feedback(signal));
    }
    for bound in extract_size_bounds(text) {
        set.insert(Constraint::Size(bound));
    }

    set
}

/// Measurement bounds, e.g. "총장 65cm 이하" or "가슴단면 55 이상".
static SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(총장|가슴단면|어깨너비)\s*([0-9]+(?:\.[0-9]+)?)\s*(?:cm)?\s*(이하|이상)?")
        .expect("size bound regex")
});

/// Extract measurement bounds like "총장 65cm 이하".
pub fn extract_size_bounds(text: &str) -> Vec<SizeBound> {
    SIZE_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let dimension = match &caps[1] {
                "총장" => SizeDimension::Length,
                "가슴단면" => SizeDimension::Chest,
                "어깨너비" => SizeDimension::Shoulder,
                _ => return None,
            };
            let cm: f64 = caps[2].parse().ok()?;
            let op = match caps.get(3).map(|m| m.as_str()) {
                Some("이하") => CmpOp::Le,
                Some("이상") => CmpOp::Ge,
                _ => CmpOp::Eq,
            };
            Some(SizeBound { dimension, op, cm })
        })
        .collect()
}
