//! Feedback turn classification.
//!
//! Order matters: a condition change ("좀 더 저렴한 걸로") also contains
//! more-items wording ("더"), so the more specific classes are checked first.

use stylist_core::models::FeedbackKind;

use crate::vocabulary;

const NEGATIVE_KEYWORDS: &[&str] = &["별로", "싫어", "아니", "마음에 안"];
const MORE_ITEMS_KEYWORDS: &[&str] = &["더 보여", "다른 것도", "더 추천", "더"];
const BEHAVIOR_KEYWORDS: &[&str] = &["클릭", "장바구니", "구매", "찜"];
const POSITIVE_KEYWORDS: &[&str] = &["좋아", "마음에 들어", "맘에 들어", "감사", "괜찮"];

pub struct FeedbackDetector;

impl FeedbackDetector {
    /// Classify a feedback utterance. `None` means the text expresses no
    /// recognizable feedback and should be folded into preferences only.
    pub fn classify(text: &str) -> Option<FeedbackKind> {
        if vocabulary::match_feedback_signal(text).is_some() {
            return Some(FeedbackKind::ConditionChange);
        }
        if vocabulary::contains_any(text, NEGATIVE_KEYWORDS) {
            return Some(FeedbackKind::Negative);
        }
        if vocabulary::contains_any(text, MORE_ITEMS_KEYWORDS) {
            return Some(FeedbackKind::MoreItems);
        }
        if vocabulary::contains_any(text, BEHAVIOR_KEYWORDS) {
            return Some(FeedbackKind::Behavior);
        }
        if vocabulary::contains_any(text, POSITIVE_KEYWORDS) {
            return Some(FeedbackKind::Positive);
        }
        None
    }
}
