//! User-facing response assembly (Korean).

use stylist_core::constants::PRICE_BUDGET_MAX_WON;
use stylist_core::models::{FeedbackKind, RecommendationResult, ScoredCandidate, TurnState};

pub fn degraded_message() -> String {
    "죄송해요, 지금 추천 시스템에 일시적인 문제가 있어요. 잠시 후 다시 시도해주세요.".to_string()
}

pub fn general_message() -> String {
    "안녕하세요! 원하시는 스타일이나 상품을 말씀해주시면 추천해드릴게요.".to_string()
}

pub fn information_message() -> String {
    "상품 추천을 도와드리는 스타일리스트예요. 카테고리, 스타일, 가격대를 말씀해주시면 맞는 상품을 찾아드려요."
        .to_string()
}

pub fn empty_result_message() -> String {
    "조건에 맞는 상품을 찾지 못했어요. 검색 조건을 조금 바꿔서 다시 말씀해주시겠어요?".to_string()
}

pub fn positive_ack() -> String {
    "마음에 드셨다니 다행이에요! 취향을 기억해뒀다가 다음 추천에 반영할게요.".to_string()
}

pub fn behavior_ack() -> String {
    "네, 반영했어요. 다른 스타일도 필요하시면 편하게 말씀해주세요.".to_string()
}

pub fn clarify_message() -> String {
    "어떤 점이 아쉬우셨는지 조금 더 자세히 말씀해주시면 다시 찾아볼게요.".to_string()
}

/// Render a recommendation turn: header, numbered items with reasons, and
/// any bound/quality note carried on the turn.
pub fn recommendation_text(turn: &TurnState, result: &RecommendationResult) -> String {
    if result.is_empty() {
        return empty_result_message();
    }
    let mut out = String::from("이런 상품은 어떠세요?\n");
    for (i, item) in result.items.iter().enumerate() {
        out.push_str(&format_item(i + 1, item));
        out.push('\n');
    }
    if turn.bound_reached {
        out.push_str("원하시는 조건에 꼭 맞는 상품이 많지 않아서, 지금 가능한 범위에서 골라봤어요.\n");
    }
    out
}

fn format_item(rank: usize, item: &ScoredCandidate) -> String {
    let c = &item.candidate;
    let price = match c.price {
        Some(p) => format!("{}원", group_thousands(p)),
        None => "가격 정보 없음".to_string(),
    };
    match &c.brand {
        Some(brand) => format!("{rank}. {} ({brand}, {price}) - {}", c.name, reason(item)),
        None => format!("{rank}. {} ({price}) - {}", c.name, reason(item)),
    }
}

/// Pick the single strongest reason for showing this item.
fn reason(item: &ScoredCandidate) -> &'static str {
    let c = &item.candidate;
    if c.rating_avg >= 4.8 {
        "평점이 매우 높은 상품이에요"
    } else if c.review_count >= 500 {
        "리뷰가 많은 인기 상품이에요"
    } else if item.components.preference_overlap > 0.0 {
        "회원님의 취향과 잘 맞아요"
    } else if c.price.map_or(false, |p| p <= PRICE_BUDGET_MAX_WON) {
        "가격 부담이 적은 상품이에요"
    } else {
        "요청하신 조건에 잘 맞아요"
    }
}

/// Acknowledgement line for feedback turns that do not re-retrieve. A turn
/// the detector could not classify learned nothing, so it asks for detail
/// instead of claiming a preference was recorded.
pub fn feedback_ack(kind: Option<FeedbackKind>) -> String {
    match kind {
        Some(FeedbackKind::Positive) => positive_ack(),
        Some(FeedbackKind::Behavior) => behavior_ack(),
        _ => clarify_message(),
    }
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylist_core::models::{Candidate, ScoreBreakdown, Utterance};

    fn scored(rating: f64, reviews: u64, price: Option<u32>) -> ScoredCandidate {
        ScoredCandidate {
            candidate: Candidate {
                id: "p1".into(),
                name: "베이직 티셔츠".into(),
                category: "상의".into(),
                brand: Some("스파오".into()),
                price,
                rating_avg: rating,
                review_count: reviews,
                size_count: 5,
                tags: vec![],
                relevance: 0.0,
            },
            confidence: 0.8,
            components: ScoreBreakdown::default(),
        }
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(900), "900");
        assert_eq!(group_thousands(19_900), "19,900");
        assert_eq!(group_thousands(1_198_000), "1,198,000");
    }

    #[test]
    fn rating_beats_review_count_as_reason() {
        assert_eq!(reason(&scored(4.9, 2000, Some(10_000))), "평점이 매우 높은 상품이에요");
        assert_eq!(reason(&scored(4.5, 2000, Some(10_000))), "리뷰가 많은 인기 상품이에요");
        assert_eq!(reason(&scored(4.0, 10, Some(10_000))), "가격 부담이 적은 상품이에요");
    }

    #[test]
    fn unclassified_feedback_asks_for_detail() {
        assert_eq!(feedback_ack(Some(FeedbackKind::Positive)), positive_ack());
        assert_eq!(feedback_ack(Some(FeedbackKind::Behavior)), behavior_ack());
        // Nothing was learned from an unmatched turn, so no "반영했어요".
        let unmatched = feedback_ack(None);
        assert_ne!(unmatched, behavior_ack());
        assert!(unmatched.contains("말씀해주시"));
    }

    #[test]
    fn bound_note_is_rendered() {
        let mut turn = TurnState::new("s1".into(), Utterance::new("테스트"));
        turn.bound_reached = true;
        let result = RecommendationResult {
            items: vec![scored(4.5, 100, Some(19_900))],
            requested_count: 5,
        };
        let text = recommendation_text(&turn, &result);
        assert!(text.contains("1. 베이직 티셔츠"));
        assert!(text.contains("지금 가능한 범위에서"));
    }
}
