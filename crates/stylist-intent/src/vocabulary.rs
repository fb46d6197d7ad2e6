//! Closed extraction vocabulary.
//!
//! Each table maps a canonical slot value to its surface synonyms. Tables
//! are ordered; the first matching entry wins and there is no backtracking.
//! The lists are heuristic defaults inherited from the source platform's
//! Korean fashion domain — tunable, not ground truth.

use stylist_core::models::{FeedbackSignal, PriceBand};

/// Keywords that signal a recommendation request.
pub const RECOMMENDATION_KEYWORDS: &[&str] = &["추천", "보여줘", "찾아줘", "없어", "어떤", "뭐가"];

/// Keywords that signal feedback on a previous recommendation.
pub const FEEDBACK_KEYWORDS: &[&str] = &["저렴한", "다른", "더", "좀", "변화"];

/// Keywords that signal an information request.
pub const INFORMATION_KEYWORDS: &[&str] = &["뭐야", "무슨", "알려줘"];

/// Mood/similarity markers used by retrieval strategy selection.
///
/// Deliberately disjoint from the style table below: a style word that
/// resolves into a constraint is not also counted as a free-text mood
/// marker.
pub const MOOD_MARKERS: &[&str] = &[
    "같은", "비슷한", "이런", "저런", "느낌", "분위기", "무드", "요즘", "어울리",
];

pub const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "상의",
        &[
            "상의", "티셔츠", "셔츠", "니트", "후드", "맨투맨", "반팔", "긴팔", "블라우스", "탑",
        ],
    ),
    (
        "하의",
        &["하의", "바지", "청바지", "슬랙스", "트레이닝", "반바지", "팬츠"],
    ),
    ("신발", &["신발", "운동화", "스니커즈", "로퍼", "옥스포드"]),
    ("아우터", &["아우터", "패딩", "코트", "자켓", "가디건"]),
    (
        "패션소품",
        &["패션소품", "가방", "모자", "양말", "액세서리"],
    ),
];

pub const STYLES: &[(&str, &[&str])] = &[
    ("오버핏", &["오버핏", "오버사이즈", "빅사이즈", "루즈"]),
    ("슬림핏", &["슬림핏", "슬림", "타이트", "꽉끼는"]),
    ("머슬핏", &["머슬핏", "머슬", "헬스"]),
    ("베이직", &["베이직", "베이식", "기본", "심플", "무지"]),
    ("스트릿", &["스트릿", "힙합", "힙한", "캐주얼"]),
    ("빈티지", &["빈티지", "레트로", "올드"]),
    ("스포티", &["스포티", "스포츠", "운동복"]),
    ("꾸안꾸", &["꾸안꾸", "꾸민듯안꾸민듯", "자연스러운"]),
    ("트렌디", &["트렌디", "유행", "인기", "핫한"]),
    ("미니멀", &["미니멀", "미니멀리즘"]),
];

pub const COLORS: &[(&str, &[&str])] = &[
    ("블랙", &["블랙", "검정", "검은"]),
    ("화이트", &["화이트", "흰색", "흰"]),
    ("네이비", &["네이비", "남색", "진한파랑"]),
    ("그레이", &["그레이", "회색"]),
    ("베이지", &["베이지", "크림", "아이보리"]),
    ("레드", &["레드", "빨간", "빨강"]),
    ("블루", &["블루", "파란", "파랑"]),
];

pub const PRICE_BANDS: &[(PriceBand, &[&str])] = &[
    (PriceBand::Budget, &["저렴", "싼", "가성비", "합리적"]),
    (PriceBand::Mid, &["보통", "적당한", "중간"]),
    (PriceBand::Premium, &["고급", "비싼", "프리미엄", "럭셔리"]),
];

pub const FEEDBACK_SIGNALS: &[(FeedbackSignal, &[&str])] = &[
    (FeedbackSignal::Cheaper, &["저렴한", "싼", "가격 낮은"]),
    (
        FeedbackSignal::DifferentStyle,
        &["다른 스타일", "다른 느낌", "변화"],
    ),
    (
        FeedbackSignal::BetterQuality,
        &["품질 좋은", "내구성", "오래가는"],
    ),
    (FeedbackSignal::MoreTrendy, &["트렌디한", "유행", "인기"]),
];

fn first_match<'a, T: Copy>(tables: &'a [(T, &[&str])], text: &str) -> Option<T> {
    tables
        .iter()
        .find(|(_, synonyms)| synonyms.iter().any(|s| text.contains(s)))
        .map(|(canonical, _)| *canonical)
}

pub fn match_category(text: &str) -> Option<&'static str> {
    first_match(CATEGORIES, text)
}

pub fn match_style(text: &str) -> Option<&'static str> {
    first_match(STYLES, text)
}

pub fn match_color(text: &str) -> Option<&'static str> {
    first_match(COLORS, text)
}

pub fn match_price_band(text: &str) -> Option<PriceBand> {
    first_match(PRICE_BANDS, text)
}

pub fn match_feedback_signal(text: &str) -> Option<FeedbackSignal> {
    first_match(FEEDBACK_SIGNALS, text)
}

/// Whether the text carries a free-text mood marker.
pub fn has_mood_marker(text: &str) -> bool {
    MOOD_MARKERS.iter().any(|m| text.contains(m))
}

pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_first_table_entry_wins() {
        // "반팔 바지" matches both tables; 상의 is listed first.
        assert_eq!(match_category("반팔 바지"), Some("상의"));
    }

    #[test]
    fn style_synonyms_resolve_to_canonical() {
        assert_eq!(match_style("무지 티셔츠"), Some("베이직"));
        assert_eq!(match_style("힙한 느낌"), Some("스트릿"));
    }

    #[test]
    fn mood_markers_exclude_style_vocabulary() {
        assert!(has_mood_marker("요즘 유행하는 옷"));
        assert!(!has_mood_marker("베이직 스타일의 상의 추천해줘"));
    }
}
