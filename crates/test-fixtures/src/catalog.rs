//! Sample catalog used across integration tests.

use stylist_core::models::Candidate;

fn item(
    id: &str,
    name: &str,
    category: &str,
    brand: Option<&str>,
    price: u32,
    rating_avg: f64,
    review_count: u64,
    size_count: u32,
    tags: &[&str],
) -> Candidate {
    Candidate {
        id: id.into(),
        name: name.into(),
        category: category.into(),
        brand: brand.map(Into::into),
        price: Some(price),
        rating_avg,
        review_count,
        size_count,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        relevance: 0.0,
    }
}

/// One well-reviewed basic top, usable alone in unit-style tests.
pub fn sample_candidate() -> Candidate {
    item(
        "top-001",
        "베이직 오버핏 티셔츠",
        "상의",
        Some("무신사 스탠다드"),
        19_900,
        4.7,
        850,
        6,
        &["베이직", "오버핏"],
    )
}

/// Fourteen items across five categories, mixed price bands and ratings.
pub fn sample_catalog() -> Vec<Candidate> {
    vec![
        sample_candidate(),
        item("top-002", "베이직 무지 반팔 티셔츠", "상의", Some("유니클로"), 12_900, 4.5, 1200, 5, &["베이직", "무지"]),
        item("top-003", "스트라이프 옥스포드 셔츠", "상의", Some("폴로"), 89_000, 4.6, 310, 7, &["캐주얼", "스트라이프"]),
        item("top-004", "화이트 베이직 셔츠", "상의", Some("지오다노"), 29_900, 4.2, 95, 4, &["베이직", "포멀"]),
        item("top-005", "빈티지 워싱 맨투맨", "상의", None, 24_500, 3.9, 45, 3, &["빈티지", "캐주얼"]),
        item("btm-001", "와이드 데님 팬츠", "하의", Some("리바이스"), 68_000, 4.4, 520, 6, &["캐주얼", "와이드"]),
        item("btm-002", "블랙 슬랙스", "하의", Some("스파오"), 25_900, 4.1, 230, 5, &["포멀", "베이직"]),
        item("btm-003", "카고 조거 팬츠", "하의", None, 19_900, 3.8, 60, 4, &["스트릿", "카고"]),
        item("out-001", "오버사이즈 블레이저", "아우터", Some("코스"), 159_000, 4.8, 180, 5, &["포멀", "오버핏"]),
        item("out-002", "후드 집업", "아우터", Some("나이키"), 79_000, 4.5, 940, 8, &["캐주얼", "스트릿"]),
        item("out-003", "라이트 바람막이", "아우터", None, 35_000, 4.0, 75, 3, &["스포티"]),
        item("drs-001", "플라워 패턴 원피스", "원피스", None, 45_000, 4.3, 150, 4, &["러블리", "패턴"]),
        item("sho-001", "화이트 스니커즈", "신발", Some("반스"), 72_000, 4.6, 2100, 9, &["캐주얼", "베이직"]),
        item("sho-002", "첼시 부츠", "신발", Some("닥터마틴"), 198_000, 4.7, 430, 6, &["포멀", "빈티지"]),
    ]
}
