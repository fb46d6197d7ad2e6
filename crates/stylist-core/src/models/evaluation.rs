use serde::{Deserialize, Serialize};

/// Categorical quality bucket derived from the overall evaluation score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityLevel {
    Excellent,
    Good,
    NeedsImprovement,
}

/// Improvement suggestion emitted by the evaluator.
///
/// Typed so the adjustment node can route on it exhaustively; rendered to
/// user-facing text via [`Suggestion::message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suggestion {
    ImproveRelevance,
    BroadenDiversity,
    IncreaseNovelty,
    ExpandCoverage,
    NoResults,
    Adequate,
}

impl Suggestion {
    pub fn message(self) -> &'static str {
        match self {
            Suggestion::ImproveRelevance => "사용자 요청과 더 관련성 높은 상품이 필요합니다",
            Suggestion::BroadenDiversity => "다양한 카테고리와 스타일의 상품을 포함하세요",
            Suggestion::IncreaseNovelty => "이전에 본 상품과 다른 새로운 상품을 추천하세요",
            Suggestion::ExpandCoverage => "요청 조건을 더 많이 충족하는 상품이 필요합니다",
            Suggestion::NoResults => "추천 결과가 없습니다. 검색 조건을 완화해보세요",
            Suggestion::Adequate => "현재 추천 품질이 양호합니다",
        }
    }
}

/// Four-axis quality report over a ranked result set.
///
/// `overall` is a fixed linear combination of the four sub-scores and lies
/// in [0, 1] whenever the inputs do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub relevance: f64,
    pub diversity: f64,
    pub novelty: f64,
    pub coverage: f64,
    pub overall: f64,
    pub quality: QualityLevel,
    pub suggestions: Vec<Suggestion>,
}

impl EvaluationReport {
    pub fn needs_improvement(&self) -> bool {
        self.quality == QualityLevel::NeedsImprovement
    }
}
