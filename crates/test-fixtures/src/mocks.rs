//! In-memory collaborator implementations.

use std::sync::Mutex;

use stylist_core::errors::{ExtractionError, RetrievalError, SessionError};
use stylist_core::models::{Candidate, StorePredicate};
use stylist_core::traits::{ICandidateStore, IFeedbackSink, IGenerativeModel, ISimilarityIndex};

/// Full predicate evaluation against catalog fields. Size bounds are not
/// checkable against a [`Candidate`] and are ignored, matching what a real
/// store would push into a measurements join.
pub fn predicate_matches(candidate: &Candidate, predicate: &StorePredicate) -> bool {
    if predicate.exclude_ids.iter().any(|id| id == &candidate.id) {
        return false;
    }
    if let Some(category) = &predicate.category {
        if &candidate.category != category {
            return false;
        }
    }
    if !predicate.tags.iter().all(|t| candidate.has_tag(t)) {
        return false;
    }
    if let Some(brand) = &predicate.brand {
        if candidate.brand.as_deref() != Some(brand.as_str()) {
            return false;
        }
    }
    if let Some(color) = &predicate.color {
        if !candidate.name.contains(color.as_str()) {
            return false;
        }
    }
    if let Some(min) = predicate.price_min {
        if candidate.price.map_or(true, |p| p < min) {
            return false;
        }
    }
    if let Some(max) = predicate.price_max {
        if candidate.price.map_or(true, |p| p > max) {
            return false;
        }
    }
    if let Some(min_rating) = predicate.min_rating {
        if candidate.rating_avg < min_rating {
            return false;
        }
    }
    if let Some(min_reviews) = predicate.min_review_count {
        if candidate.review_count < min_reviews {
            return false;
        }
    }
    true
}

/// Relational store double over a fixed item list. Query results keep the
/// list's insertion order.
pub struct InMemoryStore {
    items: Vec<Candidate>,
}

impl InMemoryStore {
    pub fn new(items: Vec<Candidate>) -> Self {
        Self { items }
    }
}

impl ICandidateStore for InMemoryStore {
    fn query(&self, predicate: &StorePredicate) -> Result<Vec<Candidate>, RetrievalError> {
        Ok(self
            .items
            .iter()
            .filter(|c| predicate_matches(c, predicate))
            .take(predicate.limit)
            .cloned()
            .collect())
    }

    fn search_text(&self, text: &str, limit: usize) -> Result<Vec<Candidate>, RetrievalError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        Ok(self
            .items
            .iter()
            .filter(|c| {
                tokens
                    .iter()
                    .any(|t| c.name.contains(*t) || c.tags.iter().any(|tag| tag == *t))
            })
            .take(limit)
            .cloned()
            .collect())
    }
}

/// Similarity index double: token overlap stands in for vector distance.
pub struct InMemoryIndex {
    items: Vec<Candidate>,
}

impl InMemoryIndex {
    pub fn new(items: Vec<Candidate>) -> Self {
        Self { items }
    }
}

impl ISimilarityIndex for InMemoryIndex {
    fn nearest(
        &self,
        query: &str,
        k: usize,
        filter: Option<&StorePredicate>,
    ) -> Result<Vec<Candidate>, RetrievalError> {
        let tokens: Vec<&str> = query.split_whitespace().collect();
        let mut scored: Vec<(usize, &Candidate)> = self
            .items
            .iter()
            .filter(|c| filter.map_or(true, |p| predicate_matches(c, p)))
            .map(|c| {
                let hits = tokens
                    .iter()
                    .filter(|t| c.name.contains(**t) || c.tags.iter().any(|tag| tag == **t))
                    .count();
                (hits, c)
            })
            .filter(|(hits, _)| *hits > 0)
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.id.cmp(&b.1.id)));
        Ok(scored
            .into_iter()
            .take(k)
            .map(|(hits, c)| {
                let mut hit = c.clone();
                hit.relevance = hits as f64 / tokens.len() as f64;
                hit
            })
            .collect())
    }
}

/// Store that always fails, for degraded-path tests.
pub struct FailingStore;

impl ICandidateStore for FailingStore {
    fn query(&self, _predicate: &StorePredicate) -> Result<Vec<Candidate>, RetrievalError> {
        Err(RetrievalError::StoreUnavailable {
            reason: "connection refused".into(),
        })
    }

    fn search_text(&self, _text: &str, _limit: usize) -> Result<Vec<Candidate>, RetrievalError> {
        Err(RetrievalError::StoreUnavailable {
            reason: "connection refused".into(),
        })
    }
}

pub struct FailingIndex;

impl ISimilarityIndex for FailingIndex {
    fn nearest(
        &self,
        _query: &str,
        _k: usize,
        _filter: Option<&StorePredicate>,
    ) -> Result<Vec<Candidate>, RetrievalError> {
        Err(RetrievalError::IndexUnavailable {
            reason: "index offline".into(),
        })
    }
}

/// Language model double that replays a fixed response.
pub struct ScriptedModel {
    response: String,
}

impl ScriptedModel {
    pub fn new(response: impl Into<String>) -> Self {
        Self { response: response.into() }
    }
}

impl IGenerativeModel for ScriptedModel {
    fn generate(&self, _prompt: &str) -> Result<String, ExtractionError> {
        Ok(self.response.clone())
    }
}

pub struct FailingModel;

impl IGenerativeModel for FailingModel {
    fn generate(&self, _prompt: &str) -> Result<String, ExtractionError> {
        Err(ExtractionError::ServiceUnavailable {
            reason: "model endpoint down".into(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedFeedback {
    pub session_id: String,
    pub candidate_id: String,
    pub reason: String,
    pub confidence: f64,
}

/// Sink that captures every record for assertions.
#[derive(Default)]
pub struct RecordingSink {
    records: Mutex<Vec<RecordedFeedback>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded(&self) -> Vec<RecordedFeedback> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl IFeedbackSink for RecordingSink {
    fn record(
        &self,
        session_id: &str,
        candidate_id: &str,
        reason: &str,
        confidence: f64,
    ) -> Result<(), SessionError> {
        let mut records = self.records.lock().map_err(|_| SessionError::SinkRejected {
            candidate_id: candidate_id.to_string(),
            reason: "sink lock poisoned".into(),
        })?;
        records.push(RecordedFeedback {
            session_id: session_id.to_string(),
            candidate_id: candidate_id.to_string(),
            reason: reason.to_string(),
            confidence,
        });
        Ok(())
    }
}
