//! Seven-stage retrieval pipeline.
//!
//! Stages run in order, each only while the unique accumulated count is
//! still below the requested count. Stages 1–2 follow the selected strategy
//! and its complement; stages 3–7 are structured re-runs over progressively
//! relaxed constraint sets. Short results are not an error; only a
//! collaborator failure aborts the run.

use tracing::debug;

use stylist_core::config::RetrievalConfig;
use stylist_core::errors::RetrievalError;
use stylist_core::models::{Candidate, ConstraintSet, RetrievalRequest, StorePredicate};
use stylist_core::traits::{ICandidateStore, ISimilarityIndex};

use crate::dedup::Accumulator;
use crate::predicate;
use crate::strategy::{select_strategy, Strategy};

/// What one stage did: which relaxation it was, how it searched, and what
/// it contributed. Surfaced instead of swallowing per-stage outcomes.
#[derive(Debug, Clone)]
pub struct StageReport {
    pub stage: u8,
    pub strategy: Strategy,
    pub fetched: usize,
    pub added: usize,
}

#[derive(Debug)]
pub struct PipelineOutcome {
    pub candidates: Vec<Candidate>,
    pub stage_reports: Vec<StageReport>,
}

impl PipelineOutcome {
    /// Highest stage that actually contributed a candidate, if any.
    pub fn deepest_contributing_stage(&self) -> Option<u8> {
        self.stage_reports
            .iter()
            .filter(|r| r.added > 0)
            .map(|r| r.stage)
            .max()
    }
}

pub struct RetrievalPipeline<'a> {
    store: &'a dyn ICandidateStore,
    index: &'a dyn ISimilarityIndex,
    config: &'a RetrievalConfig,
}

impl<'a> RetrievalPipeline<'a> {
    pub fn new(
        store: &'a dyn ICandidateStore,
        index: &'a dyn ISimilarityIndex,
        config: &'a RetrievalConfig,
    ) -> Self {
        Self { store, index, config }
    }

    pub fn run(&self, request: &RetrievalRequest) -> Result<PipelineOutcome, RetrievalError> {
        let fetch = request.requested_count * self.config.fetch_multiplier;
        let primary = select_strategy(&request.query_text, &request.constraints);

        let mut acc = Accumulator::with_exclusions(request.exclusions.clone());
        let mut reports = Vec::with_capacity(7);

        let relaxations: [(u8, ConstraintSet); 4] = [
            (3, request.constraints.without_style()),
            (4, request.constraints.without_brand()),
            (5, request.constraints.without_price()),
            (6, request.constraints.category_only()),
        ];

        self.run_stage(1, primary, request, &request.constraints, fetch, &mut acc, &mut reports)?;

        if acc.len() < request.requested_count {
            self.run_stage(
                2,
                primary.complement(),
                request,
                &request.constraints,
                fetch,
                &mut acc,
                &mut reports,
            )?;
        }

        for (stage, relaxed) in &relaxations {
            if acc.len() >= request.requested_count {
                break;
            }
            self.run_stage(*stage, Strategy::Structured, request, relaxed, fetch, &mut acc, &mut reports)?;
        }

        if acc.len() < request.requested_count {
            let floor = predicate::popularity_floor(self.config, &request.exclusions, fetch);
            let batch = self.store.query(&floor)?;
            push_report(&mut reports, 7, Strategy::Structured, batch.len(), &mut acc, batch);
        }

        debug!(
            unique = acc.len(),
            requested = request.requested_count,
            stages = reports.len(),
            "retrieval pipeline finished"
        );
        Ok(PipelineOutcome {
            candidates: acc.into_candidates(),
            stage_reports: reports,
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn run_stage(
        &self,
        stage: u8,
        strategy: Strategy,
        request: &RetrievalRequest,
        constraints: &ConstraintSet,
        fetch: usize,
        acc: &mut Accumulator,
        reports: &mut Vec<StageReport>,
    ) -> Result<(), RetrievalError> {
        let batch = self.fetch_with(strategy, request, constraints, fetch)?;
        push_report(reports, stage, strategy, batch.len(), acc, batch);
        Ok(())
    }

    fn fetch_with(
        &self,
        strategy: Strategy,
        request: &RetrievalRequest,
        constraints: &ConstraintSet,
        fetch: usize,
    ) -> Result<Vec<Candidate>, RetrievalError> {
        let translated = predicate::from_constraints(constraints, &request.exclusions, fetch);
        match strategy {
            Strategy::Structured => self.store.query(&translated),
            Strategy::Similarity => {
                let filter: Option<&StorePredicate> =
                    (!constraints.is_empty()).then_some(&translated);
                self.index.nearest(&request.query_text, fetch, filter)
            }
            Strategy::Hybrid => {
                // Evenly split budget: free-text half first, structured half after.
                let half = (fetch / 2).max(1);
                let mut batch = self.store.search_text(&request.query_text, half)?;
                let structured =
                    predicate::from_constraints(constraints, &request.exclusions, half);
                batch.extend(self.store.query(&structured)?);
                Ok(batch)
            }
        }
    }
}

fn push_report(
    reports: &mut Vec<StageReport>,
    stage: u8,
    strategy: Strategy,
    fetched: usize,
    acc: &mut Accumulator,
    batch: Vec<Candidate>,
) {
    let added = acc.absorb(batch);
    debug!(stage, strategy = strategy.label(), fetched, added, "pipeline stage");
    reports.push(StageReport { stage, strategy, fetched, added });
}
