use serde::Serialize;

use crate::model::config::MetricReduction;
use crate::model::findings::ValidationReport;

/// Which ranking sits on one side of a compared pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankSource {
    Proposed,
    Metric(usize),
}

impl RankSource {
    pub fn label(self) -> String {
        match self {
            RankSource::Proposed => "proposed".to_string(),
            RankSource::Metric(i) => format!("metric_{i}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairDistance {
    pub left: RankSource,
    pub right: RankSource,
    pub distance: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemDisplacement {
    pub item: String,
    pub left_rank: usize,
    pub right_rank: usize,
    pub displacement: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FootruleOutcome {
    pub distance: u64,
    pub n_items: usize,
    pub n_metrics: usize,
    pub reduction: MetricReduction,
    /// Largest footrule a single pair can reach for `n_items`.
    pub max_distance: u64,
    pub normalized: f64,
    pub pairs: Vec<PairDistance>,
    /// Per-item displacement within the first compared pair.
    pub displacements: Vec<ItemDisplacement>,
    pub validation: ValidationReport,
}
