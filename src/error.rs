use thiserror::Error;

use crate::model::findings::Finding;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreTableError {
    #[error("duplicate item id: {0}")]
    DuplicateItem(String),
    #[error("item {item} has {found} scores, expected {expected}")]
    RaggedScores {
        item: String,
        expected: usize,
        found: usize,
    },
    #[error("item {item} has a non-finite score at metric {metric}")]
    NonFiniteScore { item: String, metric: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FootruleError {
    #[error(transparent)]
    Table(#[from] ScoreTableError),
    #[error("at least {required} metric columns are required, table has {found}")]
    TooFewMetrics { required: usize, found: usize },
    #[error("proposed ranking is not a permutation of the scored items: {0}")]
    RankingNotPermutation(String),
    #[error("validation failed: {}", format_findings(.0))]
    Validation(Vec<Finding>),
}

fn format_findings(findings: &[Finding]) -> String {
    findings
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
