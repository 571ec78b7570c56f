use std::fmt;

use serde::Serialize;

/// Advisory inconsistency detected between a score table and a proposed ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Finding {
    LengthMismatch {
        n_scored: usize,
        n_ranked: usize,
    },
    /// First position where table order and proposed ranking disagree.
    OrderMismatch {
        position: usize,
        table_item: Option<String>,
        ranked_item: Option<String>,
    },
    /// Metric 0 rises between `position - 1` and `position` in table order.
    BaseNotDescending {
        position: usize,
    },
}

impl Finding {
    pub fn code(&self) -> &'static str {
        match self {
            Finding::LengthMismatch { .. } => "LENGTH_MISMATCH",
            Finding::OrderMismatch { .. } => "ORDER_MISMATCH",
            Finding::BaseNotDescending { .. } => "BASE_NOT_DESCENDING",
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::LengthMismatch { n_scored, n_ranked } => write!(
                f,
                "score table has {n_scored} items but proposed ranking has {n_ranked}"
            ),
            Finding::OrderMismatch {
                position,
                table_item,
                ranked_item,
            } => write!(
                f,
                "proposed ranking and score table order differ at position {position} (table: {}, ranking: {})",
                table_item.as_deref().unwrap_or("<none>"),
                ranked_item.as_deref().unwrap_or("<none>")
            ),
            Finding::BaseNotDescending { position } => write!(
                f,
                "metric 0 is not in descending order at position {position}"
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub length_ok: bool,
    pub order_ok: bool,
    pub base_descending: bool,
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}
