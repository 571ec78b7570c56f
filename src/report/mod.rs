pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::outcome::FootruleOutcome;
use crate::model::table::ScoreTable;

#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub tool_name: String,
    pub tool_version: String,
    pub label: Option<String>,
    pub ranking: Vec<String>,
    pub ranking_derived: bool,
    pub scores: ScoreTable,
    pub outcome: FootruleOutcome,
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn format_scores(scores: &[f64]) -> String {
    let parts: Vec<String> = scores.iter().map(|v| format!("{v}")).collect();
    format!("[{}]", parts.join(", "))
}

/// Short reading of a normalized distance.
pub fn agreement_label(normalized: f64) -> &'static str {
    if normalized <= 0.0 {
        "identical orderings"
    } else if normalized <= 0.25 {
        "close agreement"
    } else if normalized <= 0.60 {
        "partial agreement"
    } else {
        "strong disagreement"
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
