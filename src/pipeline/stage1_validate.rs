use tracing::{info, warn};

use crate::model::findings::{Finding, ValidationReport};
use crate::model::table::ScoreTable;

/// Advisory checks of a proposed ranking against a score table.
///
/// Findings are logged and collected; none of them stop the computation here.
pub fn run_stage1(table: &ScoreTable, ranking: &[String]) -> ValidationReport {
    let mut findings = Vec::new();

    let length = check_length(table, ranking);
    let length_ok = length.is_none();
    if let Some(finding) = length {
        warn!("{finding}");
        findings.push(finding);
    }

    let order = check_order(table.items(), ranking);
    let order_ok = order.is_none();
    match order {
        Some(finding) => {
            warn!("{finding}");
            findings.push(finding);
        }
        None => info!("proposed ranking matches score table order"),
    }

    let descending = check_base_descending(table);
    let base_descending = descending.is_none();
    match descending {
        Some(finding) => {
            warn!("{finding}");
            findings.push(finding);
        }
        None => info!("metric 0 is in descending order"),
    }

    info!("rank check complete ({} finding(s))", findings.len());

    ValidationReport {
        length_ok,
        order_ok,
        base_descending,
        findings,
    }
}

pub fn check_length(table: &ScoreTable, ranking: &[String]) -> Option<Finding> {
    if table.len() == ranking.len() {
        return None;
    }
    Some(Finding::LengthMismatch {
        n_scored: table.len(),
        n_ranked: ranking.len(),
    })
}

pub fn check_order(table_items: &[String], ranking: &[String]) -> Option<Finding> {
    let n = table_items.len().max(ranking.len());
    for position in 0..n {
        let table_item = table_items.get(position);
        let ranked_item = ranking.get(position);
        if table_item != ranked_item {
            return Some(Finding::OrderMismatch {
                position,
                table_item: table_item.cloned(),
                ranked_item: ranked_item.cloned(),
            });
        }
    }
    None
}

/// Ties are allowed; only a strict rise counts.
pub fn check_base_descending(table: &ScoreTable) -> Option<Finding> {
    let base = table.column(0);
    base.windows(2)
        .position(|w| w[1] > w[0])
        .map(|idx| Finding::BaseNotDescending { position: idx + 1 })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_validate.rs"]
mod tests;
