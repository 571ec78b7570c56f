use crate::error::FootruleError;
use crate::model::table::ScoreTable;

/// Rank index of every position in `scores`, highest score first.
///
/// Stable: tied scores keep their input order, so the earlier entry gets the
/// smaller rank.
pub fn rank_indices(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut ranks = vec![0usize; scores.len()];
    for (rank, &idx) in order.iter().enumerate() {
        ranks[idx] = rank;
    }
    ranks
}

/// Rank vectors for every metric column, indexed `[metric][item]`.
pub fn metric_ranks(table: &ScoreTable) -> Vec<Vec<usize>> {
    (0..table.n_metrics())
        .map(|metric| rank_indices(&table.column(metric)))
        .collect()
}

/// Position of each table item within the proposed ranking, in table order.
///
/// Fails unless the ranking is a permutation of the table's items.
pub fn proposed_ranks(table: &ScoreTable, ranking: &[String]) -> Result<Vec<usize>, FootruleError> {
    if ranking.len() != table.len() {
        return Err(FootruleError::RankingNotPermutation(format!(
            "{} ranked items for {} scored items",
            ranking.len(),
            table.len()
        )));
    }
    let mut ranks: Vec<Option<usize>> = vec![None; table.len()];
    for (rank, item) in ranking.iter().enumerate() {
        let row = table.position(item).ok_or_else(|| {
            FootruleError::RankingNotPermutation(format!("unknown item {item}"))
        })?;
        if ranks[row].is_some() {
            return Err(FootruleError::RankingNotPermutation(format!(
                "duplicate item {item}"
            )));
        }
        ranks[row] = Some(rank);
    }
    // Equal lengths and no duplicates leave no gaps.
    Ok(ranks.into_iter().flatten().collect())
}

/// Ranking implied by metric 0, best first.
pub fn derived_ranking(table: &ScoreTable) -> Vec<String> {
    if table.n_metrics() == 0 {
        return table.items().to_vec();
    }
    let ranks = rank_indices(&table.column(0));
    let mut ordered = vec![String::new(); ranks.len()];
    for (row, &rank) in ranks.iter().enumerate() {
        ordered[rank] = table.items()[row].clone();
    }
    ordered
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_ranks.rs"]
mod tests;
