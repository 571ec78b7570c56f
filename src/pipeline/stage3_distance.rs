use tracing::{debug, info};

use crate::error::FootruleError;
use crate::model::config::MetricReduction;
use crate::model::outcome::{ItemDisplacement, PairDistance, RankSource};
use crate::model::table::ScoreTable;
use crate::pipeline::stage2_ranks::{metric_ranks, proposed_ranks};

#[derive(Debug, Clone, Default)]
pub struct Stage3Output {
    pub distance: u64,
    pub pairs: Vec<PairDistance>,
    pub displacements: Vec<ItemDisplacement>,
}

/// Spearman footrule between two rank vectors over the same items.
pub fn footrule(a: &[usize], b: &[usize]) -> u64 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| x.abs_diff(y) as u64)
        .sum()
}

/// Largest footrule for `n` items, reached by full reversal.
pub fn max_footrule(n: usize) -> u64 {
    let n = n as u64;
    n * n / 2
}

pub fn run_stage3(
    table: &ScoreTable,
    ranking: &[String],
    reduction: MetricReduction,
) -> Result<Stage3Output, FootruleError> {
    // Fewer than two items cannot be displaced, whatever the metric count.
    if table.len() <= 1 {
        return Ok(Stage3Output::default());
    }
    let n_metrics = table.n_metrics();
    if n_metrics < reduction.min_metrics() {
        return Err(FootruleError::TooFewMetrics {
            required: reduction.min_metrics(),
            found: n_metrics,
        });
    }

    let ranks = metric_ranks(table);
    let proposed = match reduction {
        MetricReduction::AgainstProposed => Some(proposed_ranks(table, ranking)?),
        _ => None,
    };

    let sources = pair_sources(reduction, n_metrics);
    if reduction == MetricReduction::FirstPair && n_metrics > 2 {
        info!(
            "only metrics 0 and 1 are compared; {} further metric(s) ignored",
            n_metrics - 2
        );
    }

    let proposed = proposed.as_deref().unwrap_or(&[]);
    let mut pairs = Vec::with_capacity(sources.len());
    for &(left, right) in &sources {
        let distance = footrule(
            rank_vector(left, &ranks, proposed),
            rank_vector(right, &ranks, proposed),
        );
        debug!("{} vs {}: {}", left.label(), right.label(), distance);
        pairs.push(PairDistance {
            left,
            right,
            distance,
        });
    }

    let displacements = match sources.first() {
        Some(&(left, right)) => item_displacements(
            table.items(),
            rank_vector(left, &ranks, proposed),
            rank_vector(right, &ranks, proposed),
        ),
        None => Vec::new(),
    };

    Ok(Stage3Output {
        distance: pairs.iter().map(|p| p.distance).sum(),
        pairs,
        displacements,
    })
}

fn pair_sources(reduction: MetricReduction, n_metrics: usize) -> Vec<(RankSource, RankSource)> {
    match reduction {
        MetricReduction::FirstPair => vec![(RankSource::Metric(0), RankSource::Metric(1))],
        MetricReduction::AgainstBase => (1..n_metrics)
            .map(|i| (RankSource::Metric(0), RankSource::Metric(i)))
            .collect(),
        MetricReduction::AgainstProposed => (0..n_metrics)
            .map(|i| (RankSource::Proposed, RankSource::Metric(i)))
            .collect(),
    }
}

fn rank_vector<'a>(
    source: RankSource,
    ranks: &'a [Vec<usize>],
    proposed: &'a [usize],
) -> &'a [usize] {
    match source {
        RankSource::Proposed => proposed,
        RankSource::Metric(i) => &ranks[i],
    }
}

fn item_displacements(items: &[String], left: &[usize], right: &[usize]) -> Vec<ItemDisplacement> {
    items
        .iter()
        .zip(left.iter().zip(right.iter()))
        .map(|(item, (&l, &r))| ItemDisplacement {
            item: item.clone(),
            left_rank: l,
            right_rank: r,
            displacement: l.abs_diff(r),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_distance.rs"]
mod tests;
