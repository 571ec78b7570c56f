use tracing::warn;

use crate::error::FootruleError;
use crate::model::config::{FootruleConfig, ValidationPolicy};
use crate::model::outcome::FootruleOutcome;
use crate::model::table::ScoreTable;
use crate::pipeline::stage1_validate::run_stage1;
use crate::pipeline::stage3_distance::{max_footrule, run_stage3};

/// Sum of Spearman footrule distances under the reference profile:
/// advisory validation, metric 0 compared with metric 1.
pub fn sum_footrule_distances(
    table: &ScoreTable,
    ranking: &[String],
) -> Result<u64, FootruleError> {
    FootruleCalculator::default()
        .compute(table, ranking)
        .map(|outcome| outcome.distance)
}

#[derive(Debug, Clone, Default)]
pub struct FootruleCalculator {
    config: FootruleConfig,
}

impl FootruleCalculator {
    pub fn new(config: FootruleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FootruleConfig {
        &self.config
    }

    pub fn compute(
        &self,
        table: &ScoreTable,
        ranking: &[String],
    ) -> Result<FootruleOutcome, FootruleError> {
        let validation = run_stage1(table, ranking);
        if self.config.policy == ValidationPolicy::Strict && !validation.is_clean() {
            return Err(FootruleError::Validation(validation.findings));
        }
        if !validation.is_clean() {
            warn!(
                "continuing with {} advisory finding(s)",
                validation.findings.len()
            );
        }

        let stage3 = run_stage3(table, ranking, self.config.reduction)?;

        let max_distance = max_footrule(table.len());
        let denom = max_distance * stage3.pairs.len() as u64;
        let normalized = if denom == 0 {
            0.0
        } else {
            stage3.distance as f64 / denom as f64
        };

        Ok(FootruleOutcome {
            distance: stage3.distance,
            n_items: table.len(),
            n_metrics: table.n_metrics(),
            reduction: self.config.reduction,
            max_distance,
            normalized,
            pairs: stage3.pairs,
            displacements: stage3.displacements,
            validation,
        })
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/calculator.rs"]
mod tests;
