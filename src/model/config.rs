use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationPolicy {
    /// Log findings and keep going.
    Advisory,
    /// Any finding aborts the computation.
    Strict,
}

/// Which metric rankings are compared, and against what.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricReduction {
    /// Metric 0 against metric 1 only; further metrics are ignored.
    FirstPair,
    /// Metric 0 against every other metric, summed.
    AgainstBase,
    /// The proposed ranking against every metric, summed.
    AgainstProposed,
}

impl MetricReduction {
    pub fn name(self) -> &'static str {
        match self {
            MetricReduction::FirstPair => "first-pair",
            MetricReduction::AgainstBase => "against-base",
            MetricReduction::AgainstProposed => "against-proposed",
        }
    }

    /// Metric columns the reduction needs before any pair can be formed.
    pub fn min_metrics(self) -> usize {
        match self {
            MetricReduction::FirstPair | MetricReduction::AgainstBase => 2,
            MetricReduction::AgainstProposed => 1,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FootruleConfig {
    pub policy: ValidationPolicy,
    pub reduction: MetricReduction,
}

impl FootruleConfig {
    pub fn reference_v1() -> Self {
        Self {
            policy: ValidationPolicy::Advisory,
            reduction: MetricReduction::FirstPair,
        }
    }

    pub fn strict_v1() -> Self {
        let mut base = Self::reference_v1();
        base.policy = ValidationPolicy::Strict;
        base
    }
}

impl Default for FootruleConfig {
    fn default() -> Self {
        Self::reference_v1()
    }
}
