//! Worked scenarios printed by `rank-footrule demo`.
//!
//! `s1` has two metrics that agree on A > B > C > D; `s2` changes the second
//! metric so that it nearly reverses the first.

use crate::calculator::FootruleCalculator;
use crate::error::FootruleError;
use crate::model::config::FootruleConfig;
use crate::model::table::ScoreTable;
use crate::report::ReportData;

pub struct Scenario {
    pub label: &'static str,
    pub table: ScoreTable,
    pub ranking: Vec<String>,
}

pub fn demo_scenarios() -> Result<Vec<Scenario>, FootruleError> {
    let ranking: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
    let s1 = ScoreTable::from_entries([
        ("A", vec![100.0, 0.5]),
        ("B", vec![90.0, 0.4]),
        ("C", vec![20.0, 0.3]),
        ("D", vec![10.0, 0.05]),
    ])?;
    let s2 = ScoreTable::from_entries([
        ("A", vec![100.0, 0.1]),
        ("B", vec![90.0, 0.3]),
        ("C", vec![20.0, 0.2]),
        ("D", vec![10.0, 0.6]),
    ])?;
    Ok(vec![
        Scenario {
            label: "s1",
            table: s1,
            ranking: ranking.clone(),
        },
        Scenario {
            label: "s2",
            table: s2,
            ranking,
        },
    ])
}

pub fn run_demo(config: FootruleConfig) -> Result<Vec<ReportData>, FootruleError> {
    let calculator = FootruleCalculator::new(config);
    let mut reports = Vec::new();
    for scenario in demo_scenarios()? {
        let outcome = calculator.compute(&scenario.table, &scenario.ranking)?;
        reports.push(ReportData {
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            label: Some(scenario.label.to_string()),
            ranking: scenario.ranking,
            ranking_derived: false,
            scores: scenario.table,
            outcome,
        });
    }
    Ok(reports)
}

#[cfg(test)]
#[path = "../tests/src_inline/demo.rs"]
mod tests;
