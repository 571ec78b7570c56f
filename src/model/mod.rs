pub mod config;
pub mod findings;
pub mod outcome;
pub mod table;

pub use config::{FootruleConfig, MetricReduction, ValidationPolicy};
pub use findings::{Finding, ValidationReport};
pub use outcome::{FootruleOutcome, ItemDisplacement, PairDistance, RankSource};
pub use table::ScoreTable;
