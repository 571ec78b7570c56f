//! Spearman footrule distance between a proposed ranking and the rankings
//! implied by per-metric scores.
//!
//! ```
//! use rank_footrule::{ScoreTable, sum_footrule_distances};
//!
//! let table = ScoreTable::from_entries([
//!     ("A", vec![100.0, 0.1]),
//!     ("B", vec![90.0, 0.3]),
//!     ("C", vec![20.0, 0.2]),
//!     ("D", vec![10.0, 0.6]),
//! ])
//! .unwrap();
//! let ranking: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
//! assert_eq!(sum_footrule_distances(&table, &ranking).unwrap(), 6);
//! ```

pub mod calculator;
pub mod demo;
pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use calculator::{FootruleCalculator, sum_footrule_distances};
pub use error::{FootruleError, ScoreTableError};
pub use model::{
    Finding, FootruleConfig, FootruleOutcome, MetricReduction, ScoreTable, ValidationPolicy,
};
pub use pipeline::stage2_ranks::rank_indices;
pub use pipeline::stage3_distance::{footrule, max_footrule};
