use std::path::Path;

use thiserror::Error;
use tracing::info;

pub mod gz;
pub mod ranking;

use gz::open_maybe_gz;

use crate::model::table::ScoreTable;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Reads a JSON object of `item -> [scores]`, plain or gzip-compressed.
pub fn load_score_table(path: &Path) -> Result<ScoreTable, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    let reader = open_maybe_gz(path)?;
    let table: ScoreTable = serde_json::from_reader(reader).map_err(|e| InputError::Json {
        path: path.display().to_string(),
        source: e,
    })?;
    info!(
        "loaded score table: path={}, items={}, metrics={}",
        path.display(),
        table.len(),
        table.n_metrics()
    );
    Ok(table)
}

pub fn parse_score_table(raw: &str) -> Result<ScoreTable, InputError> {
    serde_json::from_str(raw).map_err(|e| InputError::Json {
        path: "<inline>".to_string(),
        source: e,
    })
}

/// Ranking from an explicit list, a file, or nothing; the list wins.
pub fn resolve_ranking(
    list: Option<&str>,
    file: Option<&Path>,
) -> Result<Option<Vec<String>>, InputError> {
    if let Some(raw) = list {
        return ranking::parse_ranking_list(raw).map(Some);
    }
    if let Some(path) = file {
        return ranking::load_ranking_file(path).map(Some);
    }
    Ok(None)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
