use std::io::BufRead;
use std::path::Path;

use crate::input::InputError;
use crate::input::gz::open_maybe_gz;

/// Splits a comma-separated ranking such as `A,B,C`.
pub fn parse_ranking_list(raw: &str) -> Result<Vec<String>, InputError> {
    let ranking: Vec<String> = raw
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect();
    if ranking.is_empty() {
        return Err(InputError::InvalidInput("ranking is empty".to_string()));
    }
    Ok(ranking)
}

/// One item per line, best first. Blank lines and `#` comments are skipped.
pub fn load_ranking_file(path: &Path) -> Result<Vec<String>, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();
    let mut ranking = Vec::new();

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf).map_err(|e| InputError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        if read == 0 {
            break;
        }
        let line = buf.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        ranking.push(line.to_string());
    }

    if ranking.is_empty() {
        return Err(InputError::InvalidInput(format!(
            "ranking file {} is empty",
            path.display()
        )));
    }

    Ok(ranking)
}
