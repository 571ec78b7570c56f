use std::collections::HashMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ScoreTableError;

/// Items with one score per metric, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTable {
    items: Vec<String>,
    scores: Vec<Vec<f64>>,
    index: HashMap<String, usize>,
    n_metrics: usize,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, K>(entries: I) -> Result<Self, ScoreTableError>
    where
        I: IntoIterator<Item = (K, Vec<f64>)>,
        K: Into<String>,
    {
        let mut table = Self::new();
        for (item, scores) in entries {
            table.push(item, scores)?;
        }
        Ok(table)
    }

    /// Appends an item. The first item fixes the number of metrics.
    pub fn push(
        &mut self,
        item: impl Into<String>,
        scores: Vec<f64>,
    ) -> Result<(), ScoreTableError> {
        let item = item.into();
        if self.index.contains_key(&item) {
            return Err(ScoreTableError::DuplicateItem(item));
        }
        if self.items.is_empty() {
            self.n_metrics = scores.len();
        } else if scores.len() != self.n_metrics {
            return Err(ScoreTableError::RaggedScores {
                item,
                expected: self.n_metrics,
                found: scores.len(),
            });
        }
        if let Some(metric) = scores.iter().position(|v| !v.is_finite()) {
            return Err(ScoreTableError::NonFiniteScore { item, metric });
        }
        self.index.insert(item.clone(), self.items.len());
        self.items.push(item);
        self.scores.push(scores);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn n_metrics(&self) -> usize {
        self.n_metrics
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn scores(&self, row: usize) -> Option<&[f64]> {
        self.scores.get(row).map(|s| s.as_slice())
    }

    pub fn position(&self, item: &str) -> Option<usize> {
        self.index.get(item).copied()
    }

    /// Scores of one metric, in table order.
    pub fn column(&self, metric: usize) -> Vec<f64> {
        self.scores
            .iter()
            .filter_map(|row| row.get(metric).copied())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.items
            .iter()
            .zip(self.scores.iter())
            .map(|(item, scores)| (item.as_str(), scores.as_slice()))
    }
}

impl Serialize for ScoreTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (item, scores) in self.iter() {
            map.serialize_entry(item, scores)?;
        }
        map.end()
    }
}

struct ScoreTableVisitor;

impl<'de> Visitor<'de> for ScoreTableVisitor {
    type Value = ScoreTable;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping item ids to arrays of scores")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = ScoreTable::new();
        while let Some((item, scores)) = access.next_entry::<String, Vec<f64>>()? {
            table.push(item, scores).map_err(de::Error::custom)?;
        }
        Ok(table)
    }
}

// Object key order is the table order, so entries are read one by one
// instead of through an intermediate map.
impl<'de> Deserialize<'de> for ScoreTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ScoreTableVisitor)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/table.rs"]
mod tests;
