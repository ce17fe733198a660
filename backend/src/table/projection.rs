//! Visible / hidden column split.
//!
//! The partition is caller configuration. It is never checked against the
//! dataset: names that don't exist, and columns that appear in neither list,
//! simply don't show up anywhere.

use serde::{Deserialize, Serialize};

use crate::models::Dataset;

/// Default number of trailing columns shown only on hover.
pub const DEFAULT_HIDDEN_TAIL: usize = 6;

/// Ordered visible and hidden column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnPartition {
    pub visible: Vec<String>,
    pub hidden: Vec<String>,
}

impl ColumnPartition {
    pub fn new(visible: Vec<String>, hidden: Vec<String>) -> Self {
        Self { visible, hidden }
    }

    /// Hide the last `n` headers, show the rest.
    ///
    /// `n` larger than the header count hides everything.
    pub fn split_last(headers: &[String], n: usize) -> Self {
        let cut = headers.len().saturating_sub(n);
        Self {
            visible: headers[..cut].to_vec(),
            hidden: headers[cut..].to_vec(),
        }
    }

    /// Hide the named columns, show every other header in file order.
    pub fn from_hidden(headers: &[String], hidden: Vec<String>) -> Self {
        let visible = headers
            .iter()
            .filter(|h| !hidden.contains(h))
            .cloned()
            .collect();
        Self { visible, hidden }
    }

    /// Visible columns present in the dataset, as `(name, index)`.
    pub fn visible_in(&self, dataset: &Dataset) -> Vec<(String, usize)> {
        resolve(&self.visible, dataset)
    }

    /// Hidden columns present in the dataset, as `(name, index)`.
    pub fn hidden_in(&self, dataset: &Dataset) -> Vec<(String, usize)> {
        resolve(&self.hidden, dataset)
    }
}

fn resolve(names: &[String], dataset: &Dataset) -> Vec<(String, usize)> {
    names
        .iter()
        .filter_map(|name| dataset.column_index(name).map(|i| (name.clone(), i)))
        .collect()
}

/// Visible cells of a set of rows.
///
/// `rows[i]` lines up with `source_rows[i]`, the dataset index it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub source_rows: Vec<usize>,
}

/// Restrict the selected rows to the visible columns.
///
/// Out-of-range row indices are skipped.
pub fn project(dataset: &Dataset, partition: &ColumnPartition, rows: &[usize]) -> Projection {
    let visible = partition.visible_in(dataset);
    let mut out = Vec::with_capacity(rows.len());
    let mut source_rows = Vec::with_capacity(rows.len());

    for &idx in rows {
        let Some(cells) = dataset.row(idx) else {
            continue;
        };
        out.push(visible.iter().map(|(_, col)| cells[*col].clone()).collect());
        source_rows.push(idx);
    }

    Projection {
        columns: visible.into_iter().map(|(name, _)| name).collect(),
        rows: out,
        source_rows,
    }
}
