//! Domain models for the medication list.
//!
//! - [`Dataset`] - Column headers and rows, in file order
//! - [`Medication`] - Typed view of one row of the known schema
//! - [`columns`] - Header names of the known schema

use serde::{Deserialize, Serialize};

// =============================================================================
// Known Columns
// =============================================================================

/// Header names of `med_list_clean.csv`.
pub mod columns {
    pub const MEDICATION_TYPE: &str = "Medication Type";
    pub const BRAND_NAME: &str = "Brand Name";
    pub const GENERIC_NAME: &str = "Generic Name";
    pub const DURATION: &str = "Duration";
    pub const DURATION_LOW: &str = "duration_low";
    pub const DURATION_HIGH: &str = "duration_high";
    pub const DURATION_SPAN: &str = "duration";
    pub const MECHANISM: &str = "Mechanism of Action";
    pub const SIDE_EFFECTS: &str = "Common Side Effects";
}

// =============================================================================
// Dataset
// =============================================================================

/// In-memory table loaded once at startup.
///
/// Every row holds exactly one cell per header; the loader pads short rows.
/// There is no primary key and row order is the order of the source file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Build a dataset, padding or truncating rows to the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by exact header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// All cells of a row.
    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Cell lookup by row index and column name.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column_index(column)?;
        self.rows.get(row).map(|r| r[col].as_str())
    }

    /// Iterator over `(index, cells)` pairs in file order.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.rows.iter().map(Vec::as_slice).enumerate()
    }

    /// Indices of every row, in order.
    pub fn all_indices(&self) -> Vec<usize> {
        (0..self.rows.len()).collect()
    }

    /// Typed view of a row. `None` only when the index is out of range.
    pub fn medication(&self, row: usize) -> Option<Medication> {
        if row >= self.rows.len() {
            return None;
        }
        let text = |name: &str| self.cell(row, name).unwrap_or("").to_string();
        let number = |name: &str| self.cell(row, name).and_then(parse_hours);

        Some(Medication {
            medication_type: text(columns::MEDICATION_TYPE),
            brand_name: text(columns::BRAND_NAME),
            generic_name: text(columns::GENERIC_NAME),
            duration: text(columns::DURATION),
            duration_low: number(columns::DURATION_LOW),
            duration_high: number(columns::DURATION_HIGH),
            duration_span: number(columns::DURATION_SPAN),
            mechanism_of_action: text(columns::MECHANISM),
            common_side_effects: text(columns::SIDE_EFFECTS),
        })
    }
}

// =============================================================================
// Medication
// =============================================================================

/// One medication entry of the known schema.
///
/// Missing columns read as empty strings, unparseable numbers as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub medication_type: String,
    pub brand_name: String,
    pub generic_name: String,
    /// Free-text descriptor such as "10-12 hours".
    pub duration: String,
    pub duration_low: Option<f64>,
    pub duration_high: Option<f64>,
    /// Length of the range in hours.
    pub duration_span: Option<f64>,
    pub mechanism_of_action: String,
    pub common_side_effects: String,
}

fn parse_hours(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
