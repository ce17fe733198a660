//! Hover text for table rows.
//!
//! A row's hidden fields become one block of `label: value` lines. The same
//! block is attached to every visible cell of the row, so hovering anywhere
//! on the row shows the same details.

use serde::{Deserialize, Serialize};

use super::projection::ColumnPartition;
use crate::models::Dataset;

/// How labels are rendered inside a tooltip block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipFormat {
    /// `label: value`
    #[default]
    Plain,
    /// `**label**: value`
    Markdown,
}

impl TooltipFormat {
    /// Content type tag understood by the table renderer.
    pub fn kind(&self) -> &'static str {
        match self {
            TooltipFormat::Plain => "text",
            TooltipFormat::Markdown => "markdown",
        }
    }

    fn line(&self, label: &str, value: &str) -> String {
        match self {
            TooltipFormat::Plain => format!("{}: {}", label, value),
            TooltipFormat::Markdown => format!("**{}**: {}", label, value),
        }
    }
}

impl std::str::FromStr for TooltipFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "text" => Ok(TooltipFormat::Plain),
            "markdown" | "md" => Ok(TooltipFormat::Markdown),
            other => Err(other.to_string()),
        }
    }
}

/// Tooltip attached to one visible cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellTooltip {
    pub column: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// One hidden field, unrendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipField {
    pub label: String,
    pub value: String,
}

/// Tooltip block of one row plus its per-cell attachments.
///
/// `fields` carries the same content as `block` before rendering, so a
/// client never has to split the text back apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowTooltip {
    pub block: String,
    pub fields: Vec<TooltipField>,
    pub cells: Vec<CellTooltip>,
}

/// Hidden fields of `row` in the given order.
///
/// Hidden names missing from the dataset are skipped. An out-of-range row
/// has no fields.
pub fn tooltip_fields(dataset: &Dataset, row: usize, hidden: &[String]) -> Vec<TooltipField> {
    let Some(cells) = dataset.row(row) else {
        return Vec::new();
    };

    hidden
        .iter()
        .filter_map(|name| {
            let col = dataset.column_index(name)?;
            Some(TooltipField {
                label: name.clone(),
                value: cells[col].clone(),
            })
        })
        .collect()
}

fn render_block(fields: &[TooltipField], format: TooltipFormat) -> String {
    fields
        .iter()
        .map(|f| format.line(&f.label, &f.value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the hidden fields of `row` in the given order.
pub fn tooltip_block(dataset: &Dataset, row: usize, hidden: &[String], format: TooltipFormat) -> String {
    render_block(&tooltip_fields(dataset, row, hidden), format)
}

/// Build the tooltip of `row` and attach it to each visible column.
pub fn row_tooltip(dataset: &Dataset, row: usize, partition: &ColumnPartition, format: TooltipFormat) -> RowTooltip {
    let fields = tooltip_fields(dataset, row, &partition.hidden);
    let block = render_block(&fields, format);
    let cells = partition
        .visible_in(dataset)
        .into_iter()
        .map(|(column, _)| CellTooltip {
            column,
            value: block.clone(),
            kind: format.kind().to_string(),
        })
        .collect();

    RowTooltip { block, fields, cells }
}

/// One tooltip per selected row, in the same order.
pub fn build_tooltips(
    dataset: &Dataset,
    rows: &[usize],
    partition: &ColumnPartition,
    format: TooltipFormat,
) -> Vec<RowTooltip> {
    rows.iter()
        .filter(|&&idx| idx < dataset.len())
        .map(|&idx| row_tooltip(dataset, idx, partition, format))
        .collect()
}
