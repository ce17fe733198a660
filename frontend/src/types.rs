//! Common types used across the frontend application.
//!
//! These mirror the backend's JSON payloads (camelCase on the wire).
//!
//! # Categories
//!
//! - **Table Types** - Rows, tooltips and markers from `/api/table`
//! - **Chart Types** - Bars and hierarchy from `/api/chart`
//! - **Log Types** - Server activity from `/api/logs`
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Table Types
// =============================================================================

/// Color or icon assigned to a category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Marker {
    Color(String),
    Icon(String),
}

impl Marker {
    /// Inline style tinting a table row, if this marker is a color.
    pub fn row_style(&self) -> Option<String> {
        match self {
            Marker::Color(color) => Some(format!("background-color: {}", color)),
            Marker::Icon(_) => None,
        }
    }

    /// Inline style for a legend swatch.
    pub fn swatch_style(&self) -> String {
        match self {
            Marker::Color(color) => format!("background-color: {}", color),
            Marker::Icon(_) => String::new(),
        }
    }

    pub fn icon(&self) -> Option<&str> {
        match self {
            Marker::Icon(icon) => Some(icon),
            Marker::Color(_) => None,
        }
    }
}

/// One legend line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub category: String,
    pub marker: Marker,
}

/// Tooltip attached to one visible cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellTooltip {
    pub column: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// One hidden field of a row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipField {
    pub label: String,
    pub value: String,
}

/// Hover details of one row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowTooltip {
    pub block: String,
    #[serde(default)]
    pub fields: Vec<TooltipField>,
    pub cells: Vec<CellTooltip>,
}

/// Response of `GET /api/table`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    pub query: Option<String>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub tooltips: Vec<RowTooltip>,
    pub markers: Vec<Option<Marker>>,
    pub legend: Vec<LegendEntry>,
    pub total: usize,
    pub matched: usize,
}

/// A row ready for display.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub index: usize,
    pub cells: Vec<String>,
    pub tooltip: Option<RowTooltip>,
    pub marker: Option<Marker>,
}

impl TableView {
    /// Zip rows with their aligned tooltip and marker.
    pub fn table_rows(&self) -> Vec<TableRow> {
        self.rows
            .iter()
            .enumerate()
            .map(|(index, cells)| TableRow {
                index,
                cells: cells.clone(),
                tooltip: self.tooltips.get(index).cloned(),
                marker: self.markers.get(index).cloned().flatten(),
            })
            .collect()
    }
}

// =============================================================================
// Chart Types
// =============================================================================

/// One horizontal duration bar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationBar {
    pub brand_name: String,
    pub generic_name: String,
    pub category: String,
    pub duration: String,
    pub low: f64,
    pub high: f64,
    pub span: f64,
    #[serde(default)]
    pub mechanism_of_action: String,
    #[serde(default)]
    pub common_side_effects: String,
}

impl DurationBar {
    /// Hover text: generic name, duration, mechanism and side effects.
    pub fn hover_text(&self) -> String {
        [
            ("Generic Name", &self.generic_name),
            ("Duration", &self.duration),
            ("Mechanism of Action", &self.mechanism_of_action),
            ("Common Side Effects", &self.common_side_effects),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect::<Vec<_>>()
        .join("\n")
    }
}

/// Category → generic → brand tree node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyNode {
    pub label: String,
    pub value: f64,
    #[serde(default)]
    pub children: Vec<HierarchyNode>,
}

/// Response of `GET /api/chart`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartView {
    pub categories: Vec<String>,
    pub bars: Vec<DurationBar>,
    pub hierarchy: Vec<HierarchyNode>,
    pub legend: Vec<LegendEntry>,
    /// Every column of the selected records, for the data table.
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

impl ChartView {
    /// Largest bar end, used to scale the chart. Never below one hour.
    pub fn max_hours(&self) -> f64 {
        self.bars
            .iter()
            .map(|b| b.low + b.span)
            .fold(1.0, f64::max)
    }

    pub fn marker_for(&self, category: &str) -> Option<&Marker> {
        self.legend
            .iter()
            .find(|e| e.category == category)
            .map(|e| &e.marker)
    }
}

// =============================================================================
// Log Types
// =============================================================================

/// Log level for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            LogLevel::Success => "log-success",
            LogLevel::Warning => "log-warning",
            LogLevel::Error => "log-error",
            LogLevel::Info => "log-info",
        }
    }
}

/// A server log line received over SSE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    #[serde(default)]
    pub indent: u8,
    /// RFC 3339 timestamp from the server
    pub timestamp: String,
    /// Arrival order, assigned on receipt
    #[serde(skip)]
    pub seq: u64,
}

impl LogEntry {
    /// `HH:MM:SS` part of the timestamp.
    pub fn time(&self) -> &str {
        self.timestamp.get(11..19).unwrap_or(&self.timestamp)
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug)]
pub enum AppError {
    /// Network/HTTP error.
    Network(String),
    /// Backend answered with an error status.
    Server { status: u16, message: String },
    /// Response body didn't match the expected shape.
    Decode(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Server { status, message } => write!(f, "Server error ({}): {}", status, message),
            AppError::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tooltip_fields_from_wire() {
        let json = r#"{
            "block": "**Note: dosing**: twice daily",
            "fields": [{"label": "Note: dosing", "value": "twice daily"}],
            "cells": []
        }"#;
        let tip: RowTooltip = serde_json::from_str(json).unwrap();
        assert_eq!(tip.fields[0].label, "Note: dosing");
        assert_eq!(tip.fields[0].value, "twice daily");
    }

    #[test]
    fn test_table_rows_alignment() {
        let view = TableView {
            query: None,
            columns: vec!["Brand Name".into()],
            rows: vec![vec!["Adderall".into()], vec!["Strattera".into()]],
            tooltips: vec![RowTooltip { block: "a: b".into(), fields: vec![], cells: vec![] }],
            markers: vec![None, Some(Marker::Color("#fff".into()))],
            legend: vec![],
            total: 2,
            matched: 2,
        };
        let rows = view.table_rows();

        assert_eq!(rows.len(), 2);
        assert!(rows[0].tooltip.is_some() && rows[0].marker.is_none());
        assert!(rows[1].tooltip.is_none());
        assert_eq!(rows[1].marker.as_ref().and_then(Marker::row_style).as_deref(), Some("background-color: #fff"));
    }

    #[test]
    fn test_marker_wire_format() {
        let marker: Marker = serde_json::from_str(r#"{"kind":"icon","value":"💊"}"#).unwrap();
        assert_eq!(marker.icon(), Some("💊"));
        assert!(marker.row_style().is_none());
    }

    #[test]
    fn test_log_entry_time() {
        let json = r#"{"level":"warning","message":"Search \"x\": no matches","indent":0,"timestamp":"2025-03-01T09:15:42.123Z"}"#;
        let entry: LogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.level, LogLevel::Warning);
        assert_eq!(entry.time(), "09:15:42");
        assert_eq!(entry.level.css_class(), "log-warning");
        assert_eq!(entry.seq, 0);
    }

    #[test]
    fn test_chart_scale() {
        let chart = ChartView {
            categories: vec![],
            bars: vec![DurationBar {
                brand_name: "Vyvanse".into(),
                generic_name: "Lisdexamfetamine".into(),
                category: "Stimulant".into(),
                duration: "10-14 hours".into(),
                low: 10.0,
                high: 14.0,
                span: 4.0,
                mechanism_of_action: "Prodrug of dextroamphetamine".into(),
                common_side_effects: String::new(),
            }],
            hierarchy: vec![],
            legend: vec![],
            headers: vec![],
            rows: vec![],
        };
        assert_eq!(chart.max_hours(), 14.0);
        assert_eq!(
            chart.bars[0].hover_text(),
            "Generic Name: Lisdexamfetamine\nDuration: 10-14 hours\nMechanism of Action: Prodrug of dextroamphetamine"
        );
        assert_eq!(ChartView { bars: vec![], ..chart }.max_hours(), 1.0);
    }
}
