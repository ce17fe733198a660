//! REST API types for frontend integration.
//!
//! Table and chart payloads are the [`crate::table`] views serialized as
//! camelCase JSON; this module only adds the request parameters and the
//! small envelope types.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::table::{ColumnPartition, LegendEntry};

/// `GET /api/table?q=...`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableQuery {
    /// Search text matched against the display column.
    pub q: Option<String>,
}

/// `GET /api/chart?types=a,b`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartQuery {
    /// Comma-separated category values; absent or empty selects all.
    pub types: Option<String>,
}

impl ChartQuery {
    pub fn categories(&self) -> Vec<String> {
        self.types
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Response of `GET /api/legend`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendResponse {
    pub column: String,
    pub entries: Vec<LegendEntry>,
}

/// Response of `GET /api/columns`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnsResponse {
    pub headers: Vec<String>,
    pub partition: ColumnPartition,
    pub display_column: String,
    pub category_column: String,
    pub row_count: usize,
}

/// Create an error response
pub fn error_response(error: &str) -> Value {
    json!({
        "requestId": Uuid::new_v4().to_string(),
        "status": "error",
        "error": error,
    })
}
