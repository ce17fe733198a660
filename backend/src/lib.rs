//! # Medlist - interactive adult ADHD medication table
//!
//! Loads a static medication CSV once and serves it as a searchable table with
//! hover details, category colors or icons, and duration charts.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Loader    │────▶│ Projector        │────▶│  HTTP API   │
//! │ (read once) │     │  (Dataset)  │     │ Tooltips/Markers │     │  (axum)     │
//! └─────────────┘     └─────────────┘     └──────────────────┘     └─────────────┘
//!                                                  ▲
//!                                        search query per request
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use medlist::{load_dataset, Dashboard, DashboardOptions, Palette};
//!
//! let dataset = load_dataset("med_list_clean.csv")?;
//! let options = DashboardOptions::for_dataset(&dataset);
//! let dashboard = Dashboard::new(dataset, options, &Palette::colors());
//!
//! let view = dashboard.table(Some("adder"));
//! println!("{} of {} rows", view.matched, view.total);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Dataset and the typed medication record
//! - [`parser`] - CSV loading with auto-detection
//! - [`table`] - Projection, tooltips, markers, filters, charts
//! - [`config`] - Environment configuration
//! - [`api`] - HTTP API server

// Core modules
pub mod error;
pub mod models;

// Loading
pub mod parser;

// Presentation logic
pub mod table;

// Configuration
pub mod config;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{ConfigError, LoadError, ServerError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{columns, Dataset, Medication};

// =============================================================================
// Re-exports - Loading
// =============================================================================

pub use parser::{decode_content, detect_delimiter, detect_encoding, load_dataset, parse_bytes, parse_str};

// =============================================================================
// Re-exports - Table
// =============================================================================

pub use table::{
    build_tooltips, decorate_name, duration_bars, filter, filter_categories, filter_rows, hierarchy,
    project, row_tooltip, tooltip_block, tooltip_fields, CategoryStyles, CellTooltip, ChartView, ColumnPartition,
    Dashboard, DashboardOptions, DisplayName, DurationBar, HierarchyNode, LegendEntry, Marker,
    MarkerKind, Palette, Projection, RowTooltip, TableView, TooltipField, TooltipFormat,
};

// =============================================================================
// Re-exports - Config
// =============================================================================

pub use config::{AppConfig, HiddenColumns};

// =============================================================================
// Re-exports - API
// =============================================================================

pub use api::types::{error_response, ChartQuery, ColumnsResponse, LegendResponse, TableQuery};

// Server
pub mod server {
    pub use crate::api::server::{router, start_server, AppState};
}
