//! Application configuration.
//!
//! Centralized configuration for the medication list frontend.

/// Backend API base URL.
///
/// Empty means same origin, which is how the backend serves the built
/// frontend. Point it at `http://localhost:8050` when running `trunk serve`.
pub const BACKEND_URL: &str = "";

/// Page title.
pub const APP_NAME: &str = "Adult ADHD Medication List";

/// Delay before a search request is sent, in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u32 = 200;

/// Width of the duration chart drawing area, in SVG units.
pub const CHART_WIDTH: f64 = 640.0;

/// Height of one bar row in the duration chart.
pub const CHART_ROW_HEIGHT: f64 = 26.0;

/// Maximum server log lines kept in memory.
pub const MAX_LOG_ENTRIES: usize = 200;
