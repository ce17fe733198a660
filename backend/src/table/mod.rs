//! Table pipeline.
//!
//! - Projection: visible / hidden column split
//! - Tooltip: hidden fields rendered per row
//! - Styler: category markers and legend
//! - Filter: search box and category selection
//! - Chart: duration bars and hierarchy
//! - View: everything assembled for one request

pub mod chart;
pub mod filter;
pub mod projection;
pub mod styler;
pub mod tooltip;
pub mod view;

pub use chart::{duration_bars, hierarchy, DurationBar, HierarchyNode};
pub use filter::{filter, filter_categories, filter_rows};
pub use projection::{project, ColumnPartition, Projection, DEFAULT_HIDDEN_TAIL};
pub use styler::{
    decorate_name, CategoryStyles, DisplayName, LegendEntry, Marker, MarkerKind, Palette,
    COLOR_PALETTE, ICON_PALETTE,
};
pub use tooltip::{
    build_tooltips, row_tooltip, tooltip_block, tooltip_fields, CellTooltip, RowTooltip, TooltipField, TooltipFormat,
};
pub use view::{ChartView, Dashboard, DashboardOptions, TableView};
