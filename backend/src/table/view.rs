//! The assembled table and chart views served to the frontend.
//!
//! [`Dashboard`] is built once at startup and only read afterwards, so it can
//! be shared between requests behind an `Arc` without locking.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::chart::{duration_bars, hierarchy, DurationBar, HierarchyNode};
use super::filter::{filter, filter_categories};
use super::projection::{project, ColumnPartition};
use super::styler::{decorate_name, CategoryStyles, DisplayName, LegendEntry, Marker, Palette};
use super::tooltip::{build_tooltips, RowTooltip, TooltipFormat};
use crate::models::{columns, Dataset};

/// Static presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOptions {
    pub partition: ColumnPartition,
    pub tooltip_format: TooltipFormat,
    /// Column searched by the text filter and decorated on output.
    pub display_column: String,
    pub category_column: String,
    pub display_name: DisplayName,
}

impl DashboardOptions {
    /// Layout of the medication table: last six columns on hover, search on
    /// the brand name, markers by medication type.
    pub fn for_dataset(dataset: &Dataset) -> Self {
        Self {
            partition: ColumnPartition::split_last(dataset.headers(), super::projection::DEFAULT_HIDDEN_TAIL),
            tooltip_format: TooltipFormat::default(),
            display_column: columns::BRAND_NAME.to_string(),
            category_column: columns::MEDICATION_TYPE.to_string(),
            display_name: DisplayName::default(),
        }
    }
}

/// Table payload for one search query.
///
/// `rows`, `tooltips` and `markers` are aligned index by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
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

/// Chart payload for a category selection.
///
/// `headers` and `rows` hold the selected records as stored, every column
/// included, for the raw data table under the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartView {
    pub categories: Vec<String>,
    pub bars: Vec<DurationBar>,
    pub hierarchy: Vec<HierarchyNode>,
    pub legend: Vec<LegendEntry>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Immutable dataset plus everything derived from it at startup.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
    options: DashboardOptions,
    styles: CategoryStyles,
}

impl Dashboard {
    pub fn new(dataset: Dataset, options: DashboardOptions, palette: &Palette) -> Self {
        let styles = CategoryStyles::build(&dataset, &options.category_column, palette);
        Self {
            dataset: Arc::new(dataset),
            options,
            styles,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn options(&self) -> &DashboardOptions {
        &self.options
    }

    pub fn legend(&self) -> &[LegendEntry] {
        self.styles.legend()
    }

    /// Filter by `query`, then project, annotate and decorate the matches.
    pub fn table(&self, query: Option<&str>) -> TableView {
        let ds = self.dataset.as_ref();
        let opts = &self.options;

        let matched = filter(ds, &opts.display_column, query);
        let mut projection = project(ds, &opts.partition, &matched);
        let tooltips = build_tooltips(ds, &matched, &opts.partition, opts.tooltip_format);
        let markers = self.styles.row_markers(ds, &matched);

        if opts.display_name != DisplayName::Plain {
            if let Some(col) = projection.columns.iter().position(|c| c == &opts.display_column) {
                for ((row, &source), marker) in projection
                    .rows
                    .iter_mut()
                    .zip(&projection.source_rows)
                    .zip(&markers)
                {
                    let generic = ds.cell(source, columns::GENERIC_NAME).unwrap_or("");
                    let decorated = decorate_name(&row[col], opts.display_name, marker.as_ref(), generic);
                    row[col] = decorated;
                }
            }
        }

        TableView {
            query: query.map(str::to_string).filter(|q| !q.trim().is_empty()),
            columns: projection.columns,
            matched: projection.rows.len(),
            rows: projection.rows,
            tooltips,
            markers,
            legend: self.styles.legend().to_vec(),
            total: ds.len(),
        }
    }

    /// Bars and hierarchy for the selected categories (all when empty).
    pub fn chart(&self, categories: &[String]) -> ChartView {
        let ds = self.dataset.as_ref();
        let rows = filter_categories(ds, &self.options.category_column, categories, &ds.all_indices());

        ChartView {
            categories: categories.to_vec(),
            bars: duration_bars(ds, &rows),
            hierarchy: hierarchy(ds, &rows),
            legend: self.styles.legend().to_vec(),
            headers: ds.headers().to_vec(),
            rows: rows.iter().filter_map(|&i| ds.row(i)).map(<[String]>::to_vec).collect(),
        }
    }
}
