//! Medication table with per-row hover details.
//!
//! Every visible cell of a row carries the same tooltip: the hidden
//! columns as `label: value` lines. Rows are tinted (color markers) or
//! prefixed (icon markers) by their medication type.

use leptos::*;

use crate::{Legend, Marker, RowTooltip, TableRow, TableView, TooltipField};

#[component]
pub fn MedicationTable(table: TableView) -> impl IntoView {
    let summary = match &table.query {
        Some(q) => format!("{} of {} medications match \"{}\"", table.matched, table.total, q),
        None => format!("{} medications", table.total),
    };
    let rows = table.table_rows();

    let body = if rows.is_empty() {
        view! { <div class="empty-state">"No medication matches this search."</div> }.into_view()
    } else {
        view! {
            <table class="med-table">
                <thead>
                    <tr>
                        <th class="marker-cell"></th>
                        {table.columns.iter().map(|c| view! { <th>{c.clone()}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(table_row).collect_view()}
                </tbody>
            </table>
        }
        .into_view()
    };

    view! {
        <div class="table-section">
            <div class="table-toolbar">
                <span class="table-summary">{summary}</span>
                <Legend entries=table.legend.clone()/>
            </div>
            {body}
        </div>
    }
}

fn table_row(row: TableRow) -> impl IntoView {
    let style = row.marker.as_ref().and_then(Marker::row_style).unwrap_or_default();
    let icon = row.marker.as_ref().and_then(Marker::icon).map(str::to_string);
    let tooltip = row.tooltip;

    view! {
        <tr style=style>
            <td class="marker-cell">{icon}</td>
            {row
                .cells
                .into_iter()
                .map(|cell| {
                    view! {
                        <td class="has-tooltip">
                            {cell}
                            {tooltip.clone().map(tooltip_card)}
                        </td>
                    }
                })
                .collect_view()}
        </tr>
    }
}

fn tooltip_card(tooltip: RowTooltip) -> impl IntoView {
    view! {
        <div class="tooltip-card">
            {tooltip
                .fields
                .into_iter()
                .map(|TooltipField { label, value }| {
                    view! {
                        <div class="tooltip-line">
                            <strong>{label}</strong>
                            ": "
                            {value}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
