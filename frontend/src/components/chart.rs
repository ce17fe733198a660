//! Duration chart and type breakdown.
//!
//! Bars start at the low bound of a medication's duration and extend by
//! its span, so a "4-6 hours" entry is drawn from 4h to 6h.

use leptos::*;

use crate::{ChartView, HierarchyNode, LegendEntry, Marker, CHART_ROW_HEIGHT, CHART_WIDTH};

const LABEL_WIDTH: f64 = 150.0;
const MIN_BAR_WIDTH: f64 = 3.0;
const DEFAULT_BAR_COLOR: &str = "#9eb9f3";

/// Hours without a trailing `.0`.
pub fn hours(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}h", value as i64)
    } else {
        format!("{:.1}h", value)
    }
}

/// Horizontal extent of a bar as `(x, width)` in chart units.
pub fn bar_geometry(low: f64, span: f64, max_hours: f64) -> (f64, f64) {
    let scale = CHART_WIDTH / max_hours;
    (LABEL_WIDTH + low * scale, (span * scale).max(MIN_BAR_WIDTH))
}

/// Checkbox list of medication types. An empty selection means all types.
#[component]
pub fn TypePicker(
    entries: Vec<LegendEntry>,
    selected: ReadSignal<Vec<String>>,
    set_selected: WriteSignal<Vec<String>>,
) -> impl IntoView {
    view! {
        <div class="type-picker">
            <span class="picker-label">"Medication type"</span>
            {entries
                .into_iter()
                .map(|entry| {
                    let category = entry.category.clone();
                    let checked = {
                        let category = category.clone();
                        move || selected.get().contains(&category)
                    };
                    let toggle = {
                        let category = category.clone();
                        move |_| {
                            set_selected.update(|types| {
                                if let Some(pos) = types.iter().position(|t| *t == category) {
                                    types.remove(pos);
                                } else {
                                    types.push(category.clone());
                                }
                            })
                        }
                    };
                    view! {
                        <label class="picker-option">
                            <input type="checkbox" prop:checked=checked on:change=toggle/>
                            {category}
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn DurationChart(chart: ChartView) -> impl IntoView {
    if chart.bars.is_empty() {
        return view! { <div class="empty-state">"No duration data for this selection."</div> }.into_view();
    }

    let max_hours = chart.max_hours();
    let (hovered, set_hovered) = create_signal(None::<usize>);
    let details = chart.bars.clone();
    let height = CHART_ROW_HEIGHT * chart.bars.len() as f64 + CHART_ROW_HEIGHT;
    let view_box = format!("0 0 {} {}", LABEL_WIDTH + CHART_WIDTH + 40.0, height);

    let bars = chart
        .bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let y = CHART_ROW_HEIGHT * i as f64;
            let (x, width) = bar_geometry(bar.low, bar.span, max_hours);
            let fill = match chart.marker_for(&bar.category) {
                Some(Marker::Color(color)) => color.clone(),
                _ => DEFAULT_BAR_COLOR.to_string(),
            };
            let label = format!("{}\n{}", bar.brand_name, bar.hover_text());
            view! {
                <g
                    class="bar"
                    aria-label=label
                    on:mouseenter=move |_| set_hovered.set(Some(i))
                    on:mouseleave=move |_| set_hovered.set(None)
                >
                    <text x=(LABEL_WIDTH - 8.0).to_string() y=(y + CHART_ROW_HEIGHT * 0.65).to_string() text-anchor="end">
                        {bar.brand_name.clone()}
                    </text>
                    <rect
                        x=x.to_string()
                        y=(y + 4.0).to_string()
                        width=width.to_string()
                        height=(CHART_ROW_HEIGHT - 8.0).to_string()
                        fill=fill
                        rx="3"
                    />
                    <text x=(x + width + 4.0).to_string() y=(y + CHART_ROW_HEIGHT * 0.65).to_string() class="bar-value">
                        {hours(bar.low + bar.span)}
                    </text>
                </g>
            }
        })
        .collect_view();

    let axis_y = CHART_ROW_HEIGHT * chart.bars.len() as f64 + CHART_ROW_HEIGHT * 0.7;

    view! {
        <div class="chart-section">
            <h2>"Duration (hours)"</h2>
            <svg class="duration-chart" viewBox=view_box>
                {bars}
                <text x=LABEL_WIDTH.to_string() y=axis_y.to_string() class="axis">"0h"</text>
                <text x=(LABEL_WIDTH + CHART_WIDTH).to_string() y=axis_y.to_string() class="axis" text-anchor="end">
                    {hours(max_hours)}
                </text>
            </svg>
            <div class="bar-details">
                {move || {
                    hovered.get().and_then(|i| details.get(i).cloned()).map(|bar| {
                        view! {
                            <strong>{bar.brand_name.clone()}</strong>
                            {bar
                                .hover_text()
                                .lines()
                                .map(|line| view! { <div class="tooltip-line">{line.to_string()}</div> })
                                .collect_view()}
                        }
                    })
                }}
            </div>
            <h2>"By type, generic and brand"</h2>
            {hierarchy_list(chart.hierarchy.clone(), None)}
        </div>
    }
    .into_view()
}

/// Collapsible table of the selected records, every column.
#[component]
pub fn DataTable(headers: Vec<String>, rows: Vec<Vec<String>>) -> impl IntoView {
    let count = rows.len();

    view! {
        <details class="data-table">
            <summary>{format!("Show data table ({} rows)", count)}</summary>
            <table class="med-table">
                <thead>
                    <tr>{headers.into_iter().map(|h| view! { <th>{h}</th> }).collect_view()}</tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|cells| {
                            view! { <tr>{cells.into_iter().map(|c| view! { <td>{c}</td> }).collect_view()}</tr> }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </details>
    }
}

/// Nested breakdown, each node sized relative to its parent.
fn hierarchy_list(nodes: Vec<HierarchyNode>, parent_total: Option<f64>) -> View {
    let total = parent_total.unwrap_or_else(|| nodes.iter().map(|n| n.value).sum());

    view! {
        <ul class="hierarchy">
            {nodes
                .into_iter()
                .map(|HierarchyNode { label, value, children }| {
                    let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
                    let nested = if children.is_empty() {
                        None
                    } else {
                        Some(hierarchy_list(children, Some(value)))
                    };
                    view! {
                        <li>
                            <div class="hierarchy-node">
                                <span class="hierarchy-bar" style=format!("width: {:.1}%", share)></span>
                                <span class="hierarchy-label">{label}</span>
                                <span class="hierarchy-value">{hours(value)}</span>
                            </div>
                            {nested}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_format() {
        assert_eq!(hours(12.0), "12h");
        assert_eq!(hours(0.5), "0.5h");
    }

    #[test]
    fn test_bar_geometry() {
        let (x, width) = bar_geometry(4.0, 2.0, 24.0);
        let scale = CHART_WIDTH / 24.0;
        assert_eq!(x, LABEL_WIDTH + 4.0 * scale);
        assert_eq!(width, 2.0 * scale);

        // Zero span still draws a sliver
        let (_, width) = bar_geometry(24.0, 0.0, 24.0);
        assert_eq!(width, MIN_BAR_WIDTH);
    }
}
