//! Category legend

use leptos::*;

use crate::LegendEntry;

#[component]
pub fn Legend(entries: Vec<LegendEntry>) -> impl IntoView {
    view! {
        <div class="legend">
            {entries
                .into_iter()
                .map(|entry| {
                    let icon = entry.marker.icon().map(str::to_string);
                    view! {
                        <span class="legend-item">
                            <span class="legend-swatch" style=entry.marker.swatch_style()>{icon}</span>
                            {entry.category}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
