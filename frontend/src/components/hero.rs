//! Hero section component

use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"💊 " {APP_NAME}</h1>
            <p class="subtitle">
                "Search by brand name. Hover any row for duration, mechanism of action "
                "and common side effects."
            </p>
        </div>
    }
}
