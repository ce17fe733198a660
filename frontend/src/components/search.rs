//! Brand name search box

use leptos::*;

#[component]
pub fn SearchBox(
    query: ReadSignal<String>,
    set_query: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="search-box">
            <input
                type="search"
                placeholder="Search brand name..."
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <Show when=move || !query.get().trim().is_empty()>
                <button class="search-clear" on:click=move |_| set_query.set(String::new())>
                    "✕"
                </button>
            </Show>
        </div>
    }
}
