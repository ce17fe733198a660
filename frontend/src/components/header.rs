//! Navigation bar

use leptos::*;
use leptos_router::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="/" class="logo">"MEDLIST"</a>
            </div>
            <nav class="header-right">
                <A href="/" exact=true class="nav-link">"Table"</A>
                <A href="/durations" class="nav-link">"Durations"</A>
            </nav>
        </header>
    }
}
