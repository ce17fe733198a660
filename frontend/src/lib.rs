//! Medlist - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for browsing the adult ADHD medication table
//! served by the medlist backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (Table / Durations)                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  TablePage                                                   │
//! │  ├── Hero                                                    │
//! │  ├── SearchBox                                               │
//! │  └── MedicationTable (tooltips, markers, legend)             │
//! │  ChartPage                                                   │
//! │  ├── TypePicker                                              │
//! │  ├── DurationChart (bars, hover details, type breakdown)     │
//! │  └── DataTable (collapsible raw rows)                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  LogsPanel · Footer                                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Mirrors of the backend payloads
//! - [`components`] - UI components
//! - [`services`] - Backend communication

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Table
    CellTooltip, LegendEntry, Marker, RowTooltip, TableRow, TableView, TooltipField,
    // Chart
    ChartView, DurationBar, HierarchyNode,
    // Logs
    LogEntry, LogLevel,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and console logger, then mount [`App`].
pub fn mount() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Medlist - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (logs, set_logs) = create_signal(Vec::<LogEntry>::new());

    // One SSE connection for the app's lifetime
    init_sse_logs(set_logs);

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Header/>
            <main class="container">
                <Routes>
                    <Route path="/" view=TablePage/>
                    <Route path="/durations" view=ChartPage/>
                </Routes>
                <LogsPanel logs=logs set_logs=set_logs/>
            </main>
            <Footer/>
        </Router>
    }
}

#[component]
fn TablePage() -> impl IntoView {
    let (query, set_query) = create_signal(String::new());
    let table = create_local_resource(move || query.get(), fetch_table);

    view! {
        <Hero/>
        <SearchBox query=query set_query=set_query/>
        <Transition fallback=move || view! { <div class="loading">"Loading medications..."</div> }>
            {move || {
                table.get().map(|result| match result {
                    Ok(data) => view! { <MedicationTable table=data/> }.into_view(),
                    Err(e) => error_view(e),
                })
            }}
        </Transition>
    }
}

#[component]
fn ChartPage() -> impl IntoView {
    let (selected, set_selected) = create_signal(Vec::<String>::new());
    let chart = create_local_resource(move || selected.get(), fetch_chart);

    view! {
        <div class="hero">
            <h1>"⏱️ Duration by medication"</h1>
            <p class="subtitle">"Pick one or more medication types; none selected shows all."</p>
        </div>
        <Transition fallback=move || view! { <div class="loading">"Loading chart..."</div> }>
            {move || {
                chart.get().map(|result| match result {
                    Ok(data) => view! {
                        <TypePicker entries=data.legend.clone() selected=selected set_selected=set_selected/>
                        <DurationChart chart=data.clone()/>
                        <DataTable headers=data.headers.clone() rows=data.rows.clone()/>
                    }
                    .into_view(),
                    Err(e) => error_view(e),
                })
            }}
        </Transition>
    }
}

fn error_view(error: AppError) -> View {
    log::error!("❌ {}", error);
    view! { <div class="error-message">"❌ " {error.to_string()}</div> }.into_view()
}
