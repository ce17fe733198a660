//! HTTP Server for the medication list.
//!
//! # API Endpoints
//!
//! | Method | Path           | Description                                   |
//! |--------|----------------|-----------------------------------------------|
//! | GET    | `/health`      | Health check                                  |
//! | GET    | `/api/table`   | Table rows, tooltips and markers (`?q=`)      |
//! | GET    | `/api/legend`  | Category legend                               |
//! | GET    | `/api/columns` | Headers and the visible / hidden split        |
//! | GET    | `/api/chart`   | Duration bars and hierarchy (`?types=a,b`)    |
//! | GET    | `/api/logs`    | SSE stream for server logs                    |
//!
//! Anything else is served from the static frontend directory when it exists.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, Method, StatusCode},
    response::{sse::Event, Json, Sse},
    routing::get,
    Router,
};
use futures::stream::Stream;
use serde_json::{json, Value};
use std::{convert::Infallible, path::Path, sync::Arc, time::Duration};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt as _;
use tower_http::{cors::CorsLayer, services::ServeDir};

use super::logs::{log_error, log_info, log_info_indent, log_success, log_warning, LOG_BROADCASTER};
use super::types::{error_response, ChartQuery, ColumnsResponse, LegendResponse, TableQuery};
use crate::config::AppConfig;
use crate::error::ServerResult;
use crate::table::{ChartView, Dashboard, TableView};

type ApiError = (StatusCode, Json<Value>);

/// Shared, read-only state of every handler.
pub type AppState = Arc<Dashboard>;

/// Build the API router.
///
/// `static_dir` is mounted as the fallback service when it is a directory.
pub fn router(dashboard: AppState, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    let api = Router::new()
        .route("/health", get(health))
        .route("/api/table", get(table))
        .route("/api/legend", get(legend))
        .route("/api/columns", get(columns))
        .route("/api/chart", get(chart))
        .route("/api/logs", get(sse_logs));

    let api = match static_dir.filter(|dir| dir.is_dir()) {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api.route("/", get(health)),
    };

    api.with_state(dashboard).layer(cors)
}

/// Start the HTTP server
pub async fn start_server(config: &AppConfig, dashboard: Dashboard) -> ServerResult<()> {
    let rows = dashboard.dataset().len();
    let app = router(Arc::new(dashboard), Some(config.static_dir.as_path()));

    let listener = match tokio::net::TcpListener::bind(config.bind_address()).await {
        Ok(listener) => listener,
        Err(e) => {
            log_error(format!("Cannot bind {}: {}", config.bind_address(), e));
            return Err(e.into());
        }
    };
    log_success(format!("Medication list server running on http://{}", config.bind_address()));
    log_info(format!("Serving {} medications", rows));
    log_info_indent("GET  /api/table   - Table rows (?q=search)", 1);
    log_info_indent("GET  /api/legend  - Category legend", 1);
    log_info_indent("GET  /api/columns - Column layout", 1);
    log_info_indent("GET  /api/chart   - Duration chart (?types=a,b)", 1);
    log_info_indent("GET  /api/logs    - SSE log stream", 1);
    log_info_indent("GET  /health      - Health check", 1);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health(State(dashboard): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "medlist",
        "version": env!("CARGO_PKG_VERSION"),
        "rows": dashboard.dataset().len(),
        "endpoints": {
            "table": "GET /api/table?q=",
            "legend": "GET /api/legend",
            "columns": "GET /api/columns",
            "chart": "GET /api/chart?types=",
            "logs": "GET /api/logs (SSE)"
        }
    }))
}

/// Search-filtered table
async fn table(
    State(dashboard): State<AppState>,
    query: Result<Query<TableQuery>, QueryRejection>,
) -> Result<Json<TableView>, ApiError> {
    let Query(params) = query.map_err(bad_request)?;
    let view = dashboard.table(params.q.as_deref());

    if let Some(q) = &view.query {
        if view.matched == 0 {
            log_warning(format!("Search \"{}\": no matches", q));
        } else {
            log_info(format!("Search \"{}\": {}/{} rows", q, view.matched, view.total));
        }
    }

    Ok(Json(view))
}

async fn legend(State(dashboard): State<AppState>) -> Json<LegendResponse> {
    Json(LegendResponse {
        column: dashboard.options().category_column.clone(),
        entries: dashboard.legend().to_vec(),
    })
}

async fn columns(State(dashboard): State<AppState>) -> Json<ColumnsResponse> {
    let options = dashboard.options();
    Json(ColumnsResponse {
        headers: dashboard.dataset().headers().to_vec(),
        partition: options.partition.clone(),
        display_column: options.display_column.clone(),
        category_column: options.category_column.clone(),
        row_count: dashboard.dataset().len(),
    })
}

/// Duration chart for a category selection
async fn chart(
    State(dashboard): State<AppState>,
    query: Result<Query<ChartQuery>, QueryRejection>,
) -> Result<Json<ChartView>, ApiError> {
    let Query(params) = query.map_err(bad_request)?;
    Ok(Json(dashboard.chart(&params.categories())))
}

/// SSE endpoint for real-time log streaming
async fn sse_logs() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = LOG_BROADCASTER.subscribe();

    let stream = BroadcastStream::new(rx).filter_map(|result| {
        let entry = result.ok()?;
        let json = serde_json::to_string(&entry).ok()?;
        Some(Ok(Event::default().data(json)))
    });

    Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

fn bad_request(rejection: QueryRejection) -> ApiError {
    log_warning(format!("Rejected query: {}", rejection.body_text()));
    (StatusCode::BAD_REQUEST, Json(error_response(&rejection.body_text())))
}
