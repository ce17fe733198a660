//! HTTP client for the medication list backend.

use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;

use crate::{AppError, AppResult, ChartView, TableView, BACKEND_URL, SEARCH_DEBOUNCE_MS};

/// Fetch the table, filtered by `query` when it is not blank.
///
/// Waits [`SEARCH_DEBOUNCE_MS`] first so fast typing doesn't fire a request
/// per keystroke; the resource only keeps the latest result.
pub async fn fetch_table(query: String) -> AppResult<TableView> {
    TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;

    let url = format!("{}/api/table", BACKEND_URL);
    let request = if query.trim().is_empty() {
        Request::get(&url)
    } else {
        Request::get(&url).query([("q", query.as_str())])
    };

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;
    decode(response).await
}

/// Fetch chart data for the selected medication types (all when empty).
pub async fn fetch_chart(types: Vec<String>) -> AppResult<ChartView> {
    let url = format!("{}/api/chart", BACKEND_URL);
    let joined = types.join(",");
    let request = if joined.is_empty() {
        Request::get(&url)
    } else {
        Request::get(&url).query([("types", joined.as_str())])
    };

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;
    decode(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    if !response.ok() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::Server {
            status: response.status(),
            message,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_response_deserialization() {
        let json = r##"{
            "query": "adder",
            "columns": ["Medication Type", "Brand Name", "Generic Name"],
            "rows": [["Stimulant", "Adderall", "Mixed amphetamine salts"]],
            "tooltips": [{
                "block": "Duration: 4-6 hours\nCommon Side Effects: Insomnia",
                "fields": [
                    {"label": "Duration", "value": "4-6 hours"},
                    {"label": "Common Side Effects", "value": "Insomnia"}
                ],
                "cells": [
                    {"column": "Medication Type", "value": "Duration: 4-6 hours\nCommon Side Effects: Insomnia", "type": "text"}
                ]
            }],
            "markers": [{"kind": "color", "value": "#66c5cc"}],
            "legend": [{"category": "Stimulant", "marker": {"kind": "color", "value": "#66c5cc"}}],
            "total": 11,
            "matched": 1
        }"##;

        let view: TableView = serde_json::from_str(json).unwrap();
        assert_eq!(view.matched, 1);
        assert_eq!(view.rows[0][1], "Adderall");
        assert_eq!(view.tooltips[0].cells[0].kind, "text");
        assert_eq!(view.tooltips[0].fields[1].value, "Insomnia");
        assert_eq!(view.legend[0].category, "Stimulant");
    }

    #[test]
    fn test_chart_response_deserialization() {
        let json = r#"{
            "categories": [],
            "bars": [{
                "brandName": "Strattera", "genericName": "Atomoxetine", "category": "Non-Stimulant",
                "duration": "24 hours", "low": 24.0, "high": 24.0, "span": 0.0,
                "mechanismOfAction": "NE reuptake inhibitor", "commonSideEffects": "Nausea"
            }],
            "hierarchy": [{
                "label": "Non-Stimulant", "value": 24.0,
                "children": [{"label": "Atomoxetine", "value": 24.0,
                              "children": [{"label": "Strattera", "value": 24.0}]}]
            }],
            "legend": [],
            "headers": ["Medication Type", "Brand Name"],
            "rows": [["Non-Stimulant", "Strattera"]]
        }"#;

        let chart: ChartView = serde_json::from_str(json).unwrap();
        assert_eq!(chart.bars[0].brand_name, "Strattera");
        assert_eq!(chart.bars[0].common_side_effects, "Nausea");
        assert_eq!(chart.rows[0][1], "Strattera");
        assert!(chart.hierarchy[0].children[0].children[0].children.is_empty());
    }
}
