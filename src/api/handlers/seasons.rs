use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{analyze_sport, AppState};
use crate::api::models::{
    KeyMatchRow, ScenarioRow, SeasonReport, SeedingRow, SportListResponse, StandingRow,
};
use crate::database;

pub async fn list_sports(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    match database::list_sports(&mut conn) {
        Ok(sports) => Json(SportListResponse { sports }).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    }
}

pub async fn get_standings(
    State(state): State<Arc<AppState>>,
    Path(sport): Path<String>,
) -> impl IntoResponse {
    let analysis = match analyze_sport(&state, &sport) {
        Ok(analysis) => analysis,
        Err(response) => return response,
    };

    let rows: Vec<StandingRow> = analysis.standings.iter().map(StandingRow::from).collect();
    Json(rows).into_response()
}

pub async fn get_scenarios(
    State(state): State<Arc<AppState>>,
    Path(sport): Path<String>,
) -> impl IntoResponse {
    let analysis = match analyze_sport(&state, &sport) {
        Ok(analysis) => analysis,
        Err(response) => return response,
    };

    let rows: Vec<ScenarioRow> = analysis.scenarios.iter().map(ScenarioRow::from).collect();
    Json(rows).into_response()
}

pub async fn get_seeding(
    State(state): State<Arc<AppState>>,
    Path(sport): Path<String>,
) -> impl IntoResponse {
    let analysis = match analyze_sport(&state, &sport) {
        Ok(analysis) => analysis,
        Err(response) => return response,
    };

    let rows: Vec<SeedingRow> = analysis
        .seeding_ranges
        .iter()
        .map(SeedingRow::from)
        .collect();
    Json(rows).into_response()
}

pub async fn get_key_matches(
    State(state): State<Arc<AppState>>,
    Path(sport): Path<String>,
) -> impl IntoResponse {
    let analysis = match analyze_sport(&state, &sport) {
        Ok(analysis) => analysis,
        Err(response) => return response,
    };

    let rows: Vec<KeyMatchRow> = analysis.key_matches.iter().map(KeyMatchRow::from).collect();
    Json(rows).into_response()
}

pub async fn get_analysis(
    State(state): State<Arc<AppState>>,
    Path(sport): Path<String>,
) -> impl IntoResponse {
    match analyze_sport(&state, &sport) {
        Ok(analysis) => Json(SeasonReport::from(&analysis)).into_response(),
        Err(response) => response,
    }
}
