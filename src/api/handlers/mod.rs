use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

use crate::config::settings::AppConfig;
use crate::database;
use crate::standings::{self, SeasonAnalysis};

pub mod seasons;

pub struct AppState {
    pub pool: Pool<SqliteConnectionManager>,
    pub config: AppConfig,
}

/// Reads a fresh snapshot for `sport` and runs the full analysis on it
pub(crate) fn analyze_sport(state: &AppState, sport: &str) -> Result<SeasonAnalysis, Response> {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            return Err((StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response());
        }
    };

    let snapshot = match database::load_snapshot(&mut conn, sport) {
        Ok(Some(snapshot)) => snapshot,
        Ok(None) => {
            return Err((StatusCode::NOT_FOUND, format!("Unknown sport: {}", sport)).into_response());
        }
        Err(e) => {
            log::error!("Failed to load {}: {:#}", sport, e);
            return Err(
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
            );
        }
    };
    drop(conn);

    Ok(standings::analyze(&snapshot, &state.config.seeding))
}
