use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{
    seasons::{get_analysis, get_key_matches, get_scenarios, get_seeding, get_standings, list_sports},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/sports", get(list_sports))
        .route("/api/sports/:sport/standings", get(get_standings))
        .route("/api/sports/:sport/scenarios", get(get_scenarios))
        .route("/api/sports/:sport/seeding", get(get_seeding))
        .route("/api/sports/:sport/key-matches", get(get_key_matches))
        .route("/api/sports/:sport/analysis", get(get_analysis))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use chrono::NaiveDate;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::settings::AppConfig;
    use crate::database;
    use crate::domain::{MatchResult, ScheduledMatch, SeasonSnapshot, Team};

    fn snapshot() -> SeasonSnapshot {
        let date = |month, day| NaiveDate::from_ymd_opt(2025, month, day).unwrap();
        SeasonSnapshot {
            sport: "womens-tennis".to_string(),
            teams: vec![
                Team::new("tcu", "TCU"),
                Team::new("bay", "Baylor"),
                Team::new("tex", "Texas"),
            ],
            results: vec![
                MatchResult {
                    home_team: "tcu".into(),
                    away_team: "bay".into(),
                    date: date(3, 1),
                    winner: Some("tcu".into()),
                    is_conference: true,
                },
                MatchResult {
                    home_team: "tex".into(),
                    away_team: "ghost".into(),
                    date: date(3, 2),
                    winner: Some("tex".into()),
                    is_conference: true,
                },
            ],
            fixtures: vec![ScheduledMatch {
                home_team: "bay".into(),
                away_team: "tex".into(),
                date: date(4, 5),
                location: Some("Waco, TX".to_string()),
                is_conference: true,
            }],
            ..Default::default()
        }
    }

    fn app(name: &str) -> Router {
        let path = std::env::temp_dir().join(format!(
            "conference_seeding_routes_{}_{}.db",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        let pool = database::create_pool(path.to_str().unwrap()).unwrap();
        let mut conn = database::get_connection(&pool).unwrap();
        database::import_snapshot(&mut conn, &snapshot()).unwrap();
        drop(conn);

        let config = AppConfig::new().with_overrides(path.to_str(), None);
        create_router(Arc::new(AppState { pool, config }))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_lists_sports() {
        let (status, json) = get_json(app("sports"), "/api/sports").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["sports"][0], "womens-tennis");
    }

    #[tokio::test]
    async fn test_standings_are_ranked() {
        let (status, json) = get_json(app("standings"), "/api/sports/womens-tennis/standings").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json[0]["team"], "tcu");
        assert_eq!(json[0]["rank_position"], 1);
        assert_eq!(json[0]["conf_wins"], 1);
        assert_eq!(json.as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn test_seeding_and_key_matches() {
        let (status, seeding) = get_json(app("seeding"), "/api/sports/womens-tennis/seeding").await;
        assert_eq!(status, StatusCode::OK);
        for row in seeding.as_array().unwrap() {
            assert!(row["best_case_seed"].as_u64() <= row["worst_case_seed"].as_u64());
        }

        let (status, key) = get_json(app("key"), "/api/sports/womens-tennis/key-matches").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(key[0]["team_a"], "bay");
        assert_eq!(key[0]["location"], "Waco, TX");
    }

    #[tokio::test]
    async fn test_analysis_reports_rejections() {
        let (status, json) = get_json(app("analysis"), "/api/sports/womens-tennis/analysis").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["sport"], "womens-tennis");
        assert_eq!(json["rejections"][0]["reason"]["kind"], "unknown_team");
        assert_eq!(json["scenarios"][1]["remaining_matches"][0]["away_team"], "tex");
    }

    #[tokio::test]
    async fn test_unknown_sport_is_not_found() {
        let (status, _) = get_json(app("missing"), "/api/sports/lacrosse/standings").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
