use anyhow::{Context, Result};
use log::info;
use rusqlite::params;
use serde::Serialize;

use super::connection::DbConn;
use super::{fixtures, rankings, results, teams};
use crate::domain::SeasonSnapshot;

const SPORT_TABLES: [&str; 4] = [
    "teams",
    "match_results",
    "scheduled_matches",
    "external_rankings",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub sport: String,
    pub teams: usize,
    pub results: usize,
    pub fixtures: usize,
    pub rankings: usize,
}

/// Replaces everything stored for the snapshot's sport in one transaction.
/// Rows are stored as given; validation happens when the season is analyzed.
pub fn import_snapshot(conn: &mut DbConn, snapshot: &SeasonSnapshot) -> Result<ImportSummary> {
    let sport = snapshot.sport.as_str();
    let tx = conn
        .transaction()
        .context("Failed to start import transaction")?;

    for table in SPORT_TABLES {
        let sql = format!("DELETE FROM {} WHERE sport = ?1", table);
        tx.execute(&sql, params![sport])
            .with_context(|| format!("Failed to clear {} for {}", table, sport))?;
    }

    for team in &snapshot.teams {
        teams::insert_team(&tx, sport, team, true)?;
    }
    for team in &snapshot.opponents {
        teams::insert_team(&tx, sport, team, false)?;
    }
    for result in &snapshot.results {
        results::insert_result(&tx, sport, result)?;
    }
    for fixture in &snapshot.fixtures {
        fixtures::insert_fixture(&tx, sport, fixture)?;
    }
    for ranking in &snapshot.rankings {
        rankings::insert_ranking(&tx, sport, ranking)?;
    }

    tx.commit().context("Failed to commit import")?;

    let summary = ImportSummary {
        sport: sport.to_string(),
        teams: snapshot.teams.len() + snapshot.opponents.len(),
        results: snapshot.results.len(),
        fixtures: snapshot.fixtures.len(),
        rankings: snapshot.rankings.len(),
    };
    info!(
        "Imported {}: {} teams, {} results, {} fixtures, {} rankings",
        summary.sport, summary.teams, summary.results, summary.fixtures, summary.rankings
    );
    Ok(summary)
}

/// Reads one sport as a consistent snapshot, `None` if nothing is stored for it
pub fn load_snapshot(conn: &mut DbConn, sport: &str) -> Result<Option<SeasonSnapshot>> {
    let tx = conn
        .transaction()
        .context("Failed to start read transaction")?;

    if teams::count_by_sport(&tx, sport)? == 0 {
        return Ok(None);
    }

    let snapshot = SeasonSnapshot {
        sport: sport.to_string(),
        teams: teams::list_by_sport(&tx, sport, true)?,
        opponents: teams::list_by_sport(&tx, sport, false)?,
        results: results::list_by_sport(&tx, sport)?,
        fixtures: fixtures::list_by_sport(&tx, sport)?,
        rankings: rankings::list_by_sport(&tx, sport)?,
    };
    tx.commit().context("Failed to finish read transaction")?;

    Ok(Some(snapshot))
}

pub fn list_sports(conn: &mut DbConn) -> Result<Vec<String>> {
    teams::list_sports(conn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connection::{create_pool, get_connection, DbPool};
    use crate::domain::{ExternalRanking, MatchResult, ScheduledMatch, Team};
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn temp_pool(name: &str) -> (DbPool, PathBuf) {
        let path = std::env::temp_dir().join(format!(
            "conference_seeding_{}_{}.db",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        let pool = create_pool(path.to_str().unwrap()).unwrap();
        (pool, path)
    }

    fn snapshot(sport: &str) -> SeasonSnapshot {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        SeasonSnapshot {
            sport: sport.to_string(),
            teams: vec![Team::new("tcu", "TCU"), Team::new("bay", "Baylor")],
            opponents: vec![Team::new("ucla", "UCLA")],
            results: vec![
                MatchResult {
                    home_team: "tcu".into(),
                    away_team: "bay".into(),
                    date,
                    winner: Some("bay".into()),
                    is_conference: true,
                },
                MatchResult {
                    home_team: "ucla".into(),
                    away_team: "tcu".into(),
                    date,
                    winner: None,
                    is_conference: false,
                },
            ],
            fixtures: vec![ScheduledMatch {
                home_team: "bay".into(),
                away_team: "tcu".into(),
                date: NaiveDate::from_ymd_opt(2025, 4, 18).unwrap(),
                location: Some("Waco, TX".to_string()),
                is_conference: true,
            }],
            rankings: vec![
                ExternalRanking { team: "tcu".into(), rank: Some(4) },
                ExternalRanking { team: "bay".into(), rank: None },
            ],
        }
    }

    #[test]
    fn test_import_then_load_preserves_order_and_fields() {
        let (pool, path) = temp_pool("roundtrip");
        let mut conn = get_connection(&pool).unwrap();
        let original = snapshot("womens-tennis");

        let summary = import_snapshot(&mut conn, &original).unwrap();
        let loaded = load_snapshot(&mut conn, "womens-tennis").unwrap();

        assert_eq!(summary.teams, 3);
        assert_eq!(loaded, Some(original));
        drop(conn);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_reimport_replaces_only_that_sport() {
        let (pool, path) = temp_pool("reimport");
        let mut conn = get_connection(&pool).unwrap();

        import_snapshot(&mut conn, &snapshot("womens-tennis")).unwrap();
        import_snapshot(&mut conn, &snapshot("mens-tennis")).unwrap();

        let mut smaller = snapshot("womens-tennis");
        smaller.results.clear();
        import_snapshot(&mut conn, &smaller).unwrap();

        let womens = load_snapshot(&mut conn, "womens-tennis").unwrap().unwrap();
        let mens = load_snapshot(&mut conn, "mens-tennis").unwrap().unwrap();
        assert!(womens.results.is_empty());
        assert_eq!(womens.teams.len(), 2);
        assert_eq!(mens.results.len(), 2);
        assert_eq!(list_sports(&mut conn).unwrap(), vec!["mens-tennis", "womens-tennis"]);
        drop(conn);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_unknown_sport_is_none() {
        let (pool, path) = temp_pool("unknown");
        let mut conn = get_connection(&pool).unwrap();

        assert_eq!(load_snapshot(&mut conn, "lacrosse").unwrap(), None);
        assert!(list_sports(&mut conn).unwrap().is_empty());
        drop(conn);
        let _ = std::fs::remove_file(path);
    }
}
