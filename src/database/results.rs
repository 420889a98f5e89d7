use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::domain::{MatchResult, TeamId};

pub fn insert_result(conn: &Connection, sport: &str, result: &MatchResult) -> Result<()> {
    let sql = "INSERT INTO match_results (sport, home_team, away_team, match_date, winner, is_conference) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

    conn.execute(
        sql,
        params![
            sport,
            result.home_team.as_str(),
            result.away_team.as_str(),
            result.date,
            result.winner.as_ref().map(TeamId::as_str),
            result.is_conference
        ],
    )
    .with_context(|| format!("Failed to insert {}", result.label()))
    .map(|_| ())
}

fn parse_result_row(row: &rusqlite::Row) -> rusqlite::Result<MatchResult> {
    Ok(MatchResult {
        home_team: TeamId::new(row.get::<_, String>(0)?),
        away_team: TeamId::new(row.get::<_, String>(1)?),
        date: row.get(2)?,
        winner: row.get::<_, Option<String>>(3)?.map(TeamId::new),
        is_conference: row.get(4)?,
    })
}

pub fn list_by_sport(conn: &Connection, sport: &str) -> Result<Vec<MatchResult>> {
    let sql = "SELECT home_team, away_team, match_date, winner, is_conference FROM match_results WHERE sport = ?1 ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![sport], parse_result_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
