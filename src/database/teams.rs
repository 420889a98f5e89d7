use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::domain::Team;

pub fn insert_team(conn: &Connection, sport: &str, team: &Team, in_pool: bool) -> Result<()> {
    let sql = "INSERT INTO teams (sport, team_id, name, in_pool) VALUES (?1, ?2, ?3, ?4)";

    conn.execute(sql, params![sport, team.id.as_str(), team.name, in_pool])
        .with_context(|| format!("Failed to insert team {}", team.id))
        .map(|_| ())
}

fn parse_team_row(row: &rusqlite::Row) -> rusqlite::Result<Team> {
    Ok(Team::new(row.get::<_, String>(0)?, row.get::<_, String>(1)?))
}

/// Teams of one sport in insertion order, either the pool or its opponents
pub fn list_by_sport(conn: &Connection, sport: &str, in_pool: bool) -> Result<Vec<Team>> {
    let sql = "SELECT team_id, name FROM teams WHERE sport = ?1 AND in_pool = ?2 ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![sport, in_pool], parse_team_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn count_by_sport(conn: &Connection, sport: &str) -> Result<i64> {
    let sql = "SELECT COUNT(*) FROM teams WHERE sport = ?1";
    conn.query_row(sql, params![sport], |row| row.get(0))
        .context("Failed to count teams")
}

pub fn list_sports(conn: &Connection) -> Result<Vec<String>> {
    let sql = "SELECT DISTINCT sport FROM teams ORDER BY sport";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()?;

    Ok(rows)
}
