use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::domain::{ScheduledMatch, TeamId};

pub fn insert_fixture(conn: &Connection, sport: &str, fixture: &ScheduledMatch) -> Result<()> {
    let sql = "INSERT INTO scheduled_matches (sport, home_team, away_team, match_date, location, is_conference) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

    conn.execute(
        sql,
        params![
            sport,
            fixture.home_team.as_str(),
            fixture.away_team.as_str(),
            fixture.date,
            fixture.location,
            fixture.is_conference
        ],
    )
    .with_context(|| format!("Failed to insert {}", fixture.label()))
    .map(|_| ())
}

fn parse_fixture_row(row: &rusqlite::Row) -> rusqlite::Result<ScheduledMatch> {
    Ok(ScheduledMatch {
        home_team: TeamId::new(row.get::<_, String>(0)?),
        away_team: TeamId::new(row.get::<_, String>(1)?),
        date: row.get(2)?,
        location: row.get(3)?,
        is_conference: row.get(4)?,
    })
}

pub fn list_by_sport(conn: &Connection, sport: &str) -> Result<Vec<ScheduledMatch>> {
    let sql = "SELECT home_team, away_team, match_date, location, is_conference FROM scheduled_matches WHERE sport = ?1 ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![sport], parse_fixture_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
