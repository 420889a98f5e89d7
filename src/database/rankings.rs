use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::domain::{ExternalRanking, TeamId};

pub fn insert_ranking(conn: &Connection, sport: &str, ranking: &ExternalRanking) -> Result<()> {
    let sql = "INSERT INTO external_rankings (sport, team_id, poll_rank) VALUES (?1, ?2, ?3)";

    conn.execute(sql, params![sport, ranking.team.as_str(), ranking.rank])
        .with_context(|| format!("Failed to insert ranking for {}", ranking.team))
        .map(|_| ())
}

fn parse_ranking_row(row: &rusqlite::Row) -> rusqlite::Result<ExternalRanking> {
    Ok(ExternalRanking {
        team: TeamId::new(row.get::<_, String>(0)?),
        rank: row.get(1)?,
    })
}

pub fn list_by_sport(conn: &Connection, sport: &str) -> Result<Vec<ExternalRanking>> {
    let sql = "SELECT team_id, poll_rank FROM external_rankings WHERE sport = ?1 ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![sport], parse_ranking_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
