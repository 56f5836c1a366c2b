//! Normalization of raw backend shapes into engine-ready records.
//!
//! Everything here is shape work: resolving team ids against the league
//! table, flattening team-aggregated usage rows, rescaling usage fractions,
//! and canonicalizing position codes. The projection engine only ever sees
//! the normalized records this module produces.

use crate::cli::types::{Position, TeamId};
use crate::engine::round1;

use super::types::{
    AverageDto, AverageRecord, DefenseDto, DefenseRecord, PositionDto, PositionRecord, UsageRecord,
    UsageTeamDto, UsageWireRow,
};


/// Rescale a wire usage fraction (0..1) to a percentage with one decimal.
/// This is the only place the rescale happens; everything downstream works
/// on the 0-100 scale.
pub fn scale_usage_pct(raw: f64) -> f64 {
    round1(raw * 100.0)
}

fn resolve_abbr(team_id: Option<u32>) -> Option<&'static str> {
    team_id.and_then(|id| TeamId::new(id).abbr())
}

/// Flatten the usage feed into per-player records.
///
/// Rows whose team id does not resolve against the league table are dropped
/// entirely. Team-aggregated rows expand into at most five records, skipping
/// any slot with a blank name or no usage value. Usage arrives as a fraction
/// and leaves as a 0-100 percentage rounded to one decimal.
pub fn normalize_usage(rows: Vec<UsageWireRow>) -> Vec<UsageRecord> {
    let mut records = Vec::new();

    for row in rows {
        match row {
            UsageWireRow::Player(p) => {
                let abbr = match resolve_abbr(p.team_id) {
                    Some(abbr) => abbr,
                    None => continue,
                };
                records.push(UsageRecord {
                    team_abbr: abbr.to_string(),
                    player_name: p.player_name,
                    usage_pct: scale_usage_pct(p.usage_pct),
                });
            }
            UsageWireRow::Team(t) => {
                let abbr = match resolve_abbr(t.team_id) {
                    Some(abbr) => abbr,
                    None => continue,
                };
                flatten_team_slots(&t, abbr, &mut records);
            }
        }
    }

    records
}

fn flatten_team_slots(team: &UsageTeamDto, abbr: &str, out: &mut Vec<UsageRecord>) {
    for (name, usage) in team.slots() {
        let (name, usage) = match (name, usage) {
            (Some(name), Some(usage)) => (name, usage),
            _ => continue,
        };
        if name.trim().is_empty() {
            continue;
        }
        out.push(UsageRecord {
            team_abbr: abbr.to_string(),
            player_name: name.to_string(),
            usage_pct: scale_usage_pct(usage),
        });
    }
}

/// Normalize season averages. Null stat cells become zero so projection
/// arithmetic never has to branch on missing values.
pub fn normalize_averages(rows: Vec<AverageDto>) -> Vec<AverageRecord> {
    rows.into_iter()
        .map(|row| AverageRecord {
            player_name: row.player_name,
            pts: row.player_pts.unwrap_or_default(),
            reb: row.player_reb.unwrap_or_default(),
            ast: row.player_ast.unwrap_or_default(),
            pra: row.player_pra.unwrap_or_default(),
        })
        .collect()
}

/// Normalize listed positions, canonicalizing free-form codes. A missing
/// position canonicalizes the same way an empty string does.
pub fn normalize_positions(rows: Vec<PositionDto>) -> Vec<PositionRecord> {
    rows.into_iter()
        .map(|row| PositionRecord {
            position: Position::canonicalize(row.player_position.as_deref().unwrap_or("")),
            player_name: row.player_name,
        })
        .collect()
}

/// Expand wide defense rows into one record per team/position slot.
///
/// Rows with an unresolvable team id are dropped; null cells (positions a
/// team has not been measured against yet) are skipped rather than recorded
/// as zero, since zero would read as elite defense.
pub fn normalize_defense(rows: Vec<DefenseDto>) -> Vec<DefenseRecord> {
    let mut records = Vec::new();

    for row in rows {
        let abbr = match resolve_abbr(row.team_id) {
            Some(abbr) => abbr,
            None => continue,
        };

        let cells = [
            (Position::PG, row.pg_efficiency),
            (Position::SG, row.sg_efficiency),
            (Position::SF, row.sf_efficiency),
            (Position::PF, row.pf_efficiency),
            (Position::C, row.c_efficiency),
        ];

        for (position, value) in cells {
            if let Some(def_eff) = value {
                records.push(DefenseRecord {
                    team_abbr: abbr.to_string(),
                    position,
                    def_eff,
                });
            }
        }
    }

    records
}
