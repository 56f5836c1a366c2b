//! Matchup projection engine.
//!
//! Pure functions from normalized league datasets to per-game player
//! projections. There is no I/O here: the store is responsible for fetching
//! and caching datasets, the engine only joins and scales them. Identical
//! inputs always produce bit-identical output.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::types::{Game, LeagueDatasets};
use crate::cli::types::{Position, ProjectedStat};


/// Home/away edge on projected points: +3% at home, -3% away.
pub const HOME_EDGE_PTS: f64 = 0.03;
/// Home/away edge on projected rebounds: +/-1.5%.
pub const HOME_EDGE_REB: f64 = 0.015;
/// Home/away edge on projected assists: +/-2%.
pub const HOME_EDGE_AST: f64 = 0.02;

/// Round to one decimal place, the precision every projected stat carries.
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Trim and uppercase a team abbreviation for comparison.
pub fn norm_team(s: &str) -> String {
    s.trim().to_uppercase()
}

/// One player's projection for a specific matchup.
///
/// Carries the raw season averages next to the projected stats so consumers
/// can show both sides. Derived per selection, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedPlayer {
    pub team_abbr: String,
    pub opponent_abbr: String,
    pub player_name: String,
    pub usage_pct: f64,
    pub position: Option<Position>,
    pub pts: f64,
    pub reb: f64,
    pub ast: f64,
    pub pra: f64,
    pub proj_pts: f64,
    pub proj_reb: f64,
    pub proj_ast: f64,
    pub proj_pra: f64,
}

impl EnrichedPlayer {
    /// The projected value for one stat.
    pub fn projected(&self, stat: ProjectedStat) -> f64 {
        match stat {
            ProjectedStat::Pts => self.proj_pts,
            ProjectedStat::Reb => self.proj_reb,
            ProjectedStat::Ast => self.proj_ast,
            ProjectedStat::Pra => self.proj_pra,
        }
    }
}

/// Best and worst projected player in a matchup, per stat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupLeaders {
    pub top_pts: EnrichedPlayer,
    pub top_reb: EnrichedPlayer,
    pub top_ast: EnrichedPlayer,
    pub top_pra: EnrichedPlayer,
    pub bottom_pts: EnrichedPlayer,
    pub bottom_reb: EnrichedPlayer,
    pub bottom_ast: EnrichedPlayer,
    pub bottom_pra: EnrichedPlayer,
}

/// Project every tracked player appearing in one game.
///
/// Joins the usage list against averages, positions, and the opponent's
/// defensive efficiency, then applies the usage boost, defense adjustment,
/// and stat-specific home/away factors. Output order follows the usage
/// list's insertion order; no implicit sort.
///
/// Missing cross-references degrade instead of dropping the row: a player
/// without averages projects from zeros, and a player without a position
/// (or whose opponent has no measured efficiency at that position) skips
/// the defense adjustment.
pub fn project_matchup(game: &Game, datasets: &LeagueDatasets) -> Vec<EnrichedPlayer> {
    let home_abbr = norm_team(game.home_abbr());
    let away_abbr = norm_team(game.away_abbr());

    // Lookup indices are first-match-wins on duplicate names.
    let mut avg_by_name: HashMap<&str, (f64, f64, f64, f64)> = HashMap::new();
    for avg in &datasets.averages {
        avg_by_name
            .entry(avg.player_name.as_str())
            .or_insert((avg.pts, avg.reb, avg.ast, avg.pra));
    }

    let mut pos_by_name: HashMap<&str, Position> = HashMap::new();
    for record in &datasets.positions {
        pos_by_name
            .entry(record.player_name.as_str())
            .or_insert_with(|| record.position.clone());
    }

    let mut def_by_team_pos: HashMap<String, f64> = HashMap::new();
    for def in &datasets.defense {
        def_by_team_pos
            .entry(format!(
                "{}::{}",
                norm_team(&def.team_abbr),
                def.position.as_str()
            ))
            .or_insert(def.def_eff);
    }

    let mut enriched = Vec::new();

    for usage in &datasets.usage {
        let team_abbr = norm_team(&usage.team_abbr);
        if team_abbr != home_abbr && team_abbr != away_abbr {
            continue;
        }
        let is_home = team_abbr == home_abbr;
        let opponent_abbr = if is_home {
            away_abbr.clone()
        } else {
            home_abbr.clone()
        };

        let position = pos_by_name.get(usage.player_name.as_str()).cloned();
        let (pts, reb, ast, pra) = avg_by_name
            .get(usage.player_name.as_str())
            .copied()
            .unwrap_or((0.0, 0.0, 0.0, 0.0));

        let def_eff = position.as_ref().and_then(|pos| {
            def_by_team_pos
                .get(&format!("{}::{}", opponent_abbr, pos.as_str()))
                .copied()
        });

        let usage_boost = 1.0 + ((usage.usage_pct - 20.0) / 200.0).clamp(-0.05, 0.08);
        let def_adj = match def_eff {
            Some(eff) => 1.0 + ((100.0 - eff) / 500.0).clamp(-0.08, 0.08),
            None => 1.0,
        };

        let ha_pts = if is_home {
            1.0 + HOME_EDGE_PTS
        } else {
            1.0 - HOME_EDGE_PTS
        };
        let ha_reb = if is_home {
            1.0 + HOME_EDGE_REB
        } else {
            1.0 - HOME_EDGE_REB
        };
        let ha_ast = if is_home {
            1.0 + HOME_EDGE_AST
        } else {
            1.0 - HOME_EDGE_AST
        };

        // Usage and defense combine into one multiplier, then each stat gets
        // its own home/away factor.
        let base_mult = usage_boost * def_adj;

        let proj_pts = round1(pts * base_mult * ha_pts);
        let proj_reb = round1(reb * base_mult * ha_reb);
        let proj_ast = round1(ast * base_mult * ha_ast);
        // Combined projection sums the already-rounded components so the
        // displayed columns always add up.
        let proj_pra = round1(proj_pts + proj_reb + proj_ast);

        enriched.push(EnrichedPlayer {
            team_abbr,
            opponent_abbr,
            player_name: usage.player_name.clone(),
            usage_pct: usage.usage_pct,
            position,
            pts,
            reb,
            ast,
            pra,
            proj_pts,
            proj_reb,
            proj_ast,
            proj_pra,
        });
    }

    enriched
}

/// Pick the best and worst projection per stat from one matchup's players.
///
/// Returns `None` for an empty slate rather than a partially filled struct.
/// Exact ties keep the earliest row in projection order.
pub fn build_leaders(players: &[EnrichedPlayer]) -> Option<MatchupLeaders> {
    if players.is_empty() {
        return None;
    }

    let top = |stat: ProjectedStat| {
        let mut best = &players[0];
        for player in &players[1..] {
            if player.projected(stat) > best.projected(stat) {
                best = player;
            }
        }
        best.clone()
    };
    let bottom = |stat: ProjectedStat| {
        let mut worst = &players[0];
        for player in &players[1..] {
            if player.projected(stat) < worst.projected(stat) {
                worst = player;
            }
        }
        worst.clone()
    };

    Some(MatchupLeaders {
        top_pts: top(ProjectedStat::Pts),
        top_reb: top(ProjectedStat::Reb),
        top_ast: top(ProjectedStat::Ast),
        top_pra: top(ProjectedStat::Pra),
        bottom_pts: bottom(ProjectedStat::Pts),
        bottom_reb: bottom(ProjectedStat::Reb),
        bottom_ast: bottom(ProjectedStat::Ast),
        bottom_pra: bottom(ProjectedStat::Pra),
    })
}

/// Sort projections by one stat, highest first. The sort is stable, so ties
/// keep their projection order.
pub fn rank_by_stat(mut players: Vec<EnrichedPlayer>, stat: ProjectedStat) -> Vec<EnrichedPlayer> {
    players.sort_by(|a, b| {
        b.projected(stat)
            .partial_cmp(&a.projected(stat))
            .unwrap_or(Ordering::Equal)
    });
    players
}
