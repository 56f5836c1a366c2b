//! CLI argument definitions and parsing.

pub mod types;


use clap::{Args, Parser, Subcommand};
use types::{GameDate, ProjectedStat};

/// Arguments shared by every subcommand
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Backend base URL (or set `ARRBO_BASE_URL` env var).
    #[clap(long)]
    pub base_url: Option<String>,

    /// Force refresh from the backend, overwriting any cached data.
    #[clap(long)]
    pub refresh: bool,

    /// Output results as JSON instead of text.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "arrbo", about = "NBA matchup projections from nightly league data")]
pub struct Arrbo {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the games scheduled on a date.
    Games {
        /// Date to list (YYYY-MM-DD), defaulting to today.
        #[clap(long, short, default_value_t = GameDate::default())]
        date: GameDate,

        #[clap(flatten)]
        common: CommonArgs,
    },

    /// Project both rosters of one matchup.
    ///
    /// Identify the game either by `--game-id`, or by `--home` and `--away`
    /// (with an optional `--date`) for pairings that may not be on the
    /// schedule.
    Matchup {
        /// Scheduled game id to project.
        #[clap(long)]
        game_id: Option<String>,

        /// Home team abbreviation (e.g. BOS).
        #[clap(long)]
        home: Option<String>,

        /// Away team abbreviation (e.g. LAL).
        #[clap(long)]
        away: Option<String>,

        /// Date of the matchup (YYYY-MM-DD), defaulting to today.
        #[clap(long, short)]
        date: Option<GameDate>,

        #[clap(flatten)]
        common: CommonArgs,
    },

    /// Rank projected players across every game on a date.
    Leaders {
        /// Date to rank (YYYY-MM-DD), defaulting to today.
        #[clap(long, short, default_value_t = GameDate::default())]
        date: GameDate,

        /// Stat to rank by: pts | reb | ast | pra.
        #[clap(long, short, default_value_t = ProjectedStat::Pts)]
        stat: ProjectedStat,

        /// How many players to show.
        #[clap(long, short, default_value_t = 10)]
        limit: usize,

        #[clap(flatten)]
        common: CommonArgs,
    },
}
