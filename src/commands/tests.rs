//! Integration tests for command handlers

use super::*;

#[cfg(test)]
mod command_tests {
    use super::*;
    use crate::cli::types::{GameDate, ProjectedStat};
    use crate::error::ArrboError;
    use crate::BASE_URL_ENV_VAR;
    use std::sync::Mutex;

    // Tests that touch the process environment hold this lock so they cannot
    // interleave with each other.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_resolve_base_url_from_flag() {
        let result = resolve_base_url(Some("http://localhost:8080".to_string()));
        assert_eq!(result.unwrap(), "http://localhost:8080");
    }

    #[test]
    fn test_resolve_base_url_trims_trailing_slashes() {
        let result = resolve_base_url(Some("http://localhost:8080/".to_string()));
        assert_eq!(result.unwrap(), "http://localhost:8080");

        let result = resolve_base_url(Some("http://localhost:8080///".to_string()));
        assert_eq!(result.unwrap(), "http://localhost:8080");
    }

    #[test]
    fn test_resolve_base_url_from_env() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(BASE_URL_ENV_VAR, "http://backend.internal:9000/");

        let result = resolve_base_url(None);
        assert_eq!(result.unwrap(), "http://backend.internal:9000");

        std::env::remove_var(BASE_URL_ENV_VAR);
    }

    #[test]
    fn test_resolve_base_url_missing() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var(BASE_URL_ENV_VAR);

        let result = resolve_base_url(None);
        match result.unwrap_err() {
            ArrboError::MissingBaseUrl { env_var } => {
                assert_eq!(env_var, BASE_URL_ENV_VAR);
            }
            _ => panic!("Expected MissingBaseUrl error"),
        }
    }

    #[test]
    fn test_resolve_base_url_flag_overrides_env() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(BASE_URL_ENV_VAR, "http://from-env:9000");

        let result = resolve_base_url(Some("http://from-flag:8080".to_string()));
        assert_eq!(result.unwrap(), "http://from-flag:8080");

        std::env::remove_var(BASE_URL_ENV_VAR);
    }

    #[test]
    fn test_resolve_team_returns_canonical_spelling() {
        assert_eq!(resolve_team("bos").unwrap(), "BOS");
        assert_eq!(resolve_team("  lal  ").unwrap(), "LAL");
        assert_eq!(resolve_team("OKL").unwrap(), "OKL");
    }

    #[test]
    fn test_resolve_team_rejects_unknown_abbreviations() {
        match resolve_team("BKN").unwrap_err() {
            ArrboError::UnknownTeam { abbr } => assert_eq!(abbr, "BKN"),
            _ => panic!("Expected UnknownTeam error"),
        }
        assert!(resolve_team("okc").is_err());
        assert!(resolve_team("").is_err());
    }

    #[test]
    fn test_matchup_params_creation() {
        let params = MatchupParams {
            target: MatchupTarget::ByTeams {
                home: "BOS".to_string(),
                away: "LAL".to_string(),
                date: "2026-01-26".parse().unwrap(),
            },
            base_url: Some("http://localhost:8080".to_string()),
            refresh: false,
            as_json: true,
        };

        assert!(params.as_json);
        match params.target {
            MatchupTarget::ByTeams { home, away, date } => {
                assert_eq!(home, "BOS");
                assert_eq!(away, "LAL");
                assert_eq!(date, "2026-01-26".parse::<GameDate>().unwrap());
            }
            _ => panic!("Expected ByTeams target"),
        }
    }

    #[test]
    fn test_leaders_params_creation() {
        let params = LeadersParams {
            date: "2026-01-26".parse().unwrap(),
            stat: ProjectedStat::Pra,
            limit: 10,
            base_url: None,
            refresh: true,
            as_json: false,
        };

        assert_eq!(params.stat, ProjectedStat::Pra);
        assert_eq!(params.limit, 10);
        assert!(params.refresh);
    }
}
