//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod arrbo_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_conversion() {
        // Create a real HTTP error by making a request to an invalid URL
        let client = reqwest::Client::new();
        let result = client
            .get("http://invalid-url-that-does-not-exist.fake")
            .send()
            .await;
        let reqwest_error = result.unwrap_err();
        let arrbo_error = ArrboError::from(reqwest_error);

        match arrbo_error {
            ArrboError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        // Create a JSON error by trying to parse invalid JSON
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let arrbo_error = ArrboError::from(json_error);

        match arrbo_error {
            ArrboError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let arrbo_error = ArrboError::from(io_error);

        match arrbo_error {
            ArrboError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_missing_base_url_error() {
        let error = ArrboError::MissingBaseUrl {
            env_var: "ARRBO_BASE_URL".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Base URL not provided"));
        assert!(error_string.contains("ARRBO_BASE_URL"));
    }

    #[test]
    fn test_invalid_date_error() {
        let error = ArrboError::InvalidDate {
            input: "01/26/2026".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Invalid date"));
        assert!(error_string.contains("01/26/2026"));
        assert!(error_string.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_unknown_team_error() {
        let error = ArrboError::UnknownTeam {
            abbr: "ZZZ".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Unknown team"));
        assert!(error_string.contains("ZZZ"));
    }

    #[test]
    fn test_invalid_stat_error() {
        let error = ArrboError::InvalidStat {
            stat: "blocks".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Invalid stat"));
        assert!(error_string.contains("blocks"));
        assert!(error_string.contains("pts, reb, ast, or pra"));
    }

    #[test]
    fn test_game_not_found_error() {
        let error = ArrboError::GameNotFound {
            game_id: "20260126-LAL-BOS".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Game not found"));
        assert!(error_string.contains("20260126-LAL-BOS"));
    }

    #[test]
    fn test_cache_error() {
        let error = ArrboError::Cache {
            message: "Failed to write cache".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Cache error"));
        assert!(error_string.contains("Failed to write cache"));
    }

    #[test]
    fn test_box_error_conversion() {
        let box_error: Box<dyn std::error::Error + Send + Sync> = Box::new(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "Access denied",
        ));
        let arrbo_error = ArrboError::from(box_error);

        match arrbo_error {
            ArrboError::Cache { message } => {
                assert!(message.contains("Access denied"));
            }
            _ => panic!("Expected Cache error variant"),
        }
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let anyhow_error = anyhow::anyhow!("Test anyhow error message");
        let arrbo_error = ArrboError::from(anyhow_error);

        match arrbo_error {
            ArrboError::Cache { message } => {
                assert!(message.contains("Test anyhow error message"));
            }
            _ => panic!("Expected Cache error variant"),
        }
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let arrbo_error = ArrboError::from(io_error);

        // Test that the error implements std::error::Error properly
        let error_trait: &dyn std::error::Error = &arrbo_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_error_debug_formatting() {
        let error = ArrboError::UnknownTeam {
            abbr: "SEA".to_string(),
        };
        let debug_string = format!("{:?}", error);
        assert!(debug_string.contains("UnknownTeam"));
    }

    #[test]
    fn test_result_type_alias() {
        fn test_function() -> Result<String> {
            Ok("success".to_string())
        }

        let result = test_function();
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "success");
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(ArrboError::GameNotFound {
                game_id: "missing".to_string(),
            })
        }

        let result = test_function();
        assert!(result.is_err());
        match result.unwrap_err() {
            ArrboError::GameNotFound { game_id } => assert_eq!(game_id, "missing"),
            _ => panic!("Expected GameNotFound error"),
        }
    }
}
