use phishdrill::errors::{PhishdrillError, Result};

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_database_connection_error() {
        let error = PhishdrillError::database_connection("connection refused");

        assert!(matches!(error, PhishdrillError::DatabaseConnection(_)));
        assert_eq!(error.code(), "E002");
        assert!(error.to_string().contains("Database Connection Error"));
        assert!(error.to_string().contains("connection refused"));
    }

    #[test]
    fn test_validation_error() {
        let error = PhishdrillError::validation("participant list cannot be empty");

        assert!(matches!(error, PhishdrillError::Validation(_)));
        assert_eq!(error.code(), "E004");
        assert!(error.to_string().contains("Validation Error"));
    }

    #[test]
    fn test_not_found_error() {
        let error = PhishdrillError::not_found("campaign missing");

        assert!(matches!(error, PhishdrillError::NotFound(_)));
        assert_eq!(error.code(), "E005");
        assert_eq!(error.error_type(), "Resource Not Found");
        assert_eq!(error.message(), "campaign missing");
    }

    #[test]
    fn test_token_decode_error() {
        let error = PhishdrillError::token_decode("bad payload");

        assert!(matches!(error, PhishdrillError::TokenDecode(_)));
        assert_eq!(error.code(), "E007");
        assert!(error.to_string().contains("Tracking Token Error"));
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_from_serde_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{bad").unwrap_err();
        let error: PhishdrillError = json_error.into();

        assert!(matches!(error, PhishdrillError::Serialization(_)));
    }

    #[test]
    fn test_from_db_error() {
        let db_error = sea_orm::DbErr::Custom("boom".to_string());
        let error: PhishdrillError = db_error.into();

        assert!(matches!(error, PhishdrillError::DatabaseOperation(_)));
        assert!(error.message().contains("boom"));
    }

    #[test]
    fn test_result_alias() {
        fn fails() -> Result<()> {
            Err(PhishdrillError::validation("nope"))
        }

        assert!(fails().is_err());
    }
}
