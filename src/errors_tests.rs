//! Unit tests for error handling
//!
//! Tests error types, stage wrapping, and error message formatting.

#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use std::io;

    use crate::errors::ProfileTwinError;

    // ====== Error Type Tests ======

    #[test]
    fn test_config_error() {
        let error = ProfileTwinError::ConfigError("Missing GROQ_API_KEY".to_string());
        assert!(matches!(error, ProfileTwinError::ConfigError(_)));
        let display = format!("{}", error);
        assert_eq!(display, "Configuration error: Missing GROQ_API_KEY");
    }

    #[test]
    fn test_unknown_category_error() {
        let error = ProfileTwinError::UnknownCategory("hobbies".to_string());
        assert!(format!("{}", error).contains("hobbies"));
    }

    // ====== Stage Wrapping Tests ======

    #[test]
    fn test_retrieval_wrapper_message() {
        let error = ProfileTwinError::retrieval(ProfileTwinError::VectorSearchError(
            "503 Service Unavailable".to_string(),
        ));
        assert_eq!(
            format!("{}", error),
            "Failed to query profile: Vector search error: 503 Service Unavailable"
        );
    }

    #[test]
    fn test_generation_wrapper_message() {
        let error = ProfileTwinError::generation(ProfileTwinError::LlmError(
            "No text response from LLM".to_string(),
        ));
        assert_eq!(
            format!("{}", error),
            "Failed to generate response: LLM error: No text response from LLM"
        );
    }

    #[test]
    fn test_wrapper_preserves_source() {
        let error = ProfileTwinError::retrieval(ProfileTwinError::HttpError("timeout".to_string()));
        let source = error.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("HTTP error: timeout"));
    }

    #[test]
    fn test_is_config_error_through_wrappers() {
        let direct = ProfileTwinError::ConfigError("missing token".to_string());
        assert!(direct.is_config_error());

        let wrapped = ProfileTwinError::retrieval(ProfileTwinError::ConfigError(
            "missing token".to_string(),
        ));
        assert!(wrapped.is_config_error());

        let remote = ProfileTwinError::generation(ProfileTwinError::LlmError("500".to_string()));
        assert!(!remote.is_config_error());
    }

    // ====== Error Conversion Tests ======

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let twin_err: ProfileTwinError = io_err.into();

        assert!(matches!(twin_err, ProfileTwinError::Io(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let parse_result: Result<serde_json::Value, _> = serde_json::from_str("{invalid json}");

        if let Err(json_err) = parse_result {
            let twin_err: ProfileTwinError = json_err.into();
            assert!(matches!(twin_err, ProfileTwinError::Serialization(_)));
        }
    }

    #[test]
    fn test_error_from_toml() {
        let parse_result: Result<toml::Value, _> = toml::from_str("not = [valid");

        if let Err(toml_err) = parse_result {
            let twin_err: ProfileTwinError = toml_err.into();
            assert!(matches!(twin_err, ProfileTwinError::TomlParsing(_)));
        }
    }

    // ====== Result Type Tests ======

    #[test]
    fn test_result_and_then() {
        let result: crate::Result<i32> = Ok(42);
        let chained = result.and_then(|v| {
            if v > 40 {
                Ok(v + 10)
            } else {
                Err(ProfileTwinError::InvalidInput("Too small".to_string()))
            }
        });
        assert_eq!(chained.unwrap(), 52);
    }
}
