//! Custom assertion macros
//!
//! Envelope-aware assertions with more descriptive failure output than a
//! bare `assert!`.

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Assert an `ApiResponse` JSON body is a failure with no payload, and
/// return its message
#[macro_export]
macro_rules! assert_failure_envelope {
    ($body:expr) => {{
        let body: &serde_json::Value = &$body;
        assert_eq!(body["responseStatus"], "failure", "Expected failure envelope, got {}", body);
        assert!(
            body["responseObject"].is_null(),
            "Failure envelope carried a payload: {}",
            body
        );
        body["responseMessage"].as_str().unwrap_or_default().to_string()
    }};
}

/// Assert an `ApiResponse` JSON body is a success carrying a non-empty token,
/// and return the token
#[macro_export]
macro_rules! assert_token_envelope {
    ($body:expr) => {{
        let body: &serde_json::Value = &$body;
        assert_eq!(body["responseStatus"], "success", "Expected success envelope, got {}", body);
        let token = body["responseObject"]["token"].as_str().unwrap_or_default().to_string();
        assert!(!token.is_empty(), "Success envelope without a token: {}", body);
        token
    }};
}
