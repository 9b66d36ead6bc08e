/**
 * Login and Registration Forms
 *
 * Form models independent of any UI toolkit. Each form validates its fields,
 * refuses to submit while invalid, and turns the outcome of the request into
 * user-facing messages on its `FormState`. A successful, authenticated
 * submission sets `redirect_after`, which the caller honors by navigating
 * away after that delay.
 */

use std::time::Duration;

use crate::client::auth::{session_payload, AuthClient, AuthResponse};
use crate::client::error::ClientError;
use crate::shared::validation::{check_field, passwords_match, FieldError, Rule};
use crate::shared::{LoginRequest, RegisterRequest, ResponseStatus};

/// Delay between a successful submission and navigation
pub const REDIRECT_DELAY: Duration = Duration::from_millis(500);

const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";

/// Messages and flags shared by both forms
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub warning_message: Option<String>,
    pub is_loading: bool,
    pub redirect_after: Option<Duration>,
    pub field_errors: Vec<FieldError>,
}

impl FormState {
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
        self.warning_message = None;
        self.redirect_after = None;
    }

    /// Field errors as display messages
    pub fn field_messages(&self) -> Vec<String> {
        self.field_errors.iter().map(FieldError::message).collect()
    }
}

/// Fallback texts for one form
struct Messages {
    success: &'static str,
    missing_token: &'static str,
    warning: &'static str,
    failure: &'static str,
    bad_request: &'static str,
    conflict: Option<&'static str>,
    transport_default: &'static str,
}

const LOGIN_MESSAGES: Messages = Messages {
    success: "Login successful!",
    missing_token: "Token not received. Please try again.",
    warning: "Login completed with warnings.",
    failure: "Login failed. Please try again.",
    bad_request: "Invalid email or password.",
    conflict: None,
    transport_default: "Login failed. Please check your credentials.",
};

const REGISTER_MESSAGES: Messages = Messages {
    success: "Registration successful!",
    missing_token: "Token not received. Please try login manually.",
    warning: "Registration completed with warnings.",
    failure: "Registration failed. Please try again.",
    bad_request: "Invalid input. Please check your details.",
    conflict: Some("User already exists. Please use a different email or username."),
    transport_default: "Registration failed. Please try again.",
};

impl Messages {
    fn transport(&self, error: &ClientError) -> String {
        if let Some(message) = error.server_message() {
            return message.to_string();
        }
        let message = match (error.status(), self.conflict) {
            (Some(400), _) => self.bad_request,
            (Some(409), Some(conflict)) => conflict,
            (Some(500), _) => SERVER_ERROR_MESSAGE,
            _ => self.transport_default,
        };
        message.to_string()
    }
}

fn apply_outcome(
    state: &mut FormState,
    messages: &Messages,
    outcome: Result<AuthResponse, ClientError>,
) {
    state.is_loading = false;

    match outcome {
        Ok(response) => match response.response_status {
            ResponseStatus::Success => {
                state.success_message = Some(response.message_or(messages.success).to_string());
                if session_payload(&response).is_some() {
                    state.redirect_after = Some(REDIRECT_DELAY);
                } else {
                    state.error_message = Some(messages.missing_token.to_string());
                }
            }
            ResponseStatus::Warning => {
                state.warning_message = Some(response.message_or(messages.warning).to_string());
            }
            ResponseStatus::Failure => {
                state.error_message = Some(response.message_or(messages.failure).to_string());
            }
        },
        Err(error) => {
            tracing::error!("Authentication request failed: {}", error);
            state.error_message = Some(messages.transport(&error));
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub state: FormState,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            state: FormState::default(),
        }
    }

    pub fn errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_field("email", &self.email, &[Rule::Required, Rule::Email], &mut errors);
        check_field("password", &self.password, &[Rule::Required, Rule::MinLength(6)], &mut errors);
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    pub fn payload(&self) -> LoginRequest {
        LoginRequest::new(self.email.trim(), self.password.as_str())
    }

    /// Validate, send, and record the outcome on `self.state`. Returns
    /// without a request when the form is invalid.
    pub async fn submit(&mut self, client: &AuthClient) {
        self.state.clear_messages();
        self.state.field_errors = self.errors();
        if !self.state.field_errors.is_empty() {
            return;
        }

        self.state.is_loading = true;
        let outcome = client.login(&self.payload()).await;
        apply_outcome(&mut self.state, &LOGIN_MESSAGES, outcome);
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub state: FormState,
}

impl RegisterForm {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
            state: FormState::default(),
        }
    }

    pub fn errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_field("username", &self.username, &[Rule::Required, Rule::MinLength(3)], &mut errors);
        check_field("email", &self.email, &[Rule::Required, Rule::Email], &mut errors);
        check_field("password", &self.password, &[Rule::Required, Rule::MinLength(6)], &mut errors);
        check_field("confirmPassword", &self.confirm_password, &[Rule::Required], &mut errors);
        if !passwords_match(&self.password, &self.confirm_password) {
            errors.push(FieldError::new("confirmPassword", Rule::PasswordMismatch));
        }
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// Outgoing body; the confirmation field stays on the client
    pub fn payload(&self) -> RegisterRequest {
        RegisterRequest::new(self.username.trim(), self.email.trim(), self.password.as_str())
    }

    pub async fn submit(&mut self, client: &AuthClient) {
        self.state.clear_messages();
        self.state.field_errors = self.errors();
        if !self.state.field_errors.is_empty() {
            return;
        }

        self.state.is_loading = true;
        let outcome = client.register(&self.payload()).await;
        apply_outcome(&mut self.state, &REGISTER_MESSAGES, outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::client::config::Config;
    use crate::client::storage::MemoryStore;
    use crate::shared::{AppConfig, ApiResponse, TokenResponse};

    fn client() -> AuthClient {
        let config = Config::with_builder(
            AppConfig::builder().server_url("http://localhost:5286"),
            "/tmp/storefront-test",
        )
        .unwrap();
        AuthClient::new(config, Arc::new(MemoryStore::new()))
    }

    fn http_error(status: u16, message: Option<&str>) -> ClientError {
        ClientError::Http {
            status,
            body: message.map(|m| ApiResponse::failure(m)),
        }
    }

    #[test]
    fn test_login_form_validation() {
        assert!(LoginForm::new("alice@example.com", "secret1").is_valid());

        let errors = LoginForm::new("", "123").errors();
        assert_eq!(
            errors,
            vec![
                FieldError::new("email", Rule::Required),
                FieldError::new("password", Rule::MinLength(6)),
            ]
        );

        let errors = LoginForm::new("not-an-email", "secret1").errors();
        assert_eq!(errors, vec![FieldError::new("email", Rule::Email)]);
    }

    #[test]
    fn test_register_form_validation() {
        assert!(RegisterForm::new("bob", "bob@example.com", "secret1", "secret1").is_valid());

        let errors = RegisterForm::new("bo", "bob@example.com", "secret1", "secret2").errors();
        assert_eq!(
            errors,
            vec![
                FieldError::new("username", Rule::MinLength(3)),
                FieldError::new("confirmPassword", Rule::PasswordMismatch),
            ]
        );
    }

    #[test]
    fn test_register_payload_has_no_confirmation() {
        let form = RegisterForm::new(" bob ", "bob@example.com", "secret1", "secret1");
        let body = serde_json::to_value(form.payload()).unwrap();
        assert_eq!(body["userName"], "bob");
        assert!(body.get("confirmPassword").is_none());
    }

    #[tokio::test]
    async fn test_invalid_form_does_not_submit() {
        // Unreachable server: an attempted request would set an error message
        let mut form = LoginForm::new("", "");
        form.submit(&client()).await;

        assert_eq!(form.state.field_errors.len(), 2);
        assert_eq!(form.state.error_message, None);
        assert!(!form.state.is_loading);
    }

    #[test]
    fn test_success_without_token_reports_missing_token() {
        let mut state = FormState::default();
        let response = ApiResponse::success("", TokenResponse::default());
        apply_outcome(&mut state, &LOGIN_MESSAGES, Ok(response));

        assert_eq!(state.success_message.as_deref(), Some("Login successful!"));
        assert_eq!(
            state.error_message.as_deref(),
            Some("Token not received. Please try again.")
        );
        assert_eq!(state.redirect_after, None);
    }

    #[test]
    fn test_warning_and_failure_fallbacks() {
        let mut state = FormState::default();
        let response = ApiResponse::warning("", TokenResponse::default());
        apply_outcome(&mut state, &REGISTER_MESSAGES, Ok(response));
        assert_eq!(
            state.warning_message.as_deref(),
            Some("Registration completed with warnings.")
        );

        let mut state = FormState::default();
        apply_outcome(&mut state, &LOGIN_MESSAGES, Ok(ApiResponse::failure("")));
        assert_eq!(state.error_message.as_deref(), Some("Login failed. Please try again."));
    }

    #[test]
    fn test_login_transport_mapping() {
        assert_eq!(LOGIN_MESSAGES.transport(&http_error(400, None)), "Invalid email or password.");
        assert_eq!(LOGIN_MESSAGES.transport(&http_error(500, None)), SERVER_ERROR_MESSAGE);
        assert_eq!(
            LOGIN_MESSAGES.transport(&http_error(409, None)),
            "Login failed. Please check your credentials."
        );
        assert_eq!(
            LOGIN_MESSAGES.transport(&http_error(400, Some("Validation error: The Email field is required."))),
            "Validation error: The Email field is required."
        );
    }

    #[test]
    fn test_register_transport_mapping() {
        assert_eq!(
            REGISTER_MESSAGES.transport(&http_error(409, None)),
            "User already exists. Please use a different email or username."
        );
        assert_eq!(
            REGISTER_MESSAGES.transport(&http_error(400, None)),
            "Invalid input. Please check your details."
        );
        assert_eq!(REGISTER_MESSAGES.transport(&http_error(500, None)), SERVER_ERROR_MESSAGE);
        assert_eq!(
            REGISTER_MESSAGES.transport(&http_error(502, None)),
            "Registration failed. Please try again."
        );
    }
}
