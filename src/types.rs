//! Request payloads and the user record returned by the API. Payloads are
//! transient; nothing here is persisted by the client.

use crate::error::Error;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub password: String,
    pub password_confirmation: String,
    pub terms: bool,
}

impl Registration {
    /// Local checks performed at the caller boundary before any network
    /// call. A failure here must produce zero network I/O.
    /// # Errors
    /// Returns a validation error naming the first failed check.
    pub fn validate(&self) -> Result<(), Error> {
        if !valid_email(&self.email) {
            return Err(Error::Validation(
                "Enter a valid email address.".to_string(),
            ));
        }

        if self.password != self.password_confirmation {
            return Err(Error::Validation("Passwords don't match".to_string()));
        }

        if !self.terms {
            return Err(Error::Validation(
                "Please agree to the Terms & Conditions".to_string(),
            ));
        }

        Ok(())
    }
}

pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

/// Role classification drawn from a closed set; it decides where the caller
/// sends the user after login.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    SchoolAdmin,
    Standard,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
}

/// Envelope returned by login and register. The backend may answer with a
/// bearer token, a user record, both, or neither (cookie-only sessions);
/// unknown fields pass through ignored.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn registration() -> Registration {
        Registration {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: "0555123456".to_string(),
            city: "Riyadh".to_string(),
            password: "secret123".to_string(),
            password_confirmation: "secret123".to_string(),
            terms: true,
        }
    }

    #[test]
    fn registration_serializes_confirmation_field() -> Result<()> {
        let value = serde_json::to_value(registration())?;
        assert_eq!(
            value
                .get("password_confirmation")
                .and_then(serde_json::Value::as_str),
            Some("secret123")
        );
        assert_eq!(value.get("terms").and_then(serde_json::Value::as_bool), Some(true));
        Ok(())
    }

    #[test]
    fn validate_accepts_complete_payload() {
        assert!(registration().validate().is_ok());
    }

    #[test]
    fn validate_rejects_mismatched_passwords() {
        let mut payload = registration();
        payload.password_confirmation = "different".to_string();

        let err = payload.validate().unwrap_err();
        assert_eq!(err.server_message(), Some("Passwords don't match"));
    }

    #[test]
    fn validate_rejects_unaccepted_terms() {
        let mut payload = registration();
        payload.terms = false;
        assert!(payload.validate().is_err());
    }

    #[test]
    fn validate_rejects_malformed_email() {
        let mut payload = registration();
        payload.email = "not-an-email".to_string();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn role_parses_snake_case() -> Result<()> {
        let role: Role = serde_json::from_str(r#""school_admin""#)?;
        assert_eq!(role, Role::SchoolAdmin);

        let role: Role = serde_json::from_str(r#""super_admin""#)?;
        assert_eq!(role, Role::SuperAdmin);
        Ok(())
    }

    #[test]
    fn auth_response_tolerates_unknown_fields() -> Result<()> {
        let response: AuthResponse = serde_json::from_str(
            r#"{"token": "abc", "expires_in": 3600, "user": {"id": 1, "role": "standard"}}"#,
        )?;
        assert_eq!(response.token.as_deref(), Some("abc"));
        let user = response.user.expect("user should be present");
        assert_eq!(user.role, Role::Standard);
        Ok(())
    }

    #[test]
    fn auth_response_allows_cookie_only_sessions() -> Result<()> {
        let response: AuthResponse = serde_json::from_str(r#"{"message": "ok"}"#)?;
        assert!(response.token.is_none());
        assert!(response.user.is_none());
        Ok(())
    }
}
