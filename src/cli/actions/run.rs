//! Executes the requested action end to end. This layer owns what the
//! gateway deliberately does not: local payload validation before any
//! network call, token persistence after a successful response, role-based
//! next steps, and error presentation with a per-action fallback message.

use crate::{
    cli::{actions::Action, globals::GlobalArgs},
    auth::AuthClient,
    error::Error,
    token::{MemoryTokenStore, TokenStore},
    types::{AuthResponse, Role},
};
use anyhow::{anyhow, Result};
use secrecy::SecretString;
use std::sync::Arc;
use tracing::error;

/// Handle the requested action.
/// # Errors
/// Returns a displayable error when the operation fails; the server message
/// is used when one is available, the fallback otherwise.
pub async fn handle(action: Action, globals: &GlobalArgs) -> Result<()> {
    let tokens: Arc<MemoryTokenStore> = Arc::new(MemoryTokenStore::new());
    if let Some(token) = &globals.token {
        tokens.set(token.clone());
    }

    let client = AuthClient::new(&globals.config, Arc::clone(&tokens) as Arc<dyn TokenStore>)?;

    match action {
        Action::Login { credentials } => {
            let response = client
                .login(&credentials)
                .await
                .map_err(|e| present(&e, "Invalid credentials"))?;

            persist_token(&tokens, &response);
            report_signed_in(&response);
        }

        Action::Register { registration } => {
            registration
                .validate()
                .map_err(|e| present(&e, "Registration failed. Try again."))?;

            let response = client
                .register(&registration)
                .await
                .map_err(|e| present(&e, "Registration failed. Try again."))?;

            persist_token(&tokens, &response);
            report_signed_in(&response);
        }

        Action::Logout => {
            client
                .logout()
                .await
                .map_err(|e| present(&e, "Logout failed. Try again."))?;

            tokens.clear();
            println!("signed out");
        }

        Action::Whoami => {
            let user = client
                .fetch_current_user()
                .await
                .map_err(|e| present(&e, "Could not load the current user."))?;

            println!("{}", serde_json::to_string_pretty(&user)?);
        }
    }

    Ok(())
}

// Token persistence is the caller's job, not the gateway's; surface the
// token so the next invocation can pick it up from the environment.
fn persist_token(tokens: &Arc<MemoryTokenStore>, response: &AuthResponse) {
    if let Some(token) = &response.token {
        tokens.set(SecretString::from(token.clone()));
        println!("export MADRASATI_TOKEN={token}");
    }
}

fn report_signed_in(response: &AuthResponse) {
    match &response.user {
        Some(user) => {
            println!(
                "signed in as {} ({})",
                user.email.as_deref().unwrap_or("unknown"),
                role_label(user.role)
            );
            println!("next: {}", landing_path(user.role));
        }
        None => println!("signed in"),
    }
}

fn present(err: &Error, fallback: &str) -> anyhow::Error {
    error!("{err}");

    match err.server_message() {
        Some(message) => anyhow!("{message}"),
        None => anyhow!("{fallback}"),
    }
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::SuperAdmin => "super admin",
        Role::SchoolAdmin => "school admin",
        Role::Standard => "member",
    }
}

// Destinations mirror the web app's post-login routing.
fn landing_path(role: Role) -> &'static str {
    match role {
        Role::SuperAdmin => "/admin/reviews/moderation",
        Role::SchoolAdmin => "/school-admin/profile",
        Role::Standard => "/schools",
    }
}
