//! Auth gateway: one operation per auth intent, sequencing the
//! prime-then-act protocol the backend's session model requires. The gateway
//! owns the full sequence and exposes only the end-to-end result; a priming
//! failure short-circuits before the action request is built.

use crate::{
    config::ApiConfig,
    error::Error,
    token::TokenStore,
    transport::Transport,
    types::{AuthResponse, Credentials, Registration, User},
};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
pub struct AuthClient {
    transport: Transport,
    csrf_url: String,
}

impl AuthClient {
    /// # Errors
    /// Returns an error if the configuration is incomplete or the transport
    /// cannot be built.
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, Error> {
        let csrf_url = config.csrf_url.trim();
        if csrf_url.is_empty() {
            return Err(Error::Config(
                "CSRF priming URL is not configured".to_string(),
            ));
        }

        Ok(Self {
            transport: Transport::new(config, tokens)?,
            csrf_url: csrf_url.to_string(),
        })
    }

    /// Primes the CSRF cookie, then posts the credentials. The returned
    /// token, if any, is the caller's to persist.
    /// # Errors
    /// Returns the priming failure unchanged when the CSRF fetch fails, or
    /// the transport failure from the login request itself.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, Error> {
        self.prime_csrf().await?;

        self.transport.post("/login", credentials).await
    }

    /// Primes the CSRF cookie, then posts the full registration payload.
    /// # Errors
    /// Returns the priming failure unchanged when the CSRF fetch fails, or
    /// the transport failure from the register request itself.
    pub async fn register(&self, registration: &Registration) -> Result<AuthResponse, Error> {
        self.prime_csrf().await?;

        self.transport.post("/register", registration).await
    }

    /// Single step; assumes an already-primed session.
    /// # Errors
    /// Returns the transport failure when the logout request fails.
    pub async fn logout(&self) -> Result<(), Error> {
        self.transport.post_empty("/logout").await
    }

    /// Fetches the authenticated user record.
    /// # Errors
    /// Returns the transport failure when the request fails or the record
    /// does not decode.
    pub async fn fetch_current_user(&self) -> Result<User, Error> {
        self.transport.get("/user").await
    }

    // The priming endpoint is a sibling of the API root, not under it, and
    // must resolve successfully before any state-changing call is issued.
    async fn prime_csrf(&self) -> Result<(), Error> {
        debug!("priming CSRF cookie: {}", self.csrf_url);

        self.transport.get_absolute(&self.csrf_url).await
    }
}
