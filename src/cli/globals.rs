use crate::config::ApiConfig;
use secrecy::SecretString;

/// Options shared by every subcommand: where the API lives and the bearer
/// token carried over from a previous login, if any.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub config: ApiConfig,
    pub token: Option<SecretString>,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            token: None,
        }
    }

    pub fn set_token(&mut self, token: SecretString) {
        self.token = Some(token);
    }
}
