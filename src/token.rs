//! Storage for the session bearer token. The store is injected into the
//! transport so tests can substitute their own; the transport only ever reads
//! it at header-attachment time, and only the caller writes it after a
//! successful login or registration.

use secrecy::SecretString;
use std::sync::RwLock;

pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<SecretString>;
    fn set(&self, token: SecretString);
    fn clear(&self);
}

/// Process-local token slot.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<SecretString>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: SecretString) -> Self {
        Self {
            token: RwLock::new(Some(token)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<SecretString> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    fn set(&self, token: SecretString) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token);
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn store_starts_empty() {
        let store = MemoryTokenStore::new();
        assert!(store.get().is_none());
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = MemoryTokenStore::new();
        store.set(SecretString::from("token-123".to_string()));

        let token = store.get().expect("token should be present");
        assert_eq!(token.expose_secret(), "token-123");
    }

    #[test]
    fn clear_removes_the_token() {
        let store = MemoryTokenStore::with_token(SecretString::from("token-123".to_string()));
        store.clear();
        assert!(store.get().is_none());
    }
}
