//! Session token storage
//!
//! The gateway hands out one opaque bearer token per login and gives no
//! expiry; validity is only learned when a call is rejected. The store keeps
//! the single live token and serializes refreshes so overlapping
//! invalid-token recoveries end up sharing one login.

use std::future::Future;

use tokio::sync::{Mutex, RwLock};
use tracing::debug;
use vlxgate_domain::Result;

/// Holder of the current session token
#[derive(Debug, Default)]
pub struct TokenStore {
    current: RwLock<Option<String>>,
    refresh_lock: Mutex<()>,
}

impl TokenStore {
    /// Create an empty store (not authenticated).
    pub fn new() -> Self {
        Self::default()
    }

    /// Current token, if any.
    pub async fn get(&self) -> Option<String> {
        self.current.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }

    /// Forget the current token.
    pub async fn clear(&self) {
        *self.current.write().await = None;
    }

    /// Unconditionally log in and store the new token
    ///
    /// `login` runs while the refresh lock is held. The token is stored only
    /// once `login` has fully succeeded, so a failed or cancelled login keeps
    /// the previous token.
    ///
    /// # Errors
    /// Returns the error of `login`; the held token is left untouched.
    pub async fn refresh<F, Fut>(&self, login: F) -> Result<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        let _guard = self.refresh_lock.lock().await;
        self.login_and_store(login).await
    }

    /// Log in unless another caller already replaced the token `observed`
    ///
    /// `observed` is the token the caller sent (or `None` when it held none).
    /// If the store holds a different token by the time the refresh lock is
    /// acquired, that token is returned and `login` is not called.
    ///
    /// # Errors
    /// Returns the error of `login`; the held token is left untouched.
    pub async fn refresh_if_current<F, Fut>(
        &self,
        observed: Option<&str>,
        login: F,
    ) -> Result<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        let _guard = self.refresh_lock.lock().await;

        if let Some(current) = self.current.read().await.as_deref() {
            if Some(current) != observed {
                debug!("Token already refreshed by another caller");
                return Ok(current.to_string());
            }
        }

        self.login_and_store(login).await
    }

    async fn login_and_store<F, Fut>(&self, login: F) -> Result<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        let token = login().await?;
        *self.current.write().await = Some(token.clone());
        Ok(token)
    }
}
