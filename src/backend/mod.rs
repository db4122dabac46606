//! Client side of the external auth backend.
//!
//! Everything in `session` talks to the backend through [`AuthBackend`], so the
//! rotation logic can run against [`HttpAuthBackend`] in production and an
//! in-memory fake in tests.

pub mod client;
pub mod dto;
pub mod error;
#[cfg(test)]
pub mod fake;

use async_trait::async_trait;

use crate::session::model::{AccessToken, RefreshToken, UserProfile};

pub use client::HttpAuthBackend;
pub use error::BackendError;

/// Tokens handed out by `/auth/refresh`. The backend may or may not rotate
/// the refresh token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedTokens {
    pub access_token: AccessToken,
    pub refresh_token: Option<RefreshToken>,
}

#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// `POST /auth/refresh`
    async fn refresh(&self, refresh_token: &RefreshToken) -> Result<IssuedTokens, BackendError>;

    /// `POST /auth/verify`. `Ok(false)` means the backend answered and the
    /// token is not valid.
    async fn verify(&self, access_token: &AccessToken) -> Result<bool, BackendError>;

    /// `POST /auth/logout`
    async fn logout(
        &self,
        refresh_token: &RefreshToken,
        access_token: Option<&AccessToken>,
    ) -> Result<(), BackendError>;

    /// `GET /user/getme`. `Ok(None)` when the envelope carries no result.
    async fn current_user(
        &self,
        access_token: &AccessToken,
    ) -> Result<Option<UserProfile>, BackendError>;
}
