use super::model::AccessToken;
use super::refresher::refresh_stored;
use super::token_store::TokenStore;
use crate::backend::AuthBackend;
use crate::errors::{Result, SessionError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    Authorized(AccessToken),
    RedirectToLogin,
}

/// Make sure the request leaves with an access token the backend accepts.
///
/// A present token is checked with `/auth/verify`; an absent or invalid one is
/// replaced through the refresh token. A token is never handed out after a
/// failed refresh, the caller is sent to login instead.
pub async fn ensure_access_token(
    backend: &dyn AuthBackend,
    store: &mut TokenStore,
) -> Result<GateOutcome> {
    let Some(access_token) = store.access_token() else {
        return refresh_or_redirect(backend, store).await;
    };

    if backend.verify(&access_token).await? {
        return Ok(GateOutcome::Authorized(access_token));
    }

    tracing::debug!("backend reported the access token invalid");
    refresh_or_redirect(backend, store).await
}

async fn refresh_or_redirect(
    backend: &dyn AuthBackend,
    store: &mut TokenStore,
) -> Result<GateOutcome> {
    if !store.has_refresh_token() {
        return Ok(GateOutcome::RedirectToLogin);
    }

    match refresh_stored(backend, store).await {
        Ok(pair) => Ok(GateOutcome::Authorized(pair.access_token)),
        Err(SessionError::RefreshRejected(reason)) => {
            tracing::info!(%reason, "refresh token refused, clearing session");
            store.clear();
            Ok(GateOutcome::RedirectToLogin)
        }
        Err(err) => {
            // Credentials may still be good once the backend recovers, keep them.
            tracing::warn!(error = %err, "session refresh failed");
            Ok(GateOutcome::RedirectToLogin)
        }
    }
}
