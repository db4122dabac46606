use super::model::{CredentialPair, RefreshToken};
use super::token_store::TokenStore;
use crate::backend::{AuthBackend, BackendError};
use crate::errors::{Result, SessionError};

/// Trade `refresh_token` for a new access token and persist what the backend
/// issued.
///
/// The store is only touched on success. A rotated refresh token keeps the
/// lifetime chosen at login; when the backend does not rotate, the presented
/// token stays as it is and is returned in the pair.
pub async fn refresh(
    backend: &dyn AuthBackend,
    store: &mut TokenStore,
    refresh_token: &RefreshToken,
) -> Result<CredentialPair> {
    let issued = backend
        .refresh(refresh_token)
        .await
        .map_err(refresh_failure)?;

    let pair = match issued.refresh_token {
        Some(rotated) => {
            let pair = CredentialPair::new(issued.access_token, rotated);
            let remember_me = store.remembered();
            store.write(&pair, remember_me);
            pair
        }
        None => {
            store.write_access(&issued.access_token);
            CredentialPair::new(issued.access_token, refresh_token.clone())
        }
    };

    tracing::debug!("access token refreshed");
    Ok(pair)
}

/// [`refresh`] using whatever refresh token the store holds.
pub async fn refresh_stored(
    backend: &dyn AuthBackend,
    store: &mut TokenStore,
) -> Result<CredentialPair> {
    let refresh_token = store
        .refresh_token()
        .ok_or(SessionError::MissingCredential)?;

    refresh(backend, store, &refresh_token).await
}

fn refresh_failure(err: BackendError) -> SessionError {
    match err {
        BackendError::Unauthorized => SessionError::RefreshRejected(err.to_string()),
        BackendError::Rejected { status, message } if status.is_client_error() => {
            SessionError::RefreshRejected(format!("{status}: {message}"))
        }
        other => other.into(),
    }
}
