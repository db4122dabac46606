use super::model::UserProfile;
use super::refresher::refresh_stored;
use super::token_store::TokenStore;
use crate::backend::{AuthBackend, BackendError};
use crate::errors::Result;

/// Profile of the signed-in user, or `None` when there is nobody to ask about.
///
/// A 401 on the profile call triggers one refresh and one retry. A failed
/// refresh yields `None`; errors from the retry, and non-401 errors from the
/// first call, are returned as they are.
pub async fn get_current_user(
    backend: &dyn AuthBackend,
    store: &mut TokenStore,
) -> Result<Option<UserProfile>> {
    let Some(access_token) = store.access_token() else {
        return Ok(None);
    };

    match backend.current_user(&access_token).await {
        Ok(profile) => Ok(profile),
        Err(BackendError::Unauthorized) => {
            tracing::info!("access token expired, attempting refresh");

            let pair = match refresh_stored(backend, store).await {
                Ok(pair) => pair,
                Err(err) => {
                    tracing::warn!(error = %err, "refresh after 401 failed");
                    return Ok(None);
                }
            };

            Ok(backend.current_user(&pair.access_token).await?)
        }
        Err(err) => Err(err.into()),
    }
}
