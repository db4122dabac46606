use super::token_store::TokenStore;
use crate::backend::AuthBackend;

/// Tell the backend to forget the session, then drop both cookies.
///
/// The upstream call is best-effort: the cookies are cleared no matter what
/// it returns.
pub async fn logout(backend: &dyn AuthBackend, store: &mut TokenStore) {
    let tokens = store.read();

    if let Some(refresh_token) = tokens.refresh.as_ref() {
        if let Err(err) = backend.logout(refresh_token, tokens.access.as_ref()).await {
            tracing::warn!(error = %err, "upstream logout failed, clearing cookies anyway");
        }
    }

    store.clear();
}
