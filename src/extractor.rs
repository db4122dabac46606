use std::convert::Infallible;

use axum::extract::{FromRef, FromRequestParts};
use axum_extra::extract::cookie::CookieJar;
use http::request::Parts;

use crate::session::{CookieSettings, TokenStore};

/// The request's auth cookies, wrapped as a [`TokenStore`].
///
/// Handlers must hand `store.into_jar()` back in their response for any
/// cookie changes to reach the browser.
pub struct Session(pub TokenStore);

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
    CookieSettings: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state).await?;
        let settings = CookieSettings::from_ref(state);

        Ok(Session(TokenStore::new(jar, settings)))
    }
}
