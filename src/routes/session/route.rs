use axum::{
    Json, Router,
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;

use super::dto::{RefreshPresenceResponse, StoreTokenRequest};
use crate::errors::SessionError;
use crate::extractor::Session;
use crate::routes::auth::dto::{AccessTokenResponse, MessageResponse};
use crate::session::{AccessToken, CredentialPair, RefreshToken};
use crate::state::AppState;

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/api/auth/session", post(store_tokens))
        .route("/api/auth/token", get(current_token))
        .route("/api/auth/check-refresh", get(check_refresh_token))
}

/// Store a credential pair obtained from login as httpOnly cookies
#[utoipa::path(
    post,
    path = "/api/auth/session",
    request_body = StoreTokenRequest,
    responses(
        (status = 200, description = "Cookies written", body = MessageResponse),
        (status = 400, description = "Empty token in request")
    ),
    tag = "Session"
)]
pub async fn store_tokens(
    Session(mut store): Session,
    Json(payload): Json<StoreTokenRequest>,
) -> Result<(CookieJar, Json<MessageResponse>), SessionError> {
    if payload.access_token.trim().is_empty() || payload.refresh_token.trim().is_empty() {
        return Err(SessionError::bad_request(
            "accessToken and refreshToken are required",
        ));
    }

    let pair = CredentialPair::new(
        AccessToken::new(payload.access_token),
        RefreshToken::new(payload.refresh_token),
    );
    store.write(&pair, payload.remember_me);

    tracing::debug!(remember_me = payload.remember_me, "stored credential pair");

    Ok((store.into_jar(), Json(MessageResponse::new("Tokens stored"))))
}

/// Current access token cookie, unvalidated
#[utoipa::path(
    get,
    path = "/api/auth/token",
    responses(
        (status = 200, description = "Access token cookie value, null when absent", body = AccessTokenResponse)
    ),
    tag = "Session"
)]
pub async fn current_token(Session(store): Session) -> Json<AccessTokenResponse> {
    Json(AccessTokenResponse {
        access_token: store.access_token().map(AccessToken::into_inner),
    })
}

/// Whether a refresh token cookie is present
#[utoipa::path(
    get,
    path = "/api/auth/check-refresh",
    responses(
        (status = 200, description = "Refresh token presence", body = RefreshPresenceResponse)
    ),
    tag = "Session"
)]
pub async fn check_refresh_token(Session(store): Session) -> Json<RefreshPresenceResponse> {
    Json(RefreshPresenceResponse {
        has_refresh_token: store.has_refresh_token(),
    })
}
