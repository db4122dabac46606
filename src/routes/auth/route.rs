use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};

use super::dto::{AccessTokenResponse, MessageResponse};
use crate::errors::SessionError;
use crate::extractor::Session;
use crate::session::{GateOutcome, ensure_access_token, logout};
use crate::state::AppState;

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/api/auth/refresh", get(refresh_session))
        .route("/auth/logout", post(logout_session))
}

/// Session gate - returns a backend-approved access token or redirects to login
#[utoipa::path(
    get,
    path = "/api/auth/refresh",
    responses(
        (status = 200, description = "Access token is valid or was refreshed", body = AccessTokenResponse),
        (status = 307, description = "No usable credentials, redirect to login"),
        (status = 502, description = "Auth backend unavailable")
    ),
    tag = "Session"
)]
pub async fn refresh_session(
    State(state): State<AppState>,
    Session(mut store): Session,
) -> Result<Response, SessionError> {
    let outcome = ensure_access_token(state.backend.as_ref(), &mut store).await?;
    let jar = store.into_jar();

    let response = match outcome {
        GateOutcome::Authorized(token) => (
            jar,
            Json(AccessTokenResponse {
                access_token: Some(token.into_inner()),
            }),
        )
            .into_response(),
        GateOutcome::RedirectToLogin => {
            (jar, Redirect::temporary(&state.login_path)).into_response()
        }
    };

    Ok(response)
}

/// Logout - best-effort upstream invalidation, always clears both cookies
#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 200, description = "Cookies cleared", body = MessageResponse)
    ),
    tag = "Session"
)]
pub async fn logout_session(
    State(state): State<AppState>,
    Session(mut store): Session,
) -> impl IntoResponse {
    logout(state.backend.as_ref(), &mut store).await;

    (store.into_jar(), Json(MessageResponse::new("Logged out")))
}
