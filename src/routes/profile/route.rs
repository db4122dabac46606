use axum::{Json, Router, extract::State, routing::get};
use axum_extra::extract::cookie::CookieJar;

use crate::extractor::Session;
use crate::session::{UserProfile, get_current_user};
use crate::state::AppState;

pub fn create_route() -> Router<AppState> {
    Router::new().route("/api/auth/me", get(get_me))
}

/// Current user profile, refreshing the access token once on 401
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Profile of the signed-in user, null when signed out or unavailable", body = UserProfile)
    ),
    tag = "Profile"
)]
pub async fn get_me(
    State(state): State<AppState>,
    Session(mut store): Session,
) -> (CookieJar, Json<Option<UserProfile>>) {
    let profile = match get_current_user(state.backend.as_ref(), &mut store).await {
        Ok(profile) => profile,
        Err(err) => {
            tracing::warn!(error = %err, "Error fetching user profile");
            None
        }
    };

    (store.into_jar(), Json(profile))
}
