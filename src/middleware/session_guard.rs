use axum::{
    Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::config::Config;
use crate::session::{GateOutcome, TokenStore, UserProfile, ensure_access_token};
use crate::state::AppState;

const ADMIN_ROLE: &str = "ADMIN";

/// How the guard treats a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    Public,
    User,
    Admin,
    /// Only for signed-out visitors, such as the login page.
    PublicOnly,
}

/// Which page paths need a session and which need an administrator.
///
/// User and public-only paths match exactly. Admin paths match their prefix
/// on a segment boundary, so `/admin` covers `/admin/reports` but not
/// `/administrator`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePolicy {
    pub user_paths: Vec<String>,
    pub admin_prefixes: Vec<String>,
    pub public_only_paths: Vec<String>,
    pub home_path: String,
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self {
            user_paths: vec!["/pages/profile".to_string(), "/chatbox".to_string()],
            admin_prefixes: vec!["/admin".to_string()],
            public_only_paths: vec!["/auth/login".to_string()],
            home_path: "/".to_string(),
        }
    }
}

impl RoutePolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            user_paths: config.user_paths.clone(),
            admin_prefixes: config.admin_paths.clone(),
            public_only_paths: config.public_only_paths.clone(),
            home_path: config.home_path.clone(),
        }
    }

    pub fn classify(&self, path: &str) -> PathClass {
        if self
            .admin_prefixes
            .iter()
            .any(|prefix| under_prefix(path, prefix))
        {
            PathClass::Admin
        } else if self.user_paths.iter().any(|p| p == path) {
            PathClass::User
        } else if self.public_only_paths.iter().any(|p| p == path) {
            PathClass::PublicOnly
        } else {
            PathClass::Public
        }
    }
}

fn under_prefix(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

fn is_admin(profile: &UserProfile) -> bool {
    profile
        .role
        .as_deref()
        .is_some_and(|role| role.eq_ignore_ascii_case(ADMIN_ROLE))
}

/// Wrap `router` so its pages are checked against the state's route policy.
pub fn protect(router: Router, state: AppState) -> Router {
    router.layer(middleware::from_fn_with_state(state, session_guard))
}

/// Route protection for page requests.
///
/// Signed-out visitors are sent to login from user and admin pages. On those
/// pages the session goes through the same gate as `/api/auth/refresh`, so an
/// expired access token is refreshed and the new cookies ride on whatever
/// response comes back. Admin pages also need the backend profile to carry the
/// `ADMIN` role; the token itself is never decoded.
pub async fn session_guard(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let class = state.route_policy.classify(request.uri().path());
    if class == PathClass::Public {
        return next.run(request).await;
    }

    let mut store = TokenStore::new(jar, state.cookies.clone());
    if !store.has_refresh_token() {
        return match class {
            PathClass::User | PathClass::Admin => {
                Redirect::temporary(&state.login_path).into_response()
            }
            _ => next.run(request).await,
        };
    }

    let outcome = match ensure_access_token(state.backend.as_ref(), &mut store).await {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::warn!(error = %err, path = %request.uri().path(), "session check failed");
            GateOutcome::RedirectToLogin
        }
    };

    match (class, outcome) {
        (PathClass::PublicOnly, GateOutcome::Authorized(_)) => {
            (store.into_jar(), Redirect::temporary(&state.route_policy.home_path)).into_response()
        }
        (PathClass::PublicOnly, GateOutcome::RedirectToLogin) => {
            (store.into_jar(), next.run(request).await).into_response()
        }
        (_, GateOutcome::RedirectToLogin) => {
            (store.into_jar(), Redirect::temporary(&state.login_path)).into_response()
        }
        (PathClass::Admin, GateOutcome::Authorized(token)) => {
            let admin = match state.backend.current_user(&token).await {
                Ok(profile) => profile.as_ref().is_some_and(is_admin),
                Err(err) => {
                    tracing::warn!(error = %err, "role lookup failed");
                    false
                }
            };

            if admin {
                (store.into_jar(), next.run(request).await).into_response()
            } else {
                tracing::info!(path = %request.uri().path(), "non-admin sent away from admin page");
                (store.into_jar(), Redirect::temporary(&state.route_policy.home_path))
                    .into_response()
            }
        }
        (_, GateOutcome::Authorized(_)) => {
            (store.into_jar(), next.run(request).await).into_response()
        }
    }
}
