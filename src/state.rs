use std::sync::Arc;

use crate::backend::{AuthBackend, HttpAuthBackend};
use crate::config::Config;
use crate::middleware::RoutePolicy;
use crate::session::CookieSettings;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn AuthBackend>,
    pub cookies: CookieSettings,
    pub login_path: String,
    pub route_policy: RoutePolicy,
}

impl AppState {
    pub fn new(
        backend: Arc<dyn AuthBackend>,
        cookies: CookieSettings,
        login_path: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            cookies,
            login_path: login_path.into(),
            route_policy: RoutePolicy::default(),
        }
    }

    pub fn with_route_policy(mut self, route_policy: RoutePolicy) -> Self {
        self.route_policy = route_policy;
        self
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let backend = HttpAuthBackend::from_config(config)?;
        let state = Self::new(
            Arc::new(backend),
            CookieSettings::from_config(config),
            config.login_path.clone(),
        );
        Ok(state.with_route_policy(RoutePolicy::from_config(config)))
    }
}

// Lets extractors pull the cookie settings out of the state
impl axum::extract::FromRef<AppState> for CookieSettings {
    fn from_ref(state: &AppState) -> Self {
        state.cookies.clone()
    }
}
