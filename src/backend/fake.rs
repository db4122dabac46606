use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use http::StatusCode;

use super::{AuthBackend, BackendError, IssuedTokens};
use crate::session::model::{AccessToken, RefreshToken, UserProfile};

#[derive(Debug, Default)]
pub struct CallCounts {
    pub refresh: AtomicUsize,
    pub verify: AtomicUsize,
    pub logout: AtomicUsize,
    pub current_user: AtomicUsize,
}

impl CallCounts {
    pub fn refresh(&self) -> usize {
        self.refresh.load(Ordering::SeqCst)
    }

    pub fn verify(&self) -> usize {
        self.verify.load(Ordering::SeqCst)
    }

    pub fn logout(&self) -> usize {
        self.logout.load(Ordering::SeqCst)
    }

    pub fn current_user(&self) -> usize {
        self.current_user.load(Ordering::SeqCst)
    }

    pub fn total(&self) -> usize {
        self.refresh() + self.verify() + self.logout() + self.current_user()
    }
}

/// In-memory backend: knows which access tokens are valid and which refresh
/// tokens it will honour.
#[derive(Debug, Default)]
pub struct FakeBackend {
    valid_access: Mutex<HashSet<String>>,
    grants: Mutex<HashMap<String, IssuedTokens>>,
    offline: AtomicBool,
    distrust_refreshed: AtomicBool,
    profile_failure: Mutex<Option<StatusCode>>,
    pub calls: CallCounts,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_valid_access(self, token: &str) -> Self {
        self.valid_access.lock().unwrap().insert(token.to_string());
        self
    }

    /// Honour `refresh` by issuing `access` (and a rotated refresh token when given).
    pub fn with_grant(self, refresh: &str, access: &str, rotated: Option<&str>) -> Self {
        self.grants.lock().unwrap().insert(
            refresh.to_string(),
            IssuedTokens {
                access_token: AccessToken::new(access),
                refresh_token: rotated.map(RefreshToken::new),
            },
        );
        self
    }

    pub fn offline(self) -> Self {
        self.offline.store(true, Ordering::SeqCst);
        self
    }

    /// Keep refusing access tokens issued by `refresh`, as a backend with a
    /// broken signing key would.
    pub fn rejecting_refreshed_tokens(self) -> Self {
        self.distrust_refreshed.store(true, Ordering::SeqCst);
        self
    }

    pub fn with_profile_failure(self, status: StatusCode) -> Self {
        *self.profile_failure.lock().unwrap() = Some(status);
        self
    }

    fn check_online(&self) -> Result<(), BackendError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(BackendError::Unavailable("connection refused".to_string()));
        }
        Ok(())
    }

    fn is_valid(&self, token: &AccessToken) -> bool {
        self.valid_access.lock().unwrap().contains(token.as_str())
    }
}

#[async_trait]
impl AuthBackend for FakeBackend {
    async fn refresh(&self, refresh_token: &RefreshToken) -> Result<IssuedTokens, BackendError> {
        self.calls.refresh.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;

        let issued = self
            .grants
            .lock()
            .unwrap()
            .get(refresh_token.as_str())
            .cloned()
            .ok_or_else(|| BackendError::Rejected {
                status: StatusCode::BAD_REQUEST,
                message: "Refresh token fail".to_string(),
            })?;

        if !self.distrust_refreshed.load(Ordering::SeqCst) {
            self.valid_access
                .lock()
                .unwrap()
                .insert(issued.access_token.as_str().to_string());
        }

        Ok(issued)
    }

    async fn verify(&self, access_token: &AccessToken) -> Result<bool, BackendError> {
        self.calls.verify.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        Ok(self.is_valid(access_token))
    }

    async fn logout(
        &self,
        _refresh_token: &RefreshToken,
        _access_token: Option<&AccessToken>,
    ) -> Result<(), BackendError> {
        self.calls.logout.fetch_add(1, Ordering::SeqCst);
        self.check_online()
    }

    async fn current_user(
        &self,
        access_token: &AccessToken,
    ) -> Result<Option<UserProfile>, BackendError> {
        self.calls.current_user.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;

        if let Some(status) = *self.profile_failure.lock().unwrap() {
            return Err(BackendError::Rejected {
                status,
                message: "profile lookup failed".to_string(),
            });
        }

        if !self.is_valid(access_token) {
            return Err(BackendError::Unauthorized);
        }

        Ok(Some(UserProfile {
            id: "42".to_string(),
            email: "traveller@example.com".to_string(),
            display_name: Some("Traveller".to_string()),
            first_name: None,
            last_name: None,
            role: Some("USER".to_string()),
        }))
    }
}
