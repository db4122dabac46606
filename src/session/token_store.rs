use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use super::model::{AccessToken, CredentialPair, RefreshToken, StoredTokens};
use crate::config::Config;

pub const ACCESS_COOKIE: &str = "access_token";
pub const REFRESH_COOKIE: &str = "refresh_token";
/// Records the login's remember-me choice so rotation can keep the refresh
/// cookie's lifetime. Holds no credential.
pub const REMEMBER_COOKIE: &str = "remember_me";

/// 1 day
pub const ACCESS_MAX_AGE_SECS: i64 = 60 * 60 * 24;
/// 7 days, only when the user asked to be remembered
pub const REFRESH_REMEMBER_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 7;

#[derive(Debug, Clone)]
pub struct CookieSettings {
    pub secure: bool,
    pub same_site: SameSite,
}

impl Default for CookieSettings {
    fn default() -> Self {
        Self {
            secure: false,
            same_site: SameSite::Lax,
        }
    }
}

impl CookieSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            secure: config.cookie_secure,
            ..Default::default()
        }
    }
}

/// Access and refresh tokens held as httpOnly cookies for one request.
///
/// Built from the incoming jar; mutations are collected in the jar and turned
/// into `Set-Cookie` headers when the handler returns [`TokenStore::into_jar`].
#[derive(Debug, Clone)]
pub struct TokenStore {
    jar: CookieJar,
    settings: CookieSettings,
}

impl TokenStore {
    pub fn new(jar: CookieJar, settings: CookieSettings) -> Self {
        Self { jar, settings }
    }

    pub fn read(&self) -> StoredTokens {
        StoredTokens {
            access: self.access_token(),
            refresh: self.refresh_token(),
        }
    }

    pub fn access_token(&self) -> Option<AccessToken> {
        self.value_of(ACCESS_COOKIE).map(AccessToken::new)
    }

    pub fn refresh_token(&self) -> Option<RefreshToken> {
        self.value_of(REFRESH_COOKIE).map(RefreshToken::new)
    }

    pub fn has_refresh_token(&self) -> bool {
        self.value_of(REFRESH_COOKIE).is_some()
    }

    /// Remember-me choice of the last full write. Sessions without the marker
    /// count as not remembered.
    pub fn remembered(&self) -> bool {
        self.value_of(REMEMBER_COOKIE).as_deref() == Some("1")
    }

    /// Store a freshly issued pair. `remember_me` decides whether the refresh
    /// cookie outlives the browser session.
    pub fn write(&mut self, pair: &CredentialPair, remember_me: bool) {
        self.write_access(&pair.access_token);

        let max_age = remember_me.then(|| Duration::seconds(REFRESH_REMEMBER_MAX_AGE_SECS));
        let cookie = self.cookie(REFRESH_COOKIE, pair.refresh_token.as_str(), max_age);
        self.add(cookie);

        let marker = if remember_me { "1" } else { "0" };
        let cookie = self.cookie(REMEMBER_COOKIE, marker, max_age);
        self.add(cookie);
    }

    pub fn write_access(&mut self, token: &AccessToken) {
        let cookie = self.cookie(
            ACCESS_COOKIE,
            token.as_str(),
            Some(Duration::seconds(ACCESS_MAX_AGE_SECS)),
        );
        self.add(cookie);
    }

    pub fn clear(&mut self) {
        for name in [ACCESS_COOKIE, REFRESH_COOKIE, REMEMBER_COOKIE] {
            let jar = std::mem::take(&mut self.jar);
            self.jar = jar.remove(Cookie::build(name).path("/"));
        }
    }

    pub fn into_jar(self) -> CookieJar {
        self.jar
    }

    fn value_of(&self, name: &str) -> Option<String> {
        self.jar
            .get(name)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty())
    }

    fn add(&mut self, cookie: Cookie<'static>) {
        let jar = std::mem::take(&mut self.jar);
        self.jar = jar.add(cookie);
    }

    fn cookie(&self, name: &'static str, value: &str, max_age: Option<Duration>) -> Cookie<'static> {
        let mut builder = Cookie::build((name, value.to_string()))
            .http_only(true)
            .secure(self.settings.secure)
            .same_site(self.settings.same_site)
            .path("/");

        if let Some(max_age) = max_age {
            builder = builder.max_age(max_age);
        }

        builder.build()
    }
}
