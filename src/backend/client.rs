use std::time::Duration;

use async_trait::async_trait;
use http::StatusCode;
use reqwest::{Client, Response};

use super::dto::{LogoutRequest, ProfileReply, RefreshReply, RefreshRequest, VerifyRequest};
use super::{AuthBackend, BackendError, IssuedTokens};
use crate::config::Config;
use crate::session::model::{AccessToken, RefreshToken, UserProfile};

#[derive(Clone, Debug)]
pub struct HttpAuthBackend {
    http: Client,
    base_url: String,
}

impl HttpAuthBackend {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build backend http client: {}", e))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(
            config.api_url.clone(),
            Duration::from_secs(config.backend_timeout_secs),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Turn a non-2xx reply into the matching error, keeping the body as context.
    async fn ensure_success(response: Response) -> Result<Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            return Err(BackendError::Unauthorized);
        }

        let message = response.text().await.unwrap_or_default();
        Err(BackendError::Rejected { status, message })
    }
}

#[async_trait]
impl AuthBackend for HttpAuthBackend {
    async fn refresh(&self, refresh_token: &RefreshToken) -> Result<IssuedTokens, BackendError> {
        let response = self
            .http
            .post(self.url("/auth/refresh"))
            .json(&RefreshRequest {
                refresh_token: refresh_token.as_str(),
            })
            .send()
            .await?;

        // A 401 from the refresh endpoint is a refusal of the refresh token,
        // not of a bearer header.
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BackendError::Rejected { status, message });
        }

        let grant = response.json::<RefreshReply>().await?.into_grant();

        let access_token = grant
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                BackendError::InvalidPayload("refresh reply has no accessToken".to_string())
            })?;

        Ok(IssuedTokens {
            access_token: AccessToken::new(access_token),
            refresh_token: grant
                .refresh_token
                .filter(|token| !token.is_empty())
                .map(RefreshToken::new),
        })
    }

    async fn verify(&self, access_token: &AccessToken) -> Result<bool, BackendError> {
        let response = self
            .http
            .post(self.url("/auth/verify"))
            .json(&VerifyRequest {
                token: access_token.as_str(),
            })
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json::<bool>().await?)
    }

    async fn logout(
        &self,
        refresh_token: &RefreshToken,
        access_token: Option<&AccessToken>,
    ) -> Result<(), BackendError> {
        let response = self
            .http
            .post(self.url("/auth/logout"))
            .json(&LogoutRequest {
                refresh_token: refresh_token.as_str(),
                access_token: access_token.map(AccessToken::as_str),
            })
            .send()
            .await?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn current_user(
        &self,
        access_token: &AccessToken,
    ) -> Result<Option<UserProfile>, BackendError> {
        let response = self
            .http
            .get(self.url("/user/getme"))
            .bearer_auth(access_token.as_str())
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let reply = response.json::<ProfileReply>().await?;

        Ok(reply.result)
    }
}
