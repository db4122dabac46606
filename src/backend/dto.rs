use serde::{Deserialize, Serialize};

use crate::session::model::UserProfile;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshGrant {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

/// `/auth/refresh` answers either with the grant itself or with the grant
/// wrapped in the standard envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RefreshReply {
    Enveloped { result: RefreshGrant },
    Bare(RefreshGrant),
}

impl RefreshReply {
    pub fn into_grant(self) -> RefreshGrant {
        match self {
            RefreshReply::Enveloped { result } => result,
            RefreshReply::Bare(grant) => grant,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VerifyRequest<'a> {
    pub token: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest<'a> {
    pub refresh_token: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<&'a str>,
}

/// Standard backend envelope, `{status, code, message, result}`.
#[derive(Debug, Deserialize)]
pub struct BaseJsonResponse<T> {
    pub status: Option<serde_json::Value>,
    pub code: Option<serde_json::Value>,
    pub message: Option<String>,
    pub result: Option<T>,
}

pub type ProfileReply = BaseJsonResponse<UserProfile>;
