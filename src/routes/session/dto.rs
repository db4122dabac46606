use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Tokens a login flow just received from the backend.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreTokenRequest {
    #[schema(example = "eyJhbGciOiJIUzI1NiJ9...")]
    pub access_token: String,

    #[schema(example = "eyJhbGciOiJIUzI1NiJ9...")]
    pub refresh_token: String,

    /// Keep the refresh cookie for 7 days instead of the browser session
    #[serde(default)]
    #[schema(example = true)]
    pub remember_me: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshPresenceResponse {
    pub has_refresh_token: bool,
}
