use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::route::health_check,
        crate::routes::auth::route::refresh_session,
        crate::routes::auth::route::logout_session,
        crate::routes::session::route::store_tokens,
        crate::routes::session::route::current_token,
        crate::routes::session::route::check_refresh_token,
        crate::routes::profile::route::get_me,
    ),
    components(
        schemas(
            crate::routes::auth::dto::AccessTokenResponse,
            crate::routes::auth::dto::MessageResponse,
            crate::routes::session::dto::StoreTokenRequest,
            crate::routes::session::dto::RefreshPresenceResponse,
            crate::session::model::UserProfile,
            crate::errors::ErrorBody,
        ),
    ),
    tags(
        (name = "Session", description = "Cookie-held access/refresh token handling"),
        (name = "Profile", description = "Current user lookup"),
        (name = "health", description = "Health check endpoints")
    ),
)]
pub struct ApiDoc;
