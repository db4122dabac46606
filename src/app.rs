use crate::api_docs::ApiDoc;
use crate::middleware;
use crate::routes;
use crate::state::AppState;
use axum::Router;
use http::header;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::ServiceBuilderExt;
use tower_http::request_id::MakeRequestUuid;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn create_app(state: AppState, swagger_enabled: bool) -> Router {
    let router = Router::new()
        .merge(routes::health::create_route())
        .merge(routes::auth::create_route())
        .merge(routes::session::create_route())
        .merge(routes::profile::create_route())
        .with_state(state.clone());
    let mut router = middleware::protect(router, state);

    // Add Swagger UI
    if swagger_enabled {
        let swagger_ui =
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());
        router = router.merge(swagger_ui);
    }

    // Tokens travel in these headers, keep them out of the trace output
    let sensitive_request_headers: Arc<[_]> = vec![header::AUTHORIZATION, header::COOKIE].into();
    let sensitive_response_headers: Arc<[_]> = vec![header::SET_COOKIE].into();

    let layers = ServiceBuilder::new()
        .set_x_request_id(MakeRequestUuid)
        .sensitive_request_headers(sensitive_request_headers)
        .sensitive_response_headers(sensitive_response_headers)
        .trace_for_http()
        .propagate_x_request_id()
        .compression();

    router.layer(layers)
}
