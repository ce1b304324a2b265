use super::handlers;
use mhs_kernel::server::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// `/activities` endpoints.
pub fn activities_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::list_activities))
        .routes(routes!(handlers::sign_up))
        .routes(routes!(handlers::unregister))
}
