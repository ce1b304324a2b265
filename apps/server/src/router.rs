use axum::Router;
use axum::response::Redirect;
use axum::routing::get;
use mhs::domain::constants::{INDEX_PAGE, STATIC_MOUNT};
use mhs::kernel::prelude::ApiState;
use mhs::server::router::{activities_router, system_router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(info(title = "Mergington High School Activities API"))]
struct ApiDoc;

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    let static_dir = state.config.storage.static_dir.clone();

    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(system_router())
        .merge(activities_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    let scalar_routes = Scalar::with_url("/api", api_doc);

    Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PAGE) }))
        .nest_service(STATIC_MOUNT, ServeDir::new(static_dir))
        .merge(openapi_routes)
        .merge(scalar_routes)
}
