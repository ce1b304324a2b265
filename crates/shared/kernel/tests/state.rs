#![cfg(feature = "server")]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use mhs_kernel::domain::config::ApiConfig;
use mhs_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use mhs_kernel::server::router::system_router;
use mhs_kernel::server::{ApiState, ApiStateError, HealthResponse};
use std::any::Any;
use tower::ServiceExt;

#[derive(Debug)]
struct Roster(&'static str);

impl FeatureSlice for Roster {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
struct Unregistered;

impl FeatureSlice for Unregistered {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn build_requires_config() {
    let err = ApiState::builder().build().expect_err("config is mandatory");
    assert!(matches!(err, ApiStateError::Validation { .. }));
}

#[test]
fn registered_slices_are_retrievable_by_type() {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .register_slices([InitializedSlice::new(Roster("chess"))])
        .build()
        .expect("state builds");

    assert_eq!(state.get_slice::<Roster>().map(|r| r.0), Some("chess"));
    assert!(matches!(
        state.try_get_slice::<Unregistered>(),
        Err(ApiStateError::MissingSlice { .. })
    ));
}

#[tokio::test]
async fn health_endpoint_reports_up() {
    let (router, _api) = system_router::<()>().split_for_parts();

    let response = router
        .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let health: HealthResponse = serde_json::from_slice(&bytes).expect("health json");
    assert_eq!(health.status, "up");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}
