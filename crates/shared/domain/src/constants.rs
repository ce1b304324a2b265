/// `OpenAPI` tag for infrastructure endpoints.
pub const SYSTEM_TAG: &str = "System";
/// `OpenAPI` tag for the activity roster endpoints.
pub const ACTIVITIES_TAG: &str = "Activities";

/// Environment variable prefix for configuration overrides (`MHS__SERVER__PORT`).
pub const ENV_PREFIX: &str = "MHS";
/// Mount point of the static front-end.
pub const STATIC_MOUNT: &str = "/static";
/// Page the root path redirects to.
pub const INDEX_PAGE: &str = "/static/index.html";
