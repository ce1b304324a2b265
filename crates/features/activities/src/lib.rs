//! # Activities
//!
//! Extracurricular activity rosters of Mergington High School.
//!
//! The [`ActivityRegistry`] keeps every activity and its participant list in process
//! memory. Students are identified only by their email; signing up appends to the
//! roster, unregistering removes the entry. With the `server` feature the slice also
//! exposes the `/activities` HTTP endpoints.
//!
//! ```rust
//! use mhs_activities::{Activity, ActivityRegistry, CapacityPolicy};
//!
//! let registry = ActivityRegistry::new(
//!     CapacityPolicy::Advisory,
//!     [("Chess Club", Activity::new("Learn chess", "Fridays", 12))],
//! )?;
//! registry.sign_up("Chess Club", "emma@mergington.edu")?;
//! assert_eq!(registry.list()["Chess Club"].participants, ["emma@mergington.edu"]);
//! # Ok::<(), mhs_activities::ActivityError>(())
//! ```

mod error;
#[cfg(feature = "server")]
mod handlers;
mod model;
mod registry;
#[cfg(feature = "server")]
pub mod router;
pub mod seed;

pub use error::{
    ACTIVITY_FULL, ACTIVITY_NOT_FOUND, ALREADY_SIGNED_UP, ActivityError, ActivityErrorExt,
    NOT_SIGNED_UP,
};
pub use model::{Activity, EmailQuery, MessageResponse};
pub use registry::{ActivityRegistry, CapacityPolicy};

use mhs_kernel::domain::config::ApiConfig;
use mhs_kernel::domain::registry::InitializedSlice;

/// Activities feature state.
#[mhs_derive::mhs_slice]
pub struct Activities {
    pub registry: ActivityRegistry,
}

/// Builds the registry from the built-in seed and wraps it into a slice.
///
/// # Errors
/// Returns [`ActivityError::Internal`] if the seed data is invalid.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, ActivityError> {
    let policy = CapacityPolicy::from(&config.activities);
    let registry = ActivityRegistry::new(policy, seed::default_activities())?;

    tracing::info!(activities = registry.len(), policy = ?policy, "Activities slice initialized");

    Ok(InitializedSlice::new(Activities::new(ActivitiesInner { registry })))
}
