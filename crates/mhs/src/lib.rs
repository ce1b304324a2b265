//! Facade crate for the Mergington High School backend.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Business logic lives in the feature crates; this one only composes them.

pub use mhs_domain as domain;
use mhs_domain::config::ApiConfig;
use mhs_domain::registry::InitializedSlice;
pub use mhs_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use mhs_activities::router::activities_router;
        pub use mhs_kernel::server::router::system_router;
    }
}

/// Feature slices composed by [`init`].
pub mod features {
    pub use mhs_activities as activities;
}

/// Initialize every feature slice.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(config: &ApiConfig) -> Result<Vec<InitializedSlice>, Box<dyn std::error::Error>> {
    let slices = vec![features::activities::init(config)?];

    Ok(slices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_registers_activities_slice() {
        let slices = init(&ApiConfig::default()).expect("slices");
        assert_eq!(slices.len(), 1);
        assert!(slices[0].downcast_ref::<features::activities::Activities>().is_some());
    }
}
