//! Kernel utilities shared across feature slices.
//!
//! * [`config`] loads layered configuration (file + `MHS__` environment overrides).
//! * `server` (feature `server`) holds the API state, the JSON error type and the
//!   system endpoints.
pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use mhs_domain as domain;
