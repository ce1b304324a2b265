//! # Domain Models
//!
//! Plain configuration and registry types shared by every crate of the backend.
//! No I/O and no networking here, only data and tiny helpers.

pub mod config;
pub mod constants;
pub mod registry;
