#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every crate of the activities backend.
//!
//! * [`mhs_error`] turns an enum into a context-aware error type.
//! * [`mhs_slice`] wraps feature state into a cheaply clonable slice handle.
//! * [`api_model`] and [`api_handler`] keep DTOs and Axum handlers consistent with the
//!   `OpenAPI` documentation.
//! * [`main`] boots the async runtime with one of the predefined profiles.
//!
//! Examples below are `ignore`d because they need the consuming crates in scope.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Replaces `async fn main` with a synchronous entry point running on a profiled runtime.
///
/// # Arguments
///
/// * `high_performance` - server profile with larger stacks and long-lived workers.
/// * `memory_efficient` - half the workers and smaller stacks.
/// * `default` (or no argument) - auto-detected workers, default stack size.
///
/// # Examples
///
/// ```rust,ignore
/// #[mhs_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Declares a request or response model.
///
/// Adds `Debug`, `Serialize` and `Deserialize` when they are not derived yet, and
/// `utoipa::ToSchema` when the consuming crate enables its `server` feature.
/// Field names are renamed to `camelCase` and unknown fields are rejected unless told otherwise.
///
/// # Arguments
///
/// * `rename_all = "..."` - overrides the serde rename policy.
/// * `deny_unknown_fields = false` - accepts unknown fields.
///
/// # Example
///
/// ```rust,ignore
/// #[api_model(rename_all = "snake_case")]
/// pub struct Activity {
///     pub description: String,
///     pub max_participants: u32,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Registers an Axum handler with `utoipa::path` when the `server` feature is enabled.
///
/// Arguments are forwarded untouched to `utoipa::path` (`get`, `path = "..."`, `params(...)`,
/// `responses(...)`, `tag = "..."`).
///
/// # Example
///
/// ```rust,ignore
/// #[api_handler(get, path = "/health", responses((status = OK, body = HealthResponse)))]
/// pub async fn health_handler() -> Json<HealthResponse> { .. }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Turns an enum of named-field variants into a crate error type.
///
/// Generated items:
///
/// * `#[derive(Debug, thiserror::Error)]` unless already present.
/// * `<Name>Ext` trait with `.context(..)` for `Result<T, Name>` and, for each variant holding
///   a `source`, for `Result<T, Source>`.
/// * `From<Source>` for variants holding a `source` field.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }` variant exists.
/// * A private `format_context` helper usable inside `#[error(...)]` strings.
///
/// Variants with a `source` must carry `context: Option<Cow<'static, str>>`.
/// Tuple and unit variants are rejected.
///
/// # Example
///
/// ```rust,ignore
/// #[mhs_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn mhs_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Declares a feature slice.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` is a `Clone` handle over
/// `Arc<<Name>Inner>` that derefs to the inner state and implements `FeatureSlice`.
///
/// # Example
/// ```rust,ignore
/// #[mhs_derive::mhs_slice]
/// pub struct Activities {
///     pub registry: ActivityRegistry,
/// }
///
/// let slice = Activities::new(ActivitiesInner { registry });
/// ```
#[proc_macro_attribute]
pub fn mhs_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
