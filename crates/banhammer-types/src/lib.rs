//! Shared types and the store adapter trait for the Banhammer service.
//!
//! This crate contains the foundational types that are shared between the
//! server crate and all store adapter implementations. Extracting these into
//! a separate crate allows adapter crates to compile in parallel with the
//! server and keeps the admission logic free of any concrete coordination
//! technology.

pub mod error;
pub mod path;
pub mod prelude;
pub mod store_adapter;

pub use error::StoreError;
pub use store_adapter::StoreAdapter;

// vim: ts=4
