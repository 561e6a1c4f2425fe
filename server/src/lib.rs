//! Banhammer is a stateless admission-control front for an API.
//!
//! Every service instance decides, per inbound request, whether to allow or
//! reject traffic from a client subnet. A shared coordination store (a
//! hierarchical TTL namespace, e.g. ZooKeeper) is the single source of truth
//! for request counters and bans, so any number of instances enforce one
//! consistent limit without talking to each other:
//!
//! - client addresses are masked to a coarse group (IPv4 /16, IPv6 /64)
//! - each admitted request leaves a self-expiring entry under the group's
//!   `queue` node; the live child count is a sliding window of recent volume
//! - a group over the limit gets a self-expiring ban marker whose mere
//!   existence denies all of its requests until it lapses
//!
//! The store is reached through the `StoreAdapter` trait from
//! `banhammer-types`; concrete bindings live in adapter crates.

#![forbid(unsafe_code)]

pub mod config;
pub mod core;
pub mod error;
pub mod limiter;
pub mod prelude;
pub mod routes;

pub use crate::core::app::{run, App, AppState};

// vim: ts=4
