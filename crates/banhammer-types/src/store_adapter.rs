//! Store adapter trait
//!
//! The minimal set of hierarchical-namespace operations the admission logic
//! needs, independent of any concrete coordination technology. The server
//! only ever holds an `Arc<dyn StoreAdapter>`, so a test double can stand in
//! for the real store.

use async_trait::async_trait;
use std::fmt::Debug;
use std::time::Duration;

use crate::error::StoreResult;

#[async_trait]
pub trait StoreAdapter: Debug + Send + Sync {
	/// Whether a node exists at `path`.
	async fn exists(&self, path: &str) -> StoreResult<bool>;

	/// Create `path` and all of its ancestors as permanent nodes, top-down.
	///
	/// Idempotent and safe to race: "already exists" and "insufficient
	/// permission" on any ancestor are absorbed, every other error is
	/// surfaced.
	async fn ensure_parents(&self, path: &str) -> StoreResult<()>;

	/// Create a counting entry below `path`'s parent with a store-assigned,
	/// globally unique ordinal suffix and the given time-to-live.
	///
	/// The store removes the entry when its TTL elapses; callers never
	/// delete it.
	async fn create_counting(&self, path: &str, ttl: Duration) -> StoreResult<()>;

	/// Create a ban marker at `path` with the given time-to-live.
	///
	/// An already existing marker counts as success: concurrent callers
	/// racing to ban the same group converge on one logical ban.
	async fn create_ban(&self, path: &str, ttl: Duration) -> StoreResult<()>;

	/// Number of live children below `path`.
	///
	/// Only entries still within their TTL window are reported; expired
	/// entries are removed by the store, not by the application.
	async fn count_children(&self, path: &str) -> StoreResult<usize>;
}

// vim: ts=4
