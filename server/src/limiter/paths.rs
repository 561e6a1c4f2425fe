//! Group namespace paths
//!
//! Every group owns a lazily created subtree below the configured prefix:
//!
//! ```text
//! <prefix>/<group>            container, permanent
//! <prefix>/<group>/queue      counting entries, one per admitted request
//! <prefix>/<group>/<ban>      at most one ban marker
//! ```

use banhammer_types::path;

use crate::config::Config;

/// Name of the child node holding the counting entries.
pub const QUEUE_NODE: &str = "queue";

/// Node paths for one client group's subtree.
#[derive(Debug)]
pub struct GroupPaths {
	pub container: Box<str>,
	pub queue: Box<str>,
	/// Counting entry prefix; the store appends the unique ordinal.
	pub counting: Box<str>,
	pub ban: Box<str>,
}

impl GroupPaths {
	pub fn new(opts: &Config, group: &str) -> Self {
		let container = path::join(&opts.store_prefix, group);
		let queue = path::join(&container, QUEUE_NODE);
		let counting = path::join(&queue, &opts.request_node);
		let ban = path::join(&container, &opts.ban_node);
		Self { container, queue, counting, ban }
	}
}


// vim: ts=4
