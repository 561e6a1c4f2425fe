//! ZooKeeper store adapter
//!
//! Binds the [`StoreAdapter`] contract onto a ZooKeeper ensemble. Counting
//! entries become persistent-sequential TTL nodes, ban markers persistent TTL
//! nodes; the ensemble expires both on its own. All nodes carry open ACLs and
//! empty payloads, the existence of a node is the only signal read back.

use async_trait::async_trait;
use std::time::Duration;
use zookeeper_client as zk;

use banhammer_types::path;
use banhammer_types::prelude::*;

const SESSION_TIMEOUT: Duration = Duration::from_secs(10);

pub struct StoreAdapterZookeeper {
	client: zk::Client,
}

impl std::fmt::Debug for StoreAdapterZookeeper {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("StoreAdapterZookeeper").finish()
	}
}

impl StoreAdapterZookeeper {
	/// Establish a session with the ensemble.
	///
	/// Called once at process startup. A connection failure here is a fatal
	/// startup condition for the caller, not a per-request error.
	pub async fn connect(hosts: &[String]) -> StoreResult<Self> {
		let cluster = hosts.join(",");
		let client = zk::Client::connector()
			.session_timeout(SESSION_TIMEOUT)
			.connect(&cluster)
			.await
			.map_err(map_zk_err)?;
		debug!(cluster = %cluster, "store session established");
		Ok(Self { client })
	}
}

#[async_trait]
impl StoreAdapter for StoreAdapterZookeeper {
	async fn exists(&self, path: &str) -> StoreResult<bool> {
		let stat = self.client.check_stat(path).await.map_err(map_zk_err)?;
		Ok(stat.is_some())
	}

	async fn ensure_parents(&self, path: &str) -> StoreResult<()> {
		let options = zk::CreateMode::Persistent.with_acls(zk::Acls::anyone_all());
		for ancestor in path::ancestors(path)? {
			match self.client.create(&ancestor, &[], &options).await {
				Ok(_) | Err(zk::Error::NodeExists | zk::Error::NoAuth) => {}
				Err(err) => return Err(map_zk_err(err)),
			}
		}
		Ok(())
	}

	async fn create_counting(&self, path: &str, ttl: Duration) -> StoreResult<()> {
		let options = zk::CreateMode::PersistentSequential
			.with_acls(zk::Acls::anyone_all())
			.with_ttl(ttl);
		self.client.create(path, &[], &options).await.map_err(map_zk_err)?;
		Ok(())
	}

	async fn create_ban(&self, path: &str, ttl: Duration) -> StoreResult<()> {
		let options =
			zk::CreateMode::Persistent.with_acls(zk::Acls::anyone_all()).with_ttl(ttl);
		match self.client.create(path, &[], &options).await {
			// A concurrent request already placed the marker, the ban is in force.
			Ok(_) | Err(zk::Error::NodeExists) => Ok(()),
			Err(err) => Err(map_zk_err(err)),
		}
	}

	async fn count_children(&self, path: &str) -> StoreResult<usize> {
		let children = self.client.list_children(path).await.map_err(map_zk_err)?;
		Ok(children.len())
	}
}

/// Collapse ZooKeeper error codes into the generic store categories.
fn map_zk_err(err: zk::Error) -> StoreError {
	match err {
		zk::Error::NodeExists => StoreError::NodeExists,
		zk::Error::NoNode => StoreError::NoNode,
		zk::Error::NoAuth => StoreError::NoAuth,
		other => StoreError::Unavailable(other.to_string().into()),
	}
}


// vim: ts=4
