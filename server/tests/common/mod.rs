//! Common test utilities
//!
//! A scriptable store adapter double and helpers for driving the admission
//! endpoint in-process, without a coordination store.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use banhammer::config::Config;
use banhammer::{routes, AppState};
use banhammer_types::error::StoreResult;
use banhammer_types::StoreAdapter;

type ExistsFn = Box<dyn Fn(&str) -> StoreResult<bool> + Send + Sync>;
type UnitFn = Box<dyn Fn(&str) -> StoreResult<()> + Send + Sync>;
type CountFn = Box<dyn Fn(&str) -> StoreResult<usize> + Send + Sync>;

/// Store double: one overridable closure per contract operation, plus call
/// recorders for the mutating operations.
pub struct StoreMock {
	pub exists_fn: ExistsFn,
	pub ensure_parents_fn: UnitFn,
	pub create_counting_fn: UnitFn,
	pub create_ban_fn: UnitFn,
	pub count_children_fn: CountFn,
	/// `(path, ttl)` per `create_counting` call.
	pub counted: Mutex<Vec<(String, Duration)>>,
	/// `(path, ttl)` per `create_ban` call.
	pub banned: Mutex<Vec<(String, Duration)>>,
}

impl Default for StoreMock {
	fn default() -> Self {
		Self {
			exists_fn: Box::new(|_| Ok(false)),
			ensure_parents_fn: Box::new(|_| Ok(())),
			create_counting_fn: Box::new(|_| Ok(())),
			create_ban_fn: Box::new(|_| Ok(())),
			count_children_fn: Box::new(|_| Ok(0)),
			counted: Mutex::new(Vec::new()),
			banned: Mutex::new(Vec::new()),
		}
	}
}

impl std::fmt::Debug for StoreMock {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("StoreMock").finish()
	}
}

#[async_trait]
impl StoreAdapter for StoreMock {
	async fn exists(&self, path: &str) -> StoreResult<bool> {
		(self.exists_fn)(path)
	}

	async fn ensure_parents(&self, path: &str) -> StoreResult<()> {
		(self.ensure_parents_fn)(path)
	}

	async fn create_counting(&self, path: &str, ttl: Duration) -> StoreResult<()> {
		self.counted.lock().unwrap().push((path.to_string(), ttl));
		(self.create_counting_fn)(path)
	}

	async fn create_ban(&self, path: &str, ttl: Duration) -> StoreResult<()> {
		self.banned.lock().unwrap().push((path.to_string(), ttl));
		(self.create_ban_fn)(path)
	}

	async fn count_children(&self, path: &str) -> StoreResult<usize> {
		(self.count_children_fn)(path)
	}
}

pub fn test_config() -> Config {
	Config {
		trace: false,
		debug: false,
		port: 80,
		ban_time: Duration::from_secs(120),
		request_time: Duration::from_secs(60),
		request_limit: 100,
		store_hosts: vec!["test-zk01:2181".into(), "test-zk02:2181".into()],
		store_prefix: "/prefix".into(),
		request_node: "req".into(),
		ban_node: "ban".into(),
	}
}

pub fn router(store: Arc<StoreMock>) -> axum::Router {
	routes::init(Arc::new(AppState { opts: test_config(), store }))
}

/// Drive `GET /api` once with the given forwarding header value.
pub async fn request_status(router: axum::Router, forwarded_for: Option<&str>) -> StatusCode {
	let mut request = Request::builder().uri("/api");
	if let Some(addr) = forwarded_for {
		request = request.header("X-Forwarded-For", addr);
	}
	let request = request.body(Body::empty()).unwrap();
	router.oneshot(request).await.unwrap().status()
}

// vim: ts=4
