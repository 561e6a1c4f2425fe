//! App state and startup

use std::sync::Arc;
use std::time::Duration;

use tower_http::catch_panic::CatchPanicLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::BhResult;
use crate::routes;
use banhammer_types::StoreAdapter;
use tracing::info;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Per-request deadline around the whole admission flow; a store call that
/// blocks past it is abandoned by the HTTP layer and completes unobserved.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct AppState {
	pub opts: Config,
	/// The only shared mutable state in the process; must tolerate use by
	/// all in-flight requests concurrently.
	pub store: Arc<dyn StoreAdapter>,
}

pub type App = Arc<AppState>;

/// Run the service until the listener fails.
///
/// The store session is established by the caller before this point, so a
/// coordination-store outage at startup never lets the service accept
/// traffic.
pub async fn run(opts: Config, store: Arc<dyn StoreAdapter>) -> BhResult<()> {
	init_tracing(&opts);
	info!("banhammer v{}", VERSION);

	let listen = format!("0.0.0.0:{}", opts.port);
	let app: App = Arc::new(AppState { opts, store });

	let router = routes::init(app)
		.layer(TraceLayer::new_for_http())
		.layer(TimeoutLayer::new(REQUEST_TIMEOUT))
		.layer(CatchPanicLayer::new());

	let listener = tokio::net::TcpListener::bind(&listen).await?;
	info!("Listening on {}", listen);
	axum::serve(listener, router).await?;

	Ok(())
}

fn init_tracing(opts: &Config) {
	let filter = if opts.trace {
		tracing_subscriber::EnvFilter::new("trace")
	} else if opts.debug {
		tracing_subscriber::EnvFilter::new("debug")
	} else {
		tracing_subscriber::EnvFilter::from_default_env()
	};
	tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

// vim: ts=4
