//! Process entry point
//!
//! Loads configuration from the environment, establishes the coordination
//! store session, and hands both to the server. Either step failing is a
//! fatal startup condition: the process exits before accepting any traffic.

use std::process::ExitCode;
use std::sync::Arc;

use banhammer::config::Config;
use banhammer_store_adapter_zookeeper::StoreAdapterZookeeper;

#[tokio::main]
async fn main() -> ExitCode {
	let config = match Config::from_env() {
		Ok(config) => config,
		Err(err) => {
			eprintln!("FATAL: {}", err);
			return ExitCode::FAILURE;
		}
	};

	let store = match StoreAdapterZookeeper::connect(&config.store_hosts).await {
		Ok(store) => store,
		Err(err) => {
			eprintln!("FATAL: cannot reach coordination store: {}", err);
			return ExitCode::FAILURE;
		}
	};

	if let Err(err) = banhammer::run(config, Arc::new(store)).await {
		eprintln!("FATAL: {}", err);
		return ExitCode::FAILURE;
	}
	ExitCode::SUCCESS
}

// vim: ts=4
