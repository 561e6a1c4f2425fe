use axum::{routing::get, Router};

use crate::limiter;
use crate::App;

pub fn init(state: App) -> Router {
	Router::new().route("/api", get(limiter::handler::get_api)).with_state(state)
}

// vim: ts=4
