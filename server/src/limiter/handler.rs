//! Admission decision endpoint
//!
//! One execution per request, no state retained between requests. Counting
//! correctness under concurrency is delegated entirely to the store: entries
//! get store-assigned unique ordinals, and duplicate ban markers converge on
//! one logical ban. Nothing is retried and nothing is rolled back; a counting
//! entry recorded on a path that later fails simply expires on its own.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};

use crate::limiter::mask;
use crate::limiter::paths::GroupPaths;
use crate::prelude::*;

/// Trust-boundary header carrying the original client address.
pub const FORWARDED_HEADER: &str = "x-forwarded-for";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
	Allow,
	Deny,
}

/// `GET /api`: allow (200), deny (403), or internal failure (500).
///
/// No response body in any case.
pub async fn get_api(State(app): State<App>, headers: HeaderMap) -> BhResult<StatusCode> {
	let raw_addr = headers
		.get(FORWARDED_HEADER)
		.and_then(|value| value.to_str().ok())
		.and_then(|value| value.split(',').next())
		.unwrap_or_default()
		.trim();

	match decide(&app, raw_addr).await? {
		Admission::Allow => Ok(StatusCode::OK),
		Admission::Deny => Ok(StatusCode::FORBIDDEN),
	}
}

/// Run the admission state machine for one request.
pub async fn decide(app: &AppState, raw_addr: &str) -> BhResult<Admission> {
	// An unparsable address fails open: bad client data must not block
	// service availability.
	let group = match mask::group_key(raw_addr) {
		Ok(group) => group,
		Err(Error::Identity) => {
			debug!(addr = raw_addr, "unparsable client address, allowing");
			return Ok(Admission::Allow);
		}
		Err(err) => return Err(err),
	};

	let paths = GroupPaths::new(&app.opts, &group);
	trace!(addr = raw_addr, group = %group, container = %paths.container, "admission check");

	if let Err(err) = app.store.ensure_parents(&paths.queue).await {
		return Err(fail(raw_addr, &group, Error::Namespace(paths.queue, err)));
	}

	match app.store.exists(&paths.ban).await {
		Err(err) => return Err(fail(raw_addr, &group, Error::ExistenceCheck(paths.ban, err))),
		Ok(true) => {
			// No counting entry is recorded for a banned request.
			debug!(addr = raw_addr, group = %group, "ban in force");
			return Ok(Admission::Deny);
		}
		Ok(false) => {}
	}

	if let Err(err) = app.store.create_counting(&paths.counting, app.opts.request_time).await {
		return Err(fail(raw_addr, &group, Error::CountingCreation(paths.counting, err)));
	}

	// Includes the entry recorded above.
	let count = match app.store.count_children(&paths.queue).await {
		Ok(count) => count,
		Err(err) => return Err(fail(raw_addr, &group, Error::Count(paths.queue, err))),
	};

	if count > app.opts.request_limit {
		match app.store.create_ban(&paths.ban, app.opts.ban_time).await {
			// A concurrent sibling request tripping the threshold first is
			// still a successful ban.
			Ok(()) | Err(StoreError::NodeExists) => {}
			Err(err) => return Err(fail(raw_addr, &group, Error::BanCreation(paths.ban, err))),
		}
		debug!(addr = raw_addr, group = %group, count, "over limit, group banned");
		return Ok(Admission::Deny);
	}

	Ok(Admission::Allow)
}

fn fail(addr: &str, group: &str, err: Error) -> Error {
	error!(addr, group, "{}", err);
	err
}

// vim: ts=4
