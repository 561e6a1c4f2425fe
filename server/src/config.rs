//! Environment-sourced configuration
//!
//! All variables carry the `BANHAMMER_` prefix and have documented defaults,
//! except the store endpoint list, which is required:
//!
//! | Variable | Default | |
//! |---|---|---|
//! | `BANHAMMER_TRACE` | `false` | trace-level logging |
//! | `BANHAMMER_DEBUG` | `false` | debug-level logging |
//! | `BANHAMMER_PORT` | `80` | listen port |
//! | `BANHAMMER_BAN_SECS` | `120` | ban marker time-to-live |
//! | `BANHAMMER_REQUEST_WINDOW_SECS` | `60` | counting entry time-to-live |
//! | `BANHAMMER_REQUEST_LIMIT` | `100` | live entries allowed per group |
//! | `BANHAMMER_STORE_HOSTS` | required | comma-separated store endpoints |
//! | `BANHAMMER_STORE_PREFIX` | `/limiter` | namespace path prefix |
//! | `BANHAMMER_REQUEST_NODE` | `req` | counting-node name |
//! | `BANHAMMER_BAN_NODE` | `ban` | ban-node name |
//!
//! A missing required variable or an unparsable value is reported as
//! [`Error::Config`] to the process entry point; nothing panics in here.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{BhResult, Error};

const ENV_PREFIX: &str = "BANHAMMER_";

#[derive(Debug, Clone)]
pub struct Config {
	pub trace: bool,
	pub debug: bool,
	pub port: u16,
	/// Ban marker time-to-live.
	pub ban_time: Duration,
	/// Counting entry time-to-live, i.e. the sliding request window.
	pub request_time: Duration,
	/// Strict upper bound: the (limit+1)-th live entry triggers a ban.
	pub request_limit: usize,
	pub store_hosts: Vec<String>,
	pub store_prefix: Box<str>,
	pub request_node: Box<str>,
	pub ban_node: Box<str>,
}

impl Config {
	pub fn from_env() -> BhResult<Self> {
		let hosts = var("STORE_HOSTS")
			.ok_or_else(|| Error::Config("BANHAMMER_STORE_HOSTS is required".into()))?;
		let store_hosts = parse_list(&hosts);
		if store_hosts.is_empty() {
			return Err(Error::Config("BANHAMMER_STORE_HOSTS is empty".into()));
		}

		Ok(Self {
			trace: parse_flag(var("TRACE").as_deref()),
			debug: parse_flag(var("DEBUG").as_deref()),
			port: parse_var("PORT", 80)?,
			ban_time: Duration::from_secs(parse_var("BAN_SECS", 120)?),
			request_time: Duration::from_secs(parse_var("REQUEST_WINDOW_SECS", 60)?),
			request_limit: parse_var("REQUEST_LIMIT", 100)?,
			store_hosts,
			store_prefix: var("STORE_PREFIX").unwrap_or_else(|| "/limiter".into()).into(),
			request_node: var("REQUEST_NODE").unwrap_or_else(|| "req".into()).into(),
			ban_node: var("BAN_NODE").unwrap_or_else(|| "ban".into()).into(),
		})
	}
}

fn var(name: &str) -> Option<String> {
	env::var(format!("{}{}", ENV_PREFIX, name)).ok()
}

fn parse_var<T: FromStr>(name: &str, default: T) -> BhResult<T> {
	match var(name) {
		None => Ok(default),
		Some(raw) => raw.trim().parse().map_err(|_| {
			Error::Config(format!("invalid value for {}{}: {}", ENV_PREFIX, name, raw).into())
		}),
	}
}

fn parse_flag(value: Option<&str>) -> bool {
	matches!(value.map(str::trim), Some("1" | "true" | "yes"))
}

fn parse_list(value: &str) -> Vec<String> {
	value.split(',').map(str::trim).filter(|host| !host.is_empty()).map(String::from).collect()
}


// vim: ts=4
