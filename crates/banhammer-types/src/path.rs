//! Node path helpers
//!
//! Namespace paths are `/`-separated, absolute, and never end with a
//! separator. Adapters use [`ancestors`] to build a path top-down when the
//! store has no recursive create.

use crate::error::{StoreError, StoreResult};

/// Join a parent path and a child node name.
pub fn join(parent: &str, child: &str) -> Box<str> {
	format!("{}/{}", parent, child).into()
}

/// Every prefix of `path`, shortest first.
///
/// `/limiter/1.2.0.0/queue` yields `/limiter`, `/limiter/1.2.0.0`,
/// `/limiter/1.2.0.0/queue`. Rejects relative paths and empty components.
pub fn ancestors(path: &str) -> StoreResult<Vec<Box<str>>> {
	let Some(rest) = path.strip_prefix('/') else {
		return Err(StoreError::InvalidPath(path.into()));
	};

	let mut acc = String::with_capacity(path.len());
	let mut out = Vec::new();
	for part in rest.split('/') {
		if part.is_empty() {
			return Err(StoreError::InvalidPath(path.into()));
		}
		acc.push('/');
		acc.push_str(part);
		out.push(acc.as_str().into());
	}
	Ok(out)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_join() {
		assert_eq!(&*join("/limiter/1.2.0.0", "queue"), "/limiter/1.2.0.0/queue");
	}

	#[test]
	fn test_ancestors_order() {
		let paths = ancestors("/limiter/1.2.0.0/queue").unwrap();
		assert_eq!(
			paths,
			vec![
				Box::from("/limiter"),
				Box::from("/limiter/1.2.0.0"),
				Box::from("/limiter/1.2.0.0/queue"),
			]
		);
	}

	#[test]
	fn test_ancestors_single_component() {
		let paths = ancestors("/limiter").unwrap();
		assert_eq!(paths, vec![Box::from("/limiter")]);
	}

	#[test]
	fn test_ancestors_relative_path() {
		let err = ancestors("limiter/queue").unwrap_err();
		assert!(matches!(err, StoreError::InvalidPath(_)));
	}

	#[test]
	fn test_ancestors_empty_component() {
		let err = ancestors("/limiter//queue").unwrap_err();
		assert!(matches!(err, StoreError::InvalidPath(_)));
	}
}

// vim: ts=4
