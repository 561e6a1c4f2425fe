//! Error taxonomy of the admission flow
//!
//! One variant per decision step that can fail against the store. Variants
//! carry the node path the step was operating on; the raw address and masked
//! group are added as log fields at the failure site.

use axum::{http::StatusCode, response::IntoResponse};

use banhammer_types::StoreError;

pub type BhResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// The raw client address did not parse. Fails open, never reaches the
	/// HTTP boundary.
	Identity,
	/// Ancestor path construction failed.
	Namespace(Box<str>, StoreError),
	/// The ban existence check failed.
	ExistenceCheck(Box<str>, StoreError),
	/// Recording the counting entry failed.
	CountingCreation(Box<str>, StoreError),
	/// Counting live queue entries failed.
	Count(Box<str>, StoreError),
	/// Placing the ban marker failed.
	BanCreation(Box<str>, StoreError),
	/// Invalid or missing configuration at startup.
	Config(Box<str>),

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::Identity => write!(f, "invalid client address"),
			Error::Namespace(path, err) => {
				write!(f, "failed to create parent nodes for {}: {}", path, err)
			}
			Error::ExistenceCheck(path, err) => {
				write!(f, "failed to check ban node {}: {}", path, err)
			}
			Error::CountingCreation(path, err) => {
				write!(f, "failed to create counting node {}: {}", path, err)
			}
			Error::Count(path, err) => {
				write!(f, "failed to count children of {}: {}", path, err)
			}
			Error::BanCreation(path, err) => {
				write!(f, "failed to create ban node {}: {}", path, err)
			}
			Error::Config(msg) => write!(f, "configuration error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Namespace(_, err)
			| Error::ExistenceCheck(_, err)
			| Error::CountingCreation(_, err)
			| Error::Count(_, err)
			| Error::BanCreation(_, err) => Some(err),
			Error::Io(err) => Some(err),
			_ => None,
		}
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		// Denial outcomes are not errors; everything that reaches the HTTP
		// boundary as an error is an internal failure. No response body.
		StatusCode::INTERNAL_SERVER_ERROR.into_response()
	}
}

// vim: ts=4
