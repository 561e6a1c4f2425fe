pub use crate::core::app::{App, AppState};
pub use crate::error::{BhResult, Error};

pub use banhammer_types::{StoreAdapter, StoreError};
pub use tracing::{debug, debug_span, error, error_span, info, info_span, trace, warn, warn_span};

// vim: ts=4
