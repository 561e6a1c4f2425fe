pub use crate::error::{StoreError, StoreResult};
pub use crate::store_adapter::StoreAdapter;

pub use tracing::{debug, debug_span, error, error_span, info, info_span, trace, warn, warn_span};

// vim: ts=4
