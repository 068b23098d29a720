//! Debug logging for scene rebuilds and rejected edits.
//!
//! Built with the `tracing` feature, `debug!` and `warn!` are the `tracing`
//! macros and need a subscriber installed by the host. Without the feature
//! they compile to nothing, which keeps the browser build free of logging.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
