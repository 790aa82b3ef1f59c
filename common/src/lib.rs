//! # Lotkeeper Common
//!
//! Types shared by every lotkeeper crate: the parking domain models, the
//! error taxonomy, run configuration and the reporting port that the CLI
//! implements.

pub mod config;
pub mod error;
pub mod lot;
pub mod report;

#[doc(hidden)]
pub use tracing;

/// Logs a successful outcome. Rendered with the `[+]` symbol by the CLI formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "lotkeeper::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}
