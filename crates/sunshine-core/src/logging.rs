//! Logging facilities for Sunshine.
//!
//! Sunshine uses the `tracing` crate for instrumentation. Library code only
//! emits events; to see them, install a subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("sunshine=debug")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Every event carries one of the [`targets`] so subsystems can be filtered
//! independently.

/// Span names used throughout Sunshine for tracing.
pub mod span_names {
    /// Selection reconciliation after a data change.
    pub const RECONCILE: &str = "sunshine::reconcile";
    /// Restoring selection state from a saved blob.
    pub const RESTORE: &str = "sunshine::restore";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core primitives target.
    pub const CORE: &str = "sunshine_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "sunshine_core::signal";
    /// Selection tracking target.
    pub const SELECTION: &str = "sunshine::model::selection";
    /// List adapter target.
    pub const ADAPTER: &str = "sunshine::model::adapter";
    /// Display settings target.
    pub const SETTINGS: &str = "sunshine::settings";
    /// Forecast presentation helpers target.
    pub const FORECAST: &str = "sunshine::forecast";
    /// Performance spans target.
    pub const PERF: &str = "sunshine::perf";
}

/// A guard that keeps a performance span entered until dropped.
///
/// ```
/// use sunshine_core::logging::{PerfSpan, span_names};
///
/// fn rebuild() {
///     let _span = PerfSpan::new(span_names::RECONCILE);
///     // ... work measured by the subscriber ...
/// }
/// ```
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}

impl std::fmt::Debug for PerfSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerfSpan").finish_non_exhaustive()
    }
}
