//! Frontdesk - helpers for appointment-driven applications
//!
//! This library collects the small, stateless helpers that appointment and
//! booking front-ends need over and over: date arithmetic and human-readable
//! date formatting, set operations and snapshot diffing over loosely-shaped
//! records, display-value formatting with consistent placeholders, a
//! trailing-call debouncer, and thin wrappers around host-provided media
//! capabilities.
//!
//! # Modules
//!
//! The library is organized into one module per concern:
//!
//! * [`collections`] - Set operations, ordering, and projection over records
//! * [`datetime`] - Date arithmetic, interval text, and time-of-day conversion
//! * [`debounce`] - Trailing-call debouncing as a cancellable scheduled task
//! * [`diff`] - Detailed added/removed/updated diff of two record snapshots
//! * [`display`] - Display-value and numeric formatting with placeholders
//! * [`logging`] - Logger installation for hosts that want helper diagnostics
//! * [`media`] - Injected host capabilities for devices and permissions
//!
//! Records are plain [`serde_json::Value`]s throughout, so the helpers work
//! with whatever shape the embedding application already serializes.

/// Set operations, uniqueness, ordering, and projection over record slices
pub mod collections;

/// Date arithmetic, interval rendering, and time-of-day string conversion
pub mod datetime;

/// Trailing-call debouncer built on a cancellable tokio task
pub mod debounce;

/// Detailed diff of two snapshots of the same logical collection
pub mod diff;

/// Display-value formatting and forgiving numeric parsing
pub mod display;

/// Log facade installation for applications embedding these helpers
pub mod logging;

/// Host-provided media device and permission capabilities
pub mod media;

// Re-export the main entry points for convenient access
pub use debounce::Debouncer;
pub use diff::{detailed_diff, DetailedDiff, UpdatedEntry};
pub use media::{
    DeviceInfo, DeviceKind, HostError, MediaDevice, MediaHost, PermissionResource,
    PermissionState,
};
