//! Error types for the gallery engine.
//!
//! A small hierarchical taxonomy using `thiserror`: [`EngineError`] is the
//! top-level type; domain failures ([`SettingsError`], [`HierarchyError`],
//! [`FetchError`]) convert into it via `From` so call sites compose with `?`.
//!
//! Recovery strategy mirrors the engine's degradation rules:
//!
//! - Settings that fail to parse are fatal for that gallery (it never
//!   initializes) but never panic.
//! - A malformed filter hierarchy is **non-fatal**: matching degrades to flat
//!   (no parent expansion) and a warning is logged.
//! - A failed batch fetch is **non-fatal**: the in-flight guard is cleared,
//!   no state is mutated, and the user may retry manually.

use thiserror::Error;

/// Top-level engine error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Gallery settings JSON could not be parsed or validated.
    #[error("Invalid gallery settings: {0}")]
    Settings(#[from] SettingsError),

    /// Filter hierarchy JSON was malformed or cyclic.
    #[error("Invalid filter hierarchy: {0}")]
    Hierarchy(#[from] HierarchyError),

    /// A pagination batch fetch failed.
    #[error("Batch fetch failed: {0}")]
    Fetch(#[from] FetchError),
}

/// Errors constructing [`crate::model::GallerySettings`] from host-supplied JSON.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings payload was not valid JSON for the expected schema.
    #[error("Malformed settings JSON: {message}")]
    MalformedJson {
        /// The serde parser error message.
        message: String,
    },

    /// A numeric setting was outside its valid range.
    ///
    /// `items_per_page` and per-breakpoint column counts must be >= 1; a
    /// zero would make page arithmetic and column division meaningless.
    #[error("Setting '{field}' out of range: {value}")]
    OutOfRange {
        /// The offending settings field.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },
}

/// Errors validating the filter hierarchy map.
///
/// Note that a *parse* failure of hierarchy JSON is deliberately not an
/// error at the call site: [`crate::model::FilterHierarchy::from_json`]
/// degrades to an empty hierarchy and logs, per the engine's no-crash rule.
/// These variants exist for hosts that validate eagerly and want the cause.
#[derive(Debug, Error)]
pub enum HierarchyError {
    /// The hierarchy payload was not a JSON object of slug -> [slugs].
    #[error("Malformed hierarchy JSON: {message}")]
    MalformedJson {
        /// The serde parser error message.
        message: String,
    },

    /// A filter was found among its own descendants.
    ///
    /// Parent chains must terminate; a cycle would make "effective members"
    /// ill-defined.
    #[error("Filter '{slug}' is its own descendant")]
    Cyclic {
        /// The slug participating in the cycle.
        slug: String,
    },
}

/// Errors from the external batch-fetch endpoint.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, refused connection, aborted request).
    #[error("Network error: {message}")]
    Network {
        /// Description supplied by the host's transport.
        message: String,
    },

    /// The endpoint answered with a non-2xx status.
    #[error("Server returned status {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
    },

    /// The response body was not the expected JSON shape.
    #[error("Malformed fetch response: {message}")]
    MalformedBody {
        /// The serde parser error message.
        message: String,
    },
}
