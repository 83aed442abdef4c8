//! # Error Types — Cursor Failure Surface
//!
//! Defines the typed failures a cursor can report. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! Two-tier policy:
//!
//! - *Soft absence* is not an error. Schema trees are partial and sparse
//!   during exploratory navigation, so a lookup that finds nothing returns
//!   `None` from [`SchemaCursor::resolve`](crate::SchemaCursor::resolve).
//! - *Hard errors* are structural impossibilities: indexing a sequence with
//!   a non-numeric segment, a strict fetch against an absent key, or a
//!   `$ref` that points outside the current document. These raise
//!   immediately, uncaught, with full context.
//!
//! Nothing is retried or suppressed internally; every operation is
//! synchronous and deterministic.

use thiserror::Error;

/// Error raised by pointer resolution and reference following.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// A pointer segment was applied to a sequence node but is not a
    /// decimal array index.
    #[error("invalid pointer segment '{segment}': not a decimal index for a sequence node")]
    InvalidPointerSegment {
        /// The offending segment, verbatim.
        segment: String,
    },

    /// A strict fetch requested a key that resolved to nothing.
    #[error("missing key '{key}' at '{fragment}'")]
    MissingKey {
        /// The requested key.
        key: String,
        /// Fragment identifier of the cursor position the fetch ran against.
        fragment: String,
    },

    /// A `$ref` value that is not a local `#/...` fragment reference.
    /// External and relative references are resolved by the document
    /// loader, never by the cursor.
    #[error("unsupported reference '{reference}': only local '#/' fragment references are resolvable")]
    UnsupportedRef {
        /// The `$ref` string, verbatim.
        reference: String,
    },
}
