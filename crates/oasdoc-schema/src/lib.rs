//! # oasdoc-schema — Schema Cursors for OpenAPI Documents
//!
//! Immutable, lightweight cursors into a parsed OpenAPI/JSON-Schema
//! document. A [`SchemaCursor`] pairs a shared root document with a
//! [`Pointer`] to its current position; even a cursor deep inside a
//! sub-schema retains the whole document, so it can resolve `$ref` links
//! to any other part of the schema.
//!
//! ```
//! use std::sync::Arc;
//! use oasdoc_schema::SchemaCursor;
//!
//! let doc = Arc::new(serde_json::json!({
//!     "components": {"schemas": {"Pet": {"type": "object"}}},
//!     "response": {"$ref": "#/components/schemas/Pet"}
//! }));
//!
//! let pet = SchemaCursor::from_root(doc)
//!     .navigate(["response"])
//!     .follow_refs()?;
//! assert_eq!(pet.fragment(), "#/components/schemas/Pet");
//! assert_eq!(pet.fetch("type")?.as_str(), Some("object"));
//! # Ok::<(), oasdoc_schema::CursorError>(())
//! ```
//!
//! ## Crate Policy
//!
//! - The document tree is a `serde_json::Value` and is never mutated;
//!   cursors share it behind an `Arc` and are safe to read concurrently.
//! - Loading, deserialization, and schema validation belong to callers.
//!   Only local `#/...` fragment references are resolvable here.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod cursor;
pub mod error;
pub mod pointer;

pub use cursor::SchemaCursor;
pub use error::CursorError;
pub use pointer::Pointer;
