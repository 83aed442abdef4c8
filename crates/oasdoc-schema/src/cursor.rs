//! # SchemaCursor — Positions Within a Parsed Document
//!
//! A [`SchemaCursor`] pairs a shared root document value with a [`Pointer`]
//! to some position inside it. Even a cursor deep inside a sub-schema
//! retains the whole document, which is what lets it resolve `$ref` links
//! to any other part of the schema.
//!
//! ## Sharing Model
//!
//! The root is held behind an `Arc` and never mutated: arbitrarily many
//! cursors reference one document, navigation always builds a fresh cursor,
//! and concurrent reads from multiple threads need no locking.
//!
//! ## Failure Semantics
//!
//! Absent paths are not errors — [`SchemaCursor::resolve`] returns
//! `Ok(None)` for them, because schema trees are partial during exploratory
//! navigation. Only a structurally impossible access (a non-numeric segment
//! applied to a sequence) raises [`CursorError::InvalidPointerSegment`], and
//! only the strict [`SchemaCursor::fetch`] promotes absence to
//! [`CursorError::MissingKey`].

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::CursorError;
use crate::pointer::Pointer;

/// An immutable handle to a position within a shared document.
///
/// Two cursors are semantically equivalent iff they share the same root
/// *identity* and have structurally equal pointers; `PartialEq` implements
/// exactly that. Cloning is cheap: the document itself is never copied.
#[derive(Debug, Clone)]
pub struct SchemaCursor {
    root: Arc<Value>,
    pointer: Pointer,
}

impl SchemaCursor {
    /// Builds a cursor over `root` at `pointer`.
    ///
    /// No validation is performed here; a dangling pointer is only
    /// detected on resolution.
    pub fn new(root: Arc<Value>, pointer: Pointer) -> Self {
        Self { root, pointer }
    }

    /// Builds a cursor at the root of `root`.
    pub fn from_root(root: Arc<Value>) -> Self {
        Self::new(root, Pointer::root())
    }

    /// The pointer locating this cursor within its document.
    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    /// The shared root document this cursor points into.
    pub fn root(&self) -> &Arc<Value> {
        &self.root
    }

    /// Returns a new cursor with `segments` appended to this cursor's
    /// pointer. Pure; does not resolve.
    pub fn navigate<I, S>(&self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Arc::clone(&self.root), self.pointer.join(segments))
    }

    /// Returns a new cursor over the same root with `pointer` replacing
    /// the current pointer entirely. Pure.
    pub fn at_pointer(&self, pointer: Pointer) -> Self {
        Self::new(Arc::clone(&self.root), pointer)
    }

    /// Walks the root value by this cursor's pointer and returns the node
    /// it locates, or `None` when the path leads nowhere.
    ///
    /// The walk reduces left-to-right over the segments: mapping nodes are
    /// dereferenced by key, sequence nodes by decimal index (out-of-range
    /// yields `None`), and a scalar node with segments remaining yields
    /// `None`. Once the walk hits an absent node it short-circuits without
    /// consulting further segments.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::InvalidPointerSegment`] when a segment that is
    /// not one-or-more decimal digits is applied to a sequence node.
    pub fn resolve(&self) -> Result<Option<&Value>, CursorError> {
        let mut current = Some(self.root.as_ref());
        for segment in &self.pointer {
            current = match current {
                Some(node) => step(node, segment)?,
                None => return Ok(None),
            };
        }
        Ok(current)
    }

    /// Resolves the value one segment below this cursor, or `None` when
    /// the key is absent.
    ///
    /// # Errors
    ///
    /// Propagates [`CursorError::InvalidPointerSegment`] from resolution.
    pub fn get(&self, key: impl AsRef<str>) -> Result<Option<&Value>, CursorError> {
        match self.resolve()? {
            Some(node) => step(node, key.as_ref()),
            None => Ok(None),
        }
    }

    /// Strict fetch: resolves the value one segment below this cursor,
    /// raising when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::MissingKey`] when the key resolves to
    /// nothing, and propagates [`CursorError::InvalidPointerSegment`].
    pub fn fetch(&self, key: impl AsRef<str>) -> Result<&Value, CursorError> {
        let key = key.as_ref();
        match self.get(key)? {
            Some(value) => Ok(value),
            None => Err(CursorError::MissingKey {
                key: key.to_owned(),
                fragment: self.fragment(),
            }),
        }
    }

    /// Whether resolving one segment below this cursor yields a value.
    ///
    /// # Errors
    ///
    /// Propagates [`CursorError::InvalidPointerSegment`] from resolution.
    pub fn contains_key(&self, key: impl AsRef<str>) -> Result<bool, CursorError> {
        Ok(self.get(key)?.is_some())
    }

    /// The resolved node viewed as a mapping, or `None` when the node is
    /// absent or not a mapping.
    ///
    /// # Errors
    ///
    /// Propagates [`CursorError::InvalidPointerSegment`] from resolution.
    pub fn as_object(&self) -> Result<Option<&Map<String, Value>>, CursorError> {
        Ok(self.resolve()?.and_then(Value::as_object))
    }

    /// The keys of the resolved mapping, in document order. Empty when the
    /// node is absent or not a mapping.
    ///
    /// # Errors
    ///
    /// Propagates [`CursorError::InvalidPointerSegment`] from resolution.
    pub fn keys(&self) -> Result<Vec<&str>, CursorError> {
        Ok(self
            .as_object()?
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap_or_default())
    }

    /// Follows a `$ref` link at this cursor's position, if there is one.
    ///
    /// When the resolved node is a mapping with a `"$ref"` key holding a
    /// local `#/...` fragment string, returns a cursor over the *same* root
    /// repositioned at the ref target. Exactly one hop is performed: a ref
    /// target that is itself a ref is left as-is, so chained refs take one
    /// call per link. In every other case (no `$ref` key, non-mapping node,
    /// absent node, non-string `$ref` value) the receiver is returned
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::UnsupportedRef`] for a `$ref` string that is
    /// not of the local `#/...` form, and propagates
    /// [`CursorError::InvalidPointerSegment`] from resolution.
    pub fn follow_refs(&self) -> Result<Self, CursorError> {
        let reference = self
            .resolve()?
            .and_then(Value::as_object)
            .and_then(|map| map.get("$ref"))
            .and_then(Value::as_str);
        match reference {
            Some(reference) => Ok(self.at_pointer(Pointer::from_fragment(reference)?)),
            None => Ok(self.clone()),
        }
    }

    /// Generates the URI fragment identifier for this cursor's pointer.
    pub fn fragment(&self) -> String {
        self.pointer.fragment()
    }
}

impl PartialEq for SchemaCursor {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.root, &other.root) && self.pointer == other.pointer
    }
}

impl Eq for SchemaCursor {}

/// Drills one segment into `node`. Dispatch is exhaustive over the three
/// node shapes: mappings dereference by key, sequences by decimal index,
/// and scalars have nothing below them.
fn step<'a>(node: &'a Value, segment: &str) -> Result<Option<&'a Value>, CursorError> {
    match node {
        Value::Object(map) => Ok(map.get(segment)),
        Value::Array(items) => {
            if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
                return Err(CursorError::InvalidPointerSegment {
                    segment: segment.to_owned(),
                });
            }
            // A digit run too large for usize cannot index any in-memory
            // sequence: out of range, not an error.
            Ok(segment.parse::<usize>().ok().and_then(|i| items.get(i)))
        }
        _ => Ok(None),
    }
}
