//! # Pointer — Segment Sequences and Fragment Syntax
//!
//! A [`Pointer`] is an ordered, immutable sequence of string segments
//! describing a walk from the root of a document to some node inside it.
//! Segments are always strings, even when they denote array indices (an
//! index segment is the decimal string form of a non-negative integer).
//!
//! ## Fragment Syntax
//!
//! Pointers have a textual URI-fragment form used by `$ref` links:
//!
//! ```text
//! #/components/schemas/Pet
//! ```
//!
//! Generation escapes a literal `/` inside a segment as `~1` (the RFC 6901
//! reference-token convention) and then percent-encodes each segment for
//! safe embedding in a URI fragment. Parsing accepts only the local `#/...`
//! form and reverses the `~1` escape; anything else is the document loader's
//! problem, not the cursor's.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::error::CursorError;

/// Characters percent-encoded inside a fragment segment: everything except
/// alphanumerics and `*-._~`. Keeping `~` verbatim is what lets the `~1`
/// escape for `/` survive encoding.
const FRAGMENT_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// An ordered, immutable sequence of string segments locating a node
/// within a tree-shaped document.
///
/// The empty pointer locates the document root. Pointers are pure values:
/// every operation that "changes" a pointer returns a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pointer(Vec<String>);

impl Pointer {
    /// The empty pointer, locating the document root.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Build a pointer from an ordered sequence of segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// The segments of this pointer, in walk order.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this pointer locates the document root.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a new pointer with `segments` appended. Pure; the receiver
    /// is unchanged.
    pub fn join<I, S>(&self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut joined = self.0.clone();
        joined.extend(segments.into_iter().map(Into::into));
        Self(joined)
    }

    /// Generates the URI fragment identifier for this pointer.
    ///
    /// Each segment has literal `/` escaped to `~1`, is percent-encoded
    /// for URI-fragment embedding, and the escaped segments are joined
    /// with `/` under a `#/` prefix. The empty pointer yields exactly
    /// `"#/"`.
    pub fn fragment(&self) -> String {
        let encoded = self
            .0
            .iter()
            .map(|segment| {
                utf8_percent_encode(&segment.replace('/', "~1"), FRAGMENT_SEGMENT).to_string()
            })
            .collect::<Vec<_>>()
            .join("/");
        format!("#/{encoded}")
    }

    /// Parses a local `#/a/b/c` fragment reference into a pointer,
    /// reversing the `~1` escape in each segment.
    ///
    /// `"#"` and `"#/"` both parse to the root pointer.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::UnsupportedRef`] when `reference` is not of
    /// the local `#/...` form (e.g. an external file reference). The cursor
    /// never guesses at non-local references.
    pub fn from_fragment(reference: &str) -> Result<Self, CursorError> {
        let rest = match reference {
            "#" | "#/" => return Ok(Self::root()),
            _ => reference
                .strip_prefix("#/")
                .ok_or_else(|| CursorError::UnsupportedRef {
                    reference: reference.to_owned(),
                })?,
        };
        Ok(Self(
            rest.split('/').map(|token| token.replace("~1", "/")).collect(),
        ))
    }
}

impl From<Vec<String>> for Pointer {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl<S: Into<String>> FromIterator<S> for Pointer {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_segments(iter)
    }
}

impl<'a> IntoIterator for &'a Pointer {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for Pointer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.fragment())
    }
}
