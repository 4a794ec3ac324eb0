//! Element adjacency: structured documents as trees of labelled edges
//!
//! Every mapping entry and sequence element of a [`Shaped`] value is a child,
//! reached over a [`Segment`]. Rendering the segments of a path gives a dotted
//! element path such as `map.people[0].name`.

mod path;
mod shape;

pub use path::{element_path, split_element_path};
pub use shape::{Shape, Shaped};

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;

use crate::adjacency::Adjacency;
use crate::traverse::{leaves, Leaves};
use crate::walk::{Path, Walk};

/// Edge label between a value and one of its children
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Segment {
    /// Key of a mapping entry
    Key(String),
    /// Position in a sequence
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => f.write_str(key),
            Segment::Index(index) => write!(f, "[{}]", index),
        }
    }
}

impl Segment {
    /// The child this segment addresses within `shape`
    fn resolve<'a, T: ?Sized>(&self, shape: Shape<'a, T>) -> Option<&'a T> {
        match (self, shape) {
            (Segment::Key(key), Shape::Mapping(entries)) => entries
                .into_iter()
                .find_map(|(k, v)| (k == *key).then_some(v)),
            (Segment::Index(index), Shape::Sequence(items)) => items.get(*index).copied(),
            _ => None,
        }
    }
}

/// Read-only adjacency over the values borrowed from one document
pub struct ElementAdjacency<'a, T: ?Sized> {
    _document: PhantomData<&'a T>,
}

impl<'a, T: ?Sized> ElementAdjacency<'a, T> {
    pub fn new() -> Self {
        ElementAdjacency {
            _document: PhantomData,
        }
    }
}

impl<T: ?Sized> Default for ElementAdjacency<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for ElementAdjacency<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ElementAdjacency")
    }
}

impl<'a, T: Shaped + ?Sized> Adjacency for ElementAdjacency<'a, T> {
    type Vertex = &'a T;
    type Edge = Segment;
    type Children = std::vec::IntoIter<Walk<&'a T, Segment>>;

    fn children(&self, vertex: &&'a T) -> Self::Children {
        let parent: &'a T = *vertex;
        let children: Vec<_> = match parent.shape() {
            Shape::Mapping(entries) => entries
                .into_iter()
                .map(|(key, child)| Walk::with_over(parent, child, Segment::Key(key)))
                .collect(),
            Shape::Sequence(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, child)| Walk::with_over(parent, child, Segment::Index(index)))
                .collect(),
            Shape::Scalar => Vec::new(),
        };
        children.into_iter()
    }
}

/// The immediate children of `root`, each as a path of depth one.
pub fn elements<T: Shaped + ?Sized>(root: &T) -> impl Iterator<Item = Path<&T, Segment>> {
    ElementAdjacency::new()
        .children(&root)
        .map(move |step| Walk::from(root).add(step).build())
}

/// Every path from `root` to a value without children.
///
/// Empty mappings and sequences are leaves, and a scalar root is its own
/// only leaf, rendered as the empty path.
pub fn leaf_elements<T: Shaped + ?Sized>(root: &T) -> Leaves<ElementAdjacency<'_, T>> {
    leaves(root, ElementAdjacency::new())
}

/// Resolve `segments` from `root`, one level per segment.
pub fn lookup<'a, T: Shaped + ?Sized>(root: &'a T, segments: &[Segment]) -> Option<&'a T> {
    segments
        .iter()
        .try_fold(root, |value, segment| segment.resolve(value.shape()))
}
