//! Walks: immutable records of a path from one vertex to another
//!
//! A walk is `(from, to, over)`. A single traversed edge is a trivial walk
//! whose `over` is the edge label, if any. A path from a traversal root is a
//! composite walk whose `over` is the ordered sequence of edges taken.

use serde::Serialize;

/// A walk from one vertex to another, optionally over some edge value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Walk<V, E> {
    from: V,
    to: V,
    over: Option<E>,
}

/// A composite walk over the sub-walks (edges) traversed from a root.
pub type Path<V, E> = Walk<V, Vec<Walk<V, E>>>;

impl<V, E> Walk<V, E> {
    /// Create a walk with no `over`
    pub fn new(from: V, to: V) -> Self {
        Walk {
            from,
            to,
            over: None,
        }
    }

    /// Create a walk over the given value
    pub fn with_over(from: V, to: V, over: E) -> Self {
        Walk {
            from,
            to,
            over: Some(over),
        }
    }

    pub fn from_vertex(&self) -> &V {
        &self.from
    }

    pub fn to_vertex(&self) -> &V {
        &self.to
    }

    pub fn over(&self) -> Option<&E> {
        self.over.as_ref()
    }

    /// Consume the walk, returning its destination
    pub fn into_to(self) -> V {
        self.to
    }

    /// Start building a composite walk rooted at `root`
    pub fn from(root: V) -> WalkBuilder<V, E> {
        WalkBuilder::new(root)
    }
}

impl<V, E> Path<V, E> {
    /// The edges traversed from the root, in order. Empty for the root itself.
    pub fn steps(&self) -> &[Walk<V, E>] {
        self.over.as_deref().unwrap_or(&[])
    }

    /// The edge that reached `to`, or `None` for a root walk
    pub fn last_step(&self) -> Option<&Walk<V, E>> {
        self.steps().last()
    }

    /// Number of edges traversed
    pub fn depth(&self) -> usize {
        self.steps().len()
    }
}

/// Builds a composite walk out of a chain of sub-walks.
///
/// No check is made that consecutive sub-walks connect; callers add a
/// coherent chain.
#[derive(Debug, Clone)]
pub struct WalkBuilder<V, E> {
    root: V,
    steps: Vec<Walk<V, E>>,
}

impl<V, E> WalkBuilder<V, E> {
    fn new(root: V) -> Self {
        WalkBuilder {
            root,
            steps: Vec::new(),
        }
    }

    /// Append a sub-walk
    pub fn add(&mut self, walk: Walk<V, E>) -> &mut Self {
        self.steps.push(walk);
        self
    }

    /// Remove the most recently added sub-walk, if any
    pub fn pop(&mut self) -> &mut Self {
        self.steps.pop();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The most recently added sub-walk
    pub fn last(&self) -> Option<&Walk<V, E>> {
        self.steps.last()
    }

    /// Where the walk being built currently ends
    pub fn to_vertex(&self) -> &V {
        self.steps.last().map_or(&self.root, |step| &step.to)
    }
}

impl<V: Clone, E: Clone> WalkBuilder<V, E> {
    /// Build a walk from the root to the last added sub-walk's destination,
    /// or to the root itself if nothing was added.
    pub fn build(&self) -> Path<V, E> {
        let to = self
            .steps
            .last()
            .map(|step| step.to.clone())
            .unwrap_or_else(|| self.root.clone());
        Walk::with_over(self.root.clone(), to, self.steps.clone())
    }
}
