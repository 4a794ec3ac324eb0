//! Traversal strategies over an [`Adjacency`]
//!
//! Each strategy is a lazy [`Iterator`] of [`Path`]s from the root and also a
//! [`PruningIterator`]: after `next()` the caller may `prune` the returned
//! vertex's subtree for this traversal only, or `remove` the edge that reached
//! it from the adjacency itself.
//!
//! Pre-order and breadth-first are safe on cyclic graphs as long as the caller
//! bounds its own consumption. Post-order and leaves must fully descend before
//! emitting, so they diverge on cycles and need a finite-depth adjacency.

mod breadth_first;
mod cursor;
mod leaves;
mod post_order;
mod pre_order;

pub use breadth_first::BreadthFirst;
pub use cursor::Cursor;
pub use leaves::Leaves;
pub use post_order::PostOrder;
pub use pre_order::PreOrder;

use std::fmt;
use std::iter::Peekable;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::adjacency::Adjacency;
use crate::bail_illegal_state;
use crate::error::{AnansiError, Result};
use crate::walk::{Path, Walk, WalkBuilder};

/// An iterator whose traversal can be cut short at the last-returned element.
pub trait PruningIterator: Iterator {
    /// Whether another element can be produced. Never changes the cursor state.
    fn has_next(&mut self) -> bool;

    /// Skip the subtree below the last-returned element, for this traversal only.
    ///
    /// # Errors
    /// [`AnansiError::IllegalState`] unless an element was just returned and has
    /// not already been removed or pruned.
    fn prune(&mut self) -> Result<()>;

    /// Delete the edge that reached the last-returned element from the
    /// underlying adjacency.
    ///
    /// # Errors
    /// [`AnansiError::IllegalState`] under the same conditions as `prune`, or
    /// for the root walk; [`AnansiError::Unsupported`] when the adjacency is
    /// read-only.
    fn remove(&mut self) -> Result<()>;

    /// Like `next()`, but exhaustion is an [`AnansiError::Exhausted`] error.
    fn try_next(&mut self) -> Result<Self::Item> {
        self.next().ok_or(AnansiError::Exhausted)
    }
}

/// Depth-first traversal, each vertex before its children.
pub fn pre_order<A: Adjacency>(root: A::Vertex, adjacency: A) -> PreOrder<A>
where
    A::Vertex: Clone,
    A::Edge: Clone,
{
    PreOrder::new(root, adjacency)
}

/// Level-by-level traversal.
pub fn breadth_first<A: Adjacency>(root: A::Vertex, adjacency: A) -> BreadthFirst<A>
where
    A::Vertex: Clone,
    A::Edge: Clone,
{
    BreadthFirst::new(root, adjacency)
}

/// Depth-first traversal, each vertex after its children. Diverges on cycles.
pub fn post_order<A: Adjacency>(root: A::Vertex, adjacency: A) -> PostOrder<A>
where
    A::Vertex: Clone,
    A::Edge: Clone,
{
    PostOrder::new(root, adjacency)
}

/// Only the walks ending at a vertex without children. Diverges on cycles.
pub fn leaves<A: Adjacency>(root: A::Vertex, adjacency: A) -> Leaves<A>
where
    A::Vertex: Clone,
    A::Edge: Clone,
{
    Leaves::new(root, adjacency)
}

/// The four traversal strategies, selectable at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Order {
    #[default]
    PreOrder,
    BreadthFirst,
    PostOrder,
    Leaves,
}

/// A strategy chosen at runtime
pub type DynTraversal<'a, V, E> = Box<dyn PruningIterator<Item = Path<V, E>> + 'a>;

impl Order {
    /// Start a traversal of `adjacency` from `root` in this order.
    pub fn traverse<'a, A>(self, root: A::Vertex, adjacency: A) -> DynTraversal<'a, A::Vertex, A::Edge>
    where
        A: Adjacency + 'a,
        A::Vertex: Clone + 'a,
        A::Edge: Clone + 'a,
    {
        match self {
            Order::PreOrder => Box::new(pre_order(root, adjacency)),
            Order::BreadthFirst => Box::new(breadth_first(root, adjacency)),
            Order::PostOrder => Box::new(post_order(root, adjacency)),
            Order::Leaves => Box::new(leaves(root, adjacency)),
        }
    }

    /// Whether the strategy must reach the bottom of a subtree before it
    /// emits anything, and so never terminates on a cycle
    pub fn needs_finite_depth(self) -> bool {
        matches!(self, Order::PostOrder | Order::Leaves)
    }
}

impl FromStr for Order {
    type Err = AnansiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pre-order" | "preorder" => Ok(Order::PreOrder),
            "breadth-first" | "bfs" => Ok(Order::BreadthFirst),
            "post-order" | "postorder" => Ok(Order::PostOrder),
            "leaves" => Ok(Order::Leaves),
            other => Err(AnansiError::invalid_value("traversal order", other)),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Order::PreOrder => "pre-order",
            Order::BreadthFirst => "breadth-first",
            Order::PostOrder => "post-order",
            Order::Leaves => "leaves",
        })
    }
}

/// One level of a depth-first descent: the path so far and the children of
/// the vertex it ends at.
struct Frame<A: Adjacency> {
    builder: WalkBuilder<A::Vertex, A::Edge>,
    children: Peekable<A::Children>,
    descended: bool,
}

impl<A: Adjacency> Frame<A>
where
    A::Vertex: Clone,
    A::Edge: Clone,
{
    fn open(adjacency: &A, builder: WalkBuilder<A::Vertex, A::Edge>) -> Self {
        let children = adjacency.children(builder.to_vertex()).peekable();
        Frame {
            builder,
            children,
            descended: false,
        }
    }

    /// The path extended by the next child edge, if any remain
    fn next_child(&mut self) -> Option<WalkBuilder<A::Vertex, A::Edge>> {
        let step = self.children.next()?;
        self.descended = true;
        let mut builder = self.builder.clone();
        builder.add(step);
        Some(builder)
    }

    fn has_more(&mut self) -> bool {
        self.children.peek().is_some()
    }
}

/// Shared `remove` for every strategy: delete the last traversed edge and
/// consume the cursor.
fn remove_last_step<A: Adjacency>(
    adjacency: &mut A,
    cursor: &mut Cursor,
    last_step: Option<&Walk<A::Vertex, A::Edge>>,
    strategy: &'static str,
) -> Result<()> {
    cursor.check_advanced("remove")?;
    let Some(step) = last_step else {
        bail_illegal_state!("remove", "the root walk has no incoming edge");
    };
    adjacency.remove(step)?;
    *cursor = Cursor::Consumed;
    tracing::trace!(strategy, "removed last traversed edge");
    Ok(())
}
