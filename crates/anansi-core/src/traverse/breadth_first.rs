use std::collections::VecDeque;

use super::{remove_last_step, Cursor, PruningIterator};
use crate::adjacency::Adjacency;
use crate::error::Result;
use crate::walk::{Path, Walk, WalkBuilder};

/// Level-by-level traversal over a FIFO frontier of pending paths.
///
/// The children of a returned vertex are enqueued, one path per edge, on the
/// following `next()` (or a `has_next()` that finds the frontier empty).
/// Pruning or removing retracts exactly that batch. Each vertex's children are
/// materialized at once, so fan-out must be finite; depth need not be.
pub struct BreadthFirst<A: Adjacency> {
    adjacency: A,
    frontier: VecDeque<WalkBuilder<A::Vertex, A::Edge>>,
    /// Last-returned path whose children have not been enqueued yet
    pending: Option<WalkBuilder<A::Vertex, A::Edge>>,
    /// Size of the batch `has_next` enqueued for the last-returned path
    enqueued: Option<usize>,
    last_step: Option<Walk<A::Vertex, A::Edge>>,
    cursor: Cursor,
}

impl<A: Adjacency> BreadthFirst<A>
where
    A::Vertex: Clone,
    A::Edge: Clone,
{
    pub(super) fn new(root: A::Vertex, adjacency: A) -> Self {
        BreadthFirst {
            adjacency,
            frontier: VecDeque::from([Walk::from(root)]),
            pending: None,
            enqueued: None,
            last_step: None,
            cursor: Cursor::Fresh,
        }
    }

    /// Consume the traversal, handing back the adjacency.
    pub fn into_adjacency(self) -> A {
        self.adjacency
    }

    fn enqueue_pending(&mut self) {
        let Some(parent) = self.pending.take() else {
            return;
        };
        let before = self.frontier.len();
        for step in self.adjacency.children(parent.to_vertex()) {
            let mut child = parent.clone();
            child.add(step);
            self.frontier.push_back(child);
        }
        self.enqueued = Some(self.frontier.len() - before);
    }

    /// Retract the children of the last-returned path, enqueued or not.
    fn discard_pending(&mut self) {
        if let Some(batch) = self.enqueued.take() {
            let keep = self.frontier.len() - batch;
            self.frontier.truncate(keep);
        }
        self.pending = None;
    }
}

impl<A: Adjacency> Iterator for BreadthFirst<A>
where
    A::Vertex: Clone,
    A::Edge: Clone,
{
    type Item = Path<A::Vertex, A::Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        self.enqueue_pending();
        self.enqueued = None;
        let Some(builder) = self.frontier.pop_front() else {
            self.cursor.advance(false);
            self.last_step = None;
            tracing::debug!(strategy = "breadth-first", "traversal exhausted");
            return None;
        };
        self.cursor.advance(true);
        self.last_step = builder.last().cloned();
        let path = builder.build();
        self.pending = Some(builder);
        Some(path)
    }
}

impl<A: Adjacency> PruningIterator for BreadthFirst<A>
where
    A::Vertex: Clone,
    A::Edge: Clone,
{
    fn has_next(&mut self) -> bool {
        if self.frontier.is_empty() {
            self.enqueue_pending();
        }
        !self.frontier.is_empty()
    }

    fn prune(&mut self) -> Result<()> {
        self.cursor.consume("prune")?;
        self.discard_pending();
        tracing::trace!(strategy = "breadth-first", "pruned subtree");
        Ok(())
    }

    fn remove(&mut self) -> Result<()> {
        remove_last_step(
            &mut self.adjacency,
            &mut self.cursor,
            self.last_step.as_ref(),
            "breadth-first",
        )?;
        self.discard_pending();
        Ok(())
    }
}
