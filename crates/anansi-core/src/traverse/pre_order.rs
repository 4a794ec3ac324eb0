use super::{remove_last_step, Cursor, Frame, PruningIterator};
use crate::adjacency::Adjacency;
use crate::error::Result;
use crate::walk::{Path, Walk, WalkBuilder};

/// Depth-first traversal emitting each vertex before its children.
///
/// Children of the last-returned vertex are only opened on the following
/// `next()` (or a `has_next()` that needs them), so `prune` and `remove` can
/// still cancel the descent. Cycles produce an endless, repeating sequence.
pub struct PreOrder<A: Adjacency> {
    adjacency: A,
    root: Option<A::Vertex>,
    stack: Vec<Frame<A>>,
    /// Last-returned path whose children have not been opened yet
    pending: Option<WalkBuilder<A::Vertex, A::Edge>>,
    /// The top frame was opened for the last-returned path by `has_next`
    opened_pending: bool,
    last_step: Option<Walk<A::Vertex, A::Edge>>,
    cursor: Cursor,
}

impl<A: Adjacency> PreOrder<A>
where
    A::Vertex: Clone,
    A::Edge: Clone,
{
    pub(super) fn new(root: A::Vertex, adjacency: A) -> Self {
        PreOrder {
            adjacency,
            root: Some(root),
            stack: Vec::new(),
            pending: None,
            opened_pending: false,
            last_step: None,
            cursor: Cursor::Fresh,
        }
    }

    /// Consume the traversal, handing back the adjacency.
    pub fn into_adjacency(self) -> A {
        self.adjacency
    }

    fn open_pending(&mut self) {
        if let Some(builder) = self.pending.take() {
            self.stack.push(Frame::open(&self.adjacency, builder));
            self.opened_pending = true;
        }
    }

    /// Forget the descent below the last-returned path.
    fn discard_pending(&mut self) {
        if self.opened_pending {
            self.stack.pop();
            self.opened_pending = false;
        }
        self.pending = None;
    }

    fn advance(&mut self) -> Option<WalkBuilder<A::Vertex, A::Edge>> {
        if let Some(root) = self.root.take() {
            return Some(Walk::from(root));
        }
        self.open_pending();
        self.opened_pending = false;
        loop {
            let top = self.stack.last_mut()?;
            match top.next_child() {
                Some(builder) => return Some(builder),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl<A: Adjacency> Iterator for PreOrder<A>
where
    A::Vertex: Clone,
    A::Edge: Clone,
{
    type Item = Path<A::Vertex, A::Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(builder) = self.advance() else {
            self.cursor.advance(false);
            self.last_step = None;
            tracing::debug!(strategy = "pre-order", "traversal exhausted");
            return None;
        };
        self.cursor.advance(true);
        self.last_step = builder.last().cloned();
        let path = builder.build();
        self.pending = Some(builder);
        Some(path)
    }
}

impl<A: Adjacency> PruningIterator for PreOrder<A>
where
    A::Vertex: Clone,
    A::Edge: Clone,
{
    fn has_next(&mut self) -> bool {
        if self.root.is_some() {
            return true;
        }
        self.open_pending();
        self.stack.iter_mut().rev().any(|frame| frame.has_more())
    }

    fn prune(&mut self) -> Result<()> {
        self.cursor.consume("prune")?;
        self.discard_pending();
        tracing::trace!(strategy = "pre-order", "pruned subtree");
        Ok(())
    }

    fn remove(&mut self) -> Result<()> {
        remove_last_step(
            &mut self.adjacency,
            &mut self.cursor,
            self.last_step.as_ref(),
            "pre-order",
        )?;
        self.discard_pending();
        Ok(())
    }
}
