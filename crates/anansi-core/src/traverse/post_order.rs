use super::{remove_last_step, Cursor, Frame, PruningIterator};
use crate::adjacency::Adjacency;
use crate::error::Result;
use crate::walk::{Path, Walk};

/// Depth-first traversal emitting each vertex after all of its children.
///
/// A vertex is only returned once its whole subtree has been, so the first
/// result already requires a full descent. Never use this on an adjacency
/// with a cycle or self-loop: the frame stack grows without bound.
pub struct PostOrder<A: Adjacency> {
    adjacency: A,
    root: Option<A::Vertex>,
    stack: Vec<Frame<A>>,
    last_step: Option<Walk<A::Vertex, A::Edge>>,
    cursor: Cursor,
}

impl<A: Adjacency> PostOrder<A>
where
    A::Vertex: Clone,
    A::Edge: Clone,
{
    pub(super) fn new(root: A::Vertex, adjacency: A) -> Self {
        PostOrder {
            adjacency,
            root: Some(root),
            stack: Vec::new(),
            last_step: None,
            cursor: Cursor::Fresh,
        }
    }

    /// Consume the traversal, handing back the adjacency.
    pub fn into_adjacency(self) -> A {
        self.adjacency
    }

    fn advance(&mut self) -> Option<Frame<A>> {
        if let Some(root) = self.root.take() {
            self.stack.push(Frame::open(&self.adjacency, Walk::from(root)));
        }
        loop {
            let top = self.stack.last_mut()?;
            match top.next_child() {
                Some(builder) => {
                    let frame = Frame::open(&self.adjacency, builder);
                    self.stack.push(frame);
                }
                None => return self.stack.pop(),
            }
        }
    }
}

impl<A: Adjacency> Iterator for PostOrder<A>
where
    A::Vertex: Clone,
    A::Edge: Clone,
{
    type Item = Path<A::Vertex, A::Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(frame) = self.advance() else {
            self.cursor.advance(false);
            self.last_step = None;
            tracing::debug!(strategy = "post-order", "traversal exhausted");
            return None;
        };
        self.cursor.advance(true);
        self.last_step = frame.builder.last().cloned();
        Some(frame.builder.build())
    }
}

impl<A: Adjacency> PruningIterator for PostOrder<A>
where
    A::Vertex: Clone,
    A::Edge: Clone,
{
    fn has_next(&mut self) -> bool {
        self.root.is_some() || !self.stack.is_empty()
    }

    /// The subtree of a returned vertex is already complete, so this only
    /// consumes the cursor.
    fn prune(&mut self) -> Result<()> {
        self.cursor.consume("prune")?;
        tracing::trace!(strategy = "post-order", "prune after completed subtree");
        Ok(())
    }

    fn remove(&mut self) -> Result<()> {
        remove_last_step(
            &mut self.adjacency,
            &mut self.cursor,
            self.last_step.as_ref(),
            "post-order",
        )
    }
}
