use super::{remove_last_step, Cursor, Frame, PruningIterator};
use crate::adjacency::Adjacency;
use crate::error::Result;
use crate::walk::{Path, Walk};

/// Only the walks that end at a vertex without children, in depth-first order.
///
/// A vertex reached along several paths is a leaf once per path. Like
/// post-order, this needs a finite-depth adjacency.
pub struct Leaves<A: Adjacency> {
    adjacency: A,
    root: Option<A::Vertex>,
    stack: Vec<Frame<A>>,
    last_step: Option<Walk<A::Vertex, A::Edge>>,
    cursor: Cursor,
}

impl<A: Adjacency> Leaves<A>
where
    A::Vertex: Clone,
    A::Edge: Clone,
{
    pub(super) fn new(root: A::Vertex, adjacency: A) -> Self {
        Leaves {
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
                None => {
                    let frame = self.stack.pop()?;
                    if !frame.descended {
                        return Some(frame);
                    }
                }
            }
        }
    }
}

impl<A: Adjacency> Iterator for Leaves<A>
where
    A::Vertex: Clone,
    A::Edge: Clone,
{
    type Item = Path<A::Vertex, A::Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(frame) = self.advance() else {
            self.cursor.advance(false);
            self.last_step = None;
            tracing::debug!(strategy = "leaves", "traversal exhausted");
            return None;
        };
        self.cursor.advance(true);
        self.last_step = frame.builder.last().cloned();
        Some(frame.builder.build())
    }
}

impl<A: Adjacency> PruningIterator for Leaves<A>
where
    A::Vertex: Clone,
    A::Edge: Clone,
{
    /// Every open frame that has not descended yet, or still has children,
    /// leads to at least one more leaf in a finite-depth adjacency.
    fn has_next(&mut self) -> bool {
        self.root.is_some()
            || self
                .stack
                .iter_mut()
                .any(|frame| !frame.descended || frame.has_more())
    }

    /// A leaf has nothing below it; pruning only consumes the cursor.
    fn prune(&mut self) -> Result<()> {
        self.cursor.consume("prune")?;
        Ok(())
    }

    fn remove(&mut self) -> Result<()> {
        remove_last_step(
            &mut self.adjacency,
            &mut self.cursor,
            self.last_step.as_ref(),
            "leaves",
        )
    }
}
