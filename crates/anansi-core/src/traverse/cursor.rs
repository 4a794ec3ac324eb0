//! The three-state cursor shared by every pruning iterator

use crate::error::{AnansiError, Result};

/// Where a pruning iterator stands relative to its last-returned walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Nothing returned yet, or the last `next()` found the traversal exhausted
    #[default]
    Fresh,
    /// A walk was just returned and neither `remove` nor `prune` applied to it
    Advanced,
    /// `remove` or `prune` already applied to the last-returned walk
    Consumed,
}

impl Cursor {
    /// Fail unless a walk was just returned and has not been consumed.
    pub fn check_advanced(self, operation: &'static str) -> Result<()> {
        match self {
            Cursor::Advanced => Ok(()),
            Cursor::Fresh => Err(AnansiError::illegal_state(
                operation,
                "no walk has been returned by next()",
            )),
            Cursor::Consumed => Err(AnansiError::illegal_state(
                operation,
                "the last walk was already removed or pruned",
            )),
        }
    }

    /// Record the outcome of a `next()` call.
    pub fn advance(&mut self, produced: bool) {
        *self = if produced {
            Cursor::Advanced
        } else {
            Cursor::Fresh
        };
    }

    /// Check and consume in one step; the cursor is only changed on success.
    pub fn consume(&mut self, operation: &'static str) -> Result<()> {
        self.check_advanced(operation)?;
        *self = Cursor::Consumed;
        Ok(())
    }
}
