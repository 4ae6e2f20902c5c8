// Read-Only Container (wrapper over a fixed view)

use serde::{Deserialize, Serialize};

use super::error::{MutationError, MutationOp, Result};
use super::fixed_view::FixedViewList;
use super::Item;

/// Wrapper forbidding any mutation of its backing sequence; reads pass
/// through to the wrapped fixed view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadOnlyList {
    inner: FixedViewList,
}

impl ReadOnlyList {
    pub fn new(inner: FixedViewList) -> Self {
        Self { inner }
    }

    /// Element replacement is rejected
    pub fn set(&mut self, _index: usize, _item: Item) -> Result<Item> {
        Err(MutationError::Unsupported(MutationOp::Set))
    }

    /// Structural append is rejected
    pub fn push(&mut self, _item: Item) -> Result<()> {
        Err(MutationError::Unsupported(MutationOp::Push))
    }

    /// Structural removal is rejected
    pub fn remove(&mut self, _index: usize) -> Result<Item> {
        Err(MutationError::Unsupported(MutationOp::Remove))
    }

    pub fn get(&self, index: usize) -> Option<Item> {
        self.inner.get(index)
    }

    pub fn items(&self) -> &[Item] {
        self.inner.items()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl std::fmt::Display for ReadOnlyList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.inner, f)
    }
}
