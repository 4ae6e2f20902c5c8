// Fixed-View Container (boxed-slice-backed)

use serde::{Deserialize, Serialize};

use super::error::{MutationError, MutationOp, Result};
use super::Item;

/// Sequence backed by a fixed-size array: supports in-place element
/// replacement, rejects any structural resize
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedViewList {
    items: Box<[Item]>,
}

impl FixedViewList {
    pub fn from_items(items: impl Into<Box<[Item]>>) -> Self {
        Self {
            items: items.into(),
        }
    }

    /// Replace the element at `index`, returning the previous element
    pub fn set(&mut self, index: usize, item: Item) -> Result<Item> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or(MutationError::OutOfBounds { index, len })?;
        Ok(std::mem::replace(slot, item))
    }

    /// Structural append is not supported by a fixed view
    pub fn push(&mut self, _item: Item) -> Result<()> {
        Err(MutationError::Unsupported(MutationOp::Push))
    }

    /// Structural removal is not supported by a fixed view
    pub fn remove(&mut self, _index: usize) -> Result<Item> {
        Err(MutationError::Unsupported(MutationOp::Remove))
    }

    pub fn get(&self, index: usize) -> Option<Item> {
        self.items.get(index).copied()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl std::fmt::Display for FixedViewList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        super::fmt_items(f, &self.items)
    }
}
