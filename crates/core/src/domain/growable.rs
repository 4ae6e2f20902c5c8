// Growable Container (Vec-backed)

use serde::{Deserialize, Serialize};

use super::error::Result;
use super::Item;

/// Dynamically resizable ordered sequence; starts empty, no structural
/// constraints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowableList {
    items: Vec<Item>,
}

impl GrowableList {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item. Never fails; the fallible signature keeps the
    /// mutation contract uniform across container flavors.
    pub fn push(&mut self, item: Item) -> Result<()> {
        self.items.push(item);
        Ok(())
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

impl std::fmt::Display for GrowableList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        super::fmt_items(f, &self.items)
    }
}
