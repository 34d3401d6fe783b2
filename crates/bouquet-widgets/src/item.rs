//! Bouquet entries and name-based de-duplication.

use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// One selectable row: a playlist name and how many channels it holds.
///
/// Identity is the **name alone**. Two items with the same name compare
/// equal even when their channel counts differ, and [`dedup_by_name`] keeps
/// only the first of them.
#[derive(Debug, Clone)]
pub struct Item {
    name: String,
    total_channels: u32,
}

impl Item {
    /// Create an item from a playlist name and its channel count.
    pub fn new(name: impl Into<String>, total_channels: u32) -> Self {
        Self {
            name: name.into(),
            total_channels,
        }
    }

    /// The playlist name shown on the row, also the item's identity.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Channel count shown right-aligned on the row.
    pub fn total_channels(&self) -> u32 {
        self.total_channels
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl<S: Into<String>> From<(S, u32)> for Item {
    fn from((name, total_channels): (S, u32)) -> Self {
        Item::new(name, total_channels)
    }
}

/// Drop items whose name was already seen, keeping first occurrences in
/// their original order.
pub fn dedup_by_name(items: impl IntoIterator<Item = Item>) -> Vec<Item> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.name.clone()))
        .collect()
}
