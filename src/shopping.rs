use crate::model::ShoppingListEntry;

/// Ordered accumulator of shopping-list entries.
///
/// Append-only from the UI's perspective, with a bulk clear. Duplicate
/// titles are allowed and kept as separate entries. No capacity bound.
#[derive(Debug, Default)]
pub struct ShoppingList {
    entries: Vec<ShoppingListEntry>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: ShoppingListEntry) {
        self.entries.push(entry);
    }

    /// Discard all entries. Irreversible within the session.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn snapshot(&self) -> &[ShoppingListEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
