// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! External cursor over a store.
//!
//! A cursor is either positioned at an entry (`position() < len`) or
//! exhausted. `advance` moves forward one entry and `rewind` returns to
//! the first. The cursor borrows the store, so the store cannot change
//! underneath it; dropping the cursor ends the traversal.

use serde_json::Value;

use super::Store;

/// A restartable forward cursor over a `Store`.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    store: &'a Store,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub(super) fn new(store: &'a Store) -> Cursor<'a> {
        return Cursor { store, position: 0 };
    }

    /// Check if the cursor is positioned at a live entry.
    #[inline]
    pub fn valid(&self) -> bool {
        return self.position < self.store.len();
    }

    /// Index of the current entry in key order.
    #[inline]
    pub fn position(&self) -> usize {
        return self.position;
    }

    /// Key of the current entry, or `None` once exhausted.
    pub fn key(&self) -> Option<&'a str> {
        return self.store.keys.get(self.position).map(String::as_str);
    }

    /// Value of the current entry, or `None` once exhausted.
    pub fn current(&self) -> Option<&'a Value> {
        let key = self.key()?;
        return self.store.items.get(key);
    }

    /// Move to the next entry. Does nothing once exhausted.
    pub fn advance(&mut self) {
        if self.valid() {
            self.position += 1;
        }
    }

    /// Return to the first entry.
    pub fn rewind(&mut self) {
        self.position = 0;
    }
}
