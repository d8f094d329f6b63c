//! Selection state for generated artifact lists.
//!
//! Callers that let a user pick items out of a generated list (personas to
//! keep, integrations to pursue) need selections that survive re-generation.
//! [`SelectionStore`] keys each selection by a content hash of the item text,
//! so an item stays selected as long as its text is unchanged, no matter
//! where it lands in the next generated list.

use sha2::{Digest, Sha256};
use std::collections::BTreeSet;

/// Stable identifier for a generated item, derived from its text.
///
/// Identical texts always share a key, and the key does not depend on list
/// position or generation round.
///
/// # Examples
///
/// ```
/// use vasari::session::item_key;
///
/// assert_eq!(item_key("Admin"), item_key("Admin"));
/// assert_ne!(item_key("Admin"), item_key("Customer"));
/// ```
pub fn item_key(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}

/// In-memory store of selected items, keyed by content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    selected: BTreeSet<String>,
}

impl SelectionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an item as selected.
    pub fn select(&mut self, text: &str) {
        self.selected.insert(item_key(text));
    }

    /// Remove an item from the selection.
    pub fn deselect(&mut self, text: &str) {
        self.selected.remove(&item_key(text));
    }

    /// Flip an item's selection, returning the new state.
    pub fn toggle(&mut self, text: &str) -> bool {
        let key = item_key(text);
        if self.selected.remove(&key) {
            false
        } else {
            self.selected.insert(key);
            true
        }
    }

    /// Check whether an item is selected.
    pub fn is_selected(&self, text: &str) -> bool {
        self.selected.contains(&item_key(text))
    }

    /// Filter a generated list down to its selected items, preserving the
    /// list's order.
    pub fn selected_from(&self, items: &[String]) -> Vec<String> {
        items
            .iter()
            .filter(|item| self.is_selected(item))
            .cloned()
            .collect()
    }

    /// Drop every selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Number of selected items.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
