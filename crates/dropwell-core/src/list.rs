//! Editable list of short text items.

use serde::{Deserialize, Serialize};

/// Errors returned by [`ItemList`] edits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// The submitted item was empty.
    #[error("Please enter a non-empty item.")]
    EmptyItem,
}

/// A list of strings with at most one item open for editing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemList {
    items: Vec<String>,
    #[serde(skip)]
    active: Option<usize>,
}

impl ItemList {
    /// Wrap existing items. No item starts in edit mode.
    #[must_use]
    pub const fn new(items: Vec<String>) -> Self {
        Self {
            items,
            active: None,
        }
    }

    /// The items, in order.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Consume the list, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<String> {
        self.items
    }

    /// Index of the item open for editing.
    #[must_use]
    pub const fn active(&self) -> Option<usize> {
        self.active
    }

    /// Open the editor for item `index`.
    pub const fn open_editor(&mut self, index: usize) {
        self.active = Some(index);
    }

    /// Close any open editor.
    pub const fn close_editor(&mut self) {
        self.active = None;
    }

    /// Append an item.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyItem`] if `item` is empty.
    pub fn add(&mut self, item: impl Into<String>) -> Result<(), ListError> {
        let item = item.into();
        if item.is_empty() {
            return Err(ListError::EmptyItem);
        }
        self.items.push(item);
        Ok(())
    }

    /// Replace item `index` and close the editor.
    ///
    /// An out-of-range index leaves the items unchanged but still closes
    /// the editor.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyItem`] if `item` is empty; the editor
    /// stays open in that case.
    pub fn replace(&mut self, index: usize, item: impl Into<String>) -> Result<(), ListError> {
        let item = item.into();
        if item.is_empty() {
            return Err(ListError::EmptyItem);
        }
        if let Some(slot) = self.items.get_mut(index) {
            *slot = item;
        }
        self.close_editor();
        Ok(())
    }

    /// Remove item `index`. Returns the removed item, or `None` when out
    /// of range.
    pub fn delete(&mut self, index: usize) -> Option<String> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        match self.active {
            Some(a) if a == index => self.active = None,
            Some(a) if a > index => self.active = Some(a - 1),
            _ => {}
        }
        Some(removed)
    }
}
