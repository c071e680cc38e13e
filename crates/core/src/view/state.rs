//! Sort header state.

use serde::{Deserialize, Serialize};

use super::sort::SortKey;

/// Active sort key and reverse flag as driven by sort header clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub reverse: bool,
}

impl SortState {
    pub fn new(key: SortKey, reverse: bool) -> Self {
        Self { key, reverse }
    }

    /// Handle a click on the header for `key`.
    ///
    /// Selecting the already active key sets `reverse`; selecting any other
    /// key clears it. Repeated clicks on the active key keep it reversed.
    pub fn on_sort(&mut self, key: SortKey) {
        self.reverse = key == self.key;
        self.key = key;
    }

    /// Whether `key` is the active sort key.
    pub fn is_active(&self, key: SortKey) -> bool {
        self.key == key
    }
}
