// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Domain models and core data structures.
//!
//! This module defines the central entities of the player: the ordered list
//! of tracking identifiers produced by the tokenizer, the playback state
//! machine that walks through it, and the viewport-derived presentation size
//! used when drawing each code.

pub(crate) mod playback;
pub(crate) mod sizing;
pub(crate) mod tokenize;

use std::sync::Arc;

/// An ordered, immutable list of tracking identifiers.
///
/// Insertion order is presentation order and duplicates are preserved. A new
/// parse always produces a new list; existing lists are never edited in place,
/// so cloning only bumps a reference count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct IdentifierList {
    items: Arc<[String]>,
}

impl IdentifierList {
    pub(crate) fn new(items: Vec<String>) -> Self {
        Self {
            items: items.into(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Returns at most `limit` identifiers from the front of the list.
    pub(crate) fn preview(&self, limit: usize) -> &[String] {
        &self.items[..self.items.len().min(limit)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_is_bounded_by_list_length() {
        let list = IdentifierList::new(vec!["a".into(), "b".into(), "c".into()]);

        assert_eq!(list.preview(10).len(), 3);
        assert_eq!(list.preview(2), &["a".to_string(), "b".to_string()]);
        assert!(IdentifierList::default().preview(10).is_empty());
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        let list = IdentifierList::new(vec!["7".into(), "7".into(), "1".into()]);

        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["7", "7", "1"]);
        assert_eq!(list.get(1), Some("7"));
        assert_eq!(list.get(3), None);
    }
}
