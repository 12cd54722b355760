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

//! Tracking list editor.
//!
//! A multi-line text area that receives the identifiers pasted from a
//! spreadsheet, together with a live preview of what the tokenizer
//! recognises in it. The preview is recomputed whenever the text changes so
//! the user can check the parse before starting playback.

mod event;
mod render;

use crate::model::{IdentifierList, tokenize::tokenize};

/// Number of parsed identifiers listed in the preview.
pub(crate) const PREVIEW_LIMIT: usize = 10;

#[derive(Debug, Default)]
pub(crate) struct TrackingInput {
    text: String,
    preview: IdentifierList,
    pub(crate) is_active: bool,
}

impl TrackingInput {
    pub(crate) fn new(text: String) -> Self {
        let preview = tokenize(&text);
        Self {
            text,
            preview,
            is_active: false,
        }
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    /// Everything the tokenizer currently recognises in the text.
    pub(crate) fn parsed(&self) -> &IdentifierList {
        &self.preview
    }

    pub(crate) fn clear(&mut self) {
        self.edit(String::clear);
    }

    fn edit(&mut self, f: impl FnOnce(&mut String)) {
        f(&mut self.text);
        self.preview = tokenize(&self.text);
    }
}
