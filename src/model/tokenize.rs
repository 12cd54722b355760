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

//! Splitting pasted text into tracking identifiers.
//!
//! Identifiers copied out of a spreadsheet column arrive separated by
//! newlines, tabs, spaces, commas or semicolons, usually with a mix of all of
//! them. Any run of those separators splits two identifiers; the content of an
//! identifier itself is never validated.

use crate::model::IdentifierList;

// U+FEFF is included because spreadsheet exports often start with a BOM.
// `char::is_whitespace` also splits on U+0085 (NEL), which stays a separator.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | ';' | '\u{FEFF}')
}

/// Splits `raw` into an ordered list of non-empty identifiers.
///
/// # Examples
///
/// ```ignore
/// let list = tokenize("a, b;c\nd");
/// assert_eq!(list.iter().collect::<Vec<_>>(), ["a", "b", "c", "d"]);
/// ```
pub(crate) fn tokenize(raw: &str) -> IdentifierList {
    let items = raw
        .split(is_separator)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect();

    IdentifierList::new(items)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn tokens(raw: &str) -> Vec<String> {
        tokenize(raw).iter().map(str::to_owned).collect()
    }

    #[test]
    fn empty_input_gives_empty_list() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n\t,;; ").is_empty());
    }

    #[test]
    fn mixed_separators() {
        assert_eq!(tokens("a, b;c\nd"), ["a", "b", "c", "d"]);
        assert_eq!(tokens("100,200;300 400"), ["100", "200", "300", "400"]);
    }

    #[test]
    fn consecutive_separators_collapse() {
        assert_eq!(tokens("  a   b  "), ["a", "b"]);
        assert_eq!(tokens("a,,;\r\n\t\tb"), ["a", "b"]);
    }

    #[test]
    fn spreadsheet_column_with_bom_and_crlf() {
        assert_eq!(
            tokens("\u{FEFF}SF1234567890\r\nYT9876543210\r\n"),
            ["SF1234567890", "YT9876543210"]
        );
    }

    #[test]
    fn next_line_control_separates() {
        assert_eq!(tokens("a\u{85}b"), ["a", "b"]);
    }

    #[test]
    fn identifier_content_is_not_validated() {
        assert_eq!(tokens("x-1 #2 运单3"), ["x-1", "#2", "运单3"]);
    }

    proptest! {
        #[test]
        fn tokens_never_empty_or_contain_separators(raw in ".{0,64}") {
            for token in tokenize(&raw).iter() {
                prop_assert!(!token.is_empty());
                prop_assert!(!token.chars().any(is_separator));
            }
        }

        #[test]
        fn joined_tokens_reparse_identically(raw in "[a-z0-9,; \n\t]{0,64}") {
            let first = tokenize(&raw);
            let joined = first.iter().collect::<Vec<_>>().join("\n");
            prop_assert_eq!(tokenize(&joined), first);
        }
    }
}
