// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Field parsers.
//!
//! Every field has a module with a `parse` function that takes the
//! [`FieldText`](crate::FieldText) of the field and returns the
//! [`Parsed`](crate::Parsed) value. Lettered fields which carry a subset of
//! their family's subfields are parsed by a sibling function, e.g.
//! [`f13::parse_aerodrome`] for field 13a.

use std::ops::RangeInclusive;

use crate::utils::Token;

pub mod f3;
pub mod f5;
pub mod f7;
pub mod f8;
pub mod f9;
pub mod f10;
pub mod f13;
pub mod f14;
pub mod f15;
pub mod f16;
pub mod f17;
pub mod f18;
pub mod f19;
pub mod f20;
pub mod f21;
pub mod f22;
pub mod mfs;

/// A `LABEL/value` group of the fields 18 and 19.
pub(crate) struct Group<'a> {
    pub label: Token<'a>,
    pub value: Token<'a>,
}

/// Splits the token into labelled groups.
///
/// A label has `label_len` upper case letters followed by `/` and starts the
/// token or follows whitespace. Returns the text before the first label and
/// the groups.
pub(crate) fn groups(
    token: Token<'_>,
    label_len: RangeInclusive<usize>,
) -> (Token<'_>, Vec<Group<'_>>) {
    let bytes = token.as_str().as_bytes();
    let mut labels: Vec<(usize, usize)> = Vec::new();

    for i in 0..bytes.len() {
        if i > 0 && !bytes[i - 1].is_ascii_whitespace() {
            continue;
        }

        let len = bytes[i..]
            .iter()
            .take_while(|b| b.is_ascii_uppercase())
            .count();

        if label_len.contains(&len) && bytes.get(i + len) == Some(&b'/') {
            labels.push((i, len));
        }
    }

    let end = token.len();
    let leading = match labels.first() {
        Some(&(start, _)) => token.slice(0..start),
        None => Some(token),
    }
    .map(|t| t.trim())
    .unwrap_or(token);

    let groups = labels
        .iter()
        .enumerate()
        .filter_map(|(n, &(start, len))| {
            let next = labels.get(n + 1).map_or(end, |&(next, _)| next);
            Some(Group {
                label: token.slice(start..start + len)?,
                value: token.slice(start + len + 1..next)?.trim(),
            })
        })
        .collect();

    (leading, groups)
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_groups() {
        let (leading, groups) = groups(Token::new("DOF/240315 RMK/TCAS 1/2 EQUIPPED", 10), 3..=4);

        assert!(leading.is_empty());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label.as_str(), "DOF");
        assert_eq!(groups[0].value.as_str(), "240315");
        assert_eq!(groups[1].value.as_str(), "TCAS 1/2 EQUIPPED");
        assert_eq!(groups[1].value.offset(), 25);
    }

    #[test]
    fn keeps_leading_text() {
        let (leading, groups) = groups(Token::new("HELLO RMK/NIL", 0), 3..=4);
        assert_eq!(leading.as_str(), "HELLO");
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn label_needs_whitespace() {
        let (_, groups) = groups(Token::new("RMK/A/B XRMK/C", 0), 3..=3);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].value.as_str(), "A/B XRMK/C");
    }
}
