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

//! Primitive token helpers.

use std::fmt;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A byte range into the parsed telegram.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of the span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the span covers no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A slice of the telegram which remembers its offset.
///
/// All splitting keeps the offset of the resulting pieces, so a diagnostic
/// can always point to the exact position in the original telegram.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Token<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str, offset: usize) -> Self {
        Self { text, offset }
    }

    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the span of this token in the telegram.
    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.offset, self.offset + self.text.len())
    }

    /// Returns the token with leading and trailing whitespace removed.
    pub fn trim(&self) -> Self {
        let start = self.text.len() - self.text.trim_start().len();
        Self::new(self.text.trim(), self.offset + start)
    }

    /// Returns the fixed-width piece in the byte range, if the token is long
    /// enough.
    pub fn slice(&self, range: Range<usize>) -> Option<Self> {
        self.text
            .get(range.clone())
            .map(|text| Self::new(text, self.offset + range.start))
    }

    /// Returns everything from the byte index to the end.
    pub fn tail(&self, from: usize) -> Option<Self> {
        self.slice(from..self.text.len())
    }

    /// Splits the token at the byte index.
    pub fn split_at(&self, mid: usize) -> Option<(Self, Self)> {
        if self.text.is_char_boundary(mid) && mid <= self.text.len() {
            let (a, b) = self.text.split_at(mid);
            Some((Self::new(a, self.offset), Self::new(b, self.offset + mid)))
        } else {
            None
        }
    }

    /// Splits the token at the first occurrence of the delimiter, which is
    /// removed.
    pub fn split_once(&self, delimiter: char) -> Option<(Self, Self)> {
        let mid = self.text.find(delimiter)?;
        let (a, b) = self.split_at(mid)?;
        Some((a, b.tail(delimiter.len_utf8())?))
    }

    /// Splits the token at any of the delimiters and drops empty pieces.
    pub fn split(&self, delimiters: &[char]) -> Vec<Self> {
        let mut tokens = Vec::new();
        let mut start = 0;

        for (i, c) in self.text.char_indices() {
            if delimiters.contains(&c) {
                if i > start {
                    tokens.push(Self::new(&self.text[start..i], self.offset + start));
                }
                start = i + c.len_utf8();
            }
        }

        if start < self.text.len() {
            tokens.push(Self::new(&self.text[start..], self.offset + start));
        }

        tokens
    }

    /// Splits the token at ASCII whitespace.
    pub fn split_whitespace(&self) -> Vec<Self> {
        self.split(&[' ', '\t', '\r', '\n'])
    }

    /// Returns the length of the leading run of bytes matching the predicate.
    pub fn leading(&self, predicate: impl Fn(u8) -> bool) -> usize {
        self.text.bytes().take_while(|&b| predicate(b)).count()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// Returns `true` if the text is not empty and contains only upper case
/// letters.
#[inline]
pub fn is_alpha(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_uppercase())
}

/// Returns `true` if the text is not empty and contains only digits.
#[inline]
pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` if the text is not empty and contains only upper case
/// letters and digits.
#[inline]
pub fn is_alphanumeric(s: &str) -> bool {
    !s.is_empty()
        && s
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

/// Returns `true` if the text contains only characters allowed in free text.
///
/// Free text may be empty and contains upper case letters, digits, spaces and
/// the characters `:`, `/` and `.`.
#[inline]
pub fn is_free_text(s: &str) -> bool {
    s.bytes().all(|b| {
        b.is_ascii_uppercase()
            || b.is_ascii_digit()
            || matches!(b, b' ' | b':' | b'/' | b'.' | b'\r' | b'\n' | b'\t')
    })
}

/// Collapses all whitespace of a free text to single spaces.
pub fn normalize(s: &str) -> String {
    s.split_ascii_whitespace().collect::<Vec<_>>().join(" ")
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_offsets() {
        let token = Token::new("  EGLL1000  LFPG ", 10);
        let words = token.split_whitespace();

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].as_str(), "EGLL1000");
        assert_eq!(words[0].span(), Span::new(12, 20));
        assert_eq!(words[1].as_str(), "LFPG");
        assert_eq!(words[1].offset(), 22);
    }

    #[test]
    fn split_once_drops_delimiter() {
        let token = Token::new("BAW123/A1234", 4);
        let (ident, ssr) = token.split_once('/').expect("token should split");

        assert_eq!(ident.as_str(), "BAW123");
        assert_eq!(ssr.as_str(), "A1234");
        assert_eq!(ssr.offset(), 11);
        assert!(Token::new("BAW123", 0).split_once('/').is_none());
    }

    #[test]
    fn trim_moves_offset() {
        let token = Token::new("\n EGLL ", 3).trim();
        assert_eq!(token.as_str(), "EGLL");
        assert_eq!(token.offset(), 5);
    }

    #[test]
    fn slice_out_of_bounds() {
        let token = Token::new("EGLL", 0);
        assert_eq!(token.slice(0..4).map(|t| t.as_str()), Some("EGLL"));
        assert!(token.slice(2..6).is_none());
    }

    #[test]
    fn character_classes() {
        assert!(is_alpha("EGLL"));
        assert!(!is_alpha("EG1L"));
        assert!(!is_alpha(""));
        assert!(is_digits("0230"));
        assert!(!is_digits("02A0"));
        assert!(is_alphanumeric("BAW123"));
        assert!(!is_alphanumeric("baw123"));
        assert!(is_free_text("TCAS EQUIPPED 1/2"));
        assert!(!is_free_text("A-B"));
    }
}
