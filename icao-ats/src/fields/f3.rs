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

//! Field 3: message title.
//!
//! The title is optionally followed by the OLDI message number of the sending
//! unit (3b) and the number of the message being answered (3c), e.g.
//! `ACPRL/PL058PL/RL123`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::diagnostic::Report;
use crate::field::{FieldText, Parsed};
use crate::title::MessageTitle;
use crate::utils::Token;
use crate::{ErrorId, SubFieldId};

/// An OLDI message number, e.g. `PL/RL123`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MessageNumber {
    pub sender: String,
    pub receiver: String,
    pub number: u16,
}

/// The content of field 3.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Title {
    /// The title as written, even if it is not known.
    pub code: String,
    pub title: Option<MessageTitle>,
    pub number: Option<MessageNumber>,
    pub reference: Option<MessageNumber>,
}

pub fn parse(input: FieldText<'_>) -> Parsed<Title> {
    let mut report = Report::new(input.id());
    let token = input.token().trim();

    let words = token.split_whitespace();
    let Some(word) = words.first() else {
        report.empty(token);
        return report.finish(None);
    };
    report.surplus(&words[1..]);

    let (code, rest) = word.split_at(3.min(word.len())).unwrap_or((*word, Token::new("", 0)));

    let title = report.check(
        code.as_str().parse::<MessageTitle>(),
        SubFieldId::F3a,
        code,
        "a message title such as FPL",
    );

    let mut value = Title {
        code: code.as_str().to_string(),
        title,
        number: None,
        reference: None,
    };

    let mut rest = rest;
    for subfield in [SubFieldId::F3b, SubFieldId::F3c] {
        if rest.is_empty() {
            break;
        }

        match message_number(rest) {
            Some((number, len)) => {
                match subfield {
                    SubFieldId::F3b => value.number = Some(number),
                    _ => value.reference = Some(number),
                }
                rest = rest.tail(len).unwrap_or(Token::new("", rest.span().end));
            }
            None => {
                report.invalid(
                    ErrorId::InvalidSubFieldSyntax,
                    subfield,
                    rest,
                    "a message number such as PL/RL123",
                );
                return report.finish(Some(value));
            }
        }
    }

    if !rest.is_empty() {
        report.surplus(&[rest]);
    }

    report.finish(Some(value))
}

/// Reads a message number from the start of the token and returns it with
/// the number of bytes it spans.
fn message_number(token: Token<'_>) -> Option<(MessageNumber, usize)> {
    let s = token.as_str();

    let sender = token.leading(|b| b.is_ascii_uppercase());
    if !(1..=4).contains(&sender) || s.as_bytes().get(sender) != Some(&b'/') {
        return None;
    }

    let receiver = token
        .tail(sender + 1)?
        .leading(|b| b.is_ascii_uppercase());
    if !(1..=4).contains(&receiver) {
        return None;
    }

    let start = sender + 1 + receiver;
    let number = digits!(s, start..start + 3, u16)?;

    Some((
        MessageNumber {
            sender: s[..sender].to_string(),
            receiver: s[sender + 1..start].to_string(),
            number,
        },
        start + 3,
    ))
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////
