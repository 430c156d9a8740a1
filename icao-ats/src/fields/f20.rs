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

//! Field 20: alerting search and rescue information.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::Time;

use crate::common::{parse_frequency, parse_time, Point};
use crate::diagnostic::Report;
use crate::field::{FieldText, Parsed};
use crate::utils::{is_free_text, normalize, Token};
use crate::{ErrorId, SubFieldId};

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Alerting {
    pub operator: String,
    /// The unit which made the last contact.
    pub unit: String,
    /// The time of the last two-way contact.
    pub last_contact: Option<Time>,
    pub frequency: Option<String>,
    pub position: Option<Point>,
    /// How the last known position was determined.
    pub method: String,
    /// The action taken by the reporting unit.
    pub action: String,
    pub remarks: String,
}

const SUBFIELDS: [(SubFieldId, &str); 8] = [
    (SubFieldId::F20a, "the operator"),
    (SubFieldId::F20b, "the unit which made the last contact"),
    (SubFieldId::F20c, "the time of last two-way contact HHMM"),
    (SubFieldId::F20d, "the last contact frequency"),
    (SubFieldId::F20e, "the last reported position"),
    (SubFieldId::F20f, "the method of determining the position"),
    (SubFieldId::F20g, "the action taken"),
    (SubFieldId::F20h, "other pertinent information"),
];

pub fn parse(input: FieldText<'_>) -> Parsed<Alerting> {
    let mut report = Report::new(input.id());
    let token = input.token().trim();

    let words = subfields(token, SUBFIELDS.len());
    if words.is_empty() {
        report.empty(token);
        return report.finish(None);
    }

    let mut alerting = Alerting::default();

    for (i, &(subfield, expected)) in SUBFIELDS.iter().enumerate() {
        let Some(&word) = words.get(i) else {
            report.missing(subfield, token.span().end, expected);
            break;
        };

        let s = word.as_str();
        match i {
            2 => alerting.last_contact = report.check(parse_time(s), subfield, word, expected),
            3 => alerting.frequency = report.check(parse_frequency(s), subfield, word, expected),
            4 => alerting.position = report.check(s.parse(), subfield, word, expected),
            _ => {
                if !is_free_text(s) {
                    report.invalid(ErrorId::InvalidSubFieldSyntax, subfield, word, "free text");
                }

                let text = normalize(s);
                match i {
                    0 => alerting.operator = text,
                    1 => alerting.unit = text,
                    5 => alerting.method = text,
                    6 => alerting.action = text,
                    _ => alerting.remarks = text,
                }
            }
        }
    }

    report.finish(Some(alerting))
}

/// Splits the token into at most `n` whitespace separated subfields where
/// the last one takes the remaining text.
pub(crate) fn subfields(token: Token<'_>, n: usize) -> Vec<Token<'_>> {
    let mut words = token.split_whitespace();

    if words.len() > n {
        let last = &words[n - 1];
        let rest = token
            .tail(last.offset() - token.offset())
            .unwrap_or(*last);
        words.truncate(n - 1);
        words.push(rest);
    }

    words
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////
