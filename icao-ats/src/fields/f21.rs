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

//! Field 21: radio failure information.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::Time;

use crate::common::{parse_frequency, parse_time, Point};
use crate::diagnostic::Report;
use crate::field::{FieldText, Parsed};
use crate::fields::f20::subfields;
use crate::utils::{is_free_text, normalize};
use crate::{ErrorId, SubFieldId};

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RadioFailure {
    /// The time of the last two-way contact.
    pub last_contact: Option<Time>,
    pub frequency: Option<String>,
    pub position: Option<Point>,
    /// The time at the last reported position.
    pub position_time: Option<Time>,
    /// The remaining communication capability.
    pub capability: String,
    pub remarks: String,
}

const SUBFIELDS: [(SubFieldId, &str); 6] = [
    (SubFieldId::F21a, "the time of last two-way contact HHMM"),
    (SubFieldId::F21b, "the last contact frequency"),
    (SubFieldId::F21c, "the last reported position"),
    (SubFieldId::F21d, "the time at the last reported position HHMM"),
    (SubFieldId::F21e, "the remaining COM capability"),
    (SubFieldId::F21f, "any necessary remarks"),
];

pub fn parse(input: FieldText<'_>) -> Parsed<RadioFailure> {
    let mut report = Report::new(input.id());
    let token = input.token().trim();

    let words = subfields(token, SUBFIELDS.len());
    if words.is_empty() {
        report.empty(token);
        return report.finish(None);
    }

    let mut failure = RadioFailure::default();

    for (i, &(subfield, expected)) in SUBFIELDS.iter().enumerate() {
        let Some(&word) = words.get(i) else {
            report.missing(subfield, token.span().end, expected);
            break;
        };

        let s = word.as_str();
        match i {
            0 => failure.last_contact = report.check(parse_time(s), subfield, word, expected),
            1 => failure.frequency = report.check(parse_frequency(s), subfield, word, expected),
            2 => failure.position = report.check(s.parse(), subfield, word, expected),
            3 => failure.position_time = report.check(parse_time(s), subfield, word, expected),
            _ => {
                if !is_free_text(s) {
                    report.invalid(ErrorId::InvalidSubFieldSyntax, subfield, word, "free text");
                }

                match i {
                    4 => failure.capability = normalize(s),
                    _ => failure.remarks = normalize(s),
                }
            }
        }
    }

    report.finish(Some(failure))
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldId;

    fn f21(s: &str) -> Parsed<RadioFailure> {
        parse(FieldText::new(FieldId::F21, s, 0))
    }

    #[test]
    fn radio_failure() {
        let parsed = f21("1232 121.3 CLA 1229 TRANSMITTING ONLY 126.7 MHZ");
        assert!(parsed.is_clean(), "{:?}", parsed.diagnostics);

        let failure = parsed.value.expect("radio failure should parse");
        assert_eq!(failure.last_contact, Time::from_hms(12, 32, 0).ok());
        assert_eq!(failure.position_time, Time::from_hms(12, 29, 0).ok());
        assert_eq!(failure.capability, "TRANSMITTING");
        assert_eq!(failure.remarks, "ONLY 126.7 MHZ");
    }

    #[test]
    fn invalid_frequency() {
        let parsed = f21("1232 1213 CLA 1229 NIL NIL");
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].subfield, Some(SubFieldId::F21b));
    }

    #[test]
    fn truncated() {
        let parsed = f21("1232 121.3");
        assert_eq!(parsed.diagnostics[0].error, ErrorId::MissingSubField);
        assert_eq!(parsed.diagnostics[0].subfield, Some(SubFieldId::F21c));
    }
}
