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

//! Field 16: destination aerodrome, total estimated elapsed time and
//! alternate aerodromes.
//!
//! The lettered variants carry a subset of the subfields:
//!
//! | Field    | Aerodrome | EET | Alternates |
//! |----------|-----------|-----|------------|
//! | `F16`    | yes       | yes | 0 to 2     |
//! | `F16a`   | yes       | no  | 0          |
//! | `F16ab`  | yes       | yes | 0          |
//! | `F16abc` | yes       | yes | 1          |

use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::common::{parse_elapsed, Aerodrome};
use crate::diagnostic::Report;
use crate::field::{FieldText, Parsed};
use crate::fields::f13::aerodrome_and_time;
use crate::{FieldId, SubFieldId};

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Destination {
    pub aerodrome: Aerodrome,
    /// The total estimated elapsed time.
    pub eet: Option<Duration>,
    pub alternates: Vec<Aerodrome>,
}

/// Parses any field of the field 16 family, e.g. `LFPG0200 LFPO LFOB`.
pub fn parse(input: FieldText<'_>) -> Parsed<Destination> {
    let (with_eet, alternates) = subfields(input.id());

    let mut report = Report::new(input.id());
    let token = input.token().trim();

    let words = token.split_whitespace();
    let Some(&word) = words.first() else {
        report.empty(token);
        return report.finish(None);
    };

    let (aerodrome, eet) = aerodrome_and_time(&mut report, word, SubFieldId::F16a);

    let eet = match (eet, with_eet) {
        (Some(eet), true) => report.check(
            parse_elapsed(eet.as_str()),
            SubFieldId::F16b,
            eet,
            "an elapsed time HHMM",
        ),
        (None, true) => {
            report.missing(SubFieldId::F16b, word.span().end, "an elapsed time HHMM");
            None
        }
        (Some(eet), false) => {
            report.surplus(&[eet]);
            None
        }
        (None, false) => None,
    };

    let mut found = Vec::new();

    let given = &words[1..];
    let (allowed, surplus) = given.split_at((*alternates.end()).min(given.len()));

    for (i, &alternate) in allowed.iter().enumerate() {
        let subfield = if i == 0 {
            SubFieldId::F16c
        } else {
            SubFieldId::F16d
        };

        if let Some(alternate) = report.check(
            alternate.as_str().parse(),
            subfield,
            alternate,
            "an aerodrome location indicator",
        ) {
            found.push(alternate);
        }
    }

    if given.len() < *alternates.start() {
        report.missing(SubFieldId::F16c, token.span().end, "an alternate aerodrome");
    }

    report.surplus(surplus);

    report.finish(aerodrome.map(|aerodrome| Destination {
        aerodrome,
        eet,
        alternates: found,
    }))
}

/// Returns if the field has an EET and how many alternates it allows.
fn subfields(id: FieldId) -> (bool, RangeInclusive<usize>) {
    match id {
        FieldId::F16a => (false, 0..=0),
        FieldId::F16ab => (true, 0..=0),
        FieldId::F16abc => (true, 1..=1),
        _ => (true, 0..=2),
    }
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorId;

    fn f16(id: FieldId, s: &str) -> Parsed<Destination> {
        parse(FieldText::new(id, s, 0))
    }

    #[test]
    fn destination_with_alternates() {
        let parsed = f16(FieldId::F16, "LFPG0200 LFPO LFOB");
        assert!(parsed.is_clean());

        let destination = parsed.value.expect("destination should parse");
        assert_eq!(destination.aerodrome.as_str(), "LFPG");
        assert_eq!(destination.eet, Some(Duration::hours(2)));
        assert_eq!(destination.alternates.len(), 2);
    }

    #[test]
    fn too_many_alternates() {
        let parsed = f16(FieldId::F16, "LFPG0200 LFPO LFOB LFOK");
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].error, ErrorId::TooManySubFields);
    }

    #[test]
    fn lettered_variants() {
        assert!(f16(FieldId::F16a, "LFPG").is_clean());
        assert!(f16(FieldId::F16ab, "LFPG0130").is_clean());
        assert!(f16(FieldId::F16abc, "LFPG0130 LFPO").is_clean());

        let parsed = f16(FieldId::F16a, "LFPG0130");
        assert_eq!(parsed.diagnostics[0].error, ErrorId::TooManySubFields);

        let parsed = f16(FieldId::F16ab, "LFPG");
        assert_eq!(parsed.diagnostics[0].error, ErrorId::MissingSubField);

        let parsed = f16(FieldId::F16abc, "LFPG0130");
        assert_eq!(parsed.diagnostics[0].subfield, Some(SubFieldId::F16c));
    }

    #[test]
    fn invalid_destination_still_checks_the_rest() {
        let parsed = f16(FieldId::F16, "LF1G0275 XX1 LFPO");
        assert!(parsed.value.is_none());

        let found: Vec<_> = parsed
            .diagnostics
            .iter()
            .map(|d| (d.error, d.subfield, d.span.start))
            .collect();

        assert_eq!(
            found,
            vec![
                (ErrorId::InvalidSubFieldSyntax, Some(SubFieldId::F16a), 0),
                (ErrorId::OutOfRangeValue, Some(SubFieldId::F16b), 4),
                (ErrorId::InvalidSubFieldSyntax, Some(SubFieldId::F16c), 9),
            ]
        );
    }

    #[test]
    fn long_elapsed_time() {
        let parsed = f16(FieldId::F16, "NZAA2630");
        assert!(parsed.is_clean());

        let parsed = f16(FieldId::F16, "NZAA2675");
        assert_eq!(parsed.diagnostics[0].error, ErrorId::OutOfRangeValue);
        assert_eq!(parsed.value.map(|d| d.aerodrome.to_string()), Some("NZAA".to_string()));
    }
}
