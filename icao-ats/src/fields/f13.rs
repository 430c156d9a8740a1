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

//! Field 13: departure aerodrome and time.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::Time;

use crate::common::{parse_time, Aerodrome};
use crate::diagnostic::Report;
use crate::field::{FieldText, Parsed};
use crate::utils::Token;
use crate::{ErrorId, SubFieldId};

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Departure {
    pub aerodrome: Aerodrome,
    /// The estimated off-block time, or the actual time of departure.
    pub time: Option<Time>,
}

/// Parses field 13 with aerodrome and time, e.g. `EGLL1000`.
pub fn parse(input: FieldText<'_>) -> Parsed<Departure> {
    let mut report = Report::new(input.id());

    let Some(word) = single_word(&mut report, input.token()) else {
        return report.finish(None);
    };

    let (aerodrome, time) = aerodrome_and_time(&mut report, word, SubFieldId::F13a);

    let time = match time {
        Some(time) => {
            report.check(parse_time(time.as_str()), SubFieldId::F13b, time, "a time HHMM")
        }
        None => {
            report.missing(SubFieldId::F13b, word.span().end, "a time HHMM");
            None
        }
    };

    report.finish(aerodrome.map(|aerodrome| Departure { aerodrome, time }))
}

/// Parses field 13a with the aerodrome only.
pub fn parse_aerodrome(input: FieldText<'_>) -> Parsed<Aerodrome> {
    let mut report = Report::new(input.id());

    let Some(word) = single_word(&mut report, input.token()) else {
        return report.finish(None);
    };

    let aerodrome = report.check(
        word.as_str().parse(),
        SubFieldId::F13a,
        word,
        "an aerodrome location indicator",
    );

    report.finish(aerodrome)
}

/// Returns the only word of a field and reports surplus words.
pub(crate) fn single_word<'a>(report: &mut Report, token: Token<'a>) -> Option<Token<'a>> {
    let token = token.trim();
    let words = token.split_whitespace();

    match words.first() {
        Some(&word) => {
            report.surplus(&words[1..]);
            Some(word)
        }
        None => {
            report.empty(token);
            None
        }
    }
}

/// Splits a word into the leading aerodrome and the rest.
///
/// The aerodrome is `None` if it is invalid. The rest is `None` if the word
/// has only four characters, so the caller can check it either way.
pub(crate) fn aerodrome_and_time<'a>(
    report: &mut Report,
    word: Token<'a>,
    subfield: SubFieldId,
) -> (Option<Aerodrome>, Option<Token<'a>>) {
    let Some((aerodrome, rest)) = word.split_at(4.min(word.len())) else {
        report.invalid(
            ErrorId::InvalidSubFieldSyntax,
            subfield,
            word,
            "an aerodrome location indicator",
        );
        return (None, None);
    };

    let aerodrome = report.check(
        aerodrome.as_str().parse(),
        subfield,
        aerodrome,
        "an aerodrome location indicator",
    );

    (aerodrome, (!rest.is_empty()).then_some(rest))
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldId;

    fn f13(s: &str) -> Parsed<Departure> {
        parse(FieldText::new(FieldId::F13, s, 0))
    }

    #[test]
    fn aerodrome_with_time() {
        let parsed = f13("EGLL1200");
        assert!(parsed.is_clean());

        let departure = parsed.value.expect("departure should parse");
        assert_eq!(departure.aerodrome.as_str(), "EGLL");
        assert_eq!(departure.time, Time::from_hms(12, 0, 0).ok());
    }

    #[test]
    fn time_boundary() {
        assert!(f13("EGLL2359").is_clean());

        let parsed = f13("EGLL2400");
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].error, ErrorId::OutOfRangeValue);
        assert_eq!(parsed.diagnostics[0].subfield, Some(SubFieldId::F13b));
    }

    #[test]
    fn out_of_range_keeps_aerodrome() {
        let parsed = parse(FieldText::new(FieldId::F13, "XXYY9999", 5));
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].error, ErrorId::OutOfRangeValue);
        assert_eq!(parsed.diagnostics[0].span.start, 9);

        let departure = parsed.value.expect("aerodrome should be kept");
        assert_eq!(departure.aerodrome.as_str(), "XXYY");
        assert_eq!(departure.time, None);
    }

    #[test]
    fn aerodrome_only() {
        let parsed = parse_aerodrome(FieldText::new(FieldId::F13a, "EGLL", 0));
        assert!(parsed.is_clean());

        let parsed = parse_aerodrome(FieldText::new(FieldId::F13a, "EGLL1000", 0));
        assert_eq!(parsed.diagnostics[0].error, ErrorId::InvalidSubFieldSyntax);
    }

    #[test]
    fn invalid_aerodrome_still_checks_time() {
        let parsed = f13("EG1L2400");
        assert!(parsed.value.is_none());

        let found: Vec<_> = parsed
            .diagnostics
            .iter()
            .map(|d| (d.error, d.subfield, d.span.start))
            .collect();

        assert_eq!(
            found,
            vec![
                (ErrorId::InvalidSubFieldSyntax, Some(SubFieldId::F13a), 0),
                (ErrorId::OutOfRangeValue, Some(SubFieldId::F13b), 4),
            ]
        );
    }

    #[test]
    fn empty_field() {
        let parsed = f13("");
        assert_eq!(parsed.diagnostics[0].error, ErrorId::EmptyField);
        assert!(parsed.value.is_none());
    }
}
