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

//! The AFTN header in front of the message body.
//!
//! A header such as
//!
//! ```text
//! FF EGZZFPLX LFPYZQZX
//! 121200 EGLLZPZX
//! ```
//!
//! has the priority indicator, the addressees, the filing time, the
//! originator and optionally additional addressees.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::common::{Address, DayTime, Priority};
use crate::diagnostic::{Diagnostic, Report};
use crate::utils::{Span, Token};
use crate::{ErrorId, FieldId, SubFieldId};

/// The default limit of addressees in a header.
pub const MAX_ADDRESSEES: usize = 21;

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Header {
    pub priority: Option<Priority>,
    pub addressees: Vec<Address>,
    pub filing_time: Option<DayTime>,
    pub originator: Option<Address>,
    pub additional_addressees: Vec<Address>,
}

impl Header {
    /// Returns `true` if the telegram had no header.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Parses the header which is the text in front of the body.
///
/// A blank header is no error. Otherwise every part is checked even if a
/// previous part is broken.
pub(crate) fn parse(token: Token<'_>, max_addressees: usize) -> (Header, Vec<Diagnostic>) {
    let token = token.trim();
    let words = token.split_whitespace();

    let Some((&priority, rest)) = words.split_first() else {
        return (Header::default(), Vec::new());
    };

    let count = rest
        .iter()
        .take_while(|word| !word.as_str().starts_with(|c: char| c.is_ascii_digit()))
        .count();
    let (addressees, rest) = rest.split_at(count);
    let filing_time = rest.first().copied();
    let originator = rest.get(1).copied();
    let additional = rest.get(2..).unwrap_or_default();

    // each part reports against its own field
    let end = token.span().end;
    let mut diagnostics = Vec::new();
    let mut header = Header::default();

    let mut report = Report::new(FieldId::Priority);
    header.priority = report.check(
        priority.as_str().parse(),
        SubFieldId::Priority,
        priority,
        "one of SS DD FF GG KK",
    );
    diagnostics.extend(report.into_diagnostics());

    let mut report = Report::new(FieldId::Addressee);
    if addressees.is_empty() {
        let at = priority.span().end;
        report.push(
            ErrorId::EmptyField,
            Some(SubFieldId::Address),
            Span::new(at, at),
            "the header has no addressee",
        );
    }
    let (addressees, surplus) = addressees.split_at(max_addressees.min(addressees.len()));
    header.addressees = addresses(&mut report, addressees, SubFieldId::Address);
    report.surplus(surplus);
    diagnostics.extend(report.into_diagnostics());

    let mut report = Report::new(FieldId::AdditionalAddressee);
    header.additional_addressees =
        addresses(&mut report, additional, SubFieldId::AdditionalAddress);
    diagnostics.extend(report.into_diagnostics());

    let mut report = Report::new(FieldId::Originator);
    header.originator = match originator {
        Some(word) => report.check(
            word.as_str().parse(),
            SubFieldId::Originator,
            word,
            "an AFTN address",
        ),
        None => {
            report.push(
                ErrorId::EmptyField,
                Some(SubFieldId::Originator),
                Span::new(end, end),
                "the header has no originator",
            );
            None
        }
    };
    diagnostics.extend(report.into_diagnostics());

    let mut report = Report::new(FieldId::FilingTime);
    header.filing_time = match filing_time {
        Some(word) => report.check(
            word.as_str().parse(),
            SubFieldId::FilingTime,
            word,
            "a date-time group DDHHMM",
        ),
        None => {
            report.push(
                ErrorId::EmptyField,
                Some(SubFieldId::FilingTime),
                Span::new(end, end),
                "the header has no filing time",
            );
            None
        }
    };
    diagnostics.extend(report.into_diagnostics());

    (header, diagnostics)
}

fn addresses(report: &mut Report, words: &[Token], subfield: SubFieldId) -> Vec<Address> {
    words
        .iter()
        .filter_map(|&word| report.check(word.as_str().parse(), subfield, word, "an AFTN address"))
        .collect()
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use time::Time;

    fn header(s: &str) -> (Header, Vec<Diagnostic>) {
        parse(Token::new(s, 0), MAX_ADDRESSEES)
    }

    #[test]
    fn aftn_header() {
        let (header, diagnostics) = header("FF EGZZFPLX LFPYZQZX\n121200 EGLLZPZX\nEDDFZQZX");
        assert!(diagnostics.is_empty(), "{diagnostics:?}");

        assert_eq!(header.priority, Some(Priority::FlightSafety));
        assert_eq!(header.addressees.len(), 2);
        assert_eq!(header.addressees[1].as_str(), "LFPYZQZX");

        let filing_time = header.filing_time.expect("filing time should parse");
        assert_eq!(filing_time.day, 12);
        assert_eq!(filing_time.time, Time::from_hms(12, 0, 0).expect("time should be valid"));

        assert_eq!(header.originator.map(|a| a.to_string()), Some("EGLLZPZX".to_string()));
        assert_eq!(header.additional_addressees.len(), 1);
    }

    #[test]
    fn blank_header() {
        let (header, diagnostics) = header(" \n ");
        assert!(header.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn parts_are_checked_independently() {
        let (header, diagnostics) = header("XX EGZZFPLX 121299 EGLLZPZX");

        assert_eq!(header.priority, None);
        assert_eq!(header.addressees.len(), 1);
        assert_eq!(header.filing_time, None);
        assert!(header.originator.is_some());

        let fields: Vec<FieldId> = diagnostics.iter().map(|d| d.field).collect();
        assert_eq!(fields, vec![FieldId::Priority, FieldId::FilingTime]);
        assert_eq!(diagnostics[1].error, ErrorId::OutOfRangeValue);
    }

    #[test]
    fn missing_parts() {
        let (_, diagnostics) = header("FF");

        let fields: Vec<FieldId> = diagnostics.iter().map(|d| d.field).collect();
        assert_eq!(
            fields,
            vec![FieldId::Addressee, FieldId::Originator, FieldId::FilingTime]
        );
        assert!(diagnostics.iter().all(|d| d.error == ErrorId::EmptyField));
    }

    #[test]
    fn addressee_limit() {
        let token = Token::new("FF EGZZFPLX LFPYZQZX EDDFZQZX 121200 EGLLZPZX", 0);
        let (header, diagnostics) = parse(token, 2);

        assert_eq!(header.addressees.len(), 2);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].error, ErrorId::TooManySubFields);
        assert_eq!(diagnostics[0].span, Span::new(21, 29));
    }

    #[test]
    fn surplus_addressee_is_not_kept() {
        let token = Token::new("FF EG1 EGZZFPLX LFPYZQZX 121200 EGLLZPZX", 0);
        let (header, diagnostics) = parse(token, 2);

        let addressees: Vec<&str> = header.addressees.iter().map(|a| a.as_str()).collect();
        assert_eq!(addressees, vec!["EGZZFPLX"]);

        let errors: Vec<(ErrorId, Span)> = diagnostics.iter().map(|d| (d.error, d.span)).collect();
        assert_eq!(
            errors,
            vec![
                (ErrorId::InvalidSubFieldSyntax, Span::new(3, 6)),
                (ErrorId::TooManySubFields, Span::new(16, 24)),
            ]
        );
    }
}
