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

//! Field 14: estimate data at the boundary point.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::Time;

use crate::common::{parse_time, Level, Point};
use crate::diagnostic::Report;
use crate::field::{FieldText, Parsed};
use crate::fields::f13::single_word;
use crate::utils::Token;
use crate::{ErrorId, SubFieldId};

/// Whether the aircraft crosses the boundary above or below the
/// supplementary level.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CrossingCondition {
    /// At or above (`A`).
    Above,
    /// At or below (`B`).
    Below,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Estimate {
    pub point: Point,
    pub time: Option<Time>,
    pub level: Option<Level>,
    pub supplementary_level: Option<Level>,
    pub condition: Option<CrossingCondition>,
}

/// Parses field 14, e.g. `LIMRI/1228F350F310A`.
pub fn parse(input: FieldText<'_>) -> Parsed<Estimate> {
    let mut report = Report::new(input.id());

    let Some(word) = single_word(&mut report, input.token()) else {
        return report.finish(None);
    };

    let Some((point, rest)) = word.split_once('/') else {
        let point = report.check(word.as_str().parse(), SubFieldId::F14a, word, "a point");
        report.missing(SubFieldId::F14b, word.span().end, "a time HHMM");
        return report.finish(point.map(|point| Estimate {
            point,
            time: None,
            level: None,
            supplementary_level: None,
            condition: None,
        }));
    };

    let point = report.check(point.as_str().parse(), SubFieldId::F14a, point, "a point");
    let crossing = crossing(&mut report, rest);

    report.finish(point.map(|point| Estimate {
        point,
        time: crossing.time,
        level: crossing.level,
        supplementary_level: crossing.supplementary_level,
        condition: crossing.condition,
    }))
}

/// The subfields of field 14 after the point.
#[derive(Default)]
struct Crossing {
    time: Option<Time>,
    level: Option<Level>,
    supplementary_level: Option<Level>,
    condition: Option<CrossingCondition>,
}

/// Parses the time and levels following the point.
fn crossing(report: &mut Report, rest: Token<'_>) -> Crossing {
    let mut crossing = Crossing::default();

    // time
    let Some((time, rest)) = rest.split_at(4.min(rest.len())) else {
        return crossing;
    };
    if time.is_empty() {
        report.missing(SubFieldId::F14b, time.offset(), "a time HHMM");
        return crossing;
    }
    crossing.time = report.check(parse_time(time.as_str()), SubFieldId::F14b, time, "a time HHMM");

    // cleared level
    let Some((level, rest)) = level(report, rest, SubFieldId::F14c) else {
        report.missing(SubFieldId::F14c, rest.offset(), "a level");
        return crossing;
    };
    crossing.level = level;

    // supplementary level and crossing condition
    if let Some((level, rest)) = level_token(rest) {
        crossing.supplementary_level = report.check(
            level.as_str().parse(),
            SubFieldId::F14d,
            level,
            "a level",
        );

        crossing.condition = match rest.as_str() {
            "A" => Some(CrossingCondition::Above),
            "B" => Some(CrossingCondition::Below),
            "" => {
                report.missing(SubFieldId::F14e, rest.offset(), "A or B");
                None
            }
            _ => {
                report.invalid(ErrorId::InvalidSubFieldSyntax, SubFieldId::F14e, rest, "A or B");
                None
            }
        };
    } else if !rest.is_empty() {
        report.invalid(
            ErrorId::InvalidSubFieldSyntax,
            SubFieldId::F14d,
            rest,
            "a supplementary level followed by A or B",
        );
    }

    crossing
}

/// Parses field 14a with the point only.
pub fn parse_point(input: FieldText<'_>) -> Parsed<Point> {
    let mut report = Report::new(input.id());

    let Some(word) = single_word(&mut report, input.token()) else {
        return report.finish(None);
    };

    let point = report.check(word.as_str().parse(), SubFieldId::F14a, word, "a point");
    report.finish(point)
}

/// Splits a leading level from the token.
fn level_token(token: Token<'_>) -> Option<(Token<'_>, Token<'_>)> {
    let len = Level::len_of(*token.as_str().as_bytes().first()?)?;
    token.split_at(len.min(token.len()))
}

/// Parses a leading level and returns it with the rest of the token.
fn level<'a>(
    report: &mut Report,
    token: Token<'a>,
    subfield: SubFieldId,
) -> Option<(Option<Level>, Token<'a>)> {
    if token.is_empty() {
        return None;
    }

    match level_token(token) {
        Some((level, rest)) => Some((
            report.check(level.as_str().parse(), subfield, level, "a level"),
            rest,
        )),
        None => {
            report.invalid(ErrorId::InvalidSubFieldSyntax, subfield, token, "a level");
            Some((None, Token::new("", token.span().end)))
        }
    }
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Fix;
    use crate::FieldId;

    fn f14(s: &str) -> Parsed<Estimate> {
        parse(FieldText::new(FieldId::F14, s, 0))
    }

    #[test]
    fn full_estimate() {
        let parsed = f14("LIMRI/1228F350F310A");
        assert!(parsed.is_clean());

        let estimate = parsed.value.expect("estimate should parse");
        assert_eq!(estimate.point.fix, Fix::Named("LIMRI".to_string()));
        assert_eq!(estimate.time, Time::from_hms(12, 28, 0).ok());
        assert_eq!(estimate.level, Some(Level::FlightLevel(350)));
        assert_eq!(estimate.supplementary_level, Some(Level::FlightLevel(310)));
        assert_eq!(estimate.condition, Some(CrossingCondition::Above));
    }

    #[test]
    fn without_supplementary_level() {
        let parsed = f14("46N078W/0215S1130");
        assert!(parsed.is_clean());
        assert_eq!(
            parsed.value.and_then(|e| e.level),
            Some(Level::MetricLevel(1130))
        );
    }

    #[test]
    fn missing_level() {
        let parsed = f14("LIMRI/1228");
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].error, ErrorId::MissingSubField);
        assert_eq!(parsed.diagnostics[0].subfield, Some(SubFieldId::F14c));
    }

    #[test]
    fn invalid_time_continues() {
        let parsed = f14("LIMRI/2460F350");
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].error, ErrorId::OutOfRangeValue);
        assert_eq!(
            parsed.value.and_then(|e| e.level),
            Some(Level::FlightLevel(350))
        );
    }

    #[test]
    fn invalid_point_still_checks_the_rest() {
        let parsed = f14("1X/2500F33X");
        assert!(parsed.value.is_none());

        let subfields: Vec<_> = parsed.diagnostics.iter().map(|d| d.subfield).collect();
        assert_eq!(
            subfields,
            vec![
                Some(SubFieldId::F14a),
                Some(SubFieldId::F14b),
                Some(SubFieldId::F14c),
            ]
        );
        assert_eq!(parsed.diagnostics[1].error, ErrorId::OutOfRangeValue);
        assert_eq!(parsed.diagnostics[1].span.start, 3);
    }

    #[test]
    fn point_only() {
        let parsed = parse_point(FieldText::new(FieldId::F14a, "DUB180040", 0));
        assert!(parsed.is_clean());
    }
}
