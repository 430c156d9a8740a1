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

//! MFS significant points and the point groups of fields 80 and 81.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::Time;

use crate::common::{parse_time, Level};
use crate::diagnostic::Report;
use crate::field::{FieldText, Parsed};
use crate::fields::f13::single_word;
use crate::utils::{is_alphanumeric, Token};
use crate::{ErrorId, SubFieldId};

/// A point with optional time and level, e.g. `BALIX/1215/F350`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MfsPoint {
    pub point: String,
    pub time: Option<Time>,
    pub level: Option<Level>,
}

/// Parses a significant point of one to fifteen characters starting with a
/// letter.
pub fn parse_point(s: &str) -> Result<String, ErrorId> {
    let valid = (2..=15).contains(&s.len())
        && s.as_bytes()[0].is_ascii_uppercase()
        && is_alphanumeric(s);

    if valid {
        Ok(s.to_string())
    } else {
        Err(ErrorId::InvalidSubFieldSyntax)
    }
}

/// Parses the MFS significant point field.
pub fn parse_sig_point(input: FieldText<'_>) -> Parsed<String> {
    let mut report = Report::new(input.id());

    let Some(word) = single_word(&mut report, input.token()) else {
        return report.finish(None);
    };

    let point = report.check(
        parse_point(word.as_str()),
        SubFieldId::MfsPoint,
        word,
        "a significant point",
    );
    report.finish(point)
}

/// Parses the point groups of field 80 or 81.
pub fn parse(input: FieldText<'_>) -> Parsed<Vec<MfsPoint>> {
    let mut report = Report::new(input.id());
    let token = input.token().trim();

    let words = token.split_whitespace();
    if words.is_empty() {
        report.empty(token);
        return report.finish(None);
    }

    let points = words
        .into_iter()
        .filter_map(|word| group(&mut report, word))
        .collect();

    report.finish(Some(points))
}

/// Parses a group `POINT[/HHMM[/LEVEL]]`.
fn group(report: &mut Report, word: Token<'_>) -> Option<MfsPoint> {
    let pieces = word.split(&['/']);
    let (point, time, level) = (pieces.first()?, pieces.get(1), pieces.get(2));

    let point = report.check(
        parse_point(point.as_str()),
        SubFieldId::MfsPoint,
        *point,
        "a significant point",
    )?;

    let time = time.and_then(|&time| {
        report.check(parse_time(time.as_str()), SubFieldId::MfsTime, time, "a time HHMM")
    });

    let level = level.and_then(|&level| {
        report.check(level.as_str().parse(), SubFieldId::MfsLevel, level, "a level")
    });

    report.surplus(pieces.get(3..).unwrap_or_default());

    Some(MfsPoint { point, time, level })
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldId;

    #[test]
    fn point_groups() {
        let parsed = parse(FieldText::new(FieldId::F80, "BALIX/1215/F350 ETIKI/1240 SUNOT", 0));
        assert!(parsed.is_clean(), "{:?}", parsed.diagnostics);

        let points = parsed.value.expect("points should parse");
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].level, Some(Level::FlightLevel(350)));
        assert_eq!(points[1].time, Time::from_hms(12, 40, 0).ok());
        assert_eq!(points[2].point, "SUNOT");
        assert_eq!(points[2].time, None);
    }

    #[test]
    fn invalid_group_is_local() {
        let parsed = parse(FieldText::new(FieldId::F81, "BALIX/2515 ETIKI/1240", 0));
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].subfield, Some(SubFieldId::MfsTime));
        assert_eq!(parsed.value.map(|p| p.len()), Some(2));
    }

    #[test]
    fn significant_point() {
        let parsed = parse_sig_point(FieldText::new(FieldId::MfsSigPoint, "ETIKI", 0));
        assert_eq!(parsed.value.as_deref(), Some("ETIKI"));

        let parsed = parse_sig_point(FieldText::new(FieldId::MfsSigPoint, "1ABC", 0));
        assert_eq!(parsed.diagnostics[0].error, ErrorId::InvalidSubFieldSyntax);
    }
}
