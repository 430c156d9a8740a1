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

//! Field 9: number and type of aircraft and wake turbulence category.

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::diagnostic::Report;
use crate::field::{FieldText, Parsed};
use crate::utils::{is_alphanumeric, is_digits};
use crate::{ErrorId, SubFieldId};

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WakeCategory {
    Light,
    Medium,
    Heavy,
    Super,
}

impl FromStr for WakeCategory {
    type Err = ErrorId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" => Ok(Self::Light),
            "M" => Ok(Self::Medium),
            "H" => Ok(Self::Heavy),
            "J" => Ok(Self::Super),
            _ => Err(ErrorId::InvalidSubFieldSyntax),
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aircraft {
    /// The number of aircraft in a formation flight.
    pub count: u8,
    /// The ICAO type designator or `ZZZZ`.
    pub aircraft_type: String,
    pub wake: Option<WakeCategory>,
}

impl Aircraft {
    /// Returns `true` if the type has no designator and is described in
    /// field 18 instead.
    pub fn is_unknown_type(&self) -> bool {
        self.aircraft_type == "ZZZZ"
    }
}

/// Parses an aircraft type designator.
pub fn parse_type(s: &str) -> Result<String, ErrorId> {
    let valid = (2..=4).contains(&s.len())
        && s.as_bytes()[0].is_ascii_uppercase()
        && is_alphanumeric(s);

    if valid {
        Ok(s.to_string())
    } else {
        Err(ErrorId::InvalidSubFieldSyntax)
    }
}

pub fn parse(input: FieldText<'_>) -> Parsed<Aircraft> {
    let mut report = Report::new(input.id());
    let token = input.token().trim();

    let words = token.split_whitespace();
    let Some(&word) = words.first() else {
        report.empty(token);
        return report.finish(None);
    };
    report.surplus(&words[1..]);

    let mut pieces = word.split(&['/']);

    // the number is either written as its own piece or ahead of the type
    let count = match pieces.first().copied() {
        Some(first) if pieces.len() > 2 || is_digits(first.as_str()) => {
            pieces.remove(0);
            Some(first)
        }
        Some(first) => {
            let n = first.leading(|b| b.is_ascii_digit());
            match first.split_at(n) {
                Some((count, aircraft_type)) if n > 0 => {
                    pieces[0] = aircraft_type;
                    Some(count)
                }
                _ => None,
            }
        }
        None => None,
    };

    let count = match count {
        Some(count) => {
            let n = digits!(count.as_str(), u8).filter(|_| count.len() <= 2);
            match n {
                Some(0) => {
                    report.invalid(ErrorId::OutOfRangeValue, SubFieldId::F9a, count, "1 to 99");
                    1
                }
                Some(n) => n,
                None => {
                    report.invalid(
                        ErrorId::InvalidSubFieldSyntax,
                        SubFieldId::F9a,
                        count,
                        "one or two digits",
                    );
                    1
                }
            }
        }
        None => 1,
    };

    let Some(&aircraft_type) = pieces.first() else {
        report.missing(SubFieldId::F9b, word.span().end, "an aircraft type");
        return report.finish(None);
    };

    let aircraft_type = report.check(
        parse_type(aircraft_type.as_str()),
        SubFieldId::F9b,
        aircraft_type,
        "a type designator or ZZZZ",
    );

    let wake = match pieces.get(1) {
        Some(&wake) => report.check(wake.as_str().parse(), SubFieldId::F9c, wake, "L, M, H or J"),
        None => {
            report.missing(SubFieldId::F9c, word.span().end, "the wake turbulence category");
            None
        }
    };

    report.surplus(pieces.get(2..).unwrap_or_default());

    report.finish(aircraft_type.map(|aircraft_type| Aircraft {
        count,
        aircraft_type,
        wake,
    }))
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldId;

    fn f9(s: &str) -> Parsed<Aircraft> {
        parse(FieldText::new(FieldId::F9, s, 0))
    }

    #[test]
    fn count_as_piece() {
        let parsed = f9("1/A320/M");
        assert!(parsed.is_clean());
        assert_eq!(
            parsed.value,
            Some(Aircraft {
                count: 1,
                aircraft_type: "A320".to_string(),
                wake: Some(WakeCategory::Medium),
            })
        );
    }

    #[test]
    fn leading_count() {
        let parsed = f9("2B747/H");
        assert!(parsed.is_clean());

        let value = parsed.value.expect("aircraft should parse");
        assert_eq!(value.count, 2);
        assert_eq!(value.aircraft_type, "B747");
        assert_eq!(value.wake, Some(WakeCategory::Heavy));
    }

    #[test]
    fn without_count() {
        let value = f9("ZZZZ/L").value.expect("aircraft should parse");
        assert_eq!(value.count, 1);
        assert!(value.is_unknown_type());
    }

    #[test]
    fn invalid_wake() {
        let parsed = f9("A320/Q");
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].subfield, Some(SubFieldId::F9c));
        assert_eq!(parsed.value.map(|v| v.wake), Some(None));
    }

    #[test]
    fn missing_wake() {
        let parsed = f9("A320");
        assert_eq!(parsed.diagnostics[0].error, ErrorId::MissingSubField);
    }
}
