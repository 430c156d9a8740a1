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

//! Field 15: route.
//!
//! The route is parsed in two phases. The lexer classifies
//! each whitespace separated word without context. The tokenizer in this
//! module then assembles the [`Route`] from the classified words, which
//! requires the context of the surrounding words:
//!
//! - the first word must be the cruising speed and level
//! - a speed and level may only appear as change after a point
//! - each element restricts the element which follows it
//! - nothing may follow the truncation indicator `T`
//!
//! Words that can't be classified are reported with their span and skipped,
//! so a single malformed word never hides the rest of the route.

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::common::{Level, Point, Speed};
use crate::diagnostic::Report;
use crate::field::{FieldText, Parsed};
use crate::fields::f8::FlightRules;
use crate::{ErrorId, SubFieldId};

mod sequence;
mod word;

use sequence::Position;
use word::{Lexer, Word};

/// The maximum length of a single route word.
pub const MAX_WORD_LEN: usize = 25;

/// A cruising level, which may be `VFR` for uncontrolled VFR flights.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CruisingLevel {
    Level(Level),
    Vfr,
}

impl FromStr for CruisingLevel {
    type Err = ErrorId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VFR" => Ok(Self::Vfr),
            _ => s.parse().map(Self::Level),
        }
    }
}

impl From<Level> for CruisingLevel {
    fn from(level: Level) -> Self {
        Self::Level(level)
    }
}

/// A speed and level group such as `N0450F330`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpeedLevel {
    pub speed: Speed,
    pub level: CruisingLevel,
}

impl FromStr for SpeedLevel {
    type Err = ErrorId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = *s.as_bytes().first().ok_or(ErrorId::InvalidSubFieldSyntax)?;
        let len = Speed::len_of(unit).ok_or(ErrorId::InvalidSubFieldSyntax)?;
        let (speed, level) = (
            s.get(..len).ok_or(ErrorId::InvalidSubFieldSyntax)?,
            s.get(len..).ok_or(ErrorId::InvalidSubFieldSyntax)?,
        );

        Ok(Self {
            speed: speed.parse()?,
            level: level.parse()?,
        })
    }
}

/// An element of the route description.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RouteElement {
    /// Direct routing between two points (`DCT`).
    Direct,
    /// A significant point with an optional change of speed and level.
    Point {
        point: Point,
        change: Option<SpeedLevel>,
    },
    /// An ATS route with an optional change of speed and level.
    Airway {
        designator: String,
        change: Option<SpeedLevel>,
    },
    /// A standard departure or arrival route designator.
    Procedure(String),
    /// Unspecified standard departure (`SID`).
    Sid,
    /// Unspecified standard arrival (`STAR`).
    Star,
    /// Change of flight rules to the rules which follow the point before.
    RulesChange(FlightRules),
    /// Change to operational air traffic.
    Oat,
    /// Change to general air traffic.
    Gat,
    /// Start of a route portion that is not processed by IFPS.
    IfpStop,
    /// End of a route portion that is not processed by IFPS.
    IfpStart,
    /// The route is truncated (`T`).
    Truncate,
    /// Cruise climb from the point with the speed between the levels, or
    /// above the level if there is no upper level.
    CruiseClimb {
        point: Point,
        speed: Speed,
        level: Level,
        upper: Option<Level>,
    },
    /// Special activity, e.g. `STAY1/0030`.
    Stay { number: u8, duration: Duration },
    /// North Atlantic track, e.g. `NATA`.
    Nat(String),
    /// Polar track system, e.g. `PTS2A`.
    Pts(String),
}

/// The route of field 15.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Route {
    /// The initial cruising speed.
    pub speed: Option<Speed>,
    /// The initial cruising level.
    pub level: Option<CruisingLevel>,
    pub elements: Vec<RouteElement>,
}

impl Route {
    /// Derives the flight rules from the route.
    ///
    /// A route starts under VFR if its cruising level is `VFR` and under IFR
    /// otherwise. The first `VFR` or `IFR` element which changes the current
    /// rules defines whether the flight changes rules.
    pub fn flight_rules(&self) -> FlightRules {
        let initial = match self.level {
            Some(CruisingLevel::Vfr) => FlightRules::Vfr,
            _ => FlightRules::Ifr,
        };

        let changes = self.elements.iter().any(|element| {
            matches!(element, RouteElement::RulesChange(rules) if *rules != initial)
        });

        match (initial, changes) {
            (FlightRules::Vfr, true) => FlightRules::VfrThenIfr,
            (FlightRules::Vfr, false) => FlightRules::Vfr,
            (_, true) => FlightRules::IfrThenVfr,
            (_, false) => FlightRules::Ifr,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl IntoIterator for Route {
    type Item = RouteElement;
    type IntoIter = std::vec::IntoIter<RouteElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a RouteElement;
    type IntoIter = std::slice::Iter<'a, RouteElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

pub fn parse(input: FieldText<'_>) -> Parsed<Route> {
    let mut report = Report::new(input.id());
    let token = input.token().trim();

    let words = Lexer::lex(token);
    let Some((first, word)) = words.first() else {
        report.empty(token);
        return report.finish(None);
    };

    let mut route = Route::default();

    // cruising speed and level
    let unit = first.as_str().as_bytes().first().copied().unwrap_or_default();
    match Speed::len_of(unit).and_then(|len| first.split_at(len)) {
        Some((speed, level)) if first.len() <= MAX_WORD_LEN => {
            route.speed = report.check(
                speed.as_str().parse(),
                SubFieldId::F15a,
                speed,
                "a cruising speed such as N0450",
            );

            if level.is_empty() {
                report.missing(SubFieldId::F15b, level.offset(), "a cruising level");
            } else {
                route.level = report.check(
                    level.as_str().parse(),
                    SubFieldId::F15b,
                    level,
                    "a cruising level such as F330",
                );
            }
        }
        _ => {
            report.invalid(
                ErrorId::InvalidSubFieldSyntax,
                SubFieldId::F15a,
                *first,
                "a cruising speed and level such as N0450F330",
            );

            if let Some(Word::Element(element)) = word {
                route.elements.push(element.clone());
            }
        }
    }

    let mut position = match route.elements.last() {
        Some(element) => Position::Start.next(element),
        None => Position::initial(route.level),
    };

    for (i, (token, word)) in words.iter().enumerate().skip(1) {
        match word {
            Some(Word::Element(element)) => {
                if let Err(expected) = position.check(element, i + 1 == words.len()) {
                    report.invalid(
                        ErrorId::InvalidSubFieldSyntax,
                        SubFieldId::F15c,
                        *token,
                        expected,
                    );
                }

                position = position.next(element);
                route.elements.push(element.clone());

                if *element == RouteElement::Truncate {
                    let rest: Vec<_> = words[i + 1..].iter().map(|(token, _)| *token).collect();
                    report.surplus(&rest);
                    break;
                }
            }
            Some(Word::SpeedLevel(_)) => report.invalid(
                ErrorId::InvalidSubFieldSyntax,
                SubFieldId::F15c,
                *token,
                "a point or route followed by the speed and level",
            ),
            None if token.len() > MAX_WORD_LEN => report.invalid(
                ErrorId::InvalidSubFieldSyntax,
                SubFieldId::F15c,
                *token,
                "a route element of at most 25 characters",
            ),
            None => report.invalid(
                ErrorId::InvalidSubFieldSyntax,
                SubFieldId::F15c,
                *token,
                "a route element",
            ),
        }
    }

    report.finish(Some(route))
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldId;

    fn f15(s: &str) -> Parsed<Route> {
        parse(FieldText::new(FieldId::F15, s, 0))
    }

    #[test]
    fn simple_route() {
        let parsed = f15("N0450F330 DCT DVR");
        assert!(parsed.is_clean());

        let route = parsed.value.expect("route should parse");
        assert_eq!(route.speed, Some(Speed::Knots(450)));
        assert_eq!(route.level, Some(CruisingLevel::Level(Level::FlightLevel(330))));
        assert_eq!(route.len(), 2);
        assert_eq!(route.elements[0], RouteElement::Direct);
    }

    #[test]
    fn full_route() {
        let parsed = f15(
            "N0460F370 DVR1A DVR UL9 KONAN/N0455F390 UL607 SPI T",
        );
        assert!(parsed.is_clean());

        let route = parsed.value.expect("route should parse");
        assert_eq!(route.len(), 7);
        assert_eq!(route.flight_rules(), FlightRules::Ifr);
    }

    #[test]
    fn malformed_word_is_skipped() {
        let parsed = parse(FieldText::new(FieldId::F15, "N0450F330 DCT 12AB$ DVR", 100));
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].subfield, Some(SubFieldId::F15c));
        assert_eq!(parsed.diagnostics[0].span.start, 114);
        assert_eq!(parsed.value.map(|r| r.len()), Some(2));
    }

    #[test]
    fn missing_speed_level() {
        let parsed = f15("DCT DVR");
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].subfield, Some(SubFieldId::F15a));
        assert_eq!(parsed.value.map(|r| r.len()), Some(2));
    }

    #[test]
    fn invalid_level() {
        let parsed = f15("N0450X330 DCT DVR");
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].subfield, Some(SubFieldId::F15b));

        let route = parsed.value.expect("route should parse");
        assert_eq!(route.speed, Some(Speed::Knots(450)));
        assert_eq!(route.level, None);
    }

    #[test]
    fn nothing_after_truncation() {
        let parsed = f15("N0450F330 DCT DVR T UL9");
        assert_eq!(parsed.diagnostics[0].error, ErrorId::TooManySubFields);
    }

    #[test]
    fn long_word() {
        let parsed = f15(&format!("N0450F330 {}", "A".repeat(26)));
        assert_eq!(parsed.diagnostics[0].error, ErrorId::InvalidSubFieldSyntax);
    }

    #[test]
    fn element_succession() {
        assert!(f15("N0450F330 SID DVR UL9 KONAN DCT SPI STAR").is_clean());
        assert!(f15("N0450F330 DVR1A DVR UL9 LN/N0450F350 UN866 NVO LAM3A").is_clean());

        let starts = |s: &str| -> Vec<usize> {
            f15(s)
                .diagnostics
                .iter()
                .inspect(|d| {
                    assert_eq!(d.error, ErrorId::InvalidSubFieldSyntax);
                    assert_eq!(d.subfield, Some(SubFieldId::F15c));
                })
                .map(|d| d.span.start)
                .collect()
        };

        assert_eq!(starts("N0450F330 DCT DCT DCT"), vec![14, 18]);
        assert_eq!(starts("N0450F330 UL9 UL607 UN866"), vec![10, 14, 20]);
        assert_eq!(starts("N0450F330 SID STAR DCT"), vec![14]);
        assert_eq!(starts("N0450F330 DVR SID"), vec![14]);
        assert_eq!(starts("N0450F330 DVR UL9/N0450F350 KONAN"), vec![14]);
        assert_eq!(starts("N0450F330 DCT DVR UL9 STAR"), vec![22]);
    }

    #[test]
    fn portions_are_not_restricted() {
        assert!(f15("N0450F330 DCT DVR VFR DCT DCT IFR LN/N0450F350 UL9 KONAN").is_clean());
        assert!(f15("N0450F330 DVR OAT UL9 UL607 GAT KONAN").is_clean());
        assert!(f15("N0100VFR DCT DCT DVR").is_clean());

        let parsed = f15("N0450F330 DCT DVR IFR");
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].span.start, 18);

        let parsed = f15("N0450F330 DCT DVR VFR DCT IFR DCT LN");
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].span.start, 30);
    }

    #[test]
    fn derives_flight_rules() {
        let rules = |s: &str| f15(s).value.expect("route should parse").flight_rules();

        assert_eq!(rules("N0120VFR DCT WUE"), FlightRules::Vfr);
        assert_eq!(rules("N0450F330 DCT DVR VFR"), FlightRules::IfrThenVfr);
        assert_eq!(rules("N0120VFR DCT WUE/N0120A045 IFR DCT"), FlightRules::VfrThenIfr);
        assert_eq!(rules("N0450F330 DCT DVR IFR"), FlightRules::Ifr);
    }
}
