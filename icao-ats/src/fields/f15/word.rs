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

//! Context free classification of route words.
//!
//! The [`Lexer`] splits the route at whitespace and classifies each word by
//! its format alone:
//!
//! - `"N0450F330"` → `Word::SpeedLevel`
//! - `"DCT"` → `Word::Element(RouteElement::Direct)`
//! - `"UL9"` → `Word::Element(RouteElement::Airway { .. })`
//! - `"DVR1A"` → `Word::Element(RouteElement::Procedure(_))`
//! - `"LN/N0450F350"` → `Word::Element(RouteElement::Point { .. })` with a
//!   change of speed and level
//!
//! Words which fit no class are kept without classification, so the
//! tokenizer can report them at their position.

use time::Duration;

use super::{RouteElement, SpeedLevel, MAX_WORD_LEN};
use crate::common::{parse_elapsed, Level, Point, Speed};
use crate::fields::f8::FlightRules;
use crate::utils::{is_alpha, is_alphanumeric, is_digits, Token};

#[derive(Clone, PartialEq, Debug)]
pub(super) enum Word {
    SpeedLevel(SpeedLevel),
    Element(RouteElement),
}

pub(super) struct Lexer;

impl Lexer {
    pub(super) fn lex(token: Token<'_>) -> Vec<(Token<'_>, Option<Word>)> {
        token
            .split_whitespace()
            .into_iter()
            .map(|word| (word, Self::classify(word.as_str())))
            .collect()
    }

    pub(super) fn classify(s: &str) -> Option<Word> {
        if s.is_empty() || s.len() > MAX_WORD_LEN {
            return None;
        }

        // Check for literals first
        let literal = match s {
            "DCT" => Some(RouteElement::Direct),
            "SID" => Some(RouteElement::Sid),
            "STAR" => Some(RouteElement::Star),
            "VFR" => Some(RouteElement::RulesChange(FlightRules::Vfr)),
            "IFR" => Some(RouteElement::RulesChange(FlightRules::Ifr)),
            "OAT" => Some(RouteElement::Oat),
            "GAT" => Some(RouteElement::Gat),
            "IFPSTOP" => Some(RouteElement::IfpStop),
            "IFPSTART" => Some(RouteElement::IfpStart),
            "T" => Some(RouteElement::Truncate),
            _ => None,
        };

        if let Some(element) = literal {
            return Some(Word::Element(element));
        }

        if let Ok(speed_level) = s.parse::<SpeedLevel>() {
            return Some(Word::SpeedLevel(speed_level));
        }

        if let Some(rest) = s.strip_prefix("C/") {
            return cruise_climb(rest).map(Word::Element);
        }

        if let Some(rest) = s.strip_prefix("STAY") {
            return stay(rest).map(Word::Element);
        }

        if let Some(track) = s.strip_prefix("NAT") {
            if track.len() == 1 && is_alpha(track) {
                return Some(Word::Element(RouteElement::Nat(s.to_string())));
            }
        }

        if let Some(track) = s.strip_prefix("PTS") {
            if (1..=2).contains(&track.len()) && is_alphanumeric(track) {
                return Some(Word::Element(RouteElement::Pts(s.to_string())));
            }
        }

        // any point or route may be followed by a change of speed and level
        let (s, change) = match s.split_once('/') {
            Some((s, change)) => (s, Some(change.parse::<SpeedLevel>().ok()?)),
            None => (s, None),
        };

        if let Ok(point) = s.parse::<Point>() {
            return Some(Word::Element(RouteElement::Point { point, change }));
        }

        if is_airway(s) {
            return Some(Word::Element(RouteElement::Airway {
                designator: s.to_string(),
                change,
            }));
        }

        if change.is_none() && is_procedure(s) {
            return Some(Word::Element(RouteElement::Procedure(s.to_string())));
        }

        None
    }
}

/// Splits a designator into the lengths of its leading letters, the digits
/// that follow and an optional single letter suffix.
fn designator(s: &str) -> Option<(usize, usize)> {
    let bytes = s.as_bytes();
    let letters = bytes.iter().take_while(|b| b.is_ascii_uppercase()).count();
    let digits = bytes[letters..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();

    match &bytes[letters + digits..] {
        [] => Some((letters, digits)),
        [suffix] if suffix.is_ascii_uppercase() => Some((letters, digits)),
        _ => None,
    }
}

/// Returns `true` for ATS route designators such as `A1`, `UL9` or `UN866`.
fn is_airway(s: &str) -> bool {
    match designator(s) {
        Some((letters, digits)) => {
            (1..=3).contains(&digits)
                && (letters == 1 || letters == 2 || (letters == 3 && s.starts_with('U')))
        }
        None => false,
    }
}

/// Returns `true` for SID and STAR designators such as `DVR1A` or `LAM3A`.
fn is_procedure(s: &str) -> bool {
    match designator(s) {
        Some((letters, digits)) => (2..=6).contains(&letters) && digits == 1,
        None => false,
    }
}

/// Parses `point/speed level upper-level` where the upper level may be
/// `PLUS`, e.g. `48N050W/M082F290F350`.
fn cruise_climb(s: &str) -> Option<RouteElement> {
    let (point, rest) = s.split_once('/')?;
    let point = point.parse::<Point>().ok()?;

    let speed_len = Speed::len_of(*rest.as_bytes().first()?)?;
    let speed = rest.get(..speed_len)?.parse::<Speed>().ok()?;
    let rest = rest.get(speed_len..)?;

    let level_len = Level::len_of(*rest.as_bytes().first()?)?;
    let level = rest.get(..level_len)?.parse::<Level>().ok()?;

    let upper = match rest.get(level_len..)? {
        "PLUS" => None,
        upper => Some(upper.parse::<Level>().ok()?),
    };

    Some(RouteElement::CruiseClimb {
        point,
        speed,
        level,
        upper,
    })
}

/// Parses `n/HHMM` of a `STAYn/HHMM` word.
fn stay(s: &str) -> Option<RouteElement> {
    let (number, duration) = s.split_once('/')?;

    if number.len() != 1 || !is_digits(number) {
        return None;
    }

    let duration: Duration = parse_elapsed(duration).ok()?;

    Some(RouteElement::Stay {
        number: digits!(number, u8)?,
        duration,
    })
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Fix;
    use crate::fields::f15::CruisingLevel;

    fn element(s: &str) -> RouteElement {
        match Lexer::classify(s) {
            Some(Word::Element(element)) => element,
            word => panic!("{s} should be a route element but is {word:?}"),
        }
    }

    #[test]
    fn lexes_words() {
        let words = Lexer::lex(Token::new("N0450F330 DCT DVR UL9 LN/N0450F350", 0));

        assert_eq!(words.len(), 5);
        assert_eq!(
            words[0].1,
            Some(Word::SpeedLevel(SpeedLevel {
                speed: Speed::Knots(450),
                level: CruisingLevel::Level(Level::FlightLevel(330)),
            }))
        );
        assert_eq!(words[1].1, Some(Word::Element(RouteElement::Direct)));
        assert_eq!(words[3].0.offset(), 18);
    }

    #[test]
    fn classifies_literals() {
        assert_eq!(element("T"), RouteElement::Truncate);
        assert_eq!(element("IFPSTOP"), RouteElement::IfpStop);
        assert_eq!(element("VFR"), RouteElement::RulesChange(FlightRules::Vfr));
    }

    #[test]
    fn classifies_airways_and_procedures() {
        for airway in ["A1", "UL9", "UN866", "L9A"] {
            assert!(
                matches!(element(airway), RouteElement::Airway { .. }),
                "{airway} should be an airway"
            );
        }

        assert_eq!(element("DVR1A"), RouteElement::Procedure("DVR1A".to_string()));
    }

    #[test]
    fn classifies_points() {
        match element("LN/N0450F350") {
            RouteElement::Point { point, change } => {
                assert_eq!(point.fix, Fix::Named("LN".to_string()));
                assert!(change.is_some());
            }
            element => panic!("should be a point but is {element:?}"),
        }

        assert!(matches!(element("DUB180040"), RouteElement::Point { .. }));
        assert!(matches!(element("4620N07805W"), RouteElement::Point { .. }));
    }

    #[test]
    fn classifies_special_words() {
        assert_eq!(
            element("STAY1/0030"),
            RouteElement::Stay {
                number: 1,
                duration: Duration::minutes(30)
            }
        );
        assert_eq!(element("NATA"), RouteElement::Nat("NATA".to_string()));
        assert_eq!(element("PTS2A"), RouteElement::Pts("PTS2A".to_string()));

        match element("C/48N050W/M082F290PLUS") {
            RouteElement::CruiseClimb { upper, .. } => assert_eq!(upper, None),
            element => panic!("should be a cruise climb but is {element:?}"),
        }
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(Lexer::classify("12AB$"), None);
        assert_eq!(Lexer::classify("LN/F350"), None);
        assert_eq!(Lexer::classify(&"A".repeat(MAX_WORD_LEN + 1)), None);
    }
}
