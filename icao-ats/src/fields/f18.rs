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

//! Field 18: other information.
//!
//! The field is either `0` or a sequence of indicators `KEYWORD/value`. Each
//! known keyword has its own grammar and variant of [`Indicator`]. Unknown
//! keywords are kept verbatim.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::{Date, Duration};

use super::{groups, Group};
use crate::common::{parse_date, parse_elapsed, Point};
use crate::diagnostic::Report;
use crate::field::{FieldText, Parsed};
use crate::utils::{is_alphanumeric, is_digits, is_free_text, normalize};
use crate::{ErrorId, SubFieldId};

/// The estimated elapsed time to a FIR boundary or significant point.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ElapsedEstimate {
    pub point: Point,
    pub elapsed: Duration,
}

/// An aircraft type of `TYP/`, preceded by the number of aircraft.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeCount {
    pub count: u8,
    pub name: String,
}

/// An indicator of field 18.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Indicator {
    /// `ALTN/` name of destination alternates without indicator.
    Alternate(String),
    /// `CODE/` aircraft address.
    Code(String),
    /// `COM/` communication capabilities not specified in field 10a.
    Com(String),
    /// `DAT/` data communication capabilities not specified in field 10a.
    Dat(String),
    /// `DEP/` name of the departure aerodrome without indicator.
    Departure(String),
    /// `DEST/` name of the destination aerodrome without indicator.
    Destination(String),
    /// `DLE/` en-route delay or holding.
    Delay(String),
    /// `DOF/` date of flight departure.
    DateOfFlight(Date),
    /// `EET/` estimates to FIR boundaries or significant points.
    Eet(Vec<ElapsedEstimate>),
    /// `EST/` estimate for the first point of the route.
    Est(String),
    /// `IFP/` errors found by the flight plan processing.
    Ifp(String),
    /// `NAV/` navigation equipment not specified in field 10a.
    Nav(String),
    /// `OPR/` aircraft operator.
    Operator(String),
    /// `ORGN/` originator of the flight plan.
    Originator(String),
    /// `PBN/` performance based navigation capabilities.
    Pbn(Vec<String>),
    /// `PER/` aircraft performance category.
    Performance(String),
    /// `RALT/` en-route alternates.
    RouteAlternate(String),
    /// `REG/` aircraft registration.
    Registration(String),
    /// `RIF/` route to the revised destination.
    Reclearance(String),
    /// `RFP/` replacement flight plan indicator.
    Replacement(String),
    /// `RMK/` remarks.
    Remarks(String),
    /// `RVR/` minimum runway visual range in metres.
    Rvr(u16),
    /// `SEL/` SELCAL code.
    Selcal(String),
    /// `STS/` reason for special handling.
    Status(String),
    /// `SRC/` source of the flight plan.
    Source(String),
    /// `SUR/` surveillance capabilities not specified in field 10b.
    Surveillance(String),
    /// `TALT/` take-off alternates.
    TakeOffAlternate(String),
    /// `TYP/` aircraft types without designator.
    Types(Vec<TypeCount>),
    /// An indicator with an unknown keyword.
    Unknown { keyword: String, value: String },
}

impl Indicator {
    /// Returns the keyword of this indicator.
    pub fn keyword(&self) -> &str {
        match self {
            Self::Alternate(_) => "ALTN",
            Self::Code(_) => "CODE",
            Self::Com(_) => "COM",
            Self::Dat(_) => "DAT",
            Self::Departure(_) => "DEP",
            Self::Destination(_) => "DEST",
            Self::Delay(_) => "DLE",
            Self::DateOfFlight(_) => "DOF",
            Self::Eet(_) => "EET",
            Self::Est(_) => "EST",
            Self::Ifp(_) => "IFP",
            Self::Nav(_) => "NAV",
            Self::Operator(_) => "OPR",
            Self::Originator(_) => "ORGN",
            Self::Pbn(_) => "PBN",
            Self::Performance(_) => "PER",
            Self::RouteAlternate(_) => "RALT",
            Self::Registration(_) => "REG",
            Self::Reclearance(_) => "RIF",
            Self::Replacement(_) => "RFP",
            Self::Remarks(_) => "RMK",
            Self::Rvr(_) => "RVR",
            Self::Selcal(_) => "SEL",
            Self::Status(_) => "STS",
            Self::Source(_) => "SRC",
            Self::Surveillance(_) => "SUR",
            Self::TakeOffAlternate(_) => "TALT",
            Self::Types(_) => "TYP",
            Self::Unknown { keyword, .. } => keyword,
        }
    }
}

/// The content of field 18.
///
/// No indicators means `0`, i.e. there is no other information.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OtherInformation {
    pub indicators: Vec<Indicator>,
}

impl OtherInformation {
    /// Returns the indicator with the keyword.
    pub fn get(&self, keyword: &str) -> Option<&Indicator> {
        self.indicators.iter().find(|i| i.keyword() == keyword)
    }

    /// Returns `true` if there is an indicator with the keyword.
    pub fn contains(&self, keyword: &str) -> bool {
        self.get(keyword).is_some()
    }

    /// Returns the PBN capabilities.
    pub fn pbn(&self) -> &[String] {
        match self.get("PBN") {
            Some(Indicator::Pbn(codes)) => codes,
            _ => &[],
        }
    }

    /// Returns the date of flight.
    pub fn date_of_flight(&self) -> Option<Date> {
        match self.get("DOF") {
            Some(Indicator::DateOfFlight(date)) => Some(*date),
            _ => None,
        }
    }
}

const PBN_CODES: &[&str] = &[
    "A1", "B1", "B2", "B3", "B4", "B5", "B6", "C1", "C2", "C3", "C4", "D1", "D2", "D3", "D4", "L1",
    "O1", "O2", "O3", "O4", "S1", "S2", "T1", "T2",
];

/// The maximum number of PBN codes.
const MAX_PBN_CODES: usize = 8;

struct Keyword {
    name: &'static str,
    subfield: SubFieldId,
    expected: &'static str,
    parse: fn(&str) -> Result<Indicator, ErrorId>,
}

macro_rules! keyword {
    ($name:literal, $subfield:ident, $expected:literal, $parse:expr) => {
        Keyword {
            name: $name,
            subfield: SubFieldId::$subfield,
            expected: $expected,
            parse: $parse,
        }
    };

    ($name:literal, $subfield:ident, $variant:ident) => {
        keyword!($name, $subfield, "free text", |v: &str| text(v).map(Indicator::$variant))
    };
}

static KEYWORDS: &[Keyword] = &[
    keyword!("ALTN", F18altn, Alternate),
    keyword!("CODE", F18code, Code),
    keyword!("COM", F18com, Com),
    keyword!("DAT", F18dat, Dat),
    keyword!("DEP", F18dep, Departure),
    keyword!("DEST", F18dest, Destination),
    keyword!("DLE", F18dle, Delay),
    keyword!("DOF", F18dof, "a date YYMMDD", |v: &str| {
        parse_date(v).map(Indicator::DateOfFlight)
    }),
    keyword!("EET", F18eet, "points followed by an elapsed time HHMM", |v: &str| {
        estimates(v).map(Indicator::Eet)
    }),
    keyword!("EST", F18est, Est),
    keyword!("IFP", F18ifp, Ifp),
    keyword!("NAV", F18nav, Nav),
    keyword!("OPR", F18opr, Operator),
    keyword!("ORGN", F18orgn, Originator),
    keyword!("PBN", F18pbn, "up to eight PBN codes", |v: &str| {
        pbn(v).map(Indicator::Pbn)
    }),
    keyword!("PER", F18per, Performance),
    keyword!("RALT", F18ralt, RouteAlternate),
    keyword!("REG", F18reg, Registration),
    keyword!("RIF", F18rif, Reclearance),
    keyword!("RFP", F18rfp, Replacement),
    keyword!("RMK", F18rmk, Remarks),
    keyword!("RVR", F18rvr, "three digits", |v: &str| {
        match v.len() {
            3 => digits!(v, u16).map(Indicator::Rvr).ok_or(ErrorId::InvalidSubFieldSyntax),
            _ => Err(ErrorId::InvalidSubFieldSyntax),
        }
    }),
    keyword!("SEL", F18sel, Selcal),
    keyword!("STS", F18sts, Status),
    keyword!("SRC", F18src, Source),
    keyword!("SUR", F18sur, Surveillance),
    keyword!("TALT", F18talt, TakeOffAlternate),
    keyword!("TYP", F18typ, "aircraft types optionally preceded by their number", |v: &str| {
        types(v).map(Indicator::Types)
    }),
];

/// Parses field 18, e.g. `PBN/B1D1 DOF/240315 RMK/TCAS`.
pub fn parse(input: FieldText<'_>) -> Parsed<OtherInformation> {
    let mut report = Report::new(input.id());
    let token = input.token().trim();

    if token.is_empty() {
        report.empty(token);
        return report.finish(None);
    }

    if token.as_str() == "0" {
        return report.finish(Some(OtherInformation::default()));
    }

    let (leading, groups) = groups(token, 3..=4);
    if !leading.is_empty() {
        report.invalid(
            ErrorId::InvalidSubFieldSyntax,
            SubFieldId::F18keyword,
            leading,
            "0 or indicators such as RMK/",
        );
    }

    let mut info = OtherInformation::default();
    let mut seen: Vec<&str> = Vec::new();

    for Group { label, value } in groups {
        if seen.contains(&label.as_str()) {
            report.invalid(
                ErrorId::DuplicateSubField,
                SubFieldId::F18keyword,
                label,
                "used only once",
            );
            continue;
        }
        seen.push(label.as_str());

        match KEYWORDS.iter().find(|k| k.name == label.as_str()) {
            Some(keyword) => {
                if let Some(indicator) = report.check(
                    (keyword.parse)(value.as_str()),
                    keyword.subfield,
                    value,
                    keyword.expected,
                ) {
                    info.indicators.push(indicator);
                }
            }
            None => {
                report.invalid(
                    ErrorId::UnknownKeyword,
                    SubFieldId::F18keyword,
                    label,
                    "a known indicator",
                );
                info.indicators.push(Indicator::Unknown {
                    keyword: label.as_str().to_string(),
                    value: value.as_str().to_string(),
                });
            }
        }
    }

    report.finish(Some(info))
}

/// Parses field 18 with the date of flight only, e.g. `DOF/240315`.
pub fn parse_date_of_flight(input: FieldText<'_>) -> Parsed<Date> {
    let mut report = Report::new(input.id());
    let token = input.token().trim();

    if token.is_empty() {
        report.empty(token);
        return report.finish(None);
    }

    let date = match token.as_str().strip_prefix("DOF/") {
        Some(_) => token.tail(4).unwrap_or(token),
        None => token,
    };

    let date = report.check(parse_date(date.as_str()), SubFieldId::F18dof, date, "a date YYMMDD");
    report.finish(date)
}

fn text(v: &str) -> Result<String, ErrorId> {
    if !v.trim().is_empty() && is_free_text(v) {
        Ok(normalize(v))
    } else {
        Err(ErrorId::InvalidSubFieldSyntax)
    }
}

fn estimates(v: &str) -> Result<Vec<ElapsedEstimate>, ErrorId> {
    let words: Vec<&str> = v.split_ascii_whitespace().collect();
    if words.is_empty() {
        return Err(ErrorId::InvalidSubFieldSyntax);
    }

    words
        .into_iter()
        .map(|word| {
            let split = word.len().checked_sub(4).ok_or(ErrorId::InvalidSubFieldSyntax)?;
            let (point, elapsed) = (
                word.get(..split).ok_or(ErrorId::InvalidSubFieldSyntax)?,
                word.get(split..).ok_or(ErrorId::InvalidSubFieldSyntax)?,
            );

            Ok(ElapsedEstimate {
                point: point.parse()?,
                elapsed: parse_elapsed(elapsed)?,
            })
        })
        .collect()
}

fn pbn(v: &str) -> Result<Vec<String>, ErrorId> {
    if v.is_empty() || v.len() % 2 != 0 || !is_alphanumeric(v) {
        return Err(ErrorId::InvalidSubFieldSyntax);
    }

    let codes: Vec<String> = (0..v.len())
        .step_by(2)
        .filter_map(|i| v.get(i..i + 2))
        .map(str::to_string)
        .collect();

    if codes.iter().any(|code| !PBN_CODES.contains(&code.as_str())) {
        return Err(ErrorId::InvalidSubFieldSyntax);
    }

    if codes.len() > MAX_PBN_CODES {
        return Err(ErrorId::OutOfRangeValue);
    }

    Ok(codes)
}

fn types(v: &str) -> Result<Vec<TypeCount>, ErrorId> {
    let words: Vec<&str> = v.split_ascii_whitespace().collect();
    if words.is_empty() {
        return Err(ErrorId::InvalidSubFieldSyntax);
    }

    words
        .into_iter()
        .map(|word| {
            let n = word.bytes().take_while(u8::is_ascii_digit).count();
            let (count, name) = word.split_at(n);

            let count = match count {
                "" => 1,
                count if count.len() <= 2 && is_digits(count) => {
                    digits!(count, u8).ok_or(ErrorId::InvalidSubFieldSyntax)?
                }
                _ => return Err(ErrorId::InvalidSubFieldSyntax),
            };

            if is_alphanumeric(name) {
                Ok(TypeCount {
                    count,
                    name: name.to_string(),
                })
            } else {
                Err(ErrorId::InvalidSubFieldSyntax)
            }
        })
        .collect()
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldId;
    use time::Month;

    fn f18(s: &str) -> Parsed<OtherInformation> {
        parse(FieldText::new(FieldId::F18, s, 0))
    }

    #[test]
    fn no_information() {
        let parsed = f18("0");
        assert!(parsed.is_clean());
        assert_eq!(parsed.value, Some(OtherInformation::default()));
    }

    #[test]
    fn indicators() {
        let parsed =
            f18("PBN/A1B1C1D1 DOF/240315 REG/GABCD EET/EGTT0010 LFFF0040 RMK/TCAS EQUIPPED");
        assert!(parsed.is_clean(), "{:?}", parsed.diagnostics);

        let info = parsed.value.expect("other information should parse");
        assert_eq!(info.indicators.len(), 5);
        assert_eq!(info.pbn(), &["A1", "B1", "C1", "D1"]);
        assert_eq!(
            info.date_of_flight(),
            Date::from_calendar_date(2024, Month::March, 15).ok()
        );
        assert_eq!(
            info.get("RMK"),
            Some(&Indicator::Remarks("TCAS EQUIPPED".to_string()))
        );

        match info.get("EET") {
            Some(Indicator::Eet(estimates)) => {
                assert_eq!(estimates.len(), 2);
                assert_eq!(estimates[1].elapsed, Duration::minutes(40));
            }
            indicator => panic!("should be EET but is {indicator:?}"),
        }
    }

    #[test]
    fn unknown_keyword_is_kept() {
        let parsed = f18("XYZ/SOMETHING RMK/NIL");
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].error, ErrorId::UnknownKeyword);

        let info = parsed.value.expect("other information should parse");
        assert_eq!(
            info.indicators[0],
            Indicator::Unknown {
                keyword: "XYZ".to_string(),
                value: "SOMETHING".to_string()
            }
        );
    }

    #[test]
    fn duplicate_keyword() {
        let parsed = f18("RMK/ONE RMK/TWO");
        assert_eq!(parsed.diagnostics[0].error, ErrorId::DuplicateSubField);
        assert_eq!(
            parsed.value.and_then(|i| i.get("RMK").cloned()),
            Some(Indicator::Remarks("ONE".to_string()))
        );
    }

    #[test]
    fn invalid_values() {
        let parsed = f18("DOF/230229 RVR/12 PBN/B1X9");
        let errors: Vec<_> = parsed
            .diagnostics
            .iter()
            .map(|d| (d.error, d.subfield))
            .collect();

        assert_eq!(
            errors,
            vec![
                (ErrorId::OutOfRangeValue, Some(SubFieldId::F18dof)),
                (ErrorId::InvalidSubFieldSyntax, Some(SubFieldId::F18rvr)),
                (ErrorId::InvalidSubFieldSyntax, Some(SubFieldId::F18pbn)),
            ]
        );
    }

    #[test]
    fn too_many_pbn_codes() {
        assert_eq!(pbn("A1B1B2B3B4B5B6C1C2"), Err(ErrorId::OutOfRangeValue));
        assert!(pbn("A1B1B2B3B4B5B6C1").is_ok());
    }

    #[test]
    fn aircraft_types() {
        assert_eq!(
            types("2F15 HAWK"),
            Ok(vec![
                TypeCount {
                    count: 2,
                    name: "F15".to_string()
                },
                TypeCount {
                    count: 1,
                    name: "HAWK".to_string()
                },
            ])
        );
    }

    #[test]
    fn date_of_flight_field() {
        for s in ["DOF/240315", "240315"] {
            let parsed = parse_date_of_flight(FieldText::new(FieldId::F18dof, s, 0));
            assert!(parsed.is_clean(), "{s}");
        }

        let parsed = parse_date_of_flight(FieldText::new(FieldId::F18dof, "DOF/241332", 0));
        assert_eq!(parsed.diagnostics[0].error, ErrorId::OutOfRangeValue);
    }
}
