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

//! Field 19: supplementary information.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::Duration;

use super::{groups, Group};
use crate::common::parse_elapsed;
use crate::diagnostic::Report;
use crate::field::{FieldText, Parsed};
use crate::utils::{is_digits, is_free_text, normalize};
use crate::{ErrorId, SubFieldId};

/// The dinghies carried on board.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dinghies {
    pub number: u8,
    /// Total capacity in persons.
    pub capacity: u16,
    pub covered: bool,
    pub colour: String,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SupplementaryItem {
    /// `E/` fuel endurance.
    Endurance(Duration),
    /// `P/` persons on board, or `None` if they are to be notified (`TBN`).
    PersonsOnBoard(Option<u16>),
    /// `R/` emergency radio, any of `U`, `V` and `E`.
    Radio(String),
    /// `S/` survival equipment, any of `P`, `D`, `M` and `J`.
    Survival(String),
    /// `J/` life jackets, any of `L`, `F`, `U` and `V`.
    Jackets(String),
    /// `D/` dinghies.
    Dinghies(Dinghies),
    /// `A/` colour and markings of the aircraft.
    AircraftColour(String),
    /// `N/` remarks.
    Remarks(String),
    /// `C/` pilot in command.
    PilotInCommand(String),
    Unknown { label: String, value: String },
}

impl SupplementaryItem {
    /// Returns the label of this item.
    pub fn label(&self) -> &str {
        match self {
            Self::Endurance(_) => "E",
            Self::PersonsOnBoard(_) => "P",
            Self::Radio(_) => "R",
            Self::Survival(_) => "S",
            Self::Jackets(_) => "J",
            Self::Dinghies(_) => "D",
            Self::AircraftColour(_) => "A",
            Self::Remarks(_) => "N",
            Self::PilotInCommand(_) => "C",
            Self::Unknown { label, .. } => label,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Supplementary {
    pub items: Vec<SupplementaryItem>,
}

impl Supplementary {
    /// Returns the item with the label.
    pub fn get(&self, label: &str) -> Option<&SupplementaryItem> {
        self.items.iter().find(|i| i.label() == label)
    }
}

/// Parses field 19, e.g. `E/0745 P/6 R/VE S/M J/L A/YELLOW`.
pub fn parse(input: FieldText<'_>) -> Parsed<Supplementary> {
    let mut report = Report::new(input.id());
    let token = input.token().trim();

    if token.is_empty() {
        report.empty(token);
        return report.finish(None);
    }

    let (leading, groups) = groups(token, 1..=1);
    if !leading.is_empty() {
        report.invalid(
            ErrorId::InvalidSubFieldSyntax,
            SubFieldId::F19keyword,
            leading,
            "items such as E/0745",
        );
    }

    let mut supplementary = Supplementary::default();
    let mut seen: Vec<&str> = Vec::new();

    for Group { label, value } in groups {
        if seen.contains(&label.as_str()) {
            report.invalid(
                ErrorId::DuplicateSubField,
                SubFieldId::F19keyword,
                label,
                "used only once",
            );
            continue;
        }
        seen.push(label.as_str());

        let v = value.as_str();
        let (subfield, expected, item) = match label.as_str() {
            "E" => (
                SubFieldId::F19e,
                "an endurance HHMM",
                parse_elapsed(v).map(SupplementaryItem::Endurance),
            ),
            "P" => (
                SubFieldId::F19p,
                "one to three digits or TBN",
                persons(v).map(SupplementaryItem::PersonsOnBoard),
            ),
            "R" => (
                SubFieldId::F19r,
                "any of U, V and E",
                letters(v, "UVE").map(SupplementaryItem::Radio),
            ),
            "S" => (
                SubFieldId::F19s,
                "any of P, D, M and J",
                letters(v, "PDMJ").map(SupplementaryItem::Survival),
            ),
            "J" => (
                SubFieldId::F19j,
                "any of L, F, U and V",
                letters(v, "LFUV").map(SupplementaryItem::Jackets),
            ),
            "D" => (
                SubFieldId::F19d,
                "number, capacity, C if covered and colour",
                dinghies(v).map(SupplementaryItem::Dinghies),
            ),
            "A" => (
                SubFieldId::F19a,
                "free text",
                text(v).map(SupplementaryItem::AircraftColour),
            ),
            "N" => (
                SubFieldId::F19n,
                "free text",
                text(v).map(SupplementaryItem::Remarks),
            ),
            "C" => (
                SubFieldId::F19c,
                "free text",
                text(v).map(SupplementaryItem::PilotInCommand),
            ),
            _ => {
                report.invalid(
                    ErrorId::UnknownKeyword,
                    SubFieldId::F19keyword,
                    label,
                    "one of E, P, R, S, J, D, A, N or C",
                );
                supplementary.items.push(SupplementaryItem::Unknown {
                    label: label.as_str().to_string(),
                    value: v.to_string(),
                });
                continue;
            }
        };

        if let Some(item) = report.check(item, subfield, value, expected) {
            supplementary.items.push(item);
        }
    }

    report.finish(Some(supplementary))
}

fn text(v: &str) -> Result<String, ErrorId> {
    if !v.trim().is_empty() && is_free_text(v) {
        Ok(normalize(v))
    } else {
        Err(ErrorId::InvalidSubFieldSyntax)
    }
}

fn persons(v: &str) -> Result<Option<u16>, ErrorId> {
    match v {
        "TBN" => Ok(None),
        v if (1..=3).contains(&v.len()) && is_digits(v) => {
            digits!(v, u16).map(Some).ok_or(ErrorId::InvalidSubFieldSyntax)
        }
        _ => Err(ErrorId::InvalidSubFieldSyntax),
    }
}

/// Collects the letters of the value which must be a subset of `allowed`.
fn letters(v: &str, allowed: &str) -> Result<String, ErrorId> {
    let letters: String = v.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    if !letters.is_empty() && letters.chars().all(|c| allowed.contains(c)) {
        Ok(letters)
    } else {
        Err(ErrorId::InvalidSubFieldSyntax)
    }
}

fn dinghies(v: &str) -> Result<Dinghies, ErrorId> {
    let mut words = v.split_ascii_whitespace().peekable();

    let number = words
        .next()
        .filter(|w| w.len() <= 2)
        .and_then(|w| digits!(w, u8))
        .ok_or(ErrorId::InvalidSubFieldSyntax)?;

    let capacity = words
        .next()
        .filter(|w| w.len() <= 3)
        .and_then(|w| digits!(w, u16))
        .ok_or(ErrorId::InvalidSubFieldSyntax)?;

    let covered = words.next_if_eq(&"C").is_some();
    let colour = words.collect::<Vec<_>>().join(" ");

    Ok(Dinghies {
        number,
        capacity,
        covered,
        colour: text(&colour)?,
    })
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldId;

    fn f19(s: &str) -> Parsed<Supplementary> {
        parse(FieldText::new(FieldId::F19, s, 0))
    }

    #[test]
    fn supplementary_information() {
        let parsed = f19("E/0745 P/6 R/VE S/M J/L F D/2 10 C YELLOW A/WHITE RED N/NIL C/SMITH");
        assert!(parsed.is_clean(), "{:?}", parsed.diagnostics);

        let info = parsed.value.expect("supplementary information should parse");
        assert_eq!(info.items.len(), 9);
        assert_eq!(
            info.get("E"),
            Some(&SupplementaryItem::Endurance(Duration::minutes(7 * 60 + 45)))
        );
        assert_eq!(info.get("P"), Some(&SupplementaryItem::PersonsOnBoard(Some(6))));
        assert_eq!(info.get("J"), Some(&SupplementaryItem::Jackets("LF".to_string())));
        assert_eq!(
            info.get("D"),
            Some(&SupplementaryItem::Dinghies(Dinghies {
                number: 2,
                capacity: 10,
                covered: true,
                colour: "YELLOW".to_string(),
            }))
        );
    }

    #[test]
    fn persons_to_be_notified() {
        let info = f19("P/TBN").value.expect("supplementary information should parse");
        assert_eq!(info.get("P"), Some(&SupplementaryItem::PersonsOnBoard(None)));
    }

    #[test]
    fn invalid_radio() {
        let parsed = f19("R/VX");
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].subfield, Some(SubFieldId::F19r));
    }

    #[test]
    fn unknown_label() {
        let parsed = f19("E/0300 X/FOO");
        assert_eq!(parsed.diagnostics[0].error, ErrorId::UnknownKeyword);
        assert_eq!(parsed.value.map(|i| i.items.len()), Some(2));
    }
}
