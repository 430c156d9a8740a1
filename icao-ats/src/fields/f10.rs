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

//! Field 10: equipment and capabilities.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::diagnostic::Report;
use crate::field::{FieldText, Parsed};
use crate::utils::Token;
use crate::{ErrorId, SubFieldId};

const COM_NAV: &[&str] = &[
    "A", "B", "C", "D", "E1", "E2", "E3", "F", "G", "H", "I", "J1", "J2", "J3", "J4", "J5", "J6",
    "J7", "K", "L", "M1", "M2", "M3", "O", "P1", "P2", "P3", "P4", "P5", "P6", "P7", "P8", "P9",
    "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
];

const SURVEILLANCE: &[&str] = &[
    "A", "B1", "B2", "C", "D1", "E", "G1", "H", "I", "L", "P", "S", "U1", "U2", "V1", "V2", "X",
];

/// The radio communication, navigation and approach aid equipment (10a)
/// and the surveillance equipment (10b) of the aircraft.
///
/// An empty list means `N`, i.e. no equipment is carried or it is
/// unserviceable.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Equipment {
    pub com_nav: Vec<String>,
    pub surveillance: Vec<String>,
}

impl Equipment {
    /// Returns `true` if the COM/NAV equipment contains the code.
    pub fn has_com_nav(&self, code: &str) -> bool {
        self.com_nav.iter().any(|c| c == code)
    }

    /// Returns `true` if the surveillance equipment contains the code.
    pub fn has_surveillance(&self, code: &str) -> bool {
        self.surveillance.iter().any(|c| c == code)
    }
}

pub fn parse(input: FieldText<'_>) -> Parsed<Equipment> {
    let mut report = Report::new(input.id());
    let token = input.token().trim();

    let groups = token.split(&['/', ' ', '\t', '\r', '\n']);
    let Some(&com_nav) = groups.first() else {
        report.empty(token);
        return report.finish(None);
    };

    let com_nav = items(&mut report, com_nav, SubFieldId::F10a, COM_NAV);

    let surveillance = match groups.get(1) {
        Some(&surveillance) => items(&mut report, surveillance, SubFieldId::F10b, SURVEILLANCE),
        None => {
            report.missing(SubFieldId::F10b, token.span().end, "the surveillance equipment");
            Vec::new()
        }
    };

    report.surplus(groups.get(2..).unwrap_or_default());

    report.finish(Some(Equipment {
        com_nav,
        surveillance,
    }))
}

/// Splits a group into its codes.
///
/// A code is a letter which may be followed by a digit. Unknown codes are
/// reported and skipped, repeated codes are reported and kept once.
fn items(
    report: &mut Report,
    group: Token<'_>,
    subfield: SubFieldId,
    known: &[&str],
) -> Vec<String> {
    let mut codes: Vec<String> = Vec::new();

    if group.as_str() == "N" {
        return codes;
    }

    let bytes = group.as_str().as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let len = match bytes.get(i + 1) {
            Some(b) if b.is_ascii_digit() => 2,
            _ => 1,
        };

        let Some(item) = group.slice(i..i + len) else {
            break;
        };
        i += len;

        if !known.contains(&item.as_str()) {
            report.invalid(
                ErrorId::InvalidSubFieldSyntax,
                subfield,
                item,
                "an equipment code",
            );
        } else if codes.iter().any(|c| c == item.as_str()) {
            report.invalid(
                ErrorId::DuplicateSubField,
                subfield,
                item,
                "listed only once",
            );
        } else {
            codes.push(item.as_str().to_string());
        }
    }

    codes
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldId;

    fn f10(s: &str) -> Parsed<Equipment> {
        parse(FieldText::new(FieldId::F10, s, 0))
    }

    #[test]
    fn both_groups() {
        let parsed = f10("SDE1FGHIRWY/LB1");
        assert!(parsed.is_clean());

        let equipment = parsed.value.expect("equipment should parse");
        assert!(equipment.has_com_nav("E1"));
        assert!(equipment.has_com_nav("R"));
        assert!(!equipment.has_com_nav("E"));
        assert_eq!(equipment.surveillance, vec!["L", "B1"]);
    }

    #[test]
    fn no_equipment() {
        let equipment = f10("N/N").value.expect("equipment should parse");
        assert_eq!(equipment, Equipment::default());
    }

    #[test]
    fn duplicate_code() {
        let parsed = f10("SDGS/C");
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].error, ErrorId::DuplicateSubField);
        assert_eq!(parsed.diagnostics[0].span.start, 3);
        assert_eq!(
            parsed.value.map(|e| e.com_nav),
            Some(vec!["S".to_string(), "D".to_string(), "G".to_string()])
        );
    }

    #[test]
    fn unknown_code() {
        let parsed = f10("SQ/C");
        assert_eq!(parsed.diagnostics[0].error, ErrorId::InvalidSubFieldSyntax);
        assert_eq!(parsed.diagnostics[0].subfield, Some(SubFieldId::F10a));
    }

    #[test]
    fn missing_surveillance() {
        let parsed = f10("S");
        assert_eq!(parsed.diagnostics[0].error, ErrorId::MissingSubField);
    }
}
