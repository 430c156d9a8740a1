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

//! Rules between the fields of a flight plan.
//!
//! The fields are parsed independently. These rules are checked afterwards
//! on the assembled record and only for messages which carry a complete
//! flight plan. A violation is reported against the field which lacks the
//! required data.

use log::trace;

use crate::diagnostic::{Diagnostic, Report};
use crate::fields::f15::CruisingLevel;
use crate::fields::f18::OtherInformation;
use crate::record::FlightPlanRecord;
use crate::utils::Span;
use crate::{ErrorId, FieldId};

/// The PBN codes and the COM/NAV equipment of which at least one must be
/// carried for them.
const PBN_EQUIPMENT: &[(&[&str], &[&str])] = &[
    (
        &["B1", "B3", "B4", "C1", "C3", "C4", "D1", "D3", "D4", "O1", "O3", "O4"],
        &["D"],
    ),
    (&["B1", "B2", "C1", "C2", "D1", "D2", "O1", "O2"], &["G"]),
    (&["B1", "B5", "C1", "C4", "D1", "D4", "O1", "O4"], &["I"]),
    (&["B1", "B4"], &["O", "S"]),
    (&["B1", "B2", "B3", "B4", "B5"], &["R"]),
];

/// The RNAV specifications which qualify an `R` in field 10a.
const RNAV: &[&str] = &["B1", "B2", "B3", "B4", "B5"];

struct Checker<'a> {
    record: &'a FlightPlanRecord,
    diagnostics: Vec<Diagnostic>,
}

impl Checker<'_> {
    /// Returns the span of the field or of the field that caused the check
    /// if the field is absent.
    fn span(&self, field: FieldId, cause: FieldId) -> Span {
        self.record
            .span(field)
            .or_else(|| self.record.span(cause))
            .unwrap_or_default()
    }

    fn violation(&mut self, field: FieldId, cause: FieldId, message: String) {
        trace!("{field} is inconsistent with {cause}: {message}");

        let mut report = Report::new(field);
        report.push(
            ErrorId::InconsistentFields,
            None,
            self.span(field, cause),
            message,
        );
        self.diagnostics.extend(report.into_diagnostics());
    }

    fn flight_rules(&mut self) {
        let record = self.record;
        let (field, rules) = match (record.rules_and_type(), record.flight_rules()) {
            (Some(f8), _) => (FieldId::F8, f8.rules),
            (None, Some(rules)) => (FieldId::F8a, *rules),
            _ => return,
        };

        let Some(route) = record.route() else {
            return;
        };

        // a route without level has already been reported
        if route.level.is_none() {
            return;
        }

        let derived = route.flight_rules();
        if rules != derived {
            let level = match route.level {
                Some(CruisingLevel::Vfr) => "VFR",
                _ => "IFR",
            };
            let message = format!(
                "flight rules are {rules:?} but the route starts {level} and requires {derived:?}"
            );
            self.violation(field, FieldId::F15, message);
        }
    }

    fn equipment(&mut self, f18: &OtherInformation) {
        let record = self.record;
        let Some(f10) = record.equipment() else {
            return;
        };

        if f10.has_com_nav("Z") && !["COM", "NAV", "DAT"].iter().any(|k| f18.contains(k)) {
            self.violation(
                FieldId::F18,
                FieldId::F10,
                "equipment Z requires COM, NAV or DAT in field 18".to_string(),
            );
        }

        let pbn = f18.pbn();

        if f10.has_com_nav("R") && !pbn.iter().any(|code| RNAV.contains(&code.as_str())) {
            self.violation(
                FieldId::F18,
                FieldId::F10,
                "equipment R requires a PBN/ specification B1 to B5 in field 18".to_string(),
            );
        }

        for (codes, equipment) in PBN_EQUIPMENT {
            let required = pbn.iter().find(|code| codes.contains(&code.as_str()));
            let carried = equipment.iter().any(|e| f10.has_com_nav(e));

            if let (Some(code), false) = (required, carried) {
                self.violation(
                    FieldId::F10,
                    FieldId::F18,
                    format!("PBN/{code} requires equipment {}", equipment.join(" or ")),
                );
            }
        }
    }

    fn unknown_indicators(&mut self, f18: &OtherInformation) {
        let record = self.record;
        let unknown_type = record.aircraft().is_some_and(|f9| f9.is_unknown_type());
        if unknown_type && !f18.contains("TYP") {
            self.violation(
                FieldId::F18,
                FieldId::F9,
                "aircraft type ZZZZ requires TYP/ in field 18".to_string(),
            );
        }

        let departure = record
            .departure()
            .map(|f13| &f13.aerodrome)
            .or_else(|| record.departure_aerodrome());
        if departure.is_some_and(|a| a.is_unknown()) && !f18.contains("DEP") {
            let cause = if record.contains(FieldId::F13) {
                FieldId::F13
            } else {
                FieldId::F13a
            };
            self.violation(
                FieldId::F18,
                cause,
                "departure aerodrome ZZZZ requires DEP/ in field 18".to_string(),
            );
        }

        let destination = record.destination().map(|f16| &f16.aerodrome);
        if destination.is_some_and(|a| a.is_unknown()) && !f18.contains("DEST") {
            self.violation(
                FieldId::F18,
                FieldId::F16,
                "destination aerodrome ZZZZ requires DEST/ in field 18".to_string(),
            );
        }
    }
}

/// Checks the rules between the fields of the record.
pub(crate) fn check(record: &FlightPlanRecord) -> Vec<Diagnostic> {
    let mut checker = Checker {
        record,
        diagnostics: Vec::new(),
    };

    let empty = OtherInformation::default();
    let f18 = record.other_information().unwrap_or(&empty);

    checker.flight_rules();
    checker.equipment(f18);
    checker.unknown_indicators(f18);

    checker.diagnostics
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::FieldValue;
    use crate::field::FieldText;

    fn record(fields: &[(FieldId, &str)]) -> FlightPlanRecord {
        let mut record = FlightPlanRecord::default();
        let mut offset = 0;

        for &(id, text) in fields {
            let parser = id.parser().expect("field should have a parser");
            let parsed = parser(FieldText::new(id, text, offset));
            assert!(parsed.is_clean(), "{:?}", parsed.diagnostics);

            let value: FieldValue = parsed.value.expect("field should parse");
            record.fields.insert(id, value);
            record.spans.insert(id, Span::new(offset, offset + text.len()));
            offset += text.len() + 1;
        }

        record
    }

    fn errors(fields: &[(FieldId, &str)]) -> Vec<(FieldId, ErrorId)> {
        check(&record(fields))
            .into_iter()
            .map(|d| (d.field, d.error))
            .collect()
    }

    #[test]
    fn consistent_flight_plan() {
        let errors = errors(&[
            (FieldId::F8, "IS"),
            (FieldId::F9, "A320/M"),
            (FieldId::F10, "SDFGIRWY/S"),
            (FieldId::F13, "EGLL1000"),
            (FieldId::F15, "N0450F330 DCT DVR"),
            (FieldId::F16, "LFPG0100"),
            (FieldId::F18, "PBN/B1D1 DOF/260101"),
        ]);
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn rules_derived_from_route() {
        assert_eq!(
            errors(&[(FieldId::F8, "IG"), (FieldId::F15, "N0100VFR DCT DVR IFR")]),
            vec![(FieldId::F8, ErrorId::InconsistentFields)]
        );
        assert!(errors(&[(FieldId::F8, "ZG"), (FieldId::F15, "N0100VFR DCT DVR IFR")]).is_empty());
        assert!(errors(&[(FieldId::F8, "YG"), (FieldId::F15, "N0100F100 DCT DVR VFR")]).is_empty());
    }

    #[test]
    fn equipment_requires_indicators() {
        assert_eq!(
            errors(&[(FieldId::F10, "SZ/C"), (FieldId::F18, "RMK/TEST")]),
            vec![(FieldId::F18, ErrorId::InconsistentFields)]
        );
        assert!(errors(&[(FieldId::F10, "SZ/C"), (FieldId::F18, "NAV/RNVD1E2A1")]).is_empty());
    }

    #[test]
    fn pbn_requires_equipment() {
        let errors = errors(&[(FieldId::F10, "SR/C"), (FieldId::F18, "PBN/B2")]);
        assert_eq!(errors, vec![(FieldId::F10, ErrorId::InconsistentFields)]);

        let diagnostics = check(&record(&[(FieldId::F10, "SR/C"), (FieldId::F18, "PBN/B2")]));
        assert!(diagnostics[0].message.contains("PBN/B2 requires equipment G"));
        assert_eq!(diagnostics[0].span, Span::new(0, 4));
    }

    #[test]
    fn unknown_aerodromes_require_names() {
        let errors = errors(&[
            (FieldId::F9, "ZZZZ/L"),
            (FieldId::F13, "ZZZZ0800"),
            (FieldId::F16, "EDDF0100"),
            (FieldId::F18, "TYP/DR400"),
        ]);
        assert_eq!(errors, vec![(FieldId::F18, ErrorId::InconsistentFields)]);
    }
}
