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

//! Field 8: flight rules and type of flight.

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::diagnostic::Report;
use crate::field::{FieldText, Parsed};
use crate::utils::Token;
use crate::{ErrorId, SubFieldId};

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FlightRules {
    /// IFR for the entire flight (`I`).
    Ifr,
    /// VFR for the entire flight (`V`).
    Vfr,
    /// IFR first, changing to VFR (`Y`).
    IfrThenVfr,
    /// VFR first, changing to IFR (`Z`).
    VfrThenIfr,
}

impl FromStr for FlightRules {
    type Err = ErrorId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "I" => Ok(Self::Ifr),
            "V" => Ok(Self::Vfr),
            "Y" => Ok(Self::IfrThenVfr),
            "Z" => Ok(Self::VfrThenIfr),
            _ => Err(ErrorId::InvalidSubFieldSyntax),
        }
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FlightType {
    Scheduled,
    NonScheduled,
    GeneralAviation,
    Military,
    Other,
}

impl FromStr for FlightType {
    type Err = ErrorId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(Self::Scheduled),
            "N" => Ok(Self::NonScheduled),
            "G" => Ok(Self::GeneralAviation),
            "M" => Ok(Self::Military),
            "X" => Ok(Self::Other),
            _ => Err(ErrorId::InvalidSubFieldSyntax),
        }
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlightRulesAndType {
    pub rules: FlightRules,
    pub flight_type: Option<FlightType>,
}

/// Parses field 8 with flight rules and type of flight.
pub fn parse(input: FieldText<'_>) -> Parsed<FlightRulesAndType> {
    let mut report = Report::new(input.id());
    let token = input.token().trim();
    let letters = letters(token);

    let Some(&rules) = letters.first() else {
        report.empty(token);
        return report.finish(None);
    };

    let rules = report.check(rules.as_str().parse(), SubFieldId::F8a, rules, "I, V, Y or Z");

    let flight_type = match letters.get(1) {
        Some(&flight_type) => report.check(
            flight_type.as_str().parse(),
            SubFieldId::F8b,
            flight_type,
            "S, N, G, M or X",
        ),
        None => {
            report.missing(SubFieldId::F8b, token.span().end, "the type of flight");
            None
        }
    };

    report.surplus(letters.get(2..).unwrap_or_default());

    report.finish(rules.map(|rules| FlightRulesAndType { rules, flight_type }))
}

/// Parses field 8a with the flight rules only.
pub fn parse_rules(input: FieldText<'_>) -> Parsed<FlightRules> {
    let mut report = Report::new(input.id());
    let token = input.token().trim();
    let letters = letters(token);

    let Some(&rules) = letters.first() else {
        report.empty(token);
        return report.finish(None);
    };

    let rules = report.check(rules.as_str().parse(), SubFieldId::F8a, rules, "I, V, Y or Z");
    report.surplus(letters.get(1..).unwrap_or_default());

    report.finish(rules)
}

/// Splits the field into single letters, ignoring whitespace.
fn letters(token: Token<'_>) -> Vec<Token<'_>> {
    token
        .split_whitespace()
        .into_iter()
        .flat_map(|word| {
            word.as_str()
                .char_indices()
                .filter_map(move |(i, c)| word.slice(i..i + c.len_utf8()))
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

    #[test]
    fn rules_and_type() {
        let parsed = parse(FieldText::new(FieldId::F8, "IS", 0));
        assert!(parsed.is_clean());
        assert_eq!(
            parsed.value,
            Some(FlightRulesAndType {
                rules: FlightRules::Ifr,
                flight_type: Some(FlightType::Scheduled)
            })
        );
    }

    #[test]
    fn invalid_type_keeps_rules() {
        let parsed = parse(FieldText::new(FieldId::F8, "YQ", 10));
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].subfield, Some(SubFieldId::F8b));
        assert_eq!(parsed.diagnostics[0].span.start, 11);
        assert_eq!(parsed.value.map(|v| v.rules), Some(FlightRules::IfrThenVfr));
    }

    #[test]
    fn missing_type() {
        let parsed = parse(FieldText::new(FieldId::F8, "V", 0));
        assert_eq!(parsed.diagnostics[0].error, ErrorId::MissingSubField);
    }

    #[test]
    fn rules_only() {
        let parsed = parse_rules(FieldText::new(FieldId::F8a, "Z", 0));
        assert_eq!(parsed.value, Some(FlightRules::VfrThenIfr));

        let parsed = parse_rules(FieldText::new(FieldId::F8a, "IS", 0));
        assert_eq!(parsed.diagnostics[0].error, ErrorId::TooManySubFields);
    }
}
