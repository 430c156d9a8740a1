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

//! Field 5: description of emergency, or the message priority.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::common::{Address, Priority};
use crate::diagnostic::Report;
use crate::field::{FieldText, Parsed};
use crate::utils::{is_free_text, normalize};
use crate::{ErrorId, SubFieldId};

/// The phase of emergency of an alerting message.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EmergencyPhase {
    /// Uncertainty phase.
    Incerfa,
    /// Alert phase.
    Alerfa,
    /// Distress phase.
    Detresfa,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Urgency {
    Priority(Priority),
    Emergency {
        phase: EmergencyPhase,
        originator: Option<Address>,
        nature: String,
    },
}

pub fn parse(input: FieldText<'_>) -> Parsed<Urgency> {
    let mut report = Report::new(input.id());
    let token = input.token().trim();

    if token.is_empty() {
        report.empty(token);
        return report.finish(None);
    }

    let Some((phase, rest)) = token.split_once('/') else {
        let priority = report.check(
            token.as_str().parse::<Priority>(),
            SubFieldId::F5a,
            token,
            "one of FF, GG, DD, KK or SS",
        );
        return report.finish(priority.map(Urgency::Priority));
    };

    let phase = match phase.as_str() {
        "INCERFA" => EmergencyPhase::Incerfa,
        "ALERFA" => EmergencyPhase::Alerfa,
        "DETRESFA" => EmergencyPhase::Detresfa,
        _ => {
            report.invalid(
                ErrorId::InvalidSubFieldSyntax,
                SubFieldId::F5a,
                phase,
                "INCERFA, ALERFA or DETRESFA",
            );
            return report.finish(None);
        }
    };

    let Some((originator, nature)) = rest.split_once('/') else {
        report.missing(SubFieldId::F5c, rest.span().end, "the nature of emergency");
        let originator = report.check(
            rest.as_str().parse::<Address>(),
            SubFieldId::F5b,
            rest,
            "an AFTN address",
        );
        return report.finish(Some(Urgency::Emergency {
            phase,
            originator,
            nature: String::new(),
        }));
    };

    let originator = report.check(
        originator.as_str().parse::<Address>(),
        SubFieldId::F5b,
        originator,
        "an AFTN address",
    );

    if !is_free_text(nature.as_str()) {
        report.invalid(
            ErrorId::InvalidSubFieldSyntax,
            SubFieldId::F5c,
            nature,
            "free text",
        );
    }

    report.finish(Some(Urgency::Emergency {
        phase,
        originator,
        nature: normalize(nature.as_str()),
    }))
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldId;

    fn f5(s: &str) -> Parsed<Urgency> {
        parse(FieldText::new(FieldId::F5, s, 0))
    }

    #[test]
    fn priority() {
        let parsed = f5("FF");
        assert!(parsed.is_clean());
        assert_eq!(parsed.value, Some(Urgency::Priority(Priority::FlightSafety)));

        let parsed = f5("XX");
        assert_eq!(parsed.diagnostics[0].error, ErrorId::InvalidSubFieldSyntax);
        assert!(parsed.value.is_none());
    }

    #[test]
    fn emergency() {
        let parsed = f5("ALERFA/EINNZQZX/REPORT OVERDUE");
        assert!(parsed.is_clean());

        match parsed.value.expect("emergency should parse") {
            Urgency::Emergency {
                phase,
                originator,
                nature,
            } => {
                assert_eq!(phase, EmergencyPhase::Alerfa);
                assert_eq!(originator.map(|a| a.to_string()), Some("EINNZQZX".to_string()));
                assert_eq!(nature, "REPORT OVERDUE");
            }
            urgency => panic!("should be an emergency but is {urgency:?}"),
        }
    }

    #[test]
    fn emergency_without_nature() {
        let parsed = f5("INCERFA/EINNZQZX");
        assert_eq!(parsed.diagnostics[0].error, ErrorId::MissingSubField);
        assert!(parsed.value.is_some());
    }
}
