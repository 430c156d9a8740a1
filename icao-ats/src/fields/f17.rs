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

//! Field 17: arrival aerodrome and time.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::Time;

use crate::common::{parse_time, Aerodrome};
use crate::diagnostic::Report;
use crate::field::{FieldText, Parsed};
use crate::fields::f13::aerodrome_and_time;
use crate::utils::{is_free_text, normalize};
use crate::{ErrorId, SubFieldId};

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Arrival {
    pub aerodrome: Aerodrome,
    pub time: Option<Time>,
    /// The name of the arrival aerodrome if its indicator is `ZZZZ`.
    pub name: Option<String>,
}

pub fn parse(input: FieldText<'_>) -> Parsed<Arrival> {
    let mut report = Report::new(input.id());
    let token = input.token().trim();

    let words = token.split_whitespace();
    let Some(&word) = words.first() else {
        report.empty(token);
        return report.finish(None);
    };

    let (aerodrome, time) = aerodrome_and_time(&mut report, word, SubFieldId::F17a);

    let time = match time {
        Some(time) => {
            report.check(parse_time(time.as_str()), SubFieldId::F17b, time, "a time HHMM")
        }
        None => {
            report.missing(SubFieldId::F17b, word.span().end, "a time HHMM");
            None
        }
    };

    let name = match (words.get(1), words.last()) {
        (Some(first), Some(last)) => {
            let name = token
                .slice(first.offset() - token.offset()..last.span().end - token.offset())
                .unwrap_or(*first);

            if !is_free_text(name.as_str()) {
                report.invalid(
                    ErrorId::InvalidSubFieldSyntax,
                    SubFieldId::F17c,
                    name,
                    "free text",
                );
            }

            Some(normalize(name.as_str()))
        }
        _ => None,
    };

    report.finish(aerodrome.map(|aerodrome| Arrival {
        aerodrome,
        time,
        name,
    }))
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldId;

    fn f17(s: &str) -> Parsed<Arrival> {
        parse(FieldText::new(FieldId::F17, s, 0))
    }

    #[test]
    fn arrival() {
        let parsed = f17("EGLL1200");
        assert!(parsed.is_clean());

        let arrival = parsed.value.expect("arrival should parse");
        assert_eq!(arrival.aerodrome.as_str(), "EGLL");
        assert_eq!(arrival.time, Time::from_hms(12, 0, 0).ok());
        assert_eq!(arrival.name, None);
    }

    #[test]
    fn named_aerodrome() {
        let parsed = f17("ZZZZ1200 BRISTOL  FILTON");
        assert!(parsed.is_clean());
        assert_eq!(
            parsed.value.and_then(|a| a.name),
            Some("BRISTOL FILTON".to_string())
        );
    }

    #[test]
    fn time_boundary() {
        assert!(f17("EGLL2359").is_clean());

        let parsed = f17("EGLL2400");
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].error, ErrorId::OutOfRangeValue);
    }
}
