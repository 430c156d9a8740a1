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

//! Field 7: aircraft identification and SSR mode and code.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::diagnostic::Report;
use crate::field::{FieldText, Parsed};
use crate::utils::{is_alphanumeric, is_digits, Token};
use crate::{ErrorId, SubFieldId};

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SsrMode {
    A,
    C,
}

/// A transponder mode and its four digit octal code.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ssr {
    pub mode: SsrMode,
    pub code: u16,
}

impl fmt::Display for Ssr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{:04o}", self.mode, self.code)
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AircraftId {
    pub ident: String,
    pub ssr: Option<Ssr>,
}

pub fn parse(input: FieldText<'_>) -> Parsed<AircraftId> {
    let mut report = Report::new(input.id());
    let token = input.token().trim();

    let words = token.split_whitespace();
    let Some(&word) = words.first() else {
        report.empty(token);
        return report.finish(None);
    };
    report.surplus(&words[1..]);

    let (ident, ssr) = match (word.split_once('('), word.split_once('/')) {
        (Some((ident, ssr)), _) => match ssr.as_str().strip_suffix(')') {
            Some(code) => (ident, Some(Token::new(code, ssr.offset()))),
            None => {
                report.invalid(
                    ErrorId::InvalidSubFieldSyntax,
                    SubFieldId::F7b,
                    ssr,
                    "a SSR mode and code in parentheses",
                );
                (ident, None)
            }
        },
        (None, Some((ident, ssr))) => (ident, Some(ssr)),
        (None, None) => (word, None),
    };

    let s = ident.as_str();
    let valid = (2..=7).contains(&s.len())
        && s.as_bytes()[0].is_ascii_uppercase()
        && is_alphanumeric(s);

    if !valid {
        report.invalid(
            ErrorId::InvalidSubFieldSyntax,
            SubFieldId::F7a,
            ident,
            "two to seven letters and digits starting with a letter",
        );
    }

    let ssr = ssr.and_then(|ssr| parse_ssr(&mut report, ssr));

    report.finish(valid.then(|| AircraftId {
        ident: s.to_string(),
        ssr,
    }))
}

fn parse_ssr(report: &mut Report, token: Token<'_>) -> Option<Ssr> {
    let (mode, code) = token.split_at(1.min(token.len()))?;

    let mode = match mode.as_str() {
        "A" => Some(SsrMode::A),
        "C" => Some(SsrMode::C),
        "" => {
            report.missing(SubFieldId::F7b, token.offset(), "the SSR mode A or C");
            None
        }
        _ => {
            report.invalid(
                ErrorId::InvalidSubFieldSyntax,
                SubFieldId::F7b,
                mode,
                "the SSR mode A or C",
            );
            None
        }
    };

    let code = if code.len() != 4 || !is_digits(code.as_str()) {
        report.invalid(
            ErrorId::InvalidSubFieldSyntax,
            SubFieldId::F7c,
            code,
            "four octal digits",
        );
        None
    } else {
        report.check(
            u16::from_str_radix(code.as_str(), 8).map_err(|_| ErrorId::OutOfRangeValue),
            SubFieldId::F7c,
            code,
            "four octal digits",
        )
    };

    Some(Ssr {
        mode: mode?,
        code: code?,
    })
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldId;

    fn f7(s: &str) -> Parsed<AircraftId> {
        parse(FieldText::new(FieldId::F7, s, 0))
    }

    #[test]
    fn ident_only() {
        let parsed = f7("BAW123");
        assert!(parsed.is_clean());
        assert_eq!(
            parsed.value,
            Some(AircraftId {
                ident: "BAW123".to_string(),
                ssr: None
            })
        );
    }

    #[test]
    fn ident_with_ssr() {
        for s in ["BAW123/A1234", "BAW123(A1234)"] {
            let parsed = f7(s);
            assert!(parsed.is_clean(), "{s}");

            let ssr = parsed.value.and_then(|v| v.ssr).expect("SSR should parse");
            assert_eq!(ssr.mode, SsrMode::A);
            assert_eq!(ssr.to_string(), "A1234");
        }
    }

    #[test]
    fn non_octal_code() {
        let parsed = f7("BAW123/A1289");
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].error, ErrorId::OutOfRangeValue);
        assert_eq!(parsed.diagnostics[0].subfield, Some(SubFieldId::F7c));
        assert_eq!(parsed.value.map(|v| v.ident), Some("BAW123".to_string()));
    }

    #[test]
    fn invalid_ident() {
        let parsed = f7("1BAW");
        assert_eq!(parsed.diagnostics[0].subfield, Some(SubFieldId::F7a));
        assert!(parsed.value.is_none());

        let parsed = f7("BAW12345");
        assert_eq!(parsed.diagnostics[0].error, ErrorId::InvalidSubFieldSyntax);
    }

    #[test]
    fn invalid_ident_still_checks_ssr() {
        let parsed = f7("1BAW/A9999");
        assert!(parsed.value.is_none());

        let found: Vec<_> = parsed
            .diagnostics
            .iter()
            .map(|d| (d.subfield, d.span.start))
            .collect();

        assert_eq!(
            found,
            vec![(Some(SubFieldId::F7a), 0), (Some(SubFieldId::F7c), 6)]
        );
    }
}
