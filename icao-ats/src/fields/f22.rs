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

//! Field 22: amendments.
//!
//! Each amendment `n/text` replaces the field with the number `n`. Its text
//! is parsed by the same parser the message uses for that field. Diagnostics
//! of the amended field are reported against field 22 but keep the subfield
//! and the position in the telegram.

use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::diagnostic::Report;
use crate::dispatch::FieldValue;
use crate::field::{FieldText, Parsed};
use crate::utils::{Span, Token};
use crate::{ErrorId, FieldId, SubFieldId};

/// The amendment of a single field.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Amendment {
    pub field: FieldId,
    /// The new value of the field, if it could be parsed.
    pub value: Option<FieldValue>,
    /// The span of the amended text.
    pub span: Span,
}

#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Amendments {
    pub amendments: Vec<Amendment>,
}

impl Amendments {
    /// Returns the amendment of the field.
    pub fn get(&self, field: FieldId) -> Option<&Amendment> {
        self.amendments.iter().find(|a| a.field == field)
    }

    pub fn len(&self) -> usize {
        self.amendments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amendments.is_empty()
    }
}

impl<'a> IntoIterator for &'a Amendments {
    type Item = &'a Amendment;
    type IntoIter = std::slice::Iter<'a, Amendment>;

    fn into_iter(self) -> Self::IntoIter {
        self.amendments.iter()
    }
}

/// Parses field 22 or the OLDI specific field 22, e.g.
/// `9/B738/M-15/N0450F350 DCT DVR`.
pub fn parse(input: FieldText<'_>) -> Parsed<Amendments> {
    let mut report = Report::new(input.id());
    let token = input.token().trim();

    let pieces = token.split(&['-']);
    if pieces.iter().all(|piece| piece.trim().is_empty()) {
        report.empty(token);
        return report.finish(None);
    }

    let mut amendments = Amendments::default();

    for piece in pieces {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }

        if let Some(amendment) = amend(&mut report, piece, &amendments) {
            amendments.amendments.push(amendment);
        }
    }

    report.finish(Some(amendments))
}

fn amend(report: &mut Report, piece: Token<'_>, amended: &Amendments) -> Option<Amendment> {
    let Some((number, text)) = piece.split_once('/') else {
        report.invalid(
            ErrorId::InvalidSubFieldSyntax,
            SubFieldId::F22Field,
            piece,
            "a field number followed by / and the field",
        );
        return None;
    };

    let field = digits!(number.as_str(), u8)
        .filter(|_| number.len() <= 2)
        .and_then(FieldId::from_number);

    let Some(field) = field else {
        report.invalid(
            ErrorId::UnknownFieldIdentifier,
            SubFieldId::F22Field,
            number,
            "the number of an amendable field",
        );
        return None;
    };

    if amended.get(field).is_some() {
        report.invalid(
            ErrorId::DuplicateField,
            SubFieldId::F22Field,
            number,
            "amended only once",
        );
        return None;
    }

    trace!("amending {} with {:?}", field, text.as_str());

    let parser = field.parser()?;
    let Parsed { value, diagnostics } = parser(FieldText::from_token(field, text));

    let id = report.field();
    report.extend(diagnostics.into_iter().map(|mut diagnostic| {
        diagnostic.field = id;
        diagnostic
    }));

    Some(Amendment {
        field,
        value,
        span: piece.span(),
    })
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::f15;

    fn f22(s: &str, offset: usize) -> Parsed<Amendments> {
        parse(FieldText::new(FieldId::F22, s, offset))
    }

    #[test]
    fn amends_like_the_field_parser() {
        let route = "N0450F330 DCT DVR";
        let parsed = f22(&format!("15/{route}"), 0);
        assert!(parsed.is_clean());

        let direct = f15::parse(FieldText::new(FieldId::F15, route, 3));
        let amendments = parsed.value.expect("amendments should parse");
        assert_eq!(
            amendments.get(FieldId::F15).and_then(|a| a.value.clone()),
            direct.value.map(FieldValue::F15)
        );
    }

    #[test]
    fn several_amendments() {
        let parsed = f22("9/B738/M-13/EGLL1030-16/LFPG0115 LFPO", 0);
        assert!(parsed.is_clean(), "{:?}", parsed.diagnostics);

        let amendments = parsed.value.expect("amendments should parse");
        let fields: Vec<FieldId> = amendments.into_iter().map(|a| a.field).collect();
        assert_eq!(fields, vec![FieldId::F9, FieldId::F13, FieldId::F16]);
    }

    #[test]
    fn nested_diagnostics_point_into_telegram() {
        let parsed = f22("13/EGLL2400", 50);
        assert_eq!(parsed.diagnostics.len(), 1);

        let diagnostic = &parsed.diagnostics[0];
        assert_eq!(diagnostic.error, ErrorId::OutOfRangeValue);
        assert_eq!(diagnostic.field, FieldId::F22);
        assert_eq!(diagnostic.subfield, Some(SubFieldId::F13b));
        assert_eq!(diagnostic.span, Span::new(57, 61));
    }

    #[test]
    fn unknown_and_duplicate_fields() {
        let parsed = f22("4/X-13/EGLL1000-13/EGLL1100", 0);
        let errors: Vec<ErrorId> = parsed.diagnostics.iter().map(|d| d.error).collect();
        assert_eq!(
            errors,
            vec![ErrorId::UnknownFieldIdentifier, ErrorId::DuplicateField]
        );
        assert_eq!(parsed.value.map(|a| a.len()), Some(1));
    }

    #[test]
    fn specific_amendments_are_tagged() {
        let parsed = parse(FieldText::new(FieldId::F22Specific, "9/B73/X", 0));
        assert_eq!(parsed.diagnostics[0].field, FieldId::F22Specific);
    }
}
