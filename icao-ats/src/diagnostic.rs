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

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::field::Parsed;
use crate::utils::{Span, Token};
use crate::{ErrorId, FieldId, SubFieldId};

/// A grammar violation found while parsing a telegram.
///
/// The span points into the original telegram, which allows to highlight the
/// defect in place.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostic {
    pub error: ErrorId,
    pub field: FieldId,
    pub subfield: Option<SubFieldId>,
    pub span: Span,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.subfield {
            Some(subfield) => write!(
                f,
                "{} at {} ({}/{}): {}",
                self.error, self.span, self.field, subfield, self.message
            ),
            None => write!(
                f,
                "{} at {} ({}): {}",
                self.error, self.span, self.field, self.message
            ),
        }
    }
}

/// Collects the diagnostics of a single field.
pub(crate) struct Report {
    field: FieldId,
    diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn new(field: FieldId) -> Self {
        Self {
            field,
            diagnostics: Vec::new(),
        }
    }

    /// Returns the field the diagnostics are reported against.
    pub fn field(&self) -> FieldId {
        self.field
    }

    /// Adds a diagnostic with a message.
    pub fn push(
        &mut self,
        error: ErrorId,
        subfield: Option<SubFieldId>,
        span: Span,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(Diagnostic {
            error,
            field: self.field,
            subfield,
            span,
            message: message.into(),
        });
    }

    /// Adds a diagnostic for a token that is not what was `expected`.
    pub fn invalid(&mut self, error: ErrorId, subfield: SubFieldId, token: Token, expected: &str) {
        self.push(
            error,
            Some(subfield),
            token.span(),
            format!("found \"{token}\" in {subfield} but should be {expected}"),
        );
    }

    /// Adds a diagnostic for a subfield which is missing at the position.
    pub fn missing(&mut self, subfield: SubFieldId, at: usize, expected: &str) {
        self.push(
            ErrorId::MissingSubField,
            Some(subfield),
            Span::new(at, at),
            format!("{subfield} is missing but should be {expected}"),
        );
    }

    /// Adds a diagnostic for an empty field.
    pub fn empty(&mut self, token: Token) {
        let field = self.field;
        self.push(
            ErrorId::EmptyField,
            None,
            token.span(),
            format!("there is no data in {field}"),
        );
    }

    /// Adds a diagnostic for surplus data after the last subfield.
    pub fn surplus(&mut self, tokens: &[Token]) {
        if let (Some(first), Some(last)) = (tokens.first(), tokens.last()) {
            let text: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
            let field = self.field;
            self.push(
                ErrorId::TooManySubFields,
                None,
                Span::new(first.offset(), last.span().end),
                format!("{field} is complete but \"{}\" follows", text.join(" ")),
            );
        }
    }

    /// Unwraps the result of a grammar or adds a diagnostic for the token.
    pub fn check<T>(
        &mut self,
        result: Result<T, ErrorId>,
        subfield: SubFieldId,
        token: Token,
        expected: &str,
    ) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.invalid(error, subfield, token, expected);
                None
            }
        }
    }

    /// Appends diagnostics of a nested parser.
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    /// Returns the diagnostics of a report which carries no value.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn finish<T>(self, value: Option<T>) -> Parsed<T> {
        Parsed {
            value,
            diagnostics: self.diagnostics,
        }
    }
}
