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

use std::error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Catalog;

/// The kind of a diagnostic.
///
/// Each kind has a stable code which is never renumbered. The grammars of
/// this crate return an `ErrorId` as their error type.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Catalog)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u16)]
pub enum ErrorId {
    /// The telegram has no parseable structure at all.
    MalformedMessage = 1,
    /// A field or mandatory subfield contains no data.
    EmptyField = 2,
    /// A field marker or amendment refers to an unknown field.
    UnknownFieldIdentifier = 3,
    /// A subfield violates its grammar.
    InvalidSubFieldSyntax = 4,
    /// A well-formed value is outside of its valid range.
    OutOfRangeValue = 5,
    /// A field required by the message title is absent.
    MissingMandatoryField = 6,
    /// A field or amendment occurs more than once.
    DuplicateField = 7,
    /// A field ends before a mandatory subfield.
    MissingSubField = 8,
    /// Unexpected data follows the last subfield of a field.
    TooManySubFields = 9,
    /// A keyword of field 18 or 19 is not known.
    UnknownKeyword = 10,
    /// An equipment code or keyword is repeated within a field.
    DuplicateSubField = 11,
    /// A field is not part of the message title's layout.
    UnexpectedField = 12,
    /// Two fields contradict each other.
    InconsistentFields = 13,
}

impl ErrorId {
    /// Returns a short human readable description of this kind.
    pub fn description(&self) -> &'static str {
        match self {
            Self::MalformedMessage => "message has no recognizable structure",
            Self::EmptyField => "field is empty",
            Self::UnknownFieldIdentifier => "unknown field identifier",
            Self::InvalidSubFieldSyntax => "invalid subfield syntax",
            Self::OutOfRangeValue => "value is out of range",
            Self::MissingMandatoryField => "mandatory field is missing",
            Self::DuplicateField => "field occurs more than once",
            Self::MissingSubField => "more subfields expected",
            Self::TooManySubFields => "too many subfields",
            Self::UnknownKeyword => "unknown keyword",
            Self::DuplicateSubField => "subfield occurs more than once",
            Self::UnexpectedField => "field is not expected in this message",
            Self::InconsistentFields => "fields are inconsistent",
        }
    }
}

impl error::Error for ErrorId {}
