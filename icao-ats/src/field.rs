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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::diagnostic::Diagnostic;
use crate::utils::Token;
use crate::Catalog;

/// Identifies a field of a message.
///
/// Besides the numbered ICAO fields this includes the parts of the message
/// header, which are reported like fields, and [`FieldId::Message`] for
/// diagnostics concerning the telegram as a whole.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Catalog)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u16)]
pub enum FieldId {
    #[catalog(name = "MESSAGE")]
    Message = 0,
    #[catalog(name = "PRIORITY_INDICATOR")]
    Priority = 1,
    #[catalog(name = "FILING_TIME")]
    FilingTime = 2,
    #[catalog(name = "ORIGINATOR")]
    Originator = 3,
    #[catalog(name = "ADDRESS")]
    Addressee = 4,
    #[catalog(name = "ADADDRESS")]
    AdditionalAddressee = 5,
    F3 = 10,
    F5 = 11,
    F7 = 12,
    F8 = 13,
    F8a = 14,
    F9 = 15,
    F10 = 16,
    F13 = 17,
    F13a = 18,
    F14 = 19,
    F14a = 20,
    F15 = 21,
    F16 = 22,
    F16a = 23,
    F16ab = 24,
    F16abc = 25,
    F17 = 26,
    F18 = 27,
    F18dof = 28,
    F19 = 29,
    F20 = 30,
    F21 = 31,
    F22 = 32,
    #[catalog(name = "F22_Specific")]
    F22Specific = 33,
    F80 = 34,
    F81 = 35,
    #[catalog(name = "MFS_SIG_POINT")]
    MfsSigPoint = 36,
}

impl FieldId {
    /// Looks up the field of a field marker such as `F16ab`.
    ///
    /// The marker is matched case insensitive. Header parts and the message
    /// itself have no marker.
    pub fn from_marker(marker: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .filter(|id| id.is_body_field())
            .find(|id| id.name().eq_ignore_ascii_case(marker))
    }

    /// Looks up the field referenced by an amendment's field number.
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            3 => Some(Self::F3),
            5 => Some(Self::F5),
            7 => Some(Self::F7),
            8 => Some(Self::F8),
            9 => Some(Self::F9),
            10 => Some(Self::F10),
            13 => Some(Self::F13),
            14 => Some(Self::F14),
            15 => Some(Self::F15),
            16 => Some(Self::F16),
            17 => Some(Self::F17),
            18 => Some(Self::F18),
            19 => Some(Self::F19),
            20 => Some(Self::F20),
            21 => Some(Self::F21),
            22 => Some(Self::F22),
            80 => Some(Self::F80),
            81 => Some(Self::F81),
            _ => None,
        }
    }

    /// Returns `true` if this is a field of the message body.
    pub fn is_body_field(&self) -> bool {
        !matches!(
            self,
            Self::Message
                | Self::Priority
                | Self::FilingTime
                | Self::Originator
                | Self::Addressee
                | Self::AdditionalAddressee
        )
    }

    /// Returns the field which carries the complete content of this field.
    ///
    /// Lettered variants such as `F16ab` carry a subset of the subfields of
    /// their family. Two fields of the same family satisfy each other when a
    /// message title requires one of them.
    pub fn family(&self) -> Self {
        match self {
            Self::F8a => Self::F8,
            Self::F13a => Self::F13,
            Self::F14a => Self::F14,
            Self::F16a | Self::F16ab | Self::F16abc => Self::F16,
            Self::F18dof => Self::F18,
            Self::F22Specific => Self::F22,
            id => *id,
        }
    }
}

/// The raw text of a field and its position in the telegram.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct FieldText<'a> {
    id: FieldId,
    token: Token<'a>,
}

impl<'a> FieldText<'a> {
    /// Creates the text of the field `id` which starts at the byte `offset`
    /// of the telegram.
    pub fn new(id: FieldId, text: &'a str, offset: usize) -> Self {
        Self {
            id,
            token: Token::new(text, offset),
        }
    }

    pub(crate) fn from_token(id: FieldId, token: Token<'a>) -> Self {
        Self { id, token }
    }

    #[inline]
    pub fn id(&self) -> FieldId {
        self.id
    }

    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.token.as_str()
    }

    #[inline]
    pub fn token(&self) -> Token<'a> {
        self.token
    }
}

/// The result of a field parser.
///
/// Parsers never fail. Instead they return the value they were able to build
/// together with the diagnostics found on the way. A value may be present
/// even if there are diagnostics.
#[derive(Clone, PartialEq, Debug)]
pub struct Parsed<T> {
    pub value: Option<T>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Parsed<T> {
    /// Maps the value while keeping the diagnostics.
    pub fn map<U, F>(self, f: F) -> Parsed<U>
    where
        F: FnOnce(T) -> U,
    {
        Parsed {
            value: self.value.map(f),
            diagnostics: self.diagnostics,
        }
    }

    /// Returns `true` if there are no diagnostics.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers() {
        assert_eq!(FieldId::from_marker("F15"), Some(FieldId::F15));
        assert_eq!(FieldId::from_marker("f16ab"), Some(FieldId::F16ab));
        assert_eq!(FieldId::from_marker("F18DOF"), Some(FieldId::F18dof));
        assert_eq!(FieldId::from_marker("F22_Specific"), Some(FieldId::F22Specific));
        assert_eq!(FieldId::from_marker("F99"), None);
        assert_eq!(FieldId::from_marker("ORIGINATOR"), None);
    }

    #[test]
    fn families() {
        assert_eq!(FieldId::F16abc.family(), FieldId::F16);
        assert_eq!(FieldId::F18dof.family(), FieldId::F18);
        assert_eq!(FieldId::F15.family(), FieldId::F15);
    }

    #[test]
    fn amendment_numbers() {
        assert_eq!(FieldId::from_number(15), Some(FieldId::F15));
        assert_eq!(FieldId::from_number(81), Some(FieldId::F81));
        assert_eq!(FieldId::from_number(4), None);
    }
}
