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

//! Message titles and their field layouts.

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Catalog, ErrorId, FieldId};

use FieldId::*;

/// The protocol family of a message.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MessageType {
    /// ICAO Air Traffic Services messages.
    #[default]
    Ats,
    /// On-Line Data Interchange messages between adjacent units.
    Oldi,
}

/// The three letter title of field 3.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Catalog)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u16)]
#[allow(clippy::upper_case_acronyms)]
pub enum MessageTitle {
    ABI = 1,
    ACH = 2,
    ACP = 3,
    ACT = 4,
    AFP = 5,
    ALR = 6,
    AMA = 7,
    APL = 8,
    ARR = 9,
    CDN = 10,
    CHG = 11,
    CNL = 12,
    COD = 13,
    CPL = 14,
    DEP = 15,
    DLA = 16,
    EST = 17,
    FPL = 18,
    FNM = 19,
    INF = 20,
    LAM = 21,
    MAC = 22,
    MFS = 23,
    OCM = 24,
    PAC = 25,
    RAP = 26,
    REJ = 27,
    REV = 28,
    RCF = 29,
    RJC = 30,
    ROC = 31,
    RQP = 32,
    RQS = 33,
    RRV = 34,
    SBY = 35,
    SPL = 36,
}

/// The fields a message carries in the order of the positional form.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct Layout {
    /// All fields of the message. They are mandatory.
    pub fields: &'static [FieldId],
    /// The fields which may be amended in field 22 of an OLDI message.
    pub specific: &'static [FieldId],
}

macro_rules! layout {
    ($($field:ident)*) => {
        &Layout {
            fields: &[$($field),*],
            specific: &[],
        }
    };

    ($($field:ident)* ; $($specific:ident)*) => {
        &Layout {
            fields: &[$($field),*],
            specific: &[$($specific),*],
        }
    };
}

impl MessageTitle {
    /// Returns the message type of this title.
    ///
    /// Titles that exist in both families use the `default`.
    pub fn message_type(&self, default: MessageType) -> MessageType {
        use MessageTitle::*;

        match self {
            ABI | ACT | AMA | COD | INF | LAM | MAC | OCM | PAC | RAP | REJ | REV | RJC | ROC
            | RRV | SBY => MessageType::Oldi,
            ACP | CDN | CPL => default,
            _ => MessageType::Ats,
        }
    }

    /// Returns the field layout of this title for the message type.
    ///
    /// Titles which don't exist in the message type fall back to the layout
    /// of the family they exist in.
    pub fn layout(&self, message_type: MessageType) -> &'static Layout {
        use MessageTitle::*;

        match (self.message_type(message_type), self) {
            (MessageType::Oldi, ABI | ACT) => layout!(F3 F7 F13a F14 F16a F22Specific; F9 F80 F81),
            (MessageType::Oldi, ACP | LAM | RJC | SBY) => layout!(F3),
            (MessageType::Oldi, AMA) => layout!(F3 F7 F13a F16a F22Specific; F18),
            (MessageType::Oldi, CDN) => layout!(F3 F7 F13a F16a),
            (MessageType::Oldi, COD) => layout!(F3 F7 F13 F16a),
            (MessageType::Oldi, CPL) => layout!(F3 F7 F13 F16ab F18dof F22Specific; F9),
            (MessageType::Oldi, INF) => layout!(F3 F7 F13a F16a F22Specific; F9 F15 F18),
            (MessageType::Oldi, MAC) => layout!(F3 F7 F13a F14a F16a),
            (MessageType::Oldi, OCM | PAC | ROC) => {
                layout!(F3 F7 F13a F14 F16a F22Specific; F9)
            }
            (MessageType::Oldi, RAP) => {
                layout!(F3 F7 F13a F14 F16a F18dof F22Specific; F9 F80 F81)
            }
            (MessageType::Oldi, REJ) => layout!(F3 F7 F13a F16a F18),
            (MessageType::Oldi, REV | RRV) => layout!(F3 F7 F13a F14 F16a),

            (_, ACH | CHG) => layout!(F3 F7 F13 F16ab F18dof F22),
            (_, ACP) => layout!(F3 F7 F13 F16),
            (_, AFP | APL) => layout!(F3 F7 F8 F9 F10 F13 F14 F15 F16 F18 F19),
            (_, ALR) => layout!(F3 F5 F7 F8 F9 F10 F13 F15 F16 F18 F19 F20),
            (_, ARR) => layout!(F3 F7 F13 F16ab F17 F18dof),
            (_, CDN) => layout!(F3 F7 F13 F16 F18dof),
            (_, CNL | DEP | DLA | RQP) => layout!(F3 F7 F13 F16a F18dof),
            (_, CPL) => layout!(F3 F7 F8 F9 F10 F13 F14 F15 F16 F18),
            (_, EST) => layout!(F3 F7 F13 F14 F16),
            (_, FPL) => layout!(F3 F7 F8 F9 F10 F13 F15 F16 F18 F19),
            (_, FNM) => layout!(F3 F7 F9 F13a F15 F16a F18 F19),
            (_, MFS) => layout!(F3 F7 F9 F13a F14 F16a MfsSigPoint),
            (_, RCF) => layout!(F3 F7 F21),
            (_, RQS) => layout!(F3 F7 F13 F16 F18),
            (_, SPL) => layout!(F3 F7 F13 F16 F18 F19),

            // OLDI only titles are always resolved to the OLDI layouts above
            (_, _) => layout!(F3),
        }
    }

    /// Returns `true` if the title carries both the flight plan fields 8 and
    /// 10 as well as the route and other information.
    pub fn is_flight_plan(&self) -> bool {
        use MessageTitle::*;
        matches!(self, AFP | ALR | APL | CPL | FPL)
    }

    /// Returns a short description of the message.
    pub fn description(&self) -> &'static str {
        use MessageTitle::*;

        match self {
            ABI => "advance boundary information",
            ACH => "ATC flight plan change",
            ACP => "acceptance",
            ACT => "activation",
            AFP => "ATC flight plan proposal",
            ALR => "alerting",
            AMA => "arrival management",
            APL => "ATC flight plan",
            ARR => "arrival",
            CDN => "coordination",
            CHG => "modification",
            CNL => "flight plan cancellation",
            COD => "SSR code assignment",
            CPL => "current flight plan",
            DEP => "departure",
            DLA => "delay",
            EST => "estimate",
            FPL => "filed flight plan",
            FNM => "oceanic flight notification",
            INF => "information",
            LAM => "logical acknowledgement",
            MAC => "abrogation of coordination",
            MFS => "oceanic message from system",
            OCM => "oceanic clearance",
            PAC => "preactivation",
            RAP => "referred activate proposal",
            REJ => "rejection",
            REV => "revision",
            RCF => "radio communication failure",
            RJC => "reject coordination",
            ROC => "request oceanic clearance",
            RQP => "request flight plan",
            RQS => "request supplementary flight plan",
            RRV => "referred revision proposal",
            SBY => "stand-by",
            SPL => "supplementary flight plan",
        }
    }
}

impl FromStr for MessageTitle {
    type Err = ErrorId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or(ErrorId::InvalidSubFieldSyntax)
    }
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldi_titles_force_oldi() {
        assert_eq!(MessageTitle::ABI.message_type(MessageType::Ats), MessageType::Oldi);
        assert_eq!(MessageTitle::FPL.message_type(MessageType::Oldi), MessageType::Ats);
        assert_eq!(MessageTitle::CPL.message_type(MessageType::Ats), MessageType::Ats);
        assert_eq!(MessageTitle::CPL.message_type(MessageType::Oldi), MessageType::Oldi);
    }

    #[test]
    fn shared_titles_use_default_layout() {
        let ats = MessageTitle::CPL.layout(MessageType::Ats);
        assert_eq!(ats.fields.len(), 10);
        assert!(ats.specific.is_empty());

        let oldi = MessageTitle::CPL.layout(MessageType::Oldi);
        assert_eq!(oldi.fields, &[F3, F7, F13, F16ab, F18dof, F22Specific]);
        assert_eq!(oldi.specific, &[F9]);
    }

    #[test]
    fn flight_plan_layout() {
        let layout = MessageTitle::FPL.layout(MessageType::Ats);
        assert_eq!(
            layout.fields,
            &[F3, F7, F8, F9, F10, F13, F15, F16, F18, F19]
        );
    }

    #[test]
    fn every_title_has_a_layout() {
        for title in MessageTitle::ALL {
            for message_type in [MessageType::Ats, MessageType::Oldi] {
                let layout = title.layout(message_type);
                assert_eq!(layout.fields.first(), Some(&F3), "{title}");
            }
        }
    }

    #[test]
    fn parses_title() {
        assert_eq!("FPL".parse::<MessageTitle>(), Ok(MessageTitle::FPL));
        assert_eq!("XYZ".parse::<MessageTitle>(), Err(ErrorId::InvalidSubFieldSyntax));
    }
}
