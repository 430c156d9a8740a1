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

//! Field dispatch.
//!
//! Every body field has exactly one parser. The message parser and the
//! amendments of field 22 both look up the parser of a field through
//! [`FieldId::parser`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::Date;

use crate::common::{Aerodrome, Point};
use crate::field::{FieldText, Parsed};
use crate::fields::*;
use crate::FieldId;

/// A field parser which returns the value of its field.
pub type FieldParser = fn(FieldText<'_>) -> Parsed<FieldValue>;

macro_rules! dispatch {
    (
        $( $(#[$meta:meta])* $id:ident($t:ty) => $parse:path, )*
        ; $( $header:ident ),* $(,)?
    ) => {
        /// The parsed value of a field.
        ///
        /// The variants are named like the [`FieldId`] of the field.
        #[derive(Clone, PartialEq, Debug)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum FieldValue {
            $( $(#[$meta])* $id($t), )*
        }

        impl FieldValue {
            /// Returns the field of this value.
            pub fn field(&self) -> FieldId {
                match self {
                    $( Self::$id(_) => FieldId::$id, )*
                }
            }
        }

        impl FieldId {
            /// Returns the parser of this field.
            ///
            /// The header parts and the message itself have no field parser.
            pub fn parser(self) -> Option<FieldParser> {
                match self {
                    $(
                        FieldId::$id => {
                            fn parse(input: FieldText<'_>) -> Parsed<FieldValue> {
                                $parse(input).map(FieldValue::$id)
                            }
                            Some(parse as FieldParser)
                        }
                    )*
                    $( FieldId::$header )|* => None,
                }
            }
        }
    };
}

dispatch! {
    F3(f3::Title) => f3::parse,
    F5(f5::Urgency) => f5::parse,
    F7(f7::AircraftId) => f7::parse,
    F8(f8::FlightRulesAndType) => f8::parse,
    F8a(f8::FlightRules) => f8::parse_rules,
    F9(f9::Aircraft) => f9::parse,
    F10(f10::Equipment) => f10::parse,
    F13(f13::Departure) => f13::parse,
    F13a(Aerodrome) => f13::parse_aerodrome,
    F14(f14::Estimate) => f14::parse,
    F14a(Point) => f14::parse_point,
    F15(f15::Route) => f15::parse,
    F16(f16::Destination) => f16::parse,
    F16a(f16::Destination) => f16::parse,
    F16ab(f16::Destination) => f16::parse,
    F16abc(f16::Destination) => f16::parse,
    F17(f17::Arrival) => f17::parse,
    F18(f18::OtherInformation) => f18::parse,
    F18dof(Date) => f18::parse_date_of_flight,
    F19(f19::Supplementary) => f19::parse,
    F20(f20::Alerting) => f20::parse,
    F21(f21::RadioFailure) => f21::parse,
    F22(f22::Amendments) => f22::parse,
    F22Specific(f22::Amendments) => f22::parse,
    F80(Vec<mfs::MfsPoint>) => mfs::parse,
    F81(Vec<mfs::MfsPoint>) => mfs::parse,
    MfsSigPoint(String) => mfs::parse_sig_point,
    ;
    Message, Priority, FilingTime, Originator, Addressee, AdditionalAddressee,
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////
