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

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::Date;

use crate::common::{Aerodrome, Point};
use crate::diagnostic::Diagnostic;
use crate::dispatch::FieldValue;
use crate::fields::*;
use crate::header::Header;
use crate::title::{MessageTitle, MessageType};
use crate::utils::Span;
use crate::FieldId;

/// The form in which the fields of the body are written.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BodyForm {
    /// Every field is introduced by its marker, e.g. `-F13 EGLL1000`.
    Tagged,
    /// The ICAO form `(FPL-...)` where the title defines the fields.
    Positional,
}

/// The result of parsing a telegram.
///
/// The record holds the value of every field that could be parsed and the
/// diagnostics of the complete telegram in processing order.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlightPlanRecord {
    pub(crate) header: Header,
    pub(crate) title: Option<MessageTitle>,
    pub(crate) message_type: MessageType,
    pub(crate) form: Option<BodyForm>,
    pub(crate) fields: BTreeMap<FieldId, FieldValue>,
    pub(crate) spans: BTreeMap<FieldId, Span>,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

macro_rules! getters {
    ($( $(#[$meta:meta])* $name:ident: $id:ident => $t:ty; )*) => {
        $(
            $(#[$meta])*
            pub fn $name(&self) -> Option<&$t> {
                match self.fields.get(&FieldId::$id) {
                    Some(FieldValue::$id(value)) => Some(value),
                    _ => None,
                }
            }
        )*
    };
}

impl FlightPlanRecord {
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Returns the title of the message if field 3 has a known title.
    pub fn title(&self) -> Option<MessageTitle> {
        self.title
    }

    pub fn message_type(&self) -> MessageType {
        self.message_type
    }

    /// Returns the form of the body or `None` if the telegram is malformed.
    pub fn form(&self) -> Option<BodyForm> {
        self.form
    }

    /// Returns the value of a field.
    pub fn value(&self, field: FieldId) -> Option<&FieldValue> {
        self.fields.get(&field)
    }

    /// Returns the position of a field's text in the telegram.
    pub fn span(&self, field: FieldId) -> Option<Span> {
        self.spans.get(&field).copied()
    }

    /// Returns `true` if the telegram has the field, even if no value could
    /// be parsed.
    pub fn contains(&self, field: FieldId) -> bool {
        self.spans.contains_key(&field)
    }

    /// Returns the fields of the telegram with their values.
    pub fn fields(&self) -> impl Iterator<Item = (FieldId, &FieldValue)> {
        self.fields.iter().map(|(id, value)| (*id, value))
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` if there are no diagnostics.
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Separates the diagnostics from the record.
    pub fn into_parts(mut self) -> (Self, Vec<Diagnostic>) {
        let diagnostics = std::mem::take(&mut self.diagnostics);
        (self, diagnostics)
    }

    getters! {
        /// Field 3 with the title and the OLDI message numbers.
        message_data: F3 => f3::Title;
        urgency: F5 => f5::Urgency;
        aircraft_id: F7 => f7::AircraftId;
        rules_and_type: F8 => f8::FlightRulesAndType;
        /// Field 8a with the flight rules only.
        flight_rules: F8a => f8::FlightRules;
        aircraft: F9 => f9::Aircraft;
        equipment: F10 => f10::Equipment;
        departure: F13 => f13::Departure;
        departure_aerodrome: F13a => Aerodrome;
        estimate: F14 => f14::Estimate;
        estimate_point: F14a => Point;
        route: F15 => f15::Route;
        arrival: F17 => f17::Arrival;
        other_information: F18 => f18::OtherInformation;
        supplementary: F19 => f19::Supplementary;
        alerting: F20 => f20::Alerting;
        radio_failure: F21 => f21::RadioFailure;
        amendments: F22 => f22::Amendments;
        specific_amendments: F22Specific => f22::Amendments;
        /// The MFS groups of field 80.
        f80: F80 => Vec<mfs::MfsPoint>;
        /// The MFS groups of field 81.
        f81: F81 => Vec<mfs::MfsPoint>;
        mfs_sig_point: MfsSigPoint => String;
    }

    /// Returns the destination of any field of the field 16 family.
    pub fn destination(&self) -> Option<&f16::Destination> {
        [FieldId::F16, FieldId::F16abc, FieldId::F16ab, FieldId::F16a]
            .iter()
            .find_map(|id| match self.fields.get(id) {
                Some(
                    FieldValue::F16(value)
                    | FieldValue::F16a(value)
                    | FieldValue::F16ab(value)
                    | FieldValue::F16abc(value),
                ) => Some(value),
                _ => None,
            })
    }

    /// Returns the date of flight of field 18dof or the DOF of field 18.
    pub fn date_of_flight(&self) -> Option<Date> {
        match self.fields.get(&FieldId::F18dof) {
            Some(FieldValue::F18dof(date)) => Some(*date),
            _ => self.other_information().and_then(|f18| f18.date_of_flight()),
        }
    }
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////
