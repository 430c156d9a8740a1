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

//! ICAO ATS and OLDI flight plan message parser.
//!
//! This crate parses the telegrams exchanged between air traffic services
//! units, e.g. a filed flight plan (FPL) or an OLDI activation (ACT), into a
//! [`FlightPlanRecord`]. The parser never fails. Every defect of a telegram
//! is reported as a [`Diagnostic`] which names the [field] and subfield and
//! points to the exact position in the telegram.
//!
//! # Examples
//!
//! Fields can be written with their marker in any order:
//!
//! ```
//! use icao_ats::Speed;
//!
//! let record = icao_ats::parse(
//!     "-F7 BAW123\n-F9 1/A320/M\n-F13 EGLL1000\n-F15 N0450F330 DCT DVR\n-F16 LFPG0200",
//! );
//!
//! assert!(record.is_valid());
//!
//! let route = record.route().expect("route should parse");
//! assert_eq!(route.speed, Some(Speed::Knots(450)));
//! assert_eq!(route.len(), 2);
//! assert_eq!(record.destination().map(|d| d.aerodrome.as_str()), Some("LFPG"));
//! ```
//!
//! A telegram in the positional ICAO form with its AFTN header:
//!
//! ```
//! use icao_ats::{MessageTitle, Priority};
//!
//! let telegram = "FF EGZZFPLX\n\
//!                 121200 EGLLZPZX\n\
//!                 (FPL-BAW123-IS\n\
//!                 -A320/M-SDFGIRWY/S\n\
//!                 -EGLL1000\n\
//!                 -N0450F330 DCT DVR\n\
//!                 -LFPG0100 LFPO\n\
//!                 -PBN/B1D1 DOF/260101\n\
//!                 -E/0200 P/TBN)";
//!
//! let record = icao_ats::parse(telegram);
//! assert_eq!(record.title(), Some(MessageTitle::FPL));
//! assert_eq!(record.header().priority, Some(Priority::FlightSafety));
//!
//! for diagnostic in record.diagnostics() {
//!     println!("{diagnostic}");
//! }
//! ```
//!
//! Use the [`ParserBuilder`] to configure the parser.
//!
//! [field]: FieldId

#[macro_use]
mod macros;

mod builder;
mod catalog;
mod common;
mod consistency;
mod diagnostic;
mod dispatch;
mod error;
mod field;
mod header;
mod message;
mod record;
mod subfield;
mod title;
mod utils;

pub mod fields;

// Re-export the derive macro for the catalogs
pub(crate) use icao_ats_derive::Catalog;

pub use builder::{Parser, ParserBuilder};
pub use catalog::Catalog;
pub use common::{
    parse_date, parse_elapsed, parse_frequency, parse_time, Address, Aerodrome, Coordinate,
    DayTime, Fix, Level, Point, Priority, Radial, Speed,
};
pub use diagnostic::Diagnostic;
pub use dispatch::{FieldParser, FieldValue};
pub use error::ErrorId;
pub use field::{FieldId, FieldText, Parsed};
pub use header::{Header, MAX_ADDRESSEES};
pub use record::{BodyForm, FlightPlanRecord};
pub use subfield::SubFieldId;
pub use title::{Layout, MessageTitle, MessageType};
pub use utils::{Span, Token};

/// Parses a telegram with the default parser.
///
/// This is the same as `Parser::default().parse(telegram)`.
pub fn parse(telegram: &str) -> FlightPlanRecord {
    Parser::default().parse(telegram)
}
