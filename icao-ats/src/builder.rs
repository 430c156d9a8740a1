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

use log::debug;

use crate::header::MAX_ADDRESSEES;
use crate::message;
use crate::record::FlightPlanRecord;
use crate::title::MessageType;

/// A configured telegram parser.
///
/// The parser holds no state besides its options and can be shared between
/// threads. Use the [`ParserBuilder`] to change the options.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Parser {
    message_type: MessageType,
    mandatory_fields: bool,
    consistency_checks: bool,
    max_addressees: usize,
}

impl Parser {
    /// Parses the telegram into a record.
    ///
    /// This never fails. All defects of the telegram are reported as
    /// diagnostics of the record.
    pub fn parse(&self, telegram: &str) -> FlightPlanRecord {
        message::parse(self, telegram)
    }

    /// Returns the message type of titles which exist in ATS and OLDI.
    pub fn message_type(&self) -> MessageType {
        self.message_type
    }

    pub fn mandatory_fields(&self) -> bool {
        self.mandatory_fields
    }

    pub fn consistency_checks(&self) -> bool {
        self.consistency_checks
    }

    pub fn max_addressees(&self) -> usize {
        self.max_addressees
    }
}

impl Default for Parser {
    fn default() -> Self {
        ParserBuilder::new().build()
    }
}

/// Parser factory, which is used to configure a parser.
///
/// # Examples
///
/// ```
/// use icao_ats::{MessageType, ParserBuilder};
///
/// let parser = ParserBuilder::new()
///     .message_type(MessageType::Oldi)
///     .consistency_checks(false)
///     .build();
///
/// let record = parser.parse("-F3 CDN\n-F7 BAW123\n-F13A EGLL\n-F16A LFPG");
/// assert_eq!(record.message_type(), MessageType::Oldi);
/// assert!(record.is_valid());
/// ```
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ParserBuilder {
    message_type: Option<MessageType>,
    mandatory_fields: Option<bool>,
    consistency_checks: Option<bool>,
    max_addressees: Option<usize>,
}

impl ParserBuilder {
    /// Creates a new builder.
    pub fn new() -> ParserBuilder {
        Self::default()
    }

    /// Builds the parser with the default of every option that is not set.
    pub fn build(&self) -> Parser {
        let parser = Parser {
            message_type: self.message_type.unwrap_or_default(),
            mandatory_fields: self.mandatory_fields.unwrap_or(true),
            consistency_checks: self.consistency_checks.unwrap_or(true),
            max_addressees: self.max_addressees.unwrap_or(MAX_ADDRESSEES),
        };

        debug!("building parser {:?}", parser);
        parser
    }

    /// Sets the message type of titles which exist in ATS and OLDI.
    pub fn message_type(&mut self, message_type: MessageType) -> &mut Self {
        self.message_type = Some(message_type);
        self
    }

    /// Enables or disables the check of mandatory fields per message title.
    pub fn mandatory_fields(&mut self, enabled: bool) -> &mut Self {
        self.mandatory_fields = Some(enabled);
        self
    }

    /// Enables or disables the rules between the fields of a flight plan.
    pub fn consistency_checks(&mut self, enabled: bool) -> &mut Self {
        self.consistency_checks = Some(enabled);
        self
    }

    /// Sets the maximum number of addressees in the header.
    pub fn max_addressees(&mut self, max: usize) -> &mut Self {
        self.max_addressees = Some(max);
        self
    }
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let parser = Parser::default();
        assert_eq!(parser.message_type(), MessageType::Ats);
        assert!(parser.mandatory_fields());
        assert!(parser.consistency_checks());
        assert_eq!(parser.max_addressees(), 21);
    }

    #[test]
    fn options() {
        let parser = ParserBuilder::new()
            .message_type(MessageType::Oldi)
            .mandatory_fields(false)
            .max_addressees(7)
            .build();

        assert_eq!(parser.message_type(), MessageType::Oldi);
        assert!(!parser.mandatory_fields());
        assert!(parser.consistency_checks());
        assert_eq!(parser.max_addressees(), 7);
    }
}
