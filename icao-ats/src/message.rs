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

//! Splits a telegram into header and fields and assembles the record.
//!
//! The body is either tagged, where every field has a marker like
//! `-F13 EGLL1000`, or positional like `(FPL-BAW123-IS-...)` where the
//! message title defines which field is at which position.

use log::{debug, info, trace, warn};

use crate::builder::Parser;
use crate::consistency;
use crate::diagnostic::{Diagnostic, Report};
use crate::field::FieldText;
use crate::header;
use crate::record::{BodyForm, FlightPlanRecord};
use crate::title::{Layout, MessageTitle};
use crate::utils::{Span, Token};
use crate::{Catalog, ErrorId, FieldId, SubFieldId};

/// The marker of the MFS significant point which is the only marker that
/// is not a field number.
const MFS_SIG_POINT: &str = "MFS_SIG_POINT";

/// The AFTN end of message.
const END_OF_MESSAGE: &str = "NNNN";

/// A field marker `-F15` with the position of its dash.
#[derive(Clone, Copy, Debug)]
struct Marker<'a> {
    start: usize,
    name: Token<'a>,
}

enum Segment<'a> {
    /// The text of a field.
    Field(FieldId, Token<'a>),
    /// The name of a marker which is no field.
    Unknown(Token<'a>),
    /// A positional field beyond the layout of the title.
    Unexpected(Token<'a>),
}

struct Body<'a> {
    form: BodyForm,
    header: Token<'a>,
    content: Token<'a>,
    markers: Vec<Marker<'a>>,
}

impl<'a> Body<'a> {
    /// Finds the body of the telegram.
    ///
    /// A positional body is only used if it starts before the first marker.
    fn find(telegram: &'a str) -> Option<Self> {
        let markers = markers(telegram);
        let open = opening(telegram);

        match (markers.first(), open) {
            (first, Some(open)) if first.map_or(true, |marker| open < marker.start) => {
                let start = open + 1;
                let end = end_of_body(telegram, start, true);

                Some(Self {
                    form: BodyForm::Positional,
                    header: Token::new(telegram.get(..open)?, 0),
                    content: Token::new(telegram.get(start..end)?, start),
                    markers: Vec::new(),
                })
            }
            (Some(first), _) => {
                let head = telegram.get(..first.start)?;
                let opened = head.trim_end().ends_with('(');
                let head = if opened {
                    head.trim_end().trim_end_matches('(')
                } else {
                    head
                };
                let end = end_of_body(telegram, first.start, opened).max(first.start);

                Some(Self {
                    form: BodyForm::Tagged,
                    header: Token::new(head, 0),
                    content: Token::new(telegram.get(first.start..end)?, first.start),
                    markers,
                })
            }
            _ => None,
        }
    }

    /// Returns the title of a positional body.
    fn title(&self) -> Option<MessageTitle> {
        self.content
            .as_str()
            .trim_start()
            .get(..3)
            .and_then(MessageTitle::from_name)
    }

    fn segments(&self, layout: Option<&Layout>) -> (Vec<Segment<'a>>, Vec<FieldId>) {
        match self.form {
            BodyForm::Tagged => (self.tagged(), Vec::new()),
            BodyForm::Positional => self.positional(layout),
        }
    }

    fn tagged(&self) -> Vec<Segment<'a>> {
        let end = self.content.span().end;
        let text = self.content.as_str();

        self.markers
            .iter()
            .enumerate()
            .map(|(i, marker)| {
                let start = marker.name.span().end;
                let stop = self.markers.get(i + 1).map_or(end, |next| next.start).max(start);
                let token = self
                    .content
                    .slice(start - self.content.offset()..stop - self.content.offset())
                    .unwrap_or_else(|| Token::new(&text[..0], start));

                match FieldId::from_marker(marker.name.as_str()) {
                    Some(id) => Segment::Field(id, token),
                    None => Segment::Unknown(marker.name),
                }
            })
            .collect()
    }

    /// Maps the pieces between the dashes to the fields of the layout.
    ///
    /// Without layout only field 3 is known. The pieces of a last field 22
    /// are joined since amendments are separated by dashes too. Returns the
    /// fields for which no piece is left.
    fn positional(&self, layout: Option<&Layout>) -> (Vec<Segment<'a>>, Vec<FieldId>) {
        let fields = layout.map_or(&[FieldId::F3][..], |layout| layout.fields);
        let pieces = pieces(self.content);

        let amendments = fields
            .last()
            .is_some_and(|field| field.family() == FieldId::F22)
            && pieces.len() > fields.len();

        let mut segments = Vec::with_capacity(pieces.len());
        for (i, piece) in pieces.iter().enumerate() {
            match fields.get(i) {
                Some(&id) if amendments && i + 1 == fields.len() => {
                    let rest = self.content.tail(piece.offset() - self.content.offset());
                    segments.push(Segment::Field(id, rest.unwrap_or(*piece)));
                    break;
                }
                Some(&id) => segments.push(Segment::Field(id, *piece)),
                None => segments.push(Segment::Unexpected(*piece)),
            }
        }

        let missing = fields.get(pieces.len()..).unwrap_or_default().to_vec();
        (segments, missing)
    }
}

/// Returns all field markers of the telegram.
///
/// A marker is a dash at the start or after whitespace or an opening
/// parenthesis, followed by `F` and a digit, and ends with whitespace, a
/// closing parenthesis or the end of the telegram.
fn markers(telegram: &str) -> Vec<Marker<'_>> {
    let bytes = telegram.as_bytes();
    let mut markers = Vec::new();

    for (i, &b) in bytes.iter().enumerate() {
        let after_separator = i == 0 || matches!(bytes[i - 1], b'(' | b' ' | b'\t' | b'\r' | b'\n');
        if b != b'-' || !after_separator {
            continue;
        }

        let start = i + 1;
        let len = bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
            .count();
        let end = start + len;

        let terminated = bytes
            .get(end)
            .map_or(true, |b| b.is_ascii_whitespace() || *b == b')');

        if let Some(name) = telegram.get(start..end).filter(|name| terminated && is_marker(name)) {
            markers.push(Marker {
                start: i,
                name: Token::new(name, start),
            });
        }
    }

    markers
}

fn is_marker(name: &str) -> bool {
    let bytes = name.as_bytes();

    match bytes {
        [b'F' | b'f', digit, ..] => digit.is_ascii_digit(),
        _ => name.eq_ignore_ascii_case(MFS_SIG_POINT),
    }
}

/// Returns the position of the parenthesis which opens a positional body
/// like `(FPL-`.
fn opening(telegram: &str) -> Option<usize> {
    telegram.match_indices('(').map(|(i, _)| i).find(|&i| {
        let rest = &telegram[i + 1..];
        rest.get(..3).is_some_and(crate::utils::is_alpha)
            && rest.get(3..).is_some_and(|rest| rest.contains('-'))
    })
}

/// Returns the end of the body without the end of message and the closing
/// parenthesis.
fn end_of_body(telegram: &str, start: usize, closed: bool) -> usize {
    let Some(mut body) = telegram.get(start..).map(str::trim_end) else {
        return start;
    };

    if let Some(rest) = body.strip_suffix(END_OF_MESSAGE).filter(|rest| {
        rest.is_empty() || rest.ends_with(|c: char| c.is_ascii_whitespace() || c == ')')
    }) {
        body = rest.trim_end();
    }

    if closed {
        body = body.strip_suffix(')').unwrap_or(body);
    }

    start + body.len()
}

/// Splits the token at every dash and keeps empty pieces.
fn pieces(token: Token<'_>) -> Vec<Token<'_>> {
    let mut offset = token.offset();

    token
        .as_str()
        .split('-')
        .map(|piece| {
            let piece_token = Token::new(piece, offset);
            offset += piece.len() + 1;
            piece_token
        })
        .collect()
}

/// Parses the telegram with the options of the parser.
pub(crate) fn parse(parser: &Parser, telegram: &str) -> FlightPlanRecord {
    let mut record = FlightPlanRecord {
        message_type: parser.message_type(),
        ..Default::default()
    };

    let Some(body) = Body::find(telegram) else {
        warn!("telegram has neither field markers nor a positional body");

        let mut report = Report::new(FieldId::Message);
        report.push(
            ErrorId::MalformedMessage,
            None,
            Span::new(0, telegram.len()),
            "the telegram has no recognizable field",
        );
        record.diagnostics = report.into_diagnostics();
        return record;
    };

    let (header, mut diagnostics) = header::parse(body.header, parser.max_addressees());
    record.header = header;
    record.form = Some(body.form);

    let layout = body
        .title()
        .map(|title| title.layout(title.message_type(parser.message_type())));
    let (segments, missing) = body.segments(layout);

    debug!("{:?} body with {} segments", body.form, segments.len());

    for segment in segments {
        dispatch(&mut record, &mut diagnostics, segment);
    }

    record.title = record.message_data().and_then(|f3| f3.title);
    if let Some(title) = record.title {
        record.message_type = title.message_type(parser.message_type());
        debug!("{title} message ({:?})", record.message_type);
    }

    diagnostics.extend(specific_amendments(&record));

    if parser.mandatory_fields() {
        let missing = match body.form {
            BodyForm::Tagged => absent_fields(&record),
            BodyForm::Positional => missing,
        };
        let at = body.content.span().end;

        for field in missing {
            let mut report = Report::new(field);
            report.push(
                ErrorId::MissingMandatoryField,
                None,
                Span::new(at, at),
                format!("{field} is mandatory but missing"),
            );
            diagnostics.extend(report.into_diagnostics());
        }
    }

    if parser.consistency_checks() && record.title.is_some_and(|title| title.is_flight_plan()) {
        diagnostics.extend(consistency::check(&record));
    }

    info!(
        "parsed {} with {} diagnostics",
        record.title.map_or("message without title", |title| title.name()),
        diagnostics.len()
    );

    record.diagnostics = diagnostics;
    record
}

/// Invokes the parser of a segment and stores its value.
///
/// Only the first occurrence of a field is stored. A repetition is parsed
/// for its diagnostics only.
fn dispatch(record: &mut FlightPlanRecord, diagnostics: &mut Vec<Diagnostic>, segment: Segment) {
    match segment {
        Segment::Field(id, token) => {
            trace!("parsing {id}: {:?}", token.as_str());

            let Some(parse) = id.parser() else {
                return;
            };
            let parsed = parse(FieldText::from_token(id, token));
            let span = token.trim().span();

            if record.spans.contains_key(&id) {
                let mut report = Report::new(id);
                report.push(
                    ErrorId::DuplicateField,
                    None,
                    span,
                    format!("{id} occurs more than once"),
                );
                diagnostics.extend(report.into_diagnostics());
                diagnostics.extend(parsed.diagnostics);
                return;
            }

            diagnostics.extend(parsed.diagnostics);
            record.spans.insert(id, span);
            if let Some(value) = parsed.value {
                record.fields.insert(id, value);
            }
        }
        Segment::Unknown(name) => {
            let mut report = Report::new(FieldId::Message);
            report.push(
                ErrorId::UnknownFieldIdentifier,
                None,
                name.span(),
                format!("\"{name}\" is no field identifier"),
            );
            diagnostics.extend(report.into_diagnostics());
        }
        Segment::Unexpected(piece) => {
            let mut report = Report::new(FieldId::Message);
            report.push(
                ErrorId::UnexpectedField,
                None,
                piece.trim().span(),
                format!("\"{}\" follows the last field of the message", piece.as_str().trim()),
            );
            diagnostics.extend(report.into_diagnostics());
        }
    }
}

/// Returns the fields of the title's layout of which the record has no
/// field of the same family.
fn absent_fields(record: &FlightPlanRecord) -> Vec<FieldId> {
    let Some(title) = record.title else {
        return Vec::new();
    };

    title
        .layout(record.message_type)
        .fields
        .iter()
        .copied()
        .filter(|field| !record.spans.keys().any(|id| id.family() == field.family()))
        .collect()
}

/// Reports amendments of field 22 specific which the title doesn't allow.
fn specific_amendments(record: &FlightPlanRecord) -> Vec<Diagnostic> {
    let (Some(title), Some(amendments)) = (record.title, record.specific_amendments()) else {
        return Vec::new();
    };

    let allowed = title.layout(record.message_type).specific;
    let mut report = Report::new(FieldId::F22Specific);

    for amendment in amendments {
        if !allowed.contains(&amendment.field) {
            report.push(
                ErrorId::UnexpectedField,
                Some(SubFieldId::F22Field),
                amendment.span,
                format!("{title} does not allow to amend {}", amendment.field),
            );
        }
    }

    report.into_diagnostics()
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////
