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

//! Subfield grammars shared by several fields.
//!
//! Every grammar is a pure function of its input. It either returns the
//! parsed value or the [`ErrorId`] describing why the text is not valid:
//!
//! - [`ErrorId::InvalidSubFieldSyntax`] if the text doesn't have the shape of
//!   the subfield, e.g. `12A0` for a time
//! - [`ErrorId::OutOfRangeValue`] if the shape is right but the value is not,
//!   e.g. `2400` for a time
//!
//! The grammars are exposed as [`FromStr`] implementations for the types of
//! this crate and as `parse_*` functions for time values.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month, Time};

use crate::utils::{is_alpha, is_alphanumeric, is_digits};
use crate::ErrorId;

use ErrorId::{InvalidSubFieldSyntax, OutOfRangeValue};

/// Parses a time of day in the format `HHMM` between 0000 and 2359.
pub fn parse_time(s: &str) -> Result<Time, ErrorId> {
    let (hours, minutes) = hhmm(s)?;
    Time::from_hms(hours, minutes, 0).map_err(|_| OutOfRangeValue)
}

/// Parses an elapsed time in the format `HHMM`.
///
/// Hours may be 00 to 99 and minutes 00 to 59.
pub fn parse_elapsed(s: &str) -> Result<Duration, ErrorId> {
    let (hours, minutes) = hhmm(s)?;
    if minutes > 59 {
        return Err(OutOfRangeValue);
    }
    Ok(Duration::minutes(hours as i64 * 60 + minutes as i64))
}

/// Parses a date of flight in the format `YYMMDD`.
///
/// The date must exist in the calendar, e.g. `240229` is valid but `230229`
/// is not.
pub fn parse_date(s: &str) -> Result<Date, ErrorId> {
    if s.len() != 6 || !is_digits(s) {
        return Err(InvalidSubFieldSyntax);
    }

    let year = digits!(s, 0..2, i32).ok_or(InvalidSubFieldSyntax)?;
    let month = digits!(s, 2..4, u8).ok_or(InvalidSubFieldSyntax)?;
    let day = digits!(s, 4..6, u8).ok_or(InvalidSubFieldSyntax)?;

    let month = Month::try_from(month).map_err(|_| OutOfRangeValue)?;
    Date::from_calendar_date(2000 + year, month, day).map_err(|_| OutOfRangeValue)
}

/// Parses a radio frequency such as `121.5` or `5680.25`.
pub fn parse_frequency(s: &str) -> Result<String, ErrorId> {
    let (integer, fraction) = s.split_once('.').ok_or(InvalidSubFieldSyntax)?;

    if (2..=4).contains(&integer.len())
        && (1..=2).contains(&fraction.len())
        && is_digits(integer)
        && is_digits(fraction)
    {
        Ok(s.to_string())
    } else {
        Err(InvalidSubFieldSyntax)
    }
}

fn hhmm(s: &str) -> Result<(u8, u8), ErrorId> {
    if s.len() != 4 || !is_digits(s) {
        return Err(InvalidSubFieldSyntax);
    }

    let hours = digits!(s, 0..2, u8).ok_or(InvalidSubFieldSyntax)?;
    let minutes = digits!(s, 2..4, u8).ok_or(InvalidSubFieldSyntax)?;
    Ok((hours, minutes))
}

/////////////////////////////////////////////////////////////////////////////
// Day and Time
/////////////////////////////////////////////////////////////////////////////

/// A date-time group in the format `DDHHMM`.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DayTime {
    pub day: u8,
    pub time: Time,
}

impl FromStr for DayTime {
    type Err = ErrorId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 6 || !is_digits(s) {
            return Err(InvalidSubFieldSyntax);
        }

        let day = digits!(s, 0..2, u8).ok_or(InvalidSubFieldSyntax)?;
        let time = parse_time(s.get(2..6).ok_or(InvalidSubFieldSyntax)?)?;

        if (1..=31).contains(&day) {
            Ok(Self { day, time })
        } else {
            Err(OutOfRangeValue)
        }
    }
}

/////////////////////////////////////////////////////////////////////////////
// Location Indicators
/////////////////////////////////////////////////////////////////////////////

/// A four letter ICAO location indicator of an aerodrome.
///
/// The indicator `ZZZZ` is used for aerodromes without indicator.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aerodrome(String);

impl Aerodrome {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the aerodrome has no location indicator (`ZZZZ`).
    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.0 == "ZZZZ"
    }
}

impl FromStr for Aerodrome {
    type Err = ErrorId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == 4 && is_alpha(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidSubFieldSyntax)
        }
    }
}

impl fmt::Display for Aerodrome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An AFTN address of an ATS facility.
///
/// The address has either eight letters, or seven characters of which the
/// first three are letters.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Address(String);

impl Address {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Address {
    type Err = ErrorId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = match s.len() {
            8 => is_alpha(s),
            7 => s.get(0..3).is_some_and(is_alpha) && is_alphanumeric(s),
            _ => false,
        };

        if valid {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidSubFieldSyntax)
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The priority indicator of a message.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Priority {
    /// Distress messages (`SS`).
    Distress,
    /// Urgency messages (`DD`).
    Urgency,
    /// Flight safety messages (`FF`).
    FlightSafety,
    /// Meteorological and flight regularity messages (`GG`).
    Regularity,
    /// Aeronautical administrative messages (`KK`).
    Administrative,
}

impl FromStr for Priority {
    type Err = ErrorId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SS" => Ok(Self::Distress),
            "DD" => Ok(Self::Urgency),
            "FF" => Ok(Self::FlightSafety),
            "GG" => Ok(Self::Regularity),
            "KK" => Ok(Self::Administrative),
            _ => Err(InvalidSubFieldSyntax),
        }
    }
}

/////////////////////////////////////////////////////////////////////////////
// Points
/////////////////////////////////////////////////////////////////////////////

/// A position in minutes of arc.
///
/// North and east are positive.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    latitude: i32,
    longitude: i32,
}

impl Coordinate {
    /// Returns the latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude as f64 / 60.0
    }

    /// Returns the longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude as f64 / 60.0
    }
}

impl FromStr for Coordinate {
    type Err = ErrorId;

    /// Parses a coordinate in degrees `46N078W` or in degrees and minutes
    /// `4620N07805W`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat_len, lon_len) = match s.len() {
            7 => (2, 3),
            11 => (4, 5),
            _ => return Err(InvalidSubFieldSyntax),
        };

        let lat = angle(s.get(0..lat_len), lat_len == 4)?;
        let lon = angle(s.get(lat_len + 1..lat_len + 1 + lon_len), lon_len == 5)?;

        let lat = match s.as_bytes().get(lat_len) {
            Some(b'N') => lat,
            Some(b'S') => -lat,
            _ => return Err(InvalidSubFieldSyntax),
        };

        let lon = match s.as_bytes().get(lat_len + 1 + lon_len) {
            Some(b'E') => lon,
            Some(b'W') => -lon,
            _ => return Err(InvalidSubFieldSyntax),
        };

        if lat.abs() > 90 * 60 || lon.abs() > 180 * 60 {
            return Err(OutOfRangeValue);
        }

        Ok(Self {
            latitude: lat,
            longitude: lon,
        })
    }
}

/// Parses degrees with optional minutes to minutes of arc.
fn angle(s: Option<&str>, with_minutes: bool) -> Result<i32, ErrorId> {
    let s = s.filter(|s| is_digits(s)).ok_or(InvalidSubFieldSyntax)?;

    if with_minutes {
        let split = s.len() - 2;
        let degrees = digits!(s, ..split, i32).ok_or(InvalidSubFieldSyntax)?;
        let minutes = digits!(s, split.., i32).ok_or(InvalidSubFieldSyntax)?;
        if minutes > 59 {
            return Err(OutOfRangeValue);
        }
        Ok(degrees * 60 + minutes)
    } else {
        digits!(s, i32)
            .map(|degrees| degrees * 60)
            .ok_or(InvalidSubFieldSyntax)
    }
}

/// A significant point given by name or position.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Fix {
    /// A coded designator of two to five letters.
    Named(String),
    Coordinate(Coordinate),
}

impl FromStr for Fix {
    type Err = ErrorId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes().first() {
            Some(b) if b.is_ascii_digit() => s.parse().map(Self::Coordinate),
            Some(_) if (2..=5).contains(&s.len()) && is_alpha(s) => Ok(Self::Named(s.to_string())),
            _ => Err(InvalidSubFieldSyntax),
        }
    }
}

/// Bearing and distance from a significant point.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Radial {
    /// Magnetic bearing in degrees.
    pub bearing: u16,
    /// Distance in nautical miles.
    pub distance: u16,
}

impl FromStr for Radial {
    type Err = ErrorId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 6 {
            return Err(InvalidSubFieldSyntax);
        }

        let bearing = digits!(s, 0..3, u16).ok_or(InvalidSubFieldSyntax)?;
        let distance = digits!(s, 3..6, u16).ok_or(InvalidSubFieldSyntax)?;

        if bearing > 360 {
            return Err(OutOfRangeValue);
        }

        Ok(Self { bearing, distance })
    }
}

/// A point as used in route descriptions and estimates.
///
/// This is either a significant point, a position, or the bearing and
/// distance from a significant point e.g. `DUB180040`.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub fix: Fix,
    pub radial: Option<Radial>,
}

impl FromStr for Point {
    type Err = ErrorId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // A point followed by bearing and distance always ends with six
        // digits, a coordinate always with a letter.
        let split = s.len().saturating_sub(6);
        let tail = s.get(split..).unwrap_or_default();

        if split > 0 && is_digits(tail) {
            let fix = s.get(..split).ok_or(InvalidSubFieldSyntax)?.parse()?;
            Ok(Self {
                fix,
                radial: Some(tail.parse()?),
            })
        } else {
            Ok(Self {
                fix: s.parse()?,
                radial: None,
            })
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fix {
            Fix::Named(name) => write!(f, "{name}")?,
            Fix::Coordinate(c) => write!(f, "{:.4} {:.4}", c.latitude(), c.longitude())?,
        }

        match self.radial {
            Some(radial) => write!(f, " {:03}/{:03}", radial.bearing, radial.distance),
            None => Ok(()),
        }
    }
}

/////////////////////////////////////////////////////////////////////////////
// Levels and Speeds
/////////////////////////////////////////////////////////////////////////////

/// A cruising or cleared level.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Level {
    /// Flight level, e.g. `F330`.
    FlightLevel(u16),
    /// Altitude in hundreds of feet, e.g. `A045`.
    Altitude(u16),
    /// Standard metric level in tens of metres, e.g. `S1130`.
    MetricLevel(u16),
    /// Altitude in tens of metres, e.g. `M0840`.
    MetricAltitude(u16),
}

impl Level {
    /// Returns the number of characters a level starting with `unit` has.
    pub(crate) fn len_of(unit: u8) -> Option<usize> {
        match unit {
            b'F' | b'A' => Some(4),
            b'S' | b'M' => Some(5),
            _ => None,
        }
    }
}

impl FromStr for Level {
    type Err = ErrorId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        macro_rules! value {
            ($s:expr, $len:expr) => {
                if $s.len() == $len + 1 {
                    digits!($s, 1.., u16).ok_or(InvalidSubFieldSyntax)
                } else {
                    Err(InvalidSubFieldSyntax)
                }
            };
        }

        // first character is the unit
        match s.as_bytes().first() {
            Some(b'F') => value!(s, 3).map(Self::FlightLevel),
            Some(b'A') => value!(s, 3).map(Self::Altitude),
            Some(b'S') => value!(s, 4).map(Self::MetricLevel),
            Some(b'M') => value!(s, 4).map(Self::MetricAltitude),
            _ => Err(InvalidSubFieldSyntax),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FlightLevel(v) => write!(f, "F{v:03}"),
            Self::Altitude(v) => write!(f, "A{v:03}"),
            Self::MetricLevel(v) => write!(f, "S{v:04}"),
            Self::MetricAltitude(v) => write!(f, "M{v:04}"),
        }
    }
}

/// A true airspeed.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Speed {
    /// Knots, e.g. `N0450`.
    Knots(u16),
    /// Kilometres per hour, e.g. `K0830`.
    KilometresPerHour(u16),
    /// Mach number in hundredths, e.g. `M082`.
    Mach(u16),
}

impl Speed {
    /// Returns the number of characters a speed starting with `unit` has.
    pub(crate) fn len_of(unit: u8) -> Option<usize> {
        match unit {
            b'N' | b'K' => Some(5),
            b'M' => Some(4),
            _ => None,
        }
    }
}

impl FromStr for Speed {
    type Err = ErrorId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = *s.as_bytes().first().ok_or(InvalidSubFieldSyntax)?;

        if Self::len_of(unit) != Some(s.len()) {
            return Err(InvalidSubFieldSyntax);
        }

        let value = digits!(s, 1.., u16).ok_or(InvalidSubFieldSyntax)?;

        match unit {
            b'N' => Ok(Self::Knots(value)),
            b'K' => Ok(Self::KilometresPerHour(value)),
            _ => Ok(Self::Mach(value)),
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Knots(v) => write!(f, "N{v:04}"),
            Self::KilometresPerHour(v) => write!(f, "K{v:04}"),
            Self::Mach(v) => write!(f, "M{v:03}"),
        }
    }
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_range() {
        assert_eq!(parse_time("0000"), Ok(Time::MIDNIGHT));
        assert_eq!(
            parse_time("2359").expect("2359 should parse"),
            Time::from_hms(23, 59, 0).expect("time should be valid")
        );
        assert_eq!(parse_time("2400"), Err(OutOfRangeValue));
        assert_eq!(parse_time("1260"), Err(OutOfRangeValue));
        assert_eq!(parse_time("9999"), Err(OutOfRangeValue));
        assert_eq!(parse_time("12A0"), Err(InvalidSubFieldSyntax));
        assert_eq!(parse_time("120"), Err(InvalidSubFieldSyntax));
    }

    #[test]
    fn elapsed_time() {
        assert_eq!(parse_elapsed("0200"), Ok(Duration::hours(2)));
        assert_eq!(parse_elapsed("2630"), Ok(Duration::minutes(26 * 60 + 30)));
        assert_eq!(parse_elapsed("0075"), Err(OutOfRangeValue));
    }

    #[test]
    fn date_of_flight() {
        assert_eq!(
            parse_date("240229"),
            Date::from_calendar_date(2024, Month::February, 29).map_err(|_| OutOfRangeValue)
        );
        assert_eq!(parse_date("230229"), Err(OutOfRangeValue));
        assert_eq!(parse_date("231301"), Err(OutOfRangeValue));
        assert_eq!(parse_date("2301"), Err(InvalidSubFieldSyntax));
    }

    #[test]
    fn frequencies() {
        assert_eq!(parse_frequency("121.5"), Ok("121.5".to_string()));
        assert_eq!(parse_frequency("5680.25"), Ok("5680.25".to_string()));
        assert_eq!(parse_frequency("1215"), Err(InvalidSubFieldSyntax));
        assert_eq!(parse_frequency("121.500"), Err(InvalidSubFieldSyntax));
    }

    #[test]
    fn day_time() {
        let dtg: DayTime = "121530".parse().expect("DTG should parse");
        assert_eq!(dtg.day, 12);
        assert_eq!(dtg.time, Time::from_hms(15, 30, 0).expect("time should be valid"));
        assert_eq!("321200".parse::<DayTime>(), Err(OutOfRangeValue));
        assert_eq!("12153".parse::<DayTime>(), Err(InvalidSubFieldSyntax));
    }

    #[test]
    fn aerodrome_and_address() {
        assert!("EGLL".parse::<Aerodrome>().is_ok());
        assert!("EGL1".parse::<Aerodrome>().is_err());
        assert!("EGLLZPZX".parse::<Address>().is_ok());
        assert!("EGL1234".parse::<Address>().is_ok());
        assert!("EG12345".parse::<Address>().is_err());
        assert!("EGLLZPZXX".parse::<Address>().is_err());
    }

    #[test]
    fn coordinates() {
        let c: Coordinate = "4620N07805W".parse().expect("coordinate should parse");
        assert_eq!(c.latitude(), 46.0 + 20.0 / 60.0);
        assert_eq!(c.longitude(), -(78.0 + 5.0 / 60.0));

        let c: Coordinate = "46N078W".parse().expect("coordinate should parse");
        assert_eq!(c.latitude(), 46.0);

        assert_eq!("91N078W".parse::<Coordinate>(), Err(OutOfRangeValue));
        assert_eq!("4660N07805W".parse::<Coordinate>(), Err(OutOfRangeValue));
        assert_eq!("46X078W".parse::<Coordinate>(), Err(InvalidSubFieldSyntax));
    }

    #[test]
    fn points() {
        let p: Point = "DUB180040".parse().expect("point should parse");
        assert_eq!(p.fix, Fix::Named("DUB".to_string()));
        assert_eq!(
            p.radial,
            Some(Radial {
                bearing: 180,
                distance: 40
            })
        );

        let p: Point = "46N078W".parse().expect("point should parse");
        assert!(matches!(p.fix, Fix::Coordinate(_)));
        assert!(p.radial.is_none());

        assert_eq!("DUB370040".parse::<Point>(), Err(OutOfRangeValue));
        assert_eq!("D".parse::<Point>(), Err(InvalidSubFieldSyntax));
        assert_eq!("DOVERS".parse::<Point>(), Err(InvalidSubFieldSyntax));
    }

    #[test]
    fn levels() {
        assert_eq!("F330".parse::<Level>(), Ok(Level::FlightLevel(330)));
        assert_eq!("A045".parse::<Level>(), Ok(Level::Altitude(45)));
        assert_eq!("S1130".parse::<Level>(), Ok(Level::MetricLevel(1130)));
        assert_eq!("M0840".parse::<Level>(), Ok(Level::MetricAltitude(840)));
        assert_eq!("F33".parse::<Level>(), Err(InvalidSubFieldSyntax));
        assert_eq!("X330".parse::<Level>(), Err(InvalidSubFieldSyntax));
    }

    #[test]
    fn speeds() {
        assert_eq!("N0450".parse::<Speed>(), Ok(Speed::Knots(450)));
        assert_eq!("K0830".parse::<Speed>(), Ok(Speed::KilometresPerHour(830)));
        assert_eq!("M082".parse::<Speed>(), Ok(Speed::Mach(82)));
        assert_eq!("M0820".parse::<Speed>(), Err(InvalidSubFieldSyntax));
        assert_eq!("N045".parse::<Speed>(), Err(InvalidSubFieldSyntax));
    }
}
