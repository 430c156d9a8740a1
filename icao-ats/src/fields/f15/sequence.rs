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

//! Succession of route elements.
//!
//! Each element restricts what may follow it, e.g. `DCT` must be followed by
//! a point and two ATS routes must be joined at a point. Elements between
//! `VFR`, `OAT` or `IFPSTOP` and the matching `IFR`, `GAT` or `IFPSTART` are
//! not restricted.

use super::{CruisingLevel, RouteElement};
use crate::fields::f8::FlightRules;

/// A portion of the route which is not restricted until it ends.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(super) enum Portion {
    Vfr,
    Oat,
    IfpStop,
}

impl Portion {
    fn starting(element: &RouteElement) -> Option<Self> {
        match element {
            RouteElement::RulesChange(FlightRules::Vfr) => Some(Self::Vfr),
            RouteElement::Oat => Some(Self::Oat),
            RouteElement::IfpStop => Some(Self::IfpStop),
            _ => None,
        }
    }

    fn is_end(self, element: &RouteElement) -> bool {
        match self {
            Self::Vfr => matches!(element, RouteElement::RulesChange(FlightRules::Ifr)),
            Self::Oat => *element == RouteElement::Gat,
            Self::IfpStop => *element == RouteElement::IfpStart,
        }
    }
}

/// The position in the route after the last element.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(super) enum Position {
    /// After the cruising speed and level.
    Start,
    /// After a point or an element which ends at a point.
    Point,
    /// After an ATS route or track.
    Route,
    Direct,
    /// After a SID.
    Departure,
    /// After the end of a portion, where a point must follow.
    Resume,
    Portion(Portion),
}

impl Position {
    /// Returns the position before the first element.
    ///
    /// A route with the cruising level `VFR` starts in a VFR portion.
    pub(super) fn initial(level: Option<CruisingLevel>) -> Self {
        match level {
            Some(CruisingLevel::Vfr) => Self::Portion(Portion::Vfr),
            _ => Self::Start,
        }
    }

    /// Checks if the element may follow at this position.
    ///
    /// # Errors
    ///
    /// Returns the description of what should be at this position instead.
    pub(super) fn check(self, element: &RouteElement, last: bool) -> Result<(), &'static str> {
        use RouteElement as E;

        if let Self::Portion(_) = self {
            return Ok(());
        }

        let allowed = match element {
            E::Truncate | E::Point { .. } => true,
            E::Direct => matches!(self, Self::Start | Self::Point),
            E::CruiseClimb { .. } => matches!(self, Self::Point | Self::Route | Self::Direct),
            E::Airway { change: Some(_), .. } => {
                return Err("an ATS route without a change of speed and level")
            }
            E::Airway { .. } | E::Nat(_) | E::Pts(_) => {
                matches!(self, Self::Point | Self::Departure)
            }
            E::Sid if self == Self::Start => true,
            E::Sid => return Err("a point or route as SID only follows the cruising level"),
            E::Procedure(_) if self == Self::Start => true,
            E::Procedure(_) | E::Star if !last => {
                return Err("a point or route as a STAR only ends the route")
            }
            E::Procedure(_) | E::Star => {
                matches!(self, Self::Start | Self::Point | Self::Departure)
            }
            E::Stay { .. } => self == Self::Point,
            E::RulesChange(FlightRules::Vfr) | E::Oat | E::IfpStop => self == Self::Point,
            E::RulesChange(_) | E::Gat | E::IfpStart => {
                return Err("a point or route as IFR, GAT or IFPSTART only ends a portion")
            }
        };

        if allowed {
            Ok(())
        } else {
            Err(self.expected())
        }
    }

    /// Returns the position after the element.
    pub(super) fn next(self, element: &RouteElement) -> Self {
        use RouteElement as E;

        match self {
            Self::Portion(portion) if portion.is_end(element) => Self::Resume,
            Self::Portion(_) => self,
            _ => match element {
                E::Direct => Self::Direct,
                E::Airway { .. } | E::Nat(_) | E::Pts(_) => Self::Route,
                E::Sid | E::Procedure(_) => Self::Departure,
                _ => Portion::starting(element).map_or(Self::Point, Self::Portion),
            },
        }
    }

    fn expected(self) -> &'static str {
        match self {
            Self::Start => "DCT, a point or a SID after the cruising speed and level",
            Self::Point => "a route element after the point",
            Self::Route => "a point after the ATS route",
            Self::Direct => "a point after DCT",
            Self::Departure => "a point or an ATS route after the SID",
            Self::Resume => "a point after the change of rules",
            Self::Portion(_) => "a route element",
        }
    }
}
