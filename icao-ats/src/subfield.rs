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

use crate::Catalog;

/// Identifies the smallest parseable unit within a field.
///
/// The names follow the ICAO Doc 4444 item letters, e.g. `F13b` is the
/// estimated off-block time of field 13.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Catalog)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u16)]
pub enum SubFieldId {
    // header
    #[catalog(name = "PRIORITY_INDICATOR")]
    Priority = 1,
    #[catalog(name = "FILING_TIME")]
    FilingTime = 2,
    #[catalog(name = "ORIGINATOR")]
    Originator = 3,
    #[catalog(name = "ADDRESS")]
    Address = 4,
    #[catalog(name = "ADADDRESS")]
    AdditionalAddress = 5,

    // message type, number and reference data
    F3a = 10,
    F3b = 11,
    F3c = 12,

    // emergency and priority
    F5a = 20,
    F5b = 21,
    F5c = 22,

    // aircraft identification and SSR mode and code
    F7a = 30,
    F7b = 31,
    F7c = 32,

    // flight rules and type of flight
    F8a = 40,
    F8b = 41,

    // number and type of aircraft and wake turbulence category
    F9a = 50,
    F9b = 51,
    F9c = 52,

    // equipment and capabilities
    F10a = 60,
    F10b = 61,

    // departure aerodrome and time
    F13a = 70,
    F13b = 71,

    // estimate data
    F14a = 80,
    F14b = 81,
    F14c = 82,
    F14d = 83,
    F14e = 84,

    // route
    F15a = 90,
    F15b = 91,
    F15c = 92,

    // destination aerodrome, total EET and alternates
    F16a = 100,
    F16b = 101,
    F16c = 102,
    F16d = 103,

    // arrival aerodrome and time
    F17a = 110,
    F17b = 111,
    F17c = 112,

    // other information
    F18altn = 120,
    F18code = 121,
    F18com = 122,
    F18dat = 123,
    F18dep = 124,
    F18dest = 125,
    F18dle = 126,
    F18dof = 127,
    F18eet = 128,
    F18est = 129,
    F18ifp = 130,
    F18nav = 131,
    F18opr = 132,
    F18orgn = 133,
    F18pbn = 134,
    F18per = 135,
    F18ralt = 136,
    F18reg = 137,
    F18rif = 138,
    F18rfp = 139,
    F18rmk = 140,
    F18rvr = 141,
    F18sel = 142,
    F18sts = 143,
    F18src = 144,
    F18sur = 145,
    F18talt = 146,
    F18typ = 147,
    /// An indicator which is not one of the known keywords.
    F18keyword = 148,

    // supplementary information
    F19a = 160,
    F19c = 161,
    F19d = 162,
    F19e = 163,
    F19j = 164,
    F19n = 165,
    F19p = 166,
    F19r = 167,
    F19s = 168,
    /// A label which is not one of the known labels.
    F19keyword = 169,

    // alerting search and rescue information
    F20a = 170,
    F20b = 171,
    F20c = 172,
    F20d = 173,
    F20e = 174,
    F20f = 175,
    F20g = 176,
    F20h = 177,

    // radio failure information
    F21a = 180,
    F21b = 181,
    F21c = 182,
    F21d = 183,
    F21e = 184,
    F21f = 185,

    /// The field number of an amendment.
    #[catalog(name = "F22_FIELD")]
    F22Field = 190,

    // MFS groups of fields 80 and 81
    #[catalog(name = "MFS_SIG_POINT")]
    MfsPoint = 200,
    #[catalog(name = "MFS_TIME")]
    MfsTime = 201,
    #[catalog(name = "MFS_LEVEL")]
    MfsLevel = 202,
}
