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

/// A read-only catalog of named entries with stable numeric codes.
///
/// The catalogs of this crate ([`ErrorId`], [`FieldId`] and [`SubFieldId`])
/// implement this trait by deriving it. Their codes are never renumbered, so
/// downstream systems may persist them.
///
/// [`ErrorId`]: crate::ErrorId
/// [`FieldId`]: crate::FieldId
/// [`SubFieldId`]: crate::SubFieldId
pub trait Catalog: Sized + Copy + 'static {
    /// All entries of the catalog in declaration order.
    const ALL: &'static [Self];

    /// Returns the stable code of this entry.
    fn code(&self) -> u16;

    /// Returns the symbolic name of this entry.
    fn name(&self) -> &'static str;

    /// Looks up the entry with the code.
    fn from_code(code: u16) -> Option<Self>;

    /// Looks up the entry with the symbolic name.
    fn from_name(name: &str) -> Option<Self>;
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////
