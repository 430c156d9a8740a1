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

/// Parses the digits at the byte range of a string slice.
///
/// Evaluates to `None` if the range is out of bounds or contains anything
/// else than ASCII digits.
macro_rules! digits {
    ($s:expr, $range:expr, $t:ty) => {
        $s.get($range)
            .filter(|d| $crate::utils::is_digits(d))
            .and_then(|d| d.parse::<$t>().ok())
    };

    ($s:expr, $t:ty) => {
        digits!($s, .., $t)
    };
}
