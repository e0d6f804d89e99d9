// Copyright (c) 2025 Zensical and contributors

// SPDX-License-Identifier: MIT
// Third-party contributions licensed under DCO

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NON-INFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.

// ----------------------------------------------------------------------------

//! Quality value.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Quality value.
///
/// Quality values express the relative preference of a media range, ranging
/// from `0` (not acceptable) to `1` (most preferred). The parsed number is kept
/// at full precision, so `0.9999` still ranks below `1`. It's always finite and
/// within `[0, 1]`, which gives us a total order.
///
/// # Examples
///
/// ```
/// use negotiator::negotiate::Quality;
///
/// // Parse quality value
/// let quality = Quality::parse_or_default("0.5");
/// assert_eq!(quality.millis(), 500);
/// assert!(quality < Quality::MAX);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quality(f64);

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Quality {
    /// Lowest quality, meaning "not acceptable".
    pub const MIN: Self = Self(0.0);

    /// Highest quality, which is also the default.
    pub const MAX: Self = Self(1.0);

    /// Creates a quality value from thousandths, saturating at [`Quality::MAX`].
    #[inline]
    #[must_use]
    pub fn from_millis(millis: u16) -> Self {
        Self(f64::from(millis.min(1000)) / 1000.0)
    }

    /// Attempts to parse a quality value.
    ///
    /// The value must be a finite decimal number, or [`None`] is returned.
    /// Numbers outside of `[0, 1]` are clamped, and negative numbers, as well
    /// as `-0`, become [`Quality::MIN`].
    ///
    /// # Examples
    ///
    /// ```
    /// use negotiator::negotiate::Quality;
    ///
    /// // Parse quality values
    /// assert_eq!(Quality::parse("0.25"), Some(Quality::from_millis(250)));
    /// assert_eq!(Quality::parse("2"), Some(Quality::MAX));
    /// assert_eq!(Quality::parse("high"), None);
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let number = value.trim().parse::<f64>().ok()?;
        if !number.is_finite() {
            return None;
        }

        #[cfg(feature = "tracing")]
        if !(0.0..=1.0).contains(&number) {
            tracing::debug!(value, "quality value clamped");
        }

        // Clamp to the permitted range, mapping `-0` onto `0`
        if number > 0.0 {
            Some(Self(number.min(1.0)))
        } else {
            Some(Self::MIN)
        }
    }

    /// Parses a quality value, falling back to [`Quality::MAX`].
    ///
    /// A malformed quality value must never cause negotiation to fail, so this
    /// is what the range parser uses. See [`Quality::parse`] for the rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use negotiator::negotiate::Quality;
    ///
    /// // Parse malformed quality value
    /// assert_eq!(Quality::parse_or_default("abc"), Quality::MAX);
    /// ```
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        Self::parse(value).unwrap_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::debug!(value, "malformed quality value, using default");
            Self::default()
        })
    }
}

#[allow(clippy::must_use_candidate)]
impl Quality {
    /// Returns the quality value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns the quality value rounded to thousandths.
    ///
    /// A positive value never rounds down to zero, so that only an explicit
    /// zero reports as unacceptable.
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    pub fn millis(self) -> u16 {
        let millis = (self.0 * 1000.0).round() as u16;
        if millis == 0 && self.0 > 0.0 { 1 } else { millis }
    }

    /// Returns whether the quality value is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 <= 0.0
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl Default for Quality {
    /// Creates the default quality value, which is [`Quality::MAX`].
    #[inline]
    fn default() -> Self {
        Self::MAX
    }
}

impl From<Quality> for f64 {
    /// Converts the quality value into a float.
    #[inline]
    fn from(quality: Quality) -> Self {
        quality.0
    }
}

// ----------------------------------------------------------------------------

impl PartialEq for Quality {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Quality {}

impl PartialOrd for Quality {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Quality {
    /// Compares quality values, which are never NaN nor `-0`.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Quality {
    #[inline]
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.0.to_bits().hash(state);
    }
}

// ----------------------------------------------------------------------------

impl fmt::Display for Quality {
    /// Formats the quality value as it would appear in a header.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
