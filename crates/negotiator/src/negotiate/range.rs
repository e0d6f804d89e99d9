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

//! Media range.

use std::fmt;

use super::quality::Quality;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Media range.
///
/// A media range is a single entry of an `Accept` header, e.g. `text/*` or
/// `application/json;q=0.5`, which borrows from the header it was parsed from.
/// The identifier is not validated, so malformed entries are carried along as
/// opaque identifiers with the default quality.
///
/// # Examples
///
/// ```
/// use negotiator::negotiate::{MediaRange, Quality};
///
/// // Parse media range
/// let range = MediaRange::parse("text/html; charset=utf-8; q=0.8");
/// assert_eq!(range.identifier, "text/html");
/// assert_eq!(range.quality, Quality::from_millis(800));
/// assert_eq!(range.param("charset"), Some("utf-8"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaRange<'a> {
    /// Media type identifier, i.e., `type/subtype`.
    pub identifier: &'a str,
    /// Quality value.
    pub quality: Quality,
    /// Parameters other than the quality value.
    pub params: Vec<Param<'a>>,
}

/// Media range parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param<'a> {
    /// Parameter name.
    pub name: &'a str,
    /// Parameter value, unquoted.
    pub value: &'a str,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl MediaRange<'static> {
    /// Media range accepting anything, i.e., `*/*`.
    pub const ANY: Self = MediaRange {
        identifier: "*/*",
        quality: Quality::MAX,
        params: Vec::new(),
    };
}

impl<'a> MediaRange<'a> {
    /// Parses a media range from a token.
    ///
    /// The token is split on `;`, where the first segment is the identifier,
    /// and all further segments are parameters, split on the first `=`. The
    /// `q` parameter is matched case-insensitively and becomes the quality, in
    /// which case only the first occurrence counts. If it's missing, or can't
    /// be parsed, the quality defaults to [`Quality::MAX`]. Parsing never
    /// fails, as any token is a valid, albeit possibly meaningless, range.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace"))]
    #[must_use]
    pub fn parse(token: &'a str) -> Self {
        let mut segments = token.split(';');
        let identifier = segments.next().unwrap_or_default().trim();

        // Extract quality and remaining parameters - empty segments, which
        // result from stray semicolons, are skipped
        let mut quality = None;
        let mut params = Vec::new();
        for segment in segments {
            let (name, value) = segment.split_once('=').unwrap_or((segment, ""));
            let (name, value) = (name.trim(), unquote(value.trim()));
            if name.eq_ignore_ascii_case("q") {
                if quality.is_none() {
                    quality = Some(Quality::parse_or_default(value));
                }
            } else if !name.is_empty() {
                params.push(Param { name, value });
            }
        }

        // Return media range
        let quality = quality.unwrap_or_default();
        Self { identifier, quality, params }
    }

    /// Returns the value of the given parameter (case-insensitive).
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&'a str> {
        self.params.iter().find_map(|param| {
            param.name.eq_ignore_ascii_case(name).then_some(param.value)
        })
    }
}

#[allow(clippy::must_use_candidate)]
impl MediaRange<'_> {
    /// Returns whether the media range is acceptable, i.e., has `q > 0`.
    #[inline]
    pub fn is_acceptable(&self) -> bool {
        !self.quality.is_zero()
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl fmt::Display for MediaRange<'_> {
    /// Formats the media range as it would appear in a header.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.identifier)?;
        for param in &self.params {
            write!(f, ";{}={}", param.name, param.value)?;
        }
        if self.quality != Quality::MAX {
            write!(f, ";q={}", self.quality)?;
        }

        // No errors occurred
        Ok(())
    }
}

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Removes surrounding double quotes from a parameter value.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|value| value.strip_suffix('"'))
        .unwrap_or(value)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_identifier() {
        let test_cases = vec![
            ("application/json", "application/json"),
            ("  text/* ", "text/*"),
            ("*/*;q=0.1", "*/*"),
            ("text/html ; level=1", "text/html"),
            ("text;plain", "text"),
            ("garbage", "garbage"),
            (";q=0.5", ""),
            ("Text/HTML", "Text/HTML"),
        ];

        for (token, expected) in test_cases {
            let range = MediaRange::parse(token);
            assert_eq!(range.identifier, expected, "Failed for token: {token}");
        }
    }

    #[test]
    fn test_parse_quality() {
        let test_cases = vec![
            ("text/html", 1000),
            ("text/html;q=0.5", 500),
            ("text/html; q = 0.5", 500),
            ("text/html;Q=0.2", 200),
            ("text/html;q=0", 0),
            ("text/html;q=", 1000),
            ("text/html;q", 1000),
            ("text/html;q=abc", 1000),
            ("text/html;q=\"0.4\"", 400),
            ("text/html;q=0.3;q=0.9", 300),
            ("text/html;q=7", 1000),
            ("text/html;q=-2", 0),
        ];

        for (token, expected) in test_cases {
            let range = MediaRange::parse(token);
            assert_eq!(
                range.quality.millis(),
                expected,
                "Failed for token: {token}"
            );
        }
    }

    #[test]
    fn test_parse_params() {
        let range =
            MediaRange::parse("text/plain; charset=\"utf-8\";;format ;q=0.5");
        assert_eq!(
            range.params,
            vec![
                Param { name: "charset", value: "utf-8" },
                Param { name: "format", value: "" },
            ]
        );
        assert_eq!(range.param("CHARSET"), Some("utf-8"));
        assert_eq!(range.param("q"), None);
    }

    #[test]
    fn test_is_acceptable() {
        assert!(MediaRange::parse("text/html").is_acceptable());
        assert!(MediaRange::parse("text/html;q=0.001").is_acceptable());
        assert!(!MediaRange::parse("text/html;q=0").is_acceptable());
        assert!(!MediaRange::parse("text/html;q=0.000").is_acceptable());
    }

    #[test]
    fn test_display() {
        let test_cases = vec![
            ("text/html", "text/html"),
            ("text/html;q=1.0", "text/html"),
            ("text/html; level=1; q=0.50", "text/html;level=1;q=0.5"),
        ];

        for (token, expected) in test_cases {
            assert_eq!(MediaRange::parse(token).to_string(), expected);
        }
    }
}
