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

//! Content negotiation.

use std::borrow::Cow;

use crate::http::Request;

mod builder;
mod quality;
mod range;
mod tokenize;

pub use builder::Builder;
pub use quality::Quality;
pub use range::{MediaRange, Param};
pub use tokenize::tokenize;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Content negotiator.
///
/// A negotiator is bound to the value of a single `Accept` header, and orders
/// the media ranges it contains by preference. Ranges with a quality of zero
/// are explicit rejections and are dropped, and the remaining ranges are
/// sorted by descending quality. Ranges of equal quality keep the order in
/// which they appear in the header, so the client's left-to-right preference
/// is honored. An empty header means that anything is acceptable.
///
/// Note that overlapping ranges are not resolved against each other, e.g., a
/// header containing both `text/*` and `text/plain` yields both in order of
/// their quality. Picking a representation from what the client accepts is
/// up to the caller.
///
/// Negotiation is a pure function of the header value. It never fails, as a
/// malformed header must not make a request fail. Malformed quality values
/// fall back to `1`, and empty entries are skipped.
///
/// # Examples
///
/// ```
/// use negotiator::http::{Header, Request};
/// use negotiator::Negotiator;
///
/// // Create request
/// let req = Request::new()
///     .header(Header::Accept, "text/plain, application/json;q=0.5, text/html");
///
/// // Create negotiator and obtain media types
/// let negotiator = Negotiator::new(&req);
/// assert_eq!(
///     negotiator.media_types(),
///     ["text/plain", "text/html", "application/json"]
/// );
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Negotiator<'a> {
    /// Raw header value.
    header: &'a str,
    /// Whether identifiers are converted to lowercase.
    lowercase: bool,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl<'a> Negotiator<'a> {
    /// Creates a negotiator for the `Accept` header of the given request.
    ///
    /// # Examples
    ///
    /// ```
    /// use negotiator::http::Request;
    /// use negotiator::Negotiator;
    ///
    /// // Create negotiator for request without header
    /// let req = Request::new();
    /// let negotiator = Negotiator::new(&req);
    /// assert_eq!(negotiator.media_types(), ["*/*"]);
    /// ```
    #[inline]
    #[must_use]
    pub fn new(req: &'a Request<'_>) -> Self {
        Builder::new().request(req)
    }

    /// Creates a negotiator builder.
    #[inline]
    #[must_use]
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Returns the acceptable media ranges, most preferred first.
    ///
    /// An empty or all-whitespace header yields [`MediaRange::ANY`], whereas a
    /// header only consisting of rejected ranges yields nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use negotiator::Negotiator;
    ///
    /// // Create negotiator and obtain best media range
    /// let negotiator = Negotiator::from("text/*;q=0.5, text/html;level=1");
    /// let ranges = negotiator.ranges();
    /// assert_eq!(ranges[0].identifier, "text/html");
    /// assert_eq!(ranges[0].param("level"), Some("1"));
    /// ```
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, fields(header = %self.header))
    )]
    #[must_use]
    pub fn ranges(&self) -> Vec<MediaRange<'a>> {
        if self.header.trim().is_empty() {
            return vec![MediaRange::ANY];
        }

        // Parse tokens, dropping rejected ranges, and sort by quality - note
        // that the sort must be stable, so that ranges of equal quality keep
        // their order, which `sort_by` guarantees
        let iter = tokenize(self.header).map(MediaRange::parse);
        let mut ranges: Vec<_> = iter.filter(MediaRange::is_acceptable).collect();
        ranges.sort_by(|a, b| b.quality.cmp(&a.quality));
        ranges
    }

    /// Returns the acceptable media types, most preferred first.
    ///
    /// This is the list of identifiers of [`Negotiator::ranges`], with quality
    /// values and all other parameters removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use negotiator::Negotiator;
    ///
    /// // Create negotiator and obtain media types
    /// let negotiator = Negotiator::from("application/json;q=0.2, text/html");
    /// assert_eq!(negotiator.media_types(), ["text/html", "application/json"]);
    /// ```
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, fields(header = %self.header))
    )]
    #[must_use]
    pub fn media_types(&self) -> Vec<Cow<'a, str>> {
        let iter = self.ranges().into_iter();
        iter.map(|range| self.normalize(range.identifier)).collect()
    }

    /// Normalizes an identifier according to the configured options.
    fn normalize(&self, identifier: &'a str) -> Cow<'a, str> {
        if self.lowercase && identifier.bytes().any(|b| b.is_ascii_uppercase())
        {
            Cow::Owned(identifier.to_ascii_lowercase())
        } else {
            Cow::Borrowed(identifier)
        }
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl<'a> From<&'a str> for Negotiator<'a> {
    /// Creates a negotiator for the given header value.
    #[inline]
    fn from(header: &'a str) -> Self {
        Builder::new().header(header)
    }
}

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Returns the acceptable media types of a header value, most preferred first.
///
/// This is a shortcut for [`Negotiator::media_types`] with default options.
///
/// # Examples
///
/// ```
/// use negotiator::parse_media_types;
///
/// // Obtain media types
/// assert_eq!(parse_media_types(""), ["*/*"]);
/// assert!(parse_media_types("application/json;q=0").is_empty());
/// ```
#[must_use]
pub fn parse_media_types(header: &str) -> Vec<Cow<'_, str>> {
    Negotiator::from(header).media_types()
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Header;

    #[test]
    fn test_parse_media_types() {
        let test_cases = vec![
            ("", vec!["*/*"]),
            ("   ", vec!["*/*"]),
            ("text/*", vec!["text/*"]),
            ("application/json", vec!["application/json"]),
            ("application/json;q=0.5", vec!["application/json"]),
            ("application/json;q=0", vec![]),
            ("text/*, text/plain;q=0", vec!["text/*"]),
            (
                "application/json;q=0.2, text/html",
                vec!["text/html", "application/json"],
            ),
            (
                "text/plain, application/json;q=0.5, text/html, */*;q=0.1",
                vec!["text/plain", "text/html", "application/json", "*/*"],
            ),
            (
                "text/plain, application/json;q=0.5, text/html, text/xml, \
                 text/yaml, text/javascript, text/csv, text/css, text/rtf, \
                 text/markdown, application/octet-stream;q=0.2, */*;q=0.1",
                vec![
                    "text/plain",
                    "text/html",
                    "text/xml",
                    "text/yaml",
                    "text/javascript",
                    "text/csv",
                    "text/css",
                    "text/rtf",
                    "text/markdown",
                    "application/json",
                    "application/octet-stream",
                    "*/*",
                ],
            ),
        ];

        for (header, expected) in test_cases {
            let types = parse_media_types(header);
            assert_eq!(types, expected, "Failed for header: {header:?}");
        }
    }

    #[test]
    fn test_parse_media_types_all_rejected() {
        let types = parse_media_types("text/html;q=0, */*;q=0.0");
        assert!(types.is_empty());
    }

    #[test]
    fn test_parse_media_types_malformed() {
        let test_cases = vec![
            (",,", vec![]),
            ("text;plain", vec!["text"]),
            ("text/html;q=oops, text/plain;q=0.5", vec!["text/html", "text/plain"]),
            ("a/b;q=0.5,, ,c/d", vec!["c/d", "a/b"]),
            (";q=0.5, x/y", vec!["x/y", ""]),
        ];

        for (header, expected) in test_cases {
            let types = parse_media_types(header);
            assert_eq!(types, expected, "Failed for header: {header:?}");
        }
    }

    #[test]
    fn test_parse_media_types_out_of_range_quality() {
        let types = parse_media_types("a/a;q=0.9, b/b;q=2, c/c, d/d;q=-1");
        assert_eq!(types, ["b/b", "c/c", "a/a"]);
    }

    #[test]
    fn test_parse_media_types_is_stable() {
        let header = "a/a;q=0.5, b/b, c/c;q=0.5, d/d;q=0.7, e/e, f/f;q=0.5";
        let types = parse_media_types(header);
        assert_eq!(types, ["b/b", "e/e", "d/d", "a/a", "c/c", "f/f"]);
    }

    #[test]
    fn test_parse_media_types_orders_fine_grained_quality() {
        let test_cases = vec![
            ("a/a;q=0.9999, b/b", vec!["b/b", "a/a"]),
            ("a/a;q=0.1231, b/b;q=0.1234", vec!["b/b", "a/a"]),
            ("a/a;q=0.0001, b/b;q=0.0002", vec!["b/b", "a/a"]),
            ("a/a;q=0.5000, b/b;q=0.5", vec!["a/a", "b/b"]),
        ];

        for (header, expected) in test_cases {
            let types = parse_media_types(header);
            assert_eq!(types, expected, "Failed for header: {header:?}");
        }
    }

    #[test]
    fn test_parse_media_types_is_idempotent() {
        let header = "text/html;q=0.9, application/xhtml+xml, */*;q=0.8";
        let negotiator = Negotiator::from(header);
        assert_eq!(negotiator.media_types(), negotiator.media_types());
        assert_eq!(negotiator.media_types(), parse_media_types(header));
    }

    #[test]
    fn test_parse_media_types_length() {
        let test_cases = vec![
            "a/a, b/b;q=0, c/c;q=0.3",
            "a/a;q=0, b/b;q=0",
            "a/a, a/a, a/a;q=0.1",
            "a/a;q=0.000, b/b;q=0.001",
        ];

        for header in test_cases {
            let tokens: Vec<_> = tokenize(header).collect();
            let rejected = tokens
                .iter()
                .filter(|token| !MediaRange::parse(token).is_acceptable())
                .count();
            let types = parse_media_types(header);
            assert_eq!(types.len(), tokens.len() - rejected, "for {header}");
        }
    }

    #[test]
    fn test_parse_media_types_keeps_overlapping_ranges() {
        let types = parse_media_types("text/*;q=0.5, text/plain, */*;q=0.1");
        assert_eq!(types, ["text/plain", "text/*", "*/*"]);
    }

    #[test]
    fn test_ranges() {
        let negotiator = Negotiator::from("text/html;level=1;q=0.5, text/*");
        let ranges = negotiator.ranges();
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[0].identifier, "text/*");
        assert_eq!(ranges[0].quality, Quality::MAX);
        assert_eq!(ranges[1].identifier, "text/html");
        assert_eq!(ranges[1].quality, Quality::from_millis(500));
        assert_eq!(ranges[1].param("level"), Some("1"));
    }

    #[test]
    fn test_ranges_empty_header() {
        assert_eq!(Negotiator::from("").ranges(), vec![MediaRange::ANY]);
    }

    #[test]
    fn test_identifiers_are_verbatim() {
        let types = parse_media_types("Text/HTML, application/JSON");
        assert_eq!(types, ["Text/HTML", "application/JSON"]);
    }

    #[test]
    fn test_identifiers_lowercase() {
        let negotiator = Negotiator::builder()
            .lowercase(true)
            .header("Text/HTML, application/json;q=0.1");
        let types = negotiator.media_types();
        assert_eq!(types, ["text/html", "application/json"]);
        assert!(matches!(types[0], Cow::Owned(_)));
        assert!(matches!(types[1], Cow::Borrowed(_)));
    }

    #[test]
    fn test_new_from_request() {
        let req = Request::new()
            .header(Header::Accept, "application/json;q=0.2, text/html");
        let types = Negotiator::new(&req).media_types();
        assert_eq!(types, ["text/html", "application/json"]);
    }

    #[test]
    fn test_new_from_request_without_accept() {
        let req = Request::new().header(Header::AcceptLanguage, "en");
        assert_eq!(Negotiator::new(&req).media_types(), ["*/*"]);
    }

    #[test]
    fn test_new_from_parsed_request() {
        let bytes = b"GET / HTTP/1.1\r\n\
            Accept: text/html;q=0.5\r\n\
            Accept: application/json\r\n\r\n";
        let req = Request::from_bytes(bytes).unwrap();
        let types = Negotiator::builder().request(&req).media_types();
        assert_eq!(types, ["application/json", "text/html"]);
    }
}
