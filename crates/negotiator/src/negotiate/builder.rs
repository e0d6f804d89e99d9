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

//! Negotiator builder.

use crate::http::Request;

use super::Negotiator;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Negotiator builder.
///
/// The builder carries the options of a negotiator, so it can be set up once
/// and then be applied to each incoming request. It's cheap to copy.
///
/// # Examples
///
/// ```
/// use negotiator::Negotiator;
///
/// // Create negotiator with lowercase identifiers
/// let negotiator = Negotiator::builder()
///     .lowercase(true)
///     .header("Text/HTML, application/JSON;q=0.5");
/// assert_eq!(negotiator.media_types(), ["text/html", "application/json"]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Builder {
    /// Whether identifiers are converted to lowercase.
    lowercase: bool,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Builder {
    /// Creates a negotiator builder.
    ///
    /// Note that the canonical way to create a [`Builder`] is to invoke the
    /// [`Negotiator::builder`] method. If the defaults suffice, a negotiator
    /// can be created directly with [`Negotiator::new`].
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether identifiers are converted to lowercase.
    ///
    /// Media types are case-insensitive, but by default identifiers are left
    /// exactly as the client sent them. ASCII case folding is applied when
    /// this is enabled, which only allocates for identifiers that need it.
    #[inline]
    #[must_use]
    pub fn lowercase(mut self, value: bool) -> Self {
        self.lowercase = value;
        self
    }

    /// Creates a negotiator for the given header value.
    #[inline]
    #[must_use]
    pub fn header(self, header: &str) -> Negotiator<'_> {
        Negotiator { header, lowercase: self.lowercase }
    }

    /// Creates a negotiator for the `Accept` header of the given request.
    ///
    /// A request without an `Accept` header is treated like one with an empty
    /// header, which means that anything is acceptable.
    #[inline]
    #[must_use]
    pub fn request<'a>(self, req: &'a Request<'_>) -> Negotiator<'a> {
        self.header(req.accept().unwrap_or_default())
    }
}
