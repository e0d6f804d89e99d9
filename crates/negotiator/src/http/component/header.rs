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

//! HTTP header.

use std::fmt;
use std::str::FromStr;

use super::error::{Error, Result};

// ----------------------------------------------------------------------------
// Enums
// ----------------------------------------------------------------------------

/// HTTP header.
///
/// Only the request headers of proactive negotiation are known. All other
/// headers are skipped when a [`Request`][] is parsed, as the negotiator has
/// no use for them.
///
/// [`Request`]: crate::http::Request
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Header {
    /// Accept
    Accept,
    /// Accept-Charset
    AcceptCharset,
    /// Accept-Encoding
    AcceptEncoding,
    /// Accept-Language
    AcceptLanguage,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Header {
    /// All known headers.
    const ALL: [Header; 4] = [
        Header::Accept,
        Header::AcceptCharset,
        Header::AcceptEncoding,
        Header::AcceptLanguage,
    ];

    /// Returns the header name.
    ///
    /// # Examples
    ///
    /// ```
    /// use negotiator::http::Header;
    ///
    /// // Obtain header name
    /// assert_eq!(Header::AcceptLanguage.name(), "Accept-Language");
    /// ```
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Header::Accept => "Accept",
            Header::AcceptCharset => "Accept-Charset",
            Header::AcceptEncoding => "Accept-Encoding",
            Header::AcceptLanguage => "Accept-Language",
        }
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl FromStr for Header {
    type Err = Error;

    /// Attempts to create a header from a string.
    ///
    /// Header names are matched case-insensitively, so `accept` and `ACCEPT`
    /// both yield [`Header::Accept`].
    ///
    /// # Errors
    ///
    /// This method returns [`Error::Header`], if the string does not match one
    /// of the known headers.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use negotiator::http::Header;
    ///
    /// // Create header from string
    /// let header: Header = "accept".parse()?;
    /// assert_eq!(header, Header::Accept);
    /// # Ok(())
    /// # }
    /// ```
    fn from_str(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|header| header.name().eq_ignore_ascii_case(value))
            .ok_or_else(|| Error::Header(value.to_string()))
    }
}

// ----------------------------------------------------------------------------

impl fmt::Display for Header {
    /// Formats the header for display.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_ignores_case() {
        let test_cases = vec![
            ("Accept", Header::Accept),
            ("accept", Header::Accept),
            ("ACCEPT-LANGUAGE", Header::AcceptLanguage),
            ("accept-charset", Header::AcceptCharset),
            ("Accept-encoding", Header::AcceptEncoding),
        ];

        for (value, expected) in test_cases {
            assert_eq!(value.parse::<Header>(), Ok(expected), "for {value}");
        }
    }

    #[test]
    fn test_from_str_unknown() {
        let res = "Content-Type".parse::<Header>();
        assert_eq!(res, Err(Error::Header("Content-Type".into())));
    }

    #[test]
    fn test_name_round_trips() {
        for header in Header::ALL {
            assert_eq!(header.name().parse::<Header>(), Ok(header));
            assert_eq!(header.to_string(), header.name());
        }
    }
}
