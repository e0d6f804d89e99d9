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

//! HTTP request.

use std::borrow::Cow;
use std::str::{self, FromStr};

use super::component::Header;

mod error;
mod headers;

pub use error::{Error, Result};
pub use headers::Headers;

// ----------------------------------------------------------------------------
// Constants
// ----------------------------------------------------------------------------

/// Maximum size of a request head.
const MAX_REQUEST_SIZE: usize = 8 * 1024 * 1024;

/// Maximum size of a single header value.
const MAX_HEADER_SIZE: usize = 4 * 1024;

/// Maximum number of header lines.
const MAX_HEADERS: usize = 64;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// HTTP request.
///
/// Only the headers of a request are retained, as they are all a negotiator
/// needs to look at. The request either stems from [`Request::from_bytes`],
/// parsing the head of an HTTP/1.1 request, or is assembled by hand.
///
/// # Examples
///
/// ```
/// use negotiator::http::{Header, Request};
///
/// // Create request
/// let req = Request::new()
///     .header(Header::Accept, "text/html");
/// assert_eq!(req.accept(), Some("text/html"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Request<'a> {
    /// Request headers.
    pub headers: Headers<'a>,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl<'a> Request<'a> {
    /// Creates a request.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a request from the given bytes.
    ///
    /// The head of the request is parsed with [`httparse`], and the returned
    /// [`Request`] borrows header values from the input. Headers which are not
    /// known as a [`Header`] are skipped, and so are values which are not
    /// valid UTF-8. Repeated headers are joined with `,`, which is equivalent
    /// for list-valued headers like `Accept`.
    ///
    /// # Errors
    ///
    /// This method returns [`Error::Incomplete`], if the given buffer does not
    /// hold a complete request head, [`Error::Parser`], if it contains invalid
    /// data, and [`Error::TooLarge`] or [`Error::HeaderTooLarge`], if limits
    /// are exceeded.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use negotiator::http::Request;
    ///
    /// // Create request from bytes
    /// let req = Request::from_bytes(
    ///     b"GET / HTTP/1.1\r\nAccept: text/html\r\n\r\n"
    /// )?;
    /// assert_eq!(req.accept(), Some("text/html"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self> {
        if bytes.len() > MAX_REQUEST_SIZE {
            return Err(Error::TooLarge);
        }

        // Initialize buffer for headers and request parser
        let mut headers = [httparse::EMPTY_HEADER; MAX_HEADERS];
        let mut req = httparse::Request::new(&mut headers);
        if req.parse(bytes)?.is_partial() {
            return Err(Error::Incomplete);
        }

        // Unpack request headers, skipping those we don't know about, as well
        // as values that are not valid UTF-8, but rejecting oversized values
        let mut map = Headers::new();
        for header in req.headers.iter() {
            let Ok(name) = Header::from_str(header.name) else {
                continue;
            };
            if header.value.len() > MAX_HEADER_SIZE {
                return Err(Error::HeaderTooLarge(name));
            }
            if let Ok(value) = str::from_utf8(header.value) {
                map.append(name, value);
            }
        }

        // Return request
        Ok(Request { headers: map })
    }

    /// Adds a header to the request.
    #[inline]
    #[must_use]
    pub fn header<V>(mut self, header: Header, value: V) -> Self
    where
        V: Into<Cow<'a, str>>,
    {
        self.headers.insert(header, value);
        self
    }

    /// Returns the raw value of the `Accept` header, if any.
    #[inline]
    #[must_use]
    pub fn accept(&self) -> Option<&str> {
        self.headers.get(Header::Accept)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes() {
        let bytes = b"GET / HTTP/1.1\r\n\
            Host: localhost\r\n\
            accept: text/html, */*;q=0.1\r\n\
            Accept-Language: en\r\n\
            X-Unknown: skipped\r\n\r\n";
        let req = Request::from_bytes(bytes).unwrap();
        assert_eq!(req.accept(), Some("text/html, */*;q=0.1"));
        assert_eq!(req.headers.get(Header::AcceptLanguage), Some("en"));
        assert_eq!(req.headers.get(Header::AcceptCharset), None);
    }

    #[test]
    fn test_from_bytes_joins_repeated_headers() {
        let bytes = b"GET / HTTP/1.1\r\n\
            Accept: text/html\r\n\
            Accept: application/json;q=0.5\r\n\r\n";
        let req = Request::from_bytes(bytes).unwrap();
        assert_eq!(req.accept(), Some("text/html, application/json;q=0.5"));
    }

    #[test]
    fn test_from_bytes_without_accept() {
        let req = Request::from_bytes(b"GET / HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(req.accept(), None);
    }

    #[test]
    fn test_from_bytes_incomplete() {
        let res = Request::from_bytes(b"GET / HTTP/1.1\r\nAccept: text/");
        assert!(matches!(res, Err(Error::Incomplete)));
    }

    #[test]
    fn test_from_bytes_invalid() {
        let res = Request::from_bytes(b"GET / HTTP/1.1\r\nAc cept\r\n\r\n");
        assert!(matches!(res, Err(Error::Parser(_))));
    }

    #[test]
    fn test_from_bytes_header_too_large() {
        let value = "a".repeat(MAX_HEADER_SIZE + 1);
        let bytes = format!("GET / HTTP/1.1\r\nAccept: {value}\r\n\r\n");
        let res = Request::from_bytes(bytes.as_bytes());
        assert!(matches!(res, Err(Error::HeaderTooLarge(Header::Accept))));
    }

    #[test]
    fn test_from_bytes_too_large() {
        let bytes = vec![b'a'; MAX_REQUEST_SIZE + 1];
        let res = Request::from_bytes(&bytes);
        assert!(matches!(res, Err(Error::TooLarge)));
    }

    #[test]
    fn test_from_bytes_too_many_headers() {
        let mut head = String::from("GET / HTTP/1.1\r\n");
        for _ in 0..=MAX_HEADERS {
            head.push_str("Accept: text/html\r\n");
        }
        head.push_str("\r\n");
        let res = Request::from_bytes(head.as_bytes());
        assert!(matches!(
            res,
            Err(Error::Parser(httparse::Error::TooManyHeaders))
        ));
    }

    #[test]
    fn test_header_borrowed_or_owned() {
        let value = String::from("text/html");
        let req = Request::new()
            .header(Header::Accept, value.as_str())
            .header(Header::AcceptLanguage, String::from("en"));
        assert_eq!(req.accept(), Some("text/html"));
        assert_eq!(req.headers.get(Header::AcceptLanguage), Some("en"));
    }
}
