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

//! HTTP content negotiation.
//!
//! Given the value of a request's `Accept` header, this crate computes the
//! media ranges the client is willing to receive, most preferred first. Ranges
//! with `q=0` are dropped, and ranges of equal quality keep the order in which
//! the client listed them. An empty header accepts anything, i.e., `*/*`.
//!
//! Matching the ranges against the representations a server can produce is
//! left to the caller, since it depends on what the server has available.
//!
//! # Examples
//!
//! ```
//! use negotiator::parse_media_types;
//!
//! // Order media ranges by preference
//! let types = parse_media_types("application/json;q=0.2, text/html");
//! assert_eq!(types, ["text/html", "application/json"]);
//! ```

#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]

pub mod http;
pub mod negotiate;

pub use negotiate::{parse_media_types, Negotiator};
