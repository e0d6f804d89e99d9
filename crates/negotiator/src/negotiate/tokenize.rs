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

//! Tokenizer.

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Splits a header value into media range tokens.
///
/// The value is split on `,`, and each piece is trimmed. Pieces which are empty
/// after trimming, e.g., due to stray or trailing commas, are skipped, so an
/// empty or all-whitespace value yields no tokens at all. Tokens are returned
/// as-is otherwise, since it's the range parser's job to make sense of them.
///
/// # Examples
///
/// ```
/// use negotiator::negotiate::tokenize;
///
/// // Split header value into tokens
/// let tokens: Vec<_> = tokenize("text/html, ,application/json;q=0.5,")
///     .collect();
/// assert_eq!(tokens, ["text/html", "application/json;q=0.5"]);
/// ```
pub fn tokenize(header: &str) -> impl Iterator<Item = &str> {
    header
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
