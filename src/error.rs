// Copyright (c) 2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The error module contains the errors returned when text cannot be
//! converted into an `Angle`, a `LatLon` or a format `Style`.
//!
//! Numeric calculations do not return errors: invalid values propagate as
//! NaN and degenerate geometry returns `None`.

use alloc::string::String;

/// The errors returned by the `FromStr` implementations of this crate.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The text could not be interpreted as degrees, minutes and seconds.
    #[error("invalid degrees, minutes and seconds: {0:?}")]
    InvalidDms(String),
    /// The text is not one of the format styles: "d", "dm" or "dms".
    #[error("invalid format style: {0:?}, expected \"d\", \"dm\" or \"dms\"")]
    InvalidStyle(String),
    /// The text is not a comma separated latitude and longitude.
    #[error("invalid latitude and longitude: {0:?}")]
    InvalidLatLon(String),
}
