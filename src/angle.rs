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

//! The angle module contains the `Angle` type together with functions for
//! rounding values and normalising angles into the ranges used by
//! latitudes, longitudes and bearings.
//!
//! An `Angle` is stored in radians. It may be created from:
//! - a number of degrees, see `Angle::from_degrees` and `From<Degrees>`;
//! - a number of radians, see `Angle::from_radians` and `From<Radians>`;
//! - degrees, minutes and seconds text, see `Angle::from_dms` and `From<&str>`.
//!
//! The `dms` sub-module parses and formats degrees, minutes and seconds text.

pub mod dms;

use crate::Error;
use alloc::string::String;
use angle_sc::{Degrees, Radians};
use core::f64::consts::{PI, TAU};
use core::ops::{Add, Mul, Neg, Sub};
use core::str::FromStr;

/// The number of decimal places that `Angle::degrees` rounds to.
pub const DEGREES_DECIMAL_PLACES: u32 = 12;

/// The magnitude above which every `f64` is an integer: 2^52.
const MIN_INTEGRAL_VALUE: f64 = 4_503_599_627_370_496.0;

/// Round a value to a number of decimal places, with halves rounded away
/// from zero.
/// * `value` - the value to round.
/// * `decimal_places` - the number of decimal places.
///
/// returns the rounded value, NaN if `value` is NaN.
/// # Examples
/// ```
/// use spherical_geodesy::angle::round;
///
/// assert_eq!(3.142, round(core::f64::consts::PI, 3));
/// assert_eq!(3.0, round(2.5, 0));
/// assert_eq!(-3.0, round(-2.5, 0));
/// ```
#[must_use]
pub fn round(value: f64, decimal_places: u32) -> f64 {
    let scale = libm::pow(10.0, f64::from(decimal_places));
    let scaled = value * scale;
    if libm::fabs(scaled) < MIN_INTEGRAL_VALUE {
        libm::round(scaled) / scale
    } else {
        // already integral at this precision, or not finite
        value
    }
}

/// Round a value to the nearest multiple of `step`.
/// * `value` - the value to round.
/// * `step` - the step size, a `step` <= 0 is treated as 1.
///
/// # Examples
/// ```
/// use spherical_geodesy::angle::round_to;
///
/// assert_eq!(15.0, round_to(13.0, 5.0));
/// assert_eq!(13.0, round_to(12.6, 0.0));
/// ```
#[must_use]
pub fn round_to(value: f64, step: f64) -> f64 {
    let step = if step > 0.0 { step } else { 1.0 };
    libm::round(value / step) * step
}

/// Wrap a value into the range (-`half_turn`, `half_turn`].
#[must_use]
pub(crate) fn wrap_signed(value: f64, half_turn: f64) -> f64 {
    let turn = 2.0 * half_turn;
    let x = libm::fmod(value, turn);
    if x > half_turn {
        x - turn
    } else if x <= -half_turn {
        x + turn
    } else {
        x
    }
}

/// Wrap a value into the range [0, `turn`).
#[must_use]
pub(crate) fn wrap_unsigned(value: f64, turn: f64) -> f64 {
    let x = libm::fmod(value, turn);
    if x < 0.0 {
        let x = x + turn;
        // a tiny negative value may round up to a whole turn
        if x < turn {
            x
        } else {
            0.0
        }
    } else {
        x
    }
}

/// Fold a value into the latitude range [-`half_turn`/2, `half_turn`/2].
///
/// Values are first wrapped into (-`half_turn`, `half_turn`], then values
/// beyond a quarter turn move to the opposite hemisphere,
/// e.g. 100° becomes -80°.
#[must_use]
pub(crate) fn fold_latitude(value: f64, half_turn: f64) -> f64 {
    let quarter_turn = 0.5 * half_turn;
    let x = wrap_signed(value, half_turn);
    if x > quarter_turn {
        x - half_turn
    } else if x < -quarter_turn {
        x + half_turn
    } else {
        x
    }
}

/// An angular measurement, stored in radians.
///
/// An `Angle` is not restricted to any range: normalisation only takes
/// place in the operations that require it.
/// Equality and ordering compare the underlying radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle {
    radians: f64,
}

impl Angle {
    /// Construct an `Angle` from a value in radians.
    #[must_use]
    pub const fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    /// Construct an `Angle` from a value in degrees.
    /// # Examples
    /// ```
    /// use spherical_geodesy::Angle;
    ///
    /// let angle = Angle::from_degrees(10.0);
    /// assert_eq!(10.0 * core::f64::consts::PI / 180.0, angle.radians());
    /// assert_eq!(10.0, angle.degrees());
    /// ```
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            radians: degrees * PI / 180.0,
        }
    }

    /// Construct an `Angle` from degrees, minutes and seconds text.
    ///
    /// returns a NaN `Angle` if the text cannot be parsed, see `dms::parse_dms`.
    /// # Examples
    /// ```
    /// use spherical_geodesy::Angle;
    ///
    /// let angle = Angle::from_dms("40°44′55″S");
    /// assert_eq!(-40.74861111111111, angle.degrees());
    ///
    /// assert!(Angle::from_dms("FRED").is_nan());
    /// ```
    #[must_use]
    pub fn from_dms(text: &str) -> Self {
        Self::from_degrees(dms::parse_dms(text))
    }

    /// The value of the `Angle` in radians.
    #[must_use]
    pub const fn radians(self) -> f64 {
        self.radians
    }

    /// The value of the `Angle` in degrees, rounded to 12 decimal places to
    /// remove floating point noise from the conversion.
    #[must_use]
    pub fn degrees(self) -> f64 {
        round(self.radians * 180.0 / PI, DEGREES_DECIMAL_PLACES)
    }

    /// The value of the `Angle` as `angle_sc::Degrees`.
    #[must_use]
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.degrees())
    }

    /// The value of the `Angle` as `angle_sc::Radians`.
    #[must_use]
    pub const fn to_radians(self) -> Radians {
        Radians(self.radians)
    }

    /// Whether the `Angle` is NaN, i.e. an undefined angle.
    #[must_use]
    pub fn is_nan(self) -> bool {
        self.radians.is_nan()
    }

    /// The sine of the `Angle`.
    #[must_use]
    pub fn sin(self) -> f64 {
        libm::sin(self.radians)
    }

    /// The cosine of the `Angle`.
    #[must_use]
    pub fn cos(self) -> f64 {
        libm::cos(self.radians)
    }

    /// The absolute value of the `Angle`.
    #[must_use]
    pub fn abs(self) -> Self {
        Self::from_radians(libm::fabs(self.radians))
    }

    /// The `Angle` normalised into the bearing range [0, 2π).
    /// # Examples
    /// ```
    /// use spherical_geodesy::Angle;
    ///
    /// let bearing = Angle::from_degrees(-90.0).normalized_bearing();
    /// assert_eq!(270.0, bearing.degrees());
    /// ```
    #[must_use]
    pub fn normalized_bearing(self) -> Self {
        Self::from_radians(wrap_unsigned(self.radians, TAU))
    }

    /// The `Angle` normalised into the longitude range (-π, π].
    #[must_use]
    pub fn normalized_longitude(self) -> Self {
        Self::from_radians(wrap_signed(self.radians, PI))
    }

    /// The `Angle` normalised into the latitude range [-π/2, π/2].
    /// Angles beyond the poles fold onto the opposite hemisphere.
    #[must_use]
    pub fn normalized_latitude(self) -> Self {
        Self::from_radians(fold_latitude(self.radians, PI))
    }

    /// The opposite direction: the `Angle` plus π, as a bearing.
    #[must_use]
    pub fn opposite(self) -> Self {
        Self::from_radians(self.radians + PI).normalized_bearing()
    }
}

impl From<Degrees> for Angle {
    fn from(degrees: Degrees) -> Self {
        Self::from_degrees(degrees.0)
    }
}

impl From<Radians> for Angle {
    fn from(radians: Radians) -> Self {
        Self::from_radians(radians.0)
    }
}

impl From<&str> for Angle {
    /// Construct an `Angle` from degrees, minutes and seconds text,
    /// NaN if the text cannot be parsed.
    fn from(text: &str) -> Self {
        Self::from_dms(text)
    }
}

impl From<Angle> for Degrees {
    fn from(angle: Angle) -> Self {
        angle.to_degrees()
    }
}

impl From<Angle> for Radians {
    fn from(angle: Angle) -> Self {
        angle.to_radians()
    }
}

impl FromStr for Angle {
    type Err = Error;

    /// Parse degrees, minutes and seconds text into an `Angle`.
    ///
    /// returns `Error::InvalidDms` if the text is not a number.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let angle = Self::from_dms(text);
        if angle.is_nan() {
            Err(Error::InvalidDms(String::from(text)))
        } else {
            Ok(angle)
        }
    }
}

impl core::fmt::Display for Angle {
    /// Format the `Angle` as degrees, minutes and seconds.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&dms::to_dms(*self, dms::Style::default(), None))
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_radians(-self.radians)
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::from_radians(self.radians + other.radians)
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::from_radians(self.radians - other.radians)
    }
}

impl Mul<f64> for Angle {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_radians(self.radians * rhs)
    }
}
