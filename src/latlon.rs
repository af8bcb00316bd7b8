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

//! The latlon module contains the `LatLon` type: a position on the surface of
//! a sphere.
//!
//! The great circle methods of `LatLon` calculate angular distances and
//! bearings, so they are independent of the radius of the sphere.
//! `Sphere` converts the angular distances to and from linear distances.

#![allow(clippy::suboptimal_flops)]

use crate::angle::dms::{to_lat, to_lon, Style};
use crate::{rhumb, Angle, Error, Validate};
use alloc::format;
use alloc::string::String;
use core::f64::consts::FRAC_PI_2;
use core::str::FromStr;

/// A position on the surface of a sphere: a latitude and a longitude.
///
/// The latitude and longitude are not normalised on construction.
/// A `LatLon` with a NaN latitude or longitude is an undefined position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    /// The latitude: north-south.
    lat: Angle,
    /// The longitude: east-west.
    lon: Angle,
}

impl Validate for LatLon {
    /// Test whether a `LatLon` is valid.
    /// Whether -90° <= `lat` <= 90° and `lon` is finite.
    fn is_valid(&self) -> bool {
        libm::fabs(self.lat.radians()) <= FRAC_PI_2 && self.lon.radians().is_finite()
    }
}

impl LatLon {
    /// Constructor.
    /// * `lat` - the latitude.
    /// * `lon` - the longitude.
    #[must_use]
    pub const fn new(lat: Angle, lon: Angle) -> Self {
        Self { lat, lon }
    }

    /// Construct a `LatLon` from a latitude and longitude in degrees.
    /// # Examples
    /// ```
    /// use spherical_geodesy::LatLon;
    ///
    /// let a = LatLon::from_degrees(51.5, -0.1);
    /// assert_eq!(51.5, a.lat().degrees());
    /// assert_eq!(-0.1, a.lon().degrees());
    /// ```
    #[must_use]
    pub fn from_degrees(lat: f64, lon: f64) -> Self {
        Self::new(Angle::from_degrees(lat), Angle::from_degrees(lon))
    }

    /// Construct a `LatLon` from degrees, minutes and seconds text.
    /// See `angle::dms::parse_dms`.
    /// # Examples
    /// ```
    /// use spherical_geodesy::LatLon;
    ///
    /// let a = LatLon::from_dms("51° 28′ 40.12″ N", "000° 00′ 05.31″ W");
    /// assert_eq!("51°28′40″N, 0°00′05″W", a.to_string());
    /// ```
    #[must_use]
    pub fn from_dms(lat: &str, lon: &str) -> Self {
        Self::new(Angle::from_dms(lat), Angle::from_dms(lon))
    }

    /// Accessor for the latitude.
    #[must_use]
    pub const fn lat(&self) -> Angle {
        self.lat
    }

    /// Accessor for the longitude.
    #[must_use]
    pub const fn lon(&self) -> Angle {
        self.lon
    }

    /// Whether the latitude or longitude is NaN.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.lat.is_nan() || self.lon.is_nan()
    }

    /// Calculate the great circle angle between this position and `other`
    /// using the haversine formula.
    /// * `other` - the other position.
    ///
    /// returns the angular distance, in the range [0, π].
    /// # Examples
    /// ```
    /// use spherical_geodesy::LatLon;
    ///
    /// let a = LatLon::from_degrees(0.0, 0.0);
    /// let b = LatLon::from_degrees(45.0, 90.0);
    /// assert_eq!(90.0, a.angle_to(&b).degrees());
    /// ```
    #[must_use]
    pub fn angle_to(&self, other: &Self) -> Angle {
        let lat1 = self.lat.radians();
        let lat2 = other.lat.radians();
        let sin_half_delta_lat = libm::sin((lat2 - lat1) / 2.0);
        let sin_half_delta_lon = libm::sin((other.lon.radians() - self.lon.radians()) / 2.0);

        let a = sin_half_delta_lat * sin_half_delta_lat
            + libm::cos(lat1) * libm::cos(lat2) * sin_half_delta_lon * sin_half_delta_lon;
        // rounding may put `a` just above 1 for antipodal positions
        let one_minus_a = f64::max(0.0, 1.0 - a);
        Angle::from_radians(2.0 * libm::atan2(libm::sqrt(a), libm::sqrt(one_minus_a)))
    }

    /// Calculate the initial great circle bearing from this position to `other`.
    /// * `other` - the other position.
    ///
    /// returns the bearing clockwise from North, in the range [0, 2π).
    /// # Examples
    /// ```
    /// use spherical_geodesy::LatLon;
    ///
    /// let a = LatLon::from_degrees(0.0, 0.0);
    /// let b = LatLon::from_degrees(45.0, 90.0);
    /// assert_eq!(45.0, a.bearing_to(&b).degrees());
    /// ```
    #[must_use]
    pub fn bearing_to(&self, other: &Self) -> Angle {
        let lat1 = self.lat.radians();
        let lat2 = other.lat.radians();
        let delta_lon = other.lon.radians() - self.lon.radians();

        let y = libm::sin(delta_lon) * libm::cos(lat2);
        let x = libm::cos(lat1) * libm::sin(lat2)
            - libm::sin(lat1) * libm::cos(lat2) * libm::cos(delta_lon);
        Angle::from_radians(libm::atan2(y, x)).normalized_bearing()
    }

    /// Calculate the final great circle bearing on arrival at `other`:
    /// the reverse of the initial bearing from `other` to this position.
    /// * `other` - the other position.
    ///
    /// returns the bearing clockwise from North, in the range [0, 2π).
    #[must_use]
    pub fn final_bearing_to(&self, other: &Self) -> Angle {
        other.bearing_to(self).opposite()
    }

    /// Calculate the position at an angular distance along a great circle
    /// from this position.
    /// * `bearing` - the initial bearing.
    /// * `angle` - the angular distance along the great circle.
    ///
    /// returns the position, with its longitude in the range (-π, π].
    /// # Examples
    /// ```
    /// use spherical_geodesy::{Angle, LatLon};
    ///
    /// let a = LatLon::from_degrees(0.0, 0.0);
    /// let b = a.at_bearing_and_angle(Angle::from_degrees(90.0), Angle::from_degrees(90.0));
    /// assert_eq!(0.0, b.lat().degrees());
    /// assert_eq!(90.0, b.lon().degrees());
    /// ```
    #[must_use]
    pub fn at_bearing_and_angle(&self, bearing: Angle, angle: Angle) -> Self {
        let lat1 = self.lat.radians();
        let (sin_lat1, cos_lat1) = (libm::sin(lat1), libm::cos(lat1));
        let (sin_angle, cos_angle) = (angle.sin(), angle.cos());

        let lat2 = libm::asin(sin_lat1 * cos_angle + cos_lat1 * sin_angle * bearing.cos());
        let delta_lon = libm::atan2(
            bearing.sin() * sin_angle * cos_lat1,
            cos_angle - sin_lat1 * libm::sin(lat2),
        );
        Self::new(
            Angle::from_radians(lat2),
            Angle::from_radians(self.lon.radians() + delta_lon).normalized_longitude(),
        )
    }

    /// Calculate the mid point of the great circle arc between this position
    /// and `other`.
    /// * `other` - the other position.
    ///
    /// returns the mid position, with its longitude in the range (-π, π].
    #[must_use]
    pub fn midpoint_to(&self, other: &Self) -> Self {
        let lat1 = self.lat.radians();
        let lat2 = other.lat.radians();
        let delta_lon = other.lon.radians() - self.lon.radians();

        let bx = libm::cos(lat2) * libm::cos(delta_lon);
        let by = libm::cos(lat2) * libm::sin(delta_lon);
        let cos_lat1_bx = libm::cos(lat1) + bx;

        let lat3 = libm::atan2(
            libm::sin(lat1) + libm::sin(lat2),
            libm::sqrt(cos_lat1_bx * cos_lat1_bx + by * by),
        );
        let lon3 = self.lon.radians() + libm::atan2(by, cos_lat1_bx);
        Self::new(
            Angle::from_radians(lat3),
            Angle::from_radians(lon3).normalized_longitude(),
        )
    }

    /// Calculate the rhumb line angle between this position and `other`.
    /// See `rhumb::calculate_rhumb_angle`.
    #[must_use]
    pub fn rhumb_angle_to(&self, other: &Self) -> Angle {
        rhumb::calculate_rhumb_angle(self, other)
    }

    /// Calculate the constant rhumb line bearing from this position to `other`.
    /// See `rhumb::calculate_rhumb_bearing`.
    #[must_use]
    pub fn rhumb_bearing_to(&self, other: &Self) -> Angle {
        rhumb::calculate_rhumb_bearing(self, other)
    }

    /// Calculate the position at an angular distance along a rhumb line
    /// from this position.
    /// See `rhumb::calculate_rhumb_destination`.
    #[must_use]
    pub fn at_rhumb_bearing_and_angle(&self, bearing: Angle, angle: Angle) -> Self {
        rhumb::calculate_rhumb_destination(self, bearing, angle)
    }

    /// Format the position as comma separated latitude and longitude text.
    /// * `style` - the `Style` of the text.
    /// * `decimal_places` - the number of decimal places, `None` for the
    ///   `Style` default.
    ///
    /// returns the text, "-,-" if the position is NaN.
    /// # Examples
    /// ```
    /// use spherical_geodesy::LatLon;
    /// use spherical_geodesy::angle::dms::Style;
    ///
    /// let a = LatLon::from_degrees(51.477811111111116, -0.0015);
    /// assert_eq!("51.4778°N, 0.0015°W", a.format(Style::Deg, None));
    /// ```
    #[must_use]
    pub fn format(&self, style: Style, decimal_places: Option<usize>) -> String {
        if self.is_nan() {
            String::from("-,-")
        } else {
            format!(
                "{}, {}",
                to_lat(self.lat, style, decimal_places),
                to_lon(self.lon, style, decimal_places)
            )
        }
    }
}

impl core::fmt::Display for LatLon {
    /// Format the position as degrees, minutes and seconds text.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.format(Style::default(), None))
    }
}

impl FromStr for LatLon {
    type Err = Error;

    /// Parse comma separated latitude and longitude text,
    /// e.g. "51° 28′ 40.12″ N, 000° 00′ 05.31″ W".
    ///
    /// returns `Error::InvalidLatLon` unless the text contains two valid angles.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut parts = text.split(',');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(lat), Some(lon), None) => {
                let position = Self::from_dms(lat, lon);
                if position.is_nan() {
                    Err(Error::InvalidLatLon(String::from(text)))
                } else {
                    Ok(position)
                }
            }
            _ => Err(Error::InvalidLatLon(String::from(text))),
        }
    }
}
