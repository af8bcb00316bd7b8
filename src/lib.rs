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

//! spherical-geodesy
//!
//! A library for parsing, formatting and performing geometric calculations
//! with angles and positions on the surface of a sphere.
//!
//! ## Angles
//!
//! An `Angle` is stored in radians and may be created from degrees,
//! radians or degrees, minutes and seconds text, e.g. "51°28′40″N".
//! The `angle::dms` module parses such text and formats angles as degrees,
//! degrees and minutes, or degrees minutes and seconds, see `Style`:
//!
//! - `to_dms` formats an unsigned magnitude;
//! - `to_lat` and `to_lon` normalise latitudes and longitudes and append a
//!   hemisphere suffix: N, S, E or W;
//! - `to_brng` normalises bearings into the range [0°, 360°).
//!
//! ## Great circle navigation
//!
//! A `LatLon` is a position on the surface of a sphere. It calculates the
//! angular distance, initial and final bearings, mid point and destination
//! of great circle arcs using the
//! [haversine](https://en.wikipedia.org/wiki/Haversine_formula) formula
//! and spherical trigonometry.
//!
//! The `rhumb` module calculates [rhumb lines](https://en.wikipedia.org/wiki/Rhumb_line):
//! paths of constant bearing which are straight lines on a Mercator projection.
//!
//! `calculate_intersection_point` calculates the intersection of two great
//! circle paths, each defined by a position and an initial bearing.
//!
//! ## Design
//!
//! `LatLon` calculations are performed on a unit sphere, returning angular
//! distances as `Angle`s. The `Sphere` type scales them by its radius,
//! so distances are in the units of the radius.
//! The static `EARTH` represents a `Sphere` with the mean radius of the Earth
//! in metres.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees`
//!   and `Radians` and the `Validate` trait;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres` and
//!   `NauticalMiles` and perform conversions between them;
//! - [libm](https://crates.io/crates/libm) - for the trigonometric functions;
//! - [thiserror](https://crates.io/crates/thiserror) - to define `Error`;
//! - [tracing](https://crates.io/crates/tracing) - to record parse failures
//!   and unresolved intersections;
//! - [serde](https://crates.io/crates/serde) - optionally, with the `serde`
//!   feature, to serialize `Angle`, `LatLon` and `Sphere`.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod angle;
pub mod error;
pub mod intersection;
pub mod latlon;
pub mod rhumb;
pub mod sphere;

pub use angle::dms::Style;
pub use angle::Angle;
pub use angle_sc::{Degrees, Radians, Validate};
pub use error::Error;
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;
pub use intersection::calculate_intersection_point;
pub use latlon::LatLon;

/// A sphere, defined by its radius.
///
/// Distances are measured in the units of the radius.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere {
    /// The radius of the sphere.
    radius: f64,
}

impl Sphere {
    /// Constructor.
    /// * `radius` - the radius of the `Sphere`, a zero or NaN radius is
    ///   replaced by 1, a unit sphere.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        let radius = if radius == 0.0 || radius.is_nan() {
            1.0
        } else {
            radius
        };
        Self { radius }
    }

    /// Construct a `Sphere` with the mean radius of the Earth in metres.
    #[must_use]
    pub const fn earth() -> Self {
        Self {
            radius: sphere::earth::RADIUS.0,
        }
    }

    /// The radius of the sphere.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// The surface area of the sphere.
    #[must_use]
    pub fn area(&self) -> f64 {
        sphere::calculate_area(self.radius)
    }

    /// The volume of the sphere.
    #[must_use]
    pub fn volume(&self) -> f64 {
        sphere::calculate_volume(self.radius)
    }

    /// The angle subtended at the centre of the sphere by a distance on its
    /// surface.
    /// * `distance` - the distance in the units of the radius.
    /// # Examples
    /// ```
    /// use spherical_geodesy::Sphere;
    ///
    /// let sphere = Sphere::new(10.0);
    /// assert_eq!(2.0, sphere.angle_of(20.0).radians());
    /// ```
    #[must_use]
    pub fn angle_of(&self, distance: f64) -> Angle {
        Angle::from_radians(sphere::convert_distance_to_angle(distance, self.radius))
    }

    /// The distance on the surface of the sphere of an angle subtended at
    /// its centre.
    /// * `angle` - the angle: an `Angle`, `Degrees`, `Radians` or DMS text.
    /// # Examples
    /// ```
    /// use spherical_geodesy::{Radians, Sphere};
    ///
    /// let sphere = Sphere::new(10.0);
    /// assert_eq!(20.0, sphere.distance_of(Radians(2.0)));
    /// ```
    #[must_use]
    pub fn distance_of(&self, angle: impl Into<Angle>) -> f64 {
        sphere::convert_angle_to_distance(angle.into().radians(), self.radius)
    }

    /// The great circle distance between positions.
    /// * `a`, `b` - the positions.
    ///
    /// returns the distance in the units of the radius.
    /// # Examples
    /// ```
    /// use spherical_geodesy::{LatLon, NauticalMiles, Metres, EARTH};
    ///
    /// let greenwich = LatLon::from_degrees(51.4778, -0.0015);
    /// let new_york = LatLon::from_degrees(40.7486, -73.9864);
    ///
    /// let distance = Metres(EARTH.distance_between(&greenwich, &new_york));
    /// let distance_nm = NauticalMiles::from(distance);
    /// println!("Greenwich-New York distance: {:?}", distance_nm);
    /// ```
    #[must_use]
    pub fn distance_between(&self, a: &LatLon, b: &LatLon) -> f64 {
        self.distance_of(a.angle_to(b))
    }

    /// The destination after travelling a distance along a great circle.
    /// * `origin` - the start position.
    /// * `bearing` - the initial bearing.
    /// * `distance` - the distance in the units of the radius.
    #[must_use]
    pub fn destination_point(&self, origin: &LatLon, bearing: Angle, distance: f64) -> LatLon {
        origin.at_bearing_and_angle(bearing, self.angle_of(distance))
    }

    /// The rhumb line distance between positions.
    /// * `a`, `b` - the positions.
    ///
    /// returns the distance in the units of the radius.
    #[must_use]
    pub fn rhumb_distance_between(&self, a: &LatLon, b: &LatLon) -> f64 {
        self.distance_of(a.rhumb_angle_to(b))
    }

    /// The constant bearing of the rhumb line from `a` to `b`,
    /// in the range [0, 2π).
    #[must_use]
    pub fn rhumb_bearing_to(&self, a: &LatLon, b: &LatLon) -> Angle {
        a.rhumb_bearing_to(b)
    }

    /// The destination after travelling a distance along a rhumb line.
    /// * `origin` - the start position.
    /// * `bearing` - the constant bearing.
    /// * `distance` - the distance in the units of the radius.
    #[must_use]
    pub fn rhumb_destination_point(
        &self,
        origin: &LatLon,
        bearing: Angle,
        distance: f64,
    ) -> LatLon {
        origin.at_rhumb_bearing_and_angle(bearing, self.angle_of(distance))
    }
}

impl Default for Sphere {
    /// A unit sphere.
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

impl From<Metres> for Sphere {
    /// A `Sphere` with a radius in metres.
    fn from(radius: Metres) -> Self {
        Self::new(radius.0)
    }
}

/// A static instance of the spherical Earth, with distances in metres.
pub static EARTH: Sphere = Sphere::earth();
