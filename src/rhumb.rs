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

//! The rhumb module contains functions for calculating rhumb lines
//! (loxodromes) on the surface of a sphere.
//!
//! A rhumb line crosses every meridian at the same angle, so it may be
//! followed on a constant bearing. It is a straight line on a Mercator
//! projection and is generally longer than the great circle arc between the
//! same positions.
//!
//! The functions work in angular distances: multiply by a sphere radius,
//! see `Sphere`, to convert them to lengths.

#![allow(clippy::suboptimal_flops)]

use crate::{Angle, LatLon};
use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

/// The smallest projected latitude difference used as a divisor.
/// Smaller differences are treated as an East-West line.
pub const MIN_VALUE: f64 = 1e-12;

/// The difference between the Mercator projected latitudes `lat1` and `lat2`.
#[must_use]
fn delta_projected_latitude(lat1: f64, lat2: f64) -> f64 {
    libm::log(libm::tan(0.5 * lat2 + FRAC_PI_4) / libm::tan(0.5 * lat1 + FRAC_PI_4))
}

/// The ratio of the latitude difference to the projected latitude difference,
/// the cosine of `lat1` on an East-West line.
#[must_use]
fn stretch_factor(delta_lat: f64, delta_phi: f64, lat1: f64) -> f64 {
    if libm::fabs(delta_phi) > MIN_VALUE {
        delta_lat / delta_phi
    } else {
        libm::cos(lat1)
    }
}

/// The longitude difference from `lon1` to `lon2` via the shorter way around
/// the sphere, i.e. across the antimeridian if that is shorter.
#[must_use]
fn shorter_delta_longitude(lon1: f64, lon2: f64) -> f64 {
    let delta_lon = lon2 - lon1;
    if libm::fabs(delta_lon) > PI {
        if delta_lon > 0.0 {
            delta_lon - TAU
        } else {
            delta_lon + TAU
        }
    } else {
        delta_lon
    }
}

/// Calculate the angular distance along the rhumb line between positions.
/// * `a`, `b` - the positions.
///
/// returns the angular distance along the rhumb line.
/// # Examples
/// ```
/// use spherical_geodesy::LatLon;
/// use spherical_geodesy::rhumb::calculate_rhumb_angle;
///
/// let a = LatLon::from_degrees(0.0, 0.0);
/// let b = LatLon::from_degrees(0.0, 90.0);
/// assert_eq!(90.0, calculate_rhumb_angle(&a, &b).degrees());
/// ```
#[must_use]
pub fn calculate_rhumb_angle(a: &LatLon, b: &LatLon) -> Angle {
    let lat1 = a.lat().radians();
    let lat2 = b.lat().radians();
    let delta_lat = lat2 - lat1;
    let delta_phi = delta_projected_latitude(lat1, lat2);
    let q = stretch_factor(delta_lat, delta_phi, lat1);
    let delta_lon = shorter_delta_longitude(a.lon().radians(), b.lon().radians());

    Angle::from_radians(libm::sqrt(
        delta_lat * delta_lat + q * q * delta_lon * delta_lon,
    ))
}

/// Calculate the constant bearing of the rhumb line from `a` to `b`.
/// * `a`, `b` - the positions.
///
/// returns the bearing in the range [0, 2π).
/// # Examples
/// ```
/// use spherical_geodesy::LatLon;
/// use spherical_geodesy::rhumb::calculate_rhumb_bearing;
///
/// let a = LatLon::from_degrees(0.0, 0.0);
/// let b = LatLon::from_degrees(0.0, -90.0);
/// assert_eq!(270.0, calculate_rhumb_bearing(&a, &b).degrees());
/// ```
#[must_use]
pub fn calculate_rhumb_bearing(a: &LatLon, b: &LatLon) -> Angle {
    let delta_phi = delta_projected_latitude(a.lat().radians(), b.lat().radians());
    let delta_lon = shorter_delta_longitude(a.lon().radians(), b.lon().radians());

    Angle::from_radians(libm::atan2(delta_lon, delta_phi)).normalized_bearing()
}

/// Calculate the position at an angular distance along a rhumb line from
/// `origin` on a constant bearing.
/// * `origin` - the start position.
/// * `bearing` - the constant bearing.
/// * `angle` - the angular distance along the rhumb line.
///
/// returns the destination, with its longitude in the range (-π, π].
/// A path that passes a pole continues down the other side.
#[must_use]
pub fn calculate_rhumb_destination(origin: &LatLon, bearing: Angle, angle: Angle) -> LatLon {
    let lat1 = origin.lat().radians();
    let distance = angle.radians();

    let delta_lat = distance * bearing.cos();
    let mut lat2 = lat1 + delta_lat;
    if libm::fabs(lat2) > FRAC_PI_2 {
        lat2 = if lat2 > 0.0 { PI - lat2 } else { -PI - lat2 };
    }

    let delta_phi = delta_projected_latitude(lat1, lat2);
    let q = stretch_factor(delta_lat, delta_phi, lat1);
    let delta_lon = distance * bearing.sin() / q;

    LatLon::new(
        Angle::from_radians(lat2),
        Angle::from_radians(origin.lon().radians() + delta_lon).normalized_longitude(),
    )
}
