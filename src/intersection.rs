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

//! The `intersection` module contains a function for calculating the
//! intersection of two great circle paths on the surface of a sphere.
//!
//! Each path is defined by a start position and an initial bearing.
//! The start positions and the intersection form a spherical triangle, which
//! is solved using the spherical law of cosines and Napier's analogies.
//!
//! Paths that cannot have a unique intersection return `None`:
//! - paths starting from the same or antipodal positions;
//! - collinear paths, i.e. along the same great circle;
//! - paths which only meet behind one of their start positions.

#![allow(clippy::suboptimal_flops)]

use crate::{Angle, LatLon};
use core::f64::consts::TAU;

/// The minimum sine of an angle between paths, below which the paths are
/// considered to be parallel.
pub const MIN_SIN_ANGLE: f64 = 16.0 * f64::EPSILON;

/// Calculate an initial bearing on the great circle between start positions
/// from the sides of their spherical triangle.
/// * `sin_lat1`, `sin_lat2` - the sines of the latitudes of the positions.
/// * `cos_lat1` - the cosine of the latitude of the start position.
/// * `sin_dist12`, `cos_dist12` - the sine and cosine of the angle between the
///   positions.
///
/// returns the bearing in the range [0, π], 0 if rounding puts the cosine out
/// of range.
#[must_use]
fn triangle_bearing(
    sin_lat1: f64,
    sin_lat2: f64,
    cos_lat1: f64,
    sin_dist12: f64,
    cos_dist12: f64,
) -> f64 {
    let bearing = libm::acos((sin_lat2 - sin_lat1 * cos_dist12) / (sin_dist12 * cos_lat1));
    if bearing.is_nan() {
        0.0
    } else {
        bearing
    }
}

/// Calculate the intersection of two great circle paths.
/// * `p1` - the start position of the first path.
/// * `bearing1` - the initial bearing of the first path.
/// * `p2` - the start position of the second path.
/// * `bearing2` - the initial bearing of the second path.
///
/// returns the intersection position with its longitude in the range (-π, π],
/// or `None` if the paths do not have a unique intersection.
/// # Examples
/// ```
/// use spherical_geodesy::{calculate_intersection_point, Angle, LatLon};
///
/// let p1 = LatLon::from_degrees(0.0, 0.0);
/// let p2 = LatLon::from_degrees(0.0, 10.0);
///
/// // the paths are along the same great circle
/// let result = calculate_intersection_point(
///     &p1,
///     Angle::from_degrees(90.0),
///     &p2,
///     Angle::from_degrees(90.0),
/// );
/// assert!(result.is_none());
///
/// let result = calculate_intersection_point(
///     &p1,
///     Angle::from_degrees(45.0),
///     &p2,
///     Angle::from_degrees(315.0),
/// );
/// let p3 = result.unwrap();
/// assert!(libm::fabs(p3.lon().degrees() - 5.0) < 1e-9);
/// ```
#[must_use]
pub fn calculate_intersection_point(
    p1: &LatLon,
    bearing1: Angle,
    p2: &LatLon,
    bearing2: Angle,
) -> Option<LatLon> {
    let lat1 = p1.lat().radians();
    let lat2 = p2.lat().radians();
    let delta_lon = p2.lon().radians() - p1.lon().radians();
    let (sin_lat1, cos_lat1) = (libm::sin(lat1), libm::cos(lat1));
    let (sin_lat2, cos_lat2) = (libm::sin(lat2), libm::cos(lat2));

    let sin_half_delta_lat = libm::sin(0.5 * (lat2 - lat1));
    let sin_half_delta_lon = libm::sin(0.5 * delta_lon);
    let a = sin_half_delta_lat * sin_half_delta_lat
        + cos_lat1 * cos_lat2 * sin_half_delta_lon * sin_half_delta_lon;
    // rounding may put `a` just above 1 for antipodal positions
    let a = if a > 1.0 { 1.0 } else { a };
    let dist12 = 2.0 * libm::asin(libm::sqrt(a));
    if dist12 == 0.0 {
        tracing::debug!("calculate_intersection_point: coincident start positions");
        return None;
    }
    let (sin_dist12, cos_dist12) = (libm::sin(dist12), libm::cos(dist12));
    // every great circle through a position also passes through its antipode
    if libm::fabs(sin_dist12) < MIN_SIN_ANGLE {
        tracing::debug!("calculate_intersection_point: antipodal start positions");
        return None;
    }

    let bearing_a = triangle_bearing(sin_lat1, sin_lat2, cos_lat1, sin_dist12, cos_dist12);
    let bearing_b = triangle_bearing(sin_lat2, sin_lat1, cos_lat2, sin_dist12, cos_dist12);
    let (bearing12, bearing21) = if libm::sin(delta_lon) > 0.0 {
        (bearing_a, TAU - bearing_b)
    } else {
        (TAU - bearing_a, bearing_b)
    };

    let alpha1 = Angle::from_radians(bearing1.radians() - bearing12).normalized_longitude();
    let alpha2 = Angle::from_radians(bearing21 - bearing2.radians()).normalized_longitude();
    let (sin_alpha1, cos_alpha1) = (alpha1.sin(), alpha1.cos());
    let (sin_alpha2, cos_alpha2) = (alpha2.sin(), alpha2.cos());

    if libm::fabs(sin_alpha1) < MIN_SIN_ANGLE && libm::fabs(sin_alpha2) < MIN_SIN_ANGLE {
        tracing::debug!("calculate_intersection_point: collinear paths");
        return None;
    }
    if sin_alpha1 * sin_alpha2 < 0.0 {
        tracing::debug!("calculate_intersection_point: ambiguous intersection");
        return None;
    }

    let alpha3 = libm::acos(-cos_alpha1 * cos_alpha2 + sin_alpha1 * sin_alpha2 * cos_dist12);
    let dist13 = libm::atan2(
        sin_dist12 * sin_alpha1 * sin_alpha2,
        cos_alpha2 + cos_alpha1 * libm::cos(alpha3),
    );

    Some(p1.at_bearing_and_angle(bearing1, Angle::from_radians(dist13)))
}
