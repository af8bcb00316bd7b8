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

//! The sphere module contains functions for the properties of a sphere
//! given its radius, and for converting between distances on its surface
//! and the angles that they subtend at its centre.

#![allow(clippy::suboptimal_flops)]

pub mod earth;

use core::f64::consts::PI;

/// Calculate the surface area of a sphere.
/// * `radius` - the radius of the sphere.
/// # Examples
/// ```
/// use spherical_geodesy::sphere::calculate_area;
///
/// assert_eq!(4.0 * core::f64::consts::PI, calculate_area(1.0));
/// ```
#[must_use]
pub fn calculate_area(radius: f64) -> f64 {
    4.0 * PI * radius * radius
}

/// Calculate the volume of a sphere.
/// * `radius` - the radius of the sphere.
#[must_use]
pub fn calculate_volume(radius: f64) -> f64 {
    (4.0 / 3.0) * PI * radius * radius * radius
}

/// Convert a distance on the surface of a sphere into the angle that it
/// subtends at the centre, in radians.
/// * `distance` - the distance, in the units of `radius`.
/// * `radius` - the radius of the sphere.
#[must_use]
pub fn convert_distance_to_angle(distance: f64, radius: f64) -> f64 {
    distance / radius
}

/// Convert an angle at the centre of a sphere, in radians, into the
/// distance on its surface.
/// * `angle` - the angle in radians.
/// * `radius` - the radius of the sphere.
#[must_use]
pub fn convert_angle_to_distance(angle: f64, radius: f64) -> f64 {
    angle * radius
}
