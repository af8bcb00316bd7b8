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

// extern crate we're testing, same as any other code would do.
extern crate spherical_geodesy;

use angle_sc::is_within_tolerance;
use spherical_geodesy::angle::dms::{parse_dms, to_brng, to_dms, to_lat, to_lon, Style};
use spherical_geodesy::{Angle, Degrees, LatLon, EARTH};
use unit_sphere::great_circle;

const DMS_FILENAME: &str = "tests/data/dms_examples.csv";
const FORMAT_FILENAME: &str = "tests/data/format_examples.csv";

type DmsRecord = (String, f64);
type FormatRecord = (f64, String, Option<usize>, String, String, String, String);

#[test]
fn test_parse_dms_examples() -> Result<(), Box<dyn std::error::Error>> {
    let mut rdr = csv::Reader::from_path(DMS_FILENAME)?;

    let mut count = 0;
    for result in rdr.deserialize::<DmsRecord>() {
        let (text, degrees) = result?;

        let value = parse_dms(&text);
        assert!(
            is_within_tolerance(degrees, value, 1e-12),
            "text: {text:?} expected: {degrees} value: {value}"
        );

        let angle: Angle = text.parse()?;
        assert!(is_within_tolerance(degrees, angle.degrees(), 1e-12));

        count += 1;
    }
    assert!(0 < count);

    Ok(())
}

#[test]
fn test_invalid_dms_examples() {
    for text in ["", "FRED", "1 2 3 4", "-", "°′″", "1..2", "1,5"] {
        assert!(parse_dms(text).is_nan(), "text: {text:?}");
        assert!(text.parse::<Angle>().is_err(), "text: {text:?}");
    }
}

#[test]
fn test_format_examples() -> Result<(), Box<dyn std::error::Error>> {
    let mut rdr = csv::Reader::from_path(FORMAT_FILENAME)?;

    let mut count = 0;
    for result in rdr.deserialize::<FormatRecord>() {
        let (value, style, decimal_places, dms, lat, lon, brng) = result?;
        let degrees = Degrees(value);
        let style: Style = style.parse()?;

        assert_eq!(
            dms,
            to_dms(degrees, style, decimal_places),
            "value: {value}"
        );
        assert_eq!(
            lat,
            to_lat(degrees, style, decimal_places),
            "value: {value}"
        );
        assert_eq!(
            lon,
            to_lon(degrees, style, decimal_places),
            "value: {value}"
        );
        assert_eq!(
            brng,
            to_brng(degrees, style, decimal_places),
            "value: {value}"
        );

        count += 1;
    }
    assert!(0 < count);

    Ok(())
}

#[test]
fn test_format_then_parse() {
    let positions = [
        (51.477_811_111_111_116, -0.001_475),
        (40.748_611, -73.986_36),
        (-33.856_784, 151.215_297),
        (-89.5, 179.5),
    ];
    for (lat, lon) in positions {
        let a = LatLon::from_degrees(lat, lon);
        let text = a.format(Style::DegMinSec, Some(4));
        let b: LatLon = text.parse().unwrap();
        assert!(is_within_tolerance(lat, b.lat().degrees(), 1e-7), "{text}");
        assert!(is_within_tolerance(lon, b.lon().degrees(), 1e-7), "{text}");
    }
}

/// Compare great circle distances and bearings with the vector based
/// calculations of the `unit-sphere` crate.
#[test]
fn test_great_circle_against_unit_sphere() {
    let positions = [
        (51.4778, -0.0015),
        (40.7486, -73.9864),
        (-33.8568, 151.2153),
        (35.6762, 139.6503),
        (-22.9068, -43.1729),
        (64.1466, -21.9426),
        (0.0, 0.0),
        (0.0, 179.0),
        (-45.0, -120.0),
    ];

    for (lat1, lon1) in positions {
        for (lat2, lon2) in positions {
            let a = LatLon::from_degrees(lat1, lon1);
            let b = LatLon::from_degrees(lat2, lon2);

            let lat_a = angle_sc::Angle::from(Degrees(lat1));
            let lat_b = angle_sc::Angle::from(Degrees(lat2));
            let delta_long = angle_sc::Angle::from(Degrees(lon2 - lon1));

            let expected = great_circle::calculate_gc_distance(lat_a, lat_b, delta_long);
            let angle = a.angle_to(&b);
            assert!(
                is_within_tolerance(expected.0, angle.radians(), 1e-11),
                "a: {a} b: {b} expected: {expected:?} angle: {angle:?}"
            );

            let distance = EARTH.distance_between(&a, &b);
            assert!(is_within_tolerance(
                expected.0 * EARTH.radius(),
                distance,
                1e-4
            ));

            if 1e-6 < expected.0 && expected.0 < core::f64::consts::PI - 1e-6 {
                let expected = great_circle::calculate_gc_azimuth(lat_a, lat_b, delta_long);
                let expected = Angle::from(Degrees::from(expected)).normalized_bearing();
                let bearing = a.bearing_to(&b);
                let delta = libm::fabs(expected.degrees() - bearing.degrees());
                assert!(
                    delta < 1e-8 || 360.0 - 1e-8 < delta,
                    "a: {a} b: {b} expected: {expected:?} bearing: {bearing:?}"
                );
            }
        }
    }
}
