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

//! The dms module contains functions for parsing and formatting angles as
//! degrees, minutes and seconds text.
//!
//! Text is formatted with the degree sign `°`, the prime `′` and the
//! double prime `″`. Degrees are not zero padded, minutes and seconds are
//! padded to two digits, e.g. "51°28′40″" and "0°05′09.50″".
//! Latitudes are suffixed with `N` or `S` and longitudes with `E` or `W`.

use super::{fold_latitude, wrap_signed, wrap_unsigned, Angle};
use crate::Error;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::str::FromStr;

/// The maximum number of decimal places that may be formatted.
pub const MAX_DECIMAL_PLACES: usize = 9;

/// The style of degrees, minutes and seconds text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Style {
    /// Degrees only, "d".
    Deg,
    /// Degrees and minutes, "dm".
    DegMin,
    /// Degrees, minutes and seconds, "dms".
    #[default]
    DegMinSec,
}

impl Style {
    /// The number of decimal places used when none are given:
    /// 4 for `Deg`, 2 for `DegMin` and 0 for `DegMinSec`.
    #[must_use]
    pub const fn default_decimal_places(self) -> usize {
        match self {
            Self::Deg => 4,
            Self::DegMin => 2,
            Self::DegMinSec => 0,
        }
    }

    /// The number of the smallest units of the `Style` in a degree.
    const fn units_per_degree(self) -> u64 {
        match self {
            Self::Deg => 1,
            Self::DegMin => 60,
            Self::DegMinSec => 3600,
        }
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.trim() {
            "d" => Ok(Self::Deg),
            "dm" => Ok(Self::DegMin),
            "dms" => Ok(Self::DegMinSec),
            _ => Err(Error::InvalidStyle(String::from(text))),
        }
    }
}

/// How the sign of an angle is shown in formatted text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Notation {
    /// No sign.
    Plain,
    /// A '-' prefix when negative.
    Signed,
    /// An 'N' or 'S' suffix.
    Latitude,
    /// An 'E' or 'W' suffix.
    Longitude,
}

/// Convert a numeric field to a number, NaN if it is not a number.
fn to_number(field: &str) -> f64 {
    field.parse::<f64>().unwrap_or(f64::NAN)
}

/// Split a single numeric field into degrees, minutes and seconds.
///
/// Unseparated fields of 6 or 7 digits are read as `DDMMSS` or `DDDMMSS`,
/// fields of 4 or 5 digits as `DDMM` or `DDDMM`, anything else as decimal
/// degrees.
fn split_fixed_width(field: &str) -> (f64, f64, f64) {
    let all_digits = field.bytes().all(|b| b.is_ascii_digit());
    match field.len() {
        6 | 7 if all_digits => {
            let (dm, s) = field.split_at(field.len() - 2);
            let (d, m) = dm.split_at(dm.len() - 2);
            (to_number(d), to_number(m), to_number(s))
        }
        4 | 5 if all_digits => {
            let (d, m) = field.split_at(field.len() - 2);
            (to_number(d), to_number(m), 0.0)
        }
        _ => (to_number(field), 0.0, 0.0),
    }
}

/// Parse degrees, minutes and seconds text into decimal degrees.
///
/// The text is split into numeric fields on any characters other than
/// digits, '.' and ','. Three fields are degrees, minutes and seconds;
/// two fields are degrees and minutes; a single field may be a fixed width
/// `DDDMMSS` or `DDDMM` value or decimal degrees.
///
/// A leading '-' negates the value, as does a trailing 'S' or 'W' (in either
/// case). Both rules apply, so "-27.389S" is positive.
/// * `text` - the text to parse.
///
/// returns the value in decimal degrees, NaN if the text cannot be parsed.
/// # Examples
/// ```
/// use spherical_geodesy::angle::dms::parse_dms;
///
/// assert_eq!(40.74861111111111, parse_dms("40°44′55″N"));
/// assert_eq!(-40.74861111111111, parse_dms("40°44′55″S"));
/// assert_eq!(73.9863888888889, parse_dms("73/59/11E"));
/// assert_eq!(-3.6191666666666666, parse_dms("0033709W"));
/// assert_eq!(27.389, parse_dms("-27.389S"));
/// assert!(parse_dms("FRED").is_nan());
/// ```
#[must_use]
pub fn parse_dms(text: &str) -> f64 {
    let text = text.trim();
    let fields: Vec<&str> = text
        .split(|c: char| !(c.is_ascii_digit() || c == '.' || c == ','))
        .filter(|field| !field.is_empty())
        .collect();

    let (d, m, s) = match fields.as_slice() {
        [d, m, s] => (to_number(d), to_number(m), to_number(s)),
        [d, m] => (to_number(d), to_number(m), 0.0),
        [d] => split_fixed_width(d),
        _ => {
            tracing::trace!(
                text,
                fields = fields.len(),
                "parse_dms: invalid field count"
            );
            return f64::NAN;
        }
    };

    let mut degrees = d + m / 60.0 + s / 3600.0;
    if text.starts_with('-') {
        degrees = -degrees;
    }
    if text.ends_with(|c: char| matches!(c, 'S' | 's' | 'W' | 'w')) {
        degrees = -degrees;
    }
    degrees
}

/// Format a value in degrees with the given `Style`, decimal places and
/// `Notation`.
///
/// The value is rounded after it has been reduced modulo 360°, so a value
/// that rounds up to 360° is formatted as 0° and a small negative value
/// that rounds to zero is not negative.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn format_degrees(
    degrees: f64,
    style: Style,
    decimal_places: Option<usize>,
    notation: Notation,
) -> String {
    if !degrees.is_finite() {
        return String::from("NaN");
    }

    let dp = decimal_places
        .unwrap_or_else(|| style.default_decimal_places())
        .min(MAX_DECIMAL_PLACES);
    let scale = 10_u64.pow(dp as u32);
    let units_per_degree = style.units_per_degree();
    let units_per_turn = 360 * units_per_degree * scale;

    // the total number of the smallest displayed units, e.g. hundredths of seconds
    let magnitude = libm::fmod(libm::fabs(degrees), 360.0);
    let total =
        libm::round(magnitude * units_per_degree as f64 * scale as f64) as u64 % units_per_turn;
    let negative = degrees < 0.0 && 0 < total;

    let whole = total / scale;
    let fraction = if dp == 0 {
        String::new()
    } else {
        format!(".{:0dp$}", total % scale)
    };

    let text = match style {
        Style::Deg => format!("{whole}{fraction}°"),
        Style::DegMin => format!("{}°{:02}{fraction}′", whole / 60, whole % 60),
        Style::DegMinSec => format!(
            "{}°{:02}′{:02}{fraction}″",
            whole / 3600,
            whole / 60 % 60,
            whole % 60
        ),
    };

    match notation {
        Notation::Plain => text,
        Notation::Signed if negative => format!("-{text}"),
        Notation::Signed => text,
        Notation::Latitude => format!("{text}{}", if negative { 'S' } else { 'N' }),
        Notation::Longitude => format!("{text}{}", if negative { 'W' } else { 'E' }),
    }
}

/// Format an angle as unsigned degrees, minutes and seconds text.
///
/// The magnitude of the angle is reduced modulo 360°, the sign is not shown.
/// * `angle` - the angle, e.g. `Degrees(51.5)` or an `Angle`.
/// * `style` - the `Style` of the text.
/// * `decimal_places` - the number of decimal places of the last field,
///   `None` for the `Style` default.
///
/// returns the formatted text, "NaN" if the angle is not a number.
/// # Examples
/// ```
/// use spherical_geodesy::Degrees;
/// use spherical_geodesy::angle::dms::{to_dms, Style};
///
/// let degrees = Degrees(51.477811111111116);
/// assert_eq!("51°28′40″", to_dms(degrees, Style::DegMinSec, None));
/// assert_eq!("51°28′40.12″", to_dms(degrees, Style::DegMinSec, Some(2)));
/// assert_eq!("51°28.67′", to_dms(degrees, Style::DegMin, None));
/// assert_eq!("51.4778°", to_dms(degrees, Style::Deg, None));
/// ```
#[must_use]
pub fn to_dms(angle: impl Into<Angle>, style: Style, decimal_places: Option<usize>) -> String {
    format_degrees(
        angle.into().degrees(),
        style,
        decimal_places,
        Notation::Plain,
    )
}

/// Format an angle as degrees, minutes and seconds text, prefixed with '-'
/// when it is negative.
///
/// # Examples
/// ```
/// use spherical_geodesy::Degrees;
/// use spherical_geodesy::angle::dms::{to_signed_dms, Style};
///
/// let degrees = Degrees(-51.477811111111116);
/// assert_eq!("-51°28′40″", to_signed_dms(degrees, Style::DegMinSec, None));
/// ```
#[must_use]
pub fn to_signed_dms(
    angle: impl Into<Angle>,
    style: Style,
    decimal_places: Option<usize>,
) -> String {
    format_degrees(
        angle.into().degrees(),
        style,
        decimal_places,
        Notation::Signed,
    )
}

/// Format an angle as a latitude, suffixed with 'N' or 'S'.
///
/// The angle is normalised into [-90°, 90°] first: angles beyond the poles
/// fold onto the opposite hemisphere, e.g. 100° is formatted as "80°S".
/// # Examples
/// ```
/// use spherical_geodesy::Degrees;
/// use spherical_geodesy::angle::dms::{to_lat, Style};
///
/// assert_eq!("51°28′40″S", to_lat(Degrees(-51.477811111111116), Style::DegMinSec, None));
/// assert_eq!("0.0000°N", to_lat(Degrees(-0.000_000_01), Style::Deg, None));
/// assert_eq!("90°S", to_lat(Degrees(-450.0), Style::Deg, Some(0)));
/// ```
#[must_use]
pub fn to_lat(angle: impl Into<Angle>, style: Style, decimal_places: Option<usize>) -> String {
    format_degrees(
        fold_latitude(angle.into().degrees(), 180.0),
        style,
        decimal_places,
        Notation::Latitude,
    )
}

/// Format an angle as a longitude, suffixed with 'E' or 'W'.
///
/// The angle is normalised into (-180°, 180°] first.
/// # Examples
/// ```
/// use spherical_geodesy::Degrees;
/// use spherical_geodesy::angle::dms::{to_lon, Style};
///
/// assert_eq!("170°W", to_lon(Degrees(190.0), Style::Deg, Some(0)));
/// assert_eq!("0°00′00″E", to_lon(Degrees(359.9999999), Style::DegMinSec, None));
/// ```
#[must_use]
pub fn to_lon(angle: impl Into<Angle>, style: Style, decimal_places: Option<usize>) -> String {
    format_degrees(
        wrap_signed(angle.into().degrees(), 180.0),
        style,
        decimal_places,
        Notation::Longitude,
    )
}

/// Format an angle as a bearing, normalised into [0°, 360°).
///
/// # Examples
/// ```
/// use spherical_geodesy::Degrees;
/// use spherical_geodesy::angle::dms::{to_brng, Style};
///
/// assert_eq!("270°00′00″", to_brng(Degrees(-90.0), Style::DegMinSec, None));
/// assert_eq!("0°00′00″", to_brng(Degrees(360.0), Style::DegMinSec, None));
/// ```
#[must_use]
pub fn to_brng(angle: impl Into<Angle>, style: Style, decimal_places: Option<usize>) -> String {
    format_degrees(
        wrap_unsigned(angle.into().degrees(), 360.0),
        style,
        decimal_places,
        Notation::Plain,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::{Degrees, Radians};

    const BASE: Degrees = Degrees(51.477811111111116);
    const NEG_BASE: Degrees = Degrees(-51.477811111111116);

    #[test]
    fn test_parse_dms_suffixes() {
        assert_eq!(40.74861111111111, parse_dms("40°44′55″N"));
        assert_eq!(-40.74861111111111, parse_dms("40°44′55″S"));
        assert_eq!(40.74861111111111, parse_dms("40°44′55″"));
        assert_eq!(-40.74861111111111, parse_dms("-40°44′55″"));
        assert_eq!(73.9863888888889, parse_dms("73 59 11E"));
        assert_eq!(-73.9863888888889, parse_dms("73 59 11W"));
        assert_eq!(73.9863888888889, parse_dms("73/59/11E"));
        assert_eq!(-73.9863888888889, parse_dms("73/59/11w"));
        assert_eq!(51.477811111111116, parse_dms("51° 28′ 40.12″ N"));
        assert_eq!(-51.477811111111116, parse_dms("  51° 28′ 40.12″ S  "));
    }

    #[test]
    fn test_parse_dms_fixed_width() {
        assert_eq!(-3.6191666666666666, parse_dms("0033709W"));
        assert_eq!(-3.6166666666666667, parse_dms("00337W"));
        assert_eq!(51.0 + 28.0 / 60.0 + 40.0 / 3600.0, parse_dms("512840"));
        assert_eq!(51.0 + 28.0 / 60.0, parse_dms("5128"));
        assert_eq!(40.0, parse_dms("40°N"));
        // too many digits for a fixed width field
        assert_eq!(12345678.0, parse_dms("12345678"));
    }

    #[test]
    fn test_parse_dms_decimal() {
        assert_eq!(27.389, parse_dms("27.389N"));
        assert_eq!(-27.389, parse_dms("27.389S"));
        assert_eq!(27.389, parse_dms("27.389E"));
        assert_eq!(-27.389, parse_dms("27.389W"));
        assert_eq!(-27.389, parse_dms("-27.389"));
        assert_eq!(27.389, parse_dms("-27.389S"));
        assert_eq!(0.5, parse_dms(".5"));
    }

    #[test]
    fn test_parse_dms_invalid() {
        assert!(parse_dms("FRED").is_nan());
        assert!(parse_dms("").is_nan());
        assert!(parse_dms("1 2 3 4").is_nan());
        assert!(parse_dms("1,5").is_nan());
        assert!(parse_dms("1.2.3").is_nan());
    }

    #[test]
    fn test_style_from_str() {
        assert_eq!(Ok(Style::Deg), "d".parse::<Style>());
        assert_eq!(Ok(Style::DegMin), "dm".parse::<Style>());
        assert_eq!(Ok(Style::DegMinSec), " dms ".parse::<Style>());
        assert_eq!(
            Err(Error::InvalidStyle(String::from("dd"))),
            "dd".parse::<Style>()
        );
        assert_eq!(Style::DegMinSec, Style::default());
    }

    #[test]
    fn test_to_dms() {
        assert_eq!("51°28′40″", to_dms(BASE, Style::default(), None));
        assert_eq!("51°28′40″", to_dms(BASE, Style::DegMinSec, None));
        assert_eq!("51°28′40.12″", to_dms(BASE, Style::DegMinSec, Some(2)));

        assert_eq!("51°28.67′", to_dms(BASE, Style::DegMin, None));
        assert_eq!("51°29′", to_dms(BASE, Style::DegMin, Some(0)));
        assert_eq!("51°28.67′", to_dms(BASE, Style::DegMin, Some(2)));

        assert_eq!("51.4778°", to_dms(BASE, Style::Deg, None));
        assert_eq!("51°", to_dms(BASE, Style::Deg, Some(0)));
        assert_eq!("51.4778°", to_dms(BASE, Style::Deg, Some(4)));

        // unsigned
        assert_eq!("51°28′40″", to_dms(NEG_BASE, Style::DegMinSec, None));
        assert_eq!(
            "5°05′09.50″",
            to_dms(Degrees(5.0859722222), Style::DegMinSec, Some(2))
        );
        assert_eq!(
            "NaN",
            to_dms(Angle::from_dms("FRED"), Style::DegMinSec, None)
        );
        assert_eq!("57°17′45″", to_dms(Radians(1.0), Style::DegMinSec, None));
    }

    #[test]
    fn test_to_dms_decimal_places_limit() {
        assert_eq!(
            "51.477811111°",
            to_dms(BASE, Style::Deg, Some(MAX_DECIMAL_PLACES + 3))
        );
    }

    #[test]
    fn test_to_signed_dms() {
        assert_eq!(
            "-51°28′40″",
            to_signed_dms(NEG_BASE, Style::DegMinSec, None)
        );
        assert_eq!("51°28′40″", to_signed_dms(BASE, Style::DegMinSec, None));
        assert_eq!("-51.4778°", to_signed_dms(NEG_BASE, Style::Deg, None));
        assert_eq!(
            "0.0000°",
            to_signed_dms(Degrees(-0.000_000_01), Style::Deg, None)
        );
    }

    #[test]
    fn test_to_lat() {
        assert_eq!("51°28′40″N", to_lat(BASE, Style::DegMinSec, None));
        assert_eq!("51°28′40.12″N", to_lat(BASE, Style::DegMinSec, Some(2)));
        assert_eq!("51°28′40″S", to_lat(NEG_BASE, Style::DegMinSec, None));
        assert_eq!("51°28′40.12″S", to_lat(NEG_BASE, Style::DegMinSec, Some(2)));

        assert_eq!("51°28.67′N", to_lat(BASE, Style::DegMin, None));
        assert_eq!("51°29′N", to_lat(BASE, Style::DegMin, Some(0)));
        assert_eq!("51°28.67′S", to_lat(NEG_BASE, Style::DegMin, None));
        assert_eq!("51°29′S", to_lat(NEG_BASE, Style::DegMin, Some(0)));

        assert_eq!("51.4778°N", to_lat(BASE, Style::Deg, None));
        assert_eq!("51°N", to_lat(BASE, Style::Deg, Some(0)));
        assert_eq!("51.4778°S", to_lat(NEG_BASE, Style::Deg, None));
        assert_eq!("51°S", to_lat(NEG_BASE, Style::Deg, Some(0)));
    }

    #[test]
    fn test_to_lat_normalization() {
        assert_eq!("90°S", to_lat(Degrees(-450.0), Style::Deg, Some(0)));
        assert_eq!("90°N", to_lat(Degrees(450.0), Style::Deg, Some(0)));
        assert_eq!("80°S", to_lat(Degrees(100.0), Style::Deg, Some(0)));
        assert_eq!("80°N", to_lat(Degrees(-100.0), Style::Deg, Some(0)));
        assert_eq!("0°N", to_lat(Degrees(180.0), Style::Deg, Some(0)));
        assert_eq!("0.0000°N", to_lat(Degrees(0.000_000_01), Style::Deg, None));
        assert_eq!("0.0000°N", to_lat(Degrees(-0.000_000_01), Style::Deg, None));
    }

    #[test]
    fn test_to_lon() {
        assert_eq!("51°28′40″E", to_lon(BASE, Style::DegMinSec, None));
        assert_eq!("51°28′40.12″E", to_lon(BASE, Style::DegMinSec, Some(2)));
        assert_eq!("51°28′40″W", to_lon(NEG_BASE, Style::DegMinSec, None));
        assert_eq!("51°28′40.12″W", to_lon(NEG_BASE, Style::DegMinSec, Some(2)));

        assert_eq!("51°28.67′E", to_lon(BASE, Style::DegMin, None));
        assert_eq!("51°29′W", to_lon(NEG_BASE, Style::DegMin, Some(0)));

        assert_eq!("51.4778°E", to_lon(BASE, Style::Deg, None));
        assert_eq!("51°W", to_lon(NEG_BASE, Style::Deg, Some(0)));
    }

    #[test]
    fn test_to_lon_normalization() {
        assert_eq!("170°W", to_lon(Degrees(190.0), Style::Deg, Some(0)));
        assert_eq!("90°W", to_lon(Degrees(-450.0), Style::Deg, Some(0)));
        assert_eq!("180°E", to_lon(Degrees(180.0), Style::Deg, Some(0)));
        assert_eq!("180°E", to_lon(Degrees(-180.0), Style::Deg, Some(0)));
        assert_eq!("0°E", to_lon(Degrees(359.9999999), Style::Deg, Some(0)));
        assert_eq!(
            "0°00′00″E",
            to_lon(Degrees(359.9999999), Style::DegMinSec, None)
        );
    }

    #[test]
    fn test_to_brng() {
        assert_eq!("51°28′40″", to_brng(BASE, Style::DegMinSec, None));
        assert_eq!("51°28′40.12″", to_brng(BASE, Style::DegMinSec, Some(2)));
        assert_eq!("51°28.67′", to_brng(BASE, Style::DegMin, None));
        assert_eq!("51°29′", to_brng(BASE, Style::DegMin, Some(0)));
        assert_eq!("51.4778°", to_brng(BASE, Style::Deg, None));
        assert_eq!("51°", to_brng(BASE, Style::Deg, Some(0)));
    }

    #[test]
    fn test_to_brng_normalization() {
        assert_eq!(
            "270°00′00″",
            to_brng(Degrees(-450.0), Style::DegMinSec, None)
        );
        assert_eq!("0°00′00″", to_brng(Degrees(-360.0), Style::DegMinSec, None));
        assert_eq!(
            "90°00′00″",
            to_brng(Degrees(-270.0), Style::DegMinSec, None)
        );
        assert_eq!(
            "180°00′00″",
            to_brng(Degrees(-180.0), Style::DegMinSec, None)
        );
        assert_eq!(
            "270°00′00″",
            to_brng(Degrees(-90.0), Style::DegMinSec, None)
        );
        assert_eq!("0°00′00″", to_brng(Degrees(0.0), Style::DegMinSec, None));
        assert_eq!("90°00′00″", to_brng(Degrees(90.0), Style::DegMinSec, None));
        assert_eq!(
            "180°00′00″",
            to_brng(Degrees(180.0), Style::DegMinSec, None)
        );
        assert_eq!(
            "270°00′00″",
            to_brng(Degrees(270.0), Style::DegMinSec, None)
        );
        assert_eq!("0°00′00″", to_brng(Degrees(360.0), Style::DegMinSec, None));
        assert_eq!("90°00′00″", to_brng(Degrees(450.0), Style::DegMinSec, None));

        // rounds up to 360°
        assert_eq!(
            "0°00′00″",
            to_brng(Degrees(359.999999999), Style::DegMinSec, None)
        );
        assert_eq!(
            "0°00′00″",
            to_brng(Degrees(-0.000_000_01), Style::DegMinSec, None)
        );

        for i in -4..=4 {
            for b in [0, 45, 90, 135, 180, 225, 270, 315] {
                let bearing = f64::from(b);
                let turns = 360.0 * f64::from(i);
                assert_eq!(
                    to_brng(Degrees(bearing), Style::DegMinSec, None),
                    to_brng(Degrees(bearing + turns), Style::DegMinSec, None)
                );
            }
        }
    }

    #[test]
    fn test_parse_format_round_trip() {
        for text in ["51°28′40″", "0°05′09″", "179°59′59″", "90°00′00″"] {
            assert_eq!(text, to_dms(Angle::from_dms(text), Style::DegMinSec, None));
        }
        for text in ["51°28′40″N", "51°28′40″S", "0°00′01″S"] {
            assert_eq!(text, to_lat(Angle::from_dms(text), Style::DegMinSec, None));
        }
        for text in ["51°28′40″E", "51°28′40″W", "180°00′00″E"] {
            assert_eq!(text, to_lon(Angle::from_dms(text), Style::DegMinSec, None));
        }
    }
}
