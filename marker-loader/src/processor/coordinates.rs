//! UTM grid reference to latitude/longitude conversion.
//!
//! Inverse transverse Mercator on the WGS84 ellipsoid (Snyder, "Map
//! Projections: A Working Manual", eq. 8-17 to 8-25). Marker grid references
//! are all northern hemisphere.

use marker_loader_shared::GeoPoint;
use thiserror::Error;

/// Scale factor on the central meridian.
const K0: f64 = 0.9996;
/// WGS84 first eccentricity squared.
const E: f64 = 0.00669438;
/// WGS84 equatorial radius in meters.
const R: f64 = 6_378_137.0;
/// False easting applied to every zone.
const FALSE_EASTING: f64 = 500_000.0;

const MIN_EASTING: i64 = 100_000;
const MAX_EASTING: i64 = 1_000_000;
const MAX_NORTHING: i64 = 10_000_000;
const MIN_LATITUDE: f64 = -80.0;
const MAX_LATITUDE: f64 = 84.0;

/// Reasons a grid reference cannot be converted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    /// A component is blank or not an integer.
    #[error("Unparseable {field}: '{value}'")]
    Unparseable { field: &'static str, value: String },

    #[error("Easting {0} outside [100000, 1000000)")]
    EastingOutOfRange(i64),

    #[error("Northing {0} outside [0, 10000000]")]
    NorthingOutOfRange(i64),

    #[error("Zone {0} outside [1, 60]")]
    ZoneOutOfRange(i64),

    /// The point falls outside the latitudes UTM covers.
    #[error("Latitude {0:.4} outside the UTM band [-80, 84]")]
    LatitudeOutOfRange(f64),
}

/// A validated northern-hemisphere UTM grid reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtmCoordinate {
    easting: i64,
    northing: i64,
    zone: u8,
}

impl UtmCoordinate {
    /// Build a grid reference, checking each component's range.
    pub fn new(easting: i64, northing: i64, zone: i64) -> Result<Self, CoordinateError> {
        if !(MIN_EASTING..MAX_EASTING).contains(&easting) {
            return Err(CoordinateError::EastingOutOfRange(easting));
        }
        if !(0..=MAX_NORTHING).contains(&northing) {
            return Err(CoordinateError::NorthingOutOfRange(northing));
        }
        if !(1..=60).contains(&zone) {
            return Err(CoordinateError::ZoneOutOfRange(zone));
        }

        Ok(Self {
            easting,
            northing,
            zone: zone as u8,
        })
    }

    /// Parse the three CSV columns of a grid reference.
    pub fn parse(easting: &str, northing: &str, zone: &str) -> Result<Self, CoordinateError> {
        Self::new(
            parse_component("utm_east", easting)?,
            parse_component("utm_north", northing)?,
            parse_component("utm_zone", zone)?,
        )
    }

    /// Longitude of the zone's central meridian in degrees.
    pub fn central_meridian(&self) -> f64 {
        (self.zone as f64 - 1.0) * 6.0 - 180.0 + 3.0
    }

    /// Convert to WGS84 latitude/longitude in degrees.
    pub fn to_geo_point(&self) -> Result<GeoPoint, CoordinateError> {
        let e2 = E * E;
        let e3 = e2 * E;
        let e_p2 = E / (1.0 - E);

        let sqrt_e = (1.0 - E).sqrt();
        let e1 = (1.0 - sqrt_e) / (1.0 + sqrt_e);
        let e1_2 = e1 * e1;
        let e1_3 = e1_2 * e1;
        let e1_4 = e1_3 * e1;
        let e1_5 = e1_4 * e1;

        let m1 = 1.0 - E / 4.0 - 3.0 * e2 / 64.0 - 5.0 * e3 / 256.0;
        let p2 = 3.0 / 2.0 * e1 - 27.0 / 32.0 * e1_3 + 269.0 / 512.0 * e1_5;
        let p3 = 21.0 / 16.0 * e1_2 - 55.0 / 32.0 * e1_4;
        let p4 = 151.0 / 96.0 * e1_3 - 417.0 / 128.0 * e1_5;
        let p5 = 1097.0 / 512.0 * e1_4;

        let x = self.easting as f64 - FALSE_EASTING;
        let y = self.northing as f64;

        // Footpoint latitude.
        let mu = y / K0 / (R * m1);
        let phi1 = mu
            + p2 * (2.0 * mu).sin()
            + p3 * (4.0 * mu).sin()
            + p4 * (6.0 * mu).sin()
            + p5 * (8.0 * mu).sin();

        let sin = phi1.sin();
        let cos = phi1.cos();
        let tan = sin / cos;
        let t = tan * tan;
        let t2 = t * t;

        let ep_sin = 1.0 - E * sin * sin;
        let n = R / ep_sin.sqrt();
        let r = (1.0 - E) / ep_sin;
        let c = e_p2 * cos * cos;
        let c2 = c * c;

        let d = x / (n * K0);
        let d2 = d * d;
        let d3 = d2 * d;
        let d4 = d3 * d;
        let d5 = d4 * d;
        let d6 = d5 * d;

        let latitude = phi1
            - (tan / r)
                * (d2 / 2.0 - d4 / 24.0 * (5.0 + 3.0 * t + 10.0 * c - 4.0 * c2 - 9.0 * e_p2)
                    + d6 / 720.0
                        * (61.0 + 90.0 * t + 298.0 * c + 45.0 * t2 - 252.0 * e_p2 - 3.0 * c2));

        let longitude = (d - d3 / 6.0 * (1.0 + 2.0 * t + c)
            + d5 / 120.0 * (5.0 - 2.0 * c + 28.0 * t - 3.0 * c2 + 8.0 * e_p2 + 24.0 * t2))
            / cos;

        let lat = latitude.to_degrees();
        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&lat) {
            return Err(CoordinateError::LatitudeOutOfRange(lat));
        }
        let lon = wrap_longitude(longitude.to_degrees() + self.central_meridian());

        Ok(GeoPoint::new(lat, lon))
    }
}

/// Convert the three CSV columns of a grid reference to a point.
pub fn utm_to_geo_point(
    easting: &str,
    northing: &str,
    zone: &str,
) -> Result<GeoPoint, CoordinateError> {
    UtmCoordinate::parse(easting, northing, zone)?.to_geo_point()
}

fn parse_component(field: &'static str, value: &str) -> Result<i64, CoordinateError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| CoordinateError::Unparseable {
            field,
            value: value.to_string(),
        })
}

/// Wrap a longitude into [-180, 180).
fn wrap_longitude(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {} within {} of {}",
            actual,
            tolerance,
            expected
        );
    }

    #[test]
    fn test_central_meridian_point() {
        let point = utm_to_geo_point("500000", "4649776", "14").unwrap();

        assert_close(point.lat, 42.0, 0.01);
        assert_close(point.lon, -99.0, 1e-9);
    }

    #[test]
    fn test_austin_capitol() {
        // Texas State Capitol, zone 14.
        let point = utm_to_geo_point("621164", "3349897", "14").unwrap();

        assert_close(point.lat, 30.2747, 0.001);
        assert_close(point.lon, -97.7403, 0.001);
    }

    #[test]
    fn test_west_of_central_meridian() {
        let point = utm_to_geo_point("356793", "3430568", "13").unwrap();

        assert_close(point.lat, 31.0, 0.001);
        assert_close(point.lon, -106.5, 0.001);
    }

    #[test]
    fn test_equator() {
        let point = utm_to_geo_point("500000", "0", "31").unwrap();

        assert_close(point.lat, 0.0, 1e-9);
        assert_close(point.lon, 3.0, 1e-9);
    }

    #[test]
    fn test_trims_whitespace() {
        assert!(utm_to_geo_point(" 500000 ", "4649776\t", " 14").is_ok());
    }

    #[test]
    fn test_blank_easting() {
        let result = utm_to_geo_point("", "4649776", "14");
        assert_eq!(
            result,
            Err(CoordinateError::Unparseable {
                field: "utm_east",
                value: String::new(),
            })
        );
    }

    #[test]
    fn test_non_numeric_input() {
        assert!(matches!(
            utm_to_geo_point("500000", "north", "14"),
            Err(CoordinateError::Unparseable { field: "utm_north", .. })
        ));
        assert!(matches!(
            utm_to_geo_point("500000.5", "4649776", "14"),
            Err(CoordinateError::Unparseable { field: "utm_east", .. })
        ));
        assert!(matches!(
            utm_to_geo_point("500000", "4649776", "14R"),
            Err(CoordinateError::Unparseable { field: "utm_zone", .. })
        ));
    }

    #[test]
    fn test_out_of_range_components() {
        assert_eq!(
            utm_to_geo_point("99999", "4649776", "14"),
            Err(CoordinateError::EastingOutOfRange(99_999))
        );
        assert_eq!(
            utm_to_geo_point("1000000", "4649776", "14"),
            Err(CoordinateError::EastingOutOfRange(1_000_000))
        );
        assert_eq!(
            utm_to_geo_point("500000", "-1", "14"),
            Err(CoordinateError::NorthingOutOfRange(-1))
        );
        assert_eq!(
            utm_to_geo_point("500000", "10000001", "14"),
            Err(CoordinateError::NorthingOutOfRange(10_000_001))
        );
        assert_eq!(
            utm_to_geo_point("500000", "4649776", "0"),
            Err(CoordinateError::ZoneOutOfRange(0))
        );
        assert_eq!(
            utm_to_geo_point("500000", "4649776", "61"),
            Err(CoordinateError::ZoneOutOfRange(61))
        );
    }

    #[test]
    fn test_polar_northing_rejected() {
        assert!(matches!(
            utm_to_geo_point("500000", "9800000", "14"),
            Err(CoordinateError::LatitudeOutOfRange(_))
        ));
    }

    #[test]
    fn test_valid_grid_stays_in_utm_band() {
        for zone in [1, 13, 14, 15, 30, 60] {
            for easting in [166_000, 300_000, 500_000, 700_000, 833_000] {
                for northing in [0, 1_000_000, 3_300_000, 5_000_000, 8_000_000, 9_300_000] {
                    let coord = UtmCoordinate::new(easting, northing, zone).unwrap();
                    let point = coord.to_geo_point().unwrap();

                    assert!((MIN_LATITUDE..=MAX_LATITUDE).contains(&point.lat));
                    assert!((-180.0..180.0).contains(&point.lon));
                    if northing <= 8_000_000 {
                        let offset = (point.lon - coord.central_meridian()).abs();
                        assert!(offset < 12.0 || offset > 348.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_wrap_longitude() {
        assert_close(wrap_longitude(181.0), -179.0, 1e-9);
        assert_close(wrap_longitude(-181.0), 179.0, 1e-9);
        assert_close(wrap_longitude(-99.0), -99.0, 1e-9);
    }
}
