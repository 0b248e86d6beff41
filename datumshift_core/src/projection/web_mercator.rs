//! Spherical Web Mercator (EPSG:3857) projection of WGS84 degrees.
//!
//! The sphere radius is the WGS84 semi-major axis. This is a different model
//! from the Krasovsky ellipsoid used by the GCJ-02 offset; the two constants
//! must not be unified.
//!
//! Projected values are rounded to 2 decimals (centimeters) and unprojected
//! values to 6 decimals (about 0.1 m), so that repeated round trips do not
//! drift in the last floating-point digits.

use crate::{BoundingBox, GeoPoint, ProjectedPoint};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// Spherical Mercator radius in meters.
pub const MERCATOR_RADIUS: f64 = 6_378_137.0;

fn round_to(value: f64, factor: f64) -> f64 {
	// adding 0.0 turns -0.0 into 0.0
	(value * factor).round() / factor + 0.0
}

/// Projects WGS84 degrees to Web Mercator meters, rounded to 2 decimals.
///
/// No clamping is done. Latitudes near the poles produce huge or infinite
/// northings instead of an error.
///
/// # Examples
/// ```
/// use datumshift_core::wgs84_to_web_mercator;
///
/// let p = wgs84_to_web_mercator(114.397433, 22.909235);
/// assert_eq!((p.x, p.y), (12734663.99, 2621045.83));
/// ```
pub fn wgs84_to_web_mercator(lng: f64, lat: f64) -> ProjectedPoint {
	let x = MERCATOR_RADIUS * lng.to_radians();
	let y = MERCATOR_RADIUS * (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln();
	ProjectedPoint::new(round_to(x, 100.0), round_to(y, 100.0))
}

/// Unprojects Web Mercator meters to WGS84 degrees, rounded to 6 decimals.
///
/// # Examples
/// ```
/// use datumshift_core::web_mercator_to_wgs84;
///
/// let p = web_mercator_to_wgs84(12734663.99, 2621045.83);
/// assert_eq!((p.lng, p.lat), (114.397433, 22.909235));
/// ```
pub fn web_mercator_to_wgs84(x: f64, y: f64) -> GeoPoint {
	let lng = (x / MERCATOR_RADIUS).to_degrees();
	let lat = (2.0 * (y / MERCATOR_RADIUS).exp().atan() - FRAC_PI_2).to_degrees();
	GeoPoint::new(round_to(lng, 1e6), round_to(lat, 1e6))
}

/// Projects the `(west, south)` and `(east, north)` corners of a degree box
/// independently. The box is not widened to cover projection distortion.
pub fn wgs84_to_web_mercator_bb(bbox: &BoundingBox) -> BoundingBox {
	bbox.map_corners(|lng, lat| wgs84_to_web_mercator(lng, lat).as_tuple())
}

/// Unprojects the corners of a meter box independently.
pub fn web_mercator_to_wgs84_bb(bbox: &BoundingBox) -> BoundingBox {
	bbox.map_corners(|x, y| web_mercator_to_wgs84(x, y).as_tuple())
}
