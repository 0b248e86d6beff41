use super::{gcj02_to_wgs84, wgs84_to_gcj02};
use crate::GeoPoint;
use std::f64::consts::PI;

const X_PI: f64 = PI * 3000.0 / 180.0;

/// Converts a GCJ-02 point to BD-09.
///
/// A closed-form polar shift with no region gate: every input is moved,
/// including points far outside China.
///
/// # Examples
/// ```
/// use datumshift_core::gcj02_to_bd09;
///
/// let bd = gcj02_to_bd09(116.404, 39.915);
/// assert!((bd.lng - 116.410369).abs() < 1e-6);
/// assert!((bd.lat - 39.921337).abs() < 1e-6);
/// ```
pub fn gcj02_to_bd09(lng: f64, lat: f64) -> GeoPoint {
	let z = (lng * lng + lat * lat).sqrt() + 0.00002 * (lat * X_PI).sin();
	let theta = lat.atan2(lng) + 0.000003 * (lng * X_PI).cos();
	GeoPoint::new(z * theta.cos() + 0.0065, z * theta.sin() + 0.006)
}

/// Converts a BD-09 point to GCJ-02.
///
/// Solves the same polar system as [`gcj02_to_bd09`] in reverse. The small
/// correction terms are evaluated at the BD-09 side, so a round trip is
/// accurate to about 2e-6 degrees rather than exact.
pub fn bd09_to_gcj02(lng: f64, lat: f64) -> GeoPoint {
	let x = lng - 0.0065;
	let y = lat - 0.006;
	let z = (x * x + y * y).sqrt() - 0.00002 * (y * X_PI).sin();
	let theta = y.atan2(x) - 0.000003 * (x * X_PI).cos();
	GeoPoint::new(z * theta.cos(), z * theta.sin())
}

/// Converts a WGS84 point to BD-09 via GCJ-02.
pub fn wgs84_to_bd09(lng: f64, lat: f64) -> GeoPoint {
	let gcj = wgs84_to_gcj02(lng, lat);
	gcj02_to_bd09(gcj.lng, gcj.lat)
}

/// Converts a BD-09 point to WGS84 via GCJ-02.
///
/// Doubly approximate: it inherits the residual of [`bd09_to_gcj02`] and the
/// first-order inverse of [`gcj02_to_wgs84`].
pub fn bd09_to_wgs84(lng: f64, lat: f64) -> GeoPoint {
	let gcj = bd09_to_gcj02(lng, lat);
	gcj02_to_wgs84(gcj.lng, gcj.lat)
}
