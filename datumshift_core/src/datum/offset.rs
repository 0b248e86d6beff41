use std::f64::consts::PI;

/// Semi-major axis of the Krasovsky 1940 ellipsoid used by GCJ-02, in meters.
const RADIUS: f64 = 6378245.0;
/// First eccentricity squared of the same ellipsoid.
const EE: f64 = 0.00669342162296594323;

/// The `(d_lng, d_lat)` perturbation, in degrees, that turns a WGS84 point
/// into GCJ-02.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
	pub d_lng: f64,
	pub d_lat: f64,
}

/// Sine terms shared by both series: frequencies 6π and 2π in `x`.
fn base_harmonics(x: f64) -> f64 {
	(20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0
}

fn raw_lng(x: f64, y: f64) -> f64 {
	let mut ret = 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
	ret += base_harmonics(x);
	ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
	ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
	ret
}

fn raw_lat(x: f64, y: f64) -> f64 {
	let mut ret = -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
	ret += base_harmonics(x);
	ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
	ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
	ret
}

/// Computes the GCJ-02 offset for a WGS84 point.
///
/// The raw series are evaluated at `x = lng - 105`, `y = lat - 35` and then
/// scaled from meters to degrees with the meridian and prime-vertical radii of
/// curvature at `lat`. The region gate is *not* applied here; callers decide
/// whether the offset is used.
///
/// # Examples
/// ```
/// use datumshift_core::compute_offset;
///
/// let offset = compute_offset(116.404, 39.915);
/// assert!((offset.d_lng - 0.006244).abs() < 1e-6);
/// assert!((offset.d_lat - 0.001404).abs() < 1e-6);
/// ```
pub fn compute_offset(lng: f64, lat: f64) -> Offset {
	let x = lng - 105.0;
	let y = lat - 35.0;
	let d_lng = raw_lng(x, y);
	let d_lat = raw_lat(x, y);

	let rad_lat = lat / 180.0 * PI;
	let sin_lat = rad_lat.sin();
	let magic = 1.0 - EE * sin_lat * sin_lat;
	let sqrt_magic = magic.sqrt();

	Offset {
		d_lng: (d_lng * 180.0) / ((RADIUS / sqrt_magic) * rad_lat.cos() * PI),
		d_lat: (d_lat * 180.0) / ((RADIUS * (1.0 - EE) / (magic * sqrt_magic)) * PI),
	}
}
