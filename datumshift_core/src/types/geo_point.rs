use super::parse_values;
use anyhow::{Context, Result};
use std::{fmt::Debug, str::FromStr};

/// A geographic position in degrees.
///
/// The struct carries no datum tag: the same numbers mean different places
/// depending on whether they came from WGS84, GCJ-02 or BD-09. Keep track of
/// the datum yourself and convert explicitly before mixing points.
///
/// # Examples
/// ```
/// use datumshift_core::GeoPoint;
///
/// let point: GeoPoint = "116.404, 39.915".parse().unwrap();
/// assert_eq!(point, GeoPoint::new(116.404, 39.915));
/// assert_eq!(point.as_tuple(), (116.404, 39.915));
/// ```
#[derive(Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
	/// Longitude in degrees.
	pub lng: f64,
	/// Latitude in degrees.
	pub lat: f64,
}

impl GeoPoint {
	pub fn new(lng: f64, lat: f64) -> GeoPoint {
		GeoPoint { lng, lat }
	}

	#[must_use]
	pub fn as_tuple(&self) -> (f64, f64) {
		(self.lng, self.lat)
	}

	#[must_use]
	pub fn as_array(&self) -> [f64; 2] {
		[self.lng, self.lat]
	}
}

impl Debug for GeoPoint {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "GeoPoint({}, {})", self.lng, self.lat)
	}
}

impl From<(f64, f64)> for GeoPoint {
	fn from((lng, lat): (f64, f64)) -> Self {
		GeoPoint { lng, lat }
	}
}

impl From<GeoPoint> for (f64, f64) {
	fn from(point: GeoPoint) -> Self {
		point.as_tuple()
	}
}

impl FromStr for GeoPoint {
	type Err = anyhow::Error;

	/// Parses `"lng,lat"`. Ranges are not checked.
	fn from_str(s: &str) -> Result<Self> {
		let [lng, lat] = parse_values::<2>(s).with_context(|| format!("Failed to parse point '{s}' as lng,lat"))?;
		Ok(GeoPoint { lng, lat })
	}
}
