use super::parse_values;
use anyhow::{Context, Result};
use std::{fmt::Debug, str::FromStr};

/// A position in spherical Web Mercator meters (EPSG:3857).
#[derive(Clone, Copy, PartialEq, Default)]
pub struct ProjectedPoint {
	/// Easting in meters.
	pub x: f64,
	/// Northing in meters.
	pub y: f64,
}

impl ProjectedPoint {
	pub fn new(x: f64, y: f64) -> ProjectedPoint {
		ProjectedPoint { x, y }
	}

	#[must_use]
	pub fn as_tuple(&self) -> (f64, f64) {
		(self.x, self.y)
	}
}

impl Debug for ProjectedPoint {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "ProjectedPoint({}, {})", self.x, self.y)
	}
}

impl From<(f64, f64)> for ProjectedPoint {
	fn from((x, y): (f64, f64)) -> Self {
		ProjectedPoint { x, y }
	}
}

impl From<ProjectedPoint> for (f64, f64) {
	fn from(point: ProjectedPoint) -> Self {
		point.as_tuple()
	}
}

impl FromStr for ProjectedPoint {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		let [x, y] = parse_values::<2>(s).with_context(|| format!("Failed to parse point '{s}' as x,y"))?;
		Ok(ProjectedPoint { x, y })
	}
}
