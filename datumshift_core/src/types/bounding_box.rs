use super::parse_values;
use anyhow::{Context, Result, ensure};
use std::{fmt::Debug, str::FromStr};

/// A rectangular area given by its four edges.
///
/// The unit follows the coordinate kind: degrees for geographic boxes, meters
/// for projected ones. Edges are independent scalars. Nothing checks that
/// `north > south` or `east > west`, and every conversion in this crate works
/// corner by corner.
///
/// The array and string forms use the `[west, south, east, north]` order.
///
/// # Examples
/// ```
/// use datumshift_core::BoundingBox;
///
/// let bbox: BoundingBox = "113.7,22.4,114.6,22.9".parse().unwrap();
/// assert_eq!(bbox.north, 22.9);
/// assert_eq!(bbox.as_array(), [113.7, 22.4, 114.6, 22.9]);
/// ```
#[derive(Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
	pub north: f64,
	pub east: f64,
	pub south: f64,
	pub west: f64,
}

impl BoundingBox {
	/// Creates a box from its edges in `north, east, south, west` order.
	pub fn new(north: f64, east: f64, south: f64, west: f64) -> BoundingBox {
		BoundingBox {
			north,
			east,
			south,
			west,
		}
	}

	/// Reassembles a box from its south-west `(west, south)` and north-east
	/// `(east, north)` corners.
	pub fn from_corners(south_west: (f64, f64), north_east: (f64, f64)) -> BoundingBox {
		BoundingBox {
			north: north_east.1,
			east: north_east.0,
			south: south_west.1,
			west: south_west.0,
		}
	}

	/// The `(west, south)` corner.
	#[must_use]
	pub fn south_west(&self) -> (f64, f64) {
		(self.west, self.south)
	}

	/// The `(east, north)` corner.
	#[must_use]
	pub fn north_east(&self) -> (f64, f64) {
		(self.east, self.north)
	}

	/// Returns `[west, south, east, north]`.
	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.west, self.south, self.east, self.north]
	}

	/// Applies `f` to both corners and reassembles the result.
	#[must_use]
	pub fn map_corners<F>(&self, f: F) -> BoundingBox
	where
		F: Fn(f64, f64) -> (f64, f64),
	{
		let (west, south) = self.south_west();
		let (east, north) = self.north_east();
		BoundingBox::from_corners(f(west, south), f(east, north))
	}
}

impl Debug for BoundingBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"BoundingBox(n: {}, e: {}, s: {}, w: {})",
			self.north, self.east, self.south, self.west
		)
	}
}

impl From<[f64; 4]> for BoundingBox {
	/// Builds a box from `[west, south, east, north]`.
	fn from(input: [f64; 4]) -> Self {
		let [west, south, east, north] = input;
		BoundingBox {
			north,
			east,
			south,
			west,
		}
	}
}

impl TryFrom<Vec<f64>> for BoundingBox {
	type Error = anyhow::Error;

	/// Builds a box from a `Vec<f64>` holding exactly `[west, south, east, north]`.
	fn try_from(input: Vec<f64>) -> Result<Self> {
		ensure!(
			input.len() == 4,
			"BoundingBox must have 4 elements (west, south, east, north), found {}",
			input.len()
		);
		Ok(BoundingBox::from([input[0], input[1], input[2], input[3]]))
	}
}

impl FromStr for BoundingBox {
	type Err = anyhow::Error;

	/// Parses `"west,south,east,north"`.
	fn from_str(s: &str) -> Result<Self> {
		let values = parse_values::<4>(s).with_context(|| format!("Failed to parse bbox '{s}' as west,south,east,north"))?;
		Ok(BoundingBox::from(values))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn corners() {
		let bbox = BoundingBox::new(4.0, 3.0, 2.0, 1.0);
		assert_eq!(bbox.south_west(), (1.0, 2.0));
		assert_eq!(bbox.north_east(), (3.0, 4.0));
		assert_eq!(BoundingBox::from_corners((1.0, 2.0), (3.0, 4.0)), bbox);
	}

	#[test]
	fn array_order() {
		let bbox = BoundingBox::from([1.0, 2.0, 3.0, 4.0]);
		assert_eq!(bbox, BoundingBox::new(4.0, 3.0, 2.0, 1.0));
		assert_eq!(bbox.as_array(), [1.0, 2.0, 3.0, 4.0]);
	}

	#[test]
	fn inverted_edges_are_kept() {
		let bbox: BoundingBox = "10,5,-10,-5".parse().unwrap();
		assert_eq!(bbox.west, 10.0);
		assert_eq!(bbox.east, -10.0);
		assert_eq!(bbox.south, 5.0);
		assert_eq!(bbox.north, -5.0);
	}

	#[test]
	fn try_from_vec() -> Result<()> {
		let bbox = BoundingBox::try_from(vec![-10.0, -5.0, 10.0, 5.0])?;
		assert_eq!(bbox.as_array(), [-10.0, -5.0, 10.0, 5.0]);

		let error = BoundingBox::try_from(vec![-10.0, -5.0, 10.0]).unwrap_err();
		assert_eq!(
			error.to_string(),
			"BoundingBox must have 4 elements (west, south, east, north), found 3"
		);
		Ok(())
	}

	#[test]
	fn map_corners_touches_each_corner_once() {
		let bbox = BoundingBox::from([1.0, 2.0, 3.0, 4.0]);
		let mapped = bbox.map_corners(|x, y| (x * 10.0, y + 1.0));
		assert_eq!(mapped.as_array(), [10.0, 3.0, 30.0, 5.0]);
	}

	#[test]
	fn parse_error() {
		let error = "1,2,3".parse::<BoundingBox>().unwrap_err();
		assert_eq!(error.to_string(), "Failed to parse bbox '1,2,3' as west,south,east,north");
	}

	#[test]
	fn debug_format() {
		let bbox = BoundingBox::from([-10.0, -5.0, 10.0, 5.0]);
		assert_eq!(format!("{bbox:?}"), "BoundingBox(n: 5, e: 10, s: -5, w: -10)");
	}
}
