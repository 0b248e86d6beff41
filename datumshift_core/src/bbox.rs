//! Datum conversions for bounding boxes.
//!
//! Each helper converts the `(west, south)` and `(east, north)` corners on
//! their own and reassembles the box. Corners are gated independently, so a
//! box that straddles the edge of the obfuscation region can come back with
//! one shifted and one untouched corner.

use crate::{
	BoundingBox, Datum, GeoPoint, bd09_to_gcj02, bd09_to_wgs84, converter, gcj02_to_bd09, gcj02_to_wgs84,
	wgs84_to_bd09, wgs84_to_gcj02,
};
use log::trace;

fn convert_corners(bbox: &BoundingBox, convert: fn(f64, f64) -> GeoPoint) -> BoundingBox {
	bbox.map_corners(|lng, lat| convert(lng, lat).as_tuple())
}

pub fn wgs84_to_gcj02_bb(bbox: &BoundingBox) -> BoundingBox {
	convert_corners(bbox, wgs84_to_gcj02)
}

/// Approximate, like [`gcj02_to_wgs84`].
pub fn gcj02_to_wgs84_bb(bbox: &BoundingBox) -> BoundingBox {
	convert_corners(bbox, gcj02_to_wgs84)
}

pub fn gcj02_to_bd09_bb(bbox: &BoundingBox) -> BoundingBox {
	convert_corners(bbox, gcj02_to_bd09)
}

pub fn bd09_to_gcj02_bb(bbox: &BoundingBox) -> BoundingBox {
	convert_corners(bbox, bd09_to_gcj02)
}

pub fn wgs84_to_bd09_bb(bbox: &BoundingBox) -> BoundingBox {
	convert_corners(bbox, wgs84_to_bd09)
}

/// Doubly approximate, like [`bd09_to_wgs84`].
pub fn bd09_to_wgs84_bb(bbox: &BoundingBox) -> BoundingBox {
	convert_corners(bbox, bd09_to_wgs84)
}

/// Converts a degree box between any two datums, corner by corner.
///
/// # Examples
/// ```
/// use datumshift_core::{BoundingBox, Datum, transform_bb};
///
/// let shenzhen = BoundingBox::from([113.7, 22.4, 114.6, 22.9]);
/// let gcj = transform_bb(&shenzhen, Datum::Wgs84, Datum::Gcj02);
/// assert!(gcj.east > shenzhen.east);
/// assert_eq!(transform_bb(&shenzhen, Datum::Bd09, Datum::Bd09), shenzhen);
/// ```
pub fn transform_bb(bbox: &BoundingBox, from: Datum, to: Datum) -> BoundingBox {
	match converter(from, to) {
		Some(convert) => {
			let result = convert_corners(bbox, convert);
			trace!("{from} -> {to}: {bbox:?} => {result:?}");
			result
		}
		None => *bbox,
	}
}
