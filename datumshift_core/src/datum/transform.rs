use super::{bd09_to_gcj02, bd09_to_wgs84, gcj02_to_bd09, gcj02_to_wgs84, wgs84_to_bd09, wgs84_to_gcj02};
use crate::{Datum, GeoPoint};
use log::trace;

/// Returns the point converter for a pair of datums, or `None` if `from == to`.
pub fn converter(from: Datum, to: Datum) -> Option<fn(f64, f64) -> GeoPoint> {
	use Datum::*;
	match (from, to) {
		(Wgs84, Gcj02) => Some(wgs84_to_gcj02),
		(Gcj02, Wgs84) => Some(gcj02_to_wgs84),
		(Gcj02, Bd09) => Some(gcj02_to_bd09),
		(Bd09, Gcj02) => Some(bd09_to_gcj02),
		(Wgs84, Bd09) => Some(wgs84_to_bd09),
		(Bd09, Wgs84) => Some(bd09_to_wgs84),
		(Wgs84, Wgs84) | (Gcj02, Gcj02) | (Bd09, Bd09) => None,
	}
}

/// Converts `point` from one datum to another.
///
/// Identical datums return the point unchanged. Conversions towards WGS84
/// are approximate, see [`gcj02_to_wgs84`].
///
/// # Examples
/// ```
/// use datumshift_core::{Datum, GeoPoint, transform, wgs84_to_bd09};
///
/// let point = GeoPoint::new(116.404, 39.915);
/// assert_eq!(transform(point, Datum::Wgs84, Datum::Bd09), wgs84_to_bd09(116.404, 39.915));
/// assert_eq!(transform(point, Datum::Gcj02, Datum::Gcj02), point);
/// ```
pub fn transform(point: GeoPoint, from: Datum, to: Datum) -> GeoPoint {
	match converter(from, to) {
		Some(convert) => {
			let result = convert(point.lng, point.lat);
			trace!("{from} -> {to}: {point:?} => {result:?}");
			result
		}
		None => point,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	const POINT: GeoPoint = GeoPoint {
		lng: 121.4737,
		lat: 31.2304,
	};

	#[rstest]
	#[case(Datum::Wgs84, Datum::Gcj02, wgs84_to_gcj02)]
	#[case(Datum::Gcj02, Datum::Wgs84, gcj02_to_wgs84)]
	#[case(Datum::Gcj02, Datum::Bd09, gcj02_to_bd09)]
	#[case(Datum::Bd09, Datum::Gcj02, bd09_to_gcj02)]
	#[case(Datum::Wgs84, Datum::Bd09, wgs84_to_bd09)]
	#[case(Datum::Bd09, Datum::Wgs84, bd09_to_wgs84)]
	fn dispatches_to_converter(#[case] from: Datum, #[case] to: Datum, #[case] expected: fn(f64, f64) -> GeoPoint) {
		assert_eq!(transform(POINT, from, to), expected(POINT.lng, POINT.lat));
	}

	#[rstest]
	#[case(Datum::Wgs84)]
	#[case(Datum::Gcj02)]
	#[case(Datum::Bd09)]
	fn same_datum_is_identity(#[case] datum: Datum) {
		assert!(converter(datum, datum).is_none());
		assert_eq!(transform(POINT, datum, datum), POINT);
	}

	#[test]
	fn chained_equals_direct() {
		let gcj = transform(POINT, Datum::Wgs84, Datum::Gcj02);
		let bd = transform(gcj, Datum::Gcj02, Datum::Bd09);
		assert_eq!(bd, transform(POINT, Datum::Wgs84, Datum::Bd09));
	}
}
