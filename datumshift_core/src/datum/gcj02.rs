use super::{compute_offset, is_outside_obfuscation_region};
use crate::GeoPoint;

/// Converts a WGS84 point to GCJ-02.
///
/// Points outside the obfuscation region (including NaN input) are returned
/// unchanged. Inside it, the offset from [`compute_offset`] evaluated at the
/// input point is added.
///
/// # Examples
/// ```
/// use datumshift_core::wgs84_to_gcj02;
///
/// let gcj = wgs84_to_gcj02(116.404, 39.915);
/// assert!((gcj.lng - 116.410244).abs() < 1e-6);
/// assert!((gcj.lat - 39.916404).abs() < 1e-6);
///
/// // Berlin is not shifted
/// assert_eq!(wgs84_to_gcj02(13.4, 52.5).as_tuple(), (13.4, 52.5));
/// ```
pub fn wgs84_to_gcj02(lng: f64, lat: f64) -> GeoPoint {
	if is_outside_obfuscation_region(lng, lat) {
		return GeoPoint::new(lng, lat);
	}
	let offset = compute_offset(lng, lat);
	GeoPoint::new(lng + offset.d_lng, lat + offset.d_lat)
}

/// Converts a GCJ-02 point back to WGS84, **approximately**.
///
/// The true WGS84 origin is unknown, so the offset is evaluated at the GCJ-02
/// point itself and subtracted. This first-order reflection leaves a residual
/// of well under 1e-4 degrees (a few meters at most) against the starting
/// WGS84 point. The region gate is tested on the GCJ-02 input.
///
/// # Examples
/// ```
/// use datumshift_core::{gcj02_to_wgs84, wgs84_to_gcj02};
///
/// let gcj = wgs84_to_gcj02(116.404, 39.915);
/// let wgs = gcj02_to_wgs84(gcj.lng, gcj.lat);
/// assert!((wgs.lng - 116.404).abs() < 1e-4);
/// assert!((wgs.lat - 39.915).abs() < 1e-4);
/// ```
pub fn gcj02_to_wgs84(lng: f64, lat: f64) -> GeoPoint {
	if is_outside_obfuscation_region(lng, lat) {
		return GeoPoint::new(lng, lat);
	}
	let offset = compute_offset(lng, lat);
	let shifted_lng = lng + offset.d_lng;
	let shifted_lat = lat + offset.d_lat;
	GeoPoint::new(lng * 2.0 - shifted_lng, lat * 2.0 - shifted_lat)
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use rstest::rstest;

	#[rstest]
	#[case((114.397433, 22.909235), (114.402400010792, 22.906654569074))]
	#[case((116.404, 39.915), (116.410244499169, 39.916404281502))]
	#[case((121.4737, 31.2304), (121.478223059277, 31.228457737577))]
	#[case((114.304569, 30.593354), (114.310012658010, 30.590943186348))]
	#[case((116.407387, 39.904179), (116.413629255666, 39.905582345020))]
	fn wgs84_to_gcj02_reference(#[case] input: (f64, f64), #[case] expected: (f64, f64)) {
		let gcj = wgs84_to_gcj02(input.0, input.1);
		assert_abs_diff_eq!(gcj.lng, expected.0, epsilon = 1e-9);
		assert_abs_diff_eq!(gcj.lat, expected.1, epsilon = 1e-9);
	}

	#[rstest]
	#[case(-74.0060, 40.7128)]
	#[case(0.0, 0.0)]
	#[case(73.0, 30.0)]
	#[case(-180.0, -90.0)]
	#[case(151.2093, -33.8688)]
	fn passthrough_outside_region(#[case] lng: f64, #[case] lat: f64) {
		assert_eq!(wgs84_to_gcj02(lng, lat), GeoPoint::new(lng, lat));
		assert_eq!(gcj02_to_wgs84(lng, lat), GeoPoint::new(lng, lat));
	}

	#[test]
	fn passthrough_west_of_gate_is_exact() {
		for i in 0..100 {
			let lng = 73.66 - f64::from(i) * 0.7331;
			let lat = f64::from(i) * 0.53;
			assert_eq!(wgs84_to_gcj02(lng, lat).as_tuple(), (lng, lat));
		}
	}

	#[rstest]
	#[case(114.397433, 22.909235)]
	#[case(116.404, 39.915)]
	#[case(121.4737, 31.2304)]
	#[case(87.6168, 43.8256)]
	#[case(126.6424, 45.7567)]
	#[case(110.3312, 20.0311)]
	fn approximate_round_trip(#[case] lng: f64, #[case] lat: f64) {
		let gcj = wgs84_to_gcj02(lng, lat);
		let wgs = gcj02_to_wgs84(gcj.lng, gcj.lat);
		let error = (wgs.lng - lng).abs().max((wgs.lat - lat).abs());
		assert!(error < 1e-4, "round trip error {error} at {lng},{lat}");
		assert!(error > 0.0, "round trip unexpectedly exact at {lng},{lat}");
	}

	#[test]
	fn inverse_uses_offset_at_gcj_point() {
		let (lng, lat) = (114.40240001079168, 22.906654569074142);
		let offset = compute_offset(lng, lat);
		let wgs = gcj02_to_wgs84(lng, lat);
		assert_abs_diff_eq!(wgs.lng, lng - offset.d_lng, epsilon = 1e-12);
		assert_abs_diff_eq!(wgs.lat, lat - offset.d_lat, epsilon = 1e-12);
	}

	#[test]
	fn nan_passes_through() {
		let gcj = wgs84_to_gcj02(f64::NAN, 30.0);
		assert!(gcj.lng.is_nan());
		assert_eq!(gcj.lat, 30.0);
	}
}
