use super::Projection;
use crate::{GeoPoint, ProjectedPoint, gcj02_to_wgs84, wgs84_to_gcj02};

/// Wraps a native projection so that it addresses GCJ-02 tiles.
///
/// [`project`](Projection::project) shifts the WGS84 input to GCJ-02 before
/// delegating; [`unproject`](Projection::unproject) delegates and then shifts
/// the result back with the approximate [`gcj02_to_wgs84`]. Callers keep
/// working in WGS84 while the inner projection sees GCJ-02 degrees, which is
/// what tile servers using the national datum expect.
///
/// # Examples
/// ```
/// use datumshift_core::{Gcj02Shifted, GeoPoint, Projection, WebMercator, wgs84_to_gcj02, wgs84_to_web_mercator};
///
/// let projection = Gcj02Shifted::new(WebMercator);
/// let gcj = wgs84_to_gcj02(116.404, 39.915);
/// assert_eq!(
///     projection.project(GeoPoint::new(116.404, 39.915)),
///     wgs84_to_web_mercator(gcj.lng, gcj.lat)
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gcj02Shifted<P: Projection> {
	inner: P,
}

impl<P: Projection> Gcj02Shifted<P> {
	pub fn new(inner: P) -> Self {
		Gcj02Shifted { inner }
	}

	pub fn inner(&self) -> &P {
		&self.inner
	}

	pub fn into_inner(self) -> P {
		self.inner
	}
}

impl<P: Projection> Projection for Gcj02Shifted<P> {
	fn project(&self, point: GeoPoint) -> ProjectedPoint {
		self.inner.project(wgs84_to_gcj02(point.lng, point.lat))
	}

	fn unproject(&self, point: ProjectedPoint) -> GeoPoint {
		let gcj = self.inner.unproject(point);
		gcj02_to_wgs84(gcj.lng, gcj.lat)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{BoundingBox, WebMercator};
	use approx::assert_abs_diff_eq;

	/// Unrounded projection, to show that the wrapper does not depend on
	/// the rounding of the built-in Mercator.
	struct Equirectangular;

	impl Projection for Equirectangular {
		fn project(&self, point: GeoPoint) -> ProjectedPoint {
			ProjectedPoint::new(point.lng * 1000.0, point.lat * 1000.0)
		}
		fn unproject(&self, point: ProjectedPoint) -> GeoPoint {
			GeoPoint::new(point.x / 1000.0, point.y / 1000.0)
		}
	}

	#[test]
	fn project_shifts_before_delegating() {
		let projection = Gcj02Shifted::new(Equirectangular);
		let gcj = wgs84_to_gcj02(121.4737, 31.2304);
		let projected = projection.project(GeoPoint::new(121.4737, 31.2304));
		assert_eq!(projected, ProjectedPoint::new(gcj.lng * 1000.0, gcj.lat * 1000.0));
	}

	#[test]
	fn unproject_shifts_after_delegating() {
		let projection = Gcj02Shifted::new(Equirectangular);
		let point = projection.unproject(ProjectedPoint::new(121478.22, 31228.46));
		let expected = gcj02_to_wgs84(121478.22 / 1000.0, 31228.46 / 1000.0);
		assert_eq!(point, expected);
	}

	#[test]
	fn round_trip_through_web_mercator() {
		let projection = Gcj02Shifted::new(WebMercator);
		let point = GeoPoint::new(114.397433, 22.909235);
		let back = projection.unproject(projection.project(point));
		assert_abs_diff_eq!(back.lng, point.lng, epsilon = 1e-4);
		assert_abs_diff_eq!(back.lat, point.lat, epsilon = 1e-4);
	}

	#[test]
	fn outside_region_is_plain_mercator() {
		let projection = Gcj02Shifted::new(WebMercator);
		let berlin = GeoPoint::new(13.404954, 52.520008);
		assert_eq!(projection.project(berlin), WebMercator.project(berlin));

		let bbox = BoundingBox::from([-10.0, 40.0, 10.0, 50.0]);
		assert_eq!(projection.project_bb(&bbox), WebMercator.project_bb(&bbox));
		assert_eq!(projection.inner(), &WebMercator);
	}
}
