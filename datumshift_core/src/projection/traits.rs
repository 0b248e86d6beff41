//! The projection seam used by map engines.

use crate::{BoundingBox, GeoPoint, ProjectedPoint};

/// A forward/inverse pair between geographic degrees and planar meters.
///
/// Map engines hold a projection object and call it when addressing tiles.
/// Implementing this trait lets a datum shift be wrapped around any of them,
/// see [`Gcj02Shifted`](crate::Gcj02Shifted).
pub trait Projection {
	/// Projects geographic degrees to planar meters.
	fn project(&self, point: GeoPoint) -> ProjectedPoint;

	/// Inverse of [`project`](Self::project).
	fn unproject(&self, point: ProjectedPoint) -> GeoPoint;

	/// Projects both corners of a degree box independently.
	fn project_bb(&self, bbox: &BoundingBox) -> BoundingBox {
		bbox.map_corners(|lng, lat| self.project(GeoPoint::new(lng, lat)).as_tuple())
	}

	/// Unprojects both corners of a meter box independently.
	fn unproject_bb(&self, bbox: &BoundingBox) -> BoundingBox {
		bbox.map_corners(|x, y| self.unproject(ProjectedPoint::new(x, y)).as_tuple())
	}
}

/// Spherical Web Mercator with the rounding of
/// [`wgs84_to_web_mercator`](crate::wgs84_to_web_mercator).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WebMercator;

impl Projection for WebMercator {
	fn project(&self, point: GeoPoint) -> ProjectedPoint {
		crate::wgs84_to_web_mercator(point.lng, point.lat)
	}

	fn unproject(&self, point: ProjectedPoint) -> GeoPoint {
		crate::web_mercator_to_wgs84(point.x, point.y)
	}
}
