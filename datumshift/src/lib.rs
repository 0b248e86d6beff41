//! # datumshift
//!
//! Converts coordinates between WGS84, GCJ-02, BD-09 and spherical Web Mercator.
//!
//! The conversions live in [`datumshift_core`]; this crate adds the
//! `datumshift` command-line tool and re-exports the core.
//!
//! ## Usage Example
//!
//! ```rust
//! use datumshift::core::{Datum, GeoPoint, transform};
//!
//! let gps = GeoPoint::new(121.4737, 31.2304);
//! let baidu = transform(gps, Datum::Wgs84, Datum::Bd09);
//! assert!(baidu.lng > gps.lng);
//! ```

pub use datumshift_core as core;
