//! Coordinate conversions between the datums used by Chinese web maps.
//!
//! Supports WGS84 (GPS), GCJ-02 (the obfuscated national datum), BD-09 (a
//! further shifted civilian datum) and spherical Web Mercator meters. Every
//! function is pure: no state, no I/O, and no errors for out-of-range input.
//! Non-finite values propagate through the arithmetic unchanged.
//!
//! # Examples
//!
//! ```
//! use datumshift_core::{bd09_to_wgs84, wgs84_to_bd09, wgs84_to_web_mercator};
//!
//! // Tian'anmen, as reported by a GPS receiver
//! let bd09 = wgs84_to_bd09(116.404, 39.915);
//! let back = bd09_to_wgs84(bd09.lng, bd09.lat);
//! assert!((back.lng - 116.404).abs() < 1e-4);
//!
//! let projected = wgs84_to_web_mercator(116.404, 39.915);
//! assert_eq!(projected.x, 12958034.01);
//! ```

pub mod bbox;
pub mod datum;
pub mod projection;
pub mod types;

pub use bbox::*;
pub use datum::*;
pub use projection::*;
pub use types::*;
