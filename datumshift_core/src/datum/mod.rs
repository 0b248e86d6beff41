//! Conversions between the geographic datums WGS84, GCJ-02 and BD-09.
//!
//! WGS84 to GCJ-02 adds an empirical offset inside a rectangle around China
//! (see [`is_outside_obfuscation_region`] and [`compute_offset`]). GCJ-02 to
//! BD-09 is a closed-form polar shift applied everywhere. The reverse
//! directions are approximations; see [`gcj02_to_wgs84`].

mod bd09;
pub use bd09::*;

mod gcj02;
pub use gcj02::*;

mod offset;
pub use offset::*;

mod region;
pub use region::*;

mod transform;
pub use transform::*;
