//! Planar projections and the hooks for splicing datum shifts around them.

mod shifted;
pub use shifted::*;

mod traits;
pub use traits::*;

mod web_mercator;
pub use web_mercator::*;
