/// Returns `true` if the offset is *not* applied at `(lng, lat)`.
///
/// The obfuscation region is the open rectangle `73.66 < lng < 135.05`,
/// `3.86 < lat < 53.55`. Points on an edge count as outside. A NaN in either
/// coordinate also counts as outside, because the test negates a conjunction
/// of comparisons that are all false for NaN.
///
/// # Examples
/// ```
/// use datumshift_core::is_outside_obfuscation_region;
///
/// assert!(!is_outside_obfuscation_region(116.404, 39.915));
/// assert!(is_outside_obfuscation_region(13.4, 52.5));
/// assert!(is_outside_obfuscation_region(f64::NAN, 30.0));
/// ```
#[allow(clippy::nonminimal_bool)]
pub fn is_outside_obfuscation_region(lng: f64, lat: f64) -> bool {
	!(lng > 73.66 && lng < 135.05 && lat > 3.86 && lat < 53.55)
}
