//! Value types for points, boxes and datum tags.

mod bounding_box;
pub use bounding_box::*;

mod datum;
pub use datum::*;

mod geo_point;
pub use geo_point::*;

mod projected_point;
pub use projected_point::*;

pub(crate) fn parse_values<const N: usize>(input: &str) -> anyhow::Result<[f64; N]> {
	let parts: Vec<&str> = input.split(',').map(str::trim).collect();
	anyhow::ensure!(
		parts.len() == N,
		"expected {N} comma-separated values, found {}",
		parts.len()
	);
	let mut values = [0.0; N];
	for (value, part) in values.iter_mut().zip(parts) {
		*value = part
			.parse::<f64>()
			.map_err(|e| anyhow::anyhow!("invalid number '{part}': {e}"))?;
	}
	Ok(values)
}
