use super::input::read_inputs;
use anyhow::{Context, Result};
use datumshift_core::{
	BoundingBox, GeoPoint, ProjectedPoint, web_mercator_to_wgs84, web_mercator_to_wgs84_bb, wgs84_to_web_mercator,
	wgs84_to_web_mercator_bb,
};
use log::info;
use std::io::{BufRead, Write};

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// treat every value as a bounding box "west,south,east,north"
	#[arg(long, short, display_order = 1)]
	bbox: bool,

	/// points as "x,y" (or boxes with --bbox)
	/// if none are given, values are read from stdin, one per line
	#[arg(value_name = "VALUE", allow_hyphen_values = true, verbatim_doc_comment)]
	values: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Direction {
	/// WGS84 degrees to Web Mercator meters
	Forward,
	/// Web Mercator meters to WGS84 degrees
	Inverse,
}

impl Direction {
	/// Output decimals; matches the rounding applied by the projection.
	fn decimals(self) -> usize {
		match self {
			Direction::Forward => 2,
			Direction::Inverse => 6,
		}
	}
}

pub fn run(arguments: &Subcommand, direction: Direction) -> Result<()> {
	let stdin = std::io::stdin();
	let stdout = std::io::stdout();
	project(arguments, direction, stdin.lock(), &mut stdout.lock())
}

fn project_value(value: &str, bbox: bool, direction: Direction) -> Result<Vec<f64>> {
	Ok(match (bbox, direction) {
		(false, Direction::Forward) => {
			let point: GeoPoint = value.parse()?;
			let result = wgs84_to_web_mercator(point.lng, point.lat);
			vec![result.x, result.y]
		}
		(false, Direction::Inverse) => {
			let point: ProjectedPoint = value.parse()?;
			let result = web_mercator_to_wgs84(point.x, point.y);
			vec![result.lng, result.lat]
		}
		(true, Direction::Forward) => wgs84_to_web_mercator_bb(&value.parse::<BoundingBox>()?)
			.as_array()
			.to_vec(),
		(true, Direction::Inverse) => web_mercator_to_wgs84_bb(&value.parse::<BoundingBox>()?)
			.as_array()
			.to_vec(),
	})
}

pub fn project(
	arguments: &Subcommand,
	direction: Direction,
	reader: impl BufRead,
	writer: &mut impl Write,
) -> Result<()> {
	let inputs = read_inputs(&arguments.values, reader)?;
	let decimals = direction.decimals();

	for input in &inputs {
		let values = project_value(&input.value, arguments.bbox, direction)
			.with_context(|| format!("Invalid value in {}", input.origin))?;
		let line = values
			.iter()
			.map(|v| format!("{v:.decimals$}"))
			.collect::<Vec<_>>()
			.join(",");
		writeln!(writer, "{line}")?;
	}
	writer.flush()?;

	info!("projected {} values ({direction:?})", inputs.len());
	Ok(())
}
