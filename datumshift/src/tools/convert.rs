use super::input::read_inputs;
use anyhow::{Context, Result};
use datumshift_core::{Datum, GeoPoint, transform};
use log::info;
use std::io::{BufRead, Write};

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// datum of the input points
	#[arg(long, short, value_enum, display_order = 1)]
	from: Datum,

	/// datum of the output points
	#[arg(long, short, value_enum, display_order = 1)]
	to: Datum,

	/// round the output to this many decimals
	#[arg(long, short, value_name = "int", display_order = 2)]
	decimals: Option<usize>,

	/// points as "lng,lat"
	/// if none are given, points are read from stdin, one per line
	#[arg(value_name = "POINT", allow_hyphen_values = true, verbatim_doc_comment)]
	points: Vec<String>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let stdin = std::io::stdin();
	let stdout = std::io::stdout();
	convert(arguments, stdin.lock(), &mut stdout.lock())
}

fn format_point(point: GeoPoint, decimals: Option<usize>) -> String {
	match decimals {
		Some(d) => format!("{:.d$},{:.d$}", point.lng, point.lat),
		None => format!("{},{}", point.lng, point.lat),
	}
}

pub fn convert(arguments: &Subcommand, reader: impl BufRead, writer: &mut impl Write) -> Result<()> {
	let inputs = read_inputs(&arguments.points, reader)?;

	for input in &inputs {
		let point: GeoPoint = input
			.value
			.parse()
			.with_context(|| format!("Invalid point in {}", input.origin))?;
		let result = transform(point, arguments.from, arguments.to);
		writeln!(writer, "{}", format_point(result, arguments.decimals))?;
	}
	writer.flush()?;

	info!(
		"converted {} points from {} to {}",
		inputs.len(),
		arguments.from,
		arguments.to
	);
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn subcommand(from: Datum, to: Datum, decimals: Option<usize>, points: &[&str]) -> Subcommand {
		Subcommand {
			from,
			to,
			decimals,
			points: points.iter().map(|p| (*p).to_string()).collect(),
		}
	}

	fn output(arguments: &Subcommand, stdin: &str) -> Result<String> {
		let mut buffer = Vec::new();
		convert(arguments, stdin.as_bytes(), &mut buffer)?;
		Ok(String::from_utf8(buffer)?)
	}

	#[rstest]
	#[case(Datum::Wgs84, Datum::Gcj02, "116.410244,39.916404\n")]
	#[case(Datum::Gcj02, Datum::Bd09, "116.410369,39.921337\n")]
	#[case(Datum::Wgs84, Datum::Bd09, "116.416627,39.922700\n")]
	#[case(Datum::Bd09, Datum::Bd09, "116.404000,39.915000\n")]
	fn convert_arguments(#[case] from: Datum, #[case] to: Datum, #[case] expected: &str) -> Result<()> {
		let arguments = subcommand(from, to, Some(6), &["116.404,39.915"]);
		assert_eq!(output(&arguments, "")?, expected);
		Ok(())
	}

	#[test]
	fn full_precision_by_default() -> Result<()> {
		let arguments = subcommand(Datum::Wgs84, Datum::Gcj02, None, &["13.4,52.5"]);
		assert_eq!(output(&arguments, "")?, "13.4,52.5\n");
		Ok(())
	}

	#[test]
	fn convert_stdin() -> Result<()> {
		let arguments = subcommand(Datum::Wgs84, Datum::Gcj02, Some(3), &[]);
		let result = output(&arguments, "# header\n0,0\n116.404,39.915\n")?;
		assert_eq!(result, "0.000,0.000\n116.410,39.916\n");
		Ok(())
	}

	#[test]
	fn invalid_point_names_origin() {
		let arguments = subcommand(Datum::Wgs84, Datum::Gcj02, None, &[]);
		let error = output(&arguments, "1,2\n\nfoo\n").unwrap_err();
		assert_eq!(error.to_string(), "Invalid point in line 3");
		assert_eq!(
			format!("{:#}", error),
			"Invalid point in line 3: Failed to parse point 'foo' as lng,lat: expected 2 comma-separated values, found 1"
		);
	}
}
