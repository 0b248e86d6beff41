use anyhow::{Context, Result};
use log::debug;
use std::io::BufRead;

/// A raw value from the command line or stdin, with its origin for error messages.
#[derive(Debug, PartialEq)]
pub struct Input {
	pub value: String,
	pub origin: String,
}

/// Returns `values` if any were given on the command line, otherwise reads
/// one value per line from `reader`. Blank lines and `#` comments are skipped.
pub fn read_inputs(values: &[String], reader: impl BufRead) -> Result<Vec<Input>> {
	if !values.is_empty() {
		return Ok(values
			.iter()
			.enumerate()
			.map(|(index, value)| Input {
				value: value.trim().to_string(),
				origin: format!("argument {}", index + 1),
			})
			.collect());
	}

	debug!("no values on the command line, reading stdin");
	let mut inputs = Vec::new();
	for (index, line) in reader.lines().enumerate() {
		let line = line.with_context(|| format!("Failed to read line {} from stdin", index + 1))?;
		let value = line.trim();
		if value.is_empty() || value.starts_with('#') {
			continue;
		}
		inputs.push(Input {
			value: value.to_string(),
			origin: format!("line {}", index + 1),
		});
	}
	debug!("read {} values from stdin", inputs.len());
	Ok(inputs)
}
