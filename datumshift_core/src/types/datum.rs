//! The geographic datums a [`GeoPoint`](crate::GeoPoint) can be expressed in.

use anyhow::{Result, bail};
#[cfg(feature = "cli")]
use clap::ValueEnum;
use std::{fmt::Display, str::FromStr};

/// Geographic datum tag used by [`transform`](crate::transform).
///
/// # Examples
/// ```
/// use datumshift_core::Datum;
///
/// assert_eq!("GCJ-02".parse::<Datum>().unwrap(), Datum::Gcj02);
/// assert_eq!(Datum::Bd09.to_string(), "bd09");
/// ```
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Datum {
	/// GPS datum.
	#[cfg_attr(feature = "cli", value(alias = "wgs-84"))]
	Wgs84,
	/// Obfuscated national datum.
	#[cfg_attr(feature = "cli", value(alias = "gcj-02"))]
	Gcj02,
	/// Baidu datum.
	#[cfg_attr(feature = "cli", value(alias = "bd-09"))]
	Bd09,
}

impl Datum {
	pub fn as_str(&self) -> &'static str {
		match self {
			Datum::Wgs84 => "wgs84",
			Datum::Gcj02 => "gcj02",
			Datum::Bd09 => "bd09",
		}
	}
}

impl Display for Datum {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Datum {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		Ok(match s.trim().to_ascii_lowercase().replace('-', "").as_str() {
			"wgs84" => Datum::Wgs84,
			"gcj02" => Datum::Gcj02,
			"bd09" => Datum::Bd09,
			_ => bail!("Unknown datum '{s}', expected one of: wgs84, gcj02, bd09"),
		})
	}
}
