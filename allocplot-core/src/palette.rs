//! Colours.
//!
//! Series colours come from a fixed four entry palette assigned by input
//! position, wrapping after the fourth file. Style colours (backgrounds) are
//! written in config files as names or `#rrggbb`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(
	/// Red.
	pub u8,
	/// Green.
	pub u8,
	/// Blue.
	pub u8,
);

#[allow(missing_docs)]
impl Rgb {
	pub const WHITE: Rgb = Rgb(255, 255, 255);
	pub const BLACK: Rgb = Rgb(0, 0, 0);
	pub const GREEN: Rgb = Rgb(0, 128, 0);
	pub const RED: Rgb = Rgb(255, 0, 0);
	pub const OLIVE: Rgb = Rgb(191, 191, 0);
	pub const BLUE: Rgb = Rgb(0, 0, 255);

	fn named(name: &str) -> Option<Self> {
		let c = match name {
			"w" | "white" => Self::WHITE,
			"k" | "black" => Self::BLACK,
			"g" | "green" => Self::GREEN,
			"r" | "red" => Self::RED,
			"y" | "yellow" => Self::OLIVE,
			"b" | "blue" => Self::BLUE,
			"c" | "cyan" => Rgb(0, 191, 191),
			"m" | "magenta" => Rgb(191, 0, 191),
			"gray" | "grey" => Rgb(128, 128, 128),
			_ => return None,
		};
		Some(c)
	}
}

/// Colours handed out to input files, in order.
pub const PALETTE: [Rgb; 4] = [Rgb::GREEN, Rgb::RED, Rgb::OLIVE, Rgb::BLUE];

/// Colour of the `index`-th input file (0-based).
///
/// ```rust
/// use allocplot_core::palette::{color_at, PALETTE};
/// assert_eq!(color_at(0), PALETTE[0]);
/// assert_eq!(color_at(4), color_at(0));
/// ```
pub fn color_at(index: usize) -> Rgb { PALETTE[index % PALETTE.len()] }

impl FromStr for Rgb {
	type Err = Error;
	fn from_str(s: &str) -> Result<Self> {
		let t = s.trim();
		if let Some(hex) = t.strip_prefix('#') {
			let ok = hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit());
			if !ok {
				return Err(Error::config(format!("invalid colour: {s:?} (expected #rrggbb)")));
			}
			let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| Error::config(format!("invalid colour {s:?}: {e}")));
			return Ok(Rgb(byte(0)?, byte(2)?, byte(4)?));
		}
		Self::named(&t.to_ascii_lowercase()).ok_or_else(|| Error::config(format!("unknown colour name: {s:?}")))
	}
}

impl TryFrom<String> for Rgb {
	type Error = Error;
	fn try_from(s: String) -> Result<Self> { s.parse() }
}

impl From<Rgb> for String {
	fn from(c: Rgb) -> Self { c.to_string() }
}

impl fmt::Display for Rgb {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2) }
}
