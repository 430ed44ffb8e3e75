//! Figure styling.
//!
//! A [`Style`] is a plain value handed to the renderer; nothing here is
//! process global. Defaults reproduce the historical look of the cycle
//! plots: white background, large labels, heavy ticks, 8x6 inch figure at
//! 300 dpi.

use crate::error::{Error, Result};
use crate::palette::Rgb;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Named font sizes, relative to [`Style::base_font_pt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum FontSize {
	XxSmall,
	XSmall,
	Small,
	Medium,
	Large,
	XLarge,
	XxLarge,
}

impl FontSize {
	/// Multiplier applied to the base font size.
	pub fn scale(self) -> f64 {
		match self {
			Self::XxSmall => 0.579,
			Self::XSmall => 0.694,
			Self::Small => 0.833,
			Self::Medium => 1.0,
			Self::Large => 1.2,
			Self::XLarge => 1.44,
			Self::XxLarge => 1.728,
		}
	}
}

/// Tick geometry in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickStyle {
	/// Tick mark length.
	pub major_size: f64,
	/// Stroke width of the axis lines and their tick marks.
	pub major_width: f64,
	/// Gap between tick marks and tick labels.
	pub major_pad: f64,
}

impl Default for TickStyle {
	fn default() -> Self { Self { major_size: 7.0, major_width: 1.6, major_pad: 7.0 } }
}

/// Everything that shapes the figure apart from the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
	/// Figure background.
	pub background: Rgb,
	/// Size of [`FontSize::Medium`] in points.
	pub base_font_pt: f64,
	/// Axis description size.
	pub label_size: FontSize,
	/// Title size.
	pub title_size: FontSize,
	/// Gap between title and plot area, in points.
	pub title_pad: f64,
	/// Tick label size on the worker axis.
	pub x_tick_label_size: FontSize,
	/// Tick label size on the cycle axis.
	pub y_tick_label_size: FontSize,
	/// Legend entry size.
	pub legend_size: FontSize,
	/// Decimal exponents outside `[lo, hi]` switch tick labels to scientific notation.
	pub formatter_limits: [i32; 2],
	/// Stroke of the mean curves, in points.
	pub mean_line_width: f64,
	/// Stroke of the dashed min and max curves, in points.
	pub bound_line_width: f64,
	/// Width and height in inches.
	pub figure_size: [f64; 2],
	/// Pixels per inch.
	pub dpi: u32,
	/// Skip the background fill (vector output only).
	pub transparent: bool,
	/// Tick geometry.
	pub ticks: TickStyle,
}

impl Default for Style {
	fn default() -> Self {
		Self {
			background: Rgb::WHITE,
			base_font_pt: 10.0,
			label_size: FontSize::XLarge,
			title_size: FontSize::XLarge,
			title_pad: 12.0,
			x_tick_label_size: FontSize::Large,
			y_tick_label_size: FontSize::XxLarge,
			legend_size: FontSize::XLarge,
			formatter_limits: [-4, 4],
			mean_line_width: 1.5,
			bound_line_width: 0.5,
			figure_size: [8.0, 6.0],
			dpi: 300,
			transparent: false,
			ticks: TickStyle::default(),
		}
	}
}

impl Style {
	/// Builder seeded with the defaults.
	pub fn builder() -> StyleBuilder { StyleBuilder { inner: Self::default() } }

	/// Read and validate a TOML style file. Missing keys keep their defaults.
	pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
		let data = fs::read_to_string(path)?;
		Self::from_toml_str(&data)
	}

	/// Parse and validate TOML text.
	pub fn from_toml_str(s: &str) -> Result<Self> {
		let cfg: Self = toml::from_str(s).map_err(|e| Error::config(format!("toml parse error: {e}")))?;
		cfg.validate()?;
		Ok(cfg)
	}

	/// Serialize every key, defaults included.
	pub fn to_toml_string(&self) -> Result<String> {
		toml::to_string_pretty(self).map_err(|e| Error::config(format!("toml encode error: {e}")))
	}

	/// Write [`Style::to_toml_string`] to `path`.
	pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
		fs::write(path, self.to_toml_string()?)?;
		Ok(())
	}

	/// Reject sizes and limits the renderer cannot use.
	pub fn validate(&self) -> Result<()> {
		if !(self.base_font_pt.is_finite() && self.base_font_pt > 0.0) {
			return Err(Error::config(format!("invalid base_font_pt: {}", self.base_font_pt)));
		}
		if self.dpi == 0 || self.dpi > 2400 {
			return Err(Error::config(format!("invalid dpi: {} (allowed 1..=2400)", self.dpi)));
		}
		let [w, h] = self.figure_size;
		if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
			return Err(Error::config(format!("invalid figure_size: {w}x{h}")));
		}
		let [lo, hi] = self.formatter_limits;
		if lo > hi {
			return Err(Error::config(format!("invalid formatter_limits: [{lo}, {hi}]")));
		}
		let t = &self.ticks;
		let lengths = [
			("ticks.major_size", t.major_size),
			("ticks.major_width", t.major_width),
			("ticks.major_pad", t.major_pad),
			("title_pad", self.title_pad),
			("mean_line_width", self.mean_line_width),
			("bound_line_width", self.bound_line_width),
		];
		for (name, v) in lengths {
			if !(v.is_finite() && v >= 0.0) {
				return Err(Error::config(format!("invalid {name}: {v}")));
			}
		}
		Ok(())
	}

	/// Convert a length in points to device pixels at the configured dpi.
	pub fn px(&self, points: f64) -> f64 { points * f64::from(self.dpi) / 72.0 }

	/// Pixel height of a named font size.
	pub fn font_px(&self, size: FontSize) -> f64 { self.px(self.base_font_pt * size.scale()) }

	/// Figure dimensions in pixels.
	pub fn pixel_size(&self) -> (u32, u32) {
		let [w, h] = self.figure_size;
		let d = f64::from(self.dpi);
		((w * d).round() as u32, (h * d).round() as u32)
	}
}

/// Fluent construction of a validated [`Style`].
#[derive(Debug, Clone)]
pub struct StyleBuilder {
	inner: Style,
}

#[allow(missing_docs)]
impl StyleBuilder {
	pub fn dpi(mut self, dpi: u32) -> Self { self.inner.dpi = dpi; self }
	pub fn figure_size(mut self, width: f64, height: f64) -> Self { self.inner.figure_size = [width, height]; self }
	pub fn transparent(mut self, on: bool) -> Self { self.inner.transparent = on; self }
	pub fn formatter_limits(mut self, lo: i32, hi: i32) -> Self { self.inner.formatter_limits = [lo, hi]; self }
	pub fn legend_size(mut self, s: FontSize) -> Self { self.inner.legend_size = s; self }
	/// Validate and return the style.
	pub fn build(self) -> Result<Style> {
		self.inner.validate()?;
		Ok(self.inner)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_validate() { Style::default().validate().unwrap(); }

	#[test]
	fn points_scale_with_dpi() {
		let s = Style::builder().dpi(72).build().unwrap();
		assert_eq!(s.px(7.0), 7.0);
		assert!((s.font_px(FontSize::XLarge) - 14.4).abs() < 1e-9);
		assert_eq!(s.pixel_size(), (576, 432));
		assert_eq!(Style::default().pixel_size(), (2400, 1800));
	}

	#[test]
	fn font_scales_increase() {
		let all = [
			FontSize::XxSmall,
			FontSize::XSmall,
			FontSize::Small,
			FontSize::Medium,
			FontSize::Large,
			FontSize::XLarge,
			FontSize::XxLarge,
		];
		assert!(all.windows(2).all(|w| w[0].scale() < w[1].scale()));
	}

	#[test]
	fn builder_rejects_inverted_limits() {
		let err = Style::builder().formatter_limits(3, -3).build().unwrap_err();
		assert!(err.to_string().contains("formatter_limits"));
	}
}
