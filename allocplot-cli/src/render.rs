//! Log-log cycle chart.
//!
//! Every input contributes three curves in its palette colour: a thin dashed
//! minimum, a solid labelled mean and a thin dashed maximum. Values that a
//! log axis cannot show (zero or negative) are left out of the curves.

use crate::PlotInput;
use allocplot_core::{color_at, Rgb, SeriesPoint, Style};
use anyhow::Context;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const X_DESC: &str = "# workers";
const Y_DESC: &str = "# cycles";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
	Svg,
	Png,
}

impl OutputFormat {
	pub fn from_path(p: &Path) -> Self {
		match p.extension().and_then(|e| e.to_str()) {
			Some(ext) if ext.eq_ignore_ascii_case("png") => Self::Png,
			_ => Self::Svg,
		}
	}
}

/// `<title-slug>.svg`, used when no output path is given.
pub fn default_output(title: &str) -> PathBuf {
	let mut slug = String::new();
	for c in title.chars() {
		if c.is_ascii_alphanumeric() {
			slug.push(c.to_ascii_lowercase());
		} else if !slug.is_empty() && !slug.ends_with('-') {
			slug.push('-');
		}
	}
	let slug = slug.trim_end_matches('-');
	PathBuf::from(format!("{}.svg", if slug.is_empty() { "allocplot" } else { slug }))
}

/// Tick label text. Decimal exponents at or beyond the formatter limits use `<m>e<exp>`.
pub fn format_tick(v: f64, limits: [i32; 2]) -> String {
	if v == 0.0 || !v.is_finite() {
		return format!("{v}");
	}
	let exp = (v.abs().log10() + 1e-12).floor() as i32;
	if exp <= limits[0] || exp >= limits[1] {
		let mantissa = v / 10f64.powi(exp);
		let m = format!("{mantissa:.2}");
		let m = m.trim_end_matches('0').trim_end_matches('.');
		format!("{m}e{exp}")
	} else if (v - v.round()).abs() < 1e-9 {
		format!("{}", v.round() as i64)
	} else {
		format!("{v}")
	}
}

/// Smallest and largest positive value, widened to whole decades.
fn decade_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
	let (lo, hi) = values
		.filter(|v| v.is_finite() && *v > 0.0)
		.fold((f64::INFINITY, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
	if !lo.is_finite() {
		return None;
	}
	let lo = 10f64.powi(lo.log10().floor() as i32);
	let mut hi = 10f64.powi((hi.log10() - 1e-12).ceil() as i32);
	if hi <= lo {
		hi = lo * 10.0;
	}
	Some((lo, hi))
}

/// Axis span for `values`. Without any positive value the axis still gets one decade.
fn axis_range(axis: &str, values: impl Iterator<Item = f64>) -> (f64, f64) {
	decade_range(values).unwrap_or_else(|| {
		warn!(axis, "no positive values to plot; drawing an empty axis");
		(1.0, 10.0)
	})
}

fn curve(points: &[SeriesPoint], y: fn(&SeriesPoint) -> f64) -> Vec<(f64, f64)> {
	points
		.iter()
		.map(|p| (p.workers as f64, y(p)))
		.filter(|(x, y)| *x > 0.0 && *y > 0.0 && y.is_finite())
		.collect()
}

fn y_min(p: &SeriesPoint) -> f64 { p.min as f64 }
fn y_mean(p: &SeriesPoint) -> f64 { p.mean }
fn y_max(p: &SeriesPoint) -> f64 { p.max as f64 }

fn rgb(c: Rgb) -> RGBColor { RGBColor(c.0, c.1, c.2) }

fn font(px: f64) -> FontDesc<'static> { FontDesc::new(FontFamily::SansSerif, px, FontStyle::Normal) }

fn draw_err(e: impl Display) -> anyhow::Error { anyhow::anyhow!("drawing failed: {e}") }

/// Draw all inputs into one figure at `out`.
pub fn render(inputs: &[PlotInput], title: &str, show_legend: bool, style: &Style, out: &Path) -> anyhow::Result<()> {
	let size = style.pixel_size();
	let drawn = match OutputFormat::from_path(out) {
		OutputFormat::Svg => {
			let root = SVGBackend::new(out, size).into_drawing_area();
			draw(root, inputs, title, show_legend, style, true)
		}
		OutputFormat::Png => {
			if style.transparent {
				warn!("transparent background is not supported for png output; filling");
			}
			let root = BitMapBackend::new(out, size).into_drawing_area();
			draw(root, inputs, title, show_legend, style, false)
		}
	};
	drawn.with_context(|| format!("failed to render {}", out.display()))
}

fn draw<DB: DrawingBackend>(
	root: DrawingArea<DB, Shift>,
	inputs: &[PlotInput],
	title: &str,
	show_legend: bool,
	style: &Style,
	can_be_transparent: bool,
) -> anyhow::Result<()> {
	let all = || inputs.iter().flat_map(|i| i.series.points().iter());
	let (x_lo, x_hi) = axis_range("x", all().map(|p| p.workers as f64));
	let (y_lo, y_hi) = axis_range("y", all().flat_map(|p| [p.min as f64, p.mean, p.max as f64]));
	debug!(x_lo, x_hi, y_lo, y_hi, "axis ranges");

	let bg = rgb(style.background);
	if !(style.transparent && can_be_transparent) {
		root.fill(&bg).map_err(draw_err)?;
	}

	let t = &style.ticks;
	let tick_px = style.px(t.major_size);
	let x_tick_font = style.font_px(style.x_tick_label_size);
	let y_tick_font = style.font_px(style.y_tick_label_size);
	let label_font = style.font_px(style.label_size);
	let x_area = tick_px + style.px(t.major_pad) + x_tick_font + label_font * 1.8;
	let y_area = tick_px + style.px(t.major_pad) + y_tick_font * 3.2 + label_font * 1.8;

	let mut chart = ChartBuilder::on(&root)
		.caption(title, font(style.font_px(style.title_size)))
		.margin(style.px(style.title_pad) as u32)
		.x_label_area_size(x_area as u32)
		.y_label_area_size(y_area as u32)
		.build_cartesian_2d((x_lo..x_hi).log_scale(), (y_lo..y_hi).log_scale())
		.map_err(draw_err)?;

	let limits = style.formatter_limits;
	chart
		.configure_mesh()
		.disable_mesh()
		.set_all_tick_mark_size(tick_px as u32)
		.x_desc(X_DESC)
		.y_desc(Y_DESC)
		.x_label_formatter(&|v| format_tick(*v, limits))
		.y_label_formatter(&|v| format_tick(*v, limits))
		.x_label_style(font(x_tick_font))
		.y_label_style(font(y_tick_font))
		.axis_desc_style(font(label_font))
		.axis_style(BLACK.stroke_width(style.px(t.major_width).round().max(1.0) as u32))
		.draw()
		.map_err(draw_err)?;

	let bound_w = style.px(style.bound_line_width).round().max(1.0) as u32;
	let mean_w = style.px(style.mean_line_width).round().max(1.0) as u32;
	let dash = (bound_w * 6).max(4);
	let gap = (bound_w * 3).max(2);

	for (idx, input) in inputs.iter().enumerate() {
		let c = rgb(color_at(idx));
		let pts = input.series.points();
		debug!(label = %input.label, points = pts.len(), "drawing series");
		let bound_style = c.stroke_width(bound_w);
		let mean_style = c.stroke_width(mean_w);

		chart
			.draw_series(DashedLineSeries::new(curve(pts, y_min), dash, gap, bound_style))
			.map_err(draw_err)?;
		chart
			.draw_series(LineSeries::new(curve(pts, y_mean), mean_style))
			.map_err(draw_err)?
			.label(input.label.as_str())
			.legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], mean_style));
		chart
			.draw_series(DashedLineSeries::new(curve(pts, y_max), dash, gap, bound_style))
			.map_err(draw_err)?;
	}

	if show_legend {
		chart
			.configure_series_labels()
			.position(SeriesLabelPosition::UpperLeft)
			.label_font(font(style.font_px(style.legend_size)))
			.background_style(bg.mix(0.8))
			.border_style(BLACK)
			.draw()
			.map_err(draw_err)?;
	}

	root.present().map_err(draw_err)?;
	Ok(())
}
