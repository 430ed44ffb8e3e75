//! Per-block cycle aggregation and the forward scan over a result file.
//!
//! Comment lines (`#` in the first column) and blank lines are skipped while
//! looking for the next header. Inside a block every line is a data line;
//! anything else there is a format error.

use crate::error::{Error, Result};
use crate::record::{BlockHeader, DataLine};
use crate::types::{Series, SeriesPoint, CYCLE_MIN_SENTINEL};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Running min / weighted sum / max of one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockAccumulator {
	min: i64,
	sum: i128,
	max: i64,
	lines: u64,
}

impl Default for BlockAccumulator {
	fn default() -> Self { Self::new() }
}

impl BlockAccumulator {
	/// Empty block: minimum at the sentinel, sum and maximum at zero.
	pub fn new() -> Self { Self { min: CYCLE_MIN_SENTINEL, sum: 0, max: 0, lines: 0 } }

	/// Fold one data line in. Lines with a zero count still feed the maximum.
	pub fn observe(&mut self, d: &DataLine) -> Option<()> {
		if d.count > 0 {
			self.min = self.min.min(d.min);
		}
		let weighted = i128::from(d.count).checked_mul(i128::from(d.value))?;
		self.sum = self.sum.checked_add(weighted)?;
		self.max = self.max.max(d.max);
		self.lines += 1;
		Some(())
	}

	/// Smallest minimum among lines with a positive count.
	pub fn min(&self) -> i64 { self.min }
	/// Sum of `count * value`.
	pub fn sum(&self) -> i128 { self.sum }
	/// Largest maximum seen.
	pub fn max(&self) -> i64 { self.max }
	/// Data lines folded in so far.
	pub fn lines(&self) -> u64 { self.lines }

	/// Close the block. `header_line` is used for error reporting only.
	pub fn finish(self, header: &BlockHeader, header_line: usize) -> Result<SeriesPoint> {
		if header.ts_r == 0 {
			return Err(Error::ZeroDivisor { line: header_line });
		}
		let workers = header.workers().ok_or(Error::Overflow { line: header_line, what: "gs * bs" })?;
		Ok(SeriesPoint { workers, min: self.min, mean: self.sum as f64 / header.ts_r as f64, max: self.max })
	}
}

fn is_skippable(line: &str) -> bool { line.starts_with('#') || line.trim().is_empty() }

/// Scan a whole result stream, one point per block.
pub fn read_series<R: BufRead>(reader: R) -> Result<Series> {
	let mut lines = reader.lines().enumerate().map(|(i, l)| (i + 1, l));
	let mut series = Series::new();

	while let Some((header_line, text)) = lines.next() {
		let text = text?;
		if is_skippable(&text) {
			continue;
		}
		let header = BlockHeader::decode(&text).map_err(|source| Error::Format { line: header_line, source })?;
		let expected = header.data_lines();
		let mut acc = BlockAccumulator::new();
		let mut last_line = header_line;
		while acc.lines() < expected {
			let Some((no, text)) = lines.next() else {
				return Err(Error::Truncated { line: last_line, expected, found: acc.lines() });
			};
			let text = text?;
			last_line = no;
			let d = DataLine::decode(&text).map_err(|source| Error::Format { line: no, source })?;
			acc.observe(&d).ok_or(Error::Overflow { line: no, what: "weighted cycle sum" })?;
		}
		let p = acc.finish(&header, header_line)?;
		debug!(line = header_line, workers = p.workers, min = p.min, mean = p.mean, max = p.max, "block aggregated");
		series.push(p);
	}
	Ok(series)
}

/// Parse a string holding a full result file.
pub fn parse_str(s: &str) -> Result<Series> { read_series(s.as_bytes()) }

/// Open, scan and close one result file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Series> {
	let path = path.as_ref();
	let file = File::open(path)?;
	let series = read_series(BufReader::new(file))?;
	info!(path = %path.display(), blocks = series.len(), "result file loaded");
	Ok(series)
}
