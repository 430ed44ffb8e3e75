use serde::{Deserialize, Serialize};

/// Starting value of a block's running minimum. Larger than any real cycle count;
/// a block without counted observations keeps it.
pub const CYCLE_MIN_SENTINEL: i64 = 2_000_000_000_000_000_000;

/// Aggregate of one configuration block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
	/// `gs * bs` of the block header.
	pub workers: i64,
	/// Lowest observed minimum among lines with a positive count.
	pub min: i64,
	/// `sum(count * value) / tsR`.
	pub mean: f64,
	/// Highest observed maximum.
	pub max: i64,
}

/// Points of one result file in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
	points: Vec<SeriesPoint>,
}

/// Column view of a [`Series`]: four sequences of equal length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Columns {
	/// Worker count per block.
	pub workers: Vec<i64>,
	/// Minimum cycles per block.
	pub min: Vec<i64>,
	/// Mean cycles per block.
	pub mean: Vec<f64>,
	/// Maximum cycles per block.
	pub max: Vec<i64>,
}

impl Series {
	/// Empty series.
	pub fn new() -> Self { Self::default() }
	/// Append the next block's point.
	pub fn push(&mut self, p: SeriesPoint) { self.points.push(p); }
	/// Points in file order.
	pub fn points(&self) -> &[SeriesPoint] { &self.points }
	/// Number of blocks read.
	pub fn len(&self) -> usize { self.points.len() }
	/// True when the file held no blocks.
	pub fn is_empty(&self) -> bool { self.points.is_empty() }

	/// Split into the four per-block sequences.
	pub fn columns(&self) -> Columns {
		let mut c = Columns::default();
		for p in &self.points {
			c.workers.push(p.workers);
			c.min.push(p.min);
			c.mean.push(p.mean);
			c.max.push(p.max);
		}
		c
	}
}

impl<'a> IntoIterator for &'a Series {
	type Item = &'a SeriesPoint;
	type IntoIter = std::slice::Iter<'a, SeriesPoint>;
	fn into_iter(self) -> Self::IntoIter { self.points.iter() }
}
