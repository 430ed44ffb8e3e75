//! Line records of a result file.
//!
//! A result file is a sequence of blocks. Each block starts with a header
//! line of exactly ten integers and is followed by `max_arr - min_arr` data
//! lines. Both records are decoded by position into named fields here so the
//! rest of the crate never indexes raw token vectors.
//!
//! ```rust
//! use allocplot_core::record::{BlockHeader, DataLine};
//! let h: BlockHeader = "0 0 0 0 100 2 3 0 0 1".parse().unwrap();
//! assert_eq!(h.workers(), Some(6));
//! assert_eq!(h.data_lines(), 1);
//! let d: DataLine = "0 5 0 0 10 50 20".parse().unwrap();
//! assert_eq!((d.count, d.min, d.value, d.max), (5, 10, 50, 20));
//! ```

use crate::error::RecordError;
use std::str::FromStr;

/// Decode whitespace separated integers, naming the offending field on failure.
fn decode_ints(record: &'static str, names: &[&'static str], line: &str) -> Result<Vec<i64>, RecordError> {
	line.split_whitespace()
		.enumerate()
		.map(|(index, token)| {
			token.parse::<i64>().map_err(|_| RecordError::Integer {
				record,
				index,
				name: names.get(index).copied().unwrap_or("unused"),
				token: token.to_string(),
			})
		})
		.collect()
}

/// Header line of a configuration block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
	/// Allocation chunk size in bytes.
	pub chunk_size: i64,
	/// Upper bound of chunks requested per allocation.
	pub max_chunks_per_alloc: i64,
	/// Allocator selector of the run.
	pub malloc_mc: i64,
	/// Warm-up repetitions.
	pub wa_r: i64,
	/// Divisor applied to the weighted cycle sum.
	pub ts_r: i64,
	/// Grid size.
	pub gs: i64,
	/// Block size.
	pub bs: i64,
	/// Allocation array count.
	pub arr_cnt: i64,
	/// First array size of the sweep.
	pub min_arr: i64,
	/// One past the last array size; `max_arr - min_arr` data lines follow.
	pub max_arr: i64,
}

impl BlockHeader {
	/// Field order on the wire.
	pub const FIELDS: [&'static str; 10] = [
		"chunkSize",
		"maxChunksPerAlloc",
		"mallocMC",
		"waR",
		"tsR",
		"gs",
		"bs",
		"arrCnt",
		"minArr",
		"maxArr",
	];

	/// Decode one header line. Exactly ten integers are required.
	pub fn decode(line: &str) -> Result<Self, RecordError> {
		let n = decode_ints("header", &Self::FIELDS, line)?;
		let [chunk_size, max_chunks_per_alloc, malloc_mc, wa_r, ts_r, gs, bs, arr_cnt, min_arr, max_arr] =
			<[i64; 10]>::try_from(n.as_slice()).map_err(|_| RecordError::Arity {
				record: "header",
				expected: "exactly 10",
				found: n.len(),
			})?;
		if min_arr > max_arr {
			return Err(RecordError::InvertedRange { min_arr, max_arr });
		}
		Ok(Self { chunk_size, max_chunks_per_alloc, malloc_mc, wa_r, ts_r, gs, bs, arr_cnt, min_arr, max_arr })
	}

	/// `gs * bs`, or `None` on overflow.
	pub fn workers(&self) -> Option<i64> { self.gs.checked_mul(self.bs) }

	/// Number of data lines that follow this header.
	pub fn data_lines(&self) -> u64 { self.max_arr.abs_diff(self.min_arr) }
}

impl FromStr for BlockHeader {
	type Err = RecordError;
	fn from_str(s: &str) -> Result<Self, Self::Err> { Self::decode(s) }
}

/// The consulted fields of one data line.
///
/// Data lines carry at least seven integers; only positions 1, 4, 5 and 6
/// have a meaning for aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataLine {
	/// Position 1: number of observations (weight).
	pub count: i64,
	/// Position 4: observed minimum.
	pub min: i64,
	/// Position 5: value weighted by `count` in the sum.
	pub value: i64,
	/// Position 6: observed maximum.
	pub max: i64,
}

impl DataLine {
	/// Minimum number of integers on a data line.
	pub const MIN_FIELDS: usize = 7;

	const NAMES: [&'static str; 7] = ["n0", "count", "n2", "n3", "min", "value", "max"];

	/// Decode one data line. Extra trailing integers are accepted but must still be integers.
	pub fn decode(line: &str) -> Result<Self, RecordError> {
		let n = decode_ints("data line", &Self::NAMES, line)?;
		if n.len() < Self::MIN_FIELDS {
			return Err(RecordError::Arity { record: "data line", expected: "at least 7", found: n.len() });
		}
		Ok(Self { count: n[1], min: n[4], value: n[5], max: n[6] })
	}
}

impl FromStr for DataLine {
	type Err = RecordError;
	fn from_str(s: &str) -> Result<Self, Self::Err> { Self::decode(s) }
}
