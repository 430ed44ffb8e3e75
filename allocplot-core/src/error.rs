use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Everything that can go wrong while reading a result file or loading a style.
///
/// Line numbers are 1-based and refer to the physical line in the input.
#[derive(Debug, Error)]
pub enum Error {
	/// Reading the input failed.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// A header or data line has the wrong shape.
	#[error("line {line}: {source}")]
	Format {
		/// Offending line.
		line: usize,
		/// What was wrong with it.
		source: RecordError,
	},
	/// Input ended before a block's declared data lines were read.
	#[error("line {line}: block declares {expected} data lines but input ended after {found}")]
	Truncated {
		/// Last line read.
		line: usize,
		/// `maxArr - minArr` of the block header.
		expected: u64,
		/// Data lines actually present.
		found: u64,
	},
	/// A block header carries `tsR == 0`.
	#[error("line {line}: normalization divisor tsR is zero")]
	ZeroDivisor {
		/// Header line of the block.
		line: usize,
	},
	/// An aggregate left the integer range.
	#[error("line {line}: integer overflow in {what}")]
	Overflow {
		/// Line whose value overflowed.
		line: usize,
		/// Which quantity overflowed.
		what: &'static str,
	},
	/// Style configuration could not be parsed or is out of range.
	#[error("config: {0}")]
	Config(String),
}

impl Error {
	/// Shorthand for [`Error::Config`].
	pub fn config(msg: impl Into<String>) -> Self { Self::Config(msg.into()) }

	/// Line the error was detected on, when it came from decoding.
	pub fn line(&self) -> Option<usize> {
		match self {
			Self::Format { line, .. }
			| Self::Truncated { line, .. }
			| Self::ZeroDivisor { line }
			| Self::Overflow { line, .. } => Some(*line),
			Self::Io(_) | Self::Config(_) => None,
		}
	}
}

/// Shape violations found while decoding a single header or data line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
	/// Wrong number of fields.
	#[error("{record} expects {expected} fields, found {found}")]
	Arity {
		/// `"header"` or `"data line"`.
		record: &'static str,
		/// Human readable requirement, e.g. `"exactly 10"`.
		expected: &'static str,
		/// Fields present.
		found: usize,
	},
	/// A token is not an integer.
	#[error("{record} field {index} ({name}): invalid integer {token:?}")]
	Integer {
		/// `"header"` or `"data line"`.
		record: &'static str,
		/// 0-based field position.
		index: usize,
		/// Field name at that position.
		name: &'static str,
		/// The rejected token.
		token: String,
	},
	/// Header with `minArr > maxArr`.
	#[error("header minArr {min_arr} exceeds maxArr {max_arr}")]
	InvertedRange {
		/// Declared `minArr`.
		min_arr: i64,
		/// Declared `maxArr`.
		max_arr: i64,
	},
}
