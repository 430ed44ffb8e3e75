#![forbid(unsafe_code)]

//! Decoding and aggregation of allocation-cycle benchmark result files.
//!
//! A result file holds one block per worker configuration. [`load_file`]
//! scans it once and yields a [`Series`] with one [`SeriesPoint`] per block:
//! worker count plus minimum, weighted mean and maximum cycle counts.
//!
//! ```rust
//! let s = allocplot_core::parse_str("# run 1\n0 0 0 0 100 2 3 0 0 1\n0 5 0 0 10 50 20\n").unwrap();
//! let p = s.points()[0];
//! assert_eq!((p.workers, p.min, p.mean, p.max), (6, 10, 2.5, 20));
//! ```

pub mod aggregate;
pub mod config;
/// Crate error type.
pub mod error;
pub mod palette;
pub mod record;
/// Aggregated points and series.
pub mod types;

pub use aggregate::{load_file, parse_str, read_series, BlockAccumulator};
pub use config::{FontSize, Style, TickStyle};
pub use error::{Error, RecordError, Result};
pub use palette::{color_at, Rgb, PALETTE};
pub use record::{BlockHeader, DataLine};
pub use types::{Columns, Series, SeriesPoint, CYCLE_MIN_SENTINEL};
