//! Positional argument forms.
//!
//! Counting the program name, `argc` positional words select the form:
//! `argc == 3` plots one file without a legend, an even `argc > 2` reads the
//! title followed by (file, label) pairs, anything else prints usage.

use std::path::PathBuf;

/// Label used when a single file is plotted without a legend.
pub const PLACEHOLDER_LABEL: &str = "0";

pub const USAGE: &str = "\
Shows a single diagram of needed cycles to allocate memory
First param: diagram title
Every next two [optional params]: fname legendName
If only one file name is given the legend name can be omitted
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotRequest {
	pub title: String,
	/// (file, legend label) in plotting order.
	pub inputs: Vec<(PathBuf, String)>,
	pub show_legend: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
	Plot(PlotRequest),
	Usage,
}

impl Invocation {
	/// Classify positional words, program name excluded.
	pub fn from_positionals(args: &[String]) -> Self {
		let argc = args.len() + 1;
		let Some((title, rest)) = args.split_first() else { return Self::Usage };
		if argc > 2 && argc % 2 == 0 {
			let inputs = rest.chunks_exact(2).map(|p| (PathBuf::from(&p[0]), p[1].clone())).collect();
			Self::Plot(PlotRequest { title: title.clone(), inputs, show_legend: true })
		} else if let [file] = rest {
			Self::Plot(PlotRequest {
				title: title.clone(),
				inputs: vec![(PathBuf::from(file), PLACEHOLDER_LABEL.to_string())],
				show_legend: false,
			})
		} else {
			Self::Usage
		}
	}
}
