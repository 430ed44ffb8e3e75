use crate::PlotInput;
use allocplot_core::Series;
use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Table};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
	Table,
	Json,
}

#[derive(Serialize)]
struct FileSummary<'a> {
	label: &'a str,
	path: &'a Path,
	points: &'a Series,
}

pub fn render(format: SummaryFormat, inputs: &[PlotInput]) -> anyhow::Result<String> {
	match format {
		SummaryFormat::Json => {
			let rows: Vec<FileSummary<'_>> = inputs
				.iter()
				.map(|i| FileSummary { label: &i.label, path: &i.path, points: &i.series })
				.collect();
			Ok(serde_json::to_string_pretty(&rows)?)
		}
		SummaryFormat::Table => {
			let mut out = String::new();
			for i in inputs {
				out.push_str(&format!("{} ({})\n", i.label, i.path.display()));
				out.push_str(&table(&i.series).to_string());
				out.push('\n');
			}
			Ok(out)
		}
	}
}

fn table(series: &Series) -> Table {
	let mut t = Table::new();
	t.load_preset(UTF8_FULL).set_header(vec!["workers", "min", "mean", "max"]);
	for p in series {
		t.add_row(vec![
			Cell::new(p.workers).set_alignment(CellAlignment::Right),
			Cell::new(p.min).set_alignment(CellAlignment::Right),
			Cell::new(format!("{:.3}", p.mean)).set_alignment(CellAlignment::Right),
			Cell::new(p.max).set_alignment(CellAlignment::Right),
		]);
	}
	t
}
