#![forbid(unsafe_code)]

//! `allocplot`: draw min, mean and max allocation cycles against worker count.

use allocplot_core::Series;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

mod dispatch;
mod logging;
mod render;
mod settings;
mod summary;

use dispatch::{Invocation, PlotRequest, USAGE};
use summary::SummaryFormat;

#[derive(Debug, Parser)]
#[command(
	name = "allocplot",
	version,
	about = "Plot allocation cycle counts against worker count",
	after_help = USAGE
)]
struct Cli {
	/// Figure file to write (.svg or .png). Default: <title>.svg
	#[arg(long, short)]
	output: Option<PathBuf>,
	/// Style config file (TOML). Default: discovered allocplot.toml, else built-in style
	#[arg(long)]
	config: Option<PathBuf>,
	/// Write the default style template to this path and exit
	#[arg(long, value_name = "PATH")]
	write_config: Option<PathBuf>,
	/// Overwrite an existing --write-config target or default figure path
	#[arg(long)]
	force: bool,
	/// Print the aggregated points of every file
	#[arg(long, value_enum)]
	summary: Option<SummaryFormat>,
	/// Parse and summarize only; do not draw the figure
	#[arg(long)]
	no_render: bool,
	/// Log level used when neither ALLOCPLOT_LOG nor RUST_LOG is set
	#[arg(long, default_value = "warn")]
	log_level: String,
	/// TITLE FILE [LABEL FILE LABEL ...]. Options go before these; words may start with '-'
	#[arg(value_name = "ARGS", allow_hyphen_values = true)]
	args: Vec<String>,
}

/// One parsed input file and its legend label.
#[derive(Debug, Clone)]
pub struct PlotInput {
	pub label: String,
	pub path: PathBuf,
	pub series: Series,
}

/// Parse every file before anything is drawn.
fn load_inputs(req: &PlotRequest) -> anyhow::Result<Vec<PlotInput>> {
	req.inputs
		.iter()
		.map(|(path, label)| {
			info!(path = %path.display(), label = %label, "reading result file");
			let series = allocplot_core::load_file(path).with_context(|| format!("failed to parse {}", path.display()))?;
			Ok(PlotInput { label: label.clone(), path: path.clone(), series })
		})
		.collect()
}

/// `<title-slug>.svg`, unless that file exists and `force` is off.
fn default_output_checked(title: &str, force: bool) -> anyhow::Result<PathBuf> {
	let path = render::default_output(title);
	if path.exists() && !force {
		anyhow::bail!("refusing to overwrite existing file: {} (use --force or -o)", path.display());
	}
	Ok(path)
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	logging::init(&cli.log_level)?;

	if let Some(path) = &cli.write_config {
		settings::write_template(path, cli.force)?;
		eprintln!("wrote {}", path.display());
		return Ok(());
	}

	let req = match Invocation::from_positionals(&cli.args) {
		Invocation::Plot(req) => req,
		Invocation::Usage => {
			print!("{USAGE}");
			return Ok(());
		}
	};

	let style = settings::resolve_style(cli.config.as_deref())?;
	let inputs = load_inputs(&req)?;

	if let Some(format) = cli.summary {
		println!("{}", summary::render(format, &inputs)?);
	}
	if cli.no_render {
		return Ok(());
	}

	let out = match cli.output {
		Some(path) => path,
		None => default_output_checked(&req.title, cli.force)?,
	};
	render::render(&inputs, &req.title, req.show_legend, &style, &out)?;
	eprintln!("wrote {}", out.display());
	Ok(())
}
