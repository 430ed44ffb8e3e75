use allocplot_core::Style;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CONFIG_ENV: &str = "ALLOCPLOT_CONFIG";
const CONFIG_FILE: &str = "allocplot.toml";

/// Search order: $ALLOCPLOT_CONFIG -> ./allocplot.toml -> platform config dir
fn candidates() -> Vec<PathBuf> {
	let mut out = Vec::new();
	if let Ok(p) = std::env::var(CONFIG_ENV) {
		if !p.trim().is_empty() {
			out.push(PathBuf::from(p.trim()));
		}
	}
	out.push(PathBuf::from(CONFIG_FILE));
	if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
		out.push(PathBuf::from(xdg).join("allocplot").join(CONFIG_FILE));
	}
	if let Ok(home) = std::env::var("HOME") {
		out.push(PathBuf::from(home).join(".config").join("allocplot").join(CONFIG_FILE));
	}
	out
}

/// Resolve the figure style.
///
/// An explicit path must load. Discovered files that fail to parse are
/// skipped with a warning and the next candidate is tried.
pub fn resolve_style(explicit: Option<&Path>) -> anyhow::Result<Style> {
	if let Some(p) = explicit {
		return Style::load_from_file(p).with_context(|| format!("failed to load style config {}", p.display()));
	}
	for path in candidates() {
		if !path.is_file() {
			continue;
		}
		match Style::load_from_file(&path) {
			Ok(style) => {
				debug!(path = %path.display(), "style config loaded");
				return Ok(style);
			}
			Err(e) => warn!(path = %path.display(), error = %e, "ignoring unusable style config"),
		}
	}
	Ok(Style::default())
}

/// Contents written by `--write-config`.
pub fn template() -> anyhow::Result<String> {
	let body = Style::default().to_toml_string()?;
	Ok(format!(
		"# allocplot figure style (template)\n\
		 # Font sizes: xx-small, x-small, small, medium, large, x-large, xx-large\n\
		 # Colours: names (white, black, g, red, ...) or #rrggbb\n\n{body}"
	))
}

pub fn write_template(path: &Path, force: bool) -> anyhow::Result<()> {
	if path.exists() && !force {
		anyhow::bail!("refusing to overwrite existing file: {} (use --force)", path.display());
	}
	std::fs::write(path, template()?).with_context(|| format!("failed to write {}", path.display()))?;
	Ok(())
}
