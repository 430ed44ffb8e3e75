use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "ALLOCPLOT_LOG";

/// Install the stderr fmt subscriber.
///
/// Filter precedence: `ALLOCPLOT_LOG`, `RUST_LOG`, then `default_level`.
pub fn init(default_level: &str) -> anyhow::Result<()> {
	if tracing::dispatcher::has_been_set() {
		return Ok(());
	}
	let filter = EnvFilter::try_from_env(LOG_ENV)
		.or_else(|_| EnvFilter::try_from_default_env())
		.or_else(|_| EnvFilter::try_new(default_level))?;
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init()
		.map_err(|e| anyhow::anyhow!("logging init failed: {e}"))
}
