pub mod args;
pub mod config;
pub mod output;
pub mod sampler;
pub mod source;
pub mod util;

use std::time::Instant;

use crate::args::PickArgs;
use crate::config::Config;
use crate::source::Source;
use crate::util::random;

/// Runs one pick: validate the configuration, build the option source,
/// sample, and print. Configuration errors surface as
/// [`config::ConfigError`] inside the returned error.
pub async fn run(args: PickArgs) -> anyhow::Result<()> {
	let config = Config::from_args(&args)?;
	tracing::debug!(?config, "resolved configuration");

	let source = Source::from_config(&config)?;
	let repeat = config.effective_repeat(source.len())?;

	let results = if config.shuffle {
		// The sampling loop runs on its own worker under a deadline; the
		// caller blocks until the worker hands the collected values back.
		let deadline = Instant::now() + sampler::SAMPLE_TIMEOUT;
		let mut results =
			tokio::task::spawn_blocking(move || sampler::sample_unique(&source, repeat, deadline))
				.await?;
		random::shuffle(&mut results);
		results
	} else {
		sampler::sample(&source, repeat)
	};

	let stdout = std::io::stdout();
	output::write_results(&mut stdout.lock(), &results, config.delimiter)?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::Parser;

	#[tokio::test]
	async fn coin_run_succeeds() {
		let args = PickArgs::try_parse_from(["randpick", "-c", "-r", "4"]).unwrap();
		assert!(run(args).await.is_ok());
	}

	#[tokio::test]
	async fn range_shuffle_run_succeeds() {
		let args = PickArgs::try_parse_from(["randpick", "-n", "6", "-s"]).unwrap();
		assert!(run(args).await.is_ok());
	}

	#[tokio::test]
	async fn conflicting_modes_surface_a_config_error() {
		let args = PickArgs::try_parse_from(["randpick", "-c", "-n", "5"]).unwrap();
		let err = run(args).await.unwrap_err();
		assert_eq!(
			err.downcast_ref::<config::ConfigError>(),
			Some(&config::ConfigError::ModeConflict)
		);
	}

	#[tokio::test]
	async fn conflicting_delimiters_surface_a_config_error() {
		let args = PickArgs::try_parse_from(["randpick", "-c", "--nl", "-d"]).unwrap();
		let err = run(args).await.unwrap_err();
		assert_eq!(
			err.downcast_ref::<config::ConfigError>(),
			Some(&config::ConfigError::DelimiterConflict)
		);
	}
}
