use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use randpick::args::PickArgs;
use randpick::config::ConfigError;
use randpick::util::logger;

#[tokio::main]
async fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.init();

	let args = PickArgs::parse();

	match randpick::run(args).await {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			logger::error(&e.to_string());
			if e.downcast_ref::<ConfigError>().is_some() {
				let mut cmd = PickArgs::command();
				eprintln!("{}", cmd.render_help());
			}
			ExitCode::FAILURE
		}
	}
}
