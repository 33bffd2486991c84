use thiserror::Error;

use crate::args::PickArgs;
use crate::output::Delimiter;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
	#[error("exactly one of -n, -c, -l and -t must be given")]
	ModeConflict,
	#[error("-n argument must be > 0, got {0}")]
	BadRange(i64),
	#[error("-r argument must be > 0")]
	BadRepeat,
	#[error("repeat count {repeat} cannot exceed the number of options ({options})")]
	RepeatTooHigh { repeat: u64, options: usize },
	#[error("only one of --nl, -0 and -d may be given")]
	DelimiterConflict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
	Coin,
	Range(i64),
	Lines,
	Tokens,
}

/// Everything the rest of the program needs to know, validated once.
/// `repeat` stays `None` when the user gave no `-r`, so shuffling a
/// list-backed source can default to the full population.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	pub mode: Mode,
	pub repeat: Option<u64>,
	pub shuffle: bool,
	pub delimiter: Delimiter,
}

impl Config {
	pub fn from_args(args: &PickArgs) -> Result<Config, ConfigError> {
		if args.repeat == Some(0) && !args.shuffle {
			return Err(ConfigError::BadRepeat);
		}

		let mode = match (args.coin, args.range, args.lines, args.tokens) {
			(true, None, false, false) => Mode::Coin,
			(false, Some(n), false, false) => {
				if n <= 0 {
					return Err(ConfigError::BadRange(n));
				}
				Mode::Range(n)
			}
			(false, None, true, false) => Mode::Lines,
			(false, None, false, true) => Mode::Tokens,
			_ => return Err(ConfigError::ModeConflict),
		};

		let delimiter = match (args.newline, args.null, args.comma) {
			(false, false, false) => Delimiter::Space,
			(true, false, false) => Delimiter::Newline,
			(false, true, false) => Delimiter::Null,
			(false, false, true) => Delimiter::Comma,
			_ => return Err(ConfigError::DelimiterConflict),
		};

		Ok(Config {
			mode,
			repeat: args.repeat,
			shuffle: args.shuffle,
			delimiter,
		})
	}

	/// Resolves how many values to produce. When shuffling a list-backed
	/// source, an unset `-r` means the whole population, and an explicit
	/// `-r` may not ask for more unique values than exist.
	pub fn effective_repeat(&self, options: Option<usize>) -> Result<usize, ConfigError> {
		match (self.shuffle, self.repeat, options) {
			(true, Some(repeat), Some(options)) if repeat as usize > options => {
				Err(ConfigError::RepeatTooHigh { repeat, options })
			}
			(true, None, Some(options)) => Ok(options),
			(_, repeat, _) => Ok(repeat.unwrap_or(1) as usize),
		}
	}
}
