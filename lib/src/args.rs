use clap::Parser;

const SHUFFLE_USAGE: &str = "Pick without repetition and shuffle the results";

/// Random value picker: toss coins, roll ranges, or pick from stdin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(after_help = "NOTE: -n, -l, -t, and -c are mutually exclusive.\n\
NOTE: --nl, -0, and -d are mutually exclusive.")]
pub struct PickArgs {
	/// Defines the [1, n] range; must be > 0
	#[arg(short = 'n', value_name = "N")]
	pub range: Option<i64>,

	/// Coin toss
	#[arg(short = 'c')]
	pub coin: bool,

	/// Input options as lines from stdin
	#[arg(short = 'l')]
	pub lines: bool,

	/// Input options as tokens from stdin
	#[arg(short = 't')]
	pub tokens: bool,

	/// Repeat count; must be > 0 (defaults to 1, or to the number of
	/// options when shuffling)
	#[arg(short = 'r', value_name = "COUNT")]
	pub repeat: Option<u64>,

	#[arg(short = 's', long = "shuffle", help = SHUFFLE_USAGE)]
	pub shuffle: bool,

	/// Newline between items in the output
	#[arg(long = "nl")]
	pub newline: bool,

	/// \0 delimiter in the output, similar to xargs -0
	#[arg(short = '0', long = "null")]
	pub null: bool,

	/// Comma delimiter in the output, similar to xargs -d,
	#[arg(short = 'd')]
	pub comma: bool,
}
