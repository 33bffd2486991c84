use std::fmt;
use std::io::{self, BufRead};

use crate::config::{Config, Mode};
use crate::util::logger;
use crate::util::random;

pub const COIN_FACES: [&str; 2] = ["HEADS", "tails"];

/// A single drawn value. Each run only ever produces one kind, decided by
/// the mode: integers for ranges, text for everything else.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
	Int(i64),
	Text(String),
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Int(n) => write!(f, "{}", n),
			Value::Text(s) => f.write_str(s),
		}
	}
}

/// The population a draw samples from. Coin and range populations are
/// implicit; lines and tokens are read from input up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
	Coin,
	Range(i64),
	List(Vec<String>),
}

impl Source {
	/// Builds the source for the configured mode, consuming stdin when the
	/// options come from input.
	pub fn from_config(config: &Config) -> io::Result<Source> {
		let stdin = io::stdin();
		match config.mode {
			Mode::Coin => Ok(Source::Coin),
			Mode::Range(n) => Ok(Source::Range(n)),
			Mode::Lines => Source::lines(stdin.lock()),
			Mode::Tokens => Source::tokens(stdin.lock()),
		}
	}

	pub fn lines(input: impl BufRead) -> io::Result<Source> {
		let options = input.lines().collect::<io::Result<Vec<_>>>()?;

		if options.is_empty() {
			logger::warning("no options specified");
		} else if options.len() == 1 {
			logger::warning("only one option specified. Did you mean -t?");
		}

		Ok(Source::List(options))
	}

	pub fn tokens(input: impl BufRead) -> io::Result<Source> {
		let mut options = Vec::new();
		for line in input.lines() {
			options.extend(line?.split_whitespace().map(str::to_owned));
		}

		Ok(Source::List(options))
	}

	/// Population size, where the population is explicit.
	pub fn len(&self) -> Option<usize> {
		match self {
			Source::List(options) => Some(options.len()),
			_ => None,
		}
	}

	/// One uniformly random value, or `None` when there is nothing to
	/// draw from.
	pub fn draw(&self) -> Option<Value> {
		match self {
			Source::Coin => random::pick(&COIN_FACES).map(|face| Value::Text(face.to_string())),
			Source::Range(n) => Some(Value::Int(random::from_range(1..=*n))),
			Source::List(options) => random::pick(options).map(|option| Value::Text(option.clone())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	#[test]
	fn lines_reads_every_line() {
		let source = Source::lines(Cursor::new("a\nb\nc\n")).unwrap();
		assert_eq!(
			source,
			Source::List(vec!["a".to_string(), "b".to_string(), "c".to_string()])
		);
		assert_eq!(source.len(), Some(3));
	}

	#[test]
	fn lines_keep_inner_whitespace() {
		let source = Source::lines(Cursor::new("one two\nthree\n")).unwrap();
		assert_eq!(
			source,
			Source::List(vec!["one two".to_string(), "three".to_string()])
		);
	}

	#[test]
	fn tokens_flatten_across_lines() {
		let source = Source::tokens(Cursor::new("a b\n  c\td\n")).unwrap();
		assert_eq!(
			source,
			Source::List(vec![
				"a".to_string(),
				"b".to_string(),
				"c".to_string(),
				"d".to_string()
			])
		);
	}

	#[test]
	fn empty_input_is_an_empty_population() {
		let source = Source::lines(Cursor::new("")).unwrap();
		assert_eq!(source.len(), Some(0));
		assert_eq!(source.draw(), None);
	}

	#[test]
	fn coin_draws_a_face() {
		for _ in 0..32 {
			match Source::Coin.draw() {
				Some(Value::Text(face)) => assert!(COIN_FACES.contains(&face.as_str())),
				other => panic!("unexpected draw: {:?}", other),
			}
		}
	}

	#[test]
	fn range_draws_stay_in_bounds() {
		let source = Source::Range(6);
		for _ in 0..200 {
			match source.draw() {
				Some(Value::Int(n)) => assert!((1..=6).contains(&n)),
				other => panic!("unexpected draw: {:?}", other),
			}
		}
	}

	#[test]
	fn synthetic_sources_have_no_explicit_size() {
		assert_eq!(Source::Coin.len(), None);
		assert_eq!(Source::Range(10).len(), None);
	}

	#[test]
	fn values_display_bare() {
		assert_eq!(Value::Int(5).to_string(), "5");
		assert_eq!(Value::Text("heads".to_string()).to_string(), "heads");
	}
}
