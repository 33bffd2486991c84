use std::io::{self, Write};

use itertools::Itertools;

use crate::source::Value;

/// Separator scheme for the result set. `Space` is the implicit default
/// when no delimiter flag is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
	#[default]
	Space,
	Newline,
	Null,
	Comma,
}

/// Writes every result to `out`. Null and comma modes terminate each
/// value, including the last; space mode joins everything on one line.
pub fn write_results(out: &mut impl Write, results: &[Value], delimiter: Delimiter) -> io::Result<()> {
	match delimiter {
		Delimiter::Newline => {
			for value in results {
				writeln!(out, "{}", value)?;
			}
		}
		Delimiter::Null => {
			for value in results {
				write!(out, "{}\0", value)?;
			}
		}
		Delimiter::Comma => {
			for value in results {
				write!(out, "{},", value)?;
			}
		}
		Delimiter::Space => {
			writeln!(out, "{}", results.iter().join(" "))?;
		}
	}

	out.flush()
}
