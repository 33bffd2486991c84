use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::source::{Source, Value};
use crate::util::logger;

/// Wall-clock budget for collecting unique values.
pub const SAMPLE_TIMEOUT: Duration = Duration::from_secs(1);

/// Draws until `repeat` distinct values are collected, rejecting
/// duplicates by value. The deadline is checked once per draw attempt;
/// when it passes, whatever was collected so far is returned as a
/// degraded result and a warning goes to the error stream.
pub fn sample_unique(source: &Source, repeat: usize, deadline: Instant) -> Vec<Value> {
	let mut results = Vec::new();
	let mut seen: HashSet<Value> = HashSet::new();

	while seen.len() < repeat {
		let Some(value) = source.draw() else {
			break;
		};

		if seen.insert(value.clone()) {
			results.push(value);
		}

		if Instant::now() >= deadline {
			logger::warning_fmt!(
				"timeout exceeded when generating results after {} of {} values. The repeat count may be too high.",
				results.len(),
				repeat
			);
			break;
		}
	}

	results
}

/// Draws exactly `repeat` times, duplicates allowed. Always terminates,
/// so no deadline applies.
pub fn sample(source: &Source, repeat: usize) -> Vec<Value> {
	(0..repeat).filter_map(|_| source.draw()).collect()
}
