#![allow(dead_code)]

//! Leveled messages for the error stream. Stdout is reserved for results,
//! so everything here goes to stderr.

use chrono::Utc;
use colored::Colorize;
use lazy_static::lazy_static;

lazy_static! {
	static ref DEBUG_TEXT: String = format!("[{:7}]", "DEBUG".green());
	static ref INFO_TEXT: String = format!("[{:7}]", "INFO".cyan());
	static ref WARNING_TEXT: String = format!("[{:7}]", "WARNING".yellow());
	static ref ERROR_TEXT: String = format!("[{:7}]", "ERROR".red());
}

#[macro_export]
macro_rules! debug_fmt {
  ($($tt:tt)*) => {
    $crate::util::logger::debug(&format!($($tt)*));
  };
}

#[macro_export]
macro_rules! info_fmt {
  ($($tt:tt)*) => {
    $crate::util::logger::info(&format!($($tt)*));
  };
}

#[macro_export]
macro_rules! warning_fmt {
  ($($tt:tt)*) => {
    $crate::util::logger::warning(&format!($($tt)*));
  };
}

#[macro_export]
macro_rules! error_fmt {
  ($($tt:tt)*) => {
    $crate::util::logger::error(&format!($($tt)*));
  };
}

#[allow(unused_imports)]
pub(crate) use debug_fmt;
#[allow(unused_imports)]
pub(crate) use error_fmt;
#[allow(unused_imports)]
pub(crate) use info_fmt;
#[allow(unused_imports)]
pub(crate) use warning_fmt;

pub fn debug(text: &str) {
	print_message(&DEBUG_TEXT, text);
}

pub fn info(text: &str) {
	print_message(&INFO_TEXT, text);
}

pub fn warning(text: &str) {
	print_message(&WARNING_TEXT, text);
}

pub fn error(text: &str) {
	print_message(&ERROR_TEXT, text);
}

fn print_message(level: &str, text: &str) {
	let time_str = Utc::now().format("%H:%M:%S%.3f");
	eprintln!("[{}]{} {}", time_str, level, text);
}
