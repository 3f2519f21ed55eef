//! Leading-whitespace helpers.

use ropey::RopeSlice;

/// Returns the leading-whitespace prefix of a line.
///
/// Everything before the first non-whitespace character; for a blank or
/// all-whitespace line, the whole line. Line breaks are never part of the
/// prefix, so the result is safe to splice into inserted text.
pub fn indent_prefix(line: RopeSlice) -> String {
	let mut prefix = String::new();
	for c in line.chars() {
		if c == '\n' || c == '\r' || !c.is_whitespace() {
			break;
		}
		prefix.push(c);
	}
	prefix
}

#[cfg(test)]
mod tests {
	use ropey::Rope;

	use super::*;

	fn prefix(text: &str) -> String {
		let rope = Rope::from_str(text);
		indent_prefix(rope.slice(..))
	}

	#[test]
	fn spaces_and_tabs() {
		assert_eq!(prefix("    foo"), "    ");
		assert_eq!(prefix("\t\tbar"), "\t\t");
		assert_eq!(prefix(" \t mixed"), " \t ");
	}

	#[test]
	fn no_indent() {
		assert_eq!(prefix("foo"), "");
	}

	#[test]
	fn whitespace_only_line_is_whole_line() {
		assert_eq!(prefix("   "), "   ");
	}

	#[test]
	fn empty_line() {
		assert_eq!(prefix(""), "");
	}

	#[test]
	fn stops_at_line_break() {
		assert_eq!(prefix("  \n"), "  ");
	}
}
