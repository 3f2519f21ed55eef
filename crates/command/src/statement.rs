//! Statement rendering and caret arithmetic.

use logmoji_primitives::ColIdx;

/// Renders the log statement for a marker and an optional expression.
///
/// The expression is embedded verbatim, not quoted, so the generated call
/// logs its runtime value rather than a string literal.
pub fn build(marker: &str, expr: Option<&str>) -> String {
	match expr {
		Some(expr) => format!("console.log('{marker}', {expr});"),
		None => format!("console.log('{marker}');"),
	}
}

/// Caret column for a freshly inserted statement line.
///
/// Lands immediately before the closing `);`, ready for additional arguments
/// to be typed before the parenthesis. Columns count characters, matching the
/// coordinate space of [`logmoji_primitives::Position`].
pub fn caret_col(indent: &str, statement: &str) -> ColIdx {
	indent.chars().count() + statement.chars().count() - 2
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn with_expression() {
		assert_eq!(build("🚀", Some("foo")), "console.log('🚀', foo);");
	}

	#[test]
	fn without_expression() {
		assert_eq!(build("🚀", None), "console.log('🚀');");
	}

	#[test]
	fn caret_sits_before_closing_paren() {
		let statement = build("🚀", Some("foo"));
		let col = caret_col("  ", &statement);
		let chars: Vec<char> = statement.chars().collect();
		assert_eq!(chars[col - 2], ')');
		assert_eq!(chars[col - 1], ';');
	}

	#[test]
	fn caret_holds_for_multi_char_glyphs() {
		// '⚠️' is two scalar values (U+26A0 U+FE0F).
		let statement = build("⚠️", None);
		let col = caret_col("", &statement);
		let chars: Vec<char> = statement.chars().collect();
		assert_eq!(chars[col], ')');
		assert_eq!(chars[col + 1], ';');
	}
}
