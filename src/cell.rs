//! Cell values of the header and the data matrix.

use std::borrow::Cow;

use serde::Serialize;

use crate::view::{ElementView, IntoView, View};

/// One row of the data matrix, aligned positionally with the header.
pub type Row = Vec<CellValue>;

/// A header label or a body cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
	/// Plain text.
	Text(String),
	/// A number, displayed the way the browser would print it.
	Number(f64),
	/// An arbitrary renderable node.
	Node(View),
}

impl CellValue {
	/// Returns the text if this is a text cell.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			CellValue::Text(text) => Some(text),
			_ => None,
		}
	}

	/// Returns the number if this is a numeric cell.
	pub fn as_number(&self) -> Option<f64> {
		match self {
			CellValue::Number(number) => Some(*number),
			_ => None,
		}
	}

	/// Returns the node if this is a node cell.
	pub fn as_node(&self) -> Option<&View> {
		match self {
			CellValue::Node(view) => Some(view),
			_ => None,
		}
	}

	/// Returns the string form used for cell keys.
	///
	/// Nodes are labelled by their rendered HTML.
	pub fn label(&self) -> Cow<'_, str> {
		match self {
			CellValue::Text(text) => Cow::Borrowed(text),
			CellValue::Number(number) => Cow::Owned(format_number(*number)),
			CellValue::Node(view) => Cow::Owned(view.render_to_string()),
		}
	}
}

/// Formats a number like JavaScript's `String(n)`.
///
/// Plain decimal notation is used for magnitudes in `[1e-6, 1e21)`, exponent
/// notation (`1e+21`, `1.23e-18`) outside that range.
pub(crate) fn format_number(number: f64) -> String {
	if number.is_nan() {
		return "NaN".to_string();
	}
	let sign = if number < 0.0 { "-" } else { "" };
	if number.is_infinite() {
		return format!("{sign}Infinity");
	}
	if number == 0.0 {
		// -0 prints as 0
		return "0".to_string();
	}

	// `{:e}` yields the shortest round-tripping digits, e.g. "1.23e-18".
	let scientific = format!("{:e}", number.abs());
	let Some((mantissa, exponent)) = scientific.split_once('e') else {
		return number.to_string();
	};
	let Ok(exponent) = exponent.parse::<i32>() else {
		return number.to_string();
	};
	let digits = mantissa.replace('.', "");
	let k = digits.len() as i32;
	let n = exponent + 1;

	let body = if k <= n && n <= 21 {
		format!("{digits}{}", "0".repeat((n - k) as usize))
	} else if 0 < n && n <= 21 {
		let (int, frac) = digits.split_at(n as usize);
		format!("{int}.{frac}")
	} else if -6 < n && n <= 0 {
		format!("0.{}{digits}", "0".repeat(-n as usize))
	} else {
		let exp_sign = if n - 1 < 0 { '-' } else { '+' };
		let (first, rest) = digits.split_at(1);
		let exp = (n - 1).abs();
		if rest.is_empty() {
			format!("{first}e{exp_sign}{exp}")
		} else {
			format!("{first}.{rest}e{exp_sign}{exp}")
		}
	};
	format!("{sign}{body}")
}

impl From<&str> for CellValue {
	fn from(text: &str) -> Self {
		CellValue::Text(text.to_string())
	}
}

impl From<String> for CellValue {
	fn from(text: String) -> Self {
		CellValue::Text(text)
	}
}

impl From<f64> for CellValue {
	fn from(number: f64) -> Self {
		CellValue::Number(number)
	}
}

impl From<i32> for CellValue {
	fn from(number: i32) -> Self {
		CellValue::Number(f64::from(number))
	}
}

impl From<u32> for CellValue {
	fn from(number: u32) -> Self {
		CellValue::Number(f64::from(number))
	}
}

impl From<i64> for CellValue {
	fn from(number: i64) -> Self {
		CellValue::Number(number as f64)
	}
}

impl From<u64> for CellValue {
	fn from(number: u64) -> Self {
		CellValue::Number(number as f64)
	}
}

impl From<usize> for CellValue {
	fn from(number: usize) -> Self {
		CellValue::Number(number as f64)
	}
}

impl From<View> for CellValue {
	fn from(view: View) -> Self {
		CellValue::Node(view)
	}
}

impl From<ElementView> for CellValue {
	fn from(element: ElementView) -> Self {
		CellValue::Node(element.into_view())
	}
}

impl IntoView for CellValue {
	fn into_view(self) -> View {
		match self {
			CellValue::Text(text) => View::text(text),
			CellValue::Number(number) => View::text(format_number(number)),
			CellValue::Node(view) => view,
		}
	}
}

/// Builds a [`Row`] (or header) from heterogeneous values.
///
/// ```
/// use reinhardt_table_view::{CellValue, cells};
///
/// let row = cells!["Okayu", 10];
/// assert_eq!(row, vec![CellValue::from("Okayu"), CellValue::from(10)]);
/// ```
#[macro_export]
macro_rules! cells {
	($($value:expr),* $(,)?) => {
		vec![$($crate::CellValue::from($value)),*]
	};
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(10.0, "10")]
	#[case(-1.0, "-1")]
	#[case(1.5, "1.5")]
	#[case(-0.0, "0")]
	#[case(f64::NAN, "NaN")]
	#[case(f64::INFINITY, "Infinity")]
	#[case(f64::NEG_INFINITY, "-Infinity")]
	#[case(123456789.0, "123456789")]
	#[case(0.000001, "0.000001")]
	#[case(-0.25, "-0.25")]
	#[case(1e20, "100000000000000000000")]
	#[case(1e21, "1e+21")]
	#[case(-1.5e300, "-1.5e+300")]
	#[case(1e-7, "1e-7")]
	#[case(123e-20, "1.23e-18")]
	fn test_format_number(#[case] number: f64, #[case] expected: &str) {
		assert_eq!(format_number(number), expected);
	}

	#[rstest]
	fn test_label_of_node_is_rendered_html() {
		let cell = CellValue::from(ElementView::new("b").child("Fox"));
		assert_eq!(cell.label(), "<b>Fox</b>");
	}

	#[rstest]
	fn test_accessors() {
		assert_eq!(CellValue::from("a").as_text(), Some("a"));
		assert_eq!(CellValue::from(3).as_number(), Some(3.0));
		assert!(CellValue::from(3).as_text().is_none());
		assert!(CellValue::from(View::empty()).as_node().is_some());
	}

	#[rstest]
	fn test_wide_integers_build_numbers() {
		let id: usize = 7;
		let total: i64 = -12;
		let size: u64 = 1 << 40;
		let row = cells![id, total, size];
		assert_eq!(row[0].as_number(), Some(7.0));
		assert_eq!(row[1].label(), "-12");
		assert_eq!(row[2].label(), "1099511627776");
	}

	#[rstest]
	fn test_exponent_labels() {
		assert_eq!(CellValue::from(1e21).label(), "1e+21");
		assert_eq!(CellValue::from(1e-7).label(), "1e-7");
	}

	#[rstest]
	fn test_into_view_number() {
		assert_eq!(CellValue::from(-1).into_view().render_to_string(), "-1");
	}

	#[rstest]
	fn test_serialize_untagged() {
		let row = cells!["Okayu", 10];
		assert_eq!(
			serde_json::to_value(&row).unwrap(),
			serde_json::json!(["Okayu", 10.0])
		);
	}
}
