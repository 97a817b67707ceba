//! Serializable styling presets.
//!
//! A [`TableTheme`] holds the static part of a table's styling: class names
//! and column widths. It can be shared between tables, stored as JSON next to
//! the stylesheet it refers to, and applied with
//! [`TableProps::theme`](crate::TableProps::theme).

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// Static class names and column widths of a table.
///
/// # Example
///
/// ```
/// use reinhardt_table_view::TableTheme;
///
/// let theme = TableTheme::from_json(r#"{
/// 	"wrapper_class": "wrapper",
/// 	"all_td_class": "row",
/// 	"cells_width": [100, 96, null]
/// }"#).unwrap();
///
/// assert_eq!(theme.wrapper_class.as_deref(), Some("wrapper"));
/// assert_eq!(theme.cells_width, vec![Some(100), Some(96), None]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableTheme {
	/// Class of the wrapper `<section>`.
	pub wrapper_class: Option<String>,
	/// Class of `<table>`.
	pub class: Option<String>,
	/// Class of `<thead>`.
	pub thead_class: Option<String>,
	/// Per-column classes of header cells.
	pub th_class: Vec<String>,
	/// Class of every header cell.
	pub all_th_class: Option<String>,
	/// Class of `<tbody>`.
	pub tbody_class: Option<String>,
	/// Class of every body row.
	pub tr_class: Option<String>,
	/// Per-column classes of body cells.
	pub td_class: Vec<String>,
	/// Class of every body cell.
	pub all_td_class: Option<String>,
	/// Minimum width in pixels per column; `null` leaves a column unstyled.
	pub cells_width: Vec<Option<u32>>,
}

impl TableTheme {
	/// Parses and validates a theme from JSON.
	pub fn from_json(json: &str) -> Result<Self> {
		let theme: Self = serde_json::from_str(json)?;
		theme.validate()?;
		Ok(theme)
	}

	/// Serializes the theme to pretty-printed JSON.
	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string_pretty(self)?)
	}

	/// Checks that every configured width is positive.
	pub fn validate(&self) -> Result<()> {
		for (column, width) in self.cells_width.iter().enumerate() {
			if let Some(0) = width {
				return Err(TableError::InvalidWidth { column, value: 0 });
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_empty_document_is_default() {
		assert_eq!(TableTheme::from_json("{}").unwrap(), TableTheme::default());
	}

	#[rstest]
	fn test_zero_width_is_rejected() {
		let err = TableTheme::from_json(r#"{"cells_width": [100, 0]}"#).unwrap_err();
		assert!(matches!(err, TableError::InvalidWidth { column: 1, value: 0 }));
		assert_eq!(
			err.to_string(),
			"column 1 has invalid width 0; widths must be positive"
		);
	}

	#[rstest]
	#[case(r#"{"cells_width": [-5]}"#)]
	#[case(r#"{"unknown": true}"#)]
	#[case("not json")]
	fn test_malformed_documents(#[case] json: &str) {
		let err = TableTheme::from_json(json).unwrap_err();
		assert!(matches!(err, TableError::InvalidTheme(_)));
		assert!(err.to_string().starts_with("invalid table theme"));
	}

	#[rstest]
	fn test_json_round_trip() {
		let theme = TableTheme {
			wrapper_class: Some("wrapper".to_string()),
			th_class: vec!["text-blue".to_string()],
			cells_width: vec![Some(100), None],
			..TableTheme::default()
		};
		let json = theme.to_json().unwrap();
		assert_eq!(TableTheme::from_json(&json).unwrap(), theme);
	}
}
