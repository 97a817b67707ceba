//! Identity keys for header cells, body rows and body cells.
//!
//! Keys let a host framework match elements between two renders. They are
//! derived from the data itself when a textual value is available and fall
//! back to the element's position otherwise.

use std::fmt;

use serde::Serialize;

use crate::cell::CellValue;

/// Identity key attached to an element of the render tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Key {
	/// Key derived from a textual value.
	Named(String),
	/// Positional key.
	Index(usize),
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Key::Named(name) => f.write_str(name),
			Key::Index(index) => write!(f, "{index}"),
		}
	}
}

impl From<&str> for Key {
	fn from(name: &str) -> Self {
		Key::Named(name.to_string())
	}
}

impl From<String> for Key {
	fn from(name: String) -> Self {
		Key::Named(name)
	}
}

impl From<usize> for Key {
	fn from(index: usize) -> Self {
		Key::Index(index)
	}
}

/// Selects the column whose values identify body rows.
///
/// A label is looked up in the header by value (first match wins); an index
/// is used as is. Defaults to the first column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataKey {
	/// Header label to look up.
	Label(String),
	/// Column index.
	Index(usize),
}

impl Default for DataKey {
	fn default() -> Self {
		DataKey::Index(0)
	}
}

impl From<&str> for DataKey {
	fn from(label: &str) -> Self {
		DataKey::Label(label.to_string())
	}
}

impl From<String> for DataKey {
	fn from(label: String) -> Self {
		DataKey::Label(label)
	}
}

impl From<usize> for DataKey {
	fn from(index: usize) -> Self {
		DataKey::Index(index)
	}
}

/// Returns the key of a header cell: its text, or its column position.
pub fn header_key(value: &CellValue, position: usize) -> Key {
	match value.as_text() {
		Some(text) => Key::Named(text.to_string()),
		None => Key::Index(position),
	}
}

/// Returns the key of a body cell.
///
/// The key pairs the column's header label with the cell value
/// (`"<header>-<value>"`). Two cells of the same row sharing both header
/// label and value get the same key; callers rendering such data should
/// expect the host framework to treat them as one identity.
pub fn cell_key(header_label: Option<&CellValue>, value: &CellValue) -> Key {
	let header = header_label.map(CellValue::label).unwrap_or_default();
	Key::Named(format!("{header}-{}", value.label()))
}

/// Row key resolver, built once per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySelector {
	column: Option<usize>,
}

impl KeySelector {
	/// Resolves `data_key` against `header`.
	///
	/// A label missing from the header selects no column, so every row falls
	/// back to its position.
	pub fn new(data_key: &DataKey, header: &[CellValue]) -> Self {
		let column = match data_key {
			DataKey::Label(label) => header
				.iter()
				.position(|value| value.as_text() == Some(label.as_str())),
			DataKey::Index(index) => Some(*index),
		};
		Self { column }
	}

	/// Returns the resolved key column, if any.
	pub fn column(&self) -> Option<usize> {
		self.column
	}

	/// Returns the key of the row at `position`.
	///
	/// Text in the key column becomes the key; numbers, nodes and missing
	/// cells fall back to the row position.
	pub fn row_key(&self, row: &[CellValue], position: usize) -> Key {
		self.column
			.and_then(|column| row.get(column))
			.and_then(CellValue::as_text)
			.map_or(Key::Index(position), |text| Key::Named(text.to_string()))
	}
}
