//! Caller-supplied attributes for the elements of the table.
//!
//! Every element kind accepts an [`AttrSource`]: either a fixed attribute set
//! or a function of the element's data. The result is merged over the
//! element's computed attributes with [`merge`], which never lets the caller
//! replace the resolved `class`.

use std::fmt;
use std::sync::Arc;

use crate::cell::{CellValue, Row};
use crate::view::{Attributes, CLASS};

/// Position of a body cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPosition {
	/// Column index.
	pub column: usize,
	/// Row index.
	pub row: usize,
}

/// Static attributes or a function producing them.
///
/// `F` is the function's trait object type; see the aliases below for the
/// signature each element kind uses.
pub enum AttrSource<F: ?Sized> {
	/// Attributes applied as is.
	Static(Attributes),
	/// Attributes computed per element; `None` adds nothing.
	Dynamic(Arc<F>),
}

/// Attributes of `<table>` and `<tbody>`, computed from the data matrix.
pub type DataAttrs = AttrSource<dyn Fn(&[Row]) -> Option<Attributes> + Send + Sync>;

/// Attributes of `<thead>`, computed from the header.
pub type HeaderAttrs = AttrSource<dyn Fn(&[CellValue]) -> Option<Attributes> + Send + Sync>;

/// Attributes of a `<th>`, computed from its label and column.
pub type HeaderCellAttrs = AttrSource<dyn Fn(&CellValue, usize) -> Option<Attributes> + Send + Sync>;

/// Attributes of a body `<tr>`, computed from the row and its position.
pub type RowAttrs = AttrSource<dyn Fn(&[CellValue], usize) -> Option<Attributes> + Send + Sync>;

/// Attributes of a `<td>`, computed from its value and position.
pub type CellAttrs = AttrSource<dyn Fn(&CellValue, CellPosition) -> Option<Attributes> + Send + Sync>;

impl<F: ?Sized> AttrSource<F> {
	/// Returns the attributes to merge, calling the function if there is one.
	pub fn resolve(&self, call: impl FnOnce(&F) -> Option<Attributes>) -> Option<Attributes> {
		match self {
			AttrSource::Static(attrs) => Some(attrs.clone()),
			AttrSource::Dynamic(f) => call(f),
		}
	}
}

impl DataAttrs {
	/// Creates a source computed from the data matrix.
	pub fn dynamic<F>(f: F) -> Self
	where
		F: Fn(&[Row]) -> Option<Attributes> + Send + Sync + 'static,
	{
		AttrSource::Dynamic(Arc::new(f))
	}
}

impl HeaderAttrs {
	/// Creates a source computed from the header.
	pub fn dynamic<F>(f: F) -> Self
	where
		F: Fn(&[CellValue]) -> Option<Attributes> + Send + Sync + 'static,
	{
		AttrSource::Dynamic(Arc::new(f))
	}
}

impl HeaderCellAttrs {
	/// Creates a source computed per header cell.
	pub fn dynamic<F>(f: F) -> Self
	where
		F: Fn(&CellValue, usize) -> Option<Attributes> + Send + Sync + 'static,
	{
		AttrSource::Dynamic(Arc::new(f))
	}
}

impl RowAttrs {
	/// Creates a source computed per body row.
	pub fn dynamic<F>(f: F) -> Self
	where
		F: Fn(&[CellValue], usize) -> Option<Attributes> + Send + Sync + 'static,
	{
		AttrSource::Dynamic(Arc::new(f))
	}
}

impl CellAttrs {
	/// Creates a source computed per body cell.
	pub fn dynamic<F>(f: F) -> Self
	where
		F: Fn(&CellValue, CellPosition) -> Option<Attributes> + Send + Sync + 'static,
	{
		AttrSource::Dynamic(Arc::new(f))
	}
}

impl<F: ?Sized> From<Attributes> for AttrSource<F> {
	fn from(attrs: Attributes) -> Self {
		AttrSource::Static(attrs)
	}
}

impl<F: ?Sized> Clone for AttrSource<F> {
	fn clone(&self) -> Self {
		match self {
			AttrSource::Static(attrs) => AttrSource::Static(attrs.clone()),
			AttrSource::Dynamic(f) => AttrSource::Dynamic(Arc::clone(f)),
		}
	}
}

impl<F: ?Sized> fmt::Debug for AttrSource<F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AttrSource::Static(attrs) => f.debug_tuple("Static").field(attrs).finish(),
			AttrSource::Dynamic(_) => f.debug_tuple("Dynamic").field(&"<function>").finish(),
		}
	}
}

/// Builds the final attributes of an element.
///
/// The resolved class comes first, then `base`, then the caller's `extra`
/// attributes, later values replacing earlier ones of the same name. A
/// `class` found in `base` or `extra` is discarded.
pub fn merge(base: Attributes, class: Option<String>, extra: Option<Attributes>) -> Attributes {
	let mut attrs = Attributes::new();
	if let Some(class) = class {
		attrs.set(CLASS, class);
	}
	let extra = extra.into_iter().flatten();
	for (name, value) in base.into_iter().chain(extra) {
		if name != CLASS {
			attrs.set(name, value);
		}
	}
	attrs
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::view::{AttrValue, Style};
	use rstest::rstest;

	#[rstest]
	fn test_merge_order_and_override() {
		let base = Attributes::new().with("style", Style::new().set("min-width", "100px"));
		let extra = Attributes::new().with("title", "t").with("style", "color: red");

		let attrs = merge(base, Some("title row".to_string()), Some(extra));

		let names: Vec<_> = attrs.iter().map(|(n, _)| n).collect();
		assert_eq!(names, vec!["class", "style", "title"]);
		assert_eq!(attrs.class(), Some("title row"));
		assert_eq!(attrs.get("style"), Some(&AttrValue::from("color: red")));
	}

	#[rstest]
	fn test_merge_never_overrides_class() {
		let extra = Attributes::new().with("class", "--odd").with("id", "x");

		let attrs = merge(Attributes::new(), Some("row".to_string()), Some(extra.clone()));
		assert_eq!(attrs.class(), Some("row"));

		let attrs = merge(Attributes::new(), None, Some(extra));
		assert_eq!(attrs.class(), None);
		assert!(attrs.contains("id"));
	}

	#[rstest]
	fn test_merge_without_extra() {
		let attrs = merge(Attributes::new(), None, None);
		assert!(attrs.is_empty());
	}

	#[rstest]
	fn test_static_source_resolves_without_call() {
		let source = CellAttrs::from(Attributes::new().with("title", "t"));
		let attrs = source.resolve(|_| unreachable!("static sources are not called"));
		assert_eq!(attrs.unwrap().get("title"), Some(&AttrValue::from("t")));
	}

	#[rstest]
	fn test_dynamic_cell_source_receives_position() {
		let source = CellAttrs::dynamic(|value, position| {
			(position.column == 1).then(|| {
				Attributes::new().with("data-pos", format!("{}:{}:{}", value.label(), position.row, position.column))
			})
		});

		let hit = source.resolve(|f| f(&CellValue::from("Cat"), CellPosition { column: 1, row: 3 }));
		assert_eq!(hit.unwrap().get("data-pos"), Some(&AttrValue::from("Cat:3:1")));

		let miss = source.resolve(|f| f(&CellValue::from("Cat"), CellPosition { column: 0, row: 3 }));
		assert!(miss.is_none());
	}

	#[rstest]
	fn test_dynamic_row_source() {
		let source = RowAttrs::dynamic(|row, index| {
			Some(Attributes::new().with("data-size", format!("{}x{index}", row.len())))
		});
		let row = vec![CellValue::from("a")];
		let attrs = source.resolve(|f| f(&row, 2)).unwrap();
		assert_eq!(attrs.get("data-size"), Some(&AttrValue::from("1x2")));
	}
}
