//! Table component properties.

use crate::cell::{CellValue, Row};
use crate::class_name::{ClassEntry, ClassName};
use crate::inject::{CellAttrs, DataAttrs, HeaderAttrs, HeaderCellAttrs, RowAttrs};
use crate::key::DataKey;
use crate::theme::TableTheme;
use crate::view::{IntoView, View};

/// Input of a table render.
///
/// Every field is optional; an unset collection renders as empty and an unset
/// class or attribute source contributes nothing.
///
/// # Example
///
/// ```
/// use reinhardt_table_view::{CellValue, ClassEntry, ClassName, TableProps, cells};
///
/// let props = TableProps::new()
/// 	.header(cells!["name", "type", "value"])
/// 	.data([cells!["Okayu", "Fox", 10], cells!["Korone", "Fox", -1]])
/// 	.data_key("name")
/// 	.wrapper_class("wrapper")
/// 	.cells_width([100, 96, 60])
/// 	.all_th_class("title row")
/// 	.all_td_class("row")
/// 	.tr_class("hover-effect")
/// 	.td_class(ClassName::<CellValue>::per_index([
/// 		ClassEntry::from(""),
/// 		ClassEntry::from(""),
/// 		ClassEntry::conditional(|value: &CellValue, _| {
/// 			let number = value.as_number()?;
/// 			Some(if number >= 0.0 { "text-green" } else { "text-red" })
/// 		}),
/// 	]));
///
/// assert_eq!(props.rows().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableProps {
	pub(crate) header: Vec<CellValue>,
	pub(crate) data: Vec<Row>,
	pub(crate) data_key: DataKey,

	pub(crate) wrapper_class: Option<String>,
	pub(crate) class: Option<String>,
	pub(crate) cells_width: Vec<u32>,

	pub(crate) thead_class: Option<String>,
	pub(crate) th_class: Option<ClassName<CellValue>>,
	pub(crate) all_th_class: Option<String>,

	pub(crate) tbody_class: Option<String>,
	pub(crate) tr_class: Option<ClassName<[CellValue]>>,
	pub(crate) td_class: Option<ClassName<CellValue>>,
	pub(crate) all_td_class: Option<String>,

	pub(crate) before_table: Option<View>,
	pub(crate) after_table: Option<View>,

	pub(crate) table_attrs: Option<DataAttrs>,
	pub(crate) thead_attrs: Option<HeaderAttrs>,
	pub(crate) th_attrs: Option<HeaderCellAttrs>,
	pub(crate) tbody_attrs: Option<DataAttrs>,
	pub(crate) tr_attrs: Option<RowAttrs>,
	pub(crate) td_attrs: Option<CellAttrs>,
}

impl TableProps {
	/// Creates empty props.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the header labels; their order defines the column order.
	pub fn header<I, V>(mut self, header: I) -> Self
	where
		I: IntoIterator<Item = V>,
		V: Into<CellValue>,
	{
		self.header = header.into_iter().map(Into::into).collect();
		self
	}

	/// Sets the body rows.
	pub fn data(mut self, data: impl IntoIterator<Item = Row>) -> Self {
		self.data = data.into_iter().collect();
		self
	}

	/// Appends one body row.
	pub fn row(mut self, row: Row) -> Self {
		self.data.push(row);
		self
	}

	/// Sets the column whose values key the body rows.
	pub fn data_key(mut self, data_key: impl Into<DataKey>) -> Self {
		self.data_key = data_key.into();
		self
	}

	/// Sets the class of the wrapper `<section>`.
	pub fn wrapper_class(mut self, class: impl Into<String>) -> Self {
		self.wrapper_class = Some(class.into());
		self
	}

	/// Sets the class of `<table>`.
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}

	/// Sets the minimum width in pixels of each column; `0` leaves a column
	/// unstyled.
	pub fn cells_width(mut self, widths: impl IntoIterator<Item = u32>) -> Self {
		self.cells_width = widths.into_iter().collect();
		self
	}

	/// Sets the class of `<thead>`.
	pub fn thead_class(mut self, class: impl Into<String>) -> Self {
		self.thead_class = Some(class.into());
		self
	}

	/// Sets the class configuration of header cells.
	pub fn th_class(mut self, class: impl Into<ClassName<CellValue>>) -> Self {
		self.th_class = Some(class.into());
		self
	}

	/// Sets the class added to every header cell.
	pub fn all_th_class(mut self, class: impl Into<String>) -> Self {
		self.all_th_class = Some(class.into());
		self
	}

	/// Sets the class of `<tbody>`.
	pub fn tbody_class(mut self, class: impl Into<String>) -> Self {
		self.tbody_class = Some(class.into());
		self
	}

	/// Sets the class configuration of body rows.
	pub fn tr_class(mut self, class: impl Into<ClassName<[CellValue]>>) -> Self {
		self.tr_class = Some(class.into());
		self
	}

	/// Sets the class configuration of body cells.
	pub fn td_class(mut self, class: impl Into<ClassName<CellValue>>) -> Self {
		self.td_class = Some(class.into());
		self
	}

	/// Sets the class added to every body cell.
	pub fn all_td_class(mut self, class: impl Into<String>) -> Self {
		self.all_td_class = Some(class.into());
		self
	}

	/// Sets content rendered before `<table>`, inside the wrapper.
	pub fn before_table(mut self, content: impl IntoView) -> Self {
		self.before_table = Some(content.into_view());
		self
	}

	/// Sets content rendered after `<table>`, inside the wrapper.
	pub fn after_table(mut self, content: impl IntoView) -> Self {
		self.after_table = Some(content.into_view());
		self
	}

	/// Sets extra attributes of `<table>`.
	pub fn table_attrs(mut self, attrs: impl Into<DataAttrs>) -> Self {
		self.table_attrs = Some(attrs.into());
		self
	}

	/// Sets extra attributes of `<thead>`.
	pub fn thead_attrs(mut self, attrs: impl Into<HeaderAttrs>) -> Self {
		self.thead_attrs = Some(attrs.into());
		self
	}

	/// Sets extra attributes of header cells.
	pub fn th_attrs(mut self, attrs: impl Into<HeaderCellAttrs>) -> Self {
		self.th_attrs = Some(attrs.into());
		self
	}

	/// Sets extra attributes of `<tbody>`.
	pub fn tbody_attrs(mut self, attrs: impl Into<DataAttrs>) -> Self {
		self.tbody_attrs = Some(attrs.into());
		self
	}

	/// Sets extra attributes of body rows.
	pub fn tr_attrs(mut self, attrs: impl Into<RowAttrs>) -> Self {
		self.tr_attrs = Some(attrs.into());
		self
	}

	/// Sets extra attributes of body cells.
	pub fn td_attrs(mut self, attrs: impl Into<CellAttrs>) -> Self {
		self.td_attrs = Some(attrs.into());
		self
	}

	/// Applies a theme.
	///
	/// Values set in the theme replace the current ones; values the theme
	/// leaves unset (or empty lists) keep the current configuration.
	pub fn theme(mut self, theme: TableTheme) -> Self {
		let TableTheme {
			wrapper_class,
			class,
			thead_class,
			th_class,
			all_th_class,
			tbody_class,
			tr_class,
			td_class,
			all_td_class,
			cells_width,
		} = theme;

		self.wrapper_class = wrapper_class.or(self.wrapper_class);
		self.class = class.or(self.class);
		self.thead_class = thead_class.or(self.thead_class);
		self.all_th_class = all_th_class.or(self.all_th_class);
		self.tbody_class = tbody_class.or(self.tbody_class);
		self.all_td_class = all_td_class.or(self.all_td_class);
		if let Some(tr_class) = tr_class {
			self.tr_class = Some(ClassName::Static(tr_class));
		}
		if !th_class.is_empty() {
			self.th_class = Some(ClassName::per_index(
				th_class.into_iter().map(ClassEntry::<CellValue>::from),
			));
		}
		if !td_class.is_empty() {
			self.td_class = Some(ClassName::per_index(
				td_class.into_iter().map(ClassEntry::<CellValue>::from),
			));
		}
		if !cells_width.is_empty() {
			self.cells_width = cells_width.into_iter().map(Option::unwrap_or_default).collect();
		}
		self
	}

	/// Returns the header labels.
	pub fn header_cells(&self) -> &[CellValue] {
		&self.header
	}

	/// Returns the body rows.
	pub fn rows(&self) -> &[Row] {
		&self.data
	}

	/// Returns the configured minimum width of `column`, if any.
	pub fn column_width(&self, column: usize) -> Option<u32> {
		self.cells_width.get(column).copied().filter(|width| *width > 0)
	}
}
