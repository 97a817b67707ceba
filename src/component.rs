//! Component abstraction.

use crate::props::TableProps;
use crate::render::render_table;
use crate::view::{IntoView, View};

/// Trait for reusable UI components.
///
/// A component turns its properties into a [`View`] for the host framework
/// to mount.
pub trait Component: 'static {
	/// Renders the component to a View.
	fn render(&self) -> View;

	/// Returns the component's name for debugging.
	fn name() -> &'static str
	where
		Self: Sized;
}

/// The table component.
///
/// # Example
///
/// ```
/// use reinhardt_table_view::{Component, Table, TableProps, cells};
///
/// let table = Table::new(
/// 	TableProps::new()
/// 		.header(cells!["Name", "Type"])
/// 		.data([cells!["Okayu", "Cat"], cells!["Korone", "Dog"]]),
/// );
///
/// let html = table.render().render_to_string();
/// assert!(html.contains("<td>Okayu</td><td>Cat</td>"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Table {
	props: TableProps,
}

impl Table {
	/// Creates a table component.
	pub fn new(props: TableProps) -> Self {
		Self { props }
	}

	/// Returns the component's properties.
	pub fn props(&self) -> &TableProps {
		&self.props
	}
}

impl Component for Table {
	fn render(&self) -> View {
		render_table(&self.props)
	}

	fn name() -> &'static str {
		"Table"
	}
}

impl From<TableProps> for Table {
	fn from(props: TableProps) -> Self {
		Self::new(props)
	}
}

impl IntoView for Table {
	fn into_view(self) -> View {
		self.render()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cells;
	use crate::view::ElementView;
	use rstest::rstest;

	#[rstest]
	fn test_name() {
		assert_eq!(Table::name(), "Table");
	}

	#[rstest]
	fn test_table_nests_in_views() {
		let table = Table::from(TableProps::new().header(cells!["a"]));
		let page = ElementView::new("main").child(table).into_view();
		assert!(page.render_to_string().starts_with("<main><section><table>"));
	}
}
