//! The table render pass.

use tracing::{debug, trace};

use crate::cell::CellValue;
use crate::class_name::{join_classes, resolve};
use crate::inject::{CellPosition, merge};
use crate::key::{KeySelector, cell_key, header_key};
use crate::props::TableProps;
use crate::view::{Attributes, ElementView, IntoView, STYLE, Style, View};

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Renders `props` into a view tree.
///
/// The pass is pure: rows and columns keep their input order, nothing is
/// cached between calls and rendering the same props twice yields equal
/// trees. Caller callbacks run synchronously during the pass; a panic in one
/// of them propagates to the caller.
///
/// ```mermaid
/// graph TD
///     S[section.wrapper_class] --> B[before_table]
///     S --> T[table]
///     S --> A[after_table]
///     T --> H[thead]
///     T --> Y[tbody]
///     H --> HR[tr]
///     HR --> TH[th per header label]
///     Y --> TR[tr per data row]
///     TR --> TD[td per row value]
/// ```
pub fn render_table(props: &TableProps) -> View {
	let data = props.rows();
	debug!(
		columns = props.header_cells().len(),
		rows = data.len(),
		"rendering table"
	);

	let table_attrs = props
		.table_attrs
		.as_ref()
		.and_then(|source| source.resolve(|f| f(data)));
	let table = ElementView::new("table")
		.with_attrs(merge(
			Attributes::new(),
			static_class(props.class.as_deref()),
			table_attrs,
		))
		.child(render_head(props))
		.child(render_body(props));

	ElementView::new("section")
		.with_attrs(merge(
			Attributes::new(),
			static_class(props.wrapper_class.as_deref()),
			None,
		))
		.children(props.before_table.iter())
		.child(table)
		.children(props.after_table.iter())
		.into_view()
}

fn static_class(class: Option<&str>) -> Option<String> {
	join_classes([class])
}

fn render_head(props: &TableProps) -> ElementView {
	let header = props.header_cells();
	let extra = props
		.thead_attrs
		.as_ref()
		.and_then(|source| source.resolve(|f| f(header)));
	let cells = header
		.iter()
		.enumerate()
		.map(|(column, label)| render_header_cell(props, label, column));

	ElementView::new("thead")
		.with_attrs(merge(
			Attributes::new(),
			static_class(props.thead_class.as_deref()),
			extra,
		))
		.child(ElementView::new("tr").children(cells))
}

fn render_header_cell(props: &TableProps, label: &CellValue, column: usize) -> ElementView {
	let class = resolve(
		props.th_class.as_ref(),
		label,
		column,
		props.all_th_class.as_deref(),
	);

	let mut base = Attributes::new();
	if let Some(width) = props.column_width(column) {
		base.set(STYLE, Style::new().set("min-width", format!("{width}px")));
	}

	let extra = props
		.th_attrs
		.as_ref()
		.and_then(|source| source.resolve(|f| f(label, column)));

	ElementView::new("th")
		.with_key(header_key(label, column))
		.with_attrs(merge(base, class, extra))
		.child(label.clone())
}

fn render_body(props: &TableProps) -> ElementView {
	let data = props.rows();
	let keys = KeySelector::new(&props.data_key, props.header_cells());
	let extra = props
		.tbody_attrs
		.as_ref()
		.and_then(|source| source.resolve(|f| f(data)));
	let rows = data
		.iter()
		.enumerate()
		.map(|(index, row)| render_row(props, &keys, row, index));

	ElementView::new("tbody")
		.with_attrs(merge(
			Attributes::new(),
			static_class(props.tbody_class.as_deref()),
			extra,
		))
		.children(rows)
}

fn render_row(props: &TableProps, keys: &KeySelector, row: &[CellValue], index: usize) -> ElementView {
	let columns = props.header_cells().len();
	if row.len() != columns {
		trace!(row = index, cells = row.len(), columns, "row length differs from header");
	}

	let class = resolve(props.tr_class.as_ref(), row, index, None);
	let extra = props
		.tr_attrs
		.as_ref()
		.and_then(|source| source.resolve(|f| f(row, index)));
	let cells = row.iter().enumerate().map(|(column, value)| {
		render_cell(props, value, CellPosition { column, row: index })
	});

	ElementView::new("tr")
		.with_key(keys.row_key(row, index))
		.with_attrs(merge(Attributes::new(), class, extra))
		.children(cells)
}

fn render_cell(props: &TableProps, value: &CellValue, position: CellPosition) -> ElementView {
	let class = resolve(
		props.td_class.as_ref(),
		value,
		position.column,
		props.all_td_class.as_deref(),
	);
	let extra = props
		.td_attrs
		.as_ref()
		.and_then(|source| source.resolve(|f| f(value, position)));

	ElementView::new("td")
		.with_key(cell_key(props.header_cells().get(position.column), value))
		.with_attrs(merge(Attributes::new(), class, extra))
		.child(value.clone())
}
