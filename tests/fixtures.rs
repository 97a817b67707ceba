//! Common test fixtures for reinhardt-table-view tests

#![allow(dead_code)]

use reinhardt_table_view::{
	CellValue, ClassEntry, ClassName, ElementView, Row, TableProps, View, cells,
};
use rstest::*;

/// Header of the VTuber table
#[fixture]
pub fn vtuber_header() -> Vec<CellValue> {
	cells!["name", "type", "value"]
}

/// Rows of the VTuber table, with a node in the second column
#[fixture]
pub fn vtuber_data() -> Vec<Row> {
	vec![
		cells!["Okayu", ElementView::new("b").child("Fox"), 10],
		cells!["Korone", ElementView::new("u").child("Fox"), -1],
		cells!["Fubuki", ElementView::new("i").child("Fox"), 50],
	]
}

/// Sign-based class for numeric cells
pub fn sign_class() -> ClassEntry<CellValue> {
	ClassEntry::conditional(|value: &CellValue, _| {
		let number = value.as_number()?;
		Some(if number >= 0.0 { "text-green" } else { "text-red" })
	})
}

/// Fully styled VTuber table
#[fixture]
pub fn vtuber_props(vtuber_header: Vec<CellValue>, vtuber_data: Vec<Row>) -> TableProps {
	TableProps::new()
		.header(vtuber_header)
		.data(vtuber_data)
		.data_key("name")
		.wrapper_class("wrapper")
		.class("table")
		.cells_width([100, 96, 60])
		.all_th_class("title row")
		.all_td_class("row")
		.tr_class("hover-effect")
		.th_class(ClassName::<CellValue>::per_index(["text-blue"]))
		.td_class(ClassName::<CellValue>::per_index([
			ClassEntry::from(""),
			ClassEntry::from(""),
			sign_class(),
		]))
}

/// Returns the `<table>` element of a rendered view
pub fn table_of(view: &View) -> &ElementView {
	view.as_element()
		.and_then(|section| section.find_child("table"))
		.expect("rendered view has a <table>")
}

/// Returns the header cells of a rendered view
pub fn header_cells(view: &View) -> Vec<&ElementView> {
	table_of(view)
		.find_child("thead")
		.and_then(|thead| thead.find_child("tr"))
		.expect("rendered view has a header row")
		.child_elements()
		.collect()
}

/// Returns the body rows of a rendered view
pub fn body_rows(view: &View) -> Vec<&ElementView> {
	table_of(view)
		.find_child("tbody")
		.expect("rendered view has a <tbody>")
		.child_elements()
		.collect()
}
