//! Declarative table component for Reinhardt pages
//!
//! This crate turns a header, a matrix of rows and a set of styling options
//! into a [`View`] tree: a wrapper `<section>`, a `<table>` with one header
//! row and one body row per data row, and optional content around the table.
//! The tree is mounted by a host framework, rendered to HTML on the server
//! with [`View::render_to_string`], or serialized with `serde`.
//!
//! # Features
//!
//! - **Class resolution**: static, per-column and conditional class names per
//!   axis, joined with an axis-wide class; empty results omit the attribute
//! - **Keys**: header labels, a configurable key column for rows, and
//!   `"<header>-<value>"` keys for cells
//! - **Attribute injection**: static or computed attributes per element kind,
//!   never overriding the resolved class
//! - **Themes**: class names and column widths loaded from JSON
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     P[TableProps] --> R[render_table]
//!     T[TableTheme] --> P
//!     R --> C[class_name::resolve]
//!     R --> K[KeySelector]
//!     R --> I[inject::merge]
//!     R --> V[View]
//!     V --> H[render_to_string]
//!     V --> J[serde JSON]
//! ```
//!
//! # Example
//!
//! ```rust
//! use reinhardt_table_view::{CellValue, ClassEntry, ClassName, TableProps, cells, render_table};
//!
//! let props = TableProps::new()
//! 	.header(cells!["name", "type", "value"])
//! 	.data([cells!["Okayu", "Fox", 10], cells!["Korone", "Fox", -1]])
//! 	.data_key("name")
//! 	.all_td_class("row")
//! 	.td_class(ClassName::<CellValue>::per_index([
//! 		ClassEntry::from(""),
//! 		ClassEntry::from(""),
//! 		ClassEntry::conditional(|value: &CellValue, _| {
//! 			let number = value.as_number()?;
//! 			Some(if number >= 0.0 { "text-green" } else { "text-red" })
//! 		}),
//! 	]));
//!
//! let html = render_table(&props).render_to_string();
//! assert!(html.contains("<td class=\"text-green row\">10</td>"));
//! assert!(html.contains("<td class=\"text-red row\">-1</td>"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod cell;
pub mod class_name;
pub mod component;
pub mod error;
pub mod inject;
pub mod key;
pub mod props;
pub mod render;
pub mod theme;
pub mod view;

// Re-exports for convenience
pub use cell::{CellValue, Row};
pub use class_name::{ClassEntry, ClassFn, ClassName};
pub use component::{Component, Table};
pub use error::{Result, TableError};
pub use inject::{
	AttrSource, CellAttrs, CellPosition, DataAttrs, HeaderAttrs, HeaderCellAttrs, RowAttrs,
};
pub use key::{DataKey, Key, KeySelector};
pub use props::TableProps;
pub use render::render_table;
pub use theme::TableTheme;
pub use view::{AttrValue, Attributes, ElementView, EventHandler, IntoView, Style, View};
