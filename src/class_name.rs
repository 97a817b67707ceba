//! Class name resolution for header cells, body rows and body cells.
//!
//! Each axis is configured with a [`ClassName`]: one static class for every
//! element, a per-position list, or a function of the element's value and
//! position. The resolved class is then joined with the axis-wide class
//! (`all_th_class` / `all_td_class`). When both sides are empty the element
//! gets no `class` attribute at all.

use std::fmt;
use std::sync::Arc;

/// Conditional class function, called with the element's value and position.
///
/// Returning `None` or an empty string means "no class".
pub type ClassFn<T> = Arc<dyn Fn(&T, usize) -> Option<String> + Send + Sync>;

/// One entry of a per-position class list.
pub enum ClassEntry<T: ?Sized> {
	/// Fixed class.
	Static(String),
	/// Class computed from the element.
	Conditional(ClassFn<T>),
}

/// Class configuration of one axis.
///
/// # Example
///
/// ```
/// use reinhardt_table_view::{CellValue, ClassEntry, ClassName};
///
/// let td: ClassName<CellValue> = ClassName::per_index([
/// 	ClassEntry::from(""),
/// 	ClassEntry::from(""),
/// 	ClassEntry::conditional(|value: &CellValue, _| {
/// 		let number = value.as_number()?;
/// 		Some(if number >= 0.0 { "text-green" } else { "text-red" })
/// 	}),
/// ]);
///
/// assert_eq!(td.evaluate(&CellValue::from(-1), 2).as_deref(), Some("text-red"));
/// assert_eq!(td.evaluate(&CellValue::from(-1), 0), None);
/// ```
pub enum ClassName<T: ?Sized> {
	/// Same class for every element.
	Static(String),
	/// Class looked up by position; positions past the end get none.
	PerIndex(Vec<ClassEntry<T>>),
	/// Class computed from every element.
	Conditional(ClassFn<T>),
}

fn class_fn<T, F, S>(f: F) -> ClassFn<T>
where
	T: ?Sized + 'static,
	F: Fn(&T, usize) -> Option<S> + Send + Sync + 'static,
	S: Into<String>,
{
	Arc::new(move |value: &T, index: usize| -> Option<String> {
		f(value, index).map(Into::into)
	})
}

impl<T: ?Sized + 'static> ClassEntry<T> {
	/// Creates a conditional entry.
	pub fn conditional<F, S>(f: F) -> Self
	where
		F: Fn(&T, usize) -> Option<S> + Send + Sync + 'static,
		S: Into<String>,
	{
		ClassEntry::Conditional(class_fn(f))
	}
}

impl<T: ?Sized> ClassEntry<T> {
	fn evaluate(&self, value: &T, index: usize) -> Option<String> {
		match self {
			ClassEntry::Static(class) => Some(class.clone()),
			ClassEntry::Conditional(f) => f(value, index),
		}
	}
}

impl<T: ?Sized + 'static> ClassName<T> {
	/// Creates a per-position class list.
	pub fn per_index<I, E>(entries: I) -> Self
	where
		I: IntoIterator<Item = E>,
		E: Into<ClassEntry<T>>,
	{
		ClassName::PerIndex(entries.into_iter().map(Into::into).collect())
	}

	/// Creates a conditional class.
	pub fn conditional<F, S>(f: F) -> Self
	where
		F: Fn(&T, usize) -> Option<S> + Send + Sync + 'static,
		S: Into<String>,
	{
		ClassName::Conditional(class_fn(f))
	}
}

impl<T: ?Sized> ClassName<T> {
	/// Resolves the element's own class, without the axis-wide class.
	///
	/// Empty and whitespace-only results are reported as `None`.
	pub fn evaluate(&self, value: &T, index: usize) -> Option<String> {
		let class = match self {
			ClassName::Static(class) => Some(class.clone()),
			ClassName::PerIndex(entries) => entries
				.get(index)
				.and_then(|entry| entry.evaluate(value, index)),
			ClassName::Conditional(f) => f(value, index),
		};
		class.filter(|class| !class.trim().is_empty())
	}
}

/// Resolves the final class of an element.
///
/// The element's own class comes first, the axis-wide `all` class second,
/// separated by a single space. Returns `None` when neither contributes.
pub fn resolve<T: ?Sized>(
	config: Option<&ClassName<T>>,
	value: &T,
	index: usize,
	all: Option<&str>,
) -> Option<String> {
	let own = config.and_then(|config| config.evaluate(value, index));
	join_classes([own.as_deref(), all])
}

/// Joins trimmed class fragments with single spaces, skipping empty ones.
pub fn join_classes<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> Option<String> {
	let parts: Vec<&str> = parts
		.into_iter()
		.flatten()
		.map(str::trim)
		.filter(|part| !part.is_empty())
		.collect();
	if parts.is_empty() {
		None
	} else {
		Some(parts.join(" "))
	}
}

impl<T: ?Sized> From<&str> for ClassEntry<T> {
	fn from(class: &str) -> Self {
		ClassEntry::Static(class.to_string())
	}
}

impl<T: ?Sized> From<String> for ClassEntry<T> {
	fn from(class: String) -> Self {
		ClassEntry::Static(class)
	}
}

impl<T: ?Sized> From<&str> for ClassName<T> {
	fn from(class: &str) -> Self {
		ClassName::Static(class.to_string())
	}
}

impl<T: ?Sized> From<String> for ClassName<T> {
	fn from(class: String) -> Self {
		ClassName::Static(class)
	}
}

impl<T: ?Sized> From<Vec<ClassEntry<T>>> for ClassName<T> {
	fn from(entries: Vec<ClassEntry<T>>) -> Self {
		ClassName::PerIndex(entries)
	}
}

impl<T: ?Sized> Clone for ClassEntry<T> {
	fn clone(&self) -> Self {
		match self {
			ClassEntry::Static(class) => ClassEntry::Static(class.clone()),
			ClassEntry::Conditional(f) => ClassEntry::Conditional(Arc::clone(f)),
		}
	}
}

impl<T: ?Sized> Clone for ClassName<T> {
	fn clone(&self) -> Self {
		match self {
			ClassName::Static(class) => ClassName::Static(class.clone()),
			ClassName::PerIndex(entries) => ClassName::PerIndex(entries.clone()),
			ClassName::Conditional(f) => ClassName::Conditional(Arc::clone(f)),
		}
	}
}

impl<T: ?Sized> fmt::Debug for ClassEntry<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ClassEntry::Static(class) => f.debug_tuple("Static").field(class).finish(),
			ClassEntry::Conditional(_) => f.debug_tuple("Conditional").field(&"<function>").finish(),
		}
	}
}

impl<T: ?Sized> fmt::Debug for ClassName<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ClassName::Static(class) => f.debug_tuple("Static").field(class).finish(),
			ClassName::PerIndex(entries) => f.debug_tuple("PerIndex").field(entries).finish(),
			ClassName::Conditional(_) => f.debug_tuple("Conditional").field(&"<function>").finish(),
		}
	}
}
