//! Element attributes.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Name of the class attribute.
pub const CLASS: &str = "class";

/// Name of the style attribute.
pub const STYLE: &str = "style";

/// Prefix of event handler attribute names (`on:click`).
pub const EVENT_PREFIX: &str = "on:";

/// Event handler attached through an attribute.
///
/// Handlers are carried in the tree for the host to wire up; they are skipped
/// by HTML and JSON output.
#[derive(Clone)]
pub struct EventHandler {
	inner: Arc<dyn Fn() + Send + Sync + 'static>,
}

impl EventHandler {
	/// Wraps a closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn() + Send + Sync + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Invokes the handler.
	pub fn call(&self) {
		(self.inner)()
	}
}

impl PartialEq for EventHandler {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}
}

impl fmt::Debug for EventHandler {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EventHandler")
			.field("inner", &"<function>")
			.finish()
	}
}

/// Inline style declarations, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
	declarations: Vec<(String, String)>,
}

impl Style {
	/// Creates an empty style.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets a declaration, replacing an earlier one with the same property.
	pub fn set(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
		let property = property.into();
		let value = value.into();
		match self.declarations.iter_mut().find(|(p, _)| *p == property) {
			Some(slot) => slot.1 = value,
			None => self.declarations.push((property, value)),
		}
		self
	}

	/// Returns the value of `property`.
	pub fn get(&self, property: &str) -> Option<&str> {
		self.declarations
			.iter()
			.find(|(p, _)| p == property)
			.map(|(_, v)| v.as_str())
	}

	/// Returns whether no declaration is set.
	pub fn is_empty(&self) -> bool {
		self.declarations.is_empty()
	}
}

impl fmt::Display for Style {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, (property, value)) in self.declarations.iter().enumerate() {
			if i > 0 {
				f.write_str("; ")?;
			}
			write!(f, "{property}: {value}")?;
		}
		Ok(())
	}
}

/// Value of a single attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
	/// String value.
	Text(String),
	/// Numeric value.
	Number(f64),
	/// Boolean attribute; `false` is not emitted.
	Bool(bool),
	/// Inline style.
	Style(Style),
	/// Event handler.
	Handler(EventHandler),
}

impl AttrValue {
	/// Returns the text if this is a string value.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			AttrValue::Text(text) => Some(text),
			_ => None,
		}
	}

	/// Returns the style if this is a style value.
	pub fn as_style(&self) -> Option<&Style> {
		match self {
			AttrValue::Style(style) => Some(style),
			_ => None,
		}
	}

	/// Returns the handler if this is an event handler.
	pub fn as_handler(&self) -> Option<&EventHandler> {
		match self {
			AttrValue::Handler(handler) => Some(handler),
			_ => None,
		}
	}

	/// Returns the HTML attribute value, or `None` when the attribute is
	/// not emitted at all.
	pub(crate) fn to_html_value(&self) -> Option<Cow<'_, str>> {
		match self {
			AttrValue::Text(text) => Some(Cow::Borrowed(text)),
			AttrValue::Number(number) => Some(Cow::Owned(crate::cell::format_number(*number))),
			AttrValue::Bool(true) => Some(Cow::Borrowed("")),
			AttrValue::Bool(false) | AttrValue::Handler(_) => None,
			AttrValue::Style(style) => Some(Cow::Owned(style.to_string())),
		}
	}
}

impl From<&str> for AttrValue {
	fn from(text: &str) -> Self {
		AttrValue::Text(text.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(text: String) -> Self {
		AttrValue::Text(text)
	}
}

impl From<f64> for AttrValue {
	fn from(number: f64) -> Self {
		AttrValue::Number(number)
	}
}

impl From<i32> for AttrValue {
	fn from(number: i32) -> Self {
		AttrValue::Number(f64::from(number))
	}
}

impl From<bool> for AttrValue {
	fn from(flag: bool) -> Self {
		AttrValue::Bool(flag)
	}
}

impl From<Style> for AttrValue {
	fn from(style: Style) -> Self {
		AttrValue::Style(style)
	}
}

impl From<EventHandler> for AttrValue {
	fn from(handler: EventHandler) -> Self {
		AttrValue::Handler(handler)
	}
}

/// Ordered attribute list with unique names.
///
/// Setting an existing name replaces its value in place, so the first
/// insertion decides the position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
	entries: Vec<(Cow<'static, str>, AttrValue)>,
}

impl Attributes {
	/// Creates an empty attribute list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder form of [`Attributes::set`].
	pub fn with(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<AttrValue>,
	) -> Self {
		self.set(name, value);
		self
	}

	/// Adds an event handler under `on:<event>`.
	pub fn on<F>(self, event: &str, handler: F) -> Self
	where
		F: Fn() + Send + Sync + 'static,
	{
		self.with(format!("{EVENT_PREFIX}{event}"), EventHandler::new(handler))
	}

	/// Sets an attribute.
	pub fn set(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) {
		let name = name.into();
		let value = value.into();
		match self.entries.iter_mut().find(|(n, _)| *n == name) {
			Some(slot) => slot.1 = value,
			None => self.entries.push((name, value)),
		}
	}

	/// Returns the value of `name`.
	pub fn get(&self, name: &str) -> Option<&AttrValue> {
		self.entries
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v)
	}

	/// Removes `name`, returning its value.
	pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
		let index = self.entries.iter().position(|(n, _)| n == name)?;
		Some(self.entries.remove(index).1)
	}

	/// Returns whether `name` is set.
	pub fn contains(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	/// Returns the class attribute.
	pub fn class(&self) -> Option<&str> {
		self.get(CLASS).and_then(AttrValue::as_text)
	}

	/// Returns the style attribute.
	pub fn style(&self) -> Option<&Style> {
		self.get(STYLE).and_then(AttrValue::as_style)
	}

	/// Returns the handler registered for `event`.
	pub fn handler(&self, event: &str) -> Option<&EventHandler> {
		self.entries
			.iter()
			.find(|(n, _)| n.strip_prefix(EVENT_PREFIX) == Some(event))
			.and_then(|(_, v)| v.as_handler())
	}

	/// Iterates over the attributes in order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
		self.entries.iter().map(|(n, v)| (n.as_ref(), v))
	}

	/// Returns the number of attributes.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns whether no attribute is set.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl IntoIterator for Attributes {
	type Item = (Cow<'static, str>, AttrValue);
	type IntoIter = std::vec::IntoIter<Self::Item>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

impl<N, V> FromIterator<(N, V)> for Attributes
where
	N: Into<Cow<'static, str>>,
	V: Into<AttrValue>,
{
	fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
		let mut attrs = Attributes::new();
		for (name, value) in iter {
			attrs.set(name, value);
		}
		attrs
	}
}

impl Serialize for AttrValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			AttrValue::Text(text) => serializer.serialize_str(text),
			AttrValue::Number(number) => serializer.serialize_f64(*number),
			AttrValue::Bool(flag) => serializer.serialize_bool(*flag),
			AttrValue::Style(style) => serializer.collect_str(style),
			AttrValue::Handler(_) => serializer.serialize_unit(),
		}
	}
}

impl Serialize for Attributes {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let entries: Vec<_> = self
			.iter()
			.filter(|(_, value)| !matches!(value, AttrValue::Handler(_)))
			.collect();
		let mut map = serializer.serialize_map(Some(entries.len()))?;
		for (name, value) in entries {
			map.serialize_entry(name, value)?;
		}
		map.end()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[rstest]
	fn test_set_replaces_in_place() {
		let attrs = Attributes::new()
			.with("id", "a")
			.with("title", "t")
			.with("id", "b");

		let names: Vec<_> = attrs.iter().map(|(n, _)| n).collect();
		assert_eq!(names, vec!["id", "title"]);
		assert_eq!(attrs.get("id"), Some(&AttrValue::from("b")));
	}

	#[rstest]
	fn test_remove() {
		let mut attrs = Attributes::new().with("id", "a");
		assert_eq!(attrs.remove("id"), Some(AttrValue::from("a")));
		assert!(attrs.is_empty());
		assert_eq!(attrs.remove("id"), None);
	}

	#[rstest]
	fn test_style_display() {
		let style = Style::new()
			.set("min-width", "100px")
			.set("color", "red")
			.set("min-width", "80px");
		assert_eq!(style.to_string(), "min-width: 80px; color: red");
		assert_eq!(style.get("color"), Some("red"));
	}

	#[rstest]
	fn test_handler_lookup_and_call() {
		let calls = Arc::new(AtomicUsize::new(0));
		let counter = Arc::clone(&calls);
		let attrs = Attributes::new().on("click", move || {
			counter.fetch_add(1, Ordering::SeqCst);
		});

		attrs.handler("click").unwrap().call();
		assert_eq!(calls.load(Ordering::SeqCst), 1);
		assert!(attrs.handler("input").is_none());
	}

	#[rstest]
	fn test_handler_equality_is_identity() {
		let handler = EventHandler::new(|| {});
		assert_eq!(handler, handler.clone());
		assert_ne!(handler, EventHandler::new(|| {}));
	}

	#[rstest]
	fn test_serialize_skips_handlers() {
		let attrs = Attributes::new()
			.with("title", "VTuber Table")
			.with("style", Style::new().set("min-width", "100px"))
			.on("click", || {});

		assert_eq!(
			serde_json::to_value(&attrs).unwrap(),
			serde_json::json!({"title": "VTuber Table", "style": "min-width: 100px"})
		);
	}

	#[rstest]
	#[case(AttrValue::from("x"), Some("x"))]
	#[case(AttrValue::from(3), Some("3"))]
	#[case(AttrValue::from(true), Some(""))]
	#[case(AttrValue::from(false), None)]
	fn test_html_value(#[case] value: AttrValue, #[case] expected: Option<&str>) {
		assert_eq!(value.to_html_value().as_deref(), expected);
	}
}
