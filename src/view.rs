//! Render tree emitted by the table component.
//!
//! A [`View`] is an immutable description of what the host framework should
//! mount: elements with a tag, an optional identity [`Key`], ordered
//! [`Attributes`] and children. Nothing here touches a real DOM; the tree can
//! be rendered to HTML on the server with [`View::render_to_string`] or
//! handed to a host as JSON through `serde`.

mod attributes;

use std::borrow::Cow;

use serde::Serialize;

use crate::key::Key;

pub use attributes::{AttrValue, Attributes, CLASS, EVENT_PREFIX, EventHandler, STYLE, Style};

/// A unified representation of renderable content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
	/// An element.
	Element(ElementView),
	/// A text node.
	Text(Cow<'static, str>),
	/// Several views without a wrapper element.
	Fragment(Vec<View>),
	/// Renders nothing.
	Empty,
}

/// An element of the view tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementView {
	tag: Cow<'static, str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	key: Option<Key>,
	attrs: Attributes,
	children: Vec<View>,
	#[serde(skip)]
	is_void: bool,
}

impl ElementView {
	/// Creates a new element view.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			key: None,
			attrs: Attributes::new(),
			children: Vec::new(),
			is_void,
		}
	}

	/// Sets the identity key.
	pub fn with_key(mut self, key: impl Into<Key>) -> Self {
		self.key = Some(key.into());
		self
	}

	/// Sets an attribute.
	pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) -> Self {
		self.attrs.set(name, value);
		self
	}

	/// Sets every attribute of `attrs`, keeping the existing order for names
	/// already present.
	pub fn with_attrs(mut self, attrs: Attributes) -> Self {
		for (name, value) in attrs {
			self.attrs.set(name, value);
		}
		self
	}

	/// Adds a child view.
	pub fn child(mut self, child: impl IntoView) -> Self {
		self.children.push(child.into_view());
		self
	}

	/// Adds multiple child views.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoView>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_view()));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the identity key.
	pub fn key(&self) -> Option<&Key> {
		self.key.as_ref()
	}

	/// Returns the attributes.
	pub fn attrs(&self) -> &Attributes {
		&self.attrs
	}

	/// Returns the class attribute.
	pub fn class(&self) -> Option<&str> {
		self.attrs.class()
	}

	/// Returns the child views.
	pub fn child_views(&self) -> &[View] {
		&self.children
	}

	/// Iterates over the child elements, skipping text and fragments.
	pub fn child_elements(&self) -> impl Iterator<Item = &ElementView> {
		self.children.iter().filter_map(View::as_element)
	}

	/// Returns the first child element with the given tag.
	pub fn find_child(&self, tag: &str) -> Option<&ElementView> {
		self.child_elements().find(|el| el.tag_name() == tag)
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}
}

impl View {
	/// Creates an element view.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> ElementView {
		ElementView::new(tag)
	}

	/// Creates a text view.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment view.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoView>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_view()).collect())
	}

	/// Creates an empty view.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Returns the element if this view is one.
	pub fn as_element(&self) -> Option<&ElementView> {
		match self {
			View::Element(el) => Some(el),
			_ => None,
		}
	}

	/// Renders the view to an HTML string.
	///
	/// Keys are not part of the markup and event handlers are skipped.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			View::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in el.attrs().iter() {
					if !is_valid_attr_name(name) {
						continue;
					}
					if let AttrValue::Bool(true) = value {
						output.push(' ');
						output.push_str(name);
					} else if let Some(value) = value.to_html_value() {
						output.push(' ');
						output.push_str(name);
						output.push_str("=\"");
						output.push_str(&html_escape(&value));
						output.push('"');
					}
				}

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.child_views() {
						child.render_to_string_inner(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			View::Text(text) => {
				output.push_str(&html_escape(text));
			}
			View::Fragment(children) => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			View::Empty => {}
		}
	}
}

/// Trait for types that can be converted into a View.
pub trait IntoView {
	/// Converts self into a View.
	fn into_view(self) -> View;
}

impl IntoView for View {
	fn into_view(self) -> View {
		self
	}
}

impl IntoView for &View {
	fn into_view(self) -> View {
		self.clone()
	}
}

impl IntoView for ElementView {
	fn into_view(self) -> View {
		View::Element(self)
	}
}

impl IntoView for String {
	fn into_view(self) -> View {
		View::Text(Cow::Owned(self))
	}
}

impl IntoView for &'static str {
	fn into_view(self) -> View {
		View::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoView> IntoView for Option<T> {
	fn into_view(self) -> View {
		match self {
			Some(v) => v.into_view(),
			None => View::Empty,
		}
	}
}

impl<T: IntoView> IntoView for Vec<T> {
	fn into_view(self) -> View {
		View::Fragment(self.into_iter().map(|v| v.into_view()).collect())
	}
}

impl IntoView for () {
	fn into_view(self) -> View {
		View::Empty
	}
}

impl<A: IntoView, B: IntoView> IntoView for (A, B) {
	fn into_view(self) -> View {
		View::Fragment(vec![self.0.into_view(), self.1.into_view()])
	}
}

impl<A: IntoView, B: IntoView, C: IntoView> IntoView for (A, B, C) {
	fn into_view(self) -> View {
		View::Fragment(vec![
			self.0.into_view(),
			self.1.into_view(),
			self.2.into_view(),
		])
	}
}

/// Returns whether `name` can be written as an HTML attribute name.
fn is_valid_attr_name(name: &str) -> bool {
	!name.is_empty()
		&& !name.chars().any(|c| {
			c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '<' | '/' | '=')
		})
}

/// Escapes HTML special characters.
fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_void_element_detection() {
		assert!(ElementView::new("br").is_void());
		assert!(ElementView::new("col").is_void());
		assert!(!ElementView::new("td").is_void());
	}

	#[rstest]
	fn test_render_element_with_attrs() {
		let view = ElementView::new("th")
			.attr("class", "title row")
			.attr("style", Style::new().set("min-width", "100px"))
			.child("name")
			.into_view();
		assert_eq!(
			view.render_to_string(),
			"<th class=\"title row\" style=\"min-width: 100px\">name</th>"
		);
	}

	#[rstest]
	fn test_render_skips_key_and_handlers() {
		let view = ElementView::new("td")
			.with_key("name-Okayu")
			.with_attrs(Attributes::new().on("click", || {}))
			.child("Okayu")
			.into_view();
		assert_eq!(view.render_to_string(), "<td>Okayu</td>");
	}

	#[rstest]
	fn test_render_boolean_attributes() {
		let view = ElementView::new("table")
			.attr("hidden", true)
			.attr("inert", false)
			.attr("title", "")
			.into_view();
		assert_eq!(view.render_to_string(), "<table hidden title=\"\"></table>");
	}

	#[rstest]
	fn test_render_skips_invalid_attribute_names() {
		let view = ElementView::new("td")
			.attr("title", "ok")
			.attr("x onmouseover=alert(1)", "a")
			.attr("data-\"q\"", "b")
			.attr("", "c")
			.child("v")
			.into_view();
		assert_eq!(view.render_to_string(), "<td title=\"ok\">v</td>");
	}

	#[rstest]
	#[case("data-row", true)]
	#[case("aria-label", true)]
	#[case("on:click", true)]
	#[case("a b", false)]
	#[case("a=b", false)]
	#[case("a/b", false)]
	#[case("", false)]
	fn test_is_valid_attr_name(#[case] name: &str, #[case] expected: bool) {
		assert_eq!(is_valid_attr_name(name), expected);
	}

	#[rstest]
	fn test_render_text_with_escaping() {
		let view = View::text("<script>alert('xss')</script>");
		assert_eq!(
			view.render_to_string(),
			"&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;"
		);
	}

	#[rstest]
	fn test_render_escapes_attribute_values() {
		let view = ElementView::new("td").attr("title", "a \"b\" & c").into_view();
		assert_eq!(
			view.render_to_string(),
			"<td title=\"a &quot;b&quot; &amp; c\"></td>"
		);
	}

	#[rstest]
	fn test_render_fragment_and_empty() {
		assert_eq!(View::fragment(["One", "Two"]).render_to_string(), "OneTwo");
		assert_eq!(View::empty().render_to_string(), "");
		assert_eq!(None::<String>.into_view().render_to_string(), "");
		assert_eq!(("a", "b", "c").into_view().render_to_string(), "abc");
	}

	#[rstest]
	fn test_find_child() {
		let el = ElementView::new("table")
			.child("caption text")
			.child(ElementView::new("thead"))
			.child(ElementView::new("tbody"));
		assert_eq!(el.child_elements().count(), 2);
		assert_eq!(el.find_child("tbody").map(ElementView::tag_name), Some("tbody"));
		assert!(el.find_child("tfoot").is_none());
	}

	#[rstest]
	fn test_serialize_element() {
		let view = ElementView::new("tr")
			.with_key("Okayu")
			.attr("class", "hover-effect")
			.child("x")
			.into_view();
		assert_eq!(
			serde_json::to_value(&view).unwrap(),
			serde_json::json!({
				"element": {
					"tag": "tr",
					"key": "Okayu",
					"attrs": {"class": "hover-effect"},
					"children": [{"text": "x"}]
				}
			})
		);
	}

	#[rstest]
	fn test_html_escape() {
		assert_eq!(html_escape("Hello"), Cow::Borrowed("Hello"));
		assert_eq!(html_escape("a & b"), Cow::<str>::Owned("a &amp; b".to_string()));
	}
}
