//! Generic labeled tree over a parsed registry document.
//!
//! The XML parser hands back elements with interleaved character data. The
//! registry grammar cares about *where* text sits relative to child elements
//! (`const <type>T</type>* <name>p</name>`), so this module folds that data
//! into `text` (before the first child) and `tail` (after a child, before the
//! next sibling), which is the shape the loader and parameter builder read.

use std::collections::HashMap;
use std::io::Cursor;

use xmltree::{Element, XMLNode};

use crate::error::Result;

/// One element of the registry document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
	/// Element name.
	pub tag: String,
	/// Element attributes.
	pub attributes: HashMap<String, String>,
	/// Character data before the first child element.
	pub text: String,
	/// Child elements in document order.
	pub children: Vec<Node>,
	/// Character data between this element's end and the next sibling.
	pub tail: String,
}

impl Node {
	/// Parses an XML document and returns its root node.
	pub fn parse(xml: &str) -> Result<Self> {
		let root = Element::parse(Cursor::new(xml.as_bytes()))?;
		Ok(Self::from_element(&root))
	}

	/// Converts a parsed element, distributing text runs into `text`/`tail`.
	pub fn from_element(element: &Element) -> Self {
		let mut node = Self {
			tag: element.name.clone(),
			attributes: element
				.attributes
				.iter()
				.map(|(k, v)| (k.clone(), v.clone()))
				.collect(),
			..Self::default()
		};

		for child in &element.children {
			match child {
				XMLNode::Element(el) => node.children.push(Self::from_element(el)),
				XMLNode::Text(s) | XMLNode::CData(s) => match node.children.last_mut() {
					Some(prev) => prev.tail.push_str(s),
					None => node.text.push_str(s),
				},
				_ => {}
			}
		}

		node
	}

	/// First child element with the given tag.
	pub fn child(&self, tag: &str) -> Option<&Node> {
		self.children.iter().find(|c| c.tag == tag)
	}

	/// All child elements with the given tag, in document order.
	pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
		self.children.iter().filter(move |c| c.tag == tag)
	}

	/// Attribute value, if present.
	pub fn attr(&self, name: &str) -> Option<&str> {
		self.attributes.get(name).map(String::as_str)
	}

	/// Leading text with surrounding whitespace removed.
	pub fn trimmed_text(&self) -> &str {
		self.text.trim()
	}

	/// Tail text with surrounding whitespace removed.
	pub fn trimmed_tail(&self) -> &str {
		self.tail.trim()
	}
}

#[cfg(test)]
mod tests;
