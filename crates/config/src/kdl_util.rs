//! KDL value extraction shared by the config settings.

use std::collections::HashSet;

use kdl::{KdlNode, KdlValue};

use crate::error::{ConfigError, Result};

/// Positional arguments of `node`; properties and children are rejected.
fn arguments(node: &KdlNode) -> Result<Vec<&KdlValue>> {
	let field = node.name().value();
	if node.children().is_some() {
		return Err(ConfigError::invalid(field, "expected arguments, found a child block"));
	}
	node.entries()
		.iter()
		.map(|entry| match entry.name() {
			Some(name) => Err(ConfigError::invalid(
				field,
				format!("unexpected property '{}'", name.value()),
			)),
			None => Ok(entry.value()),
		})
		.collect()
}

/// The single argument of `node`.
fn single_argument(node: &KdlNode) -> Result<&KdlValue> {
	match arguments(node)?.as_slice() {
		[value] => Ok(*value),
		values => Err(ConfigError::invalid(
			node.name().value(),
			format!("expected exactly one argument, found {}", values.len()),
		)),
	}
}

/// A non-empty string setting, e.g. `layer-name "OverlaysLayer"`.
pub fn string_arg(node: &KdlNode) -> Result<String> {
	let field = node.name().value();
	let value = single_argument(node)?
		.as_string()
		.ok_or_else(|| ConfigError::invalid(field, "expected a string"))?;
	if value.trim().is_empty() {
		return Err(ConfigError::invalid(field, "must not be empty"));
	}
	Ok(value.to_string())
}

/// A string setting that may be empty, e.g. `command-prefix ""`.
pub fn string_arg_allow_empty(node: &KdlNode) -> Result<String> {
	single_argument(node)?
		.as_string()
		.map(String::from)
		.ok_or_else(|| ConfigError::invalid(node.name().value(), "expected a string"))
}

/// A boolean setting, e.g. `thread-safe #false`.
pub fn bool_arg(node: &KdlNode) -> Result<bool> {
	single_argument(node)?
		.as_bool()
		.ok_or_else(|| ConfigError::invalid(node.name().value(), "expected #true or #false"))
}

/// One or more distinct strings given as arguments, e.g.
/// `header-includes "<cstdint>" "<set>"`.
pub fn string_args(node: &KdlNode) -> Result<Vec<String>> {
	let field = node.name().value();
	let values = arguments(node)?
		.into_iter()
		.map(|value| {
			value
				.as_string()
				.map(String::from)
				.ok_or_else(|| ConfigError::invalid(field, "expected only strings"))
		})
		.collect::<Result<Vec<_>>>()?;
	distinct(field, values)
}

/// One or more distinct names given as bare child nodes, e.g.
/// `handles { XrInstance; XrSession; }`.
pub fn child_names(node: &KdlNode) -> Result<Vec<String>> {
	let field = node.name().value();
	if !node.entries().is_empty() {
		return Err(ConfigError::invalid(field, "expected a child block, found arguments"));
	}
	let children = node
		.children()
		.ok_or_else(|| ConfigError::EmptyList(field.to_string()))?;

	let names = children
		.nodes()
		.iter()
		.map(|child| {
			let name = child.name().value();
			if !child.entries().is_empty() || child.children().is_some() {
				return Err(ConfigError::invalid(field, format!("entry '{name}' must be a bare name")));
			}
			Ok(name.to_string())
		})
		.collect::<Result<Vec<_>>>()?;
	distinct(field, names)
}

fn distinct(field: &str, values: Vec<String>) -> Result<Vec<String>> {
	if values.is_empty() {
		return Err(ConfigError::EmptyList(field.to_string()));
	}
	let duplicate = {
		let mut seen = HashSet::new();
		values.iter().find(|v| !seen.insert(v.as_str())).cloned()
	};
	match duplicate {
		Some(name) => Err(ConfigError::DuplicateEntry {
			list: field.to_string(),
			name,
		}),
		None => Ok(values),
	}
}
