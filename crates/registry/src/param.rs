//! Parameter descriptors built from `<param>` nodes.
//!
//! The accepted grammar is deliberately narrow:
//!
//! ```text
//! [const] <type>T</type>        <name>p</name>
//! [const] <type>T</type>*       <name>p</name>
//! [const] <type>T</type>        <name>p</name>[<enum>N</enum>]
//! [const] <type>T</type>        <name>p</name>[16]
//! [const] <type>T</type>[<enum>N</enum>] <name>p</name>
//! ```
//!
//! Anything left over after a declaration is matched is rejected. An unparsed
//! token means the registry uses a form this generator does not model, and
//! emitting a signature anyway would silently produce wrong code.

use crate::document::Node;
use crate::error::{RegistryError, Result};

/// How a parameter's base type is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamForm {
	/// Passed by value.
	Plain,
	/// Passed through a single pointer.
	Pointer,
	/// Fixed-size array; `size` is the enum or literal between the brackets.
	Array {
		/// Size reference, e.g. `XR_MAX_RESULT_STRING_SIZE`.
		size: String,
	},
}

/// A single command parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
	/// Parameter name.
	pub name: String,
	/// Base type name, without qualifiers or modifiers.
	pub type_name: String,
	/// Whether the declaration starts with `const`.
	pub is_const: bool,
	/// Plain, pointer, or array.
	pub form: ParamForm,
}

impl Parameter {
	/// Builds a descriptor from a `<param>` node of `command`.
	pub fn from_node(command: &str, node: &Node) -> Result<Self> {
		let mut context = format!("command '{command}' parameter");

		let is_const = match node.trimmed_text() {
			"" => false,
			"const" => true,
			other => {
				return Err(RegistryError::schema(context, format!("unexpected leading text '{other}'")));
			}
		};

		let mut rest = node.children.as_slice();

		let ty = take(&mut rest, "type", &context)?;
		let type_name = non_empty(ty, &context)?;

		let mut form = match ty.trimmed_tail() {
			"" => ParamForm::Plain,
			"*" => ParamForm::Pointer,
			"[" => ParamForm::Array {
				size: take_array_size(&mut rest, &context)?,
			},
			other => {
				return Err(RegistryError::schema(
					context,
					format!("unrecognized modifier '{other}' after type '{type_name}'"),
				));
			}
		};

		let name_node = take(&mut rest, "name", &context)?;
		let name = non_empty(name_node, &context)?;
		context = format!("command '{command}' parameter '{name}'");

		match name_node.trimmed_tail() {
			"" => {}
			"[" if form == ParamForm::Plain => {
				form = ParamForm::Array {
					size: take_array_size(&mut rest, &context)?,
				};
			}
			tail => match literal_array_size(tail) {
				Some(size) if form == ParamForm::Plain => {
					form = ParamForm::Array { size: size.to_string() };
				}
				_ => {
					return Err(RegistryError::schema(context, format!("unexpected trailing text '{tail}'")));
				}
			},
		}

		if let Some(extra) = rest.first() {
			return Err(RegistryError::schema(context, format!("unexpected element <{}>", extra.tag)));
		}

		if !node.trimmed_tail().is_empty() {
			return Err(RegistryError::schema(
				context,
				format!("unexpected trailing text '{}'", node.trimmed_tail()),
			));
		}

		Ok(Self {
			name,
			type_name,
			is_const,
			form,
		})
	}

	/// Passed through a single pointer.
	pub fn is_pointer(&self) -> bool {
		self.form == ParamForm::Pointer
	}

	/// Declared with an array suffix.
	pub fn is_array(&self) -> bool {
		matches!(self.form, ParamForm::Array { .. })
	}

	/// Passed by value, without pointer or array.
	pub fn is_plain(&self) -> bool {
		self.form == ParamForm::Plain
	}

	/// The array size reference, set iff the parameter is an array.
	pub fn array_size(&self) -> Option<&str> {
		match &self.form {
			ParamForm::Array { size } => Some(size),
			_ => None,
		}
	}

	/// Renders the C declaration as it appears in a function signature.
	pub fn declaration(&self) -> String {
		let constness = if self.is_const { "const " } else { "" };
		match &self.form {
			ParamForm::Plain => format!("{constness}{} {}", self.type_name, self.name),
			ParamForm::Pointer => format!("{constness}{}* {}", self.type_name, self.name),
			ParamForm::Array { size } => format!("{constness}{} {}[{size}]", self.type_name, self.name),
		}
	}
}

/// Consumes the next child, which must be a `tag` element.
fn take<'a>(rest: &mut &'a [Node], tag: &str, context: &str) -> Result<&'a Node> {
	match rest.split_first() {
		Some((first, remaining)) if first.tag == tag => {
			*rest = remaining;
			Ok(first)
		}
		Some((first, _)) => Err(RegistryError::schema(
			context,
			format!("expected <{tag}>, found <{}>", first.tag),
		)),
		None => Err(RegistryError::schema(context, format!("missing <{tag}>"))),
	}
}

/// Consumes `<enum>SIZE</enum>]` following an opening bracket.
fn take_array_size(rest: &mut &[Node], context: &str) -> Result<String> {
	let size = take(rest, "enum", context)
		.map_err(|_| RegistryError::schema(context, "array declarator is missing its size"))?;
	if size.trimmed_tail() != "]" {
		return Err(RegistryError::schema(
			context,
			format!("array size '{}' is missing its closing ']'", size.text.trim()),
		));
	}
	non_empty(size, context)
}

/// Matches a literal declarator such as `[16]`.
fn literal_array_size(tail: &str) -> Option<&str> {
	let inner = tail.strip_prefix('[')?.strip_suffix(']')?.trim();
	(!inner.is_empty() && inner.bytes().all(|b| b.is_ascii_digit())).then_some(inner)
}

fn non_empty(node: &Node, context: &str) -> Result<String> {
	let text = node.trimmed_text();
	if text.is_empty() {
		return Err(RegistryError::schema(context, format!("<{}> is empty", node.tag)));
	}
	Ok(text.to_string())
}
