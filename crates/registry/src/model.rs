//! Registry model: commands and handle types loaded from the document tree.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::document::Node;
use crate::error::{RegistryError, Result};
use crate::param::Parameter;

/// An API entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
	/// Command name, e.g. `xrCreateSession`.
	pub name: String,
	/// Declared return type.
	pub return_type: String,
	/// Parameters in declaration order.
	pub params: Vec<Parameter>,
}

impl Command {
	/// Builds a command from a `<command>` node.
	pub fn from_node(node: &Node) -> Result<Self> {
		let proto = node
			.child("proto")
			.ok_or_else(|| RegistryError::schema("command", "missing <proto>"))?;
		let name = proto
			.child("name")
			.map(|n| n.trimmed_text().to_string())
			.filter(|n| !n.is_empty())
			.ok_or_else(|| RegistryError::schema("command <proto>", "missing <name>"))?;
		let return_type = proto
			.child("type")
			.map(|t| t.trimmed_text().to_string())
			.filter(|t| !t.is_empty())
			.ok_or_else(|| RegistryError::schema(format!("command '{name}'"), "missing return <type>"))?;

		let params = node
			.children_named("param")
			.map(|p| Parameter::from_node(&name, p))
			.collect::<Result<Vec<_>>>()?;

		Ok(Self {
			name,
			return_type,
			params,
		})
	}

	/// The parameter whose handle decides which tracking map a call uses.
	pub fn controlling_param(&self) -> Option<&Parameter> {
		self.params.first()
	}

	/// Whether the command returns nothing.
	pub fn returns_void(&self) -> bool {
		self.return_type == "void"
	}
}

/// An opaque handle type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandleType {
	/// Type name, e.g. `XrSession`.
	pub name: String,
	/// Owning handle type, if any.
	pub parent: Option<String>,
}

impl HandleType {
	/// Handle type `name` owned by `parent`.
	pub fn new(name: impl Into<String>, parent: Option<&str>) -> Self {
		Self {
			name: name.into(),
			parent: parent.map(String::from),
		}
	}

	/// Builds a handle type from a `<type category="handle">` node.
	pub fn from_node(node: &Node) -> Result<Self> {
		let name = node
			.child("name")
			.map(|n| n.trimmed_text())
			.filter(|n| !n.is_empty())
			.ok_or_else(|| RegistryError::schema("handle type", "missing <name>"))?;
		let parent = node.attr("parent").map(str::trim).filter(|p| !p.is_empty());
		Ok(Self::new(name, parent))
	}
}

/// Commands and handle types of one API, in registry order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
	commands: IndexMap<String, Command>,
	handles: IndexMap<String, HandleType>,
}

impl Registry {
	/// Parses registry XML and loads its model.
	pub fn parse(xml: &str) -> Result<Self> {
		Self::from_document(&Node::parse(xml)?)
	}

	/// Loads commands and handle types from a parsed registry root.
	pub fn from_document(root: &Node) -> Result<Self> {
		let reg_commands = root
			.child("commands")
			.ok_or_else(|| RegistryError::schema("registry", "missing <commands>"))?;
		let reg_types = root
			.child("types")
			.ok_or_else(|| RegistryError::schema("registry", "missing <types>"))?;

		let mut registry = Self::default();

		for node in reg_commands.children_named("command") {
			registry.insert_command(Command::from_node(node)?)?;
		}

		for node in reg_types
			.children_named("type")
			.filter(|t| t.attr("category") == Some("handle"))
		{
			registry.insert_handle(HandleType::from_node(node)?)?;
		}

		tracing::debug!(
			commands = registry.commands.len(),
			handles = registry.handles.len(),
			"loaded registry"
		);

		Ok(registry)
	}

	/// Adds a command; names must be unique.
	pub fn insert_command(&mut self, command: Command) -> Result<()> {
		match self.commands.entry(command.name.clone()) {
			Entry::Occupied(_) => Err(RegistryError::schema(
				"registry",
				format!("duplicate command '{}'", command.name),
			)),
			Entry::Vacant(slot) => {
				slot.insert(command);
				Ok(())
			}
		}
	}

	/// Adds a handle type; names must be unique.
	pub fn insert_handle(&mut self, handle: HandleType) -> Result<()> {
		match self.handles.entry(handle.name.clone()) {
			Entry::Occupied(_) => Err(RegistryError::schema(
				"registry",
				format!("duplicate handle type '{}'", handle.name),
			)),
			Entry::Vacant(slot) => {
				slot.insert(handle);
				Ok(())
			}
		}
	}

	/// Command by name.
	pub fn command(&self, name: &str) -> Option<&Command> {
		self.commands.get(name)
	}

	/// Handle type by name.
	pub fn handle(&self, name: &str) -> Option<&HandleType> {
		self.handles.get(name)
	}

	/// Whether `type_name` names a handle type.
	pub fn is_handle(&self, type_name: &str) -> bool {
		self.handles.contains_key(type_name)
	}

	/// Commands in registry order.
	pub fn commands(&self) -> impl Iterator<Item = &Command> {
		self.commands.values()
	}

	/// Handle types in registry order.
	pub fn handles(&self) -> impl Iterator<Item = &HandleType> {
		self.handles.values()
	}
}
