//! Resolves the configured command/handle subset against a registry.
//!
//! Everything the emitters rely on is checked here once: configured names
//! exist, every supported command's first parameter is a by-value handle,
//! every creation command's last parameter is a handle output whose declared
//! parent is the controlling handle, and no parameter shadows a local of the
//! forwarding function. The emitters then assume well-formed input.

use crate::error::{RegistryError, Result};
use crate::model::{Command, HandleType, Registry};
use crate::param::Parameter;

/// Locals a forwarding function declares next to its parameters, besides the
/// `{controlling}Info` entry reference.
pub const FORWARDING_LOCALS: &[&str] = &["result", "mlock", "childLock"];

/// Command and handle names a generation run supports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportedSet {
	/// Supported command names, in emission order.
	pub commands: Vec<String>,
	/// Supported handle type names, in emission order.
	pub handles: Vec<String>,
}

impl SupportedSet {
	/// Builds a set from command and handle names, keeping their order.
	pub fn new<C, H>(commands: C, handles: H) -> Self
	where
		C: IntoIterator,
		C::Item: Into<String>,
		H: IntoIterator,
		H::Item: Into<String>,
	{
		Self {
			commands: commands.into_iter().map(Into::into).collect(),
			handles: handles.into_iter().map(Into::into).collect(),
		}
	}
}

/// The handle produced by a creation command.
#[derive(Debug, Clone, Copy)]
pub struct Creation<'r> {
	/// Output parameter receiving the new handle.
	pub output: &'r Parameter,
	/// Type of the new handle.
	pub handle: &'r HandleType,
}

/// A supported command with its handle context resolved.
#[derive(Debug, Clone, Copy)]
pub struct SelectedCommand<'r> {
	/// The registry command.
	pub command: &'r Command,
	/// First parameter; its value keys the controlling map lookup.
	pub controlling: &'r Parameter,
	/// Handle type of `controlling`.
	pub controlling_type: &'r HandleType,
	/// Set for creation commands.
	pub creation: Option<Creation<'r>>,
}

/// Validated subset of a registry, in emission order.
#[derive(Debug, Clone)]
pub struct Selection<'r> {
	/// The registry the selection was resolved against.
	pub registry: &'r Registry,
	/// Handle types that get a tracking map: every registry handle type, the
	/// supported list first in configuration order, then the rest in registry
	/// order.
	pub handles: Vec<&'r HandleType>,
	/// Supported commands in configuration order.
	pub commands: Vec<SelectedCommand<'r>>,
}

impl<'r> Selection<'r> {
	/// Whether `handle` has a tracking map.
	pub fn tracks(&self, handle: &str) -> bool {
		self.handles.iter().any(|h| h.name == handle)
	}
}

/// Resolves and validates `supported` against `registry`.
pub fn select<'r>(registry: &'r Registry, supported: &SupportedSet) -> Result<Selection<'r>> {
	registry.check_hierarchy()?;

	let mut handles = supported
		.handles
		.iter()
		.map(|name| {
			registry
				.handle(name)
				.ok_or_else(|| RegistryError::unknown_handle(name, "supported handle list"))
		})
		.collect::<Result<Vec<_>>>()?;

	let mut commands = Vec::with_capacity(supported.commands.len());
	for name in &supported.commands {
		let command = registry
			.command(name)
			.ok_or_else(|| RegistryError::UnknownCommand(name.clone()))?;
		commands.push(select_command(registry, command)?);
	}

	let supported_count = handles.len();
	for handle in registry.handles() {
		if !handles.iter().any(|h| h.name == handle.name) {
			handles.push(handle);
		}
	}
	if handles.len() > supported_count {
		tracing::debug!(
			extra = handles.len() - supported_count,
			"tracking registry handle types outside the supported list"
		);
	}

	tracing::debug!(
		commands = commands.len(),
		handles = handles.len(),
		"selection validated"
	);

	Ok(Selection {
		registry,
		handles,
		commands,
	})
}

fn select_command<'r>(registry: &'r Registry, command: &'r Command) -> Result<SelectedCommand<'r>> {
	let controlling = command
		.controlling_param()
		.ok_or_else(|| RegistryError::shape(&command.name, "no parameters; expected a controlling handle first"))?;

	let controlling_type = registry
		.handle(&controlling.type_name)
		.filter(|_| controlling.is_plain())
		.ok_or_else(|| {
			RegistryError::shape(
				&command.name,
				format!(
					"first parameter '{}' must be a handle passed by value, found '{}'",
					controlling.name,
					controlling.declaration()
				),
			)
		})?;

	let entry_local = format!("{}Info", controlling.name);
	if let Some(clash) = command
		.params
		.iter()
		.find(|p| p.name == entry_local || FORWARDING_LOCALS.contains(&p.name.as_str()))
	{
		return Err(RegistryError::shape(
			&command.name,
			format!(
				"parameter '{}' collides with a local of the forwarding function",
				clash.name
			),
		));
	}

	let creation = if command.is_creation() {
		Some(select_creation(registry, command, controlling_type)?)
	} else {
		None
	};

	Ok(SelectedCommand {
		command,
		controlling,
		controlling_type,
		creation,
	})
}

fn select_creation<'r>(
	registry: &'r Registry,
	command: &'r Command,
	controlling_type: &'r HandleType,
) -> Result<Creation<'r>> {
	let output = command.created_handle()?;

	if command.params.len() < 2 || !output.is_pointer() || output.is_const {
		return Err(RegistryError::shape(
			&command.name,
			format!(
				"last parameter '{}' must be a handle output pointer, found '{}'",
				output.name,
				output.declaration()
			),
		));
	}

	let handle = registry.handle(&output.type_name).ok_or_else(|| {
		RegistryError::unknown_handle(&output.type_name, format!("output of '{}'", command.name))
	})?;

	if handle.parent.as_deref() != Some(controlling_type.name.as_str()) {
		return Err(RegistryError::shape(
			&command.name,
			format!(
				"creates '{}' whose parent is {}, but its controlling handle is '{}'",
				handle.name,
				handle.parent.as_deref().map_or("none".to_string(), |p| format!("'{p}'")),
				controlling_type.name
			),
		));
	}

	if command.returns_void() {
		return Err(RegistryError::shape(
			&command.name,
			"creation command returns void; handle bookkeeping needs a result to check",
		));
	}

	Ok(Creation { output, handle })
}

#[cfg(test)]
mod tests;
