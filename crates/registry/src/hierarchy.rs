//! Parent/child relationships between handle types and creation commands.

use crate::error::{RegistryError, Result};
use crate::model::{Command, HandleType, Registry};
use crate::param::Parameter;

/// Substring that marks a command as creating a new handle.
pub const CREATE_MARKER: &str = "Create";

impl Registry {
	/// The declared parent of `handle`, if it has one and it is known.
	pub fn parent_of(&self, handle: &str) -> Option<&HandleType> {
		self.handle(handle)?.parent.as_deref().and_then(|p| self.handle(p))
	}

	/// Walks from `handle` up to its root, starting with `handle` itself.
	///
	/// Fails if a parent is not a known handle type or the chain revisits a
	/// type.
	pub fn ancestry(&self, handle: &str) -> Result<Vec<&HandleType>> {
		let mut current = self
			.handle(handle)
			.ok_or_else(|| RegistryError::unknown_handle(handle, "hierarchy lookup"))?;
		let mut chain = vec![current];

		while let Some(parent) = current.parent.as_deref() {
			let next = self
				.handle(parent)
				.ok_or_else(|| RegistryError::unknown_handle(parent, format!("parent of '{}'", current.name)))?;

			if chain.iter().any(|h| h.name == next.name) {
				let mut names: Vec<String> = chain.iter().map(|h| h.name.clone()).collect();
				names.push(next.name.clone());
				return Err(RegistryError::CycleDetected { chain: names });
			}

			chain.push(next);
			current = next;
		}

		Ok(chain)
	}

	/// Checks that every handle's parent chain resolves and terminates.
	pub fn check_hierarchy(&self) -> Result<()> {
		for handle in self.handles() {
			self.ancestry(&handle.name)?;
		}
		Ok(())
	}
}

impl Command {
	/// Whether this command produces a new handle.
	pub fn is_creation(&self) -> bool {
		self.name.contains(CREATE_MARKER)
	}

	/// The output parameter receiving the created handle: the last one.
	pub fn created_handle(&self) -> Result<&Parameter> {
		self.params
			.last()
			.ok_or_else(|| RegistryError::shape(&self.name, "creation command has no parameters"))
	}
}
