//! C++ emitters for layergen.
//!
//! Two artifacts come out of a validated registry selection:
//!
//! - the **header** ([`header`]): one `HandleInfo` struct per handle type the
//!   registry knows, holding the child set, the parent handle (if any), and the
//!   dispatch reference;
//! - the **source** ([`source`]): a global map (and optional mutex) per tracked
//!   handle type, and one forwarding function per supported command.
//!
//! Both are pure functions of their inputs, so identical input gives
//! byte-identical output.

pub mod header;
pub mod options;
pub mod source;
mod writer;

use std::path::Path;

use layergen_registry::{Registry, Result, SupportedSet, select};

pub use header::{emit_header, header_for_registry};
pub use options::EmitOptions;
pub use source::emit_source;

/// First line of every generated file.
pub const BANNER: &str = "// Generated by layergen from the API registry. Do not edit.";

/// Which artifact an invocation produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
	/// Handle-state structures.
	Header,
	/// Tracking globals and forwarding functions.
	Source,
}

impl ArtifactKind {
	/// Extensions that select the source artifact. The source is C++, so a
	/// plain `.c` name gets the header.
	pub const SOURCE_EXTENSIONS: &[&str] = &["cpp", "cc", "cxx"];

	/// Picks the artifact from the requested output file name: source
	/// extensions select [`ArtifactKind::Source`], anything else the header.
	pub fn from_path(path: &Path) -> Self {
		let is_source = path
			.extension()
			.and_then(|ext| ext.to_str())
			.is_some_and(|ext| Self::SOURCE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
		if is_source { Self::Source } else { Self::Header }
	}
}

/// Validates `supported` against `registry`, then emits the requested
/// artifact.
///
/// Validation runs for both artifacts so that a configuration error never
/// yields any output.
pub fn generate(registry: &Registry, supported: &SupportedSet, opts: &EmitOptions, kind: ArtifactKind) -> Result<String> {
	let selection = select(registry, supported)?;
	Ok(match kind {
		ArtifactKind::Header => header_for_registry(registry, opts),
		ArtifactKind::Source => emit_source(&selection, opts),
	})
}
