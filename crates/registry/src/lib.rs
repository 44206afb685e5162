//! API registry model for layergen.
//!
//! Loads a C-style API registry (commands with typed parameters, and opaque
//! handle types forming a parent/child hierarchy) into an immutable model, and
//! validates a configured subset of it for emission.
//!
//! # Modules
//!
//! - [`document`] - Labeled text/children/tail tree over the registry XML
//! - [`param`] - Parameter descriptors and the declaration grammar
//! - [`model`] - [`Command`], [`HandleType`] and the [`Registry`] loader
//! - [`hierarchy`] - Parent chains and creation-command conventions
//! - [`select`] - Supported-subset resolution and shape checks
//!
//! # Pipeline
//!
//! ```text
//! XML ──▶ Node tree ──▶ Registry ──▶ Selection ──▶ emitters
//! ```

pub mod document;
pub mod error;
pub mod hierarchy;
pub mod model;
pub mod param;
pub mod select;

pub use document::Node;
pub use error::{RegistryError, Result};
pub use hierarchy::CREATE_MARKER;
pub use model::{Command, HandleType, Registry};
pub use param::{ParamForm, Parameter};
pub use select::{Creation, FORWARDING_LOCALS, SelectedCommand, Selection, SupportedSet, select};
