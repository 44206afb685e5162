//! Emission options and the naming scheme of generated symbols.

/// Settings shared by the header and source emitters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
	/// Prefix of every generated struct, global, and function.
	pub layer_name: String,
	/// Guard each handle-type map with its own mutex.
	pub thread_safe: bool,
	/// API prefix stripped from command names (`xr` in `xrCreateSession`).
	pub command_prefix: String,
	/// Type of the next-layer dispatch table.
	pub dispatch_table: String,
	/// Macro or function applied to a result to test for success.
	pub success_check: String,
	/// `#include` targets of the header, verbatim (`<set>`, `"foo.h"`).
	pub header_includes: Vec<String>,
	/// `#include` targets of the source, verbatim.
	pub source_includes: Vec<String>,
}

impl Default for EmitOptions {
	fn default() -> Self {
		Self {
			layer_name: "OverlaysLayer".into(),
			thread_safe: true,
			command_prefix: "xr".into(),
			dispatch_table: "XrGeneratedDispatchTable".into(),
			success_check: "XR_SUCCEEDED".into(),
			header_includes: ["<cstdint>", "<set>", "<openxr/openxr.h>", "\"xr_generated_dispatch_table.h\""]
				.map(String::from)
				.to_vec(),
			source_includes: [
				"\"xr_generated_overlays.hpp\"",
				"\"xr_generated_dispatch_table.h\"",
				"<mutex>",
				"<unordered_map>",
			]
			.map(String::from)
			.to_vec(),
		}
	}
}

impl EmitOptions {
	/// `OverlaysLayerXrSessionHandleInfo`
	pub fn info_struct(&self, handle: &str) -> String {
		format!("{}{handle}HandleInfo", self.layer_name)
	}

	/// `gOverlaysLayerXrSessionToHandleInfo`
	pub fn map_global(&self, handle: &str) -> String {
		format!("g{}{handle}ToHandleInfo", self.layer_name)
	}

	/// `gOverlaysLayerXrSessionToHandleInfoMutex`
	pub fn mutex_global(&self, handle: &str) -> String {
		format!("{}Mutex", self.map_global(handle))
	}

	/// Dispatch table member for a command: the name without the API prefix.
	pub fn dispatch_member<'a>(&self, command: &'a str) -> &'a str {
		command.strip_prefix(self.command_prefix.as_str()).unwrap_or(command)
	}

	/// `OverlaysLayerCreateSession`
	pub fn layer_function(&self, command: &str) -> String {
		format!("{}{}", self.layer_name, self.dispatch_member(command))
	}
}
