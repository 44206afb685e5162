//! Global tracking maps and dispatch-forwarding functions.
//!
//! Locking discipline of the generated code: each handle type's map has its
//! own mutex. A forwarding function holds the controlling type's mutex from
//! the lookup through the downstream call and any bookkeeping, so a creation
//! and a lookup on the same type never interleave. On creation, the created
//! type's mutex is taken as well while its map is updated. The created type is
//! always a child of the controlling type, so locks are only ever acquired
//! parent-before-child.

use layergen_registry::{SelectedCommand, Selection};

use crate::options::EmitOptions;
use crate::writer::CodeWriter;

/// Emits the source artifact for a validated selection: one map per handle
/// type the header declares, then one function per supported command.
pub fn emit_source(selection: &Selection<'_>, opts: &EmitOptions) -> String {
	let mut w = CodeWriter::default();
	w.banner();
	w.includes(&opts.source_includes);

	for handle in &selection.handles {
		w.blank();
		w.line(format!(
			"std::unordered_map<{}, {}> {};",
			handle.name,
			opts.info_struct(&handle.name),
			opts.map_global(&handle.name)
		));
		if opts.thread_safe {
			w.line(format!("std::mutex {};", opts.mutex_global(&handle.name)));
		}
	}

	for selected in &selection.commands {
		w.blank();
		emit_forwarding_function(&mut w, selected, opts);
	}

	tracing::debug!(
		maps = selection.handles.len(),
		functions = selection.commands.len(),
		thread_safe = opts.thread_safe,
		"emitted dispatch-forwarding source"
	);
	w.finish()
}

/// The locals declared here besides `{handle}Info` are `layergen_registry::FORWARDING_LOCALS`;
/// selection rejects commands whose parameters reuse any of them.
fn emit_forwarding_function(w: &mut CodeWriter, selected: &SelectedCommand<'_>, opts: &EmitOptions) {
	let command = selected.command;
	let handle_type = &selected.controlling_type.name;
	let handle = &selected.controlling.name;
	let info = format!("{handle}Info");

	let declarations: Vec<String> = command.params.iter().map(|p| p.declaration()).collect();
	let arguments: Vec<&str> = command.params.iter().map(|p| p.name.as_str()).collect();
	let call = format!(
		"{info}.downchain->{}({})",
		opts.dispatch_member(&command.name),
		arguments.join(", ")
	);

	w.line(format!(
		"{} {}({})",
		command.return_type,
		opts.layer_function(&command.name),
		declarations.join(", ")
	));
	w.block("{", "}", |w| {
		if opts.thread_safe {
			w.line(format!(
				"std::unique_lock<std::mutex> mlock({});",
				opts.mutex_global(handle_type)
			));
		}
		w.line(format!(
			"{}& {info} = {}[{handle}];",
			opts.info_struct(handle_type),
			opts.map_global(handle_type)
		));
		w.blank();

		if command.returns_void() {
			w.line(format!("{call};"));
			return;
		}

		w.line(format!("{} result = {call};", command.return_type));
		w.blank();

		if let Some(creation) = &selected.creation {
			let created_type = &creation.handle.name;
			let created = &creation.output.name;

			w.block(format!("if ({}(result)) {{", opts.success_check), "}", |w| {
				if opts.thread_safe && created_type != handle_type {
					w.line(format!(
						"std::unique_lock<std::mutex> childLock({});",
						opts.mutex_global(created_type)
					));
				}
				w.line(format!(
					"{}.insert_or_assign(*{created}, {}({handle}, {info}.downchain));",
					opts.map_global(created_type),
					opts.info_struct(created_type)
				));
				w.line(format!("{info}.childHandles.insert((uint64_t)*{created});"));
			});
			w.blank();
		}

		w.line("return result;");
	});
}
