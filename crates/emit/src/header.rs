//! Per-handle-type metadata structures.

use layergen_registry::{HandleType, Registry};

use crate::options::EmitOptions;
use crate::writer::CodeWriter;

/// Emits one `HandleInfo` struct per handle type, in the given order.
///
/// Every struct carries the child handle set and the dispatch reference.
/// Types with a parent also carry the parent handle and take it as the first
/// constructor argument. The defaulted constructor exists because forwarding
/// functions look entries up with `operator[]`.
pub fn emit_header<'a>(handles: impl IntoIterator<Item = &'a HandleType>, opts: &EmitOptions) -> String {
	let mut w = CodeWriter::default();
	w.banner();
	w.line("#pragma once");
	w.blank();
	w.includes(&opts.header_includes);

	let mut count = 0usize;
	for handle in handles {
		w.blank();
		emit_info_struct(&mut w, handle, opts);
		count += 1;
	}

	tracing::debug!(structs = count, "emitted handle-state header");
	w.finish()
}

/// Emits the header for every handle type the registry knows, in registry
/// order.
pub fn header_for_registry(registry: &Registry, opts: &EmitOptions) -> String {
	emit_header(registry.handles(), opts)
}

fn emit_info_struct(w: &mut CodeWriter, handle: &HandleType, opts: &EmitOptions) {
	let info = opts.info_struct(&handle.name);
	let dispatch = &opts.dispatch_table;

	w.line(format!("struct {info}"));
	w.block("{", "};", |w| {
		w.line("std::set<uint64_t> childHandles;");
		if let Some(parent) = &handle.parent {
			w.line(format!("{parent} parentHandle{{}};"));
		}
		w.line(format!("{dispatch} *downchain = nullptr;"));
		w.blank();
		w.line(format!("{info}() = default;"));
		match &handle.parent {
			Some(parent) => {
				w.line(format!("{info}({parent} parent, {dispatch} *downchain_) :"));
				w.line("    parentHandle(parent),");
			}
			None => w.line(format!("explicit {info}({dispatch} *downchain_) :")),
		}
		w.line("    downchain(downchain_)");
		w.line("{}");
	});
}
