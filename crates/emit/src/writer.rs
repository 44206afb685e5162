/// Indentation-aware line buffer for generated C++.
#[derive(Debug, Default)]
pub(crate) struct CodeWriter {
	out: String,
	depth: usize,
}

const INDENT: &str = "    ";

impl CodeWriter {
	pub(crate) fn line(&mut self, text: impl AsRef<str>) {
		let text = text.as_ref();
		if !text.is_empty() {
			for _ in 0..self.depth {
				self.out.push_str(INDENT);
			}
			self.out.push_str(text);
		}
		self.out.push('\n');
	}

	pub(crate) fn blank(&mut self) {
		self.out.push('\n');
	}

	/// Writes `open`, then the body one level deeper, then `close`.
	pub(crate) fn block(&mut self, open: impl AsRef<str>, close: impl AsRef<str>, body: impl FnOnce(&mut Self)) {
		self.line(open);
		self.depth += 1;
		body(self);
		self.depth -= 1;
		self.line(close);
	}

	pub(crate) fn banner(&mut self) {
		self.line(crate::BANNER);
	}

	/// One `#include` per entry, verbatim.
	pub(crate) fn includes(&mut self, includes: &[String]) {
		for include in includes {
			self.line(format!("#include {include}"));
		}
	}

	pub(crate) fn finish(self) -> String {
		self.out
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn nested_blocks_indent_by_four_spaces() {
		let mut w = CodeWriter::default();
		w.block("{", "}", |w| {
			w.line("a;");
			w.blank();
			w.block("if (x) {", "}", |w| w.line("b;"));
		});

		assert_eq!(w.finish(), "{\n    a;\n\n    if (x) {\n        b;\n    }\n}\n");
	}
}
