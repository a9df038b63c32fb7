/// Line-oriented text builder with block indentation.
///
/// Blank lines are requested with [`SourceWriter::separate`] and only
/// materialize between two lines of the same block, so a block never starts
/// or ends with an empty line.
pub(crate) struct SourceWriter {
    output: String,
    indent_level: usize,
    indent_str: String,
    pending_blank: bool,
    block_is_empty: bool,
}

impl SourceWriter {
    pub(crate) fn new(indent_width: usize) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_str: " ".repeat(indent_width),
            pending_blank: false,
            block_is_empty: true,
        }
    }

    pub(crate) fn line(&mut self, text: impl AsRef<str>) {
        if self.pending_blank && !self.block_is_empty {
            self.output.push('\n');
        }
        self.pending_blank = false;
        self.block_is_empty = false;
        for _ in 0..self.indent_level {
            self.output.push_str(&self.indent_str);
        }
        self.output.push_str(text.as_ref());
        self.output.push('\n');
    }

    /// Requests one blank line before the next line of the current block.
    pub(crate) fn separate(&mut self) {
        self.pending_blank = true;
    }

    /// Continuation lines (method chains) sit one level deeper.
    pub(crate) fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub(crate) fn decrease_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Writes `header {` and indents what follows.
    pub(crate) fn open_block(&mut self, header: impl AsRef<str>) {
        self.line(format!("{} {{", header.as_ref()));
        self.indent_level += 1;
        self.block_is_empty = true;
        self.pending_blank = false;
    }

    pub(crate) fn close_block(&mut self) {
        self.close_block_with("}");
    }

    pub(crate) fn close_block_with(&mut self, closer: &str) {
        self.indent_level = self.indent_level.saturating_sub(1);
        self.pending_blank = false;
        self.line(closer);
    }

    pub(crate) fn finish(self) -> String {
        self.output
    }
}
