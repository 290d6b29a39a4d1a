#[cfg(not(feature = "std"))]
use alloc::string::String;

#[cfg(feature = "std")]
use std::string::String;

/// Output buffer that owns the layout policy: single-line output with
/// `", "`/`": "` separators, or pretty-printed with a fixed indent per
/// nesting level.
pub struct TextWriter {
    out: String,
    indent: Option<usize>,
    indent_cache: String,
}

impl TextWriter {
    pub fn new(indent: Option<usize>) -> Self {
        Self {
            out: String::new(),
            indent,
            indent_cache: String::new(),
        }
    }

    fn write_indent(&mut self, width: usize) {
        if width == 0 {
            return;
        }
        if self.indent_cache.len() < width {
            self.indent_cache
                .extend(core::iter::repeat(' ').take(width - self.indent_cache.len()));
        }
        self.out.push_str(&self.indent_cache[..width]);
    }

    pub fn raw(&mut self, s: &str) {
        self.out.push_str(s);
    }

    pub fn string(&mut self, s: &str, ensure_ascii: bool) {
        crate::encode::primitives::escape_and_quote_into(&mut self.out, s, ensure_ascii);
    }

    pub fn open(&mut self, bracket: char) {
        self.out.push(bracket);
    }

    /// Precedes each container item: nothing or `", "` in single-line
    /// layout, a (comma plus) newline-and-indent when pretty-printing.
    pub fn item_separator(&mut self, depth: usize, first: bool) {
        match self.indent {
            Some(step) => {
                if !first {
                    self.out.push(',');
                }
                self.out.push('\n');
                self.write_indent(depth * step);
            }
            None => {
                if !first {
                    self.out.push_str(", ");
                }
            }
        }
    }

    pub fn key_separator(&mut self) {
        self.out.push_str(": ");
    }

    /// Empty containers close as `[]`/`{}` in both layouts.
    pub fn close(&mut self, bracket: char, depth: usize, empty: bool) {
        if !empty {
            if let Some(step) = self.indent {
                self.out.push('\n');
                self.write_indent(depth * step);
            }
        }
        self.out.push(bracket);
    }

    pub fn into_string(self) -> String {
        self.out
    }
}
