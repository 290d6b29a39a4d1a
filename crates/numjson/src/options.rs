/// Encoder options.
///
/// The defaults reproduce the output of Python's `json.dumps` with no
/// keyword arguments: single-line layout with `", "` and `": "`
/// separators, non-ASCII escaped as `\uXXXX`, and `NaN`/`Infinity`
/// literals permitted for non-finite floats.
#[derive(Debug, Clone)]
pub struct Options {
    /// Pretty-print with this many spaces per nesting level.
    /// `None` emits everything on a single line.
    pub indent: Option<usize>,
    /// Emit object members in lexicographic key order instead of
    /// insertion order.
    pub sort_keys: bool,
    /// Escape every non-ASCII character as `\uXXXX` (surrogate pairs
    /// beyond the BMP). Off leaves the output as UTF-8.
    pub ensure_ascii: bool,
    /// Emit `NaN`, `Infinity` and `-Infinity` for non-finite floats.
    /// Off makes them an encode error instead.
    pub allow_nan: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            indent: None,
            sort_keys: false,
            ensure_ascii: true,
            allow_nan: true,
        }
    }
}
