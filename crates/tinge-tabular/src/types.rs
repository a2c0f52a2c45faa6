//! Layout options for table rendering.

/// Cell alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    /// Pad on the right.
    #[default]
    Left,
    /// Pad on the left.
    Right,
    /// Split padding evenly; the extra column goes on the right.
    Center,
}

impl Align {
    /// Resolves an alignment name.
    ///
    /// Unknown names fall back to [`Align::Left`] silently, the same
    /// tolerant policy the styling engine uses for color identifiers.
    pub fn from_name(name: &str) -> Self {
        match name {
            "right" => Align::Right,
            "center" => Align::Center,
            _ => Align::Left,
        }
    }
}

/// Layout options for [`render`](crate::render).
///
/// ```rust
/// use tinge_tabular::{Align, TableOptions};
///
/// let options = TableOptions::new().border(false).align(Align::Right);
/// assert!(options.header);
/// assert!(!options.border);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableOptions {
    /// Treat the first row as a header.
    pub header: bool,
    /// Draw `+`/`-`/`|` borders around rows and columns.
    pub border: bool,
    /// Cell alignment, applied to header and data rows alike.
    pub align: Align,
}

impl Default for TableOptions {
    /// Header and border on, left alignment.
    fn default() -> Self {
        Self {
            header: true,
            border: true,
            align: Align::Left,
        }
    }
}

impl TableOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the header flag.
    pub fn header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Sets the border flag.
    pub fn border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    /// Sets the alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}
