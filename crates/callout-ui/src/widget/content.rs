//! Popover content

use unicode_width::UnicodeWidthStr;

use crate::geometry::Size;

/// Text shown inside a popover's content box
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopoverContent {
    lines: Vec<String>,
}

impl PopoverContent {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a block of text on newlines
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Cells needed to show every line unclipped
    pub fn intrinsic_size(&self) -> Size {
        let width = self.lines.iter().map(|l| l.width()).max().unwrap_or(0);
        Size::new(width as i32, self.lines.len() as i32)
    }
}

impl From<&str> for PopoverContent {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}
