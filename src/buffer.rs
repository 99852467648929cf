use unicode_segmentation::UnicodeSegmentation;

use crate::types::Selection;

/// Bounded, selection-aware text for the keyboard's output field.
///
/// Lengths and indices count characters (code points), never bytes.
#[derive(Debug, Clone)]
pub struct OutputBuffer {
    text: String,
    len: usize,
    selection: Selection,
    max_chars: usize,
}

impl OutputBuffer {
    pub fn new(max_chars: usize) -> Self {
        Self {
            text: String::new(),
            len: 0,
            selection: Selection::default(),
            max_chars,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len >= self.max_chars
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Caret position, i.e. the focus end of the selection.
    pub fn caret(&self) -> usize {
        self.selection.focus
    }

    /// Sets the selection. Out-of-range indices are clamped to the text.
    pub fn select(&mut self, anchor: usize, focus: usize) {
        self.selection = Selection {
            anchor: anchor.min(self.len),
            focus: focus.min(self.len),
        };
    }

    /// Replaces the selection with `s` and returns how many characters were
    /// written.
    ///
    /// If `s` does not fit, whole grapheme clusters are kept from the front
    /// while they fit and the rest is dropped.
    pub fn insert(&mut self, s: &str) -> usize {
        let start = self.selection.start();
        self.remove_range(start, self.selection.end());

        let room = self.max_chars.saturating_sub(self.len);
        let mut fitted = 0;
        let mut fitted_bytes = 0;
        for g in s.graphemes(true) {
            let n = g.chars().count();
            if fitted + n > room {
                break;
            }
            fitted += n;
            fitted_bytes += g.len();
        }

        let at = self.byte_offset(start);
        self.text.insert_str(at, &s[..fitted_bytes]);
        self.len += fitted;
        self.selection = Selection::caret(start + fitted);
        fitted
    }

    pub fn space(&mut self) -> usize {
        self.insert(" ")
    }

    /// Deletes the selection, or the character left of the caret.
    /// Returns `false` when there was nothing to delete.
    pub fn backspace(&mut self) -> bool {
        let (start, end) = (self.selection.start(), self.selection.end());
        if end > start {
            self.remove_range(start, end);
            self.selection = Selection::caret(start);
            true
        } else if start > 0 {
            self.remove_range(start - 1, start);
            self.selection = Selection::caret(start - 1);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.len = 0;
        self.selection = Selection::default();
    }

    fn remove_range(&mut self, start: usize, end: usize) {
        if end <= start {
            return;
        }
        let (from, to) = (self.byte_offset(start), self.byte_offset(end));
        self.text.replace_range(from..to, "");
        self.len -= end - start;
    }

    fn byte_offset(&self, idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(idx)
            .map_or(self.text.len(), |(b, _)| b)
    }
}
