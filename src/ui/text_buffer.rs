//! Editable multi-line text with a cursor.

use unicode_width::UnicodeWidthChar;

/// Cells a tab is drawn as.
pub const TAB_WIDTH: usize = 4;

/// Text area contents. `cursor` is a byte offset that always sits on a
/// char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

/// Soft-wrapped view of a buffer for a given width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedText {
    pub lines: Vec<String>,
    /// Visual (row, column) of the cursor. The row may equal `lines.len()`
    /// when the cursor sits right after a full-width line.
    pub cursor: (usize, usize),
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True when there is nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    pub fn insert_char(&mut self, ch: char) {
        let ch = if ch == '\r' { '\n' } else { ch };
        if ch.is_control() && ch != '\n' && ch != '\t' {
            return;
        }
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Insert pasted text, normalizing line endings and dropping control
    /// characters other than newline and tab.
    pub fn insert_str(&mut self, text: &str) {
        let normalized: String = text
            .replace("\r\n", "\n")
            .replace('\r', "\n")
            .chars()
            .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
            .collect();
        self.text.insert_str(self.cursor, &normalized);
        self.cursor += normalized.len();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.text.replace_range(self.cursor..next, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn move_line_start(&mut self) {
        self.cursor = self.text[..self.cursor]
            .rfind('\n')
            .map(|idx| idx + 1)
            .unwrap_or(0);
    }

    pub fn move_line_end(&mut self) {
        self.cursor = self.text[self.cursor..]
            .find('\n')
            .map(|idx| self.cursor + idx)
            .unwrap_or(self.text.len());
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Soft-wrap to `width` terminal cells.
    ///
    /// Characters are measured by display width, so CJK and emoji take two
    /// cells. Tabs stay in the text but are drawn as [`TAB_WIDTH`] spaces.
    pub fn wrap(&self, width: usize) -> WrappedText {
        let width = width.max(1);
        let mut lines = Vec::new();
        let mut cursor = (0, 0);
        let mut line_start = 0;

        for logical in self.text.split('\n') {
            let mut line = String::new();
            let mut col = 0;

            for (offset, ch) in logical.char_indices() {
                let cells = cell_width(ch).min(width);
                if col + cells > width {
                    lines.push(std::mem::take(&mut line));
                    col = 0;
                }
                if line_start + offset == self.cursor {
                    cursor = (lines.len(), col);
                }
                if ch == '\t' {
                    line.push_str(&" ".repeat(cells));
                } else {
                    line.push(ch);
                }
                col += cells;
            }

            if line_start + logical.len() == self.cursor {
                cursor = if col >= width {
                    (lines.len() + 1, 0)
                } else {
                    (lines.len(), col)
                };
            }
            lines.push(line);
            line_start += logical.len() + 1;
        }

        WrappedText { lines, cursor }
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .chars()
            .next_back()
            .map(|ch| self.cursor - ch.len_utf8())
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|ch| self.cursor + ch.len_utf8())
    }
}

/// Terminal cells a character occupies in the editor.
fn cell_width(ch: char) -> usize {
    if ch == '\t' {
        TAB_WIDTH
    } else {
        ch.width().unwrap_or(0)
    }
}

impl From<&str> for TextBuffer {
    /// Buffer holding `text` with the cursor at the end.
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_and_backspace() {
        let mut buf = TextBuffer::new();
        for ch in "héllo".chars() {
            buf.insert_char(ch);
        }
        assert_eq!(buf.as_str(), "héllo");
        buf.backspace();
        buf.move_left();
        buf.move_left();
        buf.backspace();
        assert_eq!(buf.as_str(), "hll");
        assert_eq!(buf.cursor(), 1);
    }

    #[test]
    fn delete_at_end_is_noop() {
        let mut buf = TextBuffer::from("ab");
        buf.delete();
        assert_eq!(buf.as_str(), "ab");
        buf.move_left();
        buf.delete();
        assert_eq!(buf.as_str(), "a");
    }

    #[test]
    fn paste_normalizes_line_endings_and_controls() {
        let mut buf = TextBuffer::new();
        buf.insert_str("one\r\ntwo\rthree\u{0007}\tfour");
        assert_eq!(buf.as_str(), "one\ntwo\nthree\tfour");
        assert_eq!(buf.cursor(), buf.as_str().len());
    }

    #[test]
    fn blank_detection() {
        assert!(TextBuffer::from("   \n\t ").is_blank());
        assert!(!TextBuffer::from("  x ").is_blank());
        assert_eq!(TextBuffer::from(" two  words\n").word_count(), 2);
    }

    #[test]
    fn line_start_and_end() {
        let mut buf = TextBuffer::from("first\nsecond");
        buf.move_line_start();
        assert_eq!(buf.cursor(), 6);
        buf.move_left();
        buf.move_line_start();
        assert_eq!(buf.cursor(), 0);
        buf.move_line_end();
        assert_eq!(buf.cursor(), 5);
    }

    #[test]
    fn wrap_splits_long_lines_and_tracks_cursor() {
        let buf = TextBuffer::from("abcdefg\n\nxy");
        let wrapped = buf.wrap(3);
        assert_eq!(wrapped.lines, vec!["abc", "def", "g", "", "xy"]);
        assert_eq!(wrapped.cursor, (4, 2));
    }

    #[test]
    fn wrap_cursor_after_full_width_line_moves_to_next_row() {
        let buf = TextBuffer::from("abc");
        let wrapped = buf.wrap(3);
        assert_eq!(wrapped.lines, vec!["abc"]);
        assert_eq!(wrapped.cursor, (1, 0));
    }

    #[test]
    fn wrap_empty_buffer() {
        let wrapped = TextBuffer::new().wrap(10);
        assert_eq!(wrapped.lines, vec![String::new()]);
        assert_eq!(wrapped.cursor, (0, 0));
    }

    #[test]
    fn wrap_measures_wide_chars_by_cells() {
        let buf = TextBuffer::from("日本語です");
        let wrapped = buf.wrap(4);
        assert_eq!(wrapped.lines, vec!["日本", "語で", "す"]);
        assert_eq!(wrapped.cursor, (2, 2));
    }

    #[test]
    fn wrap_never_splits_a_wide_char() {
        let mut text = "日".repeat(59);
        text.push('終');
        let wrapped = TextBuffer::from(text.as_str()).wrap(78);
        assert_eq!(wrapped.lines.len(), 2);
        assert_eq!(wrapped.lines[0].chars().count(), 39);
        assert!(wrapped.lines[1].ends_with('終'));
        assert_eq!(wrapped.cursor, (1, 42));
    }

    #[test]
    fn wrap_expands_tabs_for_display_only() {
        let mut buf = TextBuffer::from("a\tb");
        let wrapped = buf.wrap(20);
        assert_eq!(wrapped.lines, vec!["a    b"]);
        assert_eq!(wrapped.cursor, (0, 6));

        buf.move_left();
        assert_eq!(buf.wrap(20).cursor, (0, 5));
        buf.move_left();
        assert_eq!(buf.wrap(20).cursor, (0, 1));
        assert_eq!(buf.as_str(), "a\tb");
    }
}
