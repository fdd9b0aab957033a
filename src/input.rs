//! Expression input line.

/// Editable expression text plus the last committed value.
#[derive(Debug, Clone)]
pub struct ExpressionInput {
    buffer: String,
    cursor: usize,
    committed: String,
}

impl ExpressionInput {
    /// Create an input line holding `initial`, already committed.
    pub fn new(initial: &str) -> Self {
        Self {
            buffer: initial.to_string(),
            cursor: initial.chars().count(),
            committed: initial.to_string(),
        }
    }

    /// Insert a character at the cursor.
    pub fn input(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    /// Remove the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.buffer.remove(at);
    }

    /// Remove the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_index(self.cursor);
            self.buffer.remove(at);
        }
    }

    /// Move the cursor one character left.
    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one character right.
    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    /// Move the cursor to the start.
    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end.
    pub fn cursor_end(&mut self) {
        self.cursor = self.len();
    }

    /// Empty the buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Commit the buffer and return it.
    pub fn submit(&mut self) -> &str {
        self.committed = self.buffer.trim().to_string();
        &self.committed
    }

    /// Throw away edits, restoring the committed text.
    pub fn reset(&mut self) {
        self.buffer = self.committed.clone();
        self.cursor = self.len();
    }

    /// Text being edited.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Last committed text.
    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the buffer differs from the committed text.
    pub fn is_dirty(&self) -> bool {
        self.buffer.trim() != self.committed
    }

    fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_index(&self, chars: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }
}

impl Default for ExpressionInput {
    fn default() -> Self {
        Self::new("")
    }
}
