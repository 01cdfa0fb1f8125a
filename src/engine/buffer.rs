//! The mutable scan buffer.
//!
//! The buffer owns the source text being expanded and a byte-offset cursor
//! into it. Directive handlers may splice computed text into the buffer at
//! the cursor (`insert`), which leaves the cursor in place so the spliced
//! text is the next thing scanned. That splice-and-rescan mechanism is what
//! makes nested directive expansion work without an explicit call stack.

/// Mutable source text with a scan cursor, a one-step backup, and a newline
/// counter.
///
/// Invariant: `pos` always sits on a `char` boundary with
/// `0 <= pos <= text.len()`.
#[derive(Debug)]
pub struct Buffer {
    text: String,
    pos: usize,
    last_width: usize,
    line: usize,
}

impl Buffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), pos: 0, last_width: 0, line: 0 }
    }

    /// Current byte offset into the text.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Number of newline characters consumed so far.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Consumes and returns the next character, or `None` at end of input.
    pub fn next(&mut self) -> Option<char> {
        match self.text[self.pos..].chars().next() {
            Some(ch) => {
                self.last_width = ch.len_utf8();
                self.pos += self.last_width;
                if ch == '\n' {
                    self.line += 1;
                }
                Some(ch)
            }
            None => {
                self.last_width = 0;
                None
            }
        }
    }

    /// Returns the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    /// Un-consumes the most recently consumed character.
    ///
    /// Only one level of undo is available: valid immediately after a
    /// consuming `next`, a no-op otherwise.
    pub fn backup(&mut self) {
        self.pos -= self.last_width;
        if self.last_width == 1 && self.text.as_bytes()[self.pos] == b'\n' {
            self.line -= 1;
        }
        self.last_width = 0;
    }

    /// Consumes whitespace until a non-whitespace character or end of input,
    /// leaving the cursor on the non-whitespace character.
    pub fn skip_whitespace(&mut self) {
        while let Some(ch) = self.next() {
            if !ch.is_whitespace() {
                self.backup();
                break;
            }
        }
    }

    /// Splices `s` into the text at the cursor without moving the cursor,
    /// so the next `next()` call consumes the first character of `s`.
    pub fn insert(&mut self, s: &str) {
        self.text.insert_str(self.pos, s);
    }

    /// Consumes everything strictly before the next occurrence of `delim`.
    ///
    /// Returns the consumed text and whether the delimiter was found; the
    /// delimiter itself is never consumed. When it is absent the rest of
    /// the text is consumed.
    pub fn scan_to_delimiter(&mut self, delim: &str) -> (String, bool) {
        let (end, found) = match self.text[self.pos..].find(delim) {
            Some(offset) => (self.pos + offset, true),
            None => (self.text.len(), false),
        };
        let chunk = self.text[self.pos..end].to_string();
        self.line += chunk.matches('\n').count();
        self.pos = end;
        self.last_width = 0;
        (chunk, found)
    }

    /// Like `scan_to_delimiter`, but additionally consumes the delimiter
    /// itself when present.
    pub fn consume_delimiter(&mut self, delim: &str) -> (String, bool) {
        let (chunk, found) = self.scan_to_delimiter(delim);
        if found {
            self.pos += delim.len();
        }
        (chunk, found)
    }

    /// Reads one bare word after skipping leading whitespace.
    ///
    /// The read stops at whitespace (left unconsumed), at a `}}` sequence
    /// (left unconsumed), at end of input, or just after a `/*` sequence,
    /// which is consumed and appended so the comment-open token comes back
    /// as part of the word.
    pub fn next_word(&mut self) -> String {
        self.skip_whitespace();
        let mut word = String::new();
        while let Some(ch) = self.next() {
            if ch.is_whitespace() {
                self.backup();
                break;
            }
            if ch == '/' && self.peek() == Some('*') {
                self.next();
                word.push_str("/*");
                break;
            }
            if ch == '}' && self.peek() == Some('}') {
                self.backup();
                break;
            }
            word.push(ch);
        }
        word
    }
}
