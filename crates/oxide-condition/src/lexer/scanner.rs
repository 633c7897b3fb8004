//! Placeholder scanner.
//!
//! Walks a raw SQL fragment and yields the named placeholders (`:name`)
//! it contains, skipping quoted strings, quoted identifiers, comments and
//! `::` casts.

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    SingleQuote,
    DoubleQuote,
    LineComment,
    BlockComment,
}

/// A placeholder found in a SQL fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// The placeholder including its leading colon.
    pub name: &'a str,
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

/// An iterator over the named placeholders of a SQL fragment.
pub struct PlaceholderScanner<'a> {
    /// The input SQL.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    state: State,
}

impl<'a> PlaceholderScanner<'a> {
    /// Creates a scanner over the given SQL.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            state: State::Normal,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consumes a placeholder word (`[A-Za-z0-9_]*`) and returns its end.
    fn scan_word(&mut self) -> usize {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }
        self.pos
    }
}

impl<'a> Iterator for PlaceholderScanner<'a> {
    type Item = Placeholder<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.input;
        while let Some(c) = self.advance() {
            match self.state {
                State::Normal => match c {
                    '\'' => self.state = State::SingleQuote,
                    '"' => self.state = State::DoubleQuote,
                    '-' if self.peek() == Some('-') => {
                        self.advance();
                        self.state = State::LineComment;
                    }
                    '/' if self.peek() == Some('*') => {
                        self.advance();
                        self.state = State::BlockComment;
                    }
                    ':' if self.peek() == Some(':') => {
                        while self.peek() == Some(':') {
                            self.advance();
                        }
                    }
                    ':' => {
                        let start = self.pos - 1;
                        let end = self.scan_word();
                        if end > start + 1 {
                            return Some(Placeholder {
                                name: &input[start..end],
                                start,
                                end,
                            });
                        }
                    }
                    _ => {}
                },
                State::SingleQuote if c == '\'' => self.state = State::Normal,
                State::DoubleQuote if c == '"' => self.state = State::Normal,
                State::LineComment if c == '\n' => self.state = State::Normal,
                State::BlockComment if c == '*' && self.peek() == Some('/') => {
                    self.advance();
                    self.state = State::Normal;
                }
                _ => {}
            }
        }
        None
    }
}

/// Rewrites placeholders in `sql`, replacing each one for which `replace`
/// returns a token.
///
/// `replace` is called once per occurrence, left to right.
pub fn rewrite_placeholders<E>(
    sql: &str,
    mut replace: impl FnMut(&str) -> Result<Option<String>, E>,
) -> Result<String, E> {
    let mut out = String::with_capacity(sql.len());
    let mut last = 0;
    for placeholder in PlaceholderScanner::new(sql) {
        if let Some(token) = replace(placeholder.name)? {
            out.push_str(&sql[last..placeholder.start]);
            out.push_str(&token);
            last = placeholder.end;
        }
    }
    out.push_str(&sql[last..]);
    Ok(out)
}
