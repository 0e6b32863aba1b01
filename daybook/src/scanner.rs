//! Whitespace-token reader over line-buffered input.
//!
//! Console input is consumed two ways: the menu and the amount prompt read
//! single tokens, the diary prompt reads whatever is left of a line. A token
//! read leaves the rest of its line pending, so a following line read sees
//! only that remainder.

use std::io::{self, BufRead};

pub struct Scanner<R> {
    reader: R,
    /// Unconsumed tail of the current line, `None` at a line boundary
    pending: Option<String>,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: None,
        }
    }

    /// Next whitespace-delimited token, crossing line boundaries as needed.
    ///
    /// Returns `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            let Some(line) = self.pending.take() else {
                if !self.fill()? {
                    return Ok(None);
                }
                continue;
            };

            let rest = line.trim_start();
            if rest.is_empty() {
                continue;
            }

            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let (token, tail) = rest.split_at(end);
            let token = token.to_string();
            self.pending = Some(tail.to_string());
            return Ok(Some(token));
        }
    }

    /// Rest of the current line, or the next full line at a line boundary.
    ///
    /// The line terminator is not included. Returns `None` at end of input.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        if self.pending.is_none() && !self.fill()? {
            return Ok(None);
        }
        Ok(self.pending.take())
    }

    fn fill(&mut self) -> io::Result<bool> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(false);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        self.pending = Some(line);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scanner(input: &str) -> Scanner<Cursor<Vec<u8>>> {
        Scanner::new(Cursor::new(input.as_bytes().to_vec()))
    }

    #[test]
    fn test_tokens_span_lines() {
        let mut s = scanner("  1 two\n\n   three\n");
        assert_eq!(s.next_token().unwrap().as_deref(), Some("1"));
        assert_eq!(s.next_token().unwrap().as_deref(), Some("two"));
        assert_eq!(s.next_token().unwrap().as_deref(), Some("three"));
        assert_eq!(s.next_token().unwrap(), None);
    }

    #[test]
    fn test_line_after_token_is_remainder() {
        let mut s = scanner("1 tail text\nnext line\n");
        assert_eq!(s.next_token().unwrap().as_deref(), Some("1"));
        assert_eq!(s.next_line().unwrap().as_deref(), Some(" tail text"));
        assert_eq!(s.next_line().unwrap().as_deref(), Some("next line"));
        assert_eq!(s.next_line().unwrap(), None);
    }

    #[test]
    fn test_token_at_line_end_leaves_empty_remainder() {
        let mut s = scanner("1\nWent hiking\n");
        assert_eq!(s.next_token().unwrap().as_deref(), Some("1"));
        assert_eq!(s.next_line().unwrap().as_deref(), Some(""));
        assert_eq!(s.next_line().unwrap().as_deref(), Some("Went hiking"));
    }

    #[test]
    fn test_empty_line_and_crlf() {
        let mut s = scanner("\r\nlast");
        assert_eq!(s.next_line().unwrap().as_deref(), Some(""));
        assert_eq!(s.next_line().unwrap().as_deref(), Some("last"));
        assert_eq!(s.next_line().unwrap(), None);
    }

    #[test]
    fn test_empty_input() {
        let mut s = scanner("");
        assert_eq!(s.next_token().unwrap(), None);
        assert_eq!(s.next_line().unwrap(), None);
    }
}
