use std::collections::VecDeque;
use std::ops::Range;

use crate::error::{CxmlError, ErrorRange};
use crate::error::CxmlError::InvalidSkip;
use crate::symbol::Terminal;
use crate::token::Token;

/// A character cursor over the lexer input.
///
/// The pending lexeme is the text between `start` and `pos`. State functions grow it with
/// [next_char](CharIter::next_char) and the `accept_*` methods, then either
/// [emit](CharIter::emit) it as a token or [ignore](CharIter::ignore) it.
pub struct CharIter<'a> {
    pub(crate) start: usize,
    pub(crate) pos: usize,
    pub(crate) text: &'a str,
    pub(crate) tokens: VecDeque<Token>,
    /// Set when `next_char` ran off the end of the input, undone by the next `backup`
    overrun: bool,
}

impl<'a> CharIter<'a> {
    pub fn new(text: &'a str) -> CharIter<'a> {
        CharIter { start: 0, pos: 0, text, tokens: VecDeque::new(), overrun: false }
    }

    /// Get the underlying text
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Get the current position as a byte index in the underlying string slice.
    /// Reading past the end of the input counts as one step beyond its length.
    pub fn pos(&self) -> usize {
        self.pos + self.overrun as usize
    }

    /// Get the byte index where the pending lexeme starts
    pub fn start(&self) -> usize {
        self.start
    }

    /// If the iterator has more characters
    pub fn has_next(&self) -> bool {
        self.pos < self.text.len()
    }

    /// If every character has been folded into a token or explicitly ignored
    pub fn is_exhausted(&self) -> bool {
        self.start == self.pos && !self.has_next()
    }

    /// Get the current character without advancing the iterator, `None` at the end of input
    pub fn peek_char(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    /// Get the current character and advance the iterator past it. At the end of input the
    /// iterator still takes a step, so a following [backup](CharIter::backup) undoes it.
    pub fn next_char(&mut self) -> Option<char> {
        match self.peek_char() {
            Some(c) => {
                self.pos += c.len_utf8();
                Some(c)
            }
            None => {
                self.overrun = true;
                None
            }
        }
    }

    /// Undo the last step of [next_char](CharIter::next_char), giving back the last character
    /// of the pending lexeme
    pub fn backup(&mut self) {
        if self.overrun {
            self.overrun = false;
        } else if let Some(c) = self.lexeme().chars().next_back() {
            self.pos -= c.len_utf8();
        }
    }

    /// Advance the iterator while the current char satisfies `accept`
    pub fn accept_run<F: Fn(char) -> bool>(&mut self, accept: F) {
        while let Some(c) = self.peek_char() {
            if !accept(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Advance the iterator until the current char satisfies `stop` or the input ends
    pub fn accept_until<F: Fn(char) -> bool>(&mut self, stop: F) {
        self.accept_run(|c| !stop(c))
    }

    /// The text of the pending lexeme
    pub fn lexeme(&self) -> &'a str {
        &self.text[self.start..self.pos]
    }

    /// The number of characters in the pending lexeme
    pub fn lexeme_len(&self) -> usize {
        self.lexeme().chars().count()
    }

    /// Discard the pending lexeme
    pub fn ignore(&mut self) {
        self.start = self.pos;
        self.overrun = false;
    }

    /// Drop the next `n` characters without making them part of any lexeme.
    /// Fails if a pending lexeme would be lost or fewer than `n` characters remain.
    pub fn skip(&mut self, n: usize) -> Result<(), CxmlError> {
        if self.start != self.pos {
            return Err(InvalidSkip {
                range: self.error_range(self.start..self.pos),
                reason: "partial lexeme would be lost",
            });
        }
        let mut chars = self.text[self.pos..].chars();
        let mut new_pos = self.pos;
        for _ in 0..n {
            match chars.next() {
                Some(c) => new_pos += c.len_utf8(),
                None => return Err(InvalidSkip {
                    range: self.error_range(self.pos..self.text.len()),
                    reason: "cannot skip past end of input",
                }),
            }
        }
        self.start = new_pos;
        self.pos = new_pos;
        Ok(())
    }

    /// Queue a token of class `symbol` holding the pending lexeme and start a new lexeme
    pub fn emit(&mut self, symbol: Terminal) {
        let token = Token::new(symbol, self.lexeme());
        log::trace!("emit {}", token);
        self.tokens.push_back(token);
        self.start = self.pos;
        self.overrun = false;
    }

    pub(crate) fn pop_token(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    /// Capture a region of the input for error reporting
    pub fn error_range(&self, range: Range<usize>) -> ErrorRange {
        ErrorRange::new(range.start, range.end, self.text)
    }
}
