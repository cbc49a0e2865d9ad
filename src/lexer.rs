//! Generic state-function lexer.
//!
//! A lexical specification is a set of [State] functions. Each one consumes characters through a
//! [CharIter], optionally emits a token, and names the state to run next. Returning `Ok(None)`
//! ends the token stream.

use std::fmt::{Debug, Formatter};

use crate::chariter::CharIter;
use crate::error::CxmlError;
use crate::error::CxmlError::NotAllInputConsumed;
use crate::symbol::Terminal;
use crate::token::Token;

#[derive(Clone, Copy)]
pub struct State(pub fn(&mut CharIter) -> Result<Option<State>, CxmlError>);

impl Debug for State {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "State({:p})", self.0 as *const ())
    }
}

/// A lexer over one input string. It can be iterated any number of times, every pass starts from
/// the beginning of the input.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    start_state: State,
    emit_sntl: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str, start_state: State) -> Lexer<'a> {
        Lexer { input, start_state, emit_sntl: true }
    }

    /// Whether the end-of-input sentinel token is passed on to the caller
    pub fn emit_sntl(mut self, emit_sntl: bool) -> Lexer<'a> {
        self.emit_sntl = emit_sntl;
        self
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Start a fresh pass over the input
    pub fn tokens(&self) -> Tokens<'a> {
        Tokens {
            cs: CharIter::new(self.input),
            state: Some(self.start_state),
            emit_sntl: self.emit_sntl,
            done: false,
        }
    }

    /// Collect all tokens of a fresh pass, stopping at the first error
    pub fn tokenize(&self) -> Result<Vec<Token>, CxmlError> {
        let tokens = self.tokens().collect::<Result<Vec<Token>, CxmlError>>()?;
        log::debug!("lexed {} tokens from '{}'", tokens.len(), self.input);
        Ok(tokens)
    }
}

impl<'a> IntoIterator for &Lexer<'a> {
    type Item = Result<Token, CxmlError>;
    type IntoIter = Tokens<'a>;

    fn into_iter(self) -> Tokens<'a> {
        self.tokens()
    }
}

/// Pull-based token stream. State functions only run when the queue of emitted tokens is empty.
pub struct Tokens<'a> {
    cs: CharIter<'a>,
    state: Option<State>,
    emit_sntl: bool,
    done: bool,
}

impl<'a> Tokens<'a> {
    fn pop_token(&mut self) -> Option<Token> {
        while let Some(token) = self.cs.pop_token() {
            if token.symbol() == Terminal::Sntl && !self.emit_sntl {
                continue;
            }
            return Some(token);
        }
        None
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Result<Token, CxmlError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            if let Some(token) = self.pop_token() {
                return Some(Ok(token));
            }
            let state = match self.state.take() {
                Some(state) => state,
                None => break,
            };
            match (state.0)(&mut self.cs) {
                Ok(next_state) => self.state = next_state,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
        self.done = true;
        if !self.cs.is_exhausted() {
            let start = self.cs.start();
            return Some(Err(NotAllInputConsumed {
                range: self.cs.error_range(start..self.cs.text().len()),
            }));
        }
        None
    }
}
