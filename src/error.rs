use thiserror::Error;

use crate::error::CxmlError::*;

/// A byte range in the CXML input that an error points at, together with the full input.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorRange {
    pub start: usize,
    pub end: usize,
    pub input: String,
}

impl ErrorRange {
    pub fn new(start: usize, end: usize, input: &str) -> ErrorRange {
        ErrorRange { start, end, input: input.to_string() }
    }

    /// The slice of the input covered by this range
    pub fn target(&self) -> &str {
        &self.input[self.start..self.end]
    }
}

#[derive(Debug, Error)]
pub enum CxmlError {
    #[error("illegal character '{ch}' at position {} in '{}'", .range.start, .range.input)]
    IllegalCharacter { ch: char, range: ErrorRange },

    #[error("unterminated quote at position {} in '{}'", .range.start, .range.input)]
    UnterminatedQuote { range: ErrorRange },

    #[error("cannot skip at position {} in '{}': {reason}", .range.start, .range.input)]
    InvalidSkip { range: ErrorRange, reason: &'static str },

    #[error("unexpected end of input in '{}', expected {expected}", .range.input)]
    UnexpectedEndOfInput { expected: &'static str, range: ErrorRange },

    #[error("not all input consumed, stopped at position {} in '{}'", .range.start, .range.input)]
    NotAllInputConsumed { range: ErrorRange },

    #[error("syntax error parsing {start} in '{input}'{}", leftover_suffix(.leftover))]
    ParseFailure { start: &'static str, input: String, leftover: Vec<String> },

    #[error("unknown namespace prefix '{prefix}'")]
    UnknownNamespacePrefix { prefix: String },

    #[error("element <{tag}> cannot have both text and child elements")]
    MixedContent { tag: String },

    #[error("malformed syntax tree: expected {expected}, found {found}")]
    UnexpectedNode { expected: String, found: String },
}

fn leftover_suffix(leftover: &[String]) -> String {
    if leftover.is_empty() {
        String::new()
    } else {
        format!(", unconsumed tokens {:?}", leftover)
    }
}

impl CxmlError {
    /// The text this error points at
    pub fn get_target(&self) -> String {
        match self {
            IllegalCharacter { range, .. } |
            UnterminatedQuote { range } |
            InvalidSkip { range, .. } |
            UnexpectedEndOfInput { range, .. } |
            NotAllInputConsumed { range } => range.target().to_string(),
            ParseFailure { input, .. } => input.to_string(),
            UnknownNamespacePrefix { prefix } => prefix.to_string(),
            MixedContent { tag } => tag.to_string(),
            UnexpectedNode { found, .. } => found.to_string(),
        }
    }

    /// If this error was raised while breaking the input into tokens because of malformed input
    pub fn is_lexical(&self) -> bool {
        matches!(self, IllegalCharacter { .. } | UnterminatedQuote { .. })
    }
}
