//! Lexical rules of CXML, expressed as state functions for [Lexer].

use crate::chariter::CharIter;
use crate::error::CxmlError;
use crate::error::CxmlError::{IllegalCharacter, UnexpectedEndOfInput, UnterminatedQuote};
use crate::lexer::{Lexer, State};
use crate::symbol::Terminal;
use crate::symbol::Terminal::*;
use crate::xmlchar::CxmlChar;

pub const LEX_START: State = State(lex_start);
pub const LEX_EOF: State = State(lex_eof);
pub const LEX_NAME: State = State(lex_name);
pub const LEX_PUNCTUATION: State = State(lex_punctuation);
pub const LEX_QUOTED_STRING: State = State(lex_quoted_string);
pub const LEX_TEXT: State = State(lex_text);
pub const LEX_WHITESPACE: State = State(lex_whitespace);

/// A lexer for a complete CXML expression
pub fn cxml_lexer(cxml: &str) -> Lexer<'_> {
    Lexer::new(cxml, LEX_START)
}

/// In-between tokens. This is where every expression starts and every token but a value ends.
fn lex_start(cs: &mut CharIter) -> Result<Option<State>, CxmlError> {
    let c = match cs.peek_char() {
        None => return Ok(Some(LEX_EOF)),
        Some(c) => c,
    };
    log::trace!("start state at '{}'", c);
    if c.is_cxml_whitespace() {
        Ok(Some(LEX_WHITESPACE))
    } else if c.is_cxml_name_start_char() {
        Ok(Some(LEX_NAME))
    } else if c.is_cxml_punctuation() {
        Ok(Some(LEX_PUNCTUATION))
    } else if c == '"' {
        Ok(Some(LEX_QUOTED_STRING))
    } else {
        let pos = cs.pos();
        Err(IllegalCharacter { ch: c, range: cs.error_range(pos..pos + c.len_utf8()) })
    }
}

/// Emit the sentinel and end the token stream
fn lex_eof(cs: &mut CharIter) -> Result<Option<State>, CxmlError> {
    cs.emit(Sntl);
    Ok(None)
}

/// NAME ::= NameStartChar NameChar*
fn lex_name(cs: &mut CharIter) -> Result<Option<State>, CxmlError> {
    cs.accept_run(|c| c.is_cxml_name_char());
    cs.emit(Name);
    Ok(Some(LEX_START))
}

/// A single punctuation character. `=` and `}` are followed by a value, so lexing continues
/// in the text state after them.
fn lex_punctuation(cs: &mut CharIter) -> Result<Option<State>, CxmlError> {
    let c = match cs.next_char() {
        Some(c) => c,
        None => {
            cs.backup();
            let len = cs.text().len();
            return Err(UnexpectedEndOfInput { expected: "punctuation", range: cs.error_range(len..len) });
        }
    };
    let symbol = match punctuation_terminal(c) {
        Some(symbol) => symbol,
        None => {
            cs.backup();
            let pos = cs.pos();
            return Err(IllegalCharacter { ch: c, range: cs.error_range(pos..pos + c.len_utf8()) });
        }
    };
    cs.emit(symbol);
    if c == '=' || c == '}' {
        Ok(Some(LEX_TEXT))
    } else {
        Ok(Some(LEX_START))
    }
}

fn punctuation_terminal(c: char) -> Option<Terminal> {
    match c {
        ':' => Some(Colon),
        ',' => Some(Comma),
        '{' => Some(LBrace),
        '}' => Some(RBrace),
        '=' => Some(Equal),
        '/' => Some(Slash),
        '(' => Some(LParen),
        ')' => Some(RParen),
        _ => None,
    }
}

/// A double-quoted string, emitted as TEXT without its quotes
fn lex_quoted_string(cs: &mut CharIter) -> Result<Option<State>, CxmlError> {
    let quote_pos = cs.pos();
    cs.skip(1)?;
    cs.accept_until(|c| c == '"');
    if cs.peek_char() != Some('"') {
        return Err(UnterminatedQuote { range: cs.error_range(quote_pos..cs.text().len()) });
    }
    cs.emit(Text);
    cs.skip(1)?;
    Ok(Some(LEX_START))
}

/// A value, either quoted or raw. A raw value runs until `,`, `}`, `/` or `)`, spaces included.
fn lex_text(cs: &mut CharIter) -> Result<Option<State>, CxmlError> {
    match cs.peek_char() {
        None => Ok(Some(LEX_EOF)),
        Some('"') => Ok(Some(LEX_QUOTED_STRING)),
        Some(c) => {
            if !c.is_cxml_text_terminator() {
                cs.accept_until(|c| c.is_cxml_text_terminator());
                cs.emit(Text);
            }
            Ok(Some(LEX_START))
        }
    }
}

fn lex_whitespace(cs: &mut CharIter) -> Result<Option<State>, CxmlError> {
    cs.accept_run(|c| c.is_cxml_whitespace());
    cs.ignore();
    Ok(Some(LEX_START))
}
