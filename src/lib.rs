pub mod symbol;
pub mod token;
pub mod chariter;
pub mod lexer;
pub mod tokenize;
pub mod grammar;
pub mod productions;
pub mod parse;
pub mod namespace;
pub mod node;
pub mod translate;
pub mod error;
pub mod wasm;

mod xmlchar;
mod util;

use crate::error::CxmlError;
use crate::parse::Parser;
use crate::productions::CXML_GRAMMAR;
use crate::symbol::Nonterminal;
use crate::tokenize::cxml_lexer;
use crate::translate::Translator;

/// Translate a CXML expression into a pretty-printed XML document ending in a newline.
///
/// `w:rPr{w:b=on}` becomes
/// `<w:rPr xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" w:b="on"/>`.
pub fn translate(cxml: &str) -> Result<String, CxmlError> {
    let lexer = cxml_lexer(cxml);
    let ast = Parser::new(&CXML_GRAMMAR).parse(&lexer, Nonterminal::Root)?;
    let root_element = Translator::translate(&ast)?;
    root_element.xml()
}
