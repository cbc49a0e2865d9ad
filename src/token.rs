use std::fmt::{Display, Formatter};

use crate::symbol::Terminal;

/// A lexeme classified by the terminal symbol it is an instance of
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    symbol: Terminal,
    lexeme: String,
}

impl Token {
    pub fn new(symbol: Terminal, lexeme: &str) -> Token {
        Token { symbol, lexeme: lexeme.to_string() }
    }

    pub fn symbol(&self) -> Terminal {
        self.symbol
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Same as [lexeme](Token::lexeme), the leaf value when a token appears in a syntax tree
    pub fn value(&self) -> String {
        self.lexeme.clone()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Token({}, '{}')", self.symbol, self.lexeme)
    }
}
