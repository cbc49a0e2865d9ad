//! The fixed set of grammar symbols of CXML.
//!
//! Terminals classify tokens, nonterminals head productions. The two categories are separate
//! types, so a terminal can never compare equal to a nonterminal.

use std::fmt::{Display, Formatter};

/// A token class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminal {
    /// The end-of-input sentinel
    Sntl,
    Colon,
    Comma,
    Equal,
    Name,
    Slash,
    Text,
    LBrace,
    RBrace,
    LParen,
    RParen,
}

/// A symbol that can appear as the head of a production
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nonterminal {
    Attr,
    AttrList,
    Attrs,
    Element,
    NsDecl,
    QName,
    Root,
    RootElement,
    StrAttr,
    Tree,
    TreeList,
    Trees,
}

const TERMINAL_NAMES: [&str; 11] = [
    "SNTL", "COLON", "COMMA", "EQUAL", "NAME", "SLASH", "TEXT", "LBRACE", "RBRACE", "LPAREN",
    "RPAREN",
];

const NONTERMINAL_NAMES: [&str; 12] = [
    "attr", "attr_list", "attrs", "element", "nsdecl", "qname", "root", "root_element",
    "str_attr", "tree", "tree_list", "trees",
];

impl Terminal {
    /// The name of this terminal as spelled in the grammar, e.g. `LBRACE`
    pub fn name(self) -> &'static str {
        TERMINAL_NAMES[self as usize]
    }
}

impl Nonterminal {
    /// The name of this nonterminal as spelled in the grammar, e.g. `attr_list`
    pub fn name(self) -> &'static str {
        NONTERMINAL_NAMES[self as usize]
    }
}

/// Either kind of grammar symbol, as found in a production body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Terminal(Terminal),
    Nonterminal(Nonterminal),
}

impl Symbol {
    pub fn is_terminal(self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }

    pub fn name(self) -> &'static str {
        match self {
            Symbol::Terminal(terminal) => terminal.name(),
            Symbol::Nonterminal(nonterminal) => nonterminal.name(),
        }
    }
}

impl From<Terminal> for Symbol {
    fn from(terminal: Terminal) -> Self {
        Symbol::Terminal(terminal)
    }
}

impl From<Nonterminal> for Symbol {
    fn from(nonterminal: Nonterminal) -> Self {
        Symbol::Nonterminal(nonterminal)
    }
}

impl Display for Terminal {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for Nonterminal {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
