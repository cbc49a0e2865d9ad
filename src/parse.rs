use std::fmt::{Display, Formatter};

use crate::error::CxmlError;
use crate::error::CxmlError::ParseFailure;
use crate::grammar::{Grammar, Production};
use crate::lexer::Lexer;
use crate::symbol::{Nonterminal, Symbol, Terminal};
use crate::token::Token;

/// A child of an [AstNode], mirroring one symbol in the body of the matched production
#[derive(Debug, Clone, PartialEq)]
pub enum AstChild {
    Token(Token),
    Node(AstNode),
}

impl AstChild {
    pub fn symbol(&self) -> Symbol {
        match self {
            AstChild::Token(token) => token.symbol().into(),
            AstChild::Node(node) => node.symbol().into(),
        }
    }

    /// The concatenated lexemes of all tokens under this child
    pub fn value(&self) -> String {
        match self {
            AstChild::Token(token) => token.value(),
            AstChild::Node(node) => node.value(),
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            AstChild::Token(token) => Some(token),
            AstChild::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&AstNode> {
        match self {
            AstChild::Token(_) => None,
            AstChild::Node(node) => Some(node),
        }
    }
}

/// A node in the abstract syntax tree, labeled with the head of the production that matched
#[derive(Debug, Clone, PartialEq)]
pub struct AstNode {
    symbol: Nonterminal,
    children: Vec<AstChild>,
}

impl AstNode {
    pub fn new(symbol: Nonterminal, children: Vec<AstChild>) -> AstNode {
        AstNode { symbol, children }
    }

    pub fn symbol(&self) -> Nonterminal {
        self.symbol
    }

    pub fn name(&self) -> &'static str {
        self.symbol.name()
    }

    pub fn children(&self) -> &[AstChild] {
        &self.children
    }

    /// The concatenated lexemes of all tokens in this subtree
    pub fn value(&self) -> String {
        self.children.iter().map(AstChild::value).collect()
    }
}

impl Display for AstNode {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "AstNode({}, (", self.symbol)?;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match child {
                AstChild::Token(token) => write!(f, "{}", token)?,
                AstChild::Node(node) => write!(f, "{}", node)?,
            }
        }
        write!(f, "))")
    }
}

/// A successful match and the tokens following it, `None` if the symbol did not match
type Matched<'t, T> = Option<(T, &'t [Token])>;

/// Backtracking recursive descent parser.
///
/// A nonterminal is matched by trying its productions in declaration order and taking the first
/// one whose whole body matches. There is no lookahead and no memoization.
pub struct Parser<'g> {
    grammar: &'g Grammar,
}

impl<'g> Parser<'g> {
    pub fn new(grammar: &'g Grammar) -> Parser<'g> {
        Parser { grammar }
    }

    /// Lex the input of `lexer` and derive `start` from all of its tokens
    pub fn parse(&self, lexer: &Lexer, start: Nonterminal) -> Result<AstNode, CxmlError> {
        let tokens = lexer.tokenize()?;
        self.parse_tokens(&tokens, start, lexer.input())
    }

    /// Derive `start` from `tokens`. Every token must be consumed.
    pub fn parse_tokens(&self, tokens: &[Token], start: Nonterminal, input: &str) -> Result<AstNode, CxmlError> {
        match self.match_nonterminal(start, tokens) {
            Some((node, [])) => {
                log::debug!("parsed {} from '{}'", start, input);
                Ok(node)
            }
            Some((_, remaining)) => Err(ParseFailure {
                start: start.name(),
                input: input.to_string(),
                leftover: remaining.iter().map(|t| t.lexeme().to_string()).collect(),
            }),
            None => Err(ParseFailure { start: start.name(), input: input.to_string(), leftover: vec![] }),
        }
    }

    fn match_symbol<'t>(&self, symbol: Symbol, tokens: &'t [Token]) -> Matched<'t, AstChild> {
        match symbol {
            Symbol::Terminal(terminal) => {
                let (token, remaining) = Self::match_terminal(terminal, tokens)?;
                Some((AstChild::Token(token.clone()), remaining))
            }
            Symbol::Nonterminal(nonterminal) => {
                let (node, remaining) = self.match_nonterminal(nonterminal, tokens)?;
                Some((AstChild::Node(node), remaining))
            }
        }
    }

    fn match_terminal<'t>(terminal: Terminal, tokens: &'t [Token]) -> Matched<'t, &'t Token> {
        match tokens.split_first() {
            Some((head, tail)) if head.symbol() == terminal => Some((head, tail)),
            _ => None,
        }
    }

    fn match_nonterminal<'t>(&self, nonterminal: Nonterminal, tokens: &'t [Token]) -> Matched<'t, AstNode> {
        self.grammar
            .productions(nonterminal)
            .find_map(|production| self.match_production(production, tokens))
    }

    fn match_production<'t>(&self, production: &Production, tokens: &'t [Token]) -> Matched<'t, AstNode> {
        log::trace!("trying {} at {} remaining tokens", production.head(), tokens.len());
        let mut remaining = tokens;
        let mut children = Vec::with_capacity(production.body().len());
        for symbol in production.body() {
            let (child, rest) = self.match_symbol(*symbol, remaining)?;
            children.push(child);
            remaining = rest;
        }
        Some((AstNode::new(production.head(), children), remaining))
    }
}
