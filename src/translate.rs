//! Evaluation of a CXML syntax tree into an element graph.
//!
//! There is one evaluation method per nonterminal. Each reduces a node to the value the
//! enclosing production needs: a name, attributes, elements, or the finished [RootElement].

use crate::error::CxmlError;
use crate::error::CxmlError::UnexpectedNode;
use crate::node::{Attribute, Element, RootElement};
use crate::parse::{AstChild, AstNode};
use crate::symbol::Nonterminal;
use crate::symbol::Terminal;
use crate::token::Token;

/// The result of evaluating any syntax tree node
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    QName(String),
    Attribute(Attribute),
    Attributes(Vec<Attribute>),
    Element(Element),
    Elements(Vec<Element>),
    RootElement(RootElement),
}

#[derive(Debug, Default)]
pub struct Translator {}

impl Translator {
    /// Build the element graph for a tree parsed from the `root` symbol
    pub fn translate(ast: &AstNode) -> Result<RootElement, CxmlError> {
        let root_element = Translator::default().root(expect_symbol(ast, Nonterminal::Root)?)?;
        log::debug!("translated tree rooted at <{}>", root_element.element().tagname());
        Ok(root_element)
    }

    /// Dispatch `node` to the evaluation method for its symbol
    pub fn evaluate(&self, node: &AstNode) -> Result<Value, CxmlError> {
        Ok(match node.symbol() {
            Nonterminal::Attr => Value::Attribute(self.attr(node)?),
            Nonterminal::AttrList => Value::Attributes(self.attr_list(node)?),
            Nonterminal::Attrs => Value::Attributes(self.attrs(node)?),
            Nonterminal::Element => Value::Element(self.element(node)?),
            Nonterminal::NsDecl => Value::Attribute(self.nsdecl(node)?),
            Nonterminal::QName => Value::QName(self.qname(node)?),
            Nonterminal::Root => Value::RootElement(self.root(node)?),
            Nonterminal::RootElement => Value::RootElement(self.root_element(node)?),
            Nonterminal::StrAttr => Value::Attribute(self.str_attr(node)?),
            Nonterminal::Tree => Value::Element(self.tree(node)?),
            Nonterminal::TreeList => Value::Elements(self.tree_list(node)?),
            Nonterminal::Trees => Value::Elements(self.trees(node)?),
        })
    }

    /// `nsdecl := NAME COLON`
    pub fn nsdecl(&self, node: &AstNode) -> Result<Attribute, CxmlError> {
        let name = token_at(node, 0, Terminal::Name)?;
        Ok(Attribute::namespace_declaration(name.lexeme()))
    }

    /// The qualified name as a single string, e.g. `w:rPr`
    pub fn qname(&self, node: &AstNode) -> Result<String, CxmlError> {
        let mut qname = String::new();
        for child in node.children() {
            let token = child.as_token().ok_or_else(|| unexpected("a NAME or COLON token", child))?;
            qname.push_str(token.lexeme());
        }
        Ok(qname)
    }

    /// `str_attr := qname EQUAL TEXT`
    pub fn str_attr(&self, node: &AstNode) -> Result<Attribute, CxmlError> {
        let qname = self.qname(node_at(node, 0, Nonterminal::QName)?)?;
        let value = token_at(node, 2, Terminal::Text)?;
        Ok(Attribute::string_attribute(&qname, value.lexeme()))
    }

    /// `attr := str_attr | nsdecl`
    pub fn attr(&self, node: &AstNode) -> Result<Attribute, CxmlError> {
        let child = child_at(node, 0)?;
        match child.as_node() {
            Some(inner) if inner.symbol() == Nonterminal::StrAttr => self.str_attr(inner),
            Some(inner) if inner.symbol() == Nonterminal::NsDecl => self.nsdecl(inner),
            _ => Err(unexpected("str_attr or nsdecl", child)),
        }
    }

    /// `attr_list := attr COMMA attr_list | attr`, flattened in source order
    pub fn attr_list(&self, node: &AstNode) -> Result<Vec<Attribute>, CxmlError> {
        let mut attrs = vec![self.attr(node_at(node, 0, Nonterminal::Attr)?)?];
        if node.children().len() == 3 {
            attrs.extend(self.attr_list(node_at(node, 2, Nonterminal::AttrList)?)?);
        }
        Ok(attrs)
    }

    /// `attrs := LBRACE attr_list RBRACE`
    pub fn attrs(&self, node: &AstNode) -> Result<Vec<Attribute>, CxmlError> {
        self.attr_list(node_at(node, 1, Nonterminal::AttrList)?)
    }

    /// `element := qname attrs? TEXT?`
    pub fn element(&self, node: &AstNode) -> Result<Element, CxmlError> {
        let (qname, attrs, text) = self.element_parts(node)?;
        Ok(Element::new(&qname, attrs, &text))
    }

    /// `root_element := qname attrs? TEXT?`
    pub fn root_element(&self, node: &AstNode) -> Result<RootElement, CxmlError> {
        let (qname, attrs, text) = self.element_parts(node)?;
        Ok(RootElement::new(&qname, attrs, &text))
    }

    /// `tree := element SLASH trees | element`. The top element of each tree below the slash
    /// becomes a child of this tree's element.
    pub fn tree(&self, node: &AstNode) -> Result<Element, CxmlError> {
        let mut element = self.element(node_at(node, 0, Nonterminal::Element)?)?;
        if node.children().len() == 3 {
            for child in self.trees(node_at(node, 2, Nonterminal::Trees)?)? {
                element.add_child(child)?;
            }
        }
        Ok(element)
    }

    /// `tree_list := tree COMMA tree_list | tree`
    pub fn tree_list(&self, node: &AstNode) -> Result<Vec<Element>, CxmlError> {
        let mut trees = vec![self.tree(node_at(node, 0, Nonterminal::Tree)?)?];
        if node.children().len() == 3 {
            trees.extend(self.tree_list(node_at(node, 2, Nonterminal::TreeList)?)?);
        }
        Ok(trees)
    }

    /// `trees := LPAREN tree_list RPAREN | tree`
    pub fn trees(&self, node: &AstNode) -> Result<Vec<Element>, CxmlError> {
        if node.children().len() == 3 {
            self.tree_list(node_at(node, 1, Nonterminal::TreeList)?)
        } else {
            Ok(vec![self.tree(node_at(node, 0, Nonterminal::Tree)?)?])
        }
    }

    /// `root := root_element SLASH trees SNTL | root_element SNTL`
    pub fn root(&self, node: &AstNode) -> Result<RootElement, CxmlError> {
        let mut root_element = self.root_element(node_at(node, 0, Nonterminal::RootElement)?)?;
        if node.children().len() == 4 {
            for child in self.trees(node_at(node, 2, Nonterminal::Trees)?)? {
                root_element.add_child(child)?;
            }
        }
        Ok(root_element)
    }

    fn element_parts(&self, node: &AstNode) -> Result<(String, Vec<Attribute>, String), CxmlError> {
        let mut qname = None;
        let mut attrs = vec![];
        let mut text = String::new();
        for child in node.children() {
            match child {
                AstChild::Node(inner) if inner.symbol() == Nonterminal::QName => {
                    qname = Some(self.qname(inner)?)
                }
                AstChild::Node(inner) if inner.symbol() == Nonterminal::Attrs => {
                    attrs = self.attrs(inner)?
                }
                AstChild::Token(token) if token.symbol() == Terminal::Text => {
                    text = token.lexeme().to_string()
                }
                _ => return Err(unexpected("qname, attrs or TEXT", child)),
            }
        }
        let qname = qname.ok_or_else(|| UnexpectedNode {
            expected: "qname".to_string(),
            found: node.to_string(),
        })?;
        Ok((qname, attrs, text))
    }
}

fn unexpected(expected: &str, found: &AstChild) -> CxmlError {
    UnexpectedNode { expected: expected.to_string(), found: found.symbol().to_string() }
}

fn expect_symbol(node: &AstNode, symbol: Nonterminal) -> Result<&AstNode, CxmlError> {
    if node.symbol() != symbol {
        return Err(UnexpectedNode { expected: symbol.to_string(), found: node.symbol().to_string() });
    }
    Ok(node)
}

fn child_at(node: &AstNode, idx: usize) -> Result<&AstChild, CxmlError> {
    node.children().get(idx).ok_or_else(|| UnexpectedNode {
        expected: format!("child {} of {}", idx, node.symbol()),
        found: node.to_string(),
    })
}

fn node_at(node: &AstNode, idx: usize, symbol: Nonterminal) -> Result<&AstNode, CxmlError> {
    let child = child_at(node, idx)?;
    match child.as_node() {
        Some(inner) => expect_symbol(inner, symbol),
        None => Err(unexpected(symbol.name(), child)),
    }
}

fn token_at(node: &AstNode, idx: usize, symbol: Terminal) -> Result<&Token, CxmlError> {
    let child = child_at(node, idx)?;
    match child.as_token() {
        Some(token) if token.symbol() == symbol => Ok(token),
        _ => Err(unexpected(symbol.name(), child)),
    }
}
