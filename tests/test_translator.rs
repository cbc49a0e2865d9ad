use cxml_rust::error::CxmlError::*;
use cxml_rust::node::{Attribute, Element};
use cxml_rust::parse::{AstChild, AstNode, Parser};
use cxml_rust::productions::CXML_GRAMMAR;
use cxml_rust::symbol::Nonterminal;
use cxml_rust::symbol::Nonterminal::*;
use cxml_rust::symbol::Terminal;
use cxml_rust::token::Token;
use cxml_rust::tokenize::cxml_lexer;
use cxml_rust::translate::{Translator, Value};

fn ast(input: &str, start: Nonterminal) -> AstNode {
    let lexer = cxml_lexer(input).emit_sntl(start == Root);
    Parser::new(&CXML_GRAMMAR).parse(&lexer, start).unwrap()
}

fn token(symbol: Terminal, lexeme: &str) -> AstChild {
    AstChild::Token(Token::new(symbol, lexeme))
}

fn node(symbol: Nonterminal, children: Vec<AstChild>) -> AstChild {
    AstChild::Node(AstNode::new(symbol, children))
}

fn evaluate(input: &str, start: Nonterminal) -> Value {
    Translator::default().evaluate(&ast(input, start)).unwrap()
}

#[test]
pub fn test_qname() {
    assert_eq!(Value::QName("w:rPr".to_string()), evaluate("w : rPr", QName));
    assert_eq!(Value::QName("foo".to_string()), evaluate("foo", QName));
}

#[test]
pub fn test_attr() {
    assert_eq!(Value::Attribute(Attribute::namespace_declaration("r")), evaluate("r:", NsDecl));
    assert_eq!(Value::Attribute(Attribute::namespace_declaration("r")), evaluate("r:", Attr));
    assert_eq!(
        Value::Attribute(Attribute::string_attribute("w:val", "8,7")),
        evaluate("w:val=\"8,7\"", StrAttr)
    );
}

#[test]
pub fn test_attrs_keep_source_order() {
    let expected = vec![
        Attribute::string_attribute("w:b", "on"),
        Attribute::namespace_declaration("r"),
        Attribute::string_attribute("b", "c"),
    ];
    assert_eq!(Value::Attributes(expected.clone()), evaluate("w:b=on,r:,b=c", AttrList));
    assert_eq!(Value::Attributes(expected), evaluate("{w:b=on,r:,b=c}", Attrs));
}

#[test]
pub fn test_element() {
    let expected = Element::new("w:r", vec![Attribute::string_attribute("r:id", "1")], "foo");
    assert_eq!(Value::Element(expected), evaluate("w:r{r:id=1}foo", Nonterminal::Element));
}

#[test]
pub fn test_tree() {
    let mut expected = Element::new("foo", vec![], "");
    let mut bar = Element::new("bar", vec![], "");
    bar.add_child(Element::new("baz", vec![], "")).unwrap();
    expected.add_child(bar).unwrap();
    expected.add_child(Element::new("bar", vec![], "")).unwrap();
    assert_eq!(Value::Element(expected), evaluate("foo/(bar/baz,bar)", Tree));
}

#[test]
pub fn test_trees() {
    let value = evaluate("(foo,bar/baz)", Trees);
    match value {
        Value::Elements(elements) => {
            let tagnames: Vec<&str> = elements.iter().map(Element::tagname).collect();
            assert_eq!(vec!["foo", "bar"], tagnames);
            assert_eq!("baz", elements[1].children()[0].tagname());
        }
        other => panic!("unexpected value {:?}", other),
    }
}

#[test]
pub fn test_translate() {
    let root_ast = ast("w:rPr{r:,w:val=\"8,7\"}/(w:r{r:id=1}foobar,w:r{r:id=3})", Root);
    let root = Translator::translate(&root_ast).unwrap();
    let element = root.element();
    assert_eq!("w:rPr", element.tagname());
    assert_eq!(2, element.attrs().len());
    assert_eq!(2, element.children().len());
    assert_eq!("foobar", element.children()[0].text());
    assert_eq!(vec!["w", "r"], root.nsdecls());
}

#[test]
pub fn test_translate_requires_root() {
    let actual_err = Translator::translate(&ast("foo/bar", Tree)).unwrap_err();
    assert!(matches!(actual_err, UnexpectedNode { .. }));
    assert_eq!("tree", actual_err.get_target());
}

#[test]
pub fn test_text_with_children() {
    let actual_err = Translator::default().evaluate(&ast("foo\"bar\"/baz", Root)).unwrap_err();
    assert!(matches!(actual_err, MixedContent { .. }));
    assert_eq!("foo", actual_err.get_target());
}

#[test]
pub fn test_translate_hand_built_non_root() {
    let element = AstNode::new(Nonterminal::Element, vec![node(QName, vec![token(Terminal::Name, "foo")])]);
    let actual_err = Translator::translate(&element).unwrap_err();
    assert!(matches!(actual_err, UnexpectedNode { ref expected, .. } if expected == "root"));
    assert_eq!("element", actual_err.get_target());
}

#[test]
pub fn test_str_attr_without_text() {
    let str_attr = AstNode::new(StrAttr, vec![
        node(QName, vec![token(Terminal::Name, "w")]),
        token(Terminal::Equal, "="),
    ]);
    let actual_err = Translator::default().evaluate(&str_attr).unwrap_err();
    assert!(matches!(actual_err, UnexpectedNode { ref expected, .. } if expected == "child 2 of str_attr"));
    assert_eq!(
        "AstNode(str_attr, (AstNode(qname, (Token(NAME, 'w'))), Token(EQUAL, '=')))",
        actual_err.get_target()
    );
}

#[test]
pub fn test_element_without_qname() {
    let element = AstNode::new(Nonterminal::Element, vec![token(Terminal::Text, "foo")]);
    let actual_err = Translator::default().evaluate(&element).unwrap_err();
    assert!(matches!(actual_err, UnexpectedNode { ref expected, .. } if expected == "qname"));
    assert_eq!("AstNode(element, (Token(TEXT, 'foo')))", actual_err.get_target());
}

#[test]
pub fn test_element_with_stray_child() {
    let element = AstNode::new(Nonterminal::Element, vec![
        node(QName, vec![token(Terminal::Name, "foo")]),
        token(Terminal::Equal, "="),
    ]);
    let actual_err = Translator::default().evaluate(&element).unwrap_err();
    assert!(matches!(actual_err, UnexpectedNode { .. }));
    assert_eq!("EQUAL", actual_err.get_target());
}

#[test]
pub fn test_wrong_token() {
    let nsdecl = AstNode::new(NsDecl, vec![token(Terminal::Text, "w"), token(Terminal::Colon, ":")]);
    let actual_err = Translator::default().evaluate(&nsdecl).unwrap_err();
    assert!(matches!(actual_err, UnexpectedNode { ref expected, .. } if expected == "NAME"));
    assert_eq!("TEXT", actual_err.get_target());
}

#[test]
pub fn test_token_in_place_of_node() {
    let attr = AstNode::new(Attr, vec![token(Terminal::Colon, ":")]);
    let actual_err = Translator::default().evaluate(&attr).unwrap_err();
    assert!(matches!(actual_err, UnexpectedNode { .. }));
    assert_eq!("COLON", actual_err.get_target());

    let qname = AstNode::new(QName, vec![node(NsDecl, vec![])]);
    let actual_err = Translator::default().evaluate(&qname).unwrap_err();
    assert_eq!("nsdecl", actual_err.get_target());
}

#[test]
pub fn test_wrong_nonterminal() {
    let attrs = AstNode::new(Attrs, vec![
        token(Terminal::LBrace, "{"),
        node(Attr, vec![node(NsDecl, vec![token(Terminal::Name, "r"), token(Terminal::Colon, ":")])]),
        token(Terminal::RBrace, "}"),
    ]);
    let actual_err = Translator::default().evaluate(&attrs).unwrap_err();
    assert!(matches!(actual_err, UnexpectedNode { ref expected, .. } if expected == "attr_list"));
    assert_eq!("attr", actual_err.get_target());
}
