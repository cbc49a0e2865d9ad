use rstest::rstest;

use cxml_rust::error::CxmlError::*;
use cxml_rust::grammar;
use cxml_rust::parse::{AstChild, AstNode, Parser};
use cxml_rust::productions::CXML_GRAMMAR;
use cxml_rust::symbol::Nonterminal::*;
use cxml_rust::symbol::Terminal::*;
use cxml_rust::symbol::{Nonterminal, Symbol};
use cxml_rust::token::Token;
use cxml_rust::tokenize::cxml_lexer;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parse a fragment of CXML, without the end-of-input sentinel, from `start`
fn parse_fragment(input: &str, start: Nonterminal) -> AstNode {
    init();
    let lexer = cxml_lexer(input).emit_sntl(false);
    Parser::new(&CXML_GRAMMAR).parse(&lexer, start).unwrap()
}

fn child_symbols(node: &AstNode) -> Vec<Symbol> {
    node.children().iter().map(AstChild::symbol).collect()
}

#[rstest]
#[case("foo:", NsDecl, "foo:")]
#[case("w:rPr", QName, "w:rPr")]
#[case("foo", QName, "foo")]
#[case("w:val=42", StrAttr, "w:val=42")]
#[case("w:", Attr, "w:")]
#[case("w:b=off", Attr, "w:b=off")]
#[case("r:,w:b=on", AttrList, "r:,w:b=on")]
#[case("{r:,w:b=on}", Attrs, "{r:,w:b=on}")]
#[case("w:r{w:b=on}foo", Element, "w:r{w:b=on}foo")]
#[case("foo/bar", Tree, "foo/bar")]
#[case("foo/(bar,baz)", Tree, "foo/(bar,baz)")]
#[case("foo,bar", TreeList, "foo,bar")]
#[case("(foo,bar/baz)", Trees, "(foo,bar/baz)")]
#[case("w:rPr{w:b=on}", RootElement, "w:rPr{w:b=on}")]
pub fn test_value(#[case] input: &str, #[case] start: Nonterminal, #[case] value: &str) {
    let node = parse_fragment(input, start);
    assert_eq!(start, node.symbol());
    assert_eq!(value, node.value());
}

#[rstest]
#[case("w:b=off", Attr, &[StrAttr.into()])]
#[case("w:", Attr, &[NsDecl.into()])]
#[case("w:rPr", QName, &[Name.into(), Colon.into(), Name.into()])]
#[case("foo", QName, &[Name.into()])]
#[case("w:b=off", AttrList, &[Attr.into()])]
#[case("r:,w:b=off", AttrList, &[Attr.into(), Comma.into(), AttrList.into()])]
#[case("foo", Element, &[QName.into()])]
#[case("foo\"bar\"", Element, &[QName.into(), Text.into()])]
#[case("foo{a=b}", Element, &[QName.into(), Attrs.into()])]
#[case("foo{a=b}bar", Element, &[QName.into(), Attrs.into(), Text.into()])]
#[case("foo", Trees, &[Tree.into()])]
#[case("(foo,bar)", Trees, &[LParen.into(), TreeList.into(), RParen.into()])]
#[case("foo/bar", Tree, &[Element.into(), Slash.into(), Trees.into()])]
pub fn test_children(#[case] input: &str, #[case] start: Nonterminal, #[case] symbols: &[Symbol]) {
    let node = parse_fragment(input, start);
    assert_eq!(symbols.to_vec(), child_symbols(&node));
}

#[test]
pub fn test_root() {
    init();
    let lexer = cxml_lexer("w:rPr{r:,w:val=\"8,7\"}/(w:r{r:id=1}foo,w:r{r:id=3})");
    let root = Parser::new(&CXML_GRAMMAR).parse(&lexer, Root).unwrap();
    let expected: Vec<Symbol> = vec![RootElement.into(), Slash.into(), Trees.into(), Sntl.into()];
    assert_eq!(expected, child_symbols(&root));
    // quotes are not part of the TEXT lexeme
    assert_eq!("w:rPr{r:,w:val=8,7}/(w:r{r:id=1}foo,w:r{r:id=3})", root.value());
}

#[test]
pub fn test_root_without_trees() {
    init();
    let root = Parser::new(&CXML_GRAMMAR).parse(&cxml_lexer(" w : rPr "), Root).unwrap();
    let expected: Vec<Symbol> = vec![RootElement.into(), Sntl.into()];
    assert_eq!(expected, child_symbols(&root));
    assert_eq!("w:rPr", root.value());
}

#[test]
pub fn test_display() {
    let node = parse_fragment("w:", NsDecl);
    assert_eq!("AstNode(nsdecl, (Token(NAME, 'w'), Token(COLON, ':')))", node.to_string());
}

#[test]
pub fn test_parse_tokens() {
    let tokens = vec![Token::new(Name, "w"), Token::new(Colon, ":"), Token::new(Name, "t")];
    let node = Parser::new(&CXML_GRAMMAR).parse_tokens(&tokens, QName, "w:t").unwrap();
    let expected = AstNode::new(
        QName,
        tokens.iter().cloned().map(AstChild::Token).collect(),
    );
    assert_eq!(expected, node);
}

#[test]
pub fn test_no_match() {
    init();
    let actual_err = Parser::new(&CXML_GRAMMAR).parse(&cxml_lexer("foo/(bar,baz)/boo"), Root).unwrap_err();
    assert!(matches!(actual_err, ParseFailure { start: "root", ref leftover, .. } if leftover.is_empty()));
    assert_eq!("foo/(bar,baz)/boo", actual_err.get_target());
}

#[test]
pub fn test_dangling_namespace_prefix() {
    let actual_err = Parser::new(&CXML_GRAMMAR).parse(&cxml_lexer("w:"), Root).unwrap_err();
    assert!(matches!(actual_err, ParseFailure { .. }));
}

#[test]
pub fn test_not_all_tokens_consumed() {
    let lexer = cxml_lexer("foo,bar").emit_sntl(false);
    let actual_err = Parser::new(&CXML_GRAMMAR).parse(&lexer, Tree).unwrap_err();
    match actual_err {
        ParseFailure { start, leftover, .. } => {
            assert_eq!("tree", start);
            assert_eq!(vec![",".to_string(), "bar".to_string()], leftover);
        }
        other => panic!("unexpected error {}", other),
    }
}

#[test]
pub fn test_lexical_errors_pass_through() {
    let actual_err = Parser::new(&CXML_GRAMMAR).parse(&cxml_lexer("foo{a=\"b}"), Root).unwrap_err();
    assert!(matches!(actual_err, UnterminatedQuote { .. }));
}

#[test]
pub fn test_first_match_wins() {
    // the shorter alternative is listed first, so it is taken even though the longer one
    // would consume every token
    let grammar = grammar! {
        QName => Name;
        QName => Name, Colon, Name;
    };
    let lexer = cxml_lexer("w:t").emit_sntl(false);
    let actual_err = Parser::new(&grammar).parse(&lexer, QName).unwrap_err();
    assert!(matches!(actual_err, ParseFailure { ref leftover, .. } if leftover.len() == 2));
}

#[test]
pub fn test_backtracking() {
    // `foo` alone first matches as an element with attrs, which fails, then falls back to
    // the shorter alternatives
    let node = parse_fragment("foo", Element);
    assert_eq!(1, node.children().len());
    let node = parse_fragment("foo/(bar,baz)", Tree);
    let trees = node.children()[2].as_node().unwrap();
    assert_eq!(Trees, trees.symbol());
    assert_eq!("(bar,baz)", trees.value());
}
