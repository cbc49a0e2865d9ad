use once_cell::sync::Lazy;

use crate::grammar;
use crate::grammar::Grammar;
use crate::symbol::Nonterminal::*;
use crate::symbol::Terminal::*;

/// The productions of CXML. Alternatives are listed longest first, the parser takes the first
/// one that matches.
pub static CXML_GRAMMAR: Lazy<Grammar> = Lazy::new(|| grammar! {
    Root => RootElement, Slash, Trees, Sntl;
    Root => RootElement, Sntl;
    RootElement => QName, Attrs, Text;
    RootElement => QName, Attrs;
    RootElement => QName, Text;
    RootElement => QName;
    Trees => LParen, TreeList, RParen;
    Trees => Tree;
    TreeList => Tree, Comma, TreeList;
    TreeList => Tree;
    Tree => Element, Slash, Trees;
    Tree => Element;
    Element => QName, Attrs, Text;
    Element => QName, Attrs;
    Element => QName, Text;
    Element => QName;
    Attrs => LBrace, AttrList, RBrace;
    AttrList => Attr, Comma, AttrList;
    AttrList => Attr;
    Attr => StrAttr;
    Attr => NsDecl;
    StrAttr => QName, Equal, Text;
    QName => Name, Colon, Name;
    QName => Name;
    NsDecl => Name, Colon;
});
