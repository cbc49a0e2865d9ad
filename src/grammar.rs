use crate::symbol::{Nonterminal, Symbol};

/// A production rule `head := body`
#[derive(Debug, Clone, PartialEq)]
pub struct Production {
    head: Nonterminal,
    body: Vec<Symbol>,
}

impl Production {
    pub fn new<I: IntoIterator<Item = Symbol>>(head: Nonterminal, body: I) -> Production {
        Production { head, body: body.into_iter().collect() }
    }

    /// The nonterminal produced by this rule
    pub fn head(&self) -> Nonterminal {
        self.head
    }

    /// The symbols that derive the head, matched left to right
    pub fn body(&self) -> &[Symbol] {
        &self.body
    }
}

/// An ordered collection of productions.
///
/// Productions sharing a head are alternatives, and they are tried in the order they were
/// declared. Earlier alternatives take priority over later ones.
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    productions: Vec<Production>,
}

impl Grammar {
    pub fn new(productions: Vec<Production>) -> Grammar {
        Grammar { productions }
    }

    /// Build a grammar from `(head, body)` pairs, keeping their order
    pub fn from_seq(head_body_pairs: &[(Nonterminal, &[Symbol])]) -> Grammar {
        Grammar::new(
            head_body_pairs
                .iter()
                .map(|(head, body)| Production::new(*head, body.iter().copied()))
                .collect(),
        )
    }

    /// The alternatives for `head`, in declaration order
    pub fn productions(&self, head: Nonterminal) -> impl Iterator<Item = &Production> + '_ {
        self.productions.iter().filter(move |p| p.head == head)
    }

    pub fn len(&self) -> usize {
        self.productions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }
}

/// Declare a [Grammar], one production per line:
///
/// ```ignore
/// grammar! {
///     Tree => Element, Slash, Trees;
///     Tree => Element;
/// }
/// ```
#[macro_export]
macro_rules! grammar {
    ($($head:expr => $($symbol:expr),+);+ $(;)?) => {
        $crate::grammar::Grammar::new(vec![
            $($crate::grammar::Production::new(
                $head,
                vec![$($crate::symbol::Symbol::from($symbol)),+],
            )),+
        ])
    };
}
