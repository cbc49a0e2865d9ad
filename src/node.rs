//! Element and attribute graph built from a CXML expression, and its rendering as XML.

use crate::error::CxmlError;
use crate::error::CxmlError::MixedContent;
use crate::namespace::{nsdecl_str, nsdecls_str, XML_PREFIX};
use crate::util::{add_setwise, subtract_setwise};

/// The namespace prefix of a qualified name, the empty string for a name in the default namespace
fn prefix_of(qname: &str) -> &str {
    match qname.find(':') {
        Some(idx) => &qname[..idx],
        None => "",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    /// An explicit namespace declaration, written `w:` in CXML
    NamespaceDeclaration { nspfx: String },
    /// A regular attribute like `w:val="1500"`
    StringAttribute { nspfx: String, qname: String, value: String },
}

impl Attribute {
    pub fn namespace_declaration(nspfx: &str) -> Attribute {
        Attribute::NamespaceDeclaration { nspfx: nspfx.to_string() }
    }

    pub fn string_attribute(qname: &str, value: &str) -> Attribute {
        Attribute::StringAttribute {
            nspfx: prefix_of(qname).to_string(),
            qname: qname.to_string(),
            value: value.to_string(),
        }
    }

    pub fn nspfx(&self) -> &str {
        match self {
            Attribute::NamespaceDeclaration { nspfx } |
            Attribute::StringAttribute { nspfx, .. } => nspfx,
        }
    }

    pub fn is_namespace_declaration(&self) -> bool {
        matches!(self, Attribute::NamespaceDeclaration { .. })
    }

    /// The attribute as it appears in a start tag, e.g. `w:val="1500"` or `xmlns:w="http://..."`
    pub fn to_xml(&self) -> Result<String, CxmlError> {
        match self {
            Attribute::NamespaceDeclaration { nspfx } => nsdecl_str(nspfx),
            Attribute::StringAttribute { qname, value, .. } => Ok(format!("{}=\"{}\"", qname, value)),
        }
    }
}

/// What an element holds besides its attributes. Text and child elements never mix.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Empty,
    Text(String),
    Children(Vec<Element>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    nspfx: String,
    tagname: String,
    attrs: Vec<Attribute>,
    content: Content,
}

impl Element {
    /// An element named `qname`. An empty `text` leaves the element free to take children.
    pub fn new(qname: &str, attrs: Vec<Attribute>, text: &str) -> Element {
        let content = if text.is_empty() { Content::Empty } else { Content::Text(text.to_string()) };
        Element {
            nspfx: prefix_of(qname).to_string(),
            tagname: qname.to_string(),
            attrs,
            content,
        }
    }

    pub fn nspfx(&self) -> &str {
        &self.nspfx
    }

    /// The qualified tag name, e.g. `w:rPr`
    pub fn tagname(&self) -> &str {
        &self.tagname
    }

    pub fn attrs(&self) -> &[Attribute] {
        &self.attrs
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn text(&self) -> &str {
        match &self.content {
            Content::Text(text) => text,
            _ => "",
        }
    }

    pub fn children(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Take ownership of `child` as the last child of this element
    pub fn add_child(&mut self, child: Element) -> Result<(), CxmlError> {
        match &mut self.content {
            Content::Empty => self.content = Content::Children(vec![child]),
            Content::Children(children) => children.push(child),
            Content::Text(_) => return Err(MixedContent { tag: self.tagname.clone() }),
        }
        Ok(())
    }

    /// Prefixes declared by this element's own `x:` attributes, in the order written
    pub fn explicit_nspfxs(&self) -> Vec<String> {
        self.attrs
            .iter()
            .filter(|a| a.is_namespace_declaration())
            .map(|a| a.nspfx().to_string())
            .collect()
    }

    /// Prefixes explicitly declared anywhere below this element, each once, in document order
    pub fn descendant_explicit_nspfxs(&self) -> Vec<String> {
        let mut nspfxs = vec![];
        for child in self.children() {
            add_setwise(&mut nspfxs, child.explicit_nspfxs());
            add_setwise(&mut nspfxs, child.descendant_explicit_nspfxs());
        }
        nspfxs
    }

    /// Prefixes used in a tag or attribute name anywhere in this tree, each once, in document
    /// order. The `xml` prefix is always bound and never included.
    pub fn tree_implicit_nspfxs(&self) -> Vec<String> {
        let mut nspfxs = vec![];
        if !self.nspfx.is_empty() {
            nspfxs.push(self.nspfx.clone());
        }
        add_setwise(&mut nspfxs, self.str_attr_nspfxs());
        for child in self.children() {
            add_setwise(&mut nspfxs, child.tree_implicit_nspfxs());
        }
        nspfxs.retain(|nspfx| nspfx != XML_PREFIX);
        nspfxs
    }

    fn str_attr_nspfxs(&self) -> Vec<String> {
        let mut nspfxs = vec![];
        add_setwise(
            &mut nspfxs,
            self.str_attrs().map(Attribute::nspfx).filter(|nspfx| !nspfx.is_empty()),
        );
        nspfxs
    }

    fn str_attrs(&self) -> impl Iterator<Item = &Attribute> {
        self.attrs.iter().filter(|a| !a.is_namespace_declaration())
    }

    /// All attributes, namespace declarations included, with a leading space
    fn attrs_str(&self) -> Result<String, CxmlError> {
        join_attrs(self.attrs.iter())
    }

    /// Pretty-print this element and its subtree, starting at `indent` spaces
    pub fn xml(&self, indent: usize) -> Result<String, CxmlError> {
        let mut xml = String::new();
        self.write_xml(&mut xml, indent, &self.attrs_str()?)?;
        Ok(xml)
    }

    fn write_xml(&self, xml: &mut String, indent: usize, attrs_str: &str) -> Result<(), CxmlError> {
        let indent_str = " ".repeat(indent);
        xml.push_str(&indent_str);
        xml.push('<');
        xml.push_str(&self.tagname);
        xml.push_str(attrs_str);
        match &self.content {
            Content::Empty => xml.push_str("/>\n"),
            // no indentation before the end tag when the element holds text
            Content::Text(text) => xml.push_str(&format!(">{}</{}>\n", text, self.tagname)),
            Content::Children(children) => {
                xml.push_str(">\n");
                for child in children {
                    child.write_xml(xml, indent + 2, &child.attrs_str()?)?;
                }
                xml.push_str(&format!("{}</{}>\n", indent_str, self.tagname));
            }
        }
        Ok(())
    }
}

fn join_attrs<'a, I: Iterator<Item = &'a Attribute>>(attrs: I) -> Result<String, CxmlError> {
    let mut attrs_str = String::new();
    for attr in attrs {
        attrs_str.push(' ');
        attrs_str.push_str(&attr.to_xml()?);
    }
    Ok(attrs_str)
}

/// The top element of a translated expression. Only the root carries the namespace
/// declarations of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct RootElement {
    element: Element,
}

impl RootElement {
    pub fn new(qname: &str, attrs: Vec<Attribute>, text: &str) -> RootElement {
        RootElement { element: Element::new(qname, attrs, text) }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn add_child(&mut self, child: Element) -> Result<(), CxmlError> {
        self.element.add_child(child)
    }

    /// Prefixes to declare on the root: its own prefix, then its explicit declarations, then
    /// every prefix used in the document. A prefix that a descendant declares explicitly is left
    /// to that descendant.
    pub fn nsdecls(&self) -> Vec<String> {
        let element = &self.element;
        let mut nspfxs = vec![];
        if !element.nspfx.is_empty() {
            nspfxs.push(element.nspfx.clone());
        }
        add_setwise(&mut nspfxs, element.explicit_nspfxs());
        add_setwise(&mut nspfxs, element.tree_implicit_nspfxs());
        subtract_setwise(&mut nspfxs, element.descendant_explicit_nspfxs());
        nspfxs
    }

    /// The XML document for this tree, indented two spaces per level, ending in a newline
    pub fn xml(&self) -> Result<String, CxmlError> {
        let mut attrs_str = nsdecls_str(self.nsdecls().as_slice())?;
        attrs_str.push_str(&join_attrs(self.element.str_attrs())?);
        let mut xml = String::new();
        self.element.write_xml(&mut xml, 0, &attrs_str)?;
        Ok(xml)
    }
}

impl From<Element> for RootElement {
    fn from(element: Element) -> Self {
        RootElement { element }
    }
}
