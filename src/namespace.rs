use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::CxmlError;
use crate::error::CxmlError::UnknownNamespacePrefix;

/// The prefix that is bound in every XML document and never needs a declaration
pub const XML_PREFIX: &str = "xml";

static NSMAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut nsmap = HashMap::new();
    nsmap.insert("a", "http://schemas.openxmlformats.org/drawingml/2006/main");
    nsmap.insert("c", "http://schemas.openxmlformats.org/drawingml/2006/chart");
    nsmap.insert("dgm", "http://schemas.openxmlformats.org/drawingml/2006/diagram");
    nsmap.insert("pic", "http://schemas.openxmlformats.org/drawingml/2006/picture");
    nsmap.insert("r", "http://schemas.openxmlformats.org/officeDocument/2006/relationships");
    nsmap.insert("w", "http://schemas.openxmlformats.org/wordprocessingml/2006/main");
    nsmap.insert("wp", "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing");
    nsmap.insert(XML_PREFIX, "http://www.w3.org/XML/1998/namespace");
    nsmap
});

/// The namespace URI bound to `nspfx`
pub fn namespace_uri(nspfx: &str) -> Result<&'static str, CxmlError> {
    NSMAP
        .get(nspfx)
        .copied()
        .ok_or_else(|| UnknownNamespacePrefix { prefix: nspfx.to_string() })
}

/// A namespace declaration attribute, e.g. `xmlns:w="http://..."`
pub fn nsdecl_str(nspfx: &str) -> Result<String, CxmlError> {
    Ok(format!("xmlns:{}=\"{}\"", nspfx, namespace_uri(nspfx)?))
}

/// A declaration for each of `nspfxs` in the order given, each with a leading space
pub fn nsdecls_str<S: AsRef<str>>(nspfxs: &[S]) -> Result<String, CxmlError> {
    let mut nsdecls = String::new();
    for nspfx in nspfxs {
        nsdecls.push(' ');
        nsdecls.push_str(&nsdecl_str(nspfx.as_ref())?);
    }
    Ok(nsdecls)
}
