use quick_xml::Reader;
use quick_xml::events::Event;
use std::path::Path;

use crate::core::DaybookError;

/// One element of a parsed Tally export.
///
/// Attributes are dropped; Tally carries all voucher data in element text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Tag name, including any prefix (`UDF:FOO`).
    pub name: String,
    /// Unescaped text directly inside this element, whitespace preserved.
    /// Whitespace-only runs between child elements are not kept.
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// First element named `tag` beneath this one.
    ///
    /// Direct children win over deeper descendants; among descendants the
    /// first in document order is returned.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        self.children
            .iter()
            .find(|c| c.name == tag)
            .or_else(|| self.children.iter().find_map(|c| c.find_descendant(tag)))
    }

    fn find_descendant(&self, tag: &str) -> Option<&Element> {
        if self.name == tag {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_descendant(tag))
    }

    /// All elements named `tag` beneath this one, in document order.
    /// The element itself is never included.
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        for child in &self.children {
            child.collect(tag, &mut found);
        }
        found
    }

    fn collect<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element>) {
        if self.name == tag {
            found.push(self);
        }
        for child in &self.children {
            child.collect(tag, found);
        }
    }

    /// Text of field `tag`, or `default` when the field is absent or empty.
    pub fn field_or<'a>(&'a self, tag: &str, default: &'a str) -> &'a str {
        match self.find(tag) {
            Some(el) if !el.text.is_empty() => &el.text,
            _ => default,
        }
    }

    /// Text of field `tag`, or the empty string.
    pub fn field(&self, tag: &str) -> &str {
        self.field_or(tag, "")
    }
}

/// A parsed Tally XML export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: Element,
}

impl Document {
    /// Every `VOUCHER` element in the document, in document order.
    pub fn vouchers(&self) -> Vec<&Element> {
        self.root.find_all(super::VOUCHER)
    }
}

/// Deepest element nesting accepted by [`parse_document`].
pub const MAX_DEPTH: usize = 256;

/// Parse a Tally XML export held in memory.
///
/// Documents nested deeper than [`MAX_DEPTH`] are rejected.
pub fn parse_document(xml: &str) -> Result<Document, DaybookError> {
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let name = std::str::from_utf8(e.name().as_ref())
                    .map_err(|e| DaybookError::DocumentRead(format!("invalid tag name: {e}")))?
                    .to_string();
                if stack.is_empty() && root.is_some() {
                    return Err(junk_after_root(&reader));
                }
                if stack.len() == MAX_DEPTH {
                    return Err(DaybookError::DocumentRead(format!(
                        "elements nested deeper than {MAX_DEPTH} levels at byte {}",
                        reader.buffer_position()
                    )));
                }
                stack.push(Element::new(name));
            }
            Ok(Event::Empty(ref e)) => {
                let name = std::str::from_utf8(e.name().as_ref())
                    .map_err(|e| DaybookError::DocumentRead(format!("invalid tag name: {e}")))?
                    .to_string();
                let el = Element::new(name);
                match stack.last_mut() {
                    Some(parent) => parent.children.push(el),
                    None if root.is_none() => root = Some(el),
                    None => return Err(junk_after_root(&reader)),
                }
            }
            Ok(Event::Text(ref e)) => {
                let text = e.unescape().map_err(|err| {
                    DaybookError::DocumentRead(format!(
                        "XML parse error at byte {}: {err}",
                        reader.buffer_position()
                    ))
                })?;
                if text.trim().is_empty() {
                    continue;
                }
                match stack.last_mut() {
                    Some(el) => el.text.push_str(&text),
                    None => {
                        return Err(DaybookError::DocumentRead(format!(
                            "text outside the root element at byte {}",
                            reader.buffer_position()
                        )));
                    }
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(el) = stack.last_mut() {
                    el.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::End(_)) => {
                // End names are checked by the reader, so the stack is never empty here.
                let Some(el) = stack.pop() else {
                    return Err(DaybookError::DocumentRead("unexpected end tag".into()));
                };
                match stack.last_mut() {
                    Some(parent) => parent.children.push(el),
                    None => root = Some(el),
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(DaybookError::DocumentRead(format!(
                    "XML parse error at byte {}: {e}",
                    reader.buffer_position()
                )));
            }
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(DaybookError::DocumentRead(format!(
            "unexpected end of document: <{}> is not closed",
            open.name
        )));
    }
    let root = root.ok_or_else(|| DaybookError::DocumentRead("no root element".into()))?;
    Ok(Document { root })
}

fn junk_after_root(reader: &Reader<&[u8]>) -> DaybookError {
    DaybookError::DocumentRead(format!(
        "junk after document element at byte {}",
        reader.buffer_position()
    ))
}

/// Read and parse a Tally XML export from disk.
///
/// Accepts UTF-8 (with or without BOM) and UTF-16 with BOM, which is what
/// Tally writes by default.
pub fn read_document(path: impl AsRef<Path>) -> Result<Document, DaybookError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| DaybookError::DocumentRead(format!("{}: {e}", path.display())))?;
    let xml = decode_bytes(&bytes)?;
    parse_document(&xml)
}

/// Decode raw export bytes to a string.
pub fn decode_bytes(bytes: &[u8]) -> Result<String, DaybookError> {
    match bytes {
        [0xEF, 0xBB, 0xBF, rest @ ..] => decode_utf8(rest),
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
        [b'<', 0, ..] => decode_utf16(bytes, u16::from_le_bytes),
        [0, b'<', ..] => decode_utf16(bytes, u16::from_be_bytes),
        _ => decode_utf8(bytes),
    }
}

fn decode_utf8(bytes: &[u8]) -> Result<String, DaybookError> {
    String::from_utf8(bytes.to_vec())
        .map_err(|e| DaybookError::DocumentRead(format!("invalid UTF-8: {e}")))
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String, DaybookError> {
    if bytes.len() % 2 != 0 {
        return Err(DaybookError::DocumentRead(
            "invalid UTF-16: odd number of bytes".into(),
        ));
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| unit([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units)
        .map_err(|e| DaybookError::DocumentRead(format!("invalid UTF-16: {e}")))
}
