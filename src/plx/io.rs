// XML input helpers: the export is read once into a small element tree,
// which keeps the row passes as simple as walking child lists.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::{PlanError, Result};

/// One XML element: local name, attributes, children. Namespace prefixes are
/// stripped from element and attribute names, so lookups are wildcard with
/// respect to the namespace bindings of the export.
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub name: String,
    attrs: HashMap<String, String>,
    pub children: Vec<Element>,
}

impl Element {
    /// Attribute value by local name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Attribute value that the format requires to be present.
    pub fn require_attr(&self, name: &'static str) -> Result<&str> {
        self.attr(name).ok_or_else(|| PlanError::MissingAttribute {
            elem: self.name.clone(),
            attr: name,
        })
    }

    /// Required attribute parsed as an integer.
    pub fn require_int_attr(&self, name: &'static str) -> Result<i64> {
        let value = self.require_attr(name)?;
        value.trim().parse().map_err(|_| PlanError::BadNumber {
            attr: name,
            value: value.to_string(),
        })
    }

    /// First child with the given local name.
    pub fn find(&self, local_name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == local_name)
    }

    /// All children with the given local name.
    pub fn children_named<'a>(&'a self, local_name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == local_name)
    }
}

/// Parse a *.plx file into its root element.
///
/// A missing file and malformed XML are both fatal here; the loader never
/// builds a partial plan from a broken file.
pub fn parse_file(path: &Path) -> Result<Element> {
    let file = File::open(path).map_err(|source| PlanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = Reader::from_reader(BufReader::new(file));
    reader.trim_text(true);

    let xml_err = |source: quick_xml::Error| PlanError::Xml {
        path: path.to_path_buf(),
        source,
    };

    // Stack with a sentinel at the bottom; the document root ends up as the
    // sentinel's only child.
    let mut stack: Vec<Element> = vec![Element::default()];
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf).map_err(xml_err)? {
            Event::Start(start) => {
                stack.push(element_from(&start).map_err(xml_err)?);
            }
            Event::Empty(start) => {
                let elem = element_from(&start).map_err(xml_err)?;
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(elem);
                }
            }
            Event::End(_) => {
                if stack.len() > 1 {
                    let elem = stack.pop().unwrap_or_default();
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(elem);
                    }
                }
            }
            Event::Eof => break,
            _ => {} // text, comments, declarations
        }
        buf.clear();
    }

    let sentinel = stack.swap_remove(0);
    sentinel
        .children
        .into_iter()
        .next()
        .ok_or(PlanError::MissingElement("root"))
}

fn element_from(
    start: &quick_xml::events::BytesStart<'_>,
) -> std::result::Result<Element, quick_xml::Error> {
    let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
    let mut attrs = HashMap::new();
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::InvalidAttr)?;
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attrs.insert(key, value);
    }
    Ok(Element {
        name,
        attrs,
        children: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_nested_elements_ignoring_prefixes() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(
            file,
            r#"<?xml version="1.0" encoding="utf-8"?>
<DataSet xmlns:diffgr="urn:schemas-microsoft-com:xml-diffgram-v1">
  <diffgr:diffgram>
    <ds xmlns="http://tempuri.org/dsMMISDB.xsd">
      <Row Код="1" Название="верхняя"><Row Код="2"/></Row>
    </ds>
  </diffgr:diffgram>
</DataSet>"#
        )
        .expect("write");

        let root = parse_file(file.path()).expect("parse");
        let dataset = root.find("diffgram").and_then(|d| d.find("ds")).expect("ds");
        let row = dataset.find("Row").expect("row");
        assert_eq!(row.attr("Код"), Some("1"));
        assert_eq!(row.attr("Название"), Some("верхняя"));
        assert_eq!(row.children_named("Row").count(), 1);
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = parse_file(Path::new("/no/such/plan.plx")).unwrap_err();
        assert!(matches!(err, PlanError::Io { .. }));
    }

    #[test]
    fn required_attr_errors_name_the_element() {
        let elem = Element {
            name: "ООП".to_string(),
            ..Element::default()
        };
        let err = elem.require_attr("Шифр").unwrap_err();
        assert!(err.to_string().contains("Шифр"));
        assert!(err.to_string().contains("ООП"));
    }
}
