use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use xml::attribute::OwnedAttribute;
use xml::name::OwnedName;
use xml::reader::{ParserConfig, XmlEvent};
use crate::error::{Error, Result};

pub const COLLADA_NS: &str = "http://www.collada.org/2005/11/COLLADASchema";

/// One element of a parsed document.  Read-only; owned by its `Document`.
#[derive(Debug)]
pub struct Node {
    name: OwnedName,
    attributes: Vec<OwnedAttribute>,
    children: Vec<Node>,
    text: String,
}

impl Node {
    pub fn tag(&self) -> &str {
        &self.name.local_name
    }

    pub fn in_collada_ns(&self) -> bool {
        self.name.namespace.as_deref() == Some(COLLADA_NS)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.iter()
            .find(|a| a.name.local_name == name)
            .map(|a| &a.value as &str)
    }

    /// Child elements in document order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Direct text content, with successive chunks joined by a space.
    pub fn text(&self) -> &str {
        &self.text
    }

    fn matches(&self, tag: &str) -> bool {
        self.in_collada_ns() && self.name.local_name == tag
    }
}

/// An immutable parsed `.dae` document scoped to one conversion run.
#[derive(Debug)]
pub struct Document {
    root: Node,
}

impl Document {
    pub fn open(path: impl AsRef<Path>) -> Result<Document> {
        let f = File::open(path)?;
        Document::parse(BufReader::new(f))
    }

    pub fn parse(r: impl Read) -> Result<Document> {
        let reader = ParserConfig::new()
            .trim_whitespace(true)
            .ignore_comments(true)
            .cdata_to_characters(true)
            .create_reader(r);

        let mut stack: Vec<Node> = Vec::new();
        let mut root = None;
        for evt in reader {
            match evt? {
                XmlEvent::StartElement { name, attributes, .. } => {
                    stack.push(Node {
                        name,
                        attributes,
                        children: Vec::new(),
                        text: String::new(),
                    });
                },
                XmlEvent::EndElement { .. } => {
                    // The parser rejects mismatched tags, so the stack is
                    // never empty here.
                    if let Some(node) = stack.pop() {
                        match stack.last_mut() {
                            Some(parent) => parent.children.push(node),
                            None => root = Some(node),
                        }
                    }
                },
                XmlEvent::Characters(s) => {
                    if let Some(node) = stack.last_mut() {
                        if !node.text.is_empty() {
                            node.text.push(' ');
                        }
                        node.text.push_str(&s);
                    }
                },
                _ => {},
            }
        }

        match root {
            Some(root) => Ok(Document { root }),
            None => Err(Error::MalformedDocument {
                context: "document has no root element".to_owned(),
            }),
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// First element at `path`, every segment taken in the COLLADA
    /// namespace.  Fails with `NotFound` when the path matches nothing.
    pub fn find(&self, path: &[&str]) -> Result<&Node> {
        self.find_all(path).into_iter().next()
            .ok_or_else(|| Error::NotFound { path: path.join("/") })
    }

    /// Every element at `path`, in document order.
    pub fn find_all(&self, path: &[&str]) -> Vec<&Node> {
        let mut frontier = vec![&self.root];
        for seg in path {
            let mut next = Vec::new();
            for node in frontier {
                for child in &node.children {
                    if child.matches(seg) {
                        next.push(child);
                    }
                }
            }
            frontier = next;
        }
        frontier
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<COLLADA xmlns="http://www.collada.org/2005/11/COLLADASchema" version="1.4.1">
  <library_visual_scenes>
    <visual_scene id="Scene" name="Rig">
      <node id="Rig_root" name="Rig_root"/>
      <node id="Rig_spare" name="Rig_spare"/>
      <extra xmlns="urn:other"><node id="foreign"/></extra>
    </visual_scene>
  </library_visual_scenes>
  <library_controllers>
    <controller><skin><source>Rig_root Rig_spare</source></skin></controller>
  </library_controllers>
</COLLADA>"#;

    fn doc() -> Document {
        Document::parse(DOC.as_bytes()).unwrap()
    }

    #[test]
    fn find_returns_first_match() {
        let d = doc();
        let scene = d.find(&["library_visual_scenes", "visual_scene"]).unwrap();
        assert_eq!(scene.tag(), "visual_scene");
        assert_eq!(scene.attr("name"), Some("Rig"));
        assert_eq!(scene.attr("id"), Some("Scene"));
        assert_eq!(scene.attr("missing"), None);
    }

    #[test]
    fn find_all_in_document_order() {
        let d = doc();
        let nodes = d.find_all(&["library_visual_scenes", "visual_scene", "node"]);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].attr("id"), Some("Rig_root"));
        assert_eq!(nodes[1].attr("id"), Some("Rig_spare"));
    }

    #[test]
    fn find_missing_path_is_not_found() {
        let d = doc();
        let err = d.find(&["library_visual_scenes", "nope"]).unwrap_err();
        match err {
            Error::NotFound { path } => assert_eq!(path, "library_visual_scenes/nope"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn foreign_namespace_is_not_matched() {
        let d = doc();
        let scene = d.find(&["library_visual_scenes", "visual_scene"]).unwrap();
        // The <extra> element and its child live in another namespace.
        assert_eq!(scene.children().len(), 3);
        assert!(!scene.children()[2].in_collada_ns());
        let nodes = d.find_all(&["library_visual_scenes", "visual_scene", "extra"]);
        assert!(nodes.is_empty());
    }

    #[test]
    fn element_text_is_collected() {
        let d = doc();
        let source = d.find(&["library_controllers", "controller", "skin", "source"]).unwrap();
        assert_eq!(source.text(), "Rig_root Rig_spare");
    }

    #[test]
    fn bad_xml_is_a_parse_error() {
        let err = Document::parse("<a><b></a>".as_bytes()).unwrap_err();
        match err {
            Error::Xml(_) => {},
            other => panic!("unexpected error {:?}", other),
        }
    }
}
