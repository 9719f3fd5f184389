//! `xr.xml` to IR parser.

use crate::ir::{Extension, Member, Registry, TypeDef};
use roxmltree::{Document, Node};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid registry XML: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("expected <registry> root element, found <{0}>")]
    MissingRoot(String),
}

/// Read and parse a registry file.
pub fn load_registry(path: &Path) -> Result<Registry, ParseError> {
    let text = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_registry(&text)
}

/// Parse registry XML text into an IR Registry.
pub fn parse_registry(text: &str) -> Result<Registry, ParseError> {
    let doc = Document::parse(text)?;
    let root = doc.root_element();
    if !root.has_tag_name("registry") {
        return Err(ParseError::MissingRoot(root.tag_name().name().to_string()));
    }

    let mut registry = Registry::new();

    for section in root.children().filter(|n| n.has_tag_name("types")) {
        for node in section.children().filter(|n| n.has_tag_name("type")) {
            match parse_type(node) {
                Some(ty) => registry.types.push(ty),
                None => tracing::debug!(
                    line = doc.text_pos_at(node.range().start).row,
                    "skipping unnamed <type>"
                ),
            }
        }
    }

    for section in root.children().filter(|n| n.has_tag_name("extensions")) {
        for node in section.children().filter(|n| n.has_tag_name("extension")) {
            match parse_extension(node) {
                Some(ext) => registry.extensions.push(ext),
                None => tracing::debug!(
                    line = doc.text_pos_at(node.range().start).row,
                    "skipping unnamed <extension>"
                ),
            }
        }
    }

    tracing::debug!(
        types = registry.types.len(),
        extensions = registry.extensions.len(),
        "parsed registry"
    );
    Ok(registry)
}

fn parse_type(node: Node) -> Option<TypeDef> {
    // Struct types carry the name as an attribute, base types as a child.
    let name = node
        .attribute("name")
        .map(String::from)
        .or_else(|| child_text(node, "name"))?;

    let members = node
        .children()
        .filter(|n| n.has_tag_name("member"))
        .map(|m| Member {
            name: child_text(m, "name").unwrap_or_default(),
            ty: child_text(m, "type").unwrap_or_default(),
            values: m.attribute("values").map(String::from),
        })
        .collect();

    Some(TypeDef {
        name,
        category: node.attribute("category").map(String::from),
        extends: node.attribute("structextends").map(String::from),
        members,
    })
}

fn parse_extension(node: Node) -> Option<Extension> {
    let name = node.attribute("name")?.to_string();

    let required_types = node
        .children()
        .filter(|n| n.has_tag_name("require"))
        .flat_map(|req| req.children().filter(|n| n.has_tag_name("type")))
        .filter_map(|t| t.attribute("name"))
        .map(String::from)
        .collect();

    Some(Extension {
        name,
        supported: node.attribute("supported").map(String::from),
        protect: node.attribute("protect").unwrap_or_default().to_string(),
        required_types,
    })
}

fn child_text(node: Node, tag: &str) -> Option<String> {
    node.children()
        .find(|n| n.has_tag_name(tag))
        .and_then(|n| n.text())
        .map(|t| t.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGISTRY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<registry>
    <comment>test registry</comment>
    <types>
        <type category="basetype">typedef <type>uint32_t</type> <name>XrBool32</name>;</type>
        <type category="struct" name="XrFooProperties" structextends="XrSystemProperties">
            <member values="XR_TYPE_FOO_PROPERTIES"><type>XrStructureType</type> <name>type</name></member>
            <member><type>void</type>* <name>next</name></member>
            <member><type>XrBool32</type> <name>isFast</name></member>
        </type>
        <type category="struct" returnedonly="true"/>
    </types>
    <extensions>
        <extension name="XR_EXT_foo" number="1" supported="openxr" protect="XR_USE_FOO">
            <require>
                <enum value="1" name="XR_EXT_foo_SPEC_VERSION"/>
                <type name="XrFooProperties"/>
            </require>
            <require depends="XR_EXT_bar">
                <type name="XrBarInfo"/>
            </require>
        </extension>
        <extension number="2" supported="openxr"/>
        <extension name="XR_EXT_plain" number="3"/>
    </extensions>
</registry>
"#;

    #[test]
    fn test_parse_types() {
        let registry = parse_registry(REGISTRY).unwrap();
        assert_eq!(registry.types.len(), 2);

        let base = &registry.types[0];
        assert_eq!(base.name, "XrBool32");
        assert_eq!(base.category.as_deref(), Some("basetype"));
        assert!(base.members.is_empty());

        let foo = registry.find_type("XrFooProperties").unwrap();
        assert_eq!(foo.extends.as_deref(), Some("XrSystemProperties"));
        assert_eq!(
            foo.members,
            vec![
                Member {
                    name: "type".into(),
                    ty: "XrStructureType".into(),
                    values: Some("XR_TYPE_FOO_PROPERTIES".into()),
                },
                Member {
                    name: "next".into(),
                    ty: "void".into(),
                    values: None,
                },
                Member {
                    name: "isFast".into(),
                    ty: "XrBool32".into(),
                    values: None,
                },
            ]
        );
    }

    #[test]
    fn test_parse_extensions() {
        let registry = parse_registry(REGISTRY).unwrap();
        assert_eq!(registry.extensions.len(), 2);

        let foo = registry.find_extension("XR_EXT_foo").unwrap();
        assert_eq!(foo.supported.as_deref(), Some("openxr"));
        assert_eq!(foo.protect, "XR_USE_FOO");
        assert_eq!(foo.required_types, vec!["XrFooProperties", "XrBarInfo"]);

        let plain = registry.find_extension("XR_EXT_plain").unwrap();
        assert!(plain.supported.is_none());
        assert!(plain.protect.is_empty());
        assert!(plain.required_types.is_empty());
    }

    #[test]
    fn test_rejects_malformed_xml() {
        let err = parse_registry("<registry><types></registry>").unwrap_err();
        assert!(matches!(err, ParseError::Xml(_)));
    }

    #[test]
    fn test_rejects_wrong_root() {
        let err = parse_registry("<spec/>").unwrap_err();
        assert!(matches!(err, ParseError::MissingRoot(ref tag) if tag == "spec"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("xr.xml");
        let err = load_registry(&path).unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
        assert!(err.to_string().contains("xr.xml"));
    }
}
