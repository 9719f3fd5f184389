//! Intermediate representation of the OpenXR registry.
//!
//! Only the parts of `xr.xml` the generators look at are kept: type
//! definitions with their members, and extensions with the types they
//! require. The document is built once by [`crate::input`] and is read-only
//! afterwards.

/// The parsed registry document.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// All `<types>/<type>` records, in document order.
    pub types: Vec<TypeDef>,
    /// All `<extensions>/<extension>` records, in document order.
    pub extensions: Vec<Extension>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a type by name, ignoring ASCII case. First match wins.
    pub fn find_type(&self, name: &str) -> Option<&TypeDef> {
        self.types
            .iter()
            .find(|ty| ty.name.eq_ignore_ascii_case(name))
    }

    /// Find an extension by exact name.
    pub fn find_extension(&self, name: &str) -> Option<&Extension> {
        self.extensions.iter().find(|ext| ext.name == name)
    }
}

/// A type definition (`<type>` element).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeDef {
    /// Type name (e.g., "XrSystemEyeGazeInteractionPropertiesEXT").
    pub name: String,
    /// The `category` attribute ("struct", "basetype", ...), if any.
    pub category: Option<String>,
    /// The `structextends` attribute, if any.
    pub extends: Option<String>,
    /// Struct members in declaration order.
    pub members: Vec<Member>,
}

impl TypeDef {
    /// Whether this type extends `anchor` (case-insensitive).
    pub fn extends(&self, anchor: &str) -> bool {
        self.extends
            .as_deref()
            .is_some_and(|e| e.eq_ignore_ascii_case(anchor))
    }

    /// The structure-type token for this type.
    ///
    /// Returns the `values` expression of the first member whose values
    /// contain `tag` (case-sensitive).
    pub fn discriminator(&self, tag: &str) -> Option<&str> {
        self.members
            .iter()
            .filter_map(|m| m.values.as_deref())
            .find(|values| values.contains(tag))
    }
}

/// A struct member (`<member>` element).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Member {
    /// Member name from the `<name>` child.
    pub name: String,
    /// Declared type from the `<type>` child.
    pub ty: String,
    /// The `values` attribute (permitted values), if any.
    pub values: Option<String>,
}

impl Member {
    /// Members that carry no property value: the structure-type tag and
    /// the `next` chain pointer.
    pub fn is_bookkeeping(&self) -> bool {
        matches!(self.ty.as_str(), "XrStructureType" | "void")
    }
}

/// An extension (`<extension>` element).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extension {
    /// Extension name (e.g., "XR_EXT_eye_gaze_interaction").
    pub name: String,
    /// The `supported` attribute. `None` is treated as supported.
    pub supported: Option<String>,
    /// The `protect` attribute; empty when the extension has no guard.
    pub protect: String,
    /// Names of the types required by this extension, across all
    /// `<require>` blocks, in document order.
    pub required_types: Vec<String>,
}

impl Extension {
    /// Extensions are skipped only when marked exactly `disabled`.
    pub fn is_disabled(&self) -> bool {
        self.supported.as_deref() == Some("disabled")
    }

    /// The guard token, if the extension has a non-empty one.
    pub fn guard(&self) -> Option<&str> {
        Some(self.protect.as_str()).filter(|p| !p.is_empty())
    }
}
