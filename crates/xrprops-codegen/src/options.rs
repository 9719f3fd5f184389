//! Names baked into the generated code.

/// Settings shared by the listing and the C++ backend.
///
/// The defaults target the OpenXR `XrSystemProperties` chain and the
/// collaborator functions of the capability viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitterOptions {
    /// Structure that qualifying types extend.
    pub anchor: String,
    /// Structure-type token of the anchor itself.
    pub anchor_stype: String,
    /// Substring identifying a structure-type token in a member's values.
    pub structure_tag: String,
    /// Runtime predicate taking an extension name.
    pub supported_fn: String,
    /// Runtime query filling the chained anchor structure.
    pub get_properties_fn: String,
    /// Property sink taking extension, type, member and value.
    pub push_property_fn: String,
}

impl Default for EmitterOptions {
    fn default() -> Self {
        Self {
            anchor: "XrSystemProperties".into(),
            anchor_stype: "XR_TYPE_SYSTEM_PROPERTIES".into(),
            structure_tag: "XR_TYPE_".into(),
            supported_fn: "extensionSupported".into(),
            get_properties_fn: "xrGetSystemProperties".into(),
            // Spelling matches the viewer's existing function.
            push_property_fn: "pushSytemProperty".into(),
        }
    }
}
