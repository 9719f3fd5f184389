//! Extension discovery against the anchor structure.

use crate::ir::{Extension, Registry, TypeDef};

/// Extensions that add at least one structure to the anchor chain.
///
/// Disabled extensions are skipped. An extension is recorded once, on the
/// first required type that resolves and extends `anchor`; unresolved type
/// references are ignored. Document order is preserved.
pub fn matching_extensions<'a>(registry: &'a Registry, anchor: &str) -> Vec<&'a Extension> {
    let mut matches = Vec::new();
    for ext in &registry.extensions {
        if ext.is_disabled() {
            tracing::debug!(extension = %ext.name, "skipping disabled extension");
            continue;
        }
        let qualifies = ext
            .required_types
            .iter()
            .filter_map(|name| registry.find_type(name))
            .any(|ty| ty.extends(anchor));
        if qualifies {
            matches.push(ext);
        }
    }
    tracing::info!(count = matches.len(), anchor, "matched extensions");
    matches
}

/// Every required type of `ext` that extends `anchor`, in requirement order.
///
/// Unlike [`matching_extensions`] this does not stop at the first hit.
pub fn qualifying_types<'a>(
    registry: &'a Registry,
    ext: &Extension,
    anchor: &str,
) -> Vec<&'a TypeDef> {
    ext.required_types
        .iter()
        .filter_map(|name| {
            let ty = registry.find_type(name);
            if ty.is_none() {
                tracing::debug!(extension = %ext.name, type_name = %name, "unresolved type reference");
            }
            ty
        })
        .filter(|ty| ty.extends(anchor))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANCHOR: &str = "XrSystemProperties";

    fn ty(name: &str, extends: Option<&str>) -> TypeDef {
        TypeDef {
            name: name.into(),
            extends: extends.map(String::from),
            ..Default::default()
        }
    }

    fn ext(name: &str, supported: Option<&str>, required: &[&str]) -> Extension {
        Extension {
            name: name.into(),
            supported: supported.map(String::from),
            required_types: required.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn registry() -> Registry {
        Registry {
            types: vec![
                ty("XrFooProperties", Some(ANCHOR)),
                ty("XrFooExtraProperties", Some("xrsystemproperties")),
                ty("XrFooCreateInfo", Some("XrSessionCreateInfo")),
                ty("XrPlain", None),
            ],
            extensions: vec![
                ext("XR_EXT_disabled", Some("disabled"), &["XrFooProperties"]),
                ext("XR_EXT_none", Some("openxr"), &["XrPlain", "XrFooCreateInfo"]),
                ext(
                    "XR_EXT_two",
                    Some("openxr"),
                    &["XrMissing", "XrFooProperties", "XrPlain", "XrFooExtraProperties"],
                ),
                ext("XR_EXT_unflagged", None, &["xrfooproperties"]),
            ],
        }
    }

    #[test]
    fn test_matching_extensions() {
        let registry = registry();
        let names: Vec<_> = matching_extensions(&registry, ANCHOR)
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["XR_EXT_two", "XR_EXT_unflagged"]);
    }

    #[test]
    fn test_matched_once_despite_several_qualifying_types() {
        let registry = registry();
        let matches = matching_extensions(&registry, ANCHOR);
        assert_eq!(
            matches.iter().filter(|e| e.name == "XR_EXT_two").count(),
            1
        );
    }

    #[test]
    fn test_qualifying_types_enumerates_all() {
        let registry = registry();
        let two = registry.find_extension("XR_EXT_two").unwrap();
        let names: Vec<_> = qualifying_types(&registry, two, ANCHOR)
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["XrFooProperties", "XrFooExtraProperties"]);
    }

    #[test]
    fn test_other_anchor() {
        let registry = registry();
        let names: Vec<_> = matching_extensions(&registry, "XrSessionCreateInfo")
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["XR_EXT_none"]);
    }
}
