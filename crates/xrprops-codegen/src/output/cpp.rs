//! C++ system-property query generation.
//!
//! For each qualifying type the backend emits a block that chains the
//! extension's properties struct onto the anchor, queries the runtime and
//! pushes every member into the property sink:
//!
//! ```text
//! if (extensionSupported("XR_EXT_foo")) {
//!         XrFooProperties extProps{ .type = XR_TYPE_FOO_PROPERTIES };
//!         XrSystemProperties systemProps{ .type = XR_TYPE_SYSTEM_PROPERTIES, .next = &extProps };
//!         XrResult result = xrGetSystemProperties(instance, systemId, &systemProps);
//!         if (XR_SUCCEEDED(result)) {
//!                 pushSytemProperty("XR_EXT_foo", "XrFooProperties", "isFast", bool(extProps.isFast));
//!         }
//! }
//! ```
//!
//! Extensions with a `protect` token get the block wrapped in
//! `#ifdef`/`#endif`. Blocks are separated by a blank line.

use crate::conversion::Conversion;
use crate::ir::{Extension, Registry, TypeDef};
use crate::lookup::qualifying_types;
use crate::options::EmitterOptions;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("{type_name} (required by {extension}) has no member with a structure-type value")]
    MissingDiscriminator {
        extension: String,
        type_name: String,
    },
    #[error("could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Generate the C++ source for all matched extensions.
///
/// Fails without producing any text if a qualifying type has no
/// structure-type token.
pub fn generate_cpp(
    registry: &Registry,
    extensions: &[&Extension],
    options: &EmitterOptions,
) -> Result<String, EmitError> {
    let mut out = String::new();
    let mut blocks = 0usize;

    for ext in extensions {
        for ty in qualifying_types(registry, ext, &options.anchor) {
            emit_block(&mut out, ext, ty, options)?;
            blocks += 1;
        }
    }

    tracing::info!(
        extensions = extensions.len(),
        blocks,
        "generated system property queries"
    );
    Ok(out)
}

fn emit_block(
    out: &mut String,
    ext: &Extension,
    ty: &TypeDef,
    options: &EmitterOptions,
) -> Result<(), EmitError> {
    let stype = ty
        .discriminator(&options.structure_tag)
        .ok_or_else(|| EmitError::MissingDiscriminator {
            extension: ext.name.clone(),
            type_name: ty.name.clone(),
        })?;

    if let Some(guard) = ext.guard() {
        out.push_str(&format!("#ifdef {}\n", guard));
    }

    out.push_str(&format!(
        "if ({}(\"{}\")) {{\n",
        options.supported_fn, ext.name
    ));
    out.push_str(&format!(
        "\t\t{} extProps{{ .type = {} }};\n",
        ty.name, stype
    ));
    out.push_str(&format!(
        "\t\t{} systemProps{{ .type = {}, .next = &extProps }};\n",
        options.anchor, options.anchor_stype
    ));
    out.push_str(&format!(
        "\t\tXrResult result = {}(instance, systemId, &systemProps);\n",
        options.get_properties_fn
    ));
    out.push_str("\t\tif (XR_SUCCEEDED(result)) {\n");

    for member in ty.members.iter().filter(|m| !m.is_bookkeeping()) {
        let access = format!("extProps.{}", member.name);
        match Conversion::for_type(&member.ty).apply(&access) {
            Some(value) => out.push_str(&format!(
                "\t\t\t{}(\"{}\", \"{}\", \"{}\", {});\n",
                options.push_property_fn, ext.name, ty.name, member.name, value
            )),
            None => {
                tracing::warn!(
                    extension = %ext.name,
                    type_name = %ty.name,
                    member = %member.name,
                    member_type = %member.ty,
                    "unsupported property type"
                );
                out.push_str(&format!(
                    "\t\t\t// Warning: No support for property {} with type {}\n",
                    member.name, member.ty
                ));
            }
        }
    }

    out.push_str("\t\t}\n");
    out.push_str("}\n");

    if ext.guard().is_some() {
        out.push_str("#endif\n");
    }
    out.push('\n');
    Ok(())
}

/// Write generated source to `path` in one go, replacing any previous file.
pub fn write_cpp(path: &Path, source: &str) -> Result<(), EmitError> {
    let io_err = |source| EmitError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, source).map_err(io_err)
}
