//! Human-readable listing of the matched extensions.

use crate::ir::{Extension, Registry};
use crate::lookup::qualifying_types;
use crate::options::EmitterOptions;

/// Render the listing printed to stdout.
///
/// ```text
/// XR_EXT_foo
///   XrFooProperties
///     sType = XR_TYPE_FOO_PROPERTIES
///       isFast is of type XrBool32
/// ```
pub fn generate_listing(
    registry: &Registry,
    extensions: &[&Extension],
    options: &EmitterOptions,
) -> String {
    let mut out = String::new();
    for ext in extensions {
        out.push_str(&format!("{}\n", ext.name));
        for ty in qualifying_types(registry, ext, &options.anchor) {
            out.push_str(&format!("  {}\n", ty.name));
            let stype = ty.discriminator(&options.structure_tag).unwrap_or_default();
            out.push_str(&format!("    sType = {}\n", stype));
            for member in ty.members.iter().filter(|m| !m.is_bookkeeping()) {
                out.push_str(&format!(
                    "      {} is of type {}\n",
                    member.name, member.ty
                ));
            }
        }
    }
    out
}
