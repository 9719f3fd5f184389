//! OpenXR system-property query generation.
//!
//! `xrprops-codegen` reads the OpenXR registry (`xr.xml`) and generates C++
//! that asks the runtime for every extension structure chained onto
//! `XrSystemProperties`, pushing each reported member into a generic
//! property list.
//!
//! # Architecture
//!
//! ```text
//! Input             IR                 Output
//! ──────────    ─────────────     ─────────────────────
//! xr.xml  ────> Registry ──┬────> listing (stdout)
//!               (ir.rs)    │
//!                 lookup ──┴────> C++ queries (xrsystemproperties.cpp)
//! ```
//!
//! # Example
//!
//! ```
//! use xrprops_codegen::{EmitterOptions, generate, input::parse_registry};
//!
//! let registry = parse_registry(r#"
//! <registry>
//!   <types>
//!     <type category="struct" name="XrFooProperties" structextends="XrSystemProperties">
//!       <member values="XR_TYPE_FOO_PROPERTIES"><type>XrStructureType</type> <name>type</name></member>
//!       <member><type>XrBool32</type> <name>isFast</name></member>
//!     </type>
//!   </types>
//!   <extensions>
//!     <extension name="XR_EXT_foo" supported="openxr">
//!       <require><type name="XrFooProperties"/></require>
//!     </extension>
//!   </extensions>
//! </registry>"#).unwrap();
//!
//! let output = generate(&registry, &EmitterOptions::default()).unwrap();
//! assert!(output.listing.starts_with("XR_EXT_foo\n"));
//! assert!(output.cpp.contains("bool(extProps.isFast)"));
//! ```

pub mod conversion;
pub mod input;
pub mod ir;
pub mod lookup;
pub mod options;
pub mod output;

pub use conversion::Conversion;
pub use input::{ParseError, load_registry, parse_registry};
pub use ir::{Extension, Member, Registry, TypeDef};
pub use lookup::{matching_extensions, qualifying_types};
pub use options::EmitterOptions;
pub use output::{EmitError, generate_cpp, generate_listing, write_cpp};

/// Both generated artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Human-readable listing of extensions, types and members.
    pub listing: String,
    /// C++ query blocks.
    pub cpp: String,
}

/// Run extension discovery once and render both outputs from it.
pub fn generate(registry: &Registry, options: &EmitterOptions) -> Result<Generated, EmitError> {
    let extensions = matching_extensions(registry, &options.anchor);
    Ok(Generated {
        listing: generate_listing(registry, &extensions, options),
        cpp: generate_cpp(registry, &extensions, options)?,
    })
}
