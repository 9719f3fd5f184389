//! Input parsers.
//!
//! Reads the registry document and produces an IR [`Registry`](crate::ir::Registry).

mod xml;

pub use xml::{ParseError, load_registry, parse_registry};
