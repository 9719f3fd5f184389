//! Output backends.
//!
//! Both passes take the extensions selected by
//! [`matching_extensions`](crate::lookup::matching_extensions) and walk
//! every qualifying type of each one again.

pub mod cpp;
pub mod listing;

pub use cpp::{EmitError, generate_cpp, write_cpp};
pub use listing::generate_listing;
