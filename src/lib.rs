//! alusus-defs-gen: generate the `AlususDefs.h` preprocessor header.
//!
//! The build system passes version, toolchain, and platform details on the
//! command line; this crate turns them into an ordered list of `#define`
//! directives and writes the header only when its contents change.

pub mod defs;
pub mod error;
pub mod escape;
pub mod profile;
pub mod writer;

pub use error::{Error, Result};
