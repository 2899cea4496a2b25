//! Common types shared by the vc2c crates.
//!
//! This crate provides:
//! - Converter configuration (`ConvertOptions`)
//! - Named-import bookkeeping (`ImportRequest`, `ImportSet`)

// Converter configuration
pub mod options;
pub use options::{COMPATIBLE_REACTIVE_MODULE, ConvertOptions, REACTIVE_MODULE};

// Named imports required by converted output
pub mod imports;
pub use imports::{ImportDecl, ImportRequest, ImportSet};
