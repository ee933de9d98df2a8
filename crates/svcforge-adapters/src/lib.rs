//! Infrastructure adapters for svcforge.
//!
//! This crate implements the ports defined in `svcforge-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod renderer;
pub mod stub_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
pub use stub_store::{BuiltinStubStore, DirectoryStubStore, STUBS_DIR_ENV};
