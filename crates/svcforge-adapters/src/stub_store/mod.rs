//! Stub stores and stub store discovery.
//!
//! # Resolution order
//!
//! [`discover`] picks exactly one store:
//!
//! 1. **Configured directory** (`stubs.path` in `svcforge.toml`).
//! 2. **`$SVCFORGE_STUBS_DIR`**: environment variable override.
//! 3. **Built-in stubs** compiled into the binary.
//!
//! A selected directory is used as-is. When it lacks a requested stub the
//! request fails with `StubNotFound`; the built-in copy is not consulted.

mod builtin;
mod directory;

use std::path::PathBuf;

use svcforge_core::application::ports::StubStore;
use tracing::{debug, info, instrument};

pub use builtin::{BuiltinStubStore, builtin_text};
pub use directory::DirectoryStubStore;

/// Environment variable naming a directory of published stubs.
pub const STUBS_DIR_ENV: &str = "SVCFORGE_STUBS_DIR";

/// Select the stub store following the resolution order above.
#[instrument(level = "debug")]
pub fn discover(configured: Option<PathBuf>) -> Box<dyn StubStore> {
    let from_env = std::env::var_os(STUBS_DIR_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    select(configured, from_env)
}

fn select(configured: Option<PathBuf>, from_env: Option<PathBuf>) -> Box<dyn StubStore> {
    if let Some(dir) = configured {
        info!(dir = %dir.display(), "Using configured stubs directory");
        return Box::new(DirectoryStubStore::new(dir));
    }

    if let Some(dir) = from_env {
        info!(dir = %dir.display(), env = STUBS_DIR_ENV, "Using stubs directory from environment");
        return Box::new(DirectoryStubStore::new(dir));
    }

    debug!("Using built-in stubs");
    Box::new(BuiltinStubStore::new())
}
