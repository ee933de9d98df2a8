pub mod common;
pub mod destination;
pub mod identity;
pub mod settings;
pub mod stub;

pub use crate::domain::DomainError;
pub use destination::{DestinationPath, DestinationPaths, PathResolver};
pub use identity::{NameResolver, ResolvedIdentity};
pub use settings::ScaffoldSettings;
pub use stub::{RenderContext, RenderedContent, RenderedFile, Stub};
