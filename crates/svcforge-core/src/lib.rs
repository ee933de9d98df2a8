//! svcforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the svcforge
//! service generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          svcforge-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService, TemplateService)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: StubStore, Filesystem, Render)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    svcforge-adapters (Infrastructure)   │
//! │ (BuiltinStubStore, LocalFilesystem, ..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (NameResolver, PathResolver, Stub)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use svcforge_core::prelude::*;
//!
//! let settings = ScaffoldSettings::new("App", "/project/app");
//! let service = ScaffoldService::new(store, renderer, filesystem);
//!
//! let report = service.scaffold(&ServiceRequest::new("user").with_interface(true), &settings)?;
//! for file in &report.files {
//!     println!("Created: {}", file.path);
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldReport, ScaffoldService, ServiceRequest, TemplateService, WriteOutcome,
        ports::{Filesystem, StubStore, TemplateRenderer},
    };
    pub use crate::domain::{
        DestinationPaths, FileRole, Namespace, NameResolver, PathResolver, RenderContext,
        ResolvedIdentity, ScaffoldSettings, Stub, StubKind, SuffixPolicy,
    };
    pub use crate::error::{ForgeError, ForgeResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
