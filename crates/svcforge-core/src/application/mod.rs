//! Application layer for svcforge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, TemplateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! naming rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    FileWriter, PublishedStub, ScaffoldPlan, ScaffoldReport, ScaffoldService, ServiceRequest,
    StubInfo, TemplateService, WriteOutcome, WrittenFile,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, StubStore, TemplateRenderer};

pub use error::ApplicationError;
