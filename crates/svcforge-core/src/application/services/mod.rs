//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "make a service" or "publish the stubs".

pub mod file_writer;
pub mod scaffold_service;
pub mod template_service;

pub use file_writer::{FileWriter, WriteOutcome};
pub use scaffold_service::{
    ScaffoldPlan, ScaffoldReport, ScaffoldService, ServiceRequest, WrittenFile,
};
pub use template_service::{PublishedStub, StubInfo, TemplateService};
