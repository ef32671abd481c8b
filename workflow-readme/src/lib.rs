//! Regenerates the workflow catalog section of a README from the workflow
//! definition files sitting next to it.

pub mod discovery;
pub mod error;
pub mod readme;
pub mod render;
pub mod workflow;

pub use error::{ReadmeError, WorkflowParseError};
pub use readme::{regenerate_readme, try_regenerate_readme, RegenerateSummary};
pub use workflow::WorkflowInfo;
