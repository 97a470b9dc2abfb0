//! Record models for the Flowra platform.

mod workflow;
mod workflow_run;

pub use workflow::{NewWorkflow, Workflow};
pub use workflow_run::{NewWorkflowRun, RunStatus, WorkflowRun};
