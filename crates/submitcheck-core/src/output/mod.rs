//! GitHub Actions output: step outputs and workflow-command annotations

pub mod annotations;
pub mod sink;

pub use annotations::AnnotationLevel;
pub use sink::{safe_output_escape, OutputSink};
