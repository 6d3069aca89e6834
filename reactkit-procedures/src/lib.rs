mod config;
mod procedure;
mod thought;

pub use config::ThoughtProcedureBuilder;
pub use procedure::Procedure;
pub use thought::{ThoughtContext, ThoughtModel, ThoughtProcedure, LAST_STEP_VAR, SUMMARY_VAR};
