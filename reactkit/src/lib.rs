//! Working memory and reasoning procedures for ReAct agents.
//!
//! A control loop keeps a [`memory::Scratchpad`] of [`memory::Step`]s, asks a
//! [`procedures::ThoughtProcedure`] for the next thought given the running
//! summary and the latest step, executes whatever action it settles on, and
//! appends the resulting step.

pub use reactkit_core::*;
pub use reactkit_prompt as prompt;

#[cfg(feature = "memory")]
pub use reactkit_memory as memory;

#[cfg(feature = "procedures")]
pub use reactkit_procedures as procedures;

pub mod prelude {
    pub use reactkit_core::{
        Message, ReactkitError, Role, StructuredLlm, StructuredLlmExt, StructuredRequest,
        ToolCall, Value,
    };
    pub use reactkit_prompt::PromptTemplate;

    #[cfg(feature = "memory")]
    pub use reactkit_memory::{Action, ActionKind, Scratchpad, Step, StepLog};

    #[cfg(feature = "procedures")]
    pub use reactkit_procedures::{Procedure, ThoughtContext, ThoughtModel, ThoughtProcedure};
}
