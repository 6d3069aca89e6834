//! Agent working memory: individual ReAct steps and the scratchpad that
//! records them in order.

pub mod action;
pub mod scratchpad;
pub mod step;

pub use action::{Action, ActionKind};
pub use scratchpad::Scratchpad;
pub use step::{Step, StepBuilder, StepLog, NO_ERROR};
