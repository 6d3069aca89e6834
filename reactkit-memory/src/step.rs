use reactkit_core::Message;
use serde::{Deserialize, Serialize};

use crate::Action;

/// Printed wherever a step carries no error.
///
/// Existing consumers of the rendered text parse this literal, so it stays a
/// string in every rendering even though steps store `Option<String>`.
pub const NO_ERROR: &str = "None";

/// One ReAct round: thought, action and the observation it produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Step {
    summary: String,
    thought: String,
    action: Action,
    observation: String,
    error: Option<String>,
}

impl Step {
    pub fn new(
        summary: impl Into<String>,
        thought: impl Into<String>,
        action: impl Into<Action>,
        observation: impl Into<String>,
    ) -> Self {
        Self {
            summary: summary.into(),
            thought: thought.into(),
            action: action.into(),
            observation: observation.into(),
            error: None,
        }
    }

    /// Named construction; every field defaults to empty and no error.
    pub fn builder() -> StepBuilder {
        StepBuilder::default()
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn thought(&self) -> &str {
        &self.thought
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    pub fn observation(&self) -> &str {
        &self.observation
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Three newline-terminated lines: thought, action, observation.
    pub fn render_text(&self) -> String {
        format!(
            "Thought: {}\n{}\nObservation: {}\n",
            self.thought,
            self.action_line(),
            self.observation
        )
    }

    /// The step as an assistant turn followed by the observation as a user turn.
    pub fn render_messages(&self) -> [Message; 2] {
        [
            Message::assistant(format!("Thought: {}\n{}", self.thought, self.action_line())),
            Message::user(format!("Observation: {}", self.observation)),
        ]
    }

    pub fn render_log(&self) -> StepLog {
        StepLog {
            thought: format!("Thought: {}", self.thought),
            action: format!("Action: {}", self.action.render()),
            observation: format!("Observation: {}", self.observation),
            summary: format!("Summary: {}", self.summary),
            error: format!("Error: {}", self.error().unwrap_or(NO_ERROR)),
        }
    }

    fn action_line(&self) -> String {
        if self.action.is_empty() {
            "Action: ".to_string()
        } else {
            format!("Action: {}", self.action.render())
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct StepBuilder {
    summary: String,
    thought: String,
    action: Action,
    observation: String,
    error: Option<String>,
}

impl StepBuilder {
    pub fn summary(mut self, value: impl Into<String>) -> Self {
        self.summary = value.into();
        self
    }

    pub fn thought(mut self, value: impl Into<String>) -> Self {
        self.thought = value.into();
        self
    }

    pub fn action(mut self, value: impl Into<Action>) -> Self {
        self.action = value.into();
        self
    }

    pub fn observation(mut self, value: impl Into<String>) -> Self {
        self.observation = value.into();
        self
    }

    pub fn error(mut self, value: impl Into<String>) -> Self {
        self.error = Some(value.into());
        self
    }

    pub fn build(self) -> Step {
        Step {
            summary: self.summary,
            thought: self.thought,
            action: self.action,
            observation: self.observation,
            error: self.error,
        }
    }
}

/// Label-prefixed fields of a step, ready for JSON output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepLog {
    pub thought: String,
    pub action: String,
    pub observation: String,
    pub summary: String,
    pub error: String,
}
