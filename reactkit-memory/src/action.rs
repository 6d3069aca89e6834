use std::fmt;
use std::sync::Arc;

use reactkit_core::ToolCall;

/// An action kind defined outside this crate.
///
/// `kind` is the tag printed in front of the payload, e.g. `search` in
/// `search(rust traits)`. It must be stable: downstream parsers key on it.
pub trait ActionKind: fmt::Debug + Send + Sync {
    fn kind(&self) -> &str;
    fn payload(&self) -> String;
}

/// What the agent decided to do in one step.
#[derive(Clone, Debug)]
pub enum Action {
    /// Free-form text. The empty string means no action was taken.
    Text(String),
    Tool(ToolCall),
    Custom(Arc<dyn ActionKind>),
}

impl Action {
    pub const TEXT_KIND: &'static str = "str";

    pub fn none() -> Self {
        Action::Text(String::new())
    }

    pub fn text(text: impl Into<String>) -> Self {
        Action::Text(text.into())
    }

    pub fn custom(kind: impl ActionKind + 'static) -> Self {
        Action::Custom(Arc::new(kind))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Action::Text(text) if text.is_empty())
    }

    pub fn kind(&self) -> &str {
        match self {
            Action::Text(_) => Self::TEXT_KIND,
            Action::Tool(call) => &call.name,
            Action::Custom(custom) => custom.kind(),
        }
    }

    pub fn payload(&self) -> String {
        match self {
            Action::Text(text) => text.clone(),
            Action::Tool(call) => call.args.to_string(),
            Action::Custom(custom) => custom.payload(),
        }
    }

    /// `kind(payload)`, regardless of emptiness.
    pub fn render(&self) -> String {
        format!("{}({})", self.kind(), self.payload())
    }
}

impl Default for Action {
    fn default() -> Self {
        Action::none()
    }
}

impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Action::Text(a), Action::Text(b)) => a == b,
            (Action::Tool(a), Action::Tool(b)) => a == b,
            (Action::Custom(a), Action::Custom(b)) => {
                a.kind() == b.kind() && a.payload() == b.payload()
            }
            _ => false,
        }
    }
}

impl From<&str> for Action {
    fn from(text: &str) -> Self {
        Action::Text(text.to_string())
    }
}

impl From<String> for Action {
    fn from(text: String) -> Self {
        Action::Text(text)
    }
}

impl From<ToolCall> for Action {
    fn from(call: ToolCall) -> Self {
        Action::Tool(call)
    }
}
