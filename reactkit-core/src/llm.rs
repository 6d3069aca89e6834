use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::schema::response_schema;
use crate::{ReactkitError, TryFromValue, Value};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    pub args: Value,
}

/// A single structured-output call as seen by an LLM client.
///
/// `schema` is the JSON schema the returned value must conform to; property
/// titles have already been removed from it.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct StructuredRequest {
    pub schema_name: String,
    pub schema: Value,
    pub system_prompt: String,
    pub messages: Vec<Message>,
}

/// Boundary to an LLM client that supports structured output.
///
/// Implementations own transport, timeouts and any retry policy. Whatever they
/// return as an error reaches the caller of a procedure untouched.
pub trait StructuredLlm: Send + Sync {
    fn invoke_structured(&self, request: StructuredRequest) -> Result<Value, ReactkitError>;
}

pub trait StructuredLlmExt: StructuredLlm {
    /// Request a value shaped like `T` and decode the client's answer into it.
    fn invoke<T>(
        &self,
        system_prompt: impl Into<String>,
        messages: Vec<Message>,
    ) -> Result<T, ReactkitError>
    where
        T: JsonSchema + DeserializeOwned,
    {
        let (schema_name, schema) = response_schema::<T>()?;
        tracing::debug!(
            schema = %schema_name,
            messages = messages.len(),
            "invoking structured llm"
        );

        let value = self.invoke_structured(StructuredRequest {
            schema_name,
            schema,
            system_prompt: system_prompt.into(),
            messages,
        })?;

        T::try_from_value(value)
    }
}

impl<L> StructuredLlmExt for L where L: StructuredLlm + ?Sized {}
