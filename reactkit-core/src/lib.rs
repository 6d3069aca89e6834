mod error;
mod llm;
mod schema;
mod value;

pub use error::ReactkitError;
pub use llm::{Message, Role, StructuredLlm, StructuredLlmExt, StructuredRequest, ToolCall};
pub use schema::{response_schema, strip_property_titles};
pub use value::{TryFromValue, Value};
