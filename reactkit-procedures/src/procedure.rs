use std::sync::Arc;

use reactkit_core::{ReactkitError, StructuredLlm};
use reactkit_prompt::PromptTemplate;

/// A reasoning procedure: one prompt template, one LLM call, one artifact.
///
/// Implementors decide what they take as input and what they produce; `run`
/// has no default. Errors from prompt rendering or from the LLM are returned
/// as-is.
pub trait Procedure {
    type Input<'a>;
    type Output;

    fn new(llm: Arc<dyn StructuredLlm>, prompt_template: PromptTemplate) -> Self
    where
        Self: Sized;

    fn llm(&self) -> &dyn StructuredLlm;

    fn prompt_template(&self) -> &PromptTemplate;

    fn run(&self, input: Self::Input<'_>) -> Result<Self::Output, ReactkitError>;
}
