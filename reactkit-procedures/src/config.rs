use std::fmt;
use std::sync::Arc;

use reactkit_core::{ReactkitError, StructuredLlm};
use reactkit_prompt::PromptTemplate;

use crate::{Procedure, ThoughtProcedure, LAST_STEP_VAR, SUMMARY_VAR};

#[derive(Default, Clone)]
pub struct ThoughtProcedureBuilder {
    llm: Option<Arc<dyn StructuredLlm>>,
    prompt_template: Option<PromptTemplate>,
}

impl fmt::Debug for ThoughtProcedureBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let llm = if self.llm.is_some() { "<set>" } else { "<none>" };

        f.debug_struct("ThoughtProcedureBuilder")
            .field("llm", &llm)
            .field("prompt_template", &self.prompt_template)
            .finish()
    }
}

impl ThoughtProcedureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn llm(mut self, llm: Arc<dyn StructuredLlm>) -> Self {
        self.llm = Some(llm);
        self
    }

    pub fn prompt_template(mut self, value: impl Into<PromptTemplate>) -> Self {
        self.prompt_template = Some(value.into());
        self
    }

    pub fn build(self) -> Result<ThoughtProcedure, ReactkitError> {
        let llm = self
            .llm
            .ok_or_else(|| ReactkitError::InvalidConfig("an llm is required".to_string()))?;

        let prompt_template = self.prompt_template.ok_or_else(|| {
            ReactkitError::InvalidConfig("a prompt template is required".to_string())
        })?;
        if prompt_template.as_str().trim().is_empty() {
            return Err(ReactkitError::InvalidConfig(
                "prompt template must not be empty".to_string(),
            ));
        }

        let variables = prompt_template.variables()?;
        if !variables
            .iter()
            .any(|name| name == SUMMARY_VAR || name == LAST_STEP_VAR)
        {
            tracing::warn!(
                variables = ?variables,
                "thought prompt template uses neither summary nor last_step"
            );
        }

        Ok(ThoughtProcedure::new(llm, prompt_template))
    }
}
