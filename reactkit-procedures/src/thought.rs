use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use reactkit_core::{ReactkitError, StructuredLlm, StructuredLlmExt, Value};
use reactkit_memory::Step;
use reactkit_prompt::PromptTemplate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{Procedure, ThoughtProcedureBuilder};

pub const SUMMARY_VAR: &str = "summary";
pub const LAST_STEP_VAR: &str = "last_step";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ThoughtModel {
    #[schemars(title = "thought")]
    pub thought: String,
}

/// What the thought procedure reasons over: the running summary and the
/// latest step.
#[derive(Clone, Copy, Debug)]
pub struct ThoughtContext<'a> {
    pub summary: &'a str,
    pub last_step: &'a Step,
}

impl<'a> ThoughtContext<'a> {
    pub fn new(summary: &'a str, last_step: &'a Step) -> Self {
        Self { summary, last_step }
    }
}

/// Asks the LLM for the next thought.
///
/// The template sees `{{summary}}` and `{{last_step}}` (the step's text
/// rendering). The rendered prompt goes out as the system prompt with no
/// messages.
#[derive(Clone)]
pub struct ThoughtProcedure {
    llm: Arc<dyn StructuredLlm>,
    prompt_template: PromptTemplate,
}

impl ThoughtProcedure {
    pub fn builder() -> ThoughtProcedureBuilder {
        ThoughtProcedureBuilder::new()
    }
}

impl fmt::Debug for ThoughtProcedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThoughtProcedure")
            .field("prompt_template", &self.prompt_template)
            .finish_non_exhaustive()
    }
}

impl Procedure for ThoughtProcedure {
    type Input<'a> = ThoughtContext<'a>;
    type Output = ThoughtModel;

    fn new(llm: Arc<dyn StructuredLlm>, prompt_template: PromptTemplate) -> Self {
        Self {
            llm,
            prompt_template,
        }
    }

    fn llm(&self) -> &dyn StructuredLlm {
        self.llm.as_ref()
    }

    fn prompt_template(&self) -> &PromptTemplate {
        &self.prompt_template
    }

    fn run(&self, input: ThoughtContext<'_>) -> Result<ThoughtModel, ReactkitError> {
        let span = tracing::info_span!(
            "thought_procedure",
            summary_len = input.summary.len(),
            last_action = %input.last_step.action().kind(),
        );
        let _guard = span.enter();

        let mut vars = HashMap::new();
        vars.insert(SUMMARY_VAR.to_string(), Value::from(input.summary));
        vars.insert(
            LAST_STEP_VAR.to_string(),
            Value::from(input.last_step.render_text()),
        );
        let prompt = self.prompt_template.render(&vars)?;

        tracing::debug!(prompt_len = prompt.len(), "requesting thought");
        self.llm.invoke::<ThoughtModel>(prompt, Vec::new())
    }
}
