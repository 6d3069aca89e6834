use std::sync::Arc;

use reactkit_core::{ReactkitError, StructuredLlm, StructuredRequest, Value};
use reactkit_memory::Step;
use reactkit_procedures::{Procedure, ThoughtContext, ThoughtProcedure};
use serde_json::json;

struct FixedLlm;

impl StructuredLlm for FixedLlm {
    fn invoke_structured(&self, _request: StructuredRequest) -> Result<Value, ReactkitError> {
        Ok(json!({"thought": "fixed"}))
    }
}

#[test]
fn builder_produces_working_procedure() {
    let procedure = ThoughtProcedure::builder()
        .llm(Arc::new(FixedLlm))
        .prompt_template("{{summary}} / {{last_step}}")
        .build()
        .expect("build");

    let step = Step::default();
    let out = procedure
        .run(ThoughtContext::new("s", &step))
        .expect("run");
    assert_eq!(out.thought, "fixed");
    assert_eq!(
        procedure.prompt_template().as_str(),
        "{{summary}} / {{last_step}}"
    );
}

#[test]
fn builder_requires_llm() {
    let err = ThoughtProcedure::builder()
        .prompt_template("{{summary}}")
        .build()
        .unwrap_err();
    assert!(matches!(err, ReactkitError::InvalidConfig(_)));
}

#[test]
fn builder_requires_template() {
    let err = ThoughtProcedure::builder()
        .llm(Arc::new(FixedLlm))
        .build()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid configuration: a prompt template is required"
    );
}

#[test]
fn builder_rejects_blank_template() {
    let err = ThoughtProcedure::builder()
        .llm(Arc::new(FixedLlm))
        .prompt_template("   \n")
        .build()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid configuration: prompt template must not be empty"
    );
}

#[test]
fn builder_accepts_template_without_known_placeholders() {
    let procedure = ThoughtProcedure::builder()
        .llm(Arc::new(FixedLlm))
        .prompt_template("Think step by step.")
        .build()
        .expect("build");
    let step = Step::default();
    assert!(procedure.run(ThoughtContext::new("", &step)).is_ok());
}

#[test]
fn builder_debug_hides_llm() {
    let builder = ThoughtProcedure::builder().llm(Arc::new(FixedLlm));
    let debug = format!("{builder:?}");
    assert!(debug.contains("<set>"));
    assert!(!debug.contains("FixedLlm"));
}
