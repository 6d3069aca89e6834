use std::collections::HashMap;

use reactkit_core::{ReactkitError, Value};
use reactkit_prompt::PromptTemplate;
use serde_json::json;

#[test]
fn renders_template_with_vars() {
    let tmpl = PromptTemplate::new("Hello {{name}}");
    let mut vars = HashMap::new();
    vars.insert("name".to_string(), Value::from("Wesi"));
    let rendered = tmpl.render(&vars).expect("render");
    assert_eq!(rendered, "Hello Wesi");
}

#[test]
fn does_not_confuse_overlapping_keys() {
    let tmpl = PromptTemplate::new("{{name}} {{fullname}}");
    let mut vars = HashMap::new();
    vars.insert("name".to_string(), Value::from("X"));
    vars.insert("fullname".to_string(), Value::from("Y"));
    let rendered = tmpl.render(&vars).expect("render");
    assert_eq!(rendered, "X Y");
}

#[test]
fn tolerates_whitespace_and_repeats() {
    let tmpl = PromptTemplate::new("{{ task }} / {{task}}");
    let mut vars = HashMap::new();
    vars.insert("task".to_string(), Value::from("plan"));
    assert_eq!(tmpl.render(&vars).expect("render"), "plan / plan");
}

#[test]
fn non_string_values_render_as_json() {
    let tmpl = PromptTemplate::new("n={{n}} tags={{tags}}");
    let mut vars = HashMap::new();
    vars.insert("n".to_string(), json!(3));
    vars.insert("tags".to_string(), json!(["a", "b"]));
    assert_eq!(tmpl.render(&vars).expect("render"), r#"n=3 tags=["a","b"]"#);
}

#[test]
fn missing_variable_is_an_error() {
    let tmpl = PromptTemplate::new("{{summary}}\n{{last_step}}");
    let mut vars = HashMap::new();
    vars.insert("summary".to_string(), Value::from("s"));

    match tmpl.render(&vars) {
        Err(ReactkitError::MissingVariable { name }) => assert_eq!(name, "last_step"),
        other => panic!("expected MissingVariable, got {other:?}"),
    }
}

#[test]
fn extra_variables_are_ignored() {
    let tmpl = PromptTemplate::new("no placeholders");
    let mut vars = HashMap::new();
    vars.insert("unused".to_string(), Value::from("x"));
    assert_eq!(tmpl.render(&vars).expect("render"), "no placeholders");
}

#[test]
fn lists_variables_in_first_appearance_order() {
    let tmpl = PromptTemplate::from("{{b}} {{a}} {{ b }}");
    assert_eq!(tmpl.variables().expect("variables"), vec!["b", "a"]);
}
