use std::collections::HashMap;

use reactkit_core::{ReactkitError, Value};
use regex::Regex;

const PLACEHOLDER: &str = r"\{\{\s*(\w+)\s*\}\}";

/// Text with `{{name}}` placeholders.
///
/// Rendering is strict: every placeholder needs a value, otherwise nothing is
/// rendered and [`ReactkitError::MissingVariable`] names the first gap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Placeholder names in order of first appearance.
    pub fn variables(&self) -> Result<Vec<String>, ReactkitError> {
        let pattern = placeholder_pattern()?;
        let mut names: Vec<String> = Vec::new();
        for caps in pattern.captures_iter(&self.template) {
            let name = &caps[1];
            if !names.iter().any(|seen| seen == name) {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    pub fn render(&self, vars: &HashMap<String, Value>) -> Result<String, ReactkitError> {
        let pattern = placeholder_pattern()?;
        if let Some(missing) = pattern
            .captures_iter(&self.template)
            .find(|caps| !vars.contains_key(&caps[1]))
        {
            return Err(ReactkitError::MissingVariable {
                name: missing[1].to_string(),
            });
        }

        let rendered = pattern.replace_all(&self.template, |caps: &regex::Captures| {
            match vars.get(&caps[1]) {
                Some(value) => value
                    .as_str()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| value.to_string()),
                None => String::new(),
            }
        });
        Ok(rendered.into_owned())
    }
}

impl From<&str> for PromptTemplate {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}

impl From<String> for PromptTemplate {
    fn from(template: String) -> Self {
        Self::new(template)
    }
}

fn placeholder_pattern() -> Result<Regex, ReactkitError> {
    Regex::new(PLACEHOLDER).map_err(|e| ReactkitError::InvalidConfig(e.to_string()))
}
