use std::slice;

use reactkit_core::{Message, Value};
use serde_json::json;

use crate::{Step, StepLog};

/// Append-only, chronological record of an agent run's steps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scratchpad {
    steps: Vec<Step>,
}

impl Scratchpad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, step: Step) {
        self.steps.push(step);
        tracing::trace!(steps = self.steps.len(), "scratchpad step appended");
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Most recent step, if any.
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn iter(&self) -> slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// A leading newline, then every step's text in order.
    pub fn render_text(&self) -> String {
        self.steps
            .iter()
            .fold(String::from("\n"), |mut text, step| {
                text.push_str(&step.render_text());
                text
            })
    }

    /// Message pairs for the last `window` steps, or for all of them.
    ///
    /// A window larger than the scratchpad is clamped.
    pub fn render_messages(&self, window: Option<usize>) -> Vec<Message> {
        let start = window.map_or(0, |window| self.steps.len().saturating_sub(window));
        self.steps[start..]
            .iter()
            .flat_map(Step::render_messages)
            .collect()
    }

    pub fn render_log(&self) -> Vec<StepLog> {
        self.steps.iter().map(Step::render_log).collect()
    }

    /// Always `{"scratchpad": []}`.
    ///
    /// Stub kept for callers that expect the key; it carries no step data.
    /// Use [`Scratchpad::render_log`] for per-step records.
    // TODO: emit step records here once the structured-log format is defined.
    pub fn to_json(&self) -> Value {
        json!({ "scratchpad": [] })
    }
}

impl Extend<Step> for Scratchpad {
    fn extend<I: IntoIterator<Item = Step>>(&mut self, iter: I) {
        for step in iter {
            self.append(step);
        }
    }
}

impl FromIterator<Step> for Scratchpad {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        let mut scratchpad = Scratchpad::new();
        scratchpad.extend(iter);
        scratchpad
    }
}

impl<'a> IntoIterator for &'a Scratchpad {
    type Item = &'a Step;
    type IntoIter = slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
