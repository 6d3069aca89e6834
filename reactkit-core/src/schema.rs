use schemars::JsonSchema;

use crate::{ReactkitError, Value};

/// JSON schema for a response model, as handed to an LLM client.
///
/// Returns the schema name alongside the schema with property titles
/// stripped. The root title is kept.
pub fn response_schema<T: JsonSchema>() -> Result<(String, Value), ReactkitError> {
    let root = schemars::schema_for!(T);
    let mut schema = serde_json::to_value(&root)?;
    strip_property_titles(&mut schema);
    Ok((T::schema_name(), schema))
}

/// Remove `title` from every property schema, at any depth.
pub fn strip_property_titles(schema: &mut Value) {
    let Some(object) = schema.as_object_mut() else {
        return;
    };

    if let Some(Value::Object(properties)) = object.get_mut("properties") {
        for property in properties.values_mut() {
            if let Some(fields) = property.as_object_mut() {
                fields.remove("title");
            }
            strip_property_titles(property);
        }
    }

    for key in ["items", "additionalProperties", "allOf", "anyOf", "oneOf"] {
        match object.get_mut(key) {
            Some(Value::Array(children)) => children.iter_mut().for_each(strip_property_titles),
            Some(child) => strip_property_titles(child),
            None => {}
        }
    }

    for key in ["definitions", "$defs"] {
        if let Some(Value::Object(definitions)) = object.get_mut(key) {
            definitions.values_mut().for_each(strip_property_titles);
        }
    }
}
