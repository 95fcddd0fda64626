use std::collections::BTreeMap;

use minijinja::{Environment, UndefinedBehavior};
use serde_json::{Map, Value};

use crate::error::TemplateError;
use crate::flow::ApiDescriptor;

const BASE_URL_KEY: &str = "base_url";

/// Name -> value mapping owned by exactly one flow execution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateContext {
    values: BTreeMap<String, Value>,
}

impl TemplateContext {
    /// Seeds a fresh context with one entry per API: its `base_url` plus any
    /// extra variables.
    #[must_use]
    pub fn seeded(apis: &[ApiDescriptor]) -> Self {
        let mut values = BTreeMap::new();
        for api in apis {
            let mut fields = Map::new();
            fields.insert(
                BASE_URL_KEY.to_owned(),
                Value::String(api.base_url.clone()),
            );
            for (key, value) in &api.extra_vars {
                fields.insert(key.clone(), Value::String(value.clone()));
            }
            values.insert(api.name.clone(), Value::Object(fields));
        }
        Self { values }
    }

    /// Makes `value` resolvable under `name` for every later render.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Renders a template string.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed syntax or a reference to a name that is
    /// not in the context.
    pub fn render_str(&self, template: &str) -> Result<String, TemplateError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.render_str(template, minijinja::Value::from_serialize(&self.values))
            .map_err(|err| TemplateError::Render {
                template: template.to_owned(),
                source: err,
            })
    }

    /// Renders a template value, keeping its shape.
    ///
    /// # Errors
    ///
    /// Returns an error when rendering fails or a rendered structured value is
    /// no longer valid JSON.
    pub fn render_value(&self, template: &Value) -> Result<Value, TemplateError> {
        match template {
            Value::String(text) => self.render_str(text).map(Value::String),
            Value::Object(_) | Value::Array(_) => {
                let text = serde_json::to_string(template)
                    .map_err(|err| TemplateError::Serialize { source: err })?;
                let rendered = self.render_str(&text)?;
                serde_json::from_str(&rendered).map_err(|err| TemplateError::InvalidJson {
                    rendered,
                    source: err,
                })
            }
            Value::Null | Value::Bool(_) | Value::Number(_) => Ok(template.clone()),
        }
    }
}
