use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde_json::Value;

use crate::args::PositiveUsize;
use crate::error::ConfigError;
use crate::flow::{
    ApiDescriptor, DEFAULT_TIMEOUT, FlowPlan, RequestStep, ResponseCheck, RunConfig,
};

use super::types::{ApiConfig, ConfigFile, RequestConfig};

const FROM_FILE_KEY: &str = "from_file";

/// Validates a raw config document and turns it into a [`FlowPlan`].
///
/// `base_dir` anchors relative `data.from_file` paths; `env` resolves the
/// environment variables named by `api.envvars`.
///
/// # Errors
///
/// Returns an error for invalid run settings, missing or unnamed steps,
/// duplicate API names, unset environment variables, or unreadable data
/// files.
pub fn apply_config<F>(config: ConfigFile, base_dir: &Path, env: F) -> Result<FlowPlan, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let duration_budget =
        config
            .configs
            .duration
            .to_duration()
            .map_err(|message| ConfigError::InvalidField {
                field: "configs.duration".to_owned(),
                message,
            })?;
    let concurrency = PositiveUsize::try_from(config.configs.number_of_concurrent_flows)
        .map_err(|err| ConfigError::InvalidField {
            field: "configs.number_of_concurrent_flows".to_owned(),
            message: err.to_string(),
        })?;

    if config.request.is_empty() {
        return Err(ConfigError::MissingRequests);
    }

    let mut seen = BTreeSet::new();
    let mut apis = Vec::with_capacity(config.api.len());
    for (idx, api) in config.api.iter().enumerate() {
        if api.name.trim().is_empty() {
            return Err(ConfigError::ApiNameEmpty {
                index: idx.saturating_add(1),
            });
        }
        if !seen.insert(api.name.as_str()) {
            return Err(ConfigError::DuplicateApiName {
                name: api.name.clone(),
            });
        }
        apis.push(build_api(api, &env)?);
    }

    let mut steps = Vec::with_capacity(config.request.len());
    for (idx, request) in config.request.into_iter().enumerate() {
        if request.name.trim().is_empty() {
            return Err(ConfigError::RequestNameEmpty {
                index: idx.saturating_add(1),
            });
        }
        steps.push(build_step(request, base_dir)?);
    }

    Ok(FlowPlan {
        run: RunConfig {
            duration_budget,
            concurrency,
        },
        apis,
        steps,
    })
}

fn build_api<F>(api: &ApiConfig, env: &F) -> Result<ApiDescriptor, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut extra_vars: BTreeMap<String, String> = api.vars.clone();
    for (key, var) in &api.envvars {
        let value = env(var).ok_or_else(|| ConfigError::MissingEnvVar {
            api: api.name.clone(),
            var: var.clone(),
        })?;
        extra_vars.insert(key.clone(), value);
    }

    Ok(ApiDescriptor {
        name: api.name.clone(),
        base_url: api.base_url.clone(),
        extra_vars,
    })
}

fn build_step(request: RequestConfig, base_dir: &Path) -> Result<RequestStep, ConfigError> {
    let timeout = match request.timeout.as_ref() {
        Some(value) => value
            .to_duration()
            .map_err(|message| ConfigError::InvalidField {
                field: format!("request.{}.timeout", request.name),
                message,
            })?,
        None => DEFAULT_TIMEOUT,
    };

    let data = match request.data {
        Some(data) => Some(resolve_data_file(&request.name, data, base_dir)?),
        None => None,
    };

    Ok(RequestStep {
        name: request.name,
        url: request.url,
        method: request.method,
        data,
        params: request.params,
        headers: request.headers,
        timeout,
        save_result: request.save_result,
        response_check: request.response_check.map(|check| ResponseCheck {
            data: check.data,
            status_code: check.status_code,
        }),
    })
}

/// Replaces `{ from_file = "<path>" }` with the JSON document it points to.
fn resolve_data_file(request: &str, data: Value, base_dir: &Path) -> Result<Value, ConfigError> {
    let Some(file) = data.get(FROM_FILE_KEY).and_then(Value::as_str) else {
        return Ok(data);
    };

    let path = base_dir.join(file);
    let content = std::fs::read_to_string(&path).map_err(|err| ConfigError::ReadDataFile {
        request: request.to_owned(),
        path: path.clone(),
        source: err,
    })?;
    serde_json::from_str(&content).map_err(|err| ConfigError::ParseDataFile {
        request: request.to_owned(),
        path,
        source: err,
    })
}
