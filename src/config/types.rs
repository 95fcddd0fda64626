use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

/// Raw flow configuration document, as written in `.toml` or `.json`.
#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub configs: RunSection,
    #[serde(default)]
    pub api: Vec<ApiConfig>,
    #[serde(default)]
    pub request: Vec<RequestConfig>,
}

#[derive(Debug, Deserialize)]
pub struct RunSection {
    pub duration: DurationValue,
    pub number_of_concurrent_flows: usize,
}

#[derive(Debug, Default, Deserialize, Clone)]
pub struct ApiConfig {
    pub name: String,
    pub base_url: String,
    /// Context key -> environment variable name.
    #[serde(default)]
    pub envvars: BTreeMap<String, String>,
    #[serde(default)]
    pub vars: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
pub struct RequestConfig {
    pub name: String,
    pub url: String,
    pub method: String,
    pub data: Option<Value>,
    pub params: Option<Value>,
    pub headers: Option<Value>,
    pub timeout: Option<DurationValue>,
    #[serde(default)]
    pub save_result: bool,
    pub response_check: Option<ResponseCheckConfig>,
}

#[derive(Debug, Default, Deserialize, Clone)]
pub struct ResponseCheckConfig {
    pub data: Option<Value>,
    pub status_code: Option<u16>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(f64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, String> {
        match self {
            DurationValue::Seconds(secs) => {
                if !secs.is_finite() || *secs <= 0.0 {
                    return Err("Duration must be > 0.".to_owned());
                }
                Duration::try_from_secs_f64(*secs).map_err(|err| format!("Invalid duration: {}", err))
            }
            DurationValue::Text(text) => super::parse_duration_value(text),
        }
    }
}
