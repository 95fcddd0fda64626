use std::time::Duration;

use super::types::PositiveUsize;
use crate::config::parse_duration_value;
use crate::error::ConfigError;

pub(super) fn parse_positive_usize(s: &str) -> Result<PositiveUsize, ConfigError> {
    s.parse::<PositiveUsize>()
}

pub(super) fn parse_duration_arg(s: &str) -> Result<Duration, ConfigError> {
    parse_duration_value(s).map_err(|message| ConfigError::InvalidField {
        field: "--duration".to_owned(),
        message,
    })
}
