use crate::error::{FlowError, ValidationError};
use crate::http::HttpReply;
use crate::template::TemplateContext;

use super::plan::ResponseCheck;

/// Applies a step's optional response checks.
///
/// Expected `data` is rendered through the context first, so it may reference
/// earlier step results; it must then equal the response body structurally.
/// `status_code` must match exactly. Omitted checks are skipped.
///
/// # Errors
///
/// Returns a template error when the expected data cannot be rendered, or a
/// validation error naming the request with expected and actual values.
pub fn validate_response(
    name: &str,
    reply: &HttpReply,
    context: &TemplateContext,
    checks: &ResponseCheck,
) -> Result<(), FlowError> {
    if let Some(expected) = checks.data.as_ref() {
        let expected = context.render_value(expected)?;
        if expected != reply.body {
            return Err(FlowError::from(ValidationError::DataMismatch {
                name: name.to_owned(),
                expected: expected.to_string(),
                actual: reply.body.to_string(),
            }));
        }
    }

    match checks.status_code {
        Some(expected) if expected != reply.status_code => {
            return Err(FlowError::from(ValidationError::StatusMismatch {
                name: name.to_owned(),
                expected,
                actual: reply.status_code,
            }));
        }
        Some(_) | None => {}
    }

    Ok(())
}
