use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to render template '{template}': {source}")]
    Render {
        template: String,
        #[source]
        source: minijinja::Error,
    },
    #[error("Failed to serialize template value: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
    #[error("Rendered template is not valid JSON '{rendered}': {source}")]
    InvalidJson {
        rendered: String,
        #[source]
        source: serde_json::Error,
    },
}
