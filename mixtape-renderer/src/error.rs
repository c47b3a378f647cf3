//! Error types for mixtape-renderer.

use thiserror::Error;

/// All errors that can arise from loading or rendering a track template.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template could not be resolved on the search path, could not be read,
    /// or failed to compile.
    #[error("failed to load template '{name}': {source}")]
    Load {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    /// Template evaluation failed: undefined variable or helper, bad helper
    /// arguments, or a runtime error inside the template.
    #[error("failed to render template '{name}': {source}")]
    Render {
        name: String,
        #[source]
        source: minijinja::Error,
    },
}

impl RenderError {
    /// Template name the error refers to.
    pub fn template_name(&self) -> &str {
        match self {
            RenderError::Load { name, .. } | RenderError::Render { name, .. } => name,
        }
    }
}
