//! Template types and error definitions

use thiserror::Error;

use super::substitution::{first_unresolved, substitute_variables};

/// Template-specific error type
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Failed to read template {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid variables: {0}")]
    InvalidVariables(String),

    #[error("Unresolved placeholder {{{{{placeholder}}}}} in template {template}")]
    UnresolvedPlaceholder {
        template: String,
        placeholder: String,
    },
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// An XML request template with `{{variable}}` placeholders.
///
/// Immutable once loaded; rendering is pure, so the same template and
/// variables always produce byte-identical output.
#[derive(Debug, Clone)]
pub struct Template {
    /// Template name as resolved by the store
    pub name: String,

    /// Raw template text
    pub body: String,
}

impl Template {
    /// Substitute every `{{placeholder}}` in the template body.
    ///
    /// `variables` must be a JSON object. Any placeholder left unresolved
    /// after substitution is an error; the renderer fails loudly rather
    /// than emitting silently malformed XML.
    pub fn render(&self, variables: &serde_json::Value) -> TemplateResult<String> {
        let rendered = substitute_variables(&self.body, variables)?;

        if let Some(placeholder) = first_unresolved(&rendered) {
            return Err(TemplateError::UnresolvedPlaceholder {
                template: self.name.clone(),
                placeholder,
            });
        }

        Ok(rendered)
    }
}
