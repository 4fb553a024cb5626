//! Variable substitution engine for templates

use super::types::{TemplateError, TemplateResult};

/// Substitute {{variable}} placeholders in template text
pub(super) fn substitute_variables(
    template: &str,
    variables: &serde_json::Value,
) -> TemplateResult<String> {
    let vars = match variables {
        serde_json::Value::Object(map) => map,
        _ => {
            return Err(TemplateError::InvalidVariables(
                "Variables must be an object".to_string(),
            ))
        }
    };

    Ok(substitute_string(template, vars))
}

fn substitute_string(
    template: &str,
    variables: &serde_json::Map<String, serde_json::Value>,
) -> String {
    let mut result = template.to_string();

    // Find all {{variable}} patterns and replace them
    for (key, value) in variables {
        let pattern = format!("{{{{{}}}}}", key);
        let replacement = match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Null => "".to_string(),
            // For arrays and objects, use JSON representation
            _ => value.to_string(),
        };
        result = result.replace(&pattern, &replacement);
    }

    result
}

/// Find the first `{{placeholder}}` remaining in rendered text, if any.
pub(super) fn first_unresolved(rendered: &str) -> Option<String> {
    let start = rendered.find("{{")?;
    let rest = &rendered[start + 2..];
    let end = rest.find("}}")?;
    Some(rest[..end].to_string())
}
