//! Template loading from the requests directory

use std::path::PathBuf;

use tracing::debug;

use super::types::{Template, TemplateError, TemplateResult};

/// Loads named templates from a directory, resolving `name` to
/// `<dir>/<name>.xml`.
///
/// Templates are reloaded on every call. The store holds no cache and no
/// mutable state, so it can be shared freely across concurrent test cases.
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    /// Create a store rooted at the given templates directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolve a template name to its path on disk
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.xml"))
    }

    /// Check whether a template resource exists
    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).is_file()
    }

    /// Load a template by name
    pub fn load(&self, name: &str) -> TemplateResult<Template> {
        let path = self.path_for(name);

        if !path.is_file() {
            return Err(TemplateError::NotFound(name.to_string()));
        }

        let body = std::fs::read_to_string(&path).map_err(|source| TemplateError::Io {
            name: name.to_string(),
            source,
        })?;

        debug!(
            template = %name,
            path = %path.display(),
            bytes = body.len(),
            "Template loaded"
        );

        Ok(Template {
            name: name.to_string(),
            body,
        })
    }

    /// Load and render a template in one step
    pub fn render(&self, name: &str, variables: &serde_json::Value) -> TemplateResult<String> {
        self.load(name)?.render(variables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    fn store_with_template(name: &str, body: &str) -> (tempfile::TempDir, TemplateStore) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(format!("{name}.xml")), body).unwrap();
        let store = TemplateStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_load_and_render() {
        let (_dir, store) =
            store_with_template("ping", "<ping><id>{{id}}</id></ping>");

        let template = store.load("ping").unwrap();
        assert_eq!(template.name, "ping");

        let rendered = store.render("ping", &json!({"id": "abc-1"})).unwrap();
        assert_eq!(rendered, "<ping><id>abc-1</id></ping>");
    }

    #[test]
    fn test_missing_template_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = TemplateStore::new(dir.path());

        assert!(!store.exists("nope"));
        assert!(matches!(
            store.load("nope"),
            Err(TemplateError::NotFound(name)) if name == "nope"
        ));
        assert!(matches!(
            store.render("nope", &json!({})),
            Err(TemplateError::NotFound(_))
        ));
    }

    #[test]
    fn test_render_is_byte_identical_across_calls() {
        let (_dir, store) = store_with_template(
            "repeat",
            "<r><a>{{a}}</a><b>{{b}}</b><c>{{c}}</c></r>",
        );
        let vars = json!({"a": "x", "b": 7, "c": "2024-01-01"});

        let first = store.render("repeat", &vars).unwrap();
        let second = store.render("repeat", &vars).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_reload_per_call_sees_changes() {
        let (dir, store) = store_with_template("live", "<v>{{v}}</v>");

        assert_eq!(store.render("live", &json!({"v": 1})).unwrap(), "<v>1</v>");

        fs::write(dir.path().join("live.xml"), "<v2>{{v}}</v2>").unwrap();
        assert_eq!(store.render("live", &json!({"v": 1})).unwrap(), "<v2>1</v2>");
    }

    #[test]
    fn test_path_for_convention() {
        let store = TemplateStore::new("requests");
        assert_eq!(
            store.path_for("getWeatherRequest"),
            PathBuf::from("requests/getWeatherRequest.xml")
        );
    }
}
