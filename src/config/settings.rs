use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub soap: SoapConfig,
    #[serde(default)]
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SoapConfig {
    /// Target SOAP endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Bearer token for the Authorization header; the header is omitted
    /// entirely when unset
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplateConfig {
    /// Directory holding request templates, resolved as `<dir>/<name>.xml`
    #[serde(default = "default_templates_dir")]
    pub dir: String,
}

fn default_endpoint() -> String {
    "http://localhost:8080/soap".to_string()
}

fn default_templates_dir() -> String {
    "requests".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default values
            .set_default("soap.endpoint", default_endpoint())?
            .set_default("templates.dir", default_templates_dir())?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables
            // SOAP_ENDPOINT, SOAP_TOKEN, TEMPLATES_DIR
            .add_source(Environment::default().separator("_").try_parsing(true));

        builder.build()?.try_deserialize()
    }
}

impl Default for SoapConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            token: None,
        }
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            dir: default_templates_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let soap = SoapConfig::default();
        assert_eq!(soap.endpoint, "http://localhost:8080/soap");
        assert!(soap.token.is_none());

        let templates = TemplateConfig::default();
        assert_eq!(templates.dir, "requests");
    }
}
