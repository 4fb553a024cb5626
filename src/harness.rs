//! Render -> send composition for test code.
//!
//! The components stay independent; this type only wires the configured
//! template store and SOAP client together so a test case can do one call.
//! It adds no orchestration, no retries, and no shared mutable state.

use crate::config::Settings;
use crate::error::Result;
use crate::soap::{SoapClient, SoapRequest, SoapResponse};
use crate::template::TemplateStore;

pub struct Harness {
    settings: Settings,
    store: TemplateStore,
    client: SoapClient,
}

impl Harness {
    /// Build a harness from explicit settings
    pub fn from_settings(settings: Settings) -> Self {
        let store = TemplateStore::new(settings.templates.dir.clone());
        Self {
            settings,
            store,
            client: SoapClient::new(),
        }
    }

    /// Build a harness from environment configuration
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_settings(Settings::new()?))
    }

    /// Swap in an externally configured SOAP client
    pub fn with_client(mut self, client: SoapClient) -> Self {
        self.client = client;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    pub fn client(&self) -> &SoapClient {
        &self.client
    }

    /// Render a named template and POST it to the configured endpoint.
    ///
    /// The configured bearer token, when present, is attached to the
    /// request. Extraction from the response body stays in caller code.
    pub async fn call(
        &self,
        template_name: &str,
        variables: &serde_json::Value,
        action: Option<&str>,
    ) -> Result<SoapResponse> {
        let payload = self.store.render(template_name, variables)?;

        let mut request = SoapRequest::new(&self.settings.soap.endpoint, payload);
        if let Some(token) = &self.settings.soap.token {
            request = request.bearer_token(token);
        }
        if let Some(action) = action {
            request = request.action(action);
        }

        Ok(self.client.send(&request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SoapConfig, TemplateConfig};

    #[test]
    fn test_from_settings_wires_template_dir() {
        let settings = Settings {
            soap: SoapConfig {
                endpoint: "http://localhost:9/soap".to_string(),
                token: Some("tok123".to_string()),
            },
            templates: TemplateConfig {
                dir: "requests".to_string(),
            },
        };

        let harness = Harness::from_settings(settings);
        assert_eq!(harness.settings().soap.token.as_deref(), Some("tok123"));
        assert!(harness
            .store()
            .path_for("getWeatherRequest")
            .ends_with("requests/getWeatherRequest.xml"));
    }
}
