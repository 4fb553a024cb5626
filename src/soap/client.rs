//! Thin POST wrapper around the HTTP client

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT,
};
use tracing::{debug, error, warn};

use super::types::{SoapError, SoapRequest, SoapResponse, SoapResult};

const CONTENT_TYPE_XML: &str = "text/xml;charset=UTF-8";
const ACCEPT_XML: &str = "text/xml";
const HARNESS_USER_AGENT: &str = concat!("soap-harness/", env!("CARGO_PKG_VERSION"));

/// Issues SOAP requests over HTTP.
///
/// Holds only a cloneable `reqwest::Client`; no cross-call state, so one
/// client can serve concurrent test cases. Timeout policy belongs to the
/// supplied transport, not to this wrapper.
pub struct SoapClient {
    client: reqwest::Client,
}

impl Default for SoapClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SoapClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Use an externally configured transport (timeouts, TLS, proxies)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Issue exactly one POST of the payload to the endpoint.
    ///
    /// The response is returned unmodified; 4xx/5xx statuses are ordinary
    /// return values. Transport failures are logged and re-raised without
    /// retry or classification.
    pub async fn send(&self, request: &SoapRequest) -> SoapResult<SoapResponse> {
        let headers = build_headers(
            request.action.as_deref(),
            request.token.as_deref(),
            &request.extra_headers,
        );

        debug!(
            endpoint = %request.endpoint,
            soap_action = %request.action.as_deref().unwrap_or(""),
            payload_bytes = request.payload.len(),
            "Sending SOAP request"
        );

        let response = self
            .client
            .post(&request.endpoint)
            .headers(headers)
            .body(request.payload.clone())
            .send()
            .await
            .map_err(|e| {
                error!(endpoint = %request.endpoint, error = %e, "SOAP transport failure");
                SoapError::Transport(e)
            })?;

        let status = response.status().as_u16();
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();

        let body = response.text().await.map_err(|e| {
            error!(endpoint = %request.endpoint, error = %e, "Failed to read SOAP response body");
            SoapError::Transport(e)
        })?;

        if status == 403 {
            warn!(endpoint = %request.endpoint, "SOAP endpoint returned 403 Forbidden");
            warn!("Hint: verify the bearer token is present and not expired");
            warn!("Hint: confirm the SOAPAction header matches the operation the service expects");
            warn!("Hint: check that the endpoint path is reachable through any gateway ACLs");
            for (name, value) in &headers {
                warn!(header = %name, value = %value, "403 response header");
            }
        }

        debug!(status, body_bytes = body.len(), "SOAP response received");

        Ok(SoapResponse {
            status,
            headers,
            body,
        })
    }
}

/// Build the request header set.
///
/// Later entries override earlier ones: the fixed defaults, then
/// `Authorization: Bearer <token>` when a token is supplied, then the
/// caller's extra headers merged last.
pub fn build_headers(
    action: Option<&str>,
    token: Option<&str>,
    extra: &[(String, String)],
) -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_XML));
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_XML));
    headers.insert(
        HeaderName::from_static("soapaction"),
        HeaderValue::from_str(action.unwrap_or("")).unwrap_or_else(|_| {
            warn!(action = %action.unwrap_or(""), "SOAPAction is not a valid header value, sending empty");
            HeaderValue::from_static("")
        }),
    );
    headers.insert(USER_AGENT, HeaderValue::from_static(HARNESS_USER_AGENT));

    if let Some(token) = token {
        match HeaderValue::from_str(&format!("Bearer {token}")) {
            Ok(value) => {
                headers.insert(AUTHORIZATION, value);
            }
            Err(_) => {
                warn!("Bearer token is not a valid header value, omitting Authorization");
            }
        }
    }

    for (name, value) in extra {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => {
                warn!(header = %name, "Skipping invalid extra header");
            }
        }
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_header_set() {
        let headers = build_headers(None, None, &[]);

        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "text/xml;charset=UTF-8");
        assert_eq!(headers.get(ACCEPT).unwrap(), "text/xml");
        assert_eq!(headers.get("soapaction").unwrap(), "");
        assert_eq!(
            headers.get(USER_AGENT).unwrap().to_str().unwrap(),
            HARNESS_USER_AGENT
        );
    }

    #[test]
    fn test_bearer_token_header_exact_value() {
        let headers = build_headers(None, Some("tok123"), &[]);
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer tok123");
    }

    #[test]
    fn test_authorization_omitted_without_token() {
        let headers = build_headers(None, None, &[]);
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_soap_action_value() {
        let headers = build_headers(Some("urn:GetWeather"), None, &[]);
        assert_eq!(headers.get("soapaction").unwrap(), "urn:GetWeather");
    }

    #[test]
    fn test_extra_headers_merge_last_and_override() {
        let extra = vec![
            ("Accept".to_string(), "application/soap+xml".to_string()),
            ("X-Trace".to_string(), "abc".to_string()),
        ];
        let headers = build_headers(None, Some("tok123"), &extra);

        // Extra headers override defaults
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/soap+xml");
        assert_eq!(headers.get("x-trace").unwrap(), "abc");
        // Earlier entries are untouched
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer tok123");
    }

    #[test]
    fn test_extra_header_can_override_authorization() {
        let extra = vec![("Authorization".to_string(), "Basic abc".to_string())];
        let headers = build_headers(None, Some("tok123"), &extra);
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Basic abc");
    }

    #[test]
    fn test_invalid_extra_header_is_skipped() {
        let extra = vec![("bad header name".to_string(), "v".to_string())];
        let headers = build_headers(None, None, &extra);
        // Defaults survive; invalid extra is dropped
        assert_eq!(headers.len(), 4);
    }
}
