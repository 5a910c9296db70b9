use serde::Serialize;
use thiserror::Error;

use crate::contact::ContactFormPayload;
#[cfg(feature = "ssr")]
use crate::contact::EmailRelay;

pub static EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub static SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
pub static TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
pub static PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";
pub static PRIVATE_KEY_VAR: &str = "EMAILJS_PRIVATE_KEY";
pub static API_URL_VAR: &str = "EMAILJS_API_URL";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("Couldn't reach the email relay: {0}")]
    Transport(String),
    #[error("Email relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("Email relay is not configured")]
    NotConfigured,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    Missing(&'static str),
}

/// Credentials for the EmailJS account that delivers contact messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Only needed when the account requires signed (non-browser) API calls.
    pub private_key: Option<String>,
    pub endpoint: String,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key/value source. Blank values count as
    /// missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        Ok(Self {
            service_id: require(SERVICE_ID_VAR)?,
            template_id: require(TEMPLATE_ID_VAR)?,
            public_key: require(PUBLIC_KEY_VAR)?,
            private_key: get(PRIVATE_KEY_VAR),
            endpoint: get(API_URL_VAR).unwrap_or_else(|| EMAILJS_SEND_URL.to_string()),
        })
    }

    pub fn request_body<'a>(&'a self, payload: &'a ContactFormPayload) -> EmailJsRequest<'a> {
        EmailJsRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            access_token: self.private_key.as_deref(),
            template_params: payload,
        }
    }
}

/// JSON body of the EmailJS `email/send` endpoint.
#[derive(Debug, Serialize)]
pub struct EmailJsRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<&'a str>,
    pub template_params: &'a ContactFormPayload,
}

#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    http: reqwest::Client,
    config: RelayConfig,
}

#[cfg(feature = "ssr")]
impl EmailJsClient {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[cfg(feature = "ssr")]
impl EmailRelay for EmailJsClient {
    async fn send(&self, payload: &ContactFormPayload) -> Result<(), RelayError> {
        let res = self
            .http
            .post(&self.config.endpoint)
            .json(&self.config.request_body(payload))
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let status = res.status();
        if status.is_success() {
            tracing::info!(service = %self.config.service_id, "contact message relayed");
            return Ok(());
        }
        let body = res.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), %body, "email relay rejected contact message");
        Err(RelayError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full_env() -> HashMap<String, String> {
        env(&[
            (SERVICE_ID_VAR, "service_abc"),
            (TEMPLATE_ID_VAR, "template_xyz"),
            (PUBLIC_KEY_VAR, "pk_123"),
        ])
    }

    #[test]
    fn test_config_from_lookup() {
        let vars = full_env();
        let config = RelayConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.service_id, "service_abc");
        assert_eq!(config.template_id, "template_xyz");
        assert_eq!(config.public_key, "pk_123");
        assert_eq!(config.private_key, None);
        assert_eq!(config.endpoint, EMAILJS_SEND_URL);
    }

    #[test]
    fn test_config_reports_missing_var() {
        let mut vars = full_env();
        vars.remove(TEMPLATE_ID_VAR);
        let err = RelayConfig::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert_eq!(err, ConfigError::Missing(TEMPLATE_ID_VAR));
        assert_eq!(
            err.to_string(),
            "Missing environment variable EMAILJS_TEMPLATE_ID"
        );
    }

    #[test]
    fn test_config_blank_counts_as_missing() {
        let mut vars = full_env();
        vars.insert(SERVICE_ID_VAR.to_string(), "  ".to_string());
        let err = RelayConfig::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert_eq!(err, ConfigError::Missing(SERVICE_ID_VAR));
    }

    #[test]
    fn test_config_optional_overrides() {
        let mut vars = full_env();
        vars.insert(PRIVATE_KEY_VAR.to_string(), "secret".to_string());
        vars.insert(API_URL_VAR.to_string(), "http://localhost:9999/send".to_string());
        let config = RelayConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.private_key.as_deref(), Some("secret"));
        assert_eq!(config.endpoint, "http://localhost:9999/send");
    }

    #[test]
    fn test_request_body_shape() {
        let vars = full_env();
        let config = RelayConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        let payload = ContactFormPayload::new("Ada", "ada@example.com", "Hi");

        let json = serde_json::to_value(config.request_body(&payload)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "service_id": "service_abc",
                "template_id": "template_xyz",
                "user_id": "pk_123",
                "template_params": {
                    "from_name": "Ada",
                    "from_email": "ada@example.com",
                    "message": "Hi",
                },
            })
        );
    }

    #[test]
    fn test_request_body_includes_access_token() {
        let mut vars = full_env();
        vars.insert(PRIVATE_KEY_VAR.to_string(), "secret".to_string());
        let config = RelayConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        let payload = ContactFormPayload::default();

        let json = serde_json::to_value(config.request_body(&payload)).unwrap();
        assert_eq!(json["accessToken"], "secret");
    }
}
