//! Hosted mail relay
//!
//! Contact messages are not delivered by this program; they are posted to a
//! hosted relay (EmailJS) which forwards them to the portfolio owner.

use crate::error::RelayError;
use crate::model::ContactMessage;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Relay credentials from the portfolio file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RelayConfig {
    #[serde(default)]
    pub public_key: String,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    EMAILJS_ENDPOINT.to_string()
}

impl RelayConfig {
    /// True once all ids are filled in with something other than placeholders
    pub fn is_configured(&self) -> bool {
        [&self.public_key, &self.service_id, &self.template_id]
            .iter()
            .all(|v| !v.trim().is_empty() && !v.starts_with("YOUR_"))
    }
}

/// Something that can deliver a contact message
pub trait MailRelay: Send + Sync {
    fn send(&self, message: &ContactMessage) -> Result<(), RelayError>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactMessage,
}

/// EmailJS REST relay
pub struct EmailJsRelay {
    config: RelayConfig,
    client: reqwest::blocking::Client,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self { config, client })
    }
}

impl MailRelay for EmailJsRelay {
    fn send(&self, message: &ContactMessage) -> Result<(), RelayError> {
        if !self.config.is_configured() {
            return Err(RelayError::NotConfigured);
        }

        let request = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: message,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&request)
            .send()?;

        let status = response.status();
        if status.is_success() {
            info!(status = status.as_u16(), "contact message accepted by relay");
            Ok(())
        } else {
            let body = response.text().unwrap_or_default();
            warn!(status = status.as_u16(), %body, "relay rejected contact message");
            Err(RelayError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}

/// Relay used when the portfolio file has no relay section
pub struct UnconfiguredRelay;

impl MailRelay for UnconfiguredRelay {
    fn send(&self, _message: &ContactMessage) -> Result<(), RelayError> {
        Err(RelayError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            from_name: "Ada".to_string(),
            from_email: "ada@example.com".to_string(),
            subject: None,
            message: "Hi".to_string(),
            to_email: "owner@example.com".to_string(),
        }
    }

    #[test]
    fn test_placeholder_config_is_not_configured() {
        let config = RelayConfig {
            public_key: "YOUR_PUBLIC_KEY".to_string(),
            service_id: "service_x".to_string(),
            template_id: "template_y".to_string(),
            endpoint: default_endpoint(),
        };
        assert!(!config.is_configured());
        assert!(!RelayConfig::default().is_configured());
    }

    #[test]
    fn test_unconfigured_emailjs_relay_fails_without_network() {
        let relay = EmailJsRelay::new(RelayConfig::default()).unwrap();
        assert!(matches!(relay.send(&message()), Err(RelayError::NotConfigured)));
    }

    #[test]
    fn test_request_body_shape() {
        let msg = message();
        let request = SendRequest {
            service_id: "service_x",
            template_id: "template_y",
            user_id: "key",
            template_params: &msg,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["user_id"], "key");
        assert_eq!(json["template_params"]["from_name"], "Ada");
        assert_eq!(json["template_params"]["to_email"], "owner@example.com");
        assert!(json["template_params"].get("subject").is_none());
    }

    #[test]
    fn test_endpoint_defaults_when_missing() {
        let config: RelayConfig =
            serde_yaml::from_str("public_key: k\nservice_id: s\ntemplate_id: t\n").unwrap();
        assert_eq!(config.endpoint, EMAILJS_ENDPOINT);
        assert!(config.is_configured());
    }
}
