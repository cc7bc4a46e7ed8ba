//! SMTP transport over implicit TLS, built on lettre.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, warn};

use super::{MailError, Mailer, OutboundEmail};
use crate::config::Config;

/// SMTP-based mailer. Cheap to clone; the transport is shared.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: Arc<AsyncSmtpTransport<Tokio1Executor>>,
}

impl SmtpMailer {
    /// Build the transport from configuration. No connection is opened here.
    pub fn from_config(config: &Config) -> Result<Self, MailError> {
        if config.smtp_accept_invalid_hostnames {
            warn!(
                host = %config.smtp_host,
                "TLS hostname verification is disabled for the SMTP relay"
            );
        }

        let tls = TlsParameters::builder(config.smtp_host.clone())
            .dangerous_accept_invalid_hostnames(config.smtp_accept_invalid_hostnames)
            .build()
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| MailError::Smtp(e.to_string()))?
            .port(config.smtp_port)
            .tls(Tls::Wrapper(tls));

        if let Some(secs) = config.smtp_timeout_secs {
            builder = builder.timeout(Some(Duration::from_secs(secs)));
        }

        match &config.smtp_password {
            Some(password) => {
                builder =
                    builder.credentials(Credentials::new(config.smtp_user.clone(), password.clone()));
            }
            None => warn!("No SMTP password configured; sends will be rejected by the relay"),
        }

        Ok(Self {
            transport: Arc::new(builder.build()),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let message = build_message(email)?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        debug!(to = %email.to, code = %response.code(), "SMTP relay accepted message");
        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address
        .parse()
        .map_err(|_| MailError::InvalidAddress(address.to_string()))
}

/// Convert an [`OutboundEmail`] into a lettre message.
fn build_message(email: &OutboundEmail) -> Result<Message, MailError> {
    let mut builder = Message::builder()
        .from(parse_mailbox(&email.from)?)
        .to(parse_mailbox(&email.to)?)
        .subject(email.subject.clone());

    if let Some(reply_to) = &email.reply_to {
        builder = builder.reply_to(parse_mailbox(reply_to)?);
    }

    let message = match &email.text_body {
        Some(text) => builder.multipart(MultiPart::alternative_plain_html(
            text.clone(),
            email.html_body.clone(),
        )),
        None => builder.singlepart(SinglePart::html(email.html_body.clone())),
    };

    message.map_err(|e| MailError::Build(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_email() -> OutboundEmail {
        OutboundEmail {
            from: "\"Notstromaggregat Baltic iHub\" <notstromaggregat@baltic-ihub.com>".to_string(),
            to: "ceo@baltic-ihub.com".to_string(),
            reply_to: Some("jane@example.com".to_string()),
            subject: "Neue Anfrage".to_string(),
            html_body: "<p>Hallo</p>".to_string(),
            text_body: Some("Hallo".to_string()),
        }
    }

    fn test_config() -> Config {
        Config {
            smtp_host: "smtp.example.com".to_string(),
            smtp_port: 465,
            smtp_user: "sender@example.com".to_string(),
            smtp_password: Some("secret".to_string()),
            smtp_from_name: "Sender".to_string(),
            smtp_accept_invalid_hostnames: false,
            smtp_timeout_secs: Some(5),
            admin_email: "admin@example.com".to_string(),
            development: false,
            port: 8080,
        }
    }

    // ==================== build_message Tests ====================

    #[test]
    fn test_build_message_headers() {
        let message = build_message(&sample_email()).expect("should build");
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("To: ceo@baltic-ihub.com"));
        assert!(raw.contains("Reply-To: jane@example.com"));
        assert!(raw.contains("notstromaggregat@baltic-ihub.com"));
        assert!(raw.contains("Subject: Neue Anfrage"));
    }

    #[test]
    fn test_build_message_multipart_when_text_present() {
        let message = build_message(&sample_email()).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("multipart/alternative"));
        assert!(raw.contains("text/plain"));
        assert!(raw.contains("text/html"));
    }

    #[test]
    fn test_build_message_html_only() {
        let email = OutboundEmail {
            reply_to: None,
            text_body: None,
            ..sample_email()
        };
        let raw = String::from_utf8(build_message(&email).unwrap().formatted()).unwrap();

        assert!(raw.contains("text/html"));
        assert!(!raw.contains("multipart/alternative"));
        assert!(!raw.contains("Reply-To"));
    }

    #[test]
    fn test_build_message_invalid_recipient() {
        let email = OutboundEmail {
            to: "not an address".to_string(),
            ..sample_email()
        };

        match build_message(&email) {
            Err(MailError::InvalidAddress(addr)) => assert_eq!(addr, "not an address"),
            other => panic!("expected InvalidAddress, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_build_message_invalid_reply_to() {
        let email = OutboundEmail {
            reply_to: Some("@@".to_string()),
            ..sample_email()
        };
        assert!(matches!(build_message(&email), Err(MailError::InvalidAddress(_))));
    }

    // ==================== from_config Tests ====================

    #[tokio::test]
    async fn test_from_config_builds_without_connecting() {
        assert!(SmtpMailer::from_config(&test_config()).is_ok());
    }

    #[tokio::test]
    async fn test_from_config_without_password() {
        let config = Config {
            smtp_password: None,
            smtp_accept_invalid_hostnames: true,
            smtp_timeout_secs: None,
            ..test_config()
        };
        assert!(SmtpMailer::from_config(&config).is_ok());
    }
}
