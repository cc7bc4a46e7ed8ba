//! Outbound email: the value handed to a transport and the transport seam.
//!
//! [`SmtpMailer`] is the production transport. Anything implementing
//! [`Mailer`] can stand in for it (tests use a recording double).

mod smtp;

pub use smtp::SmtpMailer;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    #[error("failed to build message: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(String),
}

/// A fully rendered email ready to send. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    /// Sender mailbox, e.g. `"Name" <addr@example.com>`
    pub from: String,
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html_body: String,
    /// Plain-text alternative; sent as multipart/alternative when present
    pub text_body: Option<String>,
}

/// Async email sending trait.
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;
}
