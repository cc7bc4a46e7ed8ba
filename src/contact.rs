//! Contact form submission: validation, rendering and the two-step dispatch.
//!
//! The owner notification is sent first. The confirmation to the submitter is
//! only attempted once the notification went out; a failure of either send
//! aborts the request with no attempt to undo what was already delivered.

use std::sync::OnceLock;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Local;
use lettre::message::Mailbox;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::config::Config;
use crate::error::{ApiError, ContactError};
use crate::i18n::LanguageSelection;
use crate::mail::{Mailer, OutboundEmail};
use crate::server::AppState;
use crate::templates;

/// Raw request body. Every field is optional here so that a missing field
/// surfaces as a validation error rather than a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
    pub language: Option<String>,
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    /// `None` when absent or empty
    pub company: Option<String>,
    pub message: String,
}

/// Success envelope.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    pub redirect: String,
}

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

/// Loose syntactic check: something, `@`, something, `.`, something.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Whether the SMTP layer can turn the address into a mailbox. Some
/// addresses pass [`is_valid_email`] but not the stricter RFC 5322 parser
/// (e.g. `a,b@c.de`).
fn is_deliverable_address(email: &str) -> bool {
    email.parse::<Mailbox>().is_ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl TryFrom<SubmissionInput> for Submission {
    type Error = ContactError;

    fn try_from(input: SubmissionInput) -> Result<Self, Self::Error> {
        let (Some(name), Some(email), Some(message)) = (
            non_empty(input.name),
            non_empty(input.email),
            non_empty(input.message),
        ) else {
            return Err(ContactError::MissingFields);
        };

        if !is_valid_email(&email) || !is_deliverable_address(&email) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(Submission {
            name,
            email,
            company: non_empty(input.company),
            message,
        })
    }
}

/// Path of the thank-you page for the requested language code.
pub fn redirect_path(lang: &LanguageSelection) -> String {
    format!("/danke.html?lang={}", lang.code())
}

/// Owner notification sent on behalf of the submitter.
pub fn admin_email(
    config: &Config,
    submission: &Submission,
    lang: &LanguageSelection,
    timestamp: &str,
) -> OutboundEmail {
    OutboundEmail {
        from: config.sender_mailbox(),
        to: config.admin_email.clone(),
        reply_to: Some(submission.email.clone()),
        subject: lang.strings().subject.to_string(),
        html_body: templates::render_admin_html(submission, lang, timestamp),
        text_body: Some(templates::render_admin_text(submission, lang, timestamp)),
    }
}

/// Localized confirmation for the submitter.
pub fn confirmation_email(
    config: &Config,
    submission: &Submission,
    lang: &LanguageSelection,
) -> OutboundEmail {
    OutboundEmail {
        from: config.sender_mailbox(),
        to: submission.email.clone(),
        reply_to: None,
        subject: lang.strings().confirmation_subject.to_string(),
        html_body: templates::render_confirmation_html(submission, lang),
        text_body: None,
    }
}

/// Validate, render and send both emails.
pub async fn submit(
    config: &Config,
    mailer: &dyn Mailer,
    input: SubmissionInput,
) -> Result<ContactResponse, ContactError> {
    let lang = LanguageSelection::from_input(input.language.as_deref());
    let submission = Submission::try_from(input)?;

    if lang.is_fallback() {
        info!(requested = lang.code(), "No language pack for code, using default");
    }

    let timestamp = templates::format_timestamp(&Local::now());

    mailer
        .send(&admin_email(config, &submission, &lang, &timestamp))
        .await?;
    info!(language = lang.code(), "Admin notification sent");

    mailer
        .send(&confirmation_email(config, &submission, &lang))
        .await?;
    info!(language = lang.code(), "Confirmation email sent");

    Ok(ContactResponse {
        success: true,
        message: lang.strings().received.to_string(),
        redirect: redirect_path(&lang),
    })
}

// ==================== HTTP Handlers ====================

/// POST /api/contact
#[instrument(skip_all)]
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<SubmissionInput>, JsonRejection>,
) -> Result<Json<ContactResponse>, ApiError> {
    let development = state.config.development;

    let Json(input) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "Unreadable contact request body");
        ApiError::new(ContactError::MissingFields, development)
    })?;

    submit(&state.config, state.mailer.as_ref(), input)
        .await
        .map(Json)
        .map_err(|e| ApiError::new(e, development))
}

/// OPTIONS /api/contact (CORS headers are added by the router)
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Any other method on /api/contact
pub async fn method_not_allowed() -> ApiError {
    ApiError::new(ContactError::MethodNotAllowed, false)
}
