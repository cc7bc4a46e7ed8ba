//! HTML and plain-text bodies for the two contact emails.
//!
//! User-supplied fields are HTML-escaped before they reach an HTML body.
//! Language strings are trusted and inserted verbatim (some contain `<br>`).
//! Plain-text bodies carry the raw values.

use chrono::{DateTime, TimeZone};

use crate::contact::Submission;
use crate::i18n::LanguageSelection;

const COMPANY_FOOTER: &str = "Baltic iHub GmbH | Ein Unternehmen der THOR Holding";

const ADMIN_STYLE: &str = r#"
    body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }
    .container { max-width: 600px; margin: 0 auto; padding: 20px; }
    .header { background: #0039AD; color: white; padding: 20px; text-align: center; }
    .content { background: #f8fafc; padding: 20px; }
    .field { margin: 15px 0; }
    .label { font-weight: bold; color: #0039AD; }
    .value { margin-top: 5px; }
"#;

const CONFIRMATION_STYLE: &str = r#"
    body { font-family: 'Inter', Arial, sans-serif; line-height: 1.6; color: #111827; margin: 0; padding: 0; }
    .container { max-width: 600px; margin: 0 auto; background: #FFFFFF; }
    .header { background: linear-gradient(135deg, #0039AD 0%, #D61810 100%); color: white; padding: 40px 20px; text-align: center; }
    .header h1 { margin: 0; font-size: 28px; }
    .content { padding: 40px 20px; background: #FAF9F6; }
    .message-box { background: white; border-left: 4px solid #0039AD; padding: 20px; margin: 20px 0; }
    .details { background: #f8fafc; padding: 20px; border-radius: 8px; margin: 20px 0; }
    .detail-item { margin: 10px 0; }
    .label { font-weight: 600; color: #0039AD; }
    .footer { background: #1E3A5F; color: white; padding: 30px 20px; text-align: center; }
    .footer a { color: #D61810; text-decoration: none; }
"#;

/// Escape the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Timestamp in German locale layout without zero-padded day and month,
/// e.g. `4.10.2026, 09:05:03`.
pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.format("%-d.%-m.%Y, %H:%M:%S").to_string()
}

/// Notification for the site owner. Labels are always German.
pub fn render_admin_html(
    submission: &Submission,
    lang: &LanguageSelection,
    timestamp: &str,
) -> String {
    let company = match submission.company.as_deref() {
        Some(company) => format!(
            r#"
      <div class="field">
        <div class="label">Firma:</div>
        <div class="value">{}</div>
      </div>"#,
            escape_html(company)
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <style>{style}</style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h2>{subject}</h2>
    </div>
    <div class="content">
      <div class="field">
        <div class="label">Name:</div>
        <div class="value">{name}</div>
      </div>
      <div class="field">
        <div class="label">E-Mail:</div>
        <div class="value">{email}</div>
      </div>{company}
      <div class="field">
        <div class="label">Nachricht:</div>
        <div class="value" style="white-space: pre-wrap;">{message}</div>
      </div>
      <div class="field">
        <div class="label">Sprache:</div>
        <div class="value">{language}</div>
      </div>
      <div class="field">
        <div class="label">Zeitstempel:</div>
        <div class="value">{timestamp}</div>
      </div>
    </div>
  </div>
</body>
</html>
"#,
        style = ADMIN_STYLE,
        subject = lang.strings().subject,
        name = escape_html(&submission.name),
        email = escape_html(&submission.email),
        company = company,
        message = escape_html(&submission.message),
        language = escape_html(&lang.code().to_uppercase()),
        timestamp = escape_html(timestamp),
    )
}

/// Plain-text alternative of the owner notification.
pub fn render_admin_text(
    submission: &Submission,
    lang: &LanguageSelection,
    timestamp: &str,
) -> String {
    let mut lines = vec![
        format!("Neue Anfrage: {}", lang.strings().subject),
        String::new(),
        format!("Name: {}", submission.name),
        format!("E-Mail: {}", submission.email),
    ];
    if let Some(company) = &submission.company {
        lines.push(format!("Firma: {}", company));
    }
    lines.extend([
        String::new(),
        "Nachricht:".to_string(),
        submission.message.clone(),
        String::new(),
        format!("Sprache: {}", lang.code().to_uppercase()),
        format!("Zeitstempel: {}", timestamp),
    ]);

    lines.join("\n").trim().to_string()
}

/// Localized confirmation for the submitter.
pub fn render_confirmation_html(submission: &Submission, lang: &LanguageSelection) -> String {
    let t = lang.strings();

    let company = match submission.company.as_deref() {
        Some(company) => format!(
            r#"
        <div class="detail-item">
          <span class="label">Firma:</span> {}
        </div>"#,
            escape_html(company)
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <style>{style}</style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h1>{thank_you}!</h1>
    </div>
    <div class="content">
      <p><strong>{greeting} {name},</strong></p>
      <p>{intro}</p>

      <div class="message-box">
        <p style="margin: 0;">{received_text}</p>
      </div>

      <div class="details">
        <h3 style="margin-top: 0; color: #0039AD;">{details}</h3>
        <div class="detail-item">
          <span class="label">{name_label}:</span> {name}
        </div>
        <div class="detail-item">
          <span class="label">E-Mail:</span> {email}
        </div>{company}
        <div class="detail-item">
          <span class="label">{message_label}:</span>
          <div style="margin-top: 10px; white-space: pre-wrap; color: #475569;">{message}</div>
        </div>
      </div>

      <p style="margin-top: 30px;">{contact}</p>
    </div>
    <div class="footer">
      <p style="margin: 0;">{footer}</p>
      <p style="margin: 10px 0 0 0; font-size: 14px; color: #94a3b8;">
        {company_footer}
      </p>
    </div>
  </div>
</body>
</html>
"#,
        style = CONFIRMATION_STYLE,
        thank_you = t.thank_you,
        greeting = t.greeting,
        name = escape_html(&submission.name),
        intro = t.intro,
        received_text = t.received_text,
        details = t.details,
        name_label = t.name_label,
        email = escape_html(&submission.email),
        company = company,
        message_label = t.message_label,
        message = escape_html(&submission.message),
        contact = t.contact,
        footer = t.footer,
        company_footer = COMPANY_FOOTER,
    )
}
