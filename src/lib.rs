//! Contact form relay: validates a web form submission and sends a
//! notification to the site owner plus a localized confirmation to the
//! submitter over SMTP.

pub mod config;
pub mod contact;
pub mod error;
pub mod i18n;
pub mod mail;
pub mod server;
pub mod templates;
