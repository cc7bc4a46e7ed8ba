use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // SMTP relay
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_user: String,
    pub smtp_password: Option<String>,
    pub smtp_from_name: String,
    pub smtp_accept_invalid_hostnames: bool,
    pub smtp_timeout_secs: Option<u64>,

    // Recipients
    pub admin_email: String,

    // Runtime
    pub development: bool,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // SMTP - implicit TLS on 465 with the sender mailbox as login
            smtp_host: std::env::var("SMTP_HOST")
                .unwrap_or_else(|_| "w014c572.kasserver.com".to_string()),
            smtp_port: parse_var("SMTP_PORT")?.unwrap_or(465),
            smtp_user: std::env::var("SMTP_USER")
                .unwrap_or_else(|_| "notstromaggregat@baltic-ihub.com".to_string()),
            smtp_password: std::env::var("ALL_INKL_SMTP_PASSWORD")
                .or_else(|_| std::env::var("ALL_INKL_KAS_PASSWORD"))
                .ok()
                .filter(|p| !p.is_empty()),
            smtp_from_name: std::env::var("SMTP_FROM_NAME")
                .unwrap_or_else(|_| "Notstromaggregat Baltic iHub".to_string()),
            smtp_accept_invalid_hostnames: parse_var("SMTP_ACCEPT_INVALID_HOSTNAMES")?
                .unwrap_or(false),
            smtp_timeout_secs: parse_var("SMTP_TIMEOUT_SECS")?,

            // Recipients
            admin_email: std::env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "ceo@baltic-ihub.com".to_string()),

            // Runtime
            development: std::env::var("APP_ENV")
                .map(|v| v.eq_ignore_ascii_case("development"))
                .unwrap_or(false),
            port: parse_var("PORT")?.unwrap_or(8080),
        })
    }

    /// Sender mailbox in `"Name" <address>` form.
    pub fn sender_mailbox(&self) -> String {
        format!("\"{}\" <{}>", self.smtp_from_name, self.smtp_user)
    }
}

/// Read and parse an optional variable; set-but-malformed is an error.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{} is not a valid value: {:?}", name, raw)),
        Err(_) => Ok(None),
    }
}
