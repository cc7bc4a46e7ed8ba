//! Preview binary - renders both contact emails without sending anything
//!
//! Usage:
//!   cargo run --bin preview                      # German, no company
//!   cargo run --bin preview -- --lang pl         # Polish pack
//!   cargo run --bin preview -- --company "ACME"  # Include the company block
//!   cargo run --bin preview -- --list            # List the language packs
//!
//! The admin HTML, admin text and confirmation HTML bodies are printed to
//! stdout, each under its own header. Logs go to stderr.

use anyhow::Result;
use chrono::Local;
use tracing::{info, warn};

use contact_relay::contact::{redirect_path, Submission};
use contact_relay::i18n::{normalize_code, LanguageRegistry, LanguageSelection};
use contact_relay::templates;

/// Value following `flag` on the command line, if any.
fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn print_section(title: &str, body: &str) {
    println!("==================== {} ====================", title);
    println!("{}", body);
    println!();
}

fn list_languages() {
    let registry = LanguageRegistry::get();
    for config in registry.list_all() {
        let marker = if config.is_default { " (default)" } else { "" };
        println!(
            "{}  {:<8} {}{}",
            config.code, config.name, config.native_name, marker
        );
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("preview=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|arg| arg == "--list") {
        list_languages();
        return Ok(());
    }

    let requested = arg_value(&args, "--lang");
    let code = normalize_code(requested.as_deref());
    if !LanguageRegistry::get().is_supported(&code) {
        warn!("No pack for '{}', rendering with the default pack", code);
    }

    let lang = LanguageSelection::from_input(requested.as_deref());
    let submission = Submission {
        name: arg_value(&args, "--name").unwrap_or_else(|| "Max Mustermann".to_string()),
        email: arg_value(&args, "--email").unwrap_or_else(|| "max@example.com".to_string()),
        company: arg_value(&args, "--company").filter(|c| !c.is_empty()),
        message: "Bitte senden Sie mir ein Angebot.\nMit freundlichen Grüßen".to_string(),
    };

    info!(
        "Rendering for code '{}' (pack: {})",
        lang.code(),
        lang.config().name
    );

    let timestamp = templates::format_timestamp(&Local::now());

    println!("Subject (admin):        {}", lang.strings().subject);
    println!("Subject (confirmation): {}", lang.strings().confirmation_subject);
    println!("Redirect:               {}", redirect_path(&lang));
    println!();

    print_section(
        "admin.html",
        &templates::render_admin_html(&submission, &lang, &timestamp),
    );
    print_section(
        "admin.txt",
        &templates::render_admin_text(&submission, &lang, &timestamp),
    );
    print_section(
        "confirmation.html",
        &templates::render_confirmation_html(&submission, &lang),
    );

    Ok(())
}
