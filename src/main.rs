//! Cosmic Folio - A portfolio and blog reader for the COSMIC desktop
//!
//! Entry point for the application. Handles CLI argument parsing,
//! logging initialization, and application bootstrap.

mod app;
mod config;
mod error;
mod events;
mod message;
mod routing;
mod state;
mod ui;

// Accessible disclosure menu (language switcher core)
mod disclosure;

// Internationalization
mod i18n;

use app::{CosmicFolio, Flags};
use config::{ThemePreference, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

/// Application name for logging
const APP_NAME: &str = "cosmic-folio";

fn main() -> cosmic::iced::Result {
    // Initialize logging
    init_logging();

    log::info!("Starting Cosmic Folio");

    // Parse command line arguments
    let flags = parse_args();

    cosmic::app::run::<CosmicFolio>(
        cosmic::app::Settings::default().size_limits(
            cosmic::iced::Limits::NONE
                .min_width(MIN_WINDOW_WIDTH)
                .min_height(MIN_WINDOW_HEIGHT),
        ),
        flags,
    )
}

/// Initialize the logging system
fn init_logging() {
    // Set default log level if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info,cosmic_folio=debug");
    }

    env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .init();
}

/// Parse command line arguments
fn parse_args() -> Flags {
    let args: Vec<String> = std::env::args().collect();
    let mut flags = Flags::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            "-l" | "--locale" => {
                flags.locale = Some(required_value(&args, i, "--locale").to_string());
                i += 1;
            }
            "--locales" => {
                let list = required_value(&args, i, "--locales");
                flags.locales = Some(
                    list.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect(),
                );
                i += 1;
            }
            "-p" | "--path" => {
                flags.path = Some(required_value(&args, i, "--path").to_string());
                i += 1;
            }
            "--dark" => flags.theme = Some(ThemePreference::Dark),
            "--light" => flags.theme = Some(ThemePreference::Light),
            arg => {
                eprintln!("Unknown option: {}", arg);
                eprintln!("Use --help for usage information");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    flags
}

/// Value following option `i`, or exit with an error
fn required_value<'a>(args: &'a [String], i: usize, option: &str) -> &'a str {
    match args.get(i + 1) {
        Some(value) => value,
        None => {
            eprintln!("Error: {} requires an argument", option);
            std::process::exit(1);
        }
    }
}

/// Print help message
fn print_help() {
    println!(
        r#"Cosmic Folio - A portfolio and blog reader

USAGE:
    cosmic-folio [OPTIONS]

OPTIONS:
    -h, --help              Show this help message
    -v, --version           Show version information
    -l, --locale <TAG>      Start in the given locale (e.g. fr, en-US)
        --locales <TAGS>    Comma-separated site locales, in menu order
    -p, --path <PATH>       Start on the given page (e.g. /blog)
        --dark              Force the dark theme
        --light             Force the light theme

EXAMPLES:
    cosmic-folio                                Open the home page
    cosmic-folio --locale de --path /blog       Open the blog in German
    cosmic-folio --locales en-US,fr,de,lt       Offer four languages

LANGUAGE MENU:
    Space / Enter       Open or close the menu, pick the focused language
    Up / Down           Move between languages (wraps around)
    Tab / Shift+Tab     Cycle through the open menu
    Escape              Close the menu
"#
    );
}

/// Print version information
fn print_version() {
    println!("{} {}", APP_NAME, env!("CARGO_PKG_VERSION"));
}
