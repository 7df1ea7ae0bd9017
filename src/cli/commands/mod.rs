use crate::config::{DEFAULT_API_BASE_URL, DEFAULT_CSRF_URL};
use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ArgAction, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("madrasati")
        .about("Madrasati school directory client")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .help("API base URL, example: http://127.0.0.1:8000/api")
                .default_value(DEFAULT_API_BASE_URL)
                .env("MADRASATI_API_BASE_URL")
                .global(true),
        )
        .arg(
            Arg::new("csrf-url")
                .long("csrf-url")
                .help("CSRF cookie priming URL, lives outside the API prefix")
                .default_value(DEFAULT_CSRF_URL)
                .env("MADRASATI_CSRF_URL")
                .global(true),
        )
        .arg(
            Arg::new("token")
                .short('t')
                .long("token")
                .help("Bearer token from a previous login")
                .env("MADRASATI_TOKEN")
                .global(true),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("MADRASATI_LOG_LEVEL")
                .global(true)
                .action(ArgAction::Count)
                .value_parser(validator_log_level()),
        )
        .subcommand(
            Command::new("login")
                .about("Authenticate with email and password")
                .arg(
                    Arg::new("email")
                        .short('e')
                        .long("email")
                        .help("Account email address")
                        .required(true),
                )
                .arg(
                    Arg::new("password")
                        .short('p')
                        .long("password")
                        .help("Account password")
                        .env("MADRASATI_PASSWORD")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("register")
                .about("Create an account")
                .arg(
                    Arg::new("name")
                        .long("name")
                        .help("Full name")
                        .required(true),
                )
                .arg(
                    Arg::new("email")
                        .short('e')
                        .long("email")
                        .help("Email address")
                        .required(true),
                )
                .arg(
                    Arg::new("phone")
                        .long("phone")
                        .help("Phone number")
                        .required(true),
                )
                .arg(
                    Arg::new("city")
                        .long("city")
                        .help("City of residence")
                        .required(true),
                )
                .arg(
                    Arg::new("password")
                        .short('p')
                        .long("password")
                        .help("Account password")
                        .env("MADRASATI_PASSWORD")
                        .required(true),
                )
                .arg(
                    Arg::new("password-confirmation")
                        .long("password-confirmation")
                        .help("Password confirmation, must match --password")
                        .required(true),
                )
                .arg(
                    Arg::new("accept-terms")
                        .long("accept-terms")
                        .help("Accept the Terms & Conditions")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("logout").about("End the current session"))
        .subcommand(Command::new("whoami").about("Show the authenticated user"))
}
