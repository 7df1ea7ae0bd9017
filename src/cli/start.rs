use crate::{
    cli::{actions::Action, commands, dispatch::handler, globals::GlobalArgs},
    config::ApiConfig,
};
use anyhow::Result;
use secrecy::SecretString;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Start the CLI
/// # Errors
/// Returns an error if the tracing subscriber cannot be installed or the
/// arguments do not resolve to an action.
pub fn start() -> Result<(Action, GlobalArgs)> {
    let matches = commands::new().get_matches();

    let verbosity_level = match matches.get_one::<u8>("verbosity").map_or(0, |&v| v) {
        0 => tracing::Level::ERROR,
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        3 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(false);

    // RUST_LOG=
    let env_filter = EnvFilter::builder()
        .with_default_directive(verbosity_level.into())
        .from_env_lossy();

    let subscriber = Registry::default().with(fmt_layer).with(env_filter);

    tracing::subscriber::set_global_default(subscriber)?;

    let config = ApiConfig::new(
        matches
            .get_one::<String>("api-url")
            .map_or_else(|| crate::config::DEFAULT_API_BASE_URL.to_string(), String::to_string),
        matches
            .get_one::<String>("csrf-url")
            .map_or_else(|| crate::config::DEFAULT_CSRF_URL.to_string(), String::to_string),
    );

    let mut globals = GlobalArgs::new(config);
    if let Some(token) = matches.get_one::<String>("token") {
        globals.set_token(SecretString::from(token.to_string()));
    }

    let action = handler(&matches)?;

    Ok((action, globals))
}
