use crate::{
    cli::actions::Action,
    types::{Credentials, Registration},
};
use anyhow::{anyhow, Context, Result};

fn required(matches: &clap::ArgMatches, key: &str) -> Result<String> {
    matches
        .get_one::<String>(key)
        .map(String::to_string)
        .with_context(|| format!("missing required argument: --{key}"))
}

pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some(("login", sub)) => Ok(Action::Login {
            credentials: Credentials {
                email: required(sub, "email")?,
                password: required(sub, "password")?,
            },
        }),

        Some(("register", sub)) => Ok(Action::Register {
            registration: Registration {
                name: required(sub, "name")?,
                email: required(sub, "email")?,
                phone: required(sub, "phone")?,
                city: required(sub, "city")?,
                password: required(sub, "password")?,
                password_confirmation: required(sub, "password-confirmation")?,
                terms: sub.get_flag("accept-terms"),
            },
        }),

        Some(("logout", _)) => Ok(Action::Logout),

        Some(("whoami", _)) => Ok(Action::Whoami),

        _ => Err(anyhow!("no subcommand provided")),
    }
}
