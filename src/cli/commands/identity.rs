use clap::{Arg, ArgMatches, Command};

pub const ARG_IDENTITY_URL: &str = "identity-url";
pub const ARG_IDENTITY_API_KEY: &str = "identity-api-key";

#[derive(Debug, Clone)]
pub struct Options {
    pub url: String,
    pub api_key: String,
}

impl Options {
    /// Parse identity platform arguments from matches.
    ///
    /// # Errors
    /// Returns an error if required arguments are missing.
    pub fn parse(matches: &ArgMatches) -> anyhow::Result<Self> {
        let url = matches.get_one::<String>(ARG_IDENTITY_URL).cloned();
        let url = match url {
            Some(value) if !value.trim().is_empty() => value,
            _ => anyhow::bail!("missing required argument: --{ARG_IDENTITY_URL}"),
        };

        let api_key = matches.get_one::<String>(ARG_IDENTITY_API_KEY).cloned();
        let api_key = match api_key {
            Some(value) if !value.trim().is_empty() => value,
            _ => anyhow::bail!("missing required argument: --{ARG_IDENTITY_API_KEY}"),
        };

        Ok(Self { url, api_key })
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_IDENTITY_URL)
                .long(ARG_IDENTITY_URL)
                .help("Identity platform base URL used to verify tokens and sessions")
                .long_help(
                    "Identity platform base URL used to verify ID tokens and mint session cookies.\n\nAll credential checks are delegated to this service. Failures to reach it are\ntreated as unauthenticated, never as an internal error.",
                )
                .env("VITRINO_IDENTITY_URL"),
        )
        .arg(
            Arg::new(ARG_IDENTITY_API_KEY)
                .long(ARG_IDENTITY_API_KEY)
                .help("API key sent to the identity platform")
                .env("VITRINO_IDENTITY_API_KEY"),
        )
}
