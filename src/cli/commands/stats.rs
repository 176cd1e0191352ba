use clap::{Arg, ArgMatches, Command};

pub const ARG_STATS_URL: &str = "stats-url";
pub const ARG_STATS_TOKEN: &str = "stats-token";

#[derive(Debug, Clone)]
pub struct Options {
    pub url: Option<String>,
    pub token: Option<String>,
}

impl Options {
    /// Parse game stats arguments from matches.
    ///
    /// # Errors
    /// Never fails today; kept fallible to match the other option parsers.
    pub fn parse(matches: &ArgMatches) -> anyhow::Result<Self> {
        // Helper to filter empty strings which clap might pass through if env vars are set to ""
        let get_non_empty = |id: &str| {
            matches
                .get_one::<String>(id)
                .cloned()
                .filter(|v| !v.trim().is_empty())
        };

        Ok(Self {
            url: get_non_empty(ARG_STATS_URL),
            token: get_non_empty(ARG_STATS_TOKEN),
        })
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_STATS_URL)
                .long(ARG_STATS_URL)
                .help("Upstream URL for the game stats proxy")
                .long_help(
                    "Upstream URL for the game stats proxy. When unset the stats endpoint answers\n503 and the rest of the API is unaffected.",
                )
                .env("VITRINO_STATS_URL"),
        )
        .arg(
            Arg::new(ARG_STATS_TOKEN)
                .long(ARG_STATS_TOKEN)
                .help("Bearer token sent to the game stats upstream")
                .env("VITRINO_STATS_TOKEN"),
        )
}
