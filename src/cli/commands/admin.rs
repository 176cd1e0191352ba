use clap::{Arg, ArgMatches, Command};

pub const ARG_ADMIN_PATH_SECRET: &str = "admin-path-secret";
pub const ARG_ADMIN_EMAILS: &str = "admin-emails";
pub const ARG_SESSION_TTL_SECONDS: &str = "session-ttl-seconds";
pub const ARG_FRONTEND_BASE_URL: &str = "frontend-base-url";

pub const DEFAULT_SESSION_TTL_SECONDS: i64 = 604_800;
pub const DEFAULT_FRONTEND_BASE_URL: &str = "https://vitrino.dev";

#[derive(Debug, Clone)]
pub struct Options {
    pub path_secret: String,
    pub allowed_emails: String,
    pub session_ttl_seconds: i64,
    pub frontend_base_url: String,
}

impl Options {
    /// Parse admin arguments from matches.
    ///
    /// # Errors
    /// Returns an error if required arguments are missing.
    pub fn parse(matches: &ArgMatches) -> anyhow::Result<Self> {
        let path_secret = matches.get_one::<String>(ARG_ADMIN_PATH_SECRET).cloned();
        let path_secret = match path_secret {
            Some(value) if !value.trim().is_empty() => value,
            _ => anyhow::bail!("missing required argument: --{ARG_ADMIN_PATH_SECRET}"),
        };

        let allowed_emails = matches.get_one::<String>(ARG_ADMIN_EMAILS).cloned();
        let allowed_emails = match allowed_emails {
            Some(value) if !value.trim().is_empty() => value,
            _ => anyhow::bail!("missing required argument: --{ARG_ADMIN_EMAILS}"),
        };

        Ok(Self {
            path_secret,
            allowed_emails,
            session_ttl_seconds: matches
                .get_one::<i64>(ARG_SESSION_TTL_SECONDS)
                .copied()
                .unwrap_or(DEFAULT_SESSION_TTL_SECONDS),
            frontend_base_url: matches
                .get_one::<String>(ARG_FRONTEND_BASE_URL)
                .cloned()
                .unwrap_or_else(|| DEFAULT_FRONTEND_BASE_URL.to_string()),
        })
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_ADMIN_PATH_SECRET)
                .long(ARG_ADMIN_PATH_SECRET)
                .help("Secret path segment that fronts the admin panel")
                .long_help(
                    "Secret path segment that fronts the admin panel. Requests whose first path\nsegment does not match it exactly are answered with 404, so the panel is\nindistinguishable from a missing route.",
                )
                .env("VITRINO_ADMIN_PATH_SECRET"),
        )
        .arg(
            Arg::new(ARG_ADMIN_EMAILS)
                .long(ARG_ADMIN_EMAILS)
                .help("Comma-separated list of emails allowed to sign in")
                .env("VITRINO_ADMIN_EMAILS"),
        )
        .arg(
            Arg::new(ARG_SESSION_TTL_SECONDS)
                .long(ARG_SESSION_TTL_SECONDS)
                .help("Session cookie TTL in seconds")
                .env("VITRINO_SESSION_TTL_SECONDS")
                .default_value("604800")
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            Arg::new(ARG_FRONTEND_BASE_URL)
                .long(ARG_FRONTEND_BASE_URL)
                .help("Frontend base URL used for CORS and cookie security")
                .env("VITRINO_FRONTEND_BASE_URL")
                .default_value(DEFAULT_FRONTEND_BASE_URL),
        )
}
