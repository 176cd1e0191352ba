//! Command-line argument dispatch and server initialization.
//!
//! This module parses validated CLI arguments and maps them to the appropriate
//! action, such as starting the API server with its full configuration state.

use crate::cli::actions::{Action, server::Args};
use crate::cli::commands::{admin, identity, stats};
use anyhow::{Context, Result};

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>("port").copied().unwrap_or(8080);
    let dsn = matches
        .get_one::<String>("dsn")
        .cloned()
        .context("missing required argument: --dsn")?;

    let admin_opts = admin::Options::parse(matches)?;
    let identity_opts = identity::Options::parse(matches)?;
    let stats_opts = stats::Options::parse(matches)?;

    Ok(Action::Server(Args {
        port,
        dsn,
        admin_path_secret: admin_opts.path_secret,
        admin_emails: admin_opts.allowed_emails,
        session_ttl_seconds: admin_opts.session_ttl_seconds,
        frontend_base_url: admin_opts.frontend_base_url,
        identity_url: identity_opts.url,
        identity_api_key: identity_opts.api_key,
        stats_url: stats_opts.url,
        stats_token: stats_opts.token,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_url_required() {
        temp_env::with_vars(
            [
                ("VITRINO_IDENTITY_URL", None::<&str>),
                ("VITRINO_IDENTITY_API_KEY", Some("api-key")),
                ("VITRINO_ADMIN_PATH_SECRET", Some("orchid-vault-9")),
                ("VITRINO_ADMIN_EMAILS", Some("me@vitrino.dev")),
                ("VITRINO_DSN", Some("postgres://user@localhost:5432/vitrino")),
            ],
            || {
                let command = crate::cli::commands::new();
                let matches = command.get_matches_from(vec!["vitrino"]);
                let result = handler(&matches);
                assert!(result.is_err());
                if let Err(err) = result {
                    assert!(
                        err.to_string()
                            .contains("missing required argument: --identity-url")
                    );
                }
            },
        );
    }

    #[test]
    fn admin_path_secret_required() {
        temp_env::with_vars(
            [
                ("VITRINO_ADMIN_PATH_SECRET", None::<&str>),
                ("VITRINO_ADMIN_EMAILS", Some("me@vitrino.dev")),
                ("VITRINO_IDENTITY_URL", Some("https://identity.vitrino.dev")),
                ("VITRINO_IDENTITY_API_KEY", Some("api-key")),
                ("VITRINO_DSN", Some("postgres://user@localhost:5432/vitrino")),
            ],
            || {
                let command = crate::cli::commands::new();
                let matches = command.get_matches_from(vec!["vitrino"]);
                let result = handler(&matches);
                assert!(result.is_err());
                if let Err(err) = result {
                    assert!(
                        err.to_string()
                            .contains("missing required argument: --admin-path-secret")
                    );
                }
            },
        );
    }

    #[test]
    fn server_action_carries_all_options() {
        temp_env::with_vars(
            [
                ("VITRINO_ADMIN_PATH_SECRET", Some("orchid-vault-9")),
                ("VITRINO_ADMIN_EMAILS", Some("me@vitrino.dev,ops@vitrino.dev")),
                ("VITRINO_IDENTITY_URL", Some("https://identity.vitrino.dev")),
                ("VITRINO_IDENTITY_API_KEY", Some("api-key")),
                ("VITRINO_STATS_URL", Some("https://games.example.com/api/me")),
                ("VITRINO_STATS_TOKEN", None::<&str>),
                ("VITRINO_PORT", Some("9090")),
                ("VITRINO_DSN", Some("postgres://user@localhost:5432/vitrino")),
            ],
            || {
                let command = crate::cli::commands::new();
                let matches = command.get_matches_from(vec!["vitrino"]);
                let result = handler(&matches);
                assert!(result.is_ok());
                if let Ok(Action::Server(args)) = result {
                    assert_eq!(args.port, 9090);
                    assert_eq!(args.admin_path_secret, "orchid-vault-9");
                    assert_eq!(args.admin_emails, "me@vitrino.dev,ops@vitrino.dev");
                    assert_eq!(args.session_ttl_seconds, 604_800);
                    assert_eq!(args.frontend_base_url, "https://vitrino.dev");
                    assert_eq!(
                        args.stats_url.as_deref(),
                        Some("https://games.example.com/api/me")
                    );
                    assert_eq!(args.stats_token, None);
                }
            },
        );
    }
}
