//! # Vitrino (Portfolio Content & Admin API)
//!
//! `vitrino` is the backend for a personal portfolio website. It serves the
//! public content documents (hero, experience, projects, testimonials, ...)
//! and a parallel admin editing surface reachable through an obfuscated path.
//!
//! ## Content Model
//!
//! Every content section is an independent JSON document keyed by a fixed
//! path (`content/<section>`). Documents are opaque at the storage layer;
//! the application owns the defaults:
//!
//! - **Defaults:** every top-level field has a default that is substituted
//!   when the stored document is missing the field (or stores `null`).
//! - **Lazy creation:** the first read of a missing document writes the
//!   defaults back, so the admin panel always edits a real document.
//! - **Shallow merges:** saves overwrite only the top-level fields supplied;
//!   nested arrays and objects are replaced wholesale.
//!
//! ## Admin Surface
//!
//! The admin panel hangs off an unguessable URL segment (the *path secret*).
//! This is an obscurity measure, not a security boundary: the real check is
//! the session cookie, which is minted and verified by an external identity
//! platform and then matched against a static email allow-list.
//!
//! > **Note:** a wrong path segment yields `404` for every panel route so
//! > the panel cannot be discovered by probing.

pub mod api;
pub mod cli;
pub mod content;
pub mod identity;
pub mod store;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
