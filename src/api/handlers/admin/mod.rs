//! Admin handlers and supporting modules.
//!
//! This module coordinates the two admin gates and the session lifecycle.
//!
//! ## Path Gate
//!
//! The admin panel hangs off `/<secret>/...` where the secret is an exact,
//! configured string. A wrong secret answers 404, the same as a missing
//! route, so the panel location stays unguessable from the outside.
//!
//! ## Session Gate
//!
//! Panel pages route on cookie PRESENCE only and redirect between login and
//! dashboard. Real verification happens against the identity platform when
//! the dashboard renders, and on every `/v1/admin/session` call.

pub(crate) mod gate;
pub(crate) mod session;
mod state;
pub(crate) mod types;

pub use gate::panel_router;
pub use state::{AdminConfig, AdminState};
