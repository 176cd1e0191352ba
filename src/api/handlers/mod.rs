//! API handlers for the portfolio service.
//!
//! This module organizes the route handlers: public content reads, the view
//! counter, the stats proxy, and the two-gate admin surface.

pub mod admin;
pub mod content;
pub mod health;
pub mod root;
pub mod stats;
pub mod views;
