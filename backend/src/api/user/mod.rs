//! Module for the signed-in user's own data.
//!
//! Exposes the session's user record to scripts and tests without going
//! through the rendered pages.

pub mod handlers;
