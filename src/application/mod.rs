//! Application layer
//!
//! Use cases that turn primitive command fields into domain calls and shape
//! the results for callers outside the service. Nothing returned from this
//! layer carries a password hash.

pub mod auth;
