//! User identity service
//!
//! Registration with salted Argon2id password hashing, and credential
//! validation that answers every mismatch with the same
//! "Invalid credentials" rejection.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
