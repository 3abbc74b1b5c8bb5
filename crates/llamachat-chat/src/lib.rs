//! Conversation management for llamachat
//!
//! This crate provides the per-session transcript store and the
//! respond+append cycle that drives one chat exchange.

pub mod session;

pub use session::Session;
