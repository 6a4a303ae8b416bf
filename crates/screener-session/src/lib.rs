//! screener-session library root.
//!
//! The session controller, answer replay and configuration live here so
//! that the `screener` binary and integration tests share them.

pub mod config;
pub mod replay;
pub mod session;
