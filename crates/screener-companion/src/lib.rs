//! screener-companion
//!
//! Prompt assembly for the optional AI clinical companion and the seam the
//! text-generation backend plugs into. The backend itself lives outside
//! this workspace.

pub mod analysis;
pub mod error;
pub mod prompt;
