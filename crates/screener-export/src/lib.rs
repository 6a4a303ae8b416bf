//! screener-export
//!
//! Report assembly from computed findings: summary context, plain-text
//! summary, answer transcript, referral e-mail text and a printable DOCX.

pub mod docx;
pub mod email;
pub mod error;
pub mod render;
pub mod styles;
pub mod summary;
pub mod transcript;
