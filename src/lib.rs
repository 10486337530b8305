//! jobmail — rule-based email-understanding core for job-search tracking.
//!
//! Turns raw email messages into structured signals: whether a message
//! is an application confirmation, which company/position/platform it
//! concerns, what outcome a reply signals (rejected / interviewing /
//! offered), and which tracked application it most likely corresponds
//! to. Entirely deterministic — every decision traces to a named
//! pattern or rule. No mail fetching, no persistence, no UI.

pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod matcher;
pub mod parser;
pub mod platform;
mod text;
pub mod types;
