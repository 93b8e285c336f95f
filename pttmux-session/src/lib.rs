//! # pttmux-session
//!
//! Channel session handling for pttmux.
//!
//! This crate provides:
//! - `ChannelSession`: per-connection protocol state machine tracking at
//!   most one active audio stream
//! - `MessageStream`: push-driven, ordered frame delivery per stream
//! - `ChannelConfig`: channel logon parameters

pub mod config;
pub mod session;
pub mod stream;

pub use config::ChannelConfig;
pub use session::ChannelSession;
pub use stream::{MessageStream, StreamItem};
