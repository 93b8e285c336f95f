//! # pttmux-ogg
//!
//! Ogg Opus container muxing for pttmux.
//!
//! This crate provides:
//! - The Ogg framing CRC-32 (non-reflected, polynomial 0x04C11DB7)
//! - Single-segment Ogg page construction
//! - A per-stream muxer that packages queued Opus frames into a complete
//!   bitstream: OpusHead page, OpusTags page, one page per frame

pub mod crc;
pub mod error;
pub mod mux;
pub mod page;

pub use error::OggError;
pub use mux::{MuxerOptions, OggMuxer};
pub use page::{HeaderType, CAPTURE_PATTERN, MAX_SEGMENT_SIZE, PAGE_HEADER_SIZE};

/// Samples per millisecond at the 48 kHz Opus reference clock.
pub const SAMPLES_PER_MS: u64 = 48;
