//! Muxer error types.

use thiserror::Error;

/// Errors produced while building the Ogg bitstream.
#[derive(Debug, Error)]
pub enum OggError {
    #[error("frame too large for a single-segment page: {size} bytes (max {max})")]
    FrameTooLarge { size: usize, max: usize },
}
