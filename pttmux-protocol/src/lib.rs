//! # pttmux-protocol
//!
//! Wire protocol for the push-to-talk channel feed.
//!
//! This crate provides:
//! - Classification of transport frames into control and audio messages
//! - JSON control event decoding with snake_case to camelCase key rewriting
//! - The binary audio-data layout (stream id, packet id, opaque payload)
//! - Codec header decoding and the outbound logon message

pub mod codec;
pub mod error;
pub mod event;
pub mod keys;

pub use codec::{decode_frame, TransportFrame, WireEvent};
pub use error::ProtocolError;
pub use event::{
    ChannelEvent, CodecHeader, CodecInfo, ErrorEvent, LogonRequest, StreamData, StreamStartEvent,
    StreamStopEvent,
};
pub use keys::camel_case_keys;

/// Size of the fixed audio-data header: tag byte plus two big-endian u32 ids.
pub const AUDIO_DATA_HEADER_SIZE: usize = 9;

/// Size of the decoded codec header record.
pub const CODEC_HEADER_SIZE: usize = 4;
