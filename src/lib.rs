//! # pttmux
//!
//! Push-to-talk channel audio ingest and Ogg Opus muxing.
//!
//! A transport layer (external to this workspace) delivers text and binary
//! channel frames. [`ChannelSession`] classifies and routes them, handing
//! out one [`MessageStream`] per audio transmission; the frames collected
//! from a stream are packaged by [`OggMuxer`] into a complete Ogg Opus
//! bitstream ready for a transcription service.
//!
//! ```
//! use bytes::Bytes;
//! use pttmux::{MuxerOptions, OggMuxer};
//!
//! let mut mux = OggMuxer::new(MuxerOptions {
//!     sample_rate: 16000,
//!     packet_duration_ms: 60,
//!     serial: Some(12345),
//! });
//! mux.push(Bytes::from_static(&[0x42; 40]));
//!
//! let container = mux.finalize().unwrap();
//! assert_eq!(&container[0..4], b"OggS");
//! ```

pub use pttmux_ogg as ogg;
pub use pttmux_protocol as protocol;
pub use pttmux_session as session;

pub use pttmux_ogg::{HeaderType, MuxerOptions, OggError, OggMuxer};
pub use pttmux_protocol::{
    decode_frame, ChannelEvent, CodecHeader, CodecInfo, LogonRequest, ProtocolError, StreamData,
    TransportFrame, WireEvent,
};
pub use pttmux_session::{ChannelConfig, ChannelSession, MessageStream, StreamItem};
