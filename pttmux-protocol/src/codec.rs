//! Transport frame classification.
//!
//! The transport delivers either UTF-8 text frames (JSON control messages)
//! or binary frames (audio data). Classification picks the decoder; the
//! typed results live in [`crate::event`].

use crate::error::ProtocolError;
use crate::event::{ChannelEvent, StreamData};
use bytes::Bytes;

/// A raw frame as delivered by the transport layer.
#[derive(Debug, Clone)]
pub enum TransportFrame {
    /// UTF-8 JSON control message.
    Text(String),
    /// Binary audio-data message.
    Binary(Bytes),
}

/// A classified and decoded inbound message.
#[derive(Debug, Clone)]
pub enum WireEvent {
    /// Decoded text control message.
    Control(ChannelEvent),
    /// Decoded binary audio data.
    Audio(StreamData),
}

/// Decodes one transport frame into a wire event.
///
/// Control messages with an unrecognized command decode to `Ok(None)`;
/// malformed frames return an error for the session to log and drop.
pub fn decode_frame(frame: TransportFrame) -> Result<Option<WireEvent>, ProtocolError> {
    match frame {
        TransportFrame::Text(text) => Ok(ChannelEvent::decode(&text)?.map(WireEvent::Control)),
        TransportFrame::Binary(data) => Ok(Some(WireEvent::Audio(StreamData::decode(data)?))),
    }
}
