//! Channel session state machine.
//!
//! One `ChannelSession` per transport connection. The session is either
//! idle or tracking exactly one active audio stream; there is no queue of
//! pending streams. Anticipated protocol anomalies (duplicate stream-start,
//! mismatched stream id, stop or data with no active stream) are logged and
//! absorbed, and the session keeps running for the connection's lifetime.

use crate::stream::{MessageStream, StreamItem};
use pttmux_protocol::{
    decode_frame, ChannelEvent, CodecHeader, CodecInfo, StreamData, StreamStartEvent,
    StreamStopEvent, TransportFrame, WireEvent,
};
use tokio::sync::mpsc;

/// Sender side of the in-flight audio stream.
#[derive(Debug)]
struct ActiveStream {
    stream_id: u32,
    items: mpsc::UnboundedSender<StreamItem>,
}

/// Protocol state machine over one channel connection.
///
/// New stream handles are delivered on the receiver returned by
/// [`ChannelSession::new`], once per stream-start event.
#[derive(Debug)]
pub struct ChannelSession {
    /// The in-flight audio stream, if any.
    active: Option<ActiveStream>,
    streams: mpsc::UnboundedSender<MessageStream>,
}

impl ChannelSession {
    /// Creates an idle session plus the receiver on which new stream
    /// handles are delivered.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<MessageStream>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                active: None,
                streams: tx,
            },
            rx,
        )
    }

    /// Returns the id of the active stream, if one is in flight.
    pub fn active_stream_id(&self) -> Option<u32> {
        self.active.as_ref().map(|s| s.stream_id)
    }

    /// Feeds one inbound transport frame through the state machine.
    ///
    /// Frames that fail to decode are logged and dropped; the session
    /// continues.
    pub fn handle_frame(&mut self, frame: TransportFrame) {
        match decode_frame(frame) {
            Ok(Some(WireEvent::Control(event))) => self.handle_event(event),
            Ok(Some(WireEvent::Audio(data))) => self.handle_data(data),
            Ok(None) => {} // unknown command
            Err(e) => tracing::error!("unexpected channel message: {}", e),
        }
    }

    /// Routes a decoded control event.
    pub fn handle_event(&mut self, event: ChannelEvent) {
        match event {
            ChannelEvent::StreamStart(start) => self.handle_stream_start(start),
            ChannelEvent::StreamStop(stop) => self.handle_stream_stop(stop),
            ChannelEvent::Error(err) => {
                tracing::error!("error received from channel API: {}", err.error);
            }
        }
    }

    fn handle_stream_start(&mut self, event: StreamStartEvent) {
        if let Some(active) = &self.active {
            tracing::error!(
                "new stream [{}] started while stream [{}] is not terminated",
                event.stream_id,
                active.stream_id
            );
        }

        let header = match CodecHeader::decode(&event.codec_header) {
            Ok(header) => header,
            Err(e) => {
                tracing::error!(
                    "invalid codec header on stream [{}]: {}",
                    event.stream_id,
                    e
                );
                return;
            }
        };

        let codec_info = CodecInfo::new(header, event.packet_duration);
        let (items, stream) = MessageStream::new(event.stream_id, event.from, codec_info);

        // Replacing the sender abandons the previous stream; its channel
        // closes without an End item.
        self.active = Some(ActiveStream {
            stream_id: event.stream_id,
            items,
        });

        if self.streams.send(stream).is_err() {
            tracing::warn!(
                "stream subscriber dropped; stream [{}] has no consumer",
                event.stream_id
            );
        }
    }

    fn handle_stream_stop(&mut self, event: StreamStopEvent) {
        let Some(active) = &self.active else {
            tracing::error!("stream stop received while no stream is active");
            return;
        };
        if event.stream_id != active.stream_id {
            tracing::error!(
                "unexpected stream id [{}] on stream stop, expected [{}]",
                event.stream_id,
                active.stream_id
            );
            return;
        }

        let _ = active.items.send(StreamItem::End);
        self.active = None;
    }

    /// Forwards a decoded audio-data message to the active stream.
    pub fn handle_data(&mut self, data: StreamData) {
        let Some(active) = &self.active else {
            tracing::error!("stream data received while no stream is active");
            return;
        };
        if data.stream_id != active.stream_id {
            tracing::error!(
                "unexpected stream id [{}] on stream data, expected [{}]",
                data.stream_id,
                active.stream_id
            );
            return;
        }

        let _ = active.items.send(StreamItem::Frame(data.payload));
    }
}
