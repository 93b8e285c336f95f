//! Per-stream handles with push-driven frame delivery.

use bytes::Bytes;
use pttmux_protocol::CodecInfo;
use tokio::sync::mpsc;

/// An item delivered on a stream handle's frame channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamItem {
    /// One raw audio frame, delivered in arrival order.
    Frame(Bytes),
    /// The stream's stop event was processed; no further frames follow.
    End,
}

/// A live audio stream received from the channel.
///
/// The session pushes frames in arrival order and an explicit
/// [`StreamItem::End`] when the stream's stop event arrives. A stream
/// superseded by a new stream-start is abandoned instead: its channel
/// closes without an `End` item.
#[derive(Debug)]
pub struct MessageStream {
    /// Channel-assigned stream id, stable for the stream's lifetime.
    pub stream_id: u32,
    /// Username of the sender.
    pub from: String,
    /// Codec parameters decoded from the stream-start event.
    pub codec_info: CodecInfo,
    items: mpsc::UnboundedReceiver<StreamItem>,
}

impl MessageStream {
    pub(crate) fn new(
        stream_id: u32,
        from: String,
        codec_info: CodecInfo,
    ) -> (mpsc::UnboundedSender<StreamItem>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            tx,
            Self {
                stream_id,
                from,
                codec_info,
                items: rx,
            },
        )
    }

    /// Receives the next item. Returns `None` once the stream has been
    /// abandoned and all buffered items have been drained.
    pub async fn recv(&mut self) -> Option<StreamItem> {
        self.items.recv().await
    }

    /// Non-blocking receive for draining buffered items.
    pub fn try_recv(&mut self) -> Option<StreamItem> {
        self.items.try_recv().ok()
    }
}
