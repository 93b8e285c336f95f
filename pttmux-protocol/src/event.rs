//! Typed messages for the channel session.
//!
//! Inbound control messages are JSON text frames dispatched on their
//! `command` field; audio data arrives as binary frames with a fixed
//! 9-byte header. The only outbound message the core sends is `logon`.

use crate::error::ProtocolError;
use crate::keys::camel_case_keys;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outbound logon message, sent once after the transport connects.
#[derive(Debug, Clone, Serialize)]
pub struct LogonRequest {
    pub command: &'static str,
    pub seq: u64,
    pub auth_token: String,
    pub channel: String,
}

impl LogonRequest {
    pub fn new(seq: u64, auth_token: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            command: "logon",
            seq,
            auth_token: auth_token.into(),
            channel: channel.into(),
        }
    }

    /// Serializes the logon message for the transport's text channel.
    pub fn to_json(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Stream-start control event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamStartEvent {
    /// The id of the stream that started.
    pub stream_id: u32,

    /// Username of the sender.
    pub from: String,

    /// Base64-encoded codec header.
    pub codec_header: String,

    /// Audio packet duration in milliseconds.
    pub packet_duration: u32,

    /// Codec name, expected to be "opus".
    #[serde(default)]
    pub codec: Option<String>,

    /// Name of the channel the stream belongs to.
    #[serde(default)]
    pub channel: Option<String>,
}

/// Stream-stop control event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamStopEvent {
    /// The id of the stream that stopped.
    pub stream_id: u32,
}

/// Error event reported by the channel API.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEvent {
    pub error: String,
}

/// A decoded text control message.
#[derive(Debug, Clone)]
pub enum ChannelEvent {
    StreamStart(StreamStartEvent),
    StreamStop(StreamStopEvent),
    Error(ErrorEvent),
}

impl ChannelEvent {
    /// Decodes a JSON control message.
    ///
    /// Keys are rewritten to camelCase before dispatch on the `command`
    /// field. Unknown commands yield `Ok(None)`.
    pub fn decode(text: &str) -> Result<Option<Self>, ProtocolError> {
        let value: Value = serde_json::from_str(text)?;
        let value = camel_case_keys(value);
        let command = value
            .get("command")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let event = match command.as_str() {
            "on_stream_start" => Some(ChannelEvent::StreamStart(serde_json::from_value(value)?)),
            "on_stream_stop" => Some(ChannelEvent::StreamStop(serde_json::from_value(value)?)),
            "on_error" => Some(ChannelEvent::Error(serde_json::from_value(value)?)),
            _ => None,
        };
        Ok(event)
    }
}

/// Decoded codec header from a stream-start event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecHeader {
    pub sample_rate: u16,
    pub frames_per_packet: u8,
    pub frame_size: u8,
}

impl CodecHeader {
    /// Decodes the base64 codec header record: a little-endian u16 sample
    /// rate followed by frames-per-packet and frame-size bytes.
    pub fn decode(encoded: &str) -> Result<Self, ProtocolError> {
        let raw = BASE64.decode(encoded)?;
        if raw.len() < crate::CODEC_HEADER_SIZE {
            return Err(ProtocolError::TruncatedCodecHeader { len: raw.len() });
        }
        Ok(Self {
            sample_rate: u16::from_le_bytes([raw[0], raw[1]]),
            frames_per_packet: raw[2],
            frame_size: raw[3],
        })
    }
}

/// Codec parameters for one stream: the decoded header plus the packet
/// duration from the stream-start event. Immutable for the stream's life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecInfo {
    pub sample_rate: u16,
    pub frames_per_packet: u8,
    pub frame_size: u8,
    pub packet_duration_ms: u32,
}

impl CodecInfo {
    pub fn new(header: CodecHeader, packet_duration_ms: u32) -> Self {
        Self {
            sample_rate: header.sample_rate,
            frames_per_packet: header.frames_per_packet,
            frame_size: header.frame_size,
            packet_duration_ms,
        }
    }
}

/// A decoded binary audio-data message.
#[derive(Debug, Clone)]
pub struct StreamData {
    pub stream_id: u32,
    pub packet_id: u32,
    /// Opaque pre-encoded audio frame.
    pub payload: Bytes,
}

impl StreamData {
    /// Decodes the binary audio-data layout: a message-type tag byte, two
    /// big-endian u32 ids, then the frame payload as a zero-copy slice.
    pub fn decode(mut buf: Bytes) -> Result<Self, ProtocolError> {
        if buf.len() < crate::AUDIO_DATA_HEADER_SIZE {
            return Err(ProtocolError::TruncatedAudioData { len: buf.len() });
        }
        let stream_id = u32::from_be_bytes([buf[1], buf[2], buf[3], buf[4]]);
        let packet_id = u32::from_be_bytes([buf[5], buf[6], buf[7], buf[8]]);
        let payload = buf.split_off(crate::AUDIO_DATA_HEADER_SIZE);
        Ok(Self {
            stream_id,
            packet_id,
            payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logon_serialization() {
        let logon = LogonRequest::new(1, "token-1", "support");
        let json = logon.to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["command"], "logon");
        assert_eq!(value["seq"], 1);
        assert_eq!(value["auth_token"], "token-1");
        assert_eq!(value["channel"], "support");
    }

    #[test]
    fn test_decode_stream_start() {
        let text = r#"{
            "command": "on_stream_start",
            "type": "audio",
            "codec": "opus",
            "codec_header": "gD4BPA==",
            "packet_duration": 60,
            "stream_id": 22695,
            "channel": "support",
            "from": "alice"
        }"#;

        let event = ChannelEvent::decode(text).unwrap().unwrap();
        match event {
            ChannelEvent::StreamStart(start) => {
                assert_eq!(start.stream_id, 22695);
                assert_eq!(start.from, "alice");
                assert_eq!(start.packet_duration, 60);
                assert_eq!(start.codec.as_deref(), Some("opus"));
                assert_eq!(start.codec_header, "gD4BPA==");
            }
            other => panic!("expected stream start, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_stream_stop_and_error() {
        let stop = ChannelEvent::decode(r#"{"command":"on_stream_stop","stream_id":5}"#)
            .unwrap()
            .unwrap();
        assert!(matches!(
            stop,
            ChannelEvent::StreamStop(StreamStopEvent { stream_id: 5 })
        ));

        let err = ChannelEvent::decode(r#"{"command":"on_error","error":"channel busy"}"#)
            .unwrap()
            .unwrap();
        match err {
            ChannelEvent::Error(e) => assert_eq!(e.error, "channel busy"),
            other => panic!("expected error event, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_command_ignored() {
        let result = ChannelEvent::decode(r#"{"command":"on_channel_status","status":"online"}"#);
        assert!(result.unwrap().is_none());

        let result = ChannelEvent::decode(r#"{"success":true,"seq":1}"#);
        assert!(result.unwrap().is_none());
    }

    #[test]
    fn test_malformed_json() {
        let result = ChannelEvent::decode("{not json");
        assert!(matches!(result, Err(ProtocolError::Json(_))));
    }

    #[test]
    fn test_codec_header_decode() {
        // 16000 Hz LE, 1 frame per packet, 60 byte frames
        let encoded = BASE64.encode([0x80, 0x3E, 0x01, 0x3C]);
        let header = CodecHeader::decode(&encoded).unwrap();

        assert_eq!(header.sample_rate, 16000);
        assert_eq!(header.frames_per_packet, 1);
        assert_eq!(header.frame_size, 60);
    }

    #[test]
    fn test_codec_header_truncated() {
        let encoded = BASE64.encode([0x80, 0x3E]);
        let result = CodecHeader::decode(&encoded);
        assert!(matches!(
            result,
            Err(ProtocolError::TruncatedCodecHeader { len: 2 })
        ));
    }

    #[test]
    fn test_codec_header_bad_base64() {
        let result = CodecHeader::decode("not!!base64");
        assert!(matches!(result, Err(ProtocolError::Base64(_))));
    }

    #[test]
    fn test_stream_data_decode() {
        let mut buf = vec![0x01];
        buf.extend_from_slice(&22695u32.to_be_bytes());
        buf.extend_from_slice(&7u32.to_be_bytes());
        buf.extend_from_slice(b"opus-frame");

        let data = StreamData::decode(Bytes::from(buf)).unwrap();
        assert_eq!(data.stream_id, 22695);
        assert_eq!(data.packet_id, 7);
        assert_eq!(data.payload.as_ref(), b"opus-frame");
    }

    #[test]
    fn test_stream_data_empty_payload() {
        let mut buf = vec![0x01];
        buf.extend_from_slice(&1u32.to_be_bytes());
        buf.extend_from_slice(&2u32.to_be_bytes());

        let data = StreamData::decode(Bytes::from(buf)).unwrap();
        assert!(data.payload.is_empty());
    }

    #[test]
    fn test_stream_data_truncated() {
        let result = StreamData::decode(Bytes::from_static(&[0x01, 0x00, 0x00]));
        assert!(matches!(
            result,
            Err(ProtocolError::TruncatedAudioData { len: 3 })
        ));
    }

    #[test]
    fn test_codec_info() {
        let header = CodecHeader {
            sample_rate: 16000,
            frames_per_packet: 1,
            frame_size: 60,
        };
        let info = CodecInfo::new(header, 60);
        assert_eq!(info.sample_rate, 16000);
        assert_eq!(info.packet_duration_ms, 60);
    }
}
