//! Ogg Opus muxer.
//!
//! Accumulates the pre-encoded Opus frames of one audio stream and
//! finalizes them into a complete bitstream: an OpusHead page, an OpusTags
//! page, then one single-segment page per frame in arrival order. Arrival
//! order becomes page sequence order.

use crate::error::OggError;
use crate::page::{self, HeaderType};
use crate::SAMPLES_PER_MS;
use bytes::{BufMut, Bytes, BytesMut};

/// Magic signature of the identification header: "OpusHead".
pub const ID_MAGIC: [u8; 8] = *b"OpusHead";

/// Magic signature of the comment header: "OpusTags".
pub const COMMENT_MAGIC: [u8; 8] = *b"OpusTags";

/// Fixed vendor string carried in the comment header.
const VENDOR: [u8; 4] = *b"dcba";

/// Options for one muxer instance.
#[derive(Debug, Clone)]
pub struct MuxerOptions {
    /// Original sample rate of the input, written into the OpusHead page.
    pub sample_rate: u32,
    /// Duration of one audio frame in milliseconds.
    pub packet_duration_ms: u32,
    /// Bitstream serial number. Generated randomly when `None`; fix it for
    /// deterministic output.
    pub serial: Option<u32>,
}

/// Accumulates raw Opus frames and emits the finished container.
///
/// One muxer serves exactly one audio stream. [`OggMuxer::finalize`]
/// consumes the instance, so a finalized muxer cannot be reused.
#[derive(Debug)]
pub struct OggMuxer {
    queue: Vec<Bytes>,
    sample_rate: u32,
    serial: u32,
    samples_per_frame: u64,
}

impl OggMuxer {
    pub fn new(options: MuxerOptions) -> Self {
        Self {
            queue: Vec::new(),
            sample_rate: options.sample_rate,
            serial: options.serial.unwrap_or_else(rand::random),
            samples_per_frame: SAMPLES_PER_MS * u64::from(options.packet_duration_ms),
        }
    }

    /// Returns the bitstream serial number in use.
    pub fn serial(&self) -> u32 {
        self.serial
    }

    /// Returns the number of queued frames.
    pub fn frame_count(&self) -> usize {
        self.queue.len()
    }

    /// Appends a raw frame to the queue. Frames are not validated here;
    /// oversized frames are reported by [`OggMuxer::finalize`].
    pub fn push(&mut self, frame: Bytes) {
        self.queue.push(frame);
    }

    /// Builds the complete bitstream: both header pages followed by one
    /// page per queued frame.
    ///
    /// An empty queue yields a valid, audio-less container of just the two
    /// header pages. Any frame over 255 bytes fails the build, since the
    /// single-segment table cannot represent it.
    pub fn finalize(self) -> Result<Bytes, OggError> {
        let mut out = BytesMut::new();

        let id_page = page::build_page(&self.id_header(), HeaderType::Beginning, 0, self.serial, 0)?;
        out.extend_from_slice(&id_page);

        let comment_page =
            page::build_page(&self.comment_header(), HeaderType::None, 0, self.serial, 1)?;
        out.extend_from_slice(&comment_page);

        for (k, frame) in self.queue.iter().enumerate() {
            // Data pages never set the end-of-stream flag.
            let granule = (k as u64 + 1) * self.samples_per_frame;
            let data_page =
                page::build_page(frame, HeaderType::None, granule, self.serial, k as u32 + 2)?;
            out.extend_from_slice(&data_page);
        }

        Ok(out.freeze())
    }

    /// 19-byte OpusHead record.
    fn id_header(&self) -> BytesMut {
        let mut buf = BytesMut::with_capacity(19);
        buf.put_slice(&ID_MAGIC);
        buf.put_u8(1); // version
        buf.put_u8(1); // channel count
        buf.put_u16_le(0); // pre-skip
        buf.put_u32_le(self.sample_rate); // original sample rate
        buf.put_u16_le(0); // output gain
        buf.put_u8(0); // channel mapping family 0: mono or stereo
        buf
    }

    /// 20-byte OpusTags record with a fixed vendor string and no comments.
    fn comment_header(&self) -> BytesMut {
        let mut buf = BytesMut::with_capacity(20);
        buf.put_slice(&COMMENT_MAGIC);
        buf.put_u32_le(VENDOR.len() as u32);
        buf.put_slice(&VENDOR);
        buf.put_u32_le(0); // user comment count
        buf
    }
}
