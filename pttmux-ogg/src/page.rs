//! Ogg page construction.
//!
//! Page layout (27-byte fixed header + 1-byte segment table + payload, for
//! the single-segment case used throughout):
//!
//! ```text
//! +---------+---------+-------------+------------------+--------+--------+
//! | capture | version | header_type | granule_position | serial | seq    |
//! | "OggS"  | 1 byte  | 1 byte =0   | 8 bytes LE       | 4 LE   | 4 LE   |
//! +---------+---------+-------------+------------------+--------+--------+
//! | checksum | n_segments | segment_table | payload                      |
//! | 4 LE     | 1 byte =1  | 1 byte        | up to 255 bytes              |
//! +----------+------------+---------------+------------------------------+
//! ```

use crate::crc;
use crate::error::OggError;
use bytes::{BufMut, BytesMut};

/// Capture pattern opening every page: "OggS".
pub const CAPTURE_PATTERN: [u8; 4] = *b"OggS";

/// Size of the fixed page header in bytes.
pub const PAGE_HEADER_SIZE: usize = 27;

/// Maximum payload of a single-segment page.
pub const MAX_SEGMENT_SIZE: usize = 255;

/// Byte offset of the checksum field within a page.
pub const CHECKSUM_OFFSET: usize = 22;

/// Page header-type flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum HeaderType {
    /// Fresh packet on a running stream.
    None = 0,
    /// Continuation of a packet from the previous page.
    Continuation = 1,
    /// First page of a logical bitstream.
    Beginning = 2,
    /// Last page of a logical bitstream.
    End = 4,
}

/// Builds a complete single-segment page with its checksum filled in.
///
/// Only the low 32 bits of the granule position are ever populated; the
/// high half is written as zero.
pub fn build_page(
    payload: &[u8],
    header_type: HeaderType,
    granule_position: u64,
    serial: u32,
    sequence: u32,
) -> Result<BytesMut, OggError> {
    if payload.len() > MAX_SEGMENT_SIZE {
        return Err(OggError::FrameTooLarge {
            size: payload.len(),
            max: MAX_SEGMENT_SIZE,
        });
    }

    let mut page = BytesMut::with_capacity(PAGE_HEADER_SIZE + 1 + payload.len());

    // Capture pattern (4 bytes)
    page.put_slice(&CAPTURE_PATTERN);

    // Stream structure version (1 byte)
    page.put_u8(0);

    // Header type (1 byte)
    page.put_u8(header_type as u8);

    // Granule position (8 bytes, low 32 bits only)
    page.put_u32_le(granule_position as u32);
    page.put_u32_le(0);

    // Bitstream serial number (4 bytes)
    page.put_u32_le(serial);

    // Page sequence number (4 bytes)
    page.put_u32_le(sequence);

    // Checksum (4 bytes), zero during computation
    page.put_u32_le(0);

    // Segment count and single-entry segment table
    page.put_u8(1);
    page.put_u8(payload.len() as u8);

    // Payload
    page.put_slice(payload);

    let crc = crc::checksum(&page);
    page[CHECKSUM_OFFSET..CHECKSUM_OFFSET + 4].copy_from_slice(&crc.to_le_bytes());

    Ok(page)
}
