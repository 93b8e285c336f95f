//! Ogg page checksum.
//!
//! Ogg framing uses a CRC-32 with polynomial 0x04C11DB7, no bit reflection
//! and no final XOR, computed over the whole page with the checksum field
//! zeroed. This is not the reflected CRC-32 of zlib, nor CRC-32C; a generic
//! routine produces pages no decoder will accept.

/// Generator polynomial for the Ogg page CRC.
pub const CRC_POLYNOMIAL: u32 = 0x04C1_1DB7;

const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut r = (i as u32) << 24;
        let mut bit = 0;
        while bit < 8 {
            r = if r & 0x8000_0000 != 0 {
                (r << 1) ^ CRC_POLYNOMIAL
            } else {
                r << 1
            };
            bit += 1;
        }
        table[i] = r;
        i += 1;
    }
    table
}

/// Precomputed 256-entry table for [`checksum`].
const CRC_TABLE: [u32; 256] = build_table();

/// Computes the Ogg page checksum over `data`.
///
/// The caller zeroes the page's checksum field before calling this and
/// writes the result back into it afterwards.
pub fn checksum(data: &[u8]) -> u32 {
    let mut crc = 0u32;
    for &byte in data {
        let index = ((crc >> 24) & 0xFF) as u8 ^ byte;
        crc = (crc << 8) ^ CRC_TABLE[index as usize];
    }
    crc
}
