//! Structural checks for box- and element-based media containers.
//!
//! These run after the fixed-offset audio/video table and never fail: a
//! truncated or nonsensical header simply does not match.

use tracing::trace;

const FTYP: &[u8] = b"ftyp";
const MP4_BRAND: &[u8] = b"mp4";

const EBML_MAGIC: [u8; 4] = [0x1A, 0x45, 0xDF, 0xA3];
const DOCTYPE_ELEMENT_ID: [u8; 2] = [0x42, 0x82];
const WEBM_DOCTYPE: &[u8] = b"webm";

/// Upper bound on the element scan; the DocType element sits well inside
/// the EBML header.
const WEBM_SCAN_LIMIT: usize = 38;
const MAX_VINT_SIZE: usize = 8;

/// Check for an MP4 `ftyp` box carrying an `mp4*` brand.
pub fn is_mp4_signature(input: &[u8]) -> bool {
    if input.len() < 12 {
        return false;
    }

    let box_size = u32::from_be_bytes([input[0], input[1], input[2], input[3]]) as usize;
    if input.len() < box_size || box_size % 4 != 0 {
        return false;
    }

    if &input[4..8] != FTYP {
        return false;
    }

    // major brand
    if &input[8..11] == MP4_BRAND {
        return true;
    }

    // compatible brands, after the 4-byte minor version
    let mut offset = 16;
    while offset < box_size {
        if input.get(offset..offset + 3) == Some(MP4_BRAND) {
            trace!(offset, "mp4 compatible brand found");
            return true;
        }
        offset += 4;
    }

    false
}

/// Length in bytes of the EBML variable-length integer at the start of `input`.
///
/// The length is one more than the number of leading zero bits of the first
/// byte, capped at eight and at the bytes available. Empty input yields 0.
pub fn parse_vint_size(input: &[u8]) -> usize {
    let Some(&first) = input.first() else {
        return 0;
    };
    let limit = input.len().min(MAX_VINT_SIZE);
    let mut mask = 0x80u8;
    for size in 1..limit {
        if first & mask != 0 {
            return size;
        }
        mask >>= 1;
    }
    limit
}

/// Check for an EBML header whose DocType element reads `webm`.
pub fn is_webm_signature(input: &[u8]) -> bool {
    if input.len() < 4 || input[..4] != EBML_MAGIC {
        return false;
    }

    let limit = input.len().min(WEBM_SCAN_LIMIT);
    let mut index = 4;
    while index < limit {
        if input.get(index..index + 2) == Some(&DOCTYPE_ELEMENT_ID[..]) {
            index += 2;
            if index >= input.len() {
                break;
            }

            index += parse_vint_size(&input[index..]);
            if index >= input.len() - 4 {
                break;
            }

            if &input[index..index + 4] == WEBM_DOCTYPE {
                return true;
            }
        }
        index += 1;
    }

    false
}
