//! MPEG audio frame-header validation for MP3 streams without an ID3 tag.
//!
//! A single frame header is a 11-bit sync word plus a few fields, which
//! collides with arbitrary binary data far too often. A stream is accepted
//! only when a second valid header sits exactly one computed frame after
//! the first.

/// Sample rates in Hz indexed by the 2-bit sample-rate field (MPEG-1).
const SAMPLE_RATES: [u32; 3] = [44100, 48000, 32000];

/// Layer III bit rates for MPEG-2 and MPEG-2.5.
const MP25_RATES: [u32; 15] = [
    0, 8000, 16000, 24000, 32000, 40000, 48000, 56000, 64000, 80000, 96000, 112000, 128000,
    144000, 160000,
];

/// Layer III bit rates for MPEG-1.
const MP3_RATES: [u32; 15] = [
    0, 32000, 40000, 48000, 56000, 64000, 80000, 96000, 112000, 128000, 160000, 192000, 224000,
    256000, 320000,
];

const FRAME_HEADER_LEN: usize = 4;

/// Decoded fields of one frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mp3Frame {
    /// Raw 2-bit version field: 0 = MPEG-2.5, 2 = MPEG-2, 3 = MPEG-1.
    pub version: u8,
    /// Bits per second.
    pub bit_rate: u32,
    /// Hz, already scaled for the version.
    pub sample_rate: u32,
    pub padding: bool,
}

impl Mp3Frame {
    /// Decode the header fields from the first three bytes of `header`.
    ///
    /// Returns `None` for fewer than three bytes or a reserved sample-rate
    /// or bit-rate index.
    pub fn parse(header: &[u8]) -> Option<Self> {
        let [_, b1, b2, ..] = *header else {
            return None;
        };

        let version = (b1 & 0x18) >> 3;
        let bit_rate_index = usize::from((b2 & 0xF0) >> 4);
        let bit_rate = if version & 1 == 1 {
            *MP3_RATES.get(bit_rate_index)?
        } else {
            *MP25_RATES.get(bit_rate_index)?
        };

        let sample_rate_index = usize::from((b2 & 0x0C) >> 2);
        let mut sample_rate = *SAMPLE_RATES.get(sample_rate_index)?;
        match version {
            2 => sample_rate >>= 1,
            0 => sample_rate >>= 2,
            _ => {}
        }

        let padding = (b2 & 0x02) != 0;

        Some(Self {
            version,
            bit_rate,
            sample_rate,
            padding,
        })
    }

    /// Size in bytes of the frame this header introduces.
    pub fn frame_size(&self) -> usize {
        let scale: u64 = if self.version & 1 == 0 { 72 } else { 144 };
        let size = u64::from(self.bit_rate) * scale / u64::from(self.sample_rate.max(1));
        size as usize + usize::from(self.padding)
    }
}

/// Validate the frame header starting at `index`.
///
/// Requires the sync bits, layer III, and non-reserved bit-rate and
/// sample-rate indices.
pub fn match_mp3_header(input: &[u8], index: usize) -> bool {
    let Some(header) = input.get(index..index + FRAME_HEADER_LEN) else {
        return false;
    };

    if header[0] != 0xFF || header[1] & 0xE0 != 0xE0 {
        return false;
    }

    let layer = (header[1] & 0x06) >> 1;
    if layer == 0 {
        return false;
    }

    let bit_rate_index = (header[2] & 0xF0) >> 4;
    if bit_rate_index == 15 {
        return false;
    }

    let sample_rate_index = (header[2] & 0x0C) >> 2;
    if sample_rate_index == 3 {
        return false;
    }

    // layer bits 01 encode layer III
    layer == 1
}

/// Check for two consecutive valid frame headers at the start of `input`.
pub fn is_mp3_without_id3(input: &[u8]) -> bool {
    if !match_mp3_header(input, 0) {
        return false;
    }

    let Some(frame) = Mp3Frame::parse(input) else {
        return false;
    };

    let skip = frame.frame_size();
    if skip < FRAME_HEADER_LEN || skip + FRAME_HEADER_LEN >= input.len() {
        return false;
    }

    match_mp3_header(input, skip)
}
