//! String Codec: format string chunked yang self-describing
//!
//! Layout per chunk:
//! ┌──────────────────────────────┬──────────────────────────┐
//! │ Header (1 byte)              │ Payload (0-127 byte)     │
//! │ bit 7 = continuation         │ UTF-8                    │
//! │ bit 0-6 = panjang payload    │                          │
//! └──────────────────────────────┴──────────────────────────┘
//!
//! Chunk terakhir selalu punya continuation = 0. String kosong = satu header 0x00.

use log::{trace, warn};

use crate::core::Readable;
use crate::error::Result;

/// Payload maksimum per chunk
pub const MAX_CHUNK_LEN: usize = 127;
/// Bit 7 header: masih ada chunk berikutnya
pub const CONTINUATION_FLAG: u8 = 0x80;
/// Bit 0-6 header: panjang payload chunk ini
pub const LENGTH_MASK: u8 = 0x7F;

/// Kebijakan untuk payload yang bukan UTF-8 valid
///
/// Decode tidak pernah gagal karena UTF-8 invalid; hanya substitusinya yang berbeda.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Utf8Policy {
    /// Chunk invalid diganti string kosong
    #[default]
    Empty,
    /// Sequence invalid diganti U+FFFD
    Lossy,
}

/// Total byte di wire untuk `text` (header + payload)
#[inline(always)]
pub fn encoded_len(text: &str) -> usize {
    let len = text.len();
    if len == 0 {
        1
    } else {
        len + len.div_ceil(MAX_CHUNK_LEN)
    }
}

/// Encode `text` ke format chunked
pub fn encode_string(text: &str) -> Vec<u8> {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(encoded_len(text));

    if bytes.is_empty() {
        out.push(0x00);
        return out;
    }

    let mut chunks = bytes.chunks(MAX_CHUNK_LEN).peekable();
    while let Some(chunk) = chunks.next() {
        let mut header = chunk.len() as u8;
        if chunks.peek().is_some() {
            header |= CONTINUATION_FLAG;
        }
        out.push(header);
        out.extend_from_slice(chunk);
    }

    out
}

/// Decode string chunked dari `source`
///
/// Tiap header dan tiap payload adalah satu `read_bytes`; `OutOfBounds` di tengah
/// chunk diteruskan apa adanya.
pub fn decode_string<R: Readable + ?Sized>(source: &mut R, policy: Utf8Policy) -> Result<String> {
    let mut payload = Vec::new();
    let mut boundaries = Vec::new();

    let mut header = read_header(source)?;
    loop {
        let len = (header & LENGTH_MASK) as usize;
        if len == 0 {
            break;
        }

        let start = payload.len();
        payload.extend_from_slice(&source.read_bytes(len)?);
        boundaries.push(start..payload.len());

        if header & CONTINUATION_FLAG == 0 {
            break;
        }
        header = read_header(source)?;
    }

    trace!(
        "decoded string: {} chunks, {} bytes",
        boundaries.len(),
        payload.len()
    );

    // Karakter multi-byte boleh terbelah di batas chunk, jadi decode gabungannya dulu
    let payload = match String::from_utf8(payload) {
        Ok(text) => return Ok(text),
        Err(e) => e.into_bytes(),
    };

    match policy {
        Utf8Policy::Lossy => {
            warn!("invalid UTF-8 in chunked string, replacing invalid sequences");
            Ok(String::from_utf8_lossy(&payload).into_owned())
        }
        Utf8Policy::Empty => {
            let mut result = String::with_capacity(payload.len());
            for range in boundaries {
                match std::str::from_utf8(&payload[range.clone()]) {
                    Ok(chunk) => result.push_str(chunk),
                    Err(_) => warn!(
                        "invalid UTF-8 in chunk at payload offset {}, substituting empty",
                        range.start
                    ),
                }
            }
            Ok(result)
        }
    }
}

/// Decode payload tanpa header (string fixed-length)
pub fn decode_fixed(bytes: Vec<u8>, policy: Utf8Policy) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("invalid UTF-8 in fixed-length string ({:?})", policy);
            match policy {
                Utf8Policy::Empty => String::new(),
                Utf8Policy::Lossy => String::from_utf8_lossy(e.as_bytes()).into_owned(),
            }
        }
    }
}

#[inline(always)]
fn read_header<R: Readable + ?Sized>(source: &mut R) -> Result<u8> {
    Ok(source.read_bytes(1)?[0])
}
