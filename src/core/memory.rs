//! In-memory Byte Source
//!
//! Buffer `Vec<u8>` dengan cursor sendiri. Seek ke luar buffer diizinkan;
//! write berikutnya mengisi gap dengan nol sebelum menyalin data baru.

use log::trace;

use super::source::{Clearable, Position, Readable, Seekable, Writable};
use crate::error::{BinaryError, Result};

/// Batas panjang `Vec<u8>`
const MAX_LEN: usize = isize::MAX as usize;

/// Memory stream yang bisa dibaca dan ditulis
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStream {
    data: Vec<u8>,
    position: u64,
}

impl MemoryStream {
    /// Stream kosong, posisi 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Stream dengan isi awal, posisi 0
    pub fn with_data(data: Vec<u8>) -> Self {
        Self { data, position: 0 }
    }

    /// Isi buffer saat ini
    #[inline(always)]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Byte yang tersisa setelah cursor (0 jika cursor di luar buffer)
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        match usize::try_from(self.position) {
            Ok(start) => self.data.len().saturating_sub(start),
            Err(_) => 0,
        }
    }
}

impl From<Vec<u8>> for MemoryStream {
    fn from(data: Vec<u8>) -> Self {
        MemoryStream::with_data(data)
    }
}

impl Position for MemoryStream {
    #[inline(always)]
    fn position(&self) -> u64 {
        self.position
    }
}

impl Seekable for MemoryStream {
    fn seek_to(&mut self, position: u64) -> Result<()> {
        trace!("memory stream seek {} -> {}", self.position, position);
        self.position = position;
        Ok(())
    }
}

impl Readable for MemoryStream {
    #[inline(always)]
    fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        let available = self.remaining();
        if count > available {
            return Err(BinaryError::OutOfBounds {
                requested: count,
                available,
            });
        }
        if count == 0 {
            return Ok(Vec::new());
        }

        // count > 0 dan count <= remaining, jadi position < len
        let start = self.position as usize;
        let bytes = self.data[start..start + count].to_vec();
        self.position += count as u64;
        Ok(bytes)
    }
}

impl Writable for MemoryStream {
    #[inline(always)]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.is_empty() {
            return Ok(());
        }
        let exceeded = || BinaryError::CapacityExceeded {
            requested: self.position.saturating_add(bytes.len() as u64),
            capacity: MAX_LEN as u64,
        };
        let start = usize::try_from(self.position).map_err(|_| exceeded())?;
        let end = start
            .checked_add(bytes.len())
            .filter(|end| *end <= MAX_LEN)
            .ok_or_else(exceeded)?;

        // Zero-fill gap antara akhir lama dan posisi tulis
        if end > self.data.len() {
            self.data
                .try_reserve(end - self.data.len())
                .map_err(|_| exceeded())?;
            self.data.resize(end, 0);
        }
        self.data[start..end].copy_from_slice(bytes);
        self.position = end as u64;
        Ok(())
    }
}

impl Clearable for MemoryStream {
    fn clear(&mut self) -> Result<()> {
        self.data.clear();
        self.position = 0;
        Ok(())
    }
}
