//! Memory-Mapped File Byte Source
//!
//! File di-mmap dengan kapasitas tetap:
//! - Zero-copy: read/write langsung ke page cache
//! - Fixed capacity: source tidak bisa tumbuh, write yang melewati
//!   kapasitas gagal dengan `CapacityExceeded` tanpa menulis apa pun
//! - Persistence: `flush()` menyimpan isi mapping ke disk

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use log::{debug, trace};
use memmap2::{MmapMut, MmapOptions};

use super::source::{Clearable, Position, Readable, Seekable, Writable};
use crate::error::{BinaryError, Result};

/// Mmap-backed Byte Source dengan kapasitas tetap
pub struct MmapStream {
    mmap: MmapMut,
    capacity: usize,
    position: u64,
}

impl MmapStream {
    /// Membuat atau membuka file lalu me-map tepat `capacity` byte
    ///
    /// # Arguments
    /// * `path` - Path ke file storage
    /// * `capacity` - Kapasitas dalam bytes (harus > 0); panjang file di-set ke nilai ini
    pub fn open<P: AsRef<Path>>(path: P, capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "mmap capacity must be greater than zero",
            )
            .into());
        }

        debug!(
            "Mapping {} with capacity {} bytes",
            path.as_ref().display(),
            capacity
        );

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;

        file.set_len(capacity as u64)?;

        // SAFETY: File dibuka read/write dan panjangnya sudah di-set ke `capacity`.
        // Mapping dimiliki eksklusif oleh stream ini.
        let mmap = unsafe { MmapOptions::new().len(capacity).map_mut(&file)? };

        Ok(Self {
            mmap,
            capacity,
            position: 0,
        })
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Seluruh isi mapping
    #[inline(always)]
    pub fn as_slice(&self) -> &[u8] {
        &self.mmap[..]
    }

    /// Simpan perubahan ke disk (synchronous)
    pub fn flush(&self) -> Result<()> {
        self.mmap.flush()?;
        Ok(())
    }
}

impl Position for MmapStream {
    #[inline(always)]
    fn position(&self) -> u64 {
        self.position
    }
}

impl Seekable for MmapStream {
    fn seek_to(&mut self, position: u64) -> Result<()> {
        if position > self.capacity as u64 {
            return Err(BinaryError::SeekOutOfRange {
                position,
                limit: self.capacity as u64,
            });
        }
        trace!("mmap stream seek {} -> {}", self.position, position);
        self.position = position;
        Ok(())
    }
}

impl Readable for MmapStream {
    #[inline(always)]
    fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        let start = self.position as usize;
        let available = self.capacity - start;
        if count > available {
            return Err(BinaryError::OutOfBounds {
                requested: count,
                available,
            });
        }

        let bytes = self.mmap[start..start + count].to_vec();
        self.position += count as u64;
        Ok(bytes)
    }
}

impl Writable for MmapStream {
    #[inline(always)]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let start = self.position as usize;
        let end = start + bytes.len();
        if end > self.capacity {
            return Err(BinaryError::CapacityExceeded {
                requested: end as u64,
                capacity: self.capacity as u64,
            });
        }

        self.mmap[start..end].copy_from_slice(bytes);
        self.position = end as u64;
        Ok(())
    }
}

/// Mapping tidak bisa menyusut: isi di-nol-kan dan cursor kembali ke 0
impl Clearable for MmapStream {
    fn clear(&mut self) -> Result<()> {
        debug!("Zeroing mmap stream ({} bytes)", self.capacity);
        self.mmap.fill(0);
        self.position = 0;
        Ok(())
    }
}
