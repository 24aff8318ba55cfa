//! Binary Stream: satu façade untuk source yang bisa dibaca dan ditulis
//!
//! Reader dan writer berbagi satu cursor dan satu byte order.
//! API typed lengkap tersedia lewat `reader()` / `writer()` (pinjaman, tanpa copy).

use crate::config::StreamConfig;
use crate::core::{Clearable, Streamable};
use crate::error::Result;
use crate::protocol::{ByteOrder, Primitive};

use super::reader::BinaryReader;
use super::writer::BinaryWriter;

/// Stream baca/tulis di atas satu source
#[derive(Debug)]
pub struct BinaryStream<S: Streamable> {
    source: S,
    config: StreamConfig,
}

impl<S: Streamable> BinaryStream<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, StreamConfig::default())
    }

    pub fn with_byte_order(source: S, byte_order: ByteOrder) -> Self {
        Self::with_config(source, StreamConfig::new(byte_order))
    }

    pub fn with_config(source: S, config: StreamConfig) -> Self {
        Self { source, config }
    }

    #[inline(always)]
    pub fn position(&self) -> u64 {
        self.source.position()
    }

    #[inline(always)]
    pub fn byte_order(&self) -> ByteOrder {
        self.config.byte_order
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    /// Reader pinjaman dengan konfigurasi yang sama
    pub fn reader(&mut self) -> BinaryReader<&mut S> {
        BinaryReader::with_config(&mut self.source, self.config)
    }

    /// Writer pinjaman dengan konfigurasi yang sama
    pub fn writer(&mut self) -> BinaryWriter<&mut S> {
        BinaryWriter::with_config(&mut self.source, self.config)
    }

    pub fn seek_to(&mut self, position: u64) -> Result<()> {
        self.source.seek_to(position)
    }

    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        self.source.read_bytes(count)
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.source.write_bytes(bytes)
    }

    #[inline(always)]
    pub fn read<T: Primitive>(&mut self) -> Result<T> {
        self.reader().read()
    }

    #[inline(always)]
    pub fn read_with<T: Primitive>(&mut self, byte_order: ByteOrder) -> Result<T> {
        self.reader().read_with(byte_order)
    }

    #[inline(always)]
    pub fn write<T: Primitive>(&mut self, value: T) -> Result<()> {
        self.writer().write(value)
    }

    #[inline(always)]
    pub fn write_with<T: Primitive>(&mut self, value: T, byte_order: ByteOrder) -> Result<()> {
        self.writer().write_with(value, byte_order)
    }

    pub fn read_string(&mut self) -> Result<String> {
        self.reader().read_string()
    }

    pub fn read_fixed_string(&mut self, length: usize) -> Result<String> {
        self.reader().read_fixed_string(length)
    }

    pub fn write_string(&mut self, text: &str) -> Result<()> {
        self.writer().write_string(text)
    }

    pub fn write_fixed_string(&mut self, text: &str) -> Result<()> {
        self.writer().write_fixed_string(text)
    }
}

impl<S: Streamable + Clearable> BinaryStream<S> {
    pub fn clear(&mut self) -> Result<()> {
        self.source.clear()
    }
}
