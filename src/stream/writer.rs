//! Binary Writer: façade typed di atas `Writable`
//!
//! Tiap `write_*` = satu encode + satu `write_bytes` ke source.
//! Pertumbuhan source dianggap selalu mungkin; source yang tidak bisa tumbuh
//! melaporkan error-nya sendiri (mis. `CapacityExceeded`).

use crate::config::StreamConfig;
use crate::core::{Clearable, Writable};
use crate::error::Result;
use crate::protocol::{self, ByteOrder, Primitive};

/// Writer untuk source yang bisa ditulis
#[derive(Debug)]
pub struct BinaryWriter<S: Writable> {
    source: S,
    config: StreamConfig,
}

impl<S: Writable> BinaryWriter<S> {
    /// Writer dengan byte order native
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

    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    pub fn seek_to(&mut self, position: u64) -> Result<()> {
        self.source.seek_to(position)
    }

    #[inline(always)]
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.source.write_bytes(bytes)
    }

    /// Tulis primitive dengan byte order instance
    #[inline(always)]
    pub fn write<T: Primitive>(&mut self, value: T) -> Result<()> {
        self.write_with(value, self.config.byte_order)
    }

    /// Tulis primitive dengan byte order override
    #[inline(always)]
    pub fn write_with<T: Primitive>(&mut self, value: T, byte_order: ByteOrder) -> Result<()> {
        self.source.write_bytes(&protocol::encode(value, byte_order))
    }

    /// 0x01 atau 0x00
    #[inline(always)]
    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write(value)
    }

    /// UTF-8 mentah tanpa header; panjang harus diketahui pembaca
    pub fn write_fixed_string(&mut self, text: &str) -> Result<()> {
        self.source.write_bytes(text.as_bytes())
    }

    /// String chunked (self-describing), satu write untuk seluruh chunk
    pub fn write_string(&mut self, text: &str) -> Result<()> {
        self.source.write_bytes(&protocol::encode_string(text))
    }
}

impl<S: Writable + Clearable> BinaryWriter<S> {
    /// Kosongkan source dan kembali ke posisi 0
    pub fn clear(&mut self) -> Result<()> {
        self.source.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MemoryStream;
    use crate::error::BinaryError;

    #[test]
    fn test_position_advances_by_size() {
        let mut writer = BinaryWriter::with_byte_order(MemoryStream::new(), ByteOrder::BigEndian);
        writer.write(1u8).unwrap();
        assert_eq!(writer.position(), 1);
        writer.write(2u16).unwrap();
        assert_eq!(writer.position(), 3);
        writer.write(3i32).unwrap();
        assert_eq!(writer.position(), 7);
        writer.write(4.0f64).unwrap();
        assert_eq!(writer.position(), 15);
        writer.write_bool(true).unwrap();
        assert_eq!(writer.position(), 16);

        let data = writer.into_inner().into_inner();
        assert_eq!(&data[..7], &[1, 0, 2, 0, 0, 0, 3]);
        assert_eq!(data[15], 0x01);
    }

    #[test]
    fn test_write_with_override() {
        let mut writer =
            BinaryWriter::with_byte_order(MemoryStream::new(), ByteOrder::LittleEndian);
        writer.write(0x1234u16).unwrap();
        writer.write_with(0x1234u16, ByteOrder::BigEndian).unwrap();
        assert_eq!(writer.source().data(), &[0x34, 0x12, 0x12, 0x34]);
    }

    #[test]
    fn test_fixed_string_overwrite_after_seek() {
        let mut writer = BinaryWriter::new(MemoryStream::new());
        writer.write_fixed_string("Hello World").unwrap();
        writer.seek_to(6).unwrap();
        writer.write_fixed_string("Tests").unwrap();
        assert_eq!(writer.source().data(), b"Hello Tests");
    }

    #[test]
    fn test_chunked_string_position() {
        let mut writer = BinaryWriter::new(MemoryStream::new());
        writer.write_string("Test String").unwrap();
        assert_eq!(writer.position(), 12);
        writer.write_string("").unwrap();
        assert_eq!(writer.position(), 13);
        assert_eq!(writer.source().data()[12], 0x00);
    }

    #[test]
    fn test_clear() {
        let mut writer = BinaryWriter::new(MemoryStream::new());
        writer.write(7u64).unwrap();
        writer.clear().unwrap();
        assert_eq!(writer.position(), 0);
        assert!(writer.source().is_empty());
    }

    #[test]
    fn test_write_at_max_position_is_rejected() {
        let mut writer = BinaryWriter::new(MemoryStream::new());
        writer.seek_to(u64::MAX - 1).unwrap();

        let err = writer.write(7u32).unwrap_err();
        assert!(matches!(err, BinaryError::CapacityExceeded { .. }));
        assert_eq!(writer.position(), u64::MAX - 1);
        assert!(writer.source().is_empty());
    }
}
