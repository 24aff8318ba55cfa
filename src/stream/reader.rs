//! Binary Reader: façade typed di atas `Readable`
//!
//! Tiap `read_*` = satu `read_bytes` ke source + satu decode.
//! Satu-satunya kegagalan data adalah `OutOfBounds`, diteruskan tanpa diubah.

use crate::config::StreamConfig;
use crate::core::Readable;
use crate::error::Result;
use crate::protocol::{self, ByteOrder, Primitive};

macro_rules! typed_reads {
    ($($ty:ty => $read:ident, $read_with:ident;)*) => {
        $(
            #[doc = concat!("Baca `", stringify!($ty), "` dengan byte order instance")]
            #[inline(always)]
            pub fn $read(&mut self) -> Result<$ty> {
                self.read::<$ty>()
            }

            #[doc = concat!("Baca `", stringify!($ty), "` dengan byte order yang diberikan")]
            #[inline(always)]
            pub fn $read_with(&mut self, byte_order: ByteOrder) -> Result<$ty> {
                self.read_with::<$ty>(byte_order)
            }
        )*
    };
}

/// Reader untuk source yang bisa dibaca
#[derive(Debug)]
pub struct BinaryReader<S: Readable> {
    source: S,
    config: StreamConfig,
}

impl<S: Readable> BinaryReader<S> {
    /// Reader dengan byte order native
    pub fn new(source: S) -> Self {
        Self::with_config(source, StreamConfig::default())
    }

    pub fn with_byte_order(source: S, byte_order: ByteOrder) -> Self {
        Self::with_config(source, StreamConfig::new(byte_order))
    }

    pub fn with_config(source: S, config: StreamConfig) -> Self {
        Self { source, config }
    }

    /// Posisi source saat ini (tidak di-cache)
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

    /// Baca `count` byte mentah
    #[inline(always)]
    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        self.source.read_bytes(count)
    }

    /// Baca primitive apa pun dengan byte order instance
    #[inline(always)]
    pub fn read<T: Primitive>(&mut self) -> Result<T> {
        self.read_with(self.config.byte_order)
    }

    /// Baca primitive apa pun dengan byte order override
    #[inline(always)]
    pub fn read_with<T: Primitive>(&mut self, byte_order: ByteOrder) -> Result<T> {
        let bytes = self.source.read_bytes(T::SIZE)?;
        protocol::decode(&bytes, byte_order)
    }

    #[inline(always)]
    pub fn read_u8(&mut self) -> Result<u8> {
        self.read::<u8>()
    }

    #[inline(always)]
    pub fn read_i8(&mut self) -> Result<i8> {
        self.read::<i8>()
    }

    /// Byte non-zero dibaca sebagai `true`
    #[inline(always)]
    pub fn read_bool(&mut self) -> Result<bool> {
        self.read::<bool>()
    }

    typed_reads! {
        u16 => read_u16, read_u16_with;
        i16 => read_i16, read_i16_with;
        u32 => read_u32, read_u32_with;
        i32 => read_i32, read_i32_with;
        u64 => read_u64, read_u64_with;
        i64 => read_i64, read_i64_with;
        f32 => read_f32, read_f32_with;
        f64 => read_f64, read_f64_with;
    }

    /// Baca string chunked (self-describing)
    pub fn read_string(&mut self) -> Result<String> {
        protocol::decode_string(&mut self.source, self.config.utf8_policy)
    }

    /// Baca tepat `length` byte UTF-8 tanpa header
    pub fn read_fixed_string(&mut self, length: usize) -> Result<String> {
        let bytes = self.source.read_bytes(length)?;
        Ok(protocol::decode_fixed(bytes, self.config.utf8_policy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MemoryStream, Position};

    #[test]
    fn test_sequential_u8_then_out_of_bounds() {
        let mut reader = BinaryReader::new(MemoryStream::with_data(vec![4, 5, 6]));
        assert_eq!(reader.read_u8().unwrap(), 4);
        assert_eq!(reader.read_u8().unwrap(), 5);
        assert_eq!(reader.read_u8().unwrap(), 6);
        assert!(reader.read_u8().unwrap_err().is_out_of_bounds());
        assert_eq!(reader.position(), 3);
    }

    #[test]
    fn test_override_byte_order() {
        let data = vec![0xFF, 0x7F];
        let mut reader =
            BinaryReader::with_byte_order(MemoryStream::with_data(data), ByteOrder::LittleEndian);
        assert_eq!(reader.read_i16().unwrap(), i16::MAX);

        reader.seek_to(0).unwrap();
        assert_eq!(reader.read_i16_with(ByteOrder::BigEndian).unwrap(), -129);
        assert_eq!(reader.byte_order(), ByteOrder::LittleEndian);
    }

    #[test]
    fn test_failed_read_keeps_position() {
        let mut reader = BinaryReader::with_byte_order(
            MemoryStream::with_data(vec![1, 2, 3]),
            ByteOrder::BigEndian,
        );
        assert_eq!(reader.read_u8().unwrap(), 1);
        assert!(reader.read_u32().unwrap_err().is_out_of_bounds());
        assert_eq!(reader.position(), 1);
        assert_eq!(reader.read_u16().unwrap(), 0x0203);
    }

    #[test]
    fn test_read_fixed_string_after_seek() {
        let mut reader = BinaryReader::new(MemoryStream::with_data(b"Hello Tests".to_vec()));
        reader.seek_to(6).unwrap();
        assert_eq!(reader.read_fixed_string(5).unwrap(), "Tests");
        assert_eq!(reader.position(), 11);
    }

    #[test]
    fn test_borrowed_source() {
        let mut stream = MemoryStream::with_data(vec![0x00, 0x00, 0x80, 0x3F, 0x01]);
        {
            let mut reader = BinaryReader::with_byte_order(&mut stream, ByteOrder::LittleEndian);
            assert_eq!(reader.read_f32().unwrap(), 1.0);
            assert!(reader.read_bool().unwrap());
        }
        assert_eq!(stream.position(), 5);
    }
}
