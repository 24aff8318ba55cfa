//! Primitive Codec: nilai fixed-width <-> byte
//!
//! Prinsip desain:
//! - Pure: tidak ada I/O, tidak ada state
//! - Explicit: tiap lebar punya fungsi decode sendiri (shift/mask via `byteorder`),
//!   tidak ada reinterpretasi memory
//! - Ukuran tetap: `T::SIZE` byte, tidak lebih tidak kurang

use byteorder::{BigEndian, ByteOrder as Endian, LittleEndian};

use super::byte_order::ByteOrder;
use crate::error::{BinaryError, Result};

/// Nilai fixed-width yang bisa di-encode/decode dengan byte order apa pun
///
/// `encode_into` dan `decode_from` mengasumsikan slice tepat `SIZE` byte;
/// gunakan [`encode`]/[`decode`] untuk versi yang dicek.
pub trait Primitive: Copy + Sized {
    /// Jumlah byte di wire
    const SIZE: usize;

    fn encode_into(self, order: ByteOrder, out: &mut [u8]);

    fn decode_from(bytes: &[u8], order: ByteOrder) -> Self;
}

macro_rules! impl_primitive {
    ($ty:ty, $size:expr, $read:ident, $write:ident) => {
        impl Primitive for $ty {
            const SIZE: usize = $size;

            #[inline(always)]
            fn encode_into(self, order: ByteOrder, out: &mut [u8]) {
                match order {
                    ByteOrder::BigEndian => BigEndian::$write(out, self),
                    ByteOrder::LittleEndian => LittleEndian::$write(out, self),
                }
            }

            #[inline(always)]
            fn decode_from(bytes: &[u8], order: ByteOrder) -> Self {
                match order {
                    ByteOrder::BigEndian => BigEndian::$read(bytes),
                    ByteOrder::LittleEndian => LittleEndian::$read(bytes),
                }
            }
        }
    };
}

impl_primitive!(u16, 2, read_u16, write_u16);
impl_primitive!(i16, 2, read_i16, write_i16);
impl_primitive!(u32, 4, read_u32, write_u32);
impl_primitive!(i32, 4, read_i32, write_i32);
impl_primitive!(u64, 8, read_u64, write_u64);
impl_primitive!(i64, 8, read_i64, write_i64);
impl_primitive!(f32, 4, read_f32, write_f32);
impl_primitive!(f64, 8, read_f64, write_f64);

// Single byte: byte order tidak relevan
impl Primitive for u8 {
    const SIZE: usize = 1;

    #[inline(always)]
    fn encode_into(self, _order: ByteOrder, out: &mut [u8]) {
        out[0] = self;
    }

    #[inline(always)]
    fn decode_from(bytes: &[u8], _order: ByteOrder) -> Self {
        bytes[0]
    }
}

impl Primitive for i8 {
    const SIZE: usize = 1;

    #[inline(always)]
    fn encode_into(self, _order: ByteOrder, out: &mut [u8]) {
        out[0] = self as u8;
    }

    #[inline(always)]
    fn decode_from(bytes: &[u8], _order: ByteOrder) -> Self {
        bytes[0] as i8
    }
}

/// `true` -> 0x01, `false` -> 0x00. Saat decode, byte non-zero apa pun adalah `true`.
impl Primitive for bool {
    const SIZE: usize = 1;

    #[inline(always)]
    fn encode_into(self, _order: ByteOrder, out: &mut [u8]) {
        out[0] = self as u8;
    }

    #[inline(always)]
    fn decode_from(bytes: &[u8], _order: ByteOrder) -> Self {
        bytes[0] != 0
    }
}

/// Encode `value` menjadi tepat `T::SIZE` byte
#[inline(always)]
pub fn encode<T: Primitive>(value: T, order: ByteOrder) -> Vec<u8> {
    let mut out = vec![0u8; T::SIZE];
    value.encode_into(order, &mut out);
    out
}

/// Decode `T` dari slice yang panjangnya harus tepat `T::SIZE`
#[inline(always)]
pub fn decode<T: Primitive>(bytes: &[u8], order: ByteOrder) -> Result<T> {
    if bytes.len() != T::SIZE {
        return Err(BinaryError::SizeMismatch {
            expected: T::SIZE,
            actual: bytes.len(),
        });
    }
    Ok(T::decode_from(bytes, order))
}
