//! Protocol Layer: Primitive Codec dan String Codec
//!
//! Prinsip desain:
//! - Pure: konversi nilai <-> byte tanpa state
//! - Byte-exact: layout wire di bawah ini wajib identik di semua platform
//! - Explicit byte order: tidak ada default tersembunyi di codec
//!
//! | Elemen            | Layout                                               |
//! |-------------------|------------------------------------------------------|
//! | Integer/float     | `T::SIZE` byte sesuai `ByteOrder` aktif              |
//! | Boolean           | 1 byte: `0x01` / `0x00`                              |
//! | String fixed      | UTF-8 mentah, panjang diketahui di luar, tanpa header |
//! | String chunked    | chunk = header (bit7 continuation, bit0-6 panjang) + payload |

mod byte_order;
mod primitive;
mod string;

pub use byte_order::ByteOrder;
pub use primitive::{decode, encode, Primitive};
pub use string::{
    decode_fixed, decode_string, encode_string, encoded_len, Utf8Policy, CONTINUATION_FLAG,
    LENGTH_MASK, MAX_CHUNK_LEN,
};
