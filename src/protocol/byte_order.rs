//! Byte order yang dipakai oleh Reader/Writer
//!
//! Dipilih sekali saat konstruksi, tidak pernah berubah diam-diam.
//! `ByteOrder::native()` adalah satu-satunya probe platform; tidak ada global state.

/// Layout byte untuk nilai multi-byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// MSB duluan
    BigEndian,
    /// LSB duluan
    LittleEndian,
}

impl ByteOrder {
    /// Byte order host, ditentukan saat compile
    #[inline(always)]
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            ByteOrder::BigEndian
        } else {
            ByteOrder::LittleEndian
        }
    }

    #[inline(always)]
    pub fn is_native(self) -> bool {
        self == Self::native()
    }

    /// Kebalikan dari order ini
    #[inline(always)]
    pub fn reversed(self) -> Self {
        match self {
            ByteOrder::BigEndian => ByteOrder::LittleEndian,
            ByteOrder::LittleEndian => ByteOrder::BigEndian,
        }
    }
}

impl Default for ByteOrder {
    fn default() -> Self {
        Self::native()
    }
}
