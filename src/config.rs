//! Konfigurasi per Reader/Writer
//!
//! Dipilih sekali saat konstruksi façade dan tidak berubah sesudahnya.

use crate::protocol::{ByteOrder, Utf8Policy};

/// Konfigurasi façade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamConfig {
    /// Byte order default untuk semua nilai multi-byte
    pub byte_order: ByteOrder,
    /// Substitusi untuk payload string yang bukan UTF-8 valid
    pub utf8_policy: Utf8Policy,
}

impl StreamConfig {
    pub fn new(byte_order: ByteOrder) -> Self {
        Self {
            byte_order,
            ..Self::default()
        }
    }

    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    pub fn with_utf8_policy(mut self, utf8_policy: Utf8Policy) -> Self {
        self.utf8_policy = utf8_policy;
        self
    }
}
