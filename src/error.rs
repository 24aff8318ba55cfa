//! Error taxonomy untuk semua layer (source, codec, façade)
//!
//! Satu-satunya kegagalan data saat membaca adalah `OutOfBounds`.
//! Error lain berasal dari backend (seek ditolak, kapasitas penuh, I/O).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BinaryError>;

#[derive(Error, Debug)]
pub enum BinaryError {
    /// Source punya lebih sedikit byte daripada yang diminta
    #[error("Out of bounds: requested {requested} bytes, {available} available")]
    OutOfBounds { requested: usize, available: usize },
    /// Backend menolak seek di luar extent-nya
    #[error("Seek out of range: position {position} exceeds limit {limit}")]
    SeekOutOfRange { position: u64, limit: u64 },
    /// Backend dengan ukuran tetap tidak bisa tumbuh
    #[error("Capacity exceeded: write needs {requested} bytes, capacity is {capacity}")]
    CapacityExceeded { requested: u64, capacity: u64 },
    /// Slice yang diberikan ke decoder tidak sama dengan ukuran tipe
    #[error("Size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BinaryError {
    /// `true` untuk short read, kondisi yang boleh dipakai caller sebagai "end of data"
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, BinaryError::OutOfBounds { .. })
    }
}
