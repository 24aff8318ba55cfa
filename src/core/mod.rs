//! Core module: Byte Source capabilities dan backend konkret
//!
//! Prinsip desain:
//! - Position dimiliki source, bukan Reader/Writer
//! - All-or-nothing read: gagal berarti cursor tidak bergerak
//! - Write selalu di cursor, source tumbuh bila perlu (kecuali mmap: kapasitas tetap)

mod file;
mod memory;
mod mmap_storage;
mod source;

pub use file::FileStream;
pub use memory::MemoryStream;
pub use mmap_storage::MmapStream;
pub use source::{Clearable, Position, Readable, Seekable, Streamable, Writable};
