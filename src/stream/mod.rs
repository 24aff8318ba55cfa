//! Stream Layer: façade Reader / Writer / Stream
//!
//! Prinsip desain:
//! - Tidak ada state selain source dan konfigurasi
//! - Posisi selalu dibaca dari source, tidak pernah di-cache
//! - Satu operasi typed = satu read/write ke source

mod binary_stream;
mod reader;
mod writer;

pub use binary_stream::BinaryStream;
pub use reader::BinaryReader;
pub use writer::BinaryWriter;
