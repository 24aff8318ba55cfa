//! binstream - Endian-aware Binary Reader/Writer
//!
//! Arsitektur:
//! - Core: Byte Source capabilities (memory, file, mmap)
//! - Protocol: Primitive Codec + String Codec chunked (byte-exact)
//! - Stream: façade typed `BinaryReader` / `BinaryWriter` / `BinaryStream`
//!
//! Single-threaded dan blocking. Satu source = satu cursor; akses bersama dari
//! beberapa thread harus dibungkus lock di luar crate ini.
//!
//! ```
//! use binstream::{BinaryReader, BinaryWriter, ByteOrder, MemoryStream};
//!
//! let mut writer = BinaryWriter::with_byte_order(MemoryStream::new(), ByteOrder::BigEndian);
//! writer.write(42u32).unwrap();
//! writer.write_string("Test String").unwrap();
//!
//! let data = writer.into_inner().into_inner();
//! assert_eq!(data.len(), 4 + 12);
//!
//! let source = MemoryStream::with_data(data);
//! let mut reader = BinaryReader::with_byte_order(source, ByteOrder::BigEndian);
//! assert_eq!(reader.read_u32().unwrap(), 42);
//! assert_eq!(reader.read_string().unwrap(), "Test String");
//! assert_eq!(reader.position(), 16);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod protocol;
pub mod stream;

pub use crate::config::StreamConfig;
pub use crate::core::{
    Clearable, FileStream, MemoryStream, MmapStream, Position, Readable, Seekable, Streamable,
    Writable,
};
pub use crate::error::{BinaryError, Result};
pub use crate::protocol::{ByteOrder, Primitive, Utf8Policy};
pub use crate::stream::{BinaryReader, BinaryStream, BinaryWriter};
