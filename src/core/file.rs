//! File-backed Byte Source
//!
//! Posisi mengikuti cursor OS. Read dicek terhadap panjang file dulu,
//! jadi short read tidak pernah memindahkan cursor. Seek ke luar akhir file
//! diizinkan (semantik OS); write berikutnya meng-extend file.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

use log::{debug, trace};

use super::source::{Clearable, Position, Readable, Seekable, Writable};
use crate::error::{BinaryError, Result};

/// Byte Source di atas `std::fs::File`. File ditutup saat drop.
#[derive(Debug)]
pub struct FileStream {
    file: File,
    position: u64,
}

impl FileStream {
    /// Membuka file yang sudah ada untuk dibaca saja
    pub fn open_read<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("Opening {} for reading", path.as_ref().display());
        let file = OpenOptions::new().read(true).open(path)?;
        Self::from_file(file)
    }

    /// Membuka file untuk ditulis saja, dibuat jika belum ada (isi lama tidak di-truncate)
    pub fn open_write<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("Opening {} for writing", path.as_ref().display());
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;
        Self::from_file(file)
    }

    /// Membuka file untuk baca dan tulis, dibuat jika belum ada
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("Opening {} for read/write", path.as_ref().display());
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;
        Self::from_file(file)
    }

    /// Bungkus handle yang sudah terbuka; posisi awal diambil dari cursor OS
    pub fn from_file(mut file: File) -> Result<Self> {
        let position = file.stream_position()?;
        Ok(Self { file, position })
    }

    /// Panjang file saat ini
    pub fn len(&self) -> Result<u64> {
        Ok(self.file.metadata()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Flush data dan metadata ke disk
    pub fn sync(&self) -> Result<()> {
        self.file.sync_all()?;
        Ok(())
    }

    pub fn into_inner(self) -> File {
        self.file
    }

    fn rewind_to(&mut self, position: u64) -> io::Result<()> {
        self.file.seek(SeekFrom::Start(position))?;
        self.position = position;
        Ok(())
    }
}

impl Position for FileStream {
    #[inline(always)]
    fn position(&self) -> u64 {
        self.position
    }
}

impl Seekable for FileStream {
    fn seek_to(&mut self, position: u64) -> Result<()> {
        trace!("file stream seek {} -> {}", self.position, position);
        self.rewind_to(position)?;
        Ok(())
    }
}

impl Readable for FileStream {
    fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        let available =
            usize::try_from(self.len()?.saturating_sub(self.position)).unwrap_or(usize::MAX);
        if count > available {
            return Err(BinaryError::OutOfBounds {
                requested: count,
                available,
            });
        }

        let start = self.position;
        let mut buf = vec![0u8; count];
        match self.file.read_exact(&mut buf) {
            Ok(()) => {
                self.position = start + count as u64;
                Ok(buf)
            }
            Err(e) => {
                // File bisa menyusut di antara cek metadata dan read
                self.rewind_to(start)?;
                if e.kind() == io::ErrorKind::UnexpectedEof {
                    Err(BinaryError::OutOfBounds {
                        requested: count,
                        available: 0,
                    })
                } else {
                    Err(e.into())
                }
            }
        }
    }
}

impl Writable for FileStream {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let start = self.position;
        if let Err(e) = self.file.write_all(bytes) {
            // write_all bisa gagal setelah sebagian byte tertulis
            self.rewind_to(start)?;
            return Err(e.into());
        }
        self.position = start + bytes.len() as u64;
        Ok(())
    }
}

impl Clearable for FileStream {
    fn clear(&mut self) -> Result<()> {
        debug!("Truncating file stream");
        self.file.set_len(0)?;
        self.rewind_to(0)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_file_stream_basic() {
        let dir = TempDir::new("file_stream_basic").unwrap();
        let path = dir.path().join("data.bin");

        let mut stream = FileStream::open(&path).unwrap();
        stream.write_bytes(b"Hello, file!").unwrap();
        assert_eq!(stream.position(), 12);
        assert_eq!(stream.len().unwrap(), 12);

        stream.seek_to(7).unwrap();
        assert_eq!(stream.read_bytes(4).unwrap(), b"file");
        assert_eq!(stream.position(), 11);
    }

    #[test]
    fn test_short_read_keeps_position() {
        let dir = TempDir::new("file_stream_short").unwrap();
        let path = dir.path().join("data.bin");
        std::fs::write(&path, [1u8, 2, 3]).unwrap();

        let mut stream = FileStream::open_read(&path).unwrap();
        stream.seek_to(2).unwrap();
        let err = stream.read_bytes(2).unwrap_err();
        assert!(matches!(
            err,
            BinaryError::OutOfBounds {
                requested: 2,
                available: 1
            }
        ));
        assert_eq!(stream.position(), 2);
        assert_eq!(stream.read_bytes(1).unwrap(), vec![3]);
    }

    #[test]
    fn test_open_read_missing_file() {
        let dir = TempDir::new("file_stream_missing").unwrap();
        let err = FileStream::open_read(dir.path().join("nope.bin")).unwrap_err();
        assert!(matches!(err, BinaryError::Io(_)));
    }

    #[test]
    fn test_open_write_keeps_existing_content() {
        let dir = TempDir::new("file_stream_append").unwrap();
        let path = dir.path().join("data.bin");
        std::fs::write(&path, b"abcdef").unwrap();

        {
            let mut stream = FileStream::open_write(&path).unwrap();
            stream.seek_to(2).unwrap();
            stream.write_bytes(b"XY").unwrap();
            stream.sync().unwrap();
        }

        assert_eq!(std::fs::read(&path).unwrap(), b"abXYef");
    }

    #[test]
    fn test_seek_past_end_extends_on_write() {
        let dir = TempDir::new("file_stream_gap").unwrap();
        let path = dir.path().join("data.bin");

        let mut stream = FileStream::open(&path).unwrap();
        stream.seek_to(3).unwrap();
        stream.write_bytes(&[0xEE]).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), vec![0, 0, 0, 0xEE]);
    }

    #[test]
    fn test_clear_truncates() {
        let dir = TempDir::new("file_stream_clear").unwrap();
        let path = dir.path().join("data.bin");

        let mut stream = FileStream::open(&path).unwrap();
        stream.write_bytes(&[1, 2, 3, 4]).unwrap();
        stream.clear().unwrap();
        assert_eq!(stream.position(), 0);
        assert!(stream.is_empty().unwrap());
    }

    #[test]
    fn test_write_error_keeps_position() {
        let dir = TempDir::new("file_stream_write_err").unwrap();
        let path = dir.path().join("data.bin");
        std::fs::write(&path, [1, 2, 3, 4]).unwrap();

        let mut stream = FileStream::open_read(&path).unwrap();
        stream.seek_to(1).unwrap();
        let err = stream.write_bytes(&[9, 9]).unwrap_err();
        assert!(matches!(err, BinaryError::Io(_)));
        assert_eq!(stream.position(), 1);

        // Cursor masih sinkron dengan handle
        assert_eq!(stream.read_bytes(2).unwrap(), vec![2, 3]);
        assert_eq!(stream.position(), 3);
        assert_eq!(std::fs::read(&path).unwrap(), vec![1, 2, 3, 4]);
    }
}
