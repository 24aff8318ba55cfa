//! Byte Source capabilities
//!
//! Empat kapabilitas yang bisa dikomposisi:
//! - `Position`: posisi cursor saat ini
//! - `Seekable`: pindahkan cursor
//! - `Readable`: baca tepat N byte (all-or-nothing)
//! - `Writable`: tulis byte di cursor, tumbuh jika perlu
//!
//! Reader butuh {position, seek, read}, Writer butuh {position, seek, write}.
//! Source yang bisa keduanya otomatis `Streamable`.

use crate::error::Result;

/// Cursor offset milik source
pub trait Position {
    fn position(&self) -> u64;
}

pub trait Seekable: Position {
    /// Pindahkan cursor ke `position`.
    ///
    /// Boleh menerima posisi di luar extent (ditumbuhkan saat write berikutnya)
    /// atau menolaknya dengan `SeekOutOfRange`; tiap backend mendokumentasikan pilihannya.
    fn seek_to(&mut self, position: u64) -> Result<()>;
}

pub trait Readable: Seekable {
    /// Baca tepat `count` byte dan majukan cursor sebanyak `count`.
    ///
    /// Jika byte yang tersisa kurang, gagal dengan `OutOfBounds` dan cursor tidak bergerak.
    fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>>;
}

pub trait Writable: Seekable {
    /// Tulis di cursor, overwrite byte lama, extend source bila melewati akhir.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()>;
}

/// Source yang bisa dibaca dan ditulis
pub trait Streamable: Readable + Writable {}

impl<T: Readable + Writable> Streamable for T {}

/// Source yang bisa dikosongkan: panjang jadi 0, cursor kembali ke 0
pub trait Clearable {
    fn clear(&mut self) -> Result<()>;
}

// Façade boleh meminjam source, bukan hanya memilikinya
impl<S: Position + ?Sized> Position for &mut S {
    #[inline(always)]
    fn position(&self) -> u64 {
        (**self).position()
    }
}

impl<S: Seekable + ?Sized> Seekable for &mut S {
    #[inline(always)]
    fn seek_to(&mut self, position: u64) -> Result<()> {
        (**self).seek_to(position)
    }
}

impl<S: Readable + ?Sized> Readable for &mut S {
    #[inline(always)]
    fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        (**self).read_bytes(count)
    }
}

impl<S: Writable + ?Sized> Writable for &mut S {
    #[inline(always)]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).write_bytes(bytes)
    }
}

impl<S: Clearable + ?Sized> Clearable for &mut S {
    #[inline(always)]
    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }
}
