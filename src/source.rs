//! Byte-source seam between the decoder and the filesystem.
//!
//! The decoder core is a pure function over bytes. Callers that start from a
//! path go through [`ByteSource`], a narrow read-everything contract that
//! keeps filesystem specifics (and test fakes) outside the core.

use std::io;
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::record::CertificateRecord;

/// Anything that can produce the full contents of a named input.
pub trait ByteSource {
    /// Read every byte behind `path`.
    fn read_all(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// The standard filesystem source.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileSource;

impl ByteSource for FileSource {
    fn read_all(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

/// Read one PEM certificate file through `source` and decode it.
///
/// Read failures surface as [`DecodeError::Io`]; everything else follows
/// [`decode`](crate::decode).
pub fn load_certificate<S, P>(source: &S, path: P) -> Result<CertificateRecord>
where
    S: ByteSource,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let contents = source.read_all(path)?;
    debug!("read {} bytes from {}", contents.len(), path.display());
    crate::decode(&contents)
}
