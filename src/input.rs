//! Opening of FASTA input, plain or gzip compressed.
//!
//! Compression is detected from the first two bytes of the stream rather than
//! the file extension, so `sample.fa.gz` and a gzip file named `sample.fa`
//! are both decompressed. Multi-member streams (including BGZF) are read to
//! the end.

use flate2::bufread::MultiGzDecoder;
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// gzip magic numbers
const GZIP_ID1: u8 = 0x1f;
const GZIP_ID2: u8 = 0x8b;

/// Open `path` for line reading, decompressing gzip input transparently.
///
/// # Errors
///
/// The error keeps the kind reported by the OS (`NotFound`,
/// `PermissionDenied`, ...) and names the path in its message.
pub fn reader_from_path(path: &Path) -> io::Result<Box<dyn BufRead>>
{
    let file = File::open(path).map_err(|e| with_path(e, path))?;
    let reader = decompressing(BufReader::new(file)).map_err(|e| with_path(e, path))?;
    Ok(reader)
}

/// Wrap `reader` in a gzip decoder if its buffered head carries the gzip magic.
pub fn decompressing<'a, R: BufRead + 'a>(mut reader: R) -> io::Result<Box<dyn BufRead + 'a>>
{
    if is_gzip(&mut reader)?
    {
        debug!("gzip magic found, decompressing input");
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(reader))))
    }
    else
    {
        Ok(Box::new(reader))
    }
}

/// Peek at the buffered head of `reader` without consuming it.
pub fn is_gzip<R: BufRead>(reader: &mut R) -> io::Result<bool>
{
    let head = reader.fill_buf()?;
    Ok(head.len() >= 2 && head[0] == GZIP_ID1 && head[1] == GZIP_ID2)
}

pub(crate) fn with_path(e: io::Error, path: &Path) -> io::Error
{
    io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
}
