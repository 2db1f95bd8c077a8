//! Random access to raw sequence files.
//!
//! A raw sequence file is what [`extract`](crate::extract::extract) writes:
//! the bases of a sequence with no header and no line breaks, so base `i`
//! lives at byte offset `i`. Intervals are 0-based and half open.

use log::debug;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

/// Strand to read an interval from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strand
{
    Forward,
    Reverse,
}

impl Strand
{
    /// `-` is the reverse strand, anything else forward (BED convention).
    pub fn from_symbol(symbol: &str) -> Self
    {
        if symbol == "-"
        {
            Strand::Reverse
        }
        else
        {
            Strand::Forward
        }
    }
}

/// A raw sequence file opened for interval fetches.
///
/// # Example
///
/// ```no_run
/// use fa2seq::raw::{RawSeqFile, Strand};
/// use std::path::Path;
///
/// let mut chr1 = RawSeqFile::from_path(Path::new("chr1.seq")).unwrap();
/// let exon = chr1.get(1000, 1200, Strand::Reverse).unwrap();
/// ```
pub struct RawSeqFile<R: Read + Seek>
{
    inner: R,
    len: u64,
}

impl RawSeqFile<File>
{
    pub fn from_path(path: &Path) -> io::Result<Self>
    {
        let file = File::open(path).map_err(|e| crate::input::with_path(e, path))?;
        Self::new(file)
    }
}

impl<R: Read + Seek> RawSeqFile<R>
{
    pub fn new(mut inner: R) -> io::Result<Self>
    {
        let len = inner.seek(SeekFrom::End(0))?;
        Ok(RawSeqFile { inner, len })
    }

    /// Sequence length in bases.
    pub fn len(&self) -> u64
    {
        self.len
    }

    pub fn is_empty(&self) -> bool
    {
        self.len == 0
    }

    /// Fetch bases `[start0, end1)`.
    ///
    /// # Arguments
    ///
    /// * `start0` - 0-based start
    /// * `end1` - exclusive end, at most `len()`
    /// * `strand` - `Reverse` returns the reverse complement of the interval
    ///
    /// # Returns
    ///
    /// * `Ok(bases)` - The requested interval
    /// * `Err(io::Error)` - `InvalidInput` for an inverted or out of range
    ///   interval, or any read error
    pub fn get(&mut self, start0: u64, end1: u64, strand: Strand) -> io::Result<Vec<u8>>
    {
        if start0 > end1
        {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Start {} is after end {}", start0, end1),
            ));
        }
        if end1 > self.len
        {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("End {} beyond sequence length {}", end1, self.len),
            ));
        }

        debug!("fetching [{}, {}) {:?}", start0, end1, strand);
        let mut seq = vec![0u8; (end1 - start0) as usize];
        self.inner.seek(SeekFrom::Start(start0))?;
        self.inner.read_exact(&mut seq)?;

        match strand
        {
            Strand::Forward => Ok(seq),
            Strand::Reverse => Ok(reverse_complement(&seq)),
        }
    }
}

/// Reverse complement of a nucleotide sequence.
///
/// Case is kept; `U` pairs with `A`. Bytes that are not nucleotide codes
/// (e.g. `N`, gaps) are only reversed.
pub fn reverse_complement(seq: &[u8]) -> Vec<u8>
{
    seq.iter().rev().map(|&b| complement(b)).collect()
}

fn complement(base: u8) -> u8
{
    match base
    {
        b'A' => b'T',
        b'T' | b'U' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        b'a' => b't',
        b't' | b'u' => b'a',
        b'c' => b'g',
        b'g' => b'c',
        other => other,
    }
}
