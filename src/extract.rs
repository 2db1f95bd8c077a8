//! FASTA to raw sequence extraction.
//!
//! Every line that is neither blank nor a header (`>` as its first
//! non-whitespace byte) is trimmed and appended to the output without any
//! separator. Records are not told apart: a file with several headers yields
//! one sequence holding all of their lines in input order.

use crate::input::{reader_from_path, with_path};
use log::{debug, info};
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

/// Counters gathered while scanning one input stream.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats
{
    /// Sum of the trimmed lengths of all emitted lines, in bytes
    pub total_length: u64,
    /// Header lines skipped
    pub headers: u64,
    /// Lines written to the output
    pub sequence_lines: u64,
}

/// Result of extracting one file.
///
/// Displays as `identifier<TAB>total_length`, the line the binary prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary
{
    pub identifier: String,
    pub stats: Stats,
}

impl Summary
{
    pub fn total_length(&self) -> u64
    {
        self.stats.total_length
    }
}

impl fmt::Display for Summary
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}\t{}", self.identifier, self.stats.total_length)
    }
}

/// Extract the raw sequence of `input` into `output`.
///
/// The input is opened before the output is created, so a missing input
/// leaves no output file behind. The output is created or truncated. If a
/// write fails midway the partial output is left as is.
///
/// # Arguments
///
/// * `input` - FASTA file, plain or gzip compressed
/// * `output` - Raw sequence file to write
///
/// # Returns
///
/// * `Ok(summary)` - Identifier derived from `input` and the scan counters
/// * `Err(io::Error)` - `NotFound`/`PermissionDenied` etc. as reported by the OS
///
/// # Example
///
/// ```no_run
/// use fa2seq::extract::extract;
/// use std::path::Path;
///
/// let summary = extract(Path::new("chr1.fa"), Path::new("chr1.seq")).unwrap();
/// println!("{}", summary);
/// ```
pub fn extract(input: &Path, output: &Path) -> io::Result<Summary>
{
    let mut reader = reader_from_path(input)?;
    let file = File::create(output).map_err(|e| with_path(e, output))?;
    let mut writer = BufWriter::new(NamedWriter { inner: file, path: output });

    let stats = extract_stream(&mut reader, &mut writer)?;
    writer.flush()?;

    let identifier = identifier_from_path(input);
    info!(
        "{}: {} bases from {} lines, {} header(s) skipped",
        input.display(),
        stats.total_length,
        stats.sequence_lines,
        stats.headers
    );
    if stats.headers > 1
    {
        debug!("{} records concatenated into {}", stats.headers, output.display());
    }
    Ok(Summary { identifier, stats })
}

/// Puts the output path into every write error.
struct NamedWriter<'a, W: Write>
{
    inner: W,
    path: &'a Path,
}

impl<W: Write> Write for NamedWriter<'_, W>
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>
    {
        self.inner.write(buf).map_err(|e| with_path(e, self.path))
    }

    fn flush(&mut self) -> io::Result<()>
    {
        self.inner.flush().map_err(|e| with_path(e, self.path))
    }
}

/// Copy the sequence lines of `reader` into `writer`.
///
/// Does not flush `writer`.
pub fn extract_stream<R, W>(reader: &mut R, writer: &mut W) -> io::Result<Stats>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let mut stats = Stats::default();
    for_each_line(reader, |line| {
        let line = trim(line);
        match line.first()
        {
            None => Ok(()),
            Some(&b'>') =>
            {
                stats.headers += 1;
                debug!("skipping header {}", String::from_utf8_lossy(line));
                Ok(())
            }
            Some(_) =>
            {
                writer.write_all(line)?;
                stats.total_length += line.len() as u64;
                stats.sequence_lines += 1;
                Ok(())
            }
        }
    })?;
    Ok(stats)
}

/// Call `f` on every line of `reader`, without its `\n`.
///
/// Lines are handed out straight from the reader's buffer; only a line that
/// straddles a buffer refill is copied. A final line without `\n` is still
/// reported.
pub fn for_each_line<R, F>(reader: &mut R, mut f: F) -> io::Result<()>
where
    R: BufRead + ?Sized,
    F: FnMut(&[u8]) -> io::Result<()>,
{
    let mut carry: Vec<u8> = Vec::new();
    loop
    {
        let buf = match reader.fill_buf()
        {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty()
        {
            if !carry.is_empty()
            {
                f(&carry)?;
            }
            return Ok(());
        }

        let mut line_start = 0;
        for line_end in memchr::memchr_iter(b'\n', buf)
        {
            if carry.is_empty()
            {
                f(&buf[line_start..line_end])?;
            }
            else
            {
                carry.extend_from_slice(&buf[line_start..line_end]);
                f(&carry)?;
                carry.clear();
            }
            line_start = line_end + 1; // skip '\n'
        }
        carry.extend_from_slice(&buf[line_start..]);

        let len = buf.len();
        reader.consume(len);
    }
}

/// Base file name of `path` up to its first `.`.
///
/// `dir/sample.fasta.txt` gives `sample`; a name starting with `.` gives
/// an empty identifier.
pub fn identifier_from_path(path: &Path) -> String
{
    let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    name.split('.').next().unwrap_or_default().to_string()
}

/// Strip C `isspace` bytes from both ends.
pub fn trim(line: &[u8]) -> &[u8]
{
    let start = line.iter().position(|&b| !is_space(b)).unwrap_or(line.len());
    let end = line.iter().rposition(|&b| !is_space(b)).map_or(start, |i| i + 1);
    &line[start..end]
}

fn is_space(b: u8) -> bool
{
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}
