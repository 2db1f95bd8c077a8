//! Conversion of FASTA files into raw sequence files.
//!
//! [`extract::extract`] strips the headers of a FASTA file (optionally gzip
//! compressed) and writes the remaining sequence lines back to back;
//! [`raw::RawSeqFile`] reads intervals out of the result.

pub mod errors;
pub mod extract;
pub mod input;
pub mod raw;

pub use extract::{extract, Summary};
