//! Error type for the `fa2seq` binary.

use std::{error, fmt, io};

#[derive(Debug)]
pub enum Fa2SeqError
{
    /// Wrong number of positional arguments; carries the usage line.
    Usage(String),
    Io(io::Error),
}

// Lets `?` lift library results in main().
impl From<io::Error> for Fa2SeqError
{
    fn from(e: io::Error) -> Self
    {
        Fa2SeqError::Io(e)
    }
}

impl fmt::Display for Fa2SeqError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self
        {
            Fa2SeqError::Usage(usage) => write!(f, "{}", usage),
            Fa2SeqError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl error::Error for Fa2SeqError
{
    fn source(&self) -> Option<&(dyn error::Error + 'static)>
    {
        match self
        {
            Fa2SeqError::Usage(_) => None,
            Fa2SeqError::Io(e) => Some(e),
        }
    }
}
