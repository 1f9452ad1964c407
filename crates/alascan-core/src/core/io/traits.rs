use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading the text formats produced around an
/// alanine scan (result files, aggregated tables, structure files, lists).
///
/// Implementors parse the whole input into `Self`; the path helper only adds
/// buffered file access on top of [`read_from`](ScanFile::read_from).
pub trait ScanFile: Sized {
    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Parses the format from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if a line cannot be read or does not follow the format.
    fn read_from(reader: &mut impl BufRead) -> Result<Self, Self::Error>;

    /// Opens `path` and parses its content.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}

/// Collects every line of `reader`, without line terminators.
pub fn read_lines(reader: &mut impl BufRead) -> io::Result<Vec<String>> {
    reader.lines().collect()
}
