use crate::core::io::traits::ScanFile;
use std::io::{self, BufRead};
use std::path::PathBuf;

/// A list of result-file paths, one per line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultList {
    pub paths: Vec<PathBuf>,
}

impl ScanFile for ResultList {
    type Error = io::Error;

    fn read_from(reader: &mut impl BufRead) -> Result<Self, Self::Error> {
        let mut paths = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                paths.push(PathBuf::from(trimmed));
            }
        }
        Ok(Self { paths })
    }
}
