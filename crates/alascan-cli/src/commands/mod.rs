pub mod colour;
pub mod divide;
pub mod export;
pub mod summarize;

use crate::error::Result;
use alascan::engine::error::EngineError;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Opens `path` for writing, or standard output when no path is given.
fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| EngineError::io(path, e))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

fn output_name(path: Option<&Path>) -> String {
    path.map_or_else(|| "standard output".to_string(), |p| p.display().to_string())
}
