use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::Path;
use thiserror::Error;

const RESULT_EXTENSION: &str = ".bals";
const MIN_ROW_TOKENS: usize = 11;

pub const EXPORT_HEADER: [&str; 10] = [
    "PDB_ID",
    "Chain",
    "DockPos",
    "M_Number",
    "ResNum",
    "ResName",
    "ChainID",
    "IterDDG",
    "NterDDG",
    "AtomsSchain",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Result file name '{0}' does not follow <pdb>_<model>_<chain>_<x>_<dock>")]
    InvalidFileName(String),
    #[error("Line {line} has {found} fields, at least 11 are required")]
    Incomplete { line: usize, found: usize },
}

/// Identifiers of one docking/model run, encoded in the result file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunId {
    pub pdb_id: String,
    pub model_id: String,
    pub chain_id: String,
    pub dock_id: String,
}

impl RunId {
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = name.strip_suffix(RESULT_EXTENSION).unwrap_or(&name);
        let parts: Vec<&str> = stem.split('_').collect();
        if parts.len() < 5 {
            return Err(ExportError::InvalidFileName(name));
        }
        Ok(Self {
            pdb_id: parts[0].to_string(),
            model_id: parts[1].to_string(),
            chain_id: parts[2].to_string(),
            dock_id: parts[4].to_string(),
        })
    }
}

/// One residue of one run in the flattened export table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    pub pdb_id: String,
    pub chain_id: String,
    pub dock_id: String,
    pub model_id: String,
    pub residue_number: String,
    pub residue_name: String,
    pub chain: String,
    pub inter_ddg: String,
    pub norm_inter_ddg: String,
    pub sidechain_atoms: String,
}

/// Reads the residue rows of one result file, skipping comment and blank lines.
pub fn read_rows(run: &RunId, reader: &mut impl BufRead) -> Result<Vec<ExportRow>, ExportError> {
    let mut rows = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < MIN_ROW_TOKENS {
            return Err(ExportError::Incomplete {
                line: i + 1,
                found: tokens.len(),
            });
        }
        rows.push(ExportRow {
            pdb_id: run.pdb_id.clone(),
            chain_id: run.chain_id.clone(),
            dock_id: run.dock_id.clone(),
            model_id: run.model_id.clone(),
            residue_number: tokens[1].to_string(),
            residue_name: tokens[2].to_string(),
            chain: tokens[3].to_string(),
            inter_ddg: tokens[5].to_string(),
            norm_inter_ddg: tokens[6].to_string(),
            sidechain_atoms: tokens[10].to_string(),
        });
    }
    Ok(rows)
}

/// Tab-separated writer for [`ExportRow`]s; text fields are quoted.
pub struct ExportWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl<W: Write> ExportWriter<W> {
    pub fn new(writer: W) -> Result<Self, ExportError> {
        let mut inner = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quote_style(csv::QuoteStyle::NonNumeric)
            .from_writer(writer);
        inner.write_record(EXPORT_HEADER)?;
        Ok(Self { inner })
    }

    pub fn write_rows(&mut self, rows: &[ExportRow]) -> Result<(), ExportError> {
        for row in rows {
            self.inner.serialize(row)?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), ExportError> {
        self.inner.flush()?;
        Ok(())
    }
}
