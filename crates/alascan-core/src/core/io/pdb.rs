use crate::core::io::traits::{ScanFile, read_lines};
use std::io::{self, BufRead, Write};
use thiserror::Error;

const TAG_LENGTH: usize = 6;
const MODEL_TAG: &str = "MODEL ";
const END_MODEL_TAG: &str = "ENDMDL";
const ATOM_TAG: &str = "ATOM  ";
const END_TAG: &str = "END";
/// Column (0-based) of the chain identifier in an ATOM record.
const CHAIN_COLUMN: usize = 21;
const RECORD_WIDTH: usize = 80;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("ATOM record on line {line} is too short to hold a chain identifier")]
    MissingChain { line: usize },
}

/// The ATOM records of one chain of one model, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainBlock {
    pub chain: char,
    pub atoms: Vec<String>,
}

impl ChainBlock {
    /// Writes the records followed by an `END` line padded to 80 columns.
    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        for atom in &self.atoms {
            writeln!(writer, "{}", atom)?;
        }
        writeln!(writer, "{:<width$}", END_TAG, width = RECORD_WIDTH)
    }
}

/// ATOM records of a PDB file grouped by model, then by chain.
///
/// Only record tags are inspected; coordinates are carried through verbatim.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdbModels {
    pub models: Vec<Vec<ChainBlock>>,
}

impl PdbModels {
    pub fn from_lines(lines: &[String]) -> Result<Self, PdbError> {
        let mut models = Vec::new();
        let mut current: Vec<ChainBlock> = Vec::new();
        let mut in_model = false;
        let mut bare_atoms = false;

        for (i, line) in lines.iter().enumerate() {
            let tag = line.get(..TAG_LENGTH).unwrap_or(line.as_str());

            if tag == MODEL_TAG {
                in_model = true;
                continue;
            }
            if tag == END_MODEL_TAG {
                in_model = false;
                models.push(std::mem::take(&mut current));
                continue;
            }
            if tag != ATOM_TAG {
                continue;
            }
            if !in_model {
                // ATOM records outside MODEL blocks form a single implicit model.
                in_model = true;
                bare_atoms = true;
            }

            let chain = line
                .get(CHAIN_COLUMN..)
                .and_then(|rest| rest.chars().next())
                .ok_or(PdbError::MissingChain { line: i + 1 })?;
            match current.iter_mut().find(|block| block.chain == chain) {
                Some(block) => block.atoms.push(line.clone()),
                None => current.push(ChainBlock {
                    chain,
                    atoms: vec![line.clone()],
                }),
            }
        }

        if bare_atoms && !current.is_empty() {
            models.push(current);
        }
        Ok(Self { models })
    }

    pub fn is_multi_model(&self) -> bool {
        self.models.len() > 1
    }
}

impl ScanFile for PdbModels {
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self, Self::Error> {
        let lines = read_lines(reader)?;
        Self::from_lines(&lines)
    }
}
