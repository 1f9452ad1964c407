use crate::core::models::summary::SummaryEntry;
use crate::core::utils::identifiers::ChainCheck;
use std::io::{self, BufRead};
use thiserror::Error;

// Token positions in an aggregated table row:
// Index Number Name Chain InterDG InterDDG NormTerDDG IntraDG IntraDDG NormTraDDG ChainAtoms SD
const DDG_TOKEN: usize = 5;
const SD_TOKEN: usize = 11;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(
        "Line {line} has incomplete data: \"{content}\". The residue number, the InterDDG, the chain or SD is missing."
    )]
    Incomplete { line: usize, content: String },
    #[error("Line {line} has a wrong value for {what}: \"{content}\"")]
    InvalidValue {
        line: usize,
        what: &'static str,
        content: String,
    },
}

/// An aggregated ddG/SD table, reduced to what the colouring needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryFile {
    pub entries: Vec<SummaryEntry>,
}

impl SummaryFile {
    /// Parses table rows, skipping blank and `#` lines.
    pub fn parse(reader: &mut impl BufRead, chain_check: ChainCheck) -> Result<Self, SummaryError> {
        let mut entries = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            entries.push(parse_entry(&line, i + 1, chain_check)?);
        }
        Ok(Self { entries })
    }
}

fn parse_entry(content: &str, line: usize, chain_check: ChainCheck) -> Result<SummaryEntry, SummaryError> {
    let tokens: Vec<&str> = content.split_whitespace().collect();
    if tokens.len() <= SD_TOKEN {
        return Err(SummaryError::Incomplete {
            line,
            content: content.to_string(),
        });
    }

    let invalid = |what: &'static str| SummaryError::InvalidValue {
        line,
        what,
        content: content.to_string(),
    };

    let index = tokens[0].parse().map_err(|_| invalid("the index"))?;
    let number = tokens[1].parse().map_err(|_| invalid("the residue number"))?;
    let ddg = tokens[DDG_TOKEN].parse().map_err(|_| invalid("the ddG"))?;
    let sd = tokens[SD_TOKEN].parse().map_err(|_| invalid("the SD"))?;

    Ok(SummaryEntry::new(
        index,
        number,
        tokens[2],
        chain_check.chain_from_token(tokens[3]),
        ddg,
        sd,
    ))
}
