use crate::core::io::traits::{ScanFile, read_lines};
use crate::core::models::residue::{EnergyTerms, ResidueRecord};
use crate::core::utils::identifiers::ChainCheck;
use std::fmt;
use std::io::{self, BufRead};
use std::str::FromStr;
use thiserror::Error;

// Fixed layout of a per-model alanine-scan result file (0-based line numbers).
/// Lines `0..HEADER_END_ROW` are reproduced verbatim in the aggregated table.
pub const HEADER_END_ROW: usize = 15;
/// Line holding the wild-type inter-molecular energy.
pub const INTER_ENERGY_ROW: usize = 16;
/// Line holding the wild-type intra-molecular energy.
pub const INTRA_ENERGY_ROW: usize = 17;
/// Line holding the column titles of the residue table.
pub const COLUMN_TITLE_ROW: usize = 19;
/// First residue row.
pub const DATA_START_ROW: usize = 20;
/// Header block plus the first residue row; shorter files are not processed.
pub const MIN_RESULT_LINES: usize = DATA_START_ROW + 1;

pub const INTER_WT_TAG: &str = "# WT InterDG:";
pub const INTRA_WT_TAG: &str = "# WT IntraDG:";

/// Columns of a residue row, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Index,
    Number,
    Name,
    Chain,
    InterDeltaG,
    InterDdg,
    NormInterDdg,
    IntraDeltaG,
    IntraDdg,
    NormIntraDdg,
    SidechainAtoms,
}

impl RecordField {
    pub const fn label(self) -> &'static str {
        match self {
            RecordField::Index => "Index",
            RecordField::Number => "Number",
            RecordField::Name => "Name",
            RecordField::Chain => "Chain",
            RecordField::InterDeltaG => "InterDG",
            RecordField::InterDdg => "InterDDG",
            RecordField::NormInterDdg => "NormTerDDG",
            RecordField::IntraDeltaG => "IntraDG",
            RecordField::IntraDdg => "IntraDDG",
            RecordField::NormIntraDdg => "NormTraDDG",
            RecordField::SidechainAtoms => "ChainAtoms",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum BalsParseErrorKind {
    #[error("Required field '{field}' is missing")]
    MissingField { field: RecordField },
    #[error("Invalid integer for field '{field}' (value: '{value}')")]
    InvalidInt { field: RecordField, value: String },
    #[error("Invalid float for field '{field}' (value: '{value}')")]
    InvalidFloat { field: RecordField, value: String },
    #[error("Cannot read the energy following '{tag}' (value: '{value}')")]
    InvalidTaggedEnergy { tag: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum BalsError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: BalsParseErrorKind,
    },
    #[error("File has {found} lines, fewer than the {required} required")]
    TooShort { found: usize, required: usize },
}

struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            inner: line.split_whitespace(),
        }
    }

    fn next(&mut self, field: RecordField) -> Result<&'a str, BalsParseErrorKind> {
        self.inner
            .next()
            .ok_or(BalsParseErrorKind::MissingField { field })
    }

    fn int<T: FromStr>(&mut self, field: RecordField) -> Result<T, BalsParseErrorKind> {
        let value = self.next(field)?;
        value.parse().map_err(|_| BalsParseErrorKind::InvalidInt {
            field,
            value: value.to_string(),
        })
    }

    fn float(&mut self, field: RecordField) -> Result<f64, BalsParseErrorKind> {
        let value = self.next(field)?;
        value.parse().map_err(|_| BalsParseErrorKind::InvalidFloat {
            field,
            value: value.to_string(),
        })
    }
}

/// Parses one residue row.
///
/// The row holds eleven whitespace-separated tokens in [`RecordField`] order.
/// Extra trailing tokens (such as the SD column of an aggregated table) are
/// ignored. Only the first character of the chain token is kept and it is not
/// range checked.
pub fn parse_record(line: &str) -> Result<ResidueRecord, BalsParseErrorKind> {
    let mut tokens = Tokens::new(line);

    let sequence_index = tokens.int(RecordField::Index)?;
    let residue_number = tokens.int(RecordField::Number)?;
    let residue_name = tokens.next(RecordField::Name)?.to_string();
    let chain = ChainCheck::AnyCharacter.chain_from_token(tokens.next(RecordField::Chain)?);
    let energies = EnergyTerms {
        inter_delta_g: tokens.float(RecordField::InterDeltaG)?,
        inter_ddg: tokens.float(RecordField::InterDdg)?,
        norm_inter_ddg: tokens.float(RecordField::NormInterDdg)?,
        intra_delta_g: tokens.float(RecordField::IntraDeltaG)?,
        intra_ddg: tokens.float(RecordField::IntraDdg)?,
        norm_intra_ddg: tokens.float(RecordField::NormIntraDdg)?,
    };
    let sidechain_atom_count = tokens.int(RecordField::SidechainAtoms)?;

    Ok(ResidueRecord {
        sequence_index,
        residue_number,
        residue_name,
        chain,
        energies,
        sidechain_atom_count,
    })
}

/// Reads the energy written after `tag` on a header line.
///
/// The value starts after the last character of the line that also occurs in
/// `tag` (for a well-formed line, the space before the number). Returns
/// `Ok(None)` when the line contains none of those characters.
pub fn parse_tagged_energy(
    line: &str,
    tag: &'static str,
) -> Result<Option<f64>, BalsParseErrorKind> {
    let line = line.trim_end();
    let Some(marker) = line.rfind(|c: char| tag.contains(c)) else {
        return Ok(None);
    };
    // Tag characters are ASCII, so the marker is one byte wide.
    let value = line[marker + 1..].trim();
    value
        .parse()
        .map(Some)
        .map_err(|_| BalsParseErrorKind::InvalidTaggedEnergy {
            tag,
            value: value.to_string(),
        })
}

/// The content of one per-model alanine-scan result file.
#[derive(Debug, Clone, PartialEq)]
pub struct BalsFile {
    pub header: Vec<String>,
    pub column_titles: String,
    pub inter_wild_type: Option<f64>,
    pub intra_wild_type: Option<f64>,
    pub records: Vec<ResidueRecord>,
}

impl BalsFile {
    pub fn from_lines(lines: &[String]) -> Result<Self, BalsError> {
        if lines.len() < MIN_RESULT_LINES {
            return Err(BalsError::TooShort {
                found: lines.len(),
                required: MIN_RESULT_LINES,
            });
        }

        let header = lines[..HEADER_END_ROW].to_vec();
        let column_titles = lines[COLUMN_TITLE_ROW].clone();

        let inter_wild_type = parse_tagged_energy(&lines[INTER_ENERGY_ROW], INTER_WT_TAG)
            .map_err(|kind| BalsError::Parse {
                line: INTER_ENERGY_ROW + 1,
                kind,
            })?;
        let intra_wild_type = parse_tagged_energy(&lines[INTRA_ENERGY_ROW], INTRA_WT_TAG)
            .map_err(|kind| BalsError::Parse {
                line: INTRA_ENERGY_ROW + 1,
                kind,
            })?;

        let records = lines
            .iter()
            .enumerate()
            .skip(DATA_START_ROW)
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| parse_record(line).map_err(|kind| BalsError::Parse { line: i + 1, kind }))
            .collect::<Result<Vec<_>, _>>()?;
        if records.is_empty() {
            return Err(BalsError::TooShort {
                found: lines.len(),
                required: MIN_RESULT_LINES,
            });
        }

        Ok(Self {
            header,
            column_titles,
            inter_wild_type,
            intra_wild_type,
            records,
        })
    }

    /// Raw inter-molecular ddG of every row, in row order.
    pub fn inter_ddg_series(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.energies.inter_ddg).collect()
    }
}

impl ScanFile for BalsFile {
    type Error = BalsError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self, Self::Error> {
        let lines = read_lines(reader)?;
        Self::from_lines(&lines)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Cursor;

    pub(crate) fn result_file_text(inter_wt: f64, intra_wt: f64, rows: &[&str]) -> String {
        let mut lines: Vec<String> = (0..HEADER_END_ROW)
            .map(|i| format!("# header line {}", i))
            .collect();
        lines.push("#".to_string());
        lines.push(format!("{}{:>11.4}", INTER_WT_TAG, inter_wt));
        lines.push(format!("{}{:>11.4}", INTRA_WT_TAG, intra_wt));
        lines.push("#".to_string());
        lines.push(
            "# Index Number Name Chain     InterDG    InterDDG  NormTerDDG     IntraDG    IntraDDG  NormTraDDG ChainAtoms"
                .to_string(),
        );
        lines.extend(rows.iter().map(|r| r.to_string()));
        lines.join("\n") + "\n"
    }

    #[test]
    fn parse_record_reads_all_eleven_fields() {
        let record =
            parse_record("     3    262  LYS     B   -12.5000     1.2500     0.2500    -3.0000     0.7500     0.1500          5")
                .unwrap();

        assert_eq!(record.sequence_index, 3);
        assert_eq!(record.residue_number, 262);
        assert_eq!(record.residue_name, "LYS");
        assert_eq!(record.chain, 'B');
        assert_eq!(record.energies.inter_delta_g, -12.5);
        assert_eq!(record.energies.inter_ddg, 1.25);
        assert_eq!(record.energies.norm_inter_ddg, 0.25);
        assert_eq!(record.energies.intra_delta_g, -3.0);
        assert_eq!(record.energies.intra_ddg, 0.75);
        assert_eq!(record.energies.norm_intra_ddg, 0.15);
        assert_eq!(record.sidechain_atom_count, 5);
    }

    #[test]
    fn parse_record_reports_missing_trailing_field() {
        let err = parse_record("1 10 ALA A 0.0 0.0 0.0 0.0 0.0 0.0").unwrap_err();
        assert_eq!(
            err,
            BalsParseErrorKind::MissingField {
                field: RecordField::SidechainAtoms
            }
        );
    }

    #[test]
    fn parse_record_reports_which_float_failed() {
        let err = parse_record("1 10 ALA A 0.0 abc 0.0 0.0 0.0 0.0 1").unwrap_err();
        assert_eq!(
            err,
            BalsParseErrorKind::InvalidFloat {
                field: RecordField::InterDdg,
                value: "abc".to_string()
            }
        );
    }

    #[test]
    fn parse_record_rejects_negative_residue_number() {
        let err = parse_record("1 -10 ALA A 0.0 0.0 0.0 0.0 0.0 0.0 1").unwrap_err();
        assert!(matches!(
            err,
            BalsParseErrorKind::InvalidInt {
                field: RecordField::Number,
                ..
            }
        ));
    }

    // The chain column is not range checked; lowercase and digits pass through.
    #[test]
    fn parse_record_accepts_any_chain_character() {
        let record = parse_record("1 10 SER b 0.0 0.0 0.0 0.0 0.0 0.0 1").unwrap();
        assert_eq!(record.chain, 'b');
        let record = parse_record("1 10 SER 1 0.0 0.0 0.0 0.0 0.0 0.0 1").unwrap();
        assert_eq!(record.chain, '1');
    }

    #[test]
    fn parse_record_ignores_extra_tokens() {
        let record = parse_record("1 10 SER A 1.0 2.0 3.0 4.0 5.0 6.0 1     0.5000").unwrap();
        assert_eq!(record.energies.norm_intra_ddg, 6.0);
    }

    #[test]
    fn tagged_energy_is_read_after_last_marker_character() {
        assert_eq!(
            parse_tagged_energy("# WT InterDG:   -25.1234", INTER_WT_TAG),
            Ok(Some(-25.1234))
        );
        assert_eq!(
            parse_tagged_energy("# WT IntraDG:     3.5000   ", INTRA_WT_TAG),
            Ok(Some(3.5))
        );
    }

    #[test]
    fn tagged_energy_without_marker_is_absent() {
        assert_eq!(parse_tagged_energy("1234.5", INTER_WT_TAG), Ok(None));
    }

    #[test]
    fn tagged_energy_with_marker_but_no_number_fails() {
        let err = parse_tagged_energy("# WT InterDG: n/a", INTER_WT_TAG).unwrap_err();
        assert!(matches!(
            err,
            BalsParseErrorKind::InvalidTaggedEnergy { tag: INTER_WT_TAG, .. }
        ));
    }

    #[test]
    fn read_from_parses_header_energies_and_rows() {
        let text = result_file_text(
            -20.0,
            -4.0,
            &[
                "1 10 LYS A -5.0 1.0 0.2 -1.0 0.5 0.1 5",
                "",
                "2 11 ASP A -4.0 -0.5 -0.1 -1.0 0.25 0.05 4",
            ],
        );
        let file = BalsFile::read_from(&mut Cursor::new(text)).unwrap();

        assert_eq!(file.header.len(), HEADER_END_ROW);
        assert_eq!(file.header[0], "# header line 0");
        assert!(file.column_titles.starts_with("# Index Number"));
        assert_eq!(file.inter_wild_type, Some(-20.0));
        assert_eq!(file.intra_wild_type, Some(-4.0));
        assert_eq!(file.records.len(), 2);
        assert_eq!(file.inter_ddg_series(), vec![1.0, -0.5]);
    }

    #[test]
    fn read_from_reports_line_number_of_bad_row() {
        let text = result_file_text(0.0, 0.0, &["1 10 LYS A -5.0 1.0 0.2 -1.0 0.5 0.1 5", "2 11 ASP"]);
        let err = BalsFile::read_from(&mut Cursor::new(text)).unwrap_err();
        match err {
            BalsError::Parse { line, kind } => {
                assert_eq!(line, DATA_START_ROW + 2);
                assert_eq!(
                    kind,
                    BalsParseErrorKind::MissingField {
                        field: RecordField::Chain
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn short_file_is_rejected_as_too_short() {
        let text = (0..18).map(|i| format!("# {}", i)).collect::<Vec<_>>().join("\n");
        let err = BalsFile::read_from(&mut Cursor::new(text)).unwrap_err();
        assert!(matches!(
            err,
            BalsError::TooShort {
                found: 18,
                required: MIN_RESULT_LINES
            }
        ));
    }

    #[test]
    fn file_with_titles_but_no_rows_is_too_short() {
        let text = result_file_text(1.0, 2.0, &[]);
        let err = BalsFile::read_from(&mut Cursor::new(text)).unwrap_err();
        assert!(matches!(
            err,
            BalsError::TooShort {
                found: 20,
                required: MIN_RESULT_LINES
            }
        ));
    }

    #[test]
    fn file_with_only_blank_data_rows_is_too_short() {
        let text = result_file_text(1.0, 2.0, &["", "   "]);
        let err = BalsFile::read_from(&mut Cursor::new(text)).unwrap_err();
        assert!(matches!(err, BalsError::TooShort { found: 22, .. }));
    }
}
