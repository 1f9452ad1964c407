use crate::core::io::bals::{INTER_WT_TAG, INTRA_WT_TAG};
use crate::core::models::residue::AggregatedResidue;
use crate::core::utils::identifiers::chain_token;
use std::io::{self, Write};

/// The averaged residue table with its per-residue standard deviation, laid
/// out the same way as a single-model result file plus a trailing SD column.
#[derive(Debug, Clone, Copy)]
pub struct SummaryTable<'a> {
    pub header: &'a [String],
    pub inter_wild_type: f64,
    pub intra_wild_type: f64,
    pub column_titles: &'a str,
    pub residues: &'a [AggregatedResidue],
    pub standard_deviations: &'a [f64],
}

impl SummaryTable<'_> {
    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        for line in self.header {
            writeln!(writer, "{}", line)?;
        }
        writeln!(writer, "#")?;
        writeln!(writer, "{}{:>11.4}", INTER_WT_TAG, self.inter_wild_type)?;
        writeln!(writer, "{}{:>11.4}", INTRA_WT_TAG, self.intra_wild_type)?;
        writeln!(writer, "#")?;
        writeln!(writer, "{}{:>7}", self.column_titles, "SD")?;

        for (residue, sd) in self.residues.iter().zip(self.standard_deviations) {
            writeln!(writer, "{}", format_row(residue, *sd))?;
        }
        Ok(())
    }
}

/// Formats one averaged residue row followed by its SD.
pub fn format_row(residue: &AggregatedResidue, sd: f64) -> String {
    let e = &residue.energies;
    format!(
        "{:>6} {:>6} {:>4} {:>5} {:>11.4} {:>11.4} {:>11.4} {:>11.4} {:>11.4} {:>11.4} {:>10}{:>11.4}",
        residue.sequence_index,
        residue.residue_number,
        residue.residue_name,
        chain_token(residue.chain),
        e.inter_delta_g,
        e.inter_ddg,
        e.norm_inter_ddg,
        e.intra_delta_g,
        e.intra_ddg,
        e.norm_intra_ddg,
        residue.sidechain_atom_count,
        sd,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::bals::parse_record;
    use crate::core::models::residue::{BLANK_CHAIN, EnergyTerms};

    const PRECISION: f64 = 5e-5;

    fn residue(chain: char) -> AggregatedResidue {
        AggregatedResidue {
            sequence_index: 7,
            residue_number: 262,
            residue_name: "LYS".to_string(),
            chain,
            energies: EnergyTerms {
                inter_delta_g: -12.34567,
                inter_ddg: 1.5,
                norm_inter_ddg: 0.333333,
                intra_delta_g: -100.25,
                intra_ddg: -0.00004,
                norm_intra_ddg: 2.0,
            },
            sidechain_atom_count: 5,
        }
    }

    #[test]
    fn row_uses_fixed_widths() {
        let row = format_row(&residue('A'), 0.25);
        assert_eq!(
            row,
            "     7    262  LYS     A    -12.3457      1.5000      0.3333   -100.2500     -0.0000      2.0000          5     0.2500"
        );
    }

    #[test]
    fn blank_chain_is_written_as_sentinel() {
        let row = format_row(&residue(BLANK_CHAIN), 0.0);
        assert!(row.starts_with("     7    262  LYS    XX "));
    }

    #[test]
    fn written_row_parses_back_to_same_values() {
        let original = residue('B');
        let parsed = parse_record(&format_row(&original, 1.0)).unwrap();

        assert_eq!(parsed.residue_number, original.residue_number);
        assert_eq!(parsed.residue_name, original.residue_name);
        assert_eq!(parsed.chain, 'B');
        assert_eq!(parsed.sidechain_atom_count, original.sidechain_atom_count);
        let (a, b) = (&parsed.energies, &original.energies);
        for (x, y) in [
            (a.inter_delta_g, b.inter_delta_g),
            (a.inter_ddg, b.inter_ddg),
            (a.norm_inter_ddg, b.norm_inter_ddg),
            (a.intra_delta_g, b.intra_delta_g),
            (a.intra_ddg, b.intra_ddg),
            (a.norm_intra_ddg, b.norm_intra_ddg),
        ] {
            assert!((x - y).abs() <= PRECISION, "{x} != {y}");
        }
    }

    #[test]
    fn table_writes_header_energies_titles_and_rows() {
        let header = vec!["# BUDE alanine scan".to_string(), "# model set".to_string()];
        let residues = vec![residue('A')];
        let table = SummaryTable {
            header: &header,
            inter_wild_type: -25.5,
            intra_wild_type: 3.0,
            column_titles: "# Index Number",
            residues: &residues,
            standard_deviations: &[0.5],
        };

        let mut out = Vec::new();
        table.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "# BUDE alanine scan");
        assert_eq!(lines[2], "#");
        assert_eq!(lines[3], "# WT InterDG:   -25.5000");
        assert_eq!(lines[4], "# WT IntraDG:     3.0000");
        assert_eq!(lines[5], "#");
        assert_eq!(lines[6], "# Index Number     SD");
        assert!(lines[7].ends_with("     0.5000"));
        assert_eq!(lines.len(), 8);
    }
}
