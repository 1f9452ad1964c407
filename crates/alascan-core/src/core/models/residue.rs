/// Chain identifier used when a residue carries no chain.
pub const BLANK_CHAIN: char = ' ';

/// The six energy terms reported for every scanned residue.
///
/// All values are in kJ/mol as written by the scanning tool. Within an
/// [`AggregatedResidue`] the same struct holds the running sum and, once the
/// aggregation pass is finalized, the per-model average.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnergyTerms {
    pub inter_delta_g: f64,
    pub inter_ddg: f64,
    pub norm_inter_ddg: f64,
    pub intra_delta_g: f64,
    pub intra_ddg: f64,
    pub norm_intra_ddg: f64,
}

impl EnergyTerms {
    /// Adds every term of `other` to the matching term of `self`.
    pub fn accumulate(&mut self, other: &EnergyTerms) {
        self.inter_delta_g += other.inter_delta_g;
        self.inter_ddg += other.inter_ddg;
        self.norm_inter_ddg += other.norm_inter_ddg;
        self.intra_delta_g += other.intra_delta_g;
        self.intra_ddg += other.intra_ddg;
        self.norm_intra_ddg += other.norm_intra_ddg;
    }

    /// Divides every term by `divisor`.
    pub fn divide(&mut self, divisor: f64) {
        self.inter_delta_g /= divisor;
        self.inter_ddg /= divisor;
        self.norm_inter_ddg /= divisor;
        self.intra_delta_g /= divisor;
        self.intra_ddg /= divisor;
        self.norm_intra_ddg /= divisor;
    }
}

/// Identity used to align rows of different model files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResidueKey<'a> {
    pub number: u32,
    pub name: &'a str,
}

impl std::fmt::Display for ResidueKey<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.number)
    }
}

/// One residue row of a single alanine-scan result file.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidueRecord {
    pub sequence_index: u32, // Row order in the structural file
    pub residue_number: u32, // Residue number in the structural file
    pub residue_name: String,
    pub chain: char,
    pub energies: EnergyTerms,
    pub sidechain_atom_count: u16,
}

impl ResidueRecord {
    pub fn key(&self) -> ResidueKey<'_> {
        ResidueKey {
            number: self.residue_number,
            name: &self.residue_name,
        }
    }
}

/// A residue row accumulated over several model files.
///
/// Created from the first accepted file's record. Each further model adds its
/// energies through [`accumulate`](Self::accumulate); after the last model
/// [`finalize_average`](Self::finalize_average) turns the sums into means.
/// Descriptor fields (index, chain, side-chain atom count) keep the values of
/// the seeding record.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedResidue {
    pub sequence_index: u32,
    pub residue_number: u32,
    pub residue_name: String,
    pub chain: char,
    pub energies: EnergyTerms,
    pub sidechain_atom_count: u16,
}

impl AggregatedResidue {
    pub fn key(&self) -> ResidueKey<'_> {
        ResidueKey {
            number: self.residue_number,
            name: &self.residue_name,
        }
    }

    /// Adds the energy terms of `record` to this aggregate.
    ///
    /// The caller is responsible for checking that `record` describes the
    /// same residue; see [`ResidueKey`].
    pub fn accumulate(&mut self, record: &ResidueRecord) {
        self.energies.accumulate(&record.energies);
    }

    /// Turns the accumulated sums into averages over `model_count` models.
    pub fn finalize_average(&mut self, model_count: usize) {
        self.energies.divide(model_count as f64);
    }
}

impl From<ResidueRecord> for AggregatedResidue {
    fn from(record: ResidueRecord) -> Self {
        Self {
            sequence_index: record.sequence_index,
            residue_number: record.residue_number,
            residue_name: record.residue_name,
            chain: record.chain,
            energies: record.energies,
            sidechain_atom_count: record.sidechain_atom_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(number: u32, name: &str, inter_ddg: f64) -> ResidueRecord {
        ResidueRecord {
            sequence_index: 1,
            residue_number: number,
            residue_name: name.to_string(),
            chain: 'A',
            energies: EnergyTerms {
                inter_delta_g: -10.0,
                inter_ddg,
                norm_inter_ddg: inter_ddg / 2.0,
                intra_delta_g: 4.0,
                intra_ddg: 1.0,
                norm_intra_ddg: 0.5,
            },
            sidechain_atom_count: 2,
        }
    }

    #[test]
    fn accumulate_adds_every_energy_term() {
        let mut aggregate = AggregatedResidue::from(record(12, "LYS", 1.0));
        aggregate.accumulate(&record(12, "LYS", 3.0));

        assert_eq!(aggregate.energies.inter_delta_g, -20.0);
        assert_eq!(aggregate.energies.inter_ddg, 4.0);
        assert_eq!(aggregate.energies.norm_inter_ddg, 2.0);
        assert_eq!(aggregate.energies.intra_delta_g, 8.0);
        assert_eq!(aggregate.energies.intra_ddg, 2.0);
        assert_eq!(aggregate.energies.norm_intra_ddg, 1.0);
    }

    #[test]
    fn accumulate_keeps_descriptor_fields_of_seed() {
        let mut aggregate = AggregatedResidue::from(record(12, "LYS", 1.0));
        let mut other = record(12, "LYS", 3.0);
        other.sidechain_atom_count = 9;
        other.sequence_index = 40;
        aggregate.accumulate(&other);

        assert_eq!(aggregate.sidechain_atom_count, 2);
        assert_eq!(aggregate.sequence_index, 1);
    }

    #[test]
    fn finalize_average_divides_by_model_count() {
        let mut aggregate = AggregatedResidue::from(record(12, "LYS", 1.0));
        aggregate.accumulate(&record(12, "LYS", 3.0));
        aggregate.accumulate(&record(12, "LYS", 5.0));
        aggregate.finalize_average(3);

        assert_eq!(aggregate.energies.inter_ddg, 3.0);
        assert_eq!(aggregate.energies.inter_delta_g, -10.0);
    }

    #[test]
    fn key_compares_number_and_name() {
        let a = record(12, "LYS", 1.0);
        let b = record(12, "LYS", 7.0);
        let c = record(12, "ARG", 1.0);

        assert_eq!(a.key(), b.key());
        assert_ne!(a.key(), c.key());
        assert_eq!(a.key().to_string(), "LYS 12");
    }
}
