use super::aggregate::{AveragedScan, ModelDdgSeries};
use crate::core::io::table::SummaryTable;

/// Population standard deviation of `values` around `reference`.
///
/// `reference` is expected to be the mean of `values`; it is taken as given
/// rather than recomputed.
pub fn population_sd<I>(values: I, reference: f64) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + (v - reference).powi(2), count + 1));
    if count == 0 {
        return 0.0;
    }
    (sum / count as f64).sqrt()
}

/// SD of the raw inter-molecular ddG of every residue row across models,
/// measured against the averaged ddG of that row.
pub fn inter_ddg_deviations(scan: &AveragedScan) -> Vec<f64> {
    scan.residues
        .iter()
        .enumerate()
        .map(|(row, residue)| {
            population_sd(column(&scan.model_series, row), residue.energies.inter_ddg)
        })
        .collect()
}

fn column(series: &[ModelDdgSeries], row: usize) -> impl Iterator<Item = f64> + '_ {
    series.iter().map(move |model| model[row])
}

/// The averaged scan together with the SD of every residue row.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSummary {
    pub scan: AveragedScan,
    pub standard_deviations: Vec<f64>,
}

impl ScanSummary {
    pub fn new(scan: AveragedScan) -> Self {
        let standard_deviations = inter_ddg_deviations(&scan);
        Self {
            scan,
            standard_deviations,
        }
    }

    pub fn table(&self) -> SummaryTable<'_> {
        SummaryTable {
            header: &self.scan.header,
            inter_wild_type: self.scan.inter_wild_type,
            intra_wild_type: self.scan.intra_wild_type,
            column_titles: &self.scan.column_titles,
            residues: &self.scan.residues,
            standard_deviations: &self.standard_deviations,
        }
    }
}
