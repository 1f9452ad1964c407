use crate::core::io::bals::BalsFile;
use crate::core::models::residue::AggregatedResidue;
use thiserror::Error;
use tracing::debug;

/// Raw inter-molecular ddG of every residue row of one model, in row order.
pub type ModelDdgSeries = Vec<f64>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlignmentError {
    #[error("row {row} holds {found} but the first model has {expected}")]
    ResidueMismatch {
        row: usize,
        expected: String,
        found: String,
    },
    #[error("model has {found} residue rows but the first model has {expected}")]
    RowCount { expected: usize, found: usize },
}

/// Running aggregate over the models of one alanine scan.
///
/// The first model added seeds the residue rows, the header block and the
/// column titles. Every later model must list the same residues in the same
/// order; its energies are then added row by row.
#[derive(Debug, Default)]
pub struct Aggregator {
    header: Vec<String>,
    column_titles: String,
    inter_wild_type_sum: f64,
    intra_wild_type_sum: f64,
    residues: Vec<AggregatedResidue>,
    model_series: Vec<ModelDdgSeries>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model_count(&self) -> usize {
        self.model_series.len()
    }

    /// Adds one model to the aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`AlignmentError`] if the model's rows do not match the seeded
    /// rows by residue number and name. The aggregate is left untouched in
    /// that case.
    pub fn add_model(&mut self, model: BalsFile) -> Result<(), AlignmentError> {
        let series = model.inter_ddg_series();

        if self.model_series.is_empty() {
            debug!(rows = model.records.len(), "Seeding aggregate from first model.");
            self.header = model.header;
            self.column_titles = model.column_titles;
            self.residues = model.records.into_iter().map(AggregatedResidue::from).collect();
        } else {
            self.check_alignment(&model)?;
            for (residue, record) in self.residues.iter_mut().zip(&model.records) {
                residue.accumulate(record);
            }
        }

        self.inter_wild_type_sum += model.inter_wild_type.unwrap_or(0.0);
        self.intra_wild_type_sum += model.intra_wild_type.unwrap_or(0.0);
        self.model_series.push(series);
        Ok(())
    }

    fn check_alignment(&self, model: &BalsFile) -> Result<(), AlignmentError> {
        if model.records.len() != self.residues.len() {
            return Err(AlignmentError::RowCount {
                expected: self.residues.len(),
                found: model.records.len(),
            });
        }
        for (row, (residue, record)) in self.residues.iter().zip(&model.records).enumerate() {
            if residue.key() != record.key() {
                return Err(AlignmentError::ResidueMismatch {
                    row: row + 1,
                    expected: residue.key().to_string(),
                    found: record.key().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Divides every sum by the number of models.
    ///
    /// Returns `None` if no model was added.
    pub fn finish(mut self) -> Option<AveragedScan> {
        let models = self.model_count();
        if models == 0 {
            return None;
        }
        for residue in &mut self.residues {
            residue.finalize_average(models);
        }
        Some(AveragedScan {
            header: self.header,
            column_titles: self.column_titles,
            inter_wild_type: self.inter_wild_type_sum / models as f64,
            intra_wild_type: self.intra_wild_type_sum / models as f64,
            residues: self.residues,
            model_series: self.model_series,
        })
    }
}

/// Per-residue averages over all models, plus the raw series needed for SD.
#[derive(Debug, Clone, PartialEq)]
pub struct AveragedScan {
    pub header: Vec<String>,
    pub column_titles: String,
    pub inter_wild_type: f64,
    pub intra_wild_type: f64,
    pub residues: Vec<AggregatedResidue>,
    pub model_series: Vec<ModelDdgSeries>,
}

impl AveragedScan {
    pub fn model_count(&self) -> usize {
        self.model_series.len()
    }
}
