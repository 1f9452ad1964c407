use super::config::ColourConfig;
use crate::core::io::chimera::{ChimeraScript, ColourDirective, ResidueSpec, Rgb};
use crate::core::models::summary::SummaryEntry;
use crate::core::utils::identifiers::is_sd_uncoloured;
use tracing::debug;

/// Residues of a summary table split by the sign of their ddG.
///
/// Entries whose ddG lies within the zero threshold belong to neither side.
#[derive(Debug, Clone, PartialEq)]
pub struct DdgPartition<'a> {
    pub positive: Vec<&'a SummaryEntry>,
    pub negative: Vec<&'a SummaryEntry>,
    /// Largest ddG magnitude among the classified residues.
    pub abs_max: f64,
    /// Largest SD over all residues.
    pub max_sd: f64,
}

pub fn partition(entries: &[SummaryEntry], zero_threshold: f64) -> DdgPartition<'_> {
    let mut positive = Vec::new();
    let mut negative = Vec::new();
    let mut max_positive = 0.0f64;
    let mut min_negative = 0.0f64;
    let mut max_sd = 0.0f64;

    for entry in entries {
        if entry.ddg > zero_threshold {
            max_positive = max_positive.max(entry.ddg);
            positive.push(entry);
        } else if entry.ddg < -zero_threshold {
            min_negative = min_negative.min(entry.ddg);
            negative.push(entry);
        }
        max_sd = max_sd.max(entry.sd);
    }

    DdgPartition {
        positive,
        negative,
        abs_max: max_positive.max(-min_negative),
        max_sd,
    }
}

/// White fading to red as ddG approaches the largest magnitude.
pub fn positive_colour(ddg: f64, abs_max: f64) -> Rgb {
    let r = 1.0 - ddg / abs_max;
    Rgb::new(1.0, r, r)
}

/// White fading to blue as ddG approaches the largest magnitude.
pub fn negative_colour(ddg: f64, abs_max: f64) -> Rgb {
    let r = 1.0 + ddg / abs_max;
    Rgb::new(r, r, 1.0)
}

/// Magenta channel scaled by SD; a table with no spread paints every residue magenta.
pub fn sd_colour(sd: f64, max_sd: f64) -> Rgb {
    let s = if max_sd > 0.0 { sd / max_sd } else { 0.0 };
    Rgb::new(1.0, s, 1.0)
}

fn residue_spec(model: u32, entry: &SummaryEntry) -> ResidueSpec {
    ResidueSpec {
        model,
        number: entry.number,
        icode: entry.icode,
        chain: entry.chain,
    }
}

/// Builds the colouring script for a summary table.
pub fn build_script(
    entries: &[SummaryEntry],
    pdb_path: &str,
    stats_path: &str,
    config: &ColourConfig,
) -> ChimeraScript {
    let split = partition(entries, config.zero_threshold);
    debug!(
        positive = split.positive.len(),
        negative = split.negative.len(),
        abs_max = split.abs_max,
        max_sd = split.max_sd,
        "Partitioned residues by ddG sign."
    );

    let positive = split
        .positive
        .iter()
        .map(|entry| ColourDirective {
            colour: positive_colour(entry.ddg, split.abs_max),
            target: residue_spec(config.ddg_model, entry),
        })
        .collect();
    let negative = split
        .negative
        .iter()
        .map(|entry| ColourDirective {
            colour: negative_colour(entry.ddg, split.abs_max),
            target: residue_spec(config.ddg_model, entry),
        })
        .collect();
    let sd = entries
        .iter()
        .filter(|entry| !is_sd_uncoloured(&entry.name))
        .map(|entry| ColourDirective {
            colour: sd_colour(entry.sd, split.max_sd),
            target: residue_spec(config.sd_model, entry),
        })
        .collect();

    ChimeraScript {
        pdb_path: pdb_path.to_string(),
        stats_path: stats_path.to_string(),
        background: config.background.clone(),
        neutral_colour: config.neutral_colour.clone(),
        ddg_model: config.ddg_model,
        sd_model: config.sd_model,
        positive,
        negative,
        sd,
    }
}
