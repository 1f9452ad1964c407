//! Data structures describing alanine-scan results.
//!
//! - [`residue`] - Per-model residue records, their energy terms and the
//!   running aggregate built over several models.
//! - [`summary`] - Rows of an already aggregated ddG/SD table, as consumed by
//!   the colouring workflow.

pub mod residue;
pub mod summary;
