//! Readers and writers for the plain-text formats around an alanine scan.
//!
//! - [`bals`] - Per-model result files: fixed header layout and residue rows.
//! - [`table`] - The averaged residue table with its SD column.
//! - [`summary`] - Reading an averaged table back for colouring.
//! - [`chimera`] - Chimera colouring scripts.
//! - [`pdb`] - Splitting PDB files into model/chain pieces.
//! - [`export`] - Flat tab-separated export of raw per-run residue rows.
//! - [`list`] - Lists of result-file paths.

pub mod bals;
pub mod chimera;
pub mod export;
pub mod list;
pub mod pdb;
pub mod summary;
pub mod table;
pub mod traits;
