//! # Alascan Core Library
//!
//! Post-processing for computational alanine-scanning runs: averaging the
//! per-model ddG result files of a scan, measuring how much each residue's
//! ddG varies between models, and turning the averaged table into a
//! structure colouring script.
//!
//! ## Architectural Philosophy
//!
//! The library keeps the same three layers throughout.
//!
//! - **[`core`]: The Foundation.** Residue records, the fixed-row result file
//!   format, the aggregated table, PDB chain splitting and the Chimera script
//!   writer. Nothing in this layer touches more than one file at a time.
//!
//! - **[`engine`]: The Logic Core.** Accumulates models row by row while checking
//!   that every model lists the same residues, finalizes the averages, computes
//!   population standard deviations and partitions residues for colouring.
//!
//! - **[`workflows`]: The Public API.** Complete procedures (`summarize`,
//!   `colour`, `divide`, `export`) that open the files, drive the engine and
//!   report progress.

pub mod core;
pub mod engine;
pub mod workflows;
