//! # Core Module
//!
//! Stateless building blocks shared by the aggregation and colouring
//! workflows.
//!
//! - **Data Models** ([`models`]) - Residue records, running aggregates and
//!   summary rows.
//! - **File I/O** ([`io`]) - Parsers and writers for result files, averaged
//!   tables, Chimera scripts, PDB files and exports.
//! - **Identifiers** ([`utils`]) - Chain and residue-name conventions.

pub mod io;
pub mod models;
pub mod utils;
