//! Writer for UCSF Chimera command scripts (`.com`) that colour a structure
//! residue by residue.

use crate::core::utils::identifiers::is_uppercase_code;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;

const SCRIPT_SUFFIX: &str = "ByddG_SD.com";

/// A colour given as red, green and blue fractions in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4},{:.4},{:.4}", self.r, self.g, self.b)
    }
}

/// Chimera atom specifier for one residue: `#model:number[icode][.chain]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidueSpec {
    pub model: u32,
    pub number: u32,
    pub icode: Option<char>,
    pub chain: char,
}

impl fmt::Display for ResidueSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}:{}", self.model, self.number)?;
        if let Some(icode) = self.icode.filter(|c| is_uppercase_code(*c)) {
            write!(f, "{}", icode)?;
        }
        if is_uppercase_code(self.chain) {
            write!(f, ".{}", self.chain)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColourDirective {
    pub colour: Rgb,
    pub target: ResidueSpec,
}

impl fmt::Display for ColourDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "color {} {}", self.colour, self.target)
    }
}

/// A complete ddG/SD colouring script.
///
/// The structure is opened twice: the ddG model is painted red (positive
/// ddG) or blue (negative ddG), the SD model is painted by SD.
#[derive(Debug, Clone, PartialEq)]
pub struct ChimeraScript {
    pub pdb_path: String,
    pub stats_path: String,
    pub background: String,
    pub neutral_colour: String,
    pub ddg_model: u32,
    pub sd_model: u32,
    pub positive: Vec<ColourDirective>,
    pub negative: Vec<ColourDirective>,
    pub sd: Vec<ColourDirective>,
}

impl ChimeraScript {
    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        writeln!(writer, "# Chimera script for colouring residues by ddG and SD.")?;
        writeln!(writer)?;
        writeln!(writer, "# PDB file: {}.", self.pdb_path)?;
        writeln!(writer, "# SD file: {}.", self.stats_path)?;
        writeln!(writer)?;
        writeln!(writer, "background solid {}", self.background)?;
        writeln!(writer)?;
        writeln!(writer, "open {}", self.pdb_path)?;
        writeln!(writer, "open {}", self.pdb_path)?;
        writeln!(writer)?;
        writeln!(writer, "color {} #{}", self.background, self.ddg_model)?;
        writeln!(writer, "color {} #{}", self.background, self.sd_model)?;

        writeln!(writer)?;
        writeln!(writer, "# Positive Values:")?;
        write_directives(writer, &self.positive)?;

        writeln!(writer, "\n")?;
        writeln!(writer, "# Negative Values:")?;
        write_directives(writer, &self.negative)?;

        writeln!(writer, "\n")?;
        writeln!(writer, "# SD colouring:")?;
        write_directives(writer, &self.sd)?;
        writeln!(writer, "color {} #{}:ala,gly", self.neutral_colour, self.sd_model)?;
        writeln!(writer)?;
        Ok(())
    }
}

fn write_directives(writer: &mut impl Write, directives: &[ColourDirective]) -> io::Result<()> {
    for directive in directives {
        writeln!(writer, "{}", directive)?;
    }
    Ok(())
}

/// Name of the script generated for `pdb_path`: the file name with dots
/// replaced by underscores, followed by `ByddG_SD.com`.
pub fn script_file_name(pdb_path: &str) -> String {
    let base = pdb_path
        .rfind(['/', '\\'])
        .map_or(pdb_path, |pos| &pdb_path[pos + 1..]);
    format!("{}{}", base.replace('.', "_"), SCRIPT_SUFFIX)
}

/// Where the script for `pdb_path` is written inside `output_dir`.
pub fn script_path(output_dir: &Path, pdb_path: &str) -> std::path::PathBuf {
    output_dir.join(script_file_name(pdb_path))
}
