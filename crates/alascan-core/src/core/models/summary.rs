/// One residue of an aggregated ddG/SD table.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryEntry {
    pub index: u32,
    pub number: u32,
    pub name: String,
    pub chain: char,
    pub icode: Option<char>,
    pub ddg: f64,
    pub sd: f64,
}

impl SummaryEntry {
    pub fn new(index: u32, number: u32, name: &str, chain: char, ddg: f64, sd: f64) -> Self {
        Self {
            index,
            number,
            name: name.to_string(),
            chain,
            icode: None,
            ddg,
            sd,
        }
    }
}
