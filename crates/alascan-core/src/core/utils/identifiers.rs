use crate::core::models::residue::BLANK_CHAIN;
use phf::{Set, phf_set};

/// Residues without a side chain to mutate; they get a fixed colour instead of an SD shade.
static SD_UNCOLOURED_RESIDUES: Set<&'static str> = phf_set! {
    "ALA", "GLY",
};

/// Token written in place of a blank chain identifier.
pub const BLANK_CHAIN_TOKEN: &str = "XX";

pub fn is_sd_uncoloured(residue_name: &str) -> bool {
    SD_UNCOLOURED_RESIDUES.contains(residue_name.trim())
}

pub fn is_uppercase_code(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// How a chain token read from a table is turned into a chain identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChainCheck {
    /// Keep the first character of the token, whatever it is.
    #[default]
    AnyCharacter,
    /// Keep the first character only if it is an uppercase ASCII letter,
    /// otherwise treat the residue as having no chain.
    UppercaseOnly,
}

impl ChainCheck {
    pub fn chain_from_token(self, token: &str) -> char {
        if token == BLANK_CHAIN_TOKEN {
            return BLANK_CHAIN;
        }
        let Some(first) = token.chars().next() else {
            return BLANK_CHAIN;
        };
        match self {
            ChainCheck::AnyCharacter => first,
            ChainCheck::UppercaseOnly if is_uppercase_code(first) => first,
            ChainCheck::UppercaseOnly => BLANK_CHAIN,
        }
    }
}

/// Formats a chain identifier for a table column.
pub fn chain_token(chain: char) -> String {
    if chain == BLANK_CHAIN {
        BLANK_CHAIN_TOKEN.to_string()
    } else {
        chain.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alanine_and_glycine_are_not_sd_coloured() {
        assert!(is_sd_uncoloured("ALA"));
        assert!(is_sd_uncoloured("GLY"));
        assert!(!is_sd_uncoloured("LYS"));
        assert!(!is_sd_uncoloured("ala"));
    }

    #[test]
    fn sentinel_token_reads_back_as_blank_chain() {
        assert_eq!(ChainCheck::AnyCharacter.chain_from_token("XX"), BLANK_CHAIN);
        assert_eq!(chain_token(BLANK_CHAIN), "XX");
        assert_eq!(chain_token('B'), "B");
    }

    // The upstream tool's chain test is always true, so any character passes.
    #[test]
    fn any_character_check_keeps_first_character_unvalidated() {
        assert_eq!(ChainCheck::AnyCharacter.chain_from_token("B"), 'B');
        assert_eq!(ChainCheck::AnyCharacter.chain_from_token("b"), 'b');
        assert_eq!(ChainCheck::AnyCharacter.chain_from_token("7x"), '7');
    }

    #[test]
    fn uppercase_check_blanks_non_letter_chains() {
        assert_eq!(ChainCheck::UppercaseOnly.chain_from_token("A"), 'A');
        assert_eq!(ChainCheck::UppercaseOnly.chain_from_token("a"), BLANK_CHAIN);
        assert_eq!(ChainCheck::UppercaseOnly.chain_from_token("1"), BLANK_CHAIN);
    }
}
