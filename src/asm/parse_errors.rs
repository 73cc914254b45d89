//src/asm/parse_errors.rs

use std::fmt;

use crate::asm::opcodes::Opcode;

/// Rejet d'une ligne par le parser
///
/// Une ligne vide n'est pas une erreur (voir `parse_line`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Opcode connu mais opérandes manquants
    Invalid {
        opcode: Opcode,
        found: usize,
        expected: usize,
    },
    /// Mnémonique hors du jeu d'instructions
    Unknown(String),
}

/// Nature du rejet, sans le détail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectKind {
    Invalid,
    Unknown,
}

impl ParseError {
    pub fn kind(&self) -> RejectKind {
        match self {
            Self::Invalid { .. } => RejectKind::Invalid,
            Self::Unknown(_) => RejectKind::Unknown,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid { opcode, found, expected } => write!(
                f,
                "Instruction '{}' invalide: {} token(s), {} attendu(s)",
                opcode, found, expected
            ),
            Self::Unknown(mnemonic) => write!(f, "Instruction non supportée: '{}'", mnemonic),
        }
    }
}

impl std::error::Error for ParseError {}

impl fmt::Display for RejectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => write!(f, "INVALID"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Resultat type pour le parsing d'une ligne
pub type ParseResult<T> = Result<T, ParseError>;
