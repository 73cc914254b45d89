//src/asm/opcodes.rs

use std::fmt;

/// Représente les opcodes supportés par l'analyseur
///
/// Sous-ensemble load/store fermé: toute autre mnémonique est rejetée
/// par le parser comme `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    // Instructions ALU (0x00 - 0x1F)
    Add = 0x01,
    Sub = 0x02,

    // Instructions d'accès mémoire (0x60 - 0x7F)
    Load = 0x60,
    Store = 0x61,
}

/// Catégorie d'opcode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpcodeCategory {
    Alu,
    Memory,
}

impl Opcode {
    /// Tous les opcodes connus, dans l'ordre de déclaration
    pub const ALL: [Opcode; 4] = [Opcode::Add, Opcode::Sub, Opcode::Load, Opcode::Store];

    /// Convertit une mnémonique en Opcode (sensible à la casse)
    pub fn from_mnemonic(token: &str) -> Option<Self> {
        match token {
            "add" => Some(Self::Add),
            "sub" => Some(Self::Sub),
            "lw" => Some(Self::Load),
            "sw" => Some(Self::Store),
            _ => None,
        }
    }

    /// Mnémonique telle qu'elle s'écrit dans le source
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Load => "lw",
            Self::Store => "sw",
        }
    }

    /// Nombre minimal de tokens (opcode compris) pour une ligne valide
    pub fn min_tokens(&self) -> usize {
        match self.category() {
            // add rd, rs, rt
            OpcodeCategory::Alu => 4,
            // lw rd [, offset] / sw rs [, offset]
            OpcodeCategory::Memory => 2,
        }
    }

    pub fn is_load(&self) -> bool {
        matches!(self, Self::Load)
    }

    pub fn is_store(&self) -> bool {
        matches!(self, Self::Store)
    }

    /// Retourne la categorie de l'opcode
    pub fn category(&self) -> OpcodeCategory {
        match *self as u8 {
            0x00..=0x1F => OpcodeCategory::Alu,
            _ => OpcodeCategory::Memory,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_from_mnemonic() {
        assert_eq!(Opcode::from_mnemonic("add"), Some(Opcode::Add));
        assert_eq!(Opcode::from_mnemonic("sub"), Some(Opcode::Sub));
        assert_eq!(Opcode::from_mnemonic("lw"), Some(Opcode::Load));
        assert_eq!(Opcode::from_mnemonic("sw"), Some(Opcode::Store));

        // Sensible à la casse
        assert_eq!(Opcode::from_mnemonic("ADD"), None);
        assert_eq!(Opcode::from_mnemonic("Lw"), None);
        assert_eq!(Opcode::from_mnemonic("nop"), None);
        assert_eq!(Opcode::from_mnemonic(""), None);
    }

    #[test]
    fn test_mnemonic_roundtrip() {
        for op in Opcode::ALL {
            assert_eq!(Opcode::from_mnemonic(op.mnemonic()), Some(op));
            assert_eq!(op.to_string(), op.mnemonic());
        }
    }

    #[test]
    fn test_opcode_category() {
        assert_eq!(Opcode::Add.category(), OpcodeCategory::Alu);
        assert_eq!(Opcode::Sub.category(), OpcodeCategory::Alu);
        assert_eq!(Opcode::Load.category(), OpcodeCategory::Memory);
        assert_eq!(Opcode::Store.category(), OpcodeCategory::Memory);
    }

    #[test]
    fn test_min_tokens() {
        assert_eq!(Opcode::Add.min_tokens(), 4);
        assert_eq!(Opcode::Sub.min_tokens(), 4);
        assert_eq!(Opcode::Load.min_tokens(), 2);
        assert_eq!(Opcode::Store.min_tokens(), 2);
    }

    #[test]
    fn test_load_store_flags() {
        assert!(Opcode::Load.is_load());
        assert!(!Opcode::Store.is_load());
        assert!(Opcode::Store.is_store());
        assert!(!Opcode::Add.is_load());
        assert!(!Opcode::Sub.is_store());
    }
}
