//src/asm/parser.rs

use crate::asm::instructions::Instruction;
use crate::asm::opcodes::{Opcode, OpcodeCategory};
use crate::asm::parse_errors::{ParseError, ParseResult};

/// Marqueur de registre: ouvre un nouveau champ mais reste dans le token
pub const REGISTER_MARKER: char = '$';

/// Prépare une ligne pour le découpage
///
/// `lw$t0,0` et `lw $t0, 0` donnent tous deux `lw  $t0 0`.
pub fn normalize_line(line: &str) -> String {
    let mut normalized = String::with_capacity(line.len() + 4);
    for c in line.trim().chars() {
        match c {
            REGISTER_MARKER => {
                normalized.push(' ');
                normalized.push(c);
            }
            ',' => normalized.push(' '),
            _ => normalized.push(c),
        }
    }
    normalized
}

/// Découpe une ligne normalisée en tokens
pub fn tokenize(line: &str) -> Vec<String> {
    normalize_line(line)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Analyse une ligne de texte
///
/// - `Ok(None)`: ligne vide, à ignorer silencieusement
/// - `Ok(Some(instr))`: instruction reconnue
/// - `Err(..)`: ligne rejetée (`Invalid` ou `Unknown`)
///
/// Fonction pure: pas d'état, pas d'effet de bord.
pub fn parse_line(line: &str) -> ParseResult<Option<Instruction>> {
    let tokens = tokenize(line);
    let Some(mnemonic) = tokens.first() else {
        return Ok(None);
    };

    let opcode = Opcode::from_mnemonic(mnemonic)
        .ok_or_else(|| ParseError::Unknown(mnemonic.clone()))?;

    let expected = opcode.min_tokens();
    if tokens.len() < expected {
        return Err(ParseError::Invalid {
            opcode,
            found: tokens.len(),
            expected,
        });
    }

    let instruction = match (opcode.category(), opcode) {
        (OpcodeCategory::Alu, _) => {
            Instruction::create_alu(opcode, &tokens[1], &tokens[2], &tokens[3])
        }
        // L'offset / adresse éventuel n'est pas modélisé
        (OpcodeCategory::Memory, Opcode::Load) => Instruction::create_load(&tokens[1]),
        (OpcodeCategory::Memory, _) => Instruction::create_store(&tokens[1]),
    };

    Ok(Some(instruction))
}
