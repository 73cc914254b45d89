//src/asm/instructions.rs

use std::collections::BTreeSet;
use std::fmt;

use crate::asm::opcodes::Opcode;

/// Identifiant de registre
///
/// Chaîne opaque, comparée telle qu'écrite (`$t0` != `t0` != `$T0`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegisterId(pub String);

impl RegisterId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegisterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegisterId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// Instruction analysée
///
/// Même forme pour tous les opcodes: les ensembles non applicables
/// restent vides. Les champs sont privés, une instruction ne change plus
/// après sa construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    opcode: Opcode,
    reads: BTreeSet<RegisterId>,
    writes: BTreeSet<RegisterId>,
}

impl Instruction {
    /// Crée une instruction à partir de ses ensembles lecture/écriture
    pub fn new(
        opcode: Opcode,
        reads: impl IntoIterator<Item = RegisterId>,
        writes: impl IntoIterator<Item = RegisterId>,
    ) -> Self {
        Self {
            opcode,
            reads: reads.into_iter().collect(),
            writes: writes.into_iter().collect(),
        }
    }

    /// add/sub rd, rs, rt
    pub fn create_alu(opcode: Opcode, rd: &str, rs: &str, rt: &str) -> Self {
        Self::new(opcode, [RegisterId::from(rs), RegisterId::from(rt)], [RegisterId::from(rd)])
    }

    /// lw rd
    pub fn create_load(rd: &str) -> Self {
        Self {
            opcode: Opcode::Load,
            reads: BTreeSet::new(),
            writes: BTreeSet::from([RegisterId::from(rd)]),
        }
    }

    /// sw rs
    pub fn create_store(rs: &str) -> Self {
        Self {
            opcode: Opcode::Store,
            reads: BTreeSet::from([RegisterId::from(rs)]),
            writes: BTreeSet::new(),
        }
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    pub fn reads(&self) -> &BTreeSet<RegisterId> {
        &self.reads
    }

    pub fn writes(&self) -> &BTreeSet<RegisterId> {
        &self.writes
    }

    /// Registre produit par un Load, s'il y en a un
    pub fn loaded_register(&self) -> Option<&RegisterId> {
        if self.opcode.is_load() {
            self.writes.iter().next()
        } else {
            None
        }
    }

    pub fn reads_register(&self, reg: &RegisterId) -> bool {
        self.reads.contains(reg)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | reads: [{}] | writes: [{}]",
            self.opcode,
            join_registers(&self.reads),
            join_registers(&self.writes)
        )
    }
}

fn join_registers(set: &BTreeSet<RegisterId>) -> String {
    set.iter().map(RegisterId::as_str).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alu_instruction_shape() {
        let instr = Instruction::create_alu(Opcode::Add, "$t2", "$t0", "$t3");
        assert_eq!(instr.opcode(), Opcode::Add);
        assert_eq!(instr.writes().len(), 1);
        assert_eq!(instr.reads().len(), 2);
        assert!(instr.reads_register(&RegisterId::from("$t0")));
        assert!(instr.reads_register(&RegisterId::from("$t3")));
        assert!(!instr.reads_register(&RegisterId::from("$t2")));
        assert_eq!(instr.loaded_register(), None);
    }

    #[test]
    fn test_same_source_twice_collapses() {
        // add $t2, $t1, $t1 -> un seul registre lu
        let instr = Instruction::create_alu(Opcode::Sub, "$t2", "$t1", "$t1");
        assert_eq!(instr.reads().len(), 1);
    }

    #[test]
    fn test_load_and_store_shape() {
        let load = Instruction::create_load("$t0");
        assert!(load.reads().is_empty());
        assert_eq!(load.loaded_register(), Some(&RegisterId::from("$t0")));

        let store = Instruction::create_store("$t0");
        assert!(store.writes().is_empty());
        assert!(store.reads_register(&RegisterId::from("$t0")));
        assert_eq!(store.loaded_register(), None);
    }

    #[test]
    fn test_register_equality_is_exact() {
        assert_ne!(RegisterId::from("$t0"), RegisterId::from("t0"));
        assert_ne!(RegisterId::from("$t0"), RegisterId::from("$T0"));
        assert_eq!(RegisterId::new("$s1".to_string()), RegisterId::from("$s1"));
    }

    #[test]
    fn test_display_summary() {
        let instr = Instruction::create_alu(Opcode::Add, "$t2", "$t0", "$t3");
        assert_eq!(instr.to_string(), "add | reads: [$t0, $t3] | writes: [$t2]");

        let load = Instruction::create_load("$t0");
        assert_eq!(load.to_string(), "lw | reads: [] | writes: [$t0]");
    }
}
