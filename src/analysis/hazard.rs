//src/analysis/hazard.rs

use log::debug;

use crate::asm::instructions::{Instruction, RegisterId};

/// Hazard load-use entre deux instructions consécutives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadUseHazard {
    pub producer: usize,     // Ligne candidate du Load
    pub consumer: usize,     // Ligne candidate qui lit le registre chargé
    pub register: RegisterId,
}

/// Position dans la séquence d'issue
///
/// `instruction == None` représente une ligne rejetée conservée comme
/// barrière: elle ne lit ni n'écrit aucun registre.
#[derive(Debug, Clone, Copy)]
pub struct Slot<'a> {
    pub line: usize,
    pub instruction: Option<&'a Instruction>,
}

/// Unité de détection de hazards load-use
///
/// Modèle à un seul delay slot, sans forwarding: seule la paire
/// (i, i+1) est examinée, et elle coûte au plus un cycle.
#[derive(Debug, Default, Clone, Copy)]
pub struct HazardDetectionUnit;

impl HazardDetectionUnit {
    /// Crée une nouvelle unité de détection de hazards
    pub fn new() -> Self {
        Self
    }

    /// Registre chargé par `producer` et lu par `consumer`, s'il existe
    pub fn detect_load_use<'a>(
        producer: &'a Instruction,
        consumer: &Instruction,
    ) -> Option<&'a RegisterId> {
        producer
            .loaded_register()
            .filter(|reg| consumer.reads_register(reg))
    }

    /// Parcourt les paires adjacentes et retourne chaque hazard détecté
    pub fn detect_hazards(&self, slots: &[Slot<'_>]) -> Vec<LoadUseHazard> {
        slots
            .windows(2)
            .filter_map(|pair| {
                let (prev, next) = (pair[0], pair[1]);
                let register = Self::detect_load_use(prev.instruction?, next.instruction?)?;
                debug!(
                    "Hazard load-use: ligne {} -> ligne {} sur {}",
                    prev.line + 1,
                    next.line + 1,
                    register
                );
                Some(LoadUseHazard {
                    producer: prev.line,
                    consumer: next.line,
                    register: register.clone(),
                })
            })
            .collect()
    }

    /// Nombre de cycles de stall pour une séquence d'instructions déjà analysées
    pub fn count_stalls(&self, instructions: &[Instruction]) -> u64 {
        instructions
            .windows(2)
            .filter(|pair| Self::detect_load_use(&pair[0], &pair[1]).is_some())
            .count() as u64
    }
}

/// `count_stalls` sans instancier l'unité
pub fn count_stalls(instructions: &[Instruction]) -> u64 {
    HazardDetectionUnit::new().count_stalls(instructions)
}
