//src/analysis/analyzer.rs

use log::{info, warn};

use crate::analysis::config::{AdjacencyPolicy, AnalyzerConfig};
use crate::analysis::hazard::{HazardDetectionUnit, LoadUseHazard, Slot};
use crate::analysis::sequence::SequenceBuilder;
use crate::asm::instructions::Instruction;
use crate::asm::parse_errors::RejectKind;
use crate::asm::parser::parse_line;

/// Ligne acceptée et son instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedLine {
    pub raw: String,
    pub instruction: Instruction,
}

/// Ligne ignorée et la raison du rejet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub raw: String,
    pub kind: RejectKind,
}

/// Resultat d'une analyse
///
/// `stall_count == hazards.len()`: chaque paire coûte au plus un cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    pub stall_count: u64,
    pub accepted: Vec<AcceptedLine>,
    pub skipped: Vec<SkippedLine>,
    pub hazards: Vec<LoadUseHazard>,
}

impl AnalysisResult {
    /// Instructions acceptées, dans l'ordre du programme
    pub fn instructions(&self) -> impl Iterator<Item = &Instruction> {
        self.accepted.iter().map(|line| &line.instruction)
    }

    pub fn skipped_raw(&self) -> Vec<&str> {
        self.skipped.iter().map(|line| line.raw.as_str()).collect()
    }
}

/// Analyseur de hazards load-use
///
/// Aucun état n'est conservé entre deux appels.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
    hazard_unit: HazardDetectionUnit,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            hazard_unit: HazardDetectionUnit::new(),
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Découpe le texte brut en lignes candidates
    pub fn build_sequence(&self, raw_text: &str) -> Vec<String> {
        SequenceBuilder::new(&self.config).build(raw_text)
    }

    /// Analyse une liste de lignes candidates
    pub fn analyze<S: AsRef<str>>(&self, candidate_lines: &[S]) -> AnalysisResult {
        let mut accepted = Vec::new();
        let mut skipped = Vec::new();
        // Ligne candidate d'origine de chaque entrée (acceptée ou barrière)
        let mut order: Vec<(usize, Option<usize>)> = Vec::new();

        for (line, raw) in candidate_lines.iter().map(|s| s.as_ref()).enumerate() {
            match parse_line(raw) {
                Ok(Some(instruction)) => {
                    order.push((line, Some(accepted.len())));
                    accepted.push(AcceptedLine { raw: raw.to_string(), instruction });
                }
                // Ligne vide: ignorée sans avertissement
                Ok(None) => {}
                Err(err) => {
                    warn!("Ligne {} ignorée ('{}'): {}", line + 1, raw, err);
                    order.push((line, None));
                    skipped.push(SkippedLine { raw: raw.to_string(), kind: err.kind() });
                }
            }
        }

        let slots: Vec<Slot<'_>> = order
            .iter()
            .filter_map(|&(line, index)| {
                let instruction = index.map(|i| &accepted[i].instruction);
                match (self.config.adjacency, instruction) {
                    (AdjacencyPolicy::Compact, None) => None,
                    _ => Some(Slot { line, instruction }),
                }
            })
            .collect();

        let hazards = self.hazard_unit.detect_hazards(&slots);
        let stall_count = hazards.len() as u64;

        info!(
            "Analyse terminée: {} instruction(s), {} ignorée(s), {} stall(s)",
            accepted.len(),
            skipped.len(),
            stall_count
        );

        AnalysisResult {
            stall_count,
            accepted,
            skipped,
            hazards,
        }
    }

    /// Texte brut -> résultat (saisie puis analyse)
    pub fn analyze_text(&self, raw_text: &str) -> AnalysisResult {
        let lines = self.build_sequence(raw_text);
        self.analyze(&lines)
    }
}

/// `analyze` avec la configuration par défaut
pub fn analyze<S: AsRef<str>>(candidate_lines: &[S]) -> AnalysisResult {
    Analyzer::default().analyze(candidate_lines)
}
