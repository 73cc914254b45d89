//src/analysis/report.rs

use std::fmt::Write;

use chrono::{DateTime, Local};

use crate::analysis::analyzer::AnalysisResult;

/// Rendu texte d'une analyse, pour l'appelant (CLI)
#[derive(Debug, Clone)]
pub struct AnalysisReport<'a> {
    pub result: &'a AnalysisResult,
    pub generated_at: Option<DateTime<Local>>,
}

impl<'a> AnalysisReport<'a> {
    pub fn new(result: &'a AnalysisResult) -> Self {
        Self {
            result,
            generated_at: None,
        }
    }

    /// Ajoute l'horodatage en tête du rapport
    pub fn with_timestamp(mut self, at: DateTime<Local>) -> Self {
        self.generated_at = Some(at);
        self
    }

    /// Une ligne d'avertissement par ligne ignorée
    pub fn warnings(&self) -> Vec<String> {
        self.result
            .skipped
            .iter()
            .map(|line| format!("Instruction ignorée ({}): `{}`", line.kind, line.raw))
            .collect()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        if let Some(at) = self.generated_at {
            let _ = writeln!(out, "===== ANALYSE LOAD-USE ({}) =====", at.format("%Y-%m-%d %H:%M:%S"));
        } else {
            let _ = writeln!(out, "===== ANALYSE LOAD-USE =====");
        }

        for warning in self.warnings() {
            let _ = writeln!(out, "[!] {}", warning);
        }

        let _ = writeln!(out, "Total Stalls: {}", self.result.stall_count);

        let _ = writeln!(out, "\nInstructions analysées:");
        if self.result.accepted.is_empty() {
            let _ = writeln!(out, "  Aucune instruction valide.");
        }
        for (i, line) in self.result.accepted.iter().enumerate() {
            let _ = writeln!(out, "  {}: `{}` -> {}", i + 1, line.raw, line.instruction);
        }

        if !self.result.hazards.is_empty() {
            let _ = writeln!(out, "\nHazards:");
            for hazard in &self.result.hazards {
                let _ = writeln!(
                    out,
                    "  ligne {} -> ligne {} ({})",
                    hazard.producer + 1,
                    hazard.consumer + 1,
                    hazard.register
                );
            }
        }

        out
    }
}
