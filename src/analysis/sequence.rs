//src/analysis/sequence.rs

use log::debug;

use crate::analysis::config::AnalyzerConfig;

/// Politique de saisie: découpe le texte brut en lignes candidates
///
/// Pour chaque ligne, dans l'ordre: nettoyage, arrêt sur le terminateur,
/// saut des lignes vides, puis arrêt dès que le plafond est atteint.
pub struct SequenceBuilder<'a> {
    config: &'a AnalyzerConfig,
}

impl<'a> SequenceBuilder<'a> {
    pub fn new(config: &'a AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Retourne les lignes candidates (nettoyées), au plus `max_instructions`
    pub fn build(&self, raw_text: &str) -> Vec<String> {
        let mut candidates = Vec::new();

        for line in raw_text.lines() {
            let clean_line = line.trim();

            if self.config.is_terminator(clean_line) {
                debug!("Terminateur '{}' rencontré, fin de la saisie", clean_line);
                break;
            }
            if clean_line.is_empty() {
                continue;
            }

            candidates.push(clean_line.to_string());

            if candidates.len() >= self.config.max_instructions {
                debug!(
                    "Plafond de {} lignes atteint, lignes suivantes ignorées",
                    self.config.max_instructions
                );
                break;
            }
        }

        candidates
    }
}

/// `build_sequence` avec la configuration par défaut
pub fn build_sequence(raw_text: &str) -> Vec<String> {
    SequenceBuilder::new(&AnalyzerConfig::default()).build(raw_text)
}
