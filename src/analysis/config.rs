//src/analysis/config.rs

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::errors::{StallError, StallResult};

/// Nombre maximal d'instructions retenues par programme
pub const DEFAULT_MAX_INSTRUCTIONS: usize = 6;

/// Mot-clé qui termine la saisie (comparé sans tenir compte de la casse)
pub const DEFAULT_TERMINATOR: &str = "END";

/// Traitement des lignes rejetées lors du calcul d'adjacence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjacencyPolicy {
    /// Les lignes rejetées sont retirées: leurs voisines deviennent adjacentes
    #[default]
    Compact,
    /// Une ligne rejetée garde sa place et sépare ses voisines
    Barrier,
}

/// Configuration de l'analyseur
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub max_instructions: usize,    // Nombre de lignes candidates retenues
    pub terminator: String,         // Ligne qui arrête la saisie
    pub adjacency: AdjacencyPolicy, // Politique d'adjacence des lignes rejetées
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_instructions: DEFAULT_MAX_INSTRUCTIONS,
            terminator: DEFAULT_TERMINATOR.to_string(),
            adjacency: AdjacencyPolicy::Compact,
        }
    }
}

impl AnalyzerConfig {
    /// Vérifie la cohérence de la configuration
    pub fn validate(&self) -> StallResult<()> {
        if self.max_instructions == 0 {
            return Err(StallError::config_error("max_instructions doit être > 0"));
        }
        if self.terminator.trim().is_empty() {
            return Err(StallError::config_error("terminator ne peut pas être vide"));
        }
        Ok(())
    }

    /// Lit une configuration TOML; les champs absents gardent leur valeur par défaut
    pub fn from_toml_str(content: &str) -> StallResult<Self> {
        let config: AnalyzerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Charge une configuration depuis un fichier TOML
    pub fn load<P: AsRef<Path>>(path: P) -> StallResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Le terminateur est comparé sur la ligne déjà nettoyée
    pub fn is_terminator(&self, trimmed_line: &str) -> bool {
        trimmed_line.eq_ignore_ascii_case(self.terminator.trim())
    }
}
