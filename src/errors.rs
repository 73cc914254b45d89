//src/errors.rs
use std::fmt;

use std::io::Error;

/// Erreurs de l'enveloppe (configuration, lecture du programme)
///
/// Le coeur (parser + analyseur) ne renvoie jamais d'erreur fatale.
#[derive(Debug, Clone, PartialEq)]
pub enum StallError {
    ConfigError(String),
    IoError(String),
}

impl StallError {
    pub fn config_error(msg: &str) -> Self {
        StallError::ConfigError(msg.to_string())
    }

    pub fn io_error(msg: &str) -> Self {
        StallError::IoError(msg.to_string())
    }
}

impl fmt::Display for StallError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StallError::ConfigError(msg) => write!(f, "ConfigError: {}", msg),
            StallError::IoError(msg) => write!(f, "IoError: {}", msg),
        }
    }
}

impl std::error::Error for StallError {}

impl From<Error> for StallError {
    fn from(err: Error) -> Self {
        StallError::IoError(format!("I/O Error: {}", err))
    }
}

impl From<toml::de::Error> for StallError {
    fn from(err: toml::de::Error) -> Self {
        StallError::ConfigError(format!("TOML invalide: {}", err))
    }
}

/// Resultat type pour les operations de l'enveloppe
pub type StallResult<T> = Result<T, StallError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_display() {
        assert_eq!(
            StallError::config_error("max_instructions doit être > 0").to_string(),
            "ConfigError: max_instructions doit être > 0"
        );
        assert_eq!(StallError::io_error("boom").to_string(), "IoError: boom");
    }

    #[test]
    fn test_from_io_error() {
        let err: StallError = Error::new(ErrorKind::NotFound, "absent").into();
        assert_eq!(err, StallError::IoError("I/O Error: absent".to_string()));
    }
}
