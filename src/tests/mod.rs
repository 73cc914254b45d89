// src/tests/mod.rs
// Scénarios de bout en bout: texte brut -> saisie -> parsing -> stalls
