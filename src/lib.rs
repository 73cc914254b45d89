
pub mod asm;
pub mod analysis;
pub mod errors;
pub mod tests;

//
// Re-export des modules principaux
pub use analysis::{analyze, build_sequence, AnalysisResult, Analyzer, AnalyzerConfig};
pub use asm::{parse_line, Instruction, Opcode};
