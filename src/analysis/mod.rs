//src/analysis/

pub mod config;
pub mod sequence;
pub mod hazard;
pub mod analyzer;
pub mod report;

pub use analyzer::{analyze, AcceptedLine, AnalysisResult, Analyzer, SkippedLine};
pub use config::{AdjacencyPolicy, AnalyzerConfig};
pub use hazard::{count_stalls, HazardDetectionUnit, LoadUseHazard};
pub use sequence::{build_sequence, SequenceBuilder};
