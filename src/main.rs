// src/main.rs

use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{error, info};

use PunkStall::analysis::report::AnalysisReport;
use PunkStall::analysis::{AdjacencyPolicy, Analyzer, AnalyzerConfig};
use PunkStall::errors::StallResult;

/// Détecteur de hazards load-use (add, sub, lw, sw)
#[derive(Parser, Debug)]
#[command(name = "punkstall", version)]
struct Cli {
    /// Fichier programme (une instruction par ligne); stdin si absent
    program: Option<PathBuf>,

    /// Configuration TOML (max_instructions, terminator, adjacency)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Remplace le plafond d'instructions de la configuration
    #[arg(long)]
    max_instructions: Option<usize>,

    /// Les lignes ignorées séparent leurs voisines
    #[arg(long)]
    barrier: bool,

    /// Horodate le rapport
    #[arg(long)]
    timestamp: bool,

    /// Logs de debug
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(cli: &Cli) -> StallResult<AnalyzerConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Chargement de la configuration '{}'", path.display());
            AnalyzerConfig::load(path)?
        }
        None => AnalyzerConfig::default(),
    };

    if let Some(max) = cli.max_instructions {
        config.max_instructions = max;
    }
    if cli.barrier {
        config.adjacency = AdjacencyPolicy::Barrier;
    }
    config.validate()?;
    Ok(config)
}

fn read_program(cli: &Cli) -> StallResult<String> {
    match &cli.program {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn run(cli: &Cli) -> StallResult<()> {
    let config = load_config(cli)?;
    let text = read_program(cli)?;

    let analyzer = Analyzer::new(config);
    let result = analyzer.analyze_text(&text);

    let mut report = AnalysisReport::new(&result);
    if cli.timestamp {
        report = report.with_timestamp(chrono::Local::now());
    }
    print!("{}", report.render());
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    if let Err(e) = run(&cli) {
        error!("{}", e);
        process::exit(1);
    }
}
