// benches/hazard_analysis_benchmarks.rs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use PunkStall::analysis::{build_sequence, Analyzer, AnalyzerConfig};
use PunkStall::asm::parse_line;

/// Crée un programme aléatoire de `len` lignes (lw/sw/add/sub)
fn create_random_program(rng: &mut StdRng, len: usize) -> String {
    let regs = ["$t0", "$t1", "$t2", "$t3"];
    let reg = |rng: &mut StdRng| regs[rng.random_range(0..regs.len())];
    (0..len)
        .map(|_| match rng.random_range(0..4) {
            0 => format!("lw {}, 0", reg(rng)),
            1 => format!("sw {}, 4", reg(rng)),
            2 => format!("add {}, {}, {}", reg(rng), reg(rng), reg(rng)),
            _ => format!("sub {}, {}, {}", reg(rng), reg(rng), reg(rng)),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_parse_line(c: &mut Criterion) {
    c.bench_function("parse_line_add", |b| {
        b.iter(|| parse_line(black_box("add $t2, $t0, $t3")))
    });
    c.bench_function("parse_line_compact_lw", |b| {
        b.iter(|| parse_line(black_box("lw$t0,0")))
    });
}

fn bench_analyze_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_text");
    let mut rng = StdRng::seed_from_u64(1234);

    for &len in &[6usize, 64, 1024] {
        let text = create_random_program(&mut rng, len);
        let analyzer = Analyzer::new(AnalyzerConfig {
            max_instructions: len,
            ..Default::default()
        });
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| analyzer.analyze_text(black_box(text)))
        });
    }
    group.finish();
}

fn bench_build_sequence(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(99);
    let text = create_random_program(&mut rng, 512);
    c.bench_function("build_sequence_512_lines", |b| {
        b.iter(|| build_sequence(black_box(&text)))
    });
}

criterion_group!(benches, bench_parse_line, bench_analyze_text, bench_build_sequence);
criterion_main!(benches);
