// benches/pipeline.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use skillmap::{
    analysis,
    config::RankingOptions,
    PostingRecord, SkillNormalizer,
};

const CITIES: [&str; 6] = ["Austin", "Boston", "Chicago", " Denver", "New York", "Remote"];
const ROLES: [&str; 4] = ["Data Analyst", "Data Scientist", "ML Engineer", "BI Developer"];
const SKILLS: [&str; 12] = [
    "sql", "Python", "pytorch", "power bi", "Tableau", "aws", "Excel",
    "scikit learn", "etl pipelines", "R", "git", "a/b testing",
];

/// Deterministic synthetic postings.
fn synthetic(n: usize) -> Vec<PostingRecord> {
    (0..n)
        .map(|i| {
            let skills: Vec<&str> = (0..5).map(|k| SKILLS[(i * 7 + k * 5) % SKILLS.len()]).collect();
            PostingRecord::new(
                format!("Job {i}"),
                ROLES[i % ROLES.len()],
                CITIES[i % CITIES.len()],
                "Co",
                skills.join(", "),
            )
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let records = synthetic(5_000);
    let normalizer = SkillNormalizer::default();
    let ranking = RankingOptions::default();

    c.bench_function("normalize_tokens", |b| {
        b.iter(|| {
            for s in SKILLS {
                black_box(normalizer.normalize(black_box(s)));
            }
        })
    });

    c.bench_function("analyze_5k", |b| {
        b.iter(|| {
            let a = analysis::analyze(black_box(&records), &normalizer, &ranking);
            black_box(a.recommendations.len())
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
