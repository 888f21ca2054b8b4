use criterion::{black_box, criterion_group, criterion_main, Criterion};
use triage_engine::{Evaluator, SymptomInput};

fn bench_evaluate(c: &mut Criterion) {
    let evaluator = Evaluator::builtin();
    let no_match = SymptomInput::new(["headache"]);
    let multi = SymptomInput::new([
        "chest pain",
        "shortness of breath",
        "fatigue",
        "fever",
        "cough",
        "sore throat",
    ]);

    c.bench_function("evaluate_no_match", |b| {
        b.iter(|| evaluator.evaluate(black_box(&no_match)))
    });
    c.bench_function("evaluate_many_matches", |b| {
        b.iter(|| evaluator.evaluate(black_box(&multi)))
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
