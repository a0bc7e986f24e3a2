use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use textseek::search::matcher::{automaton_search, naive_search};
use textseek::search::normalize::fold_case;
use textseek::{run, Algorithm, Document, SearchConfig};

fn create_documents(count: usize, lines_per_document: usize) -> Vec<Document> {
    (0..count)
        .map(|i| {
            let mut text = String::new();
            for j in 0..lines_per_document {
                text.push_str(&format!(
                    "Line {} TODO: fix bug {} FIXME: optimize line {} NOTE: important task {}\n",
                    j, j, j, i
                ));
            }
            Document::from_text(format!("doc_{}.txt", i), &text)
        })
        .collect()
}

fn bench_matchers(c: &mut Criterion) {
    // Highly repetitive input is the naive scan's worst case.
    let text: Vec<char> = "a".repeat(100_000).chars().collect();
    let pattern: Vec<char> = format!("{}b", "a".repeat(63)).chars().collect();
    let prose: Vec<char> = fold_case(&"the quick brown fox jumps over the lazy dog ".repeat(2_000));
    let word: Vec<char> = "lazy".chars().collect();

    let mut group = c.benchmark_group("Matchers");
    group.bench_function("naive/repetitive", |b| {
        b.iter(|| black_box(naive_search(&text, &pattern)))
    });
    group.bench_function("automaton/repetitive", |b| {
        b.iter(|| black_box(automaton_search(&text, &pattern)))
    });
    group.bench_function("naive/prose", |b| {
        b.iter(|| black_box(naive_search(&prose, &word)))
    });
    group.bench_function("automaton/prose", |b| {
        b.iter(|| black_box(automaton_search(&prose, &word)))
    });
    group.finish();
}

fn bench_document_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Document Scaling");
    for count in [1, 10, 100] {
        let documents = create_documents(count, 100);
        for algorithm in [Algorithm::Naive, Algorithm::Automaton] {
            let config = SearchConfig::new("TODO")
                .with_algorithm(algorithm)
                .case_insensitive()
                .whole_words();
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), count),
                &documents,
                |b, documents| b.iter(|| black_box(run(documents, &config).unwrap())),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_matchers, bench_document_scaling);
criterion_main!(benches);
