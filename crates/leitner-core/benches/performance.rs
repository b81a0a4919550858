// Rust guideline compliant 2026-10-19

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use leitner_core::{
    deserialize, due, serialize, update, BucketStore, Difficulty, Flashcard, StateFile,
    RETIRED_BUCKET,
};
use tempfile::TempDir;

fn build_store(count: usize) -> BucketStore {
    let cards = (0..count).map(|i| {
        Flashcard::new(format!("Question {}", i), format!("Answer {}", i))
            .expect("valid card")
            .with_tags(["bench"])
    });
    let mut store = BucketStore::with_cards(cards).expect("unique cards");

    for i in 0..count {
        let promotions = i as u32 % RETIRED_BUCKET;
        for step in 0..promotions {
            store
                .review(
                    &format!("Question {}", i),
                    &format!("Answer {}", i),
                    Difficulty::Easy,
                    step as i64,
                )
                .expect("review");
        }
    }
    store
}

fn bench_due(c: &mut Criterion) {
    let store = build_store(1000);
    c.bench_function("due_1000", |b| {
        b.iter(|| black_box(due(store.buckets(), black_box(8))))
    });
}

fn bench_update(c: &mut Criterion) {
    let store = build_store(1000);
    let card = Flashcard::new("Question 500", "Answer 500").expect("valid card");
    c.bench_function("update_1000", |b| {
        b.iter(|| black_box(update(store.buckets(), &card, Difficulty::Easy)))
    });
}

fn bench_serialize(c: &mut Criterion) {
    let store = build_store(1000);
    c.bench_function("serialize_1000", |b| {
        b.iter(|| black_box(serialize(store.buckets(), store.history(), store.day())))
    });
}

fn bench_deserialize(c: &mut Criterion) {
    let store = build_store(1000);
    let document = store.to_document();
    c.bench_function("deserialize_1000", |b| {
        b.iter(|| black_box(deserialize(&document)))
    });
}

fn bench_save(c: &mut Criterion) {
    let store = build_store(1000);
    let document = store.to_document();
    c.bench_function("save_1000", |b| {
        b.iter_batched(
            || {
                let temp_dir = TempDir::new().expect("Failed to create temp directory");
                let state = StateFile::new(temp_dir.path().join("state.json"))
                    .expect("Failed to create state file");
                (temp_dir, state)
            },
            |(_temp_dir, state)| black_box(state.save(&document)),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_due,
    bench_update,
    bench_serialize,
    bench_deserialize,
    bench_save
);
criterion_main!(benches);
