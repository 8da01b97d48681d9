use criterion::{Criterion, criterion_group, criterion_main};
use tweet2label::{SPLIT_SEED, TEST_RATIO, TweetClassifier, TweetRecord, derive_samples, train_test_split};

fn synthetic_records(n: usize) -> Vec<TweetRecord> {
    (0..n)
        .map(|i| {
            let tweet = if i % 2 == 0 {
                format!("Why can't anything ever work today?! item{i} #{}", i % 97)
            } else {
                format!("What a lovely bright morning, friends. item{i} #{}", i % 97)
            };
            TweetRecord {
                tweet,
                label: (i % 2) as u8,
            }
        })
        .collect()
}

fn bench_feature_derivation(c: &mut Criterion) {
    let records = synthetic_records(10_000);

    c.bench_function("derive features for 10k tweets", |b| {
        b.iter(|| {
            let _ = derive_samples(&records);
        })
    });
}

fn bench_train_and_evaluate(c: &mut Criterion) {
    let records = synthetic_records(1_000);
    let (samples, _) = derive_samples(&records);

    c.bench_function("train + evaluate 1k tweets", |b| {
        b.iter(|| {
            let split = train_test_split(&samples, TEST_RATIO, SPLIT_SEED);
            let model = TweetClassifier::fit(&split.train).unwrap();
            let _ = model.evaluate_on(&split.test).unwrap();
        });
    });
}

criterion_group!(benches, bench_feature_derivation, bench_train_and_evaluate);
criterion_main!(benches);
