use anyhow::Result;
use std::path::Path;
use tweet2label::{SPLIT_SEED, TEST_RATIO, TweetClassifier, derive_samples, load_records, train_test_split};

const DATASET_PATH: &str = "final_dataset_basicmlmodel.csv";

fn main() -> Result<()> {
    let records = load_records(Path::new(DATASET_PATH))?;
    println!("📄 Loaded {} labeled tweets from {DATASET_PATH}", records.len());

    println!("\nDataset head:");
    for record in records.iter().take(5) {
        println!("  label={} | {}", record.label, record.tweet);
    }

    println!("\nSample tweets:");
    for (i, record) in records.iter().skip(10).take(10).enumerate() {
        println!("{:>3}. {}", i + 1, record.tweet);
    }

    let (samples, freq) = derive_samples(&records);

    println!("\nTop 10 words by frequency:");
    for (word, count) in freq.iter().take(10) {
        println!("{word:>20} | {count}");
    }

    println!("\nAugmented dataset head:");
    println!(
        "{:>5} {:>7} {:>8} {:>5} {:>11} {:>5} | clean text",
        "words", "any_neg", "any_rare", "chars", "is_question", "label"
    );
    for sample in samples.iter().take(5) {
        let f = sample.features;
        println!(
            "{:>5} {:>7} {:>8} {:>5} {:>11} {:>5} | {}",
            f.word_count,
            f.any_neg,
            f.any_rare,
            f.char_count,
            f.is_question,
            sample.label,
            sample.clean_text
        );
    }

    let split = train_test_split(&samples, TEST_RATIO, SPLIT_SEED);
    println!(
        "\n🧠 Training on {} tweets, evaluating on {}...",
        split.train.len(),
        split.test.len()
    );

    let model = TweetClassifier::fit(&split.train)?;
    let accuracy = model.evaluate_on(&split.test)?;
    println!("✅ Accuracy: {:.2}%", accuracy * 100.0);

    Ok(())
}
