//! # tweet2label 🐦🏷️
//!
//! Predict a binary tweet label from hand-crafted lexical features using a
//! Gaussian Naive Bayes classifier.
//!
//! The pipeline cleans each tweet down to lowercase letters and apostrophes,
//! builds a corpus-wide word frequency table (minus stop words), marks the
//! 100 least frequent words as "rare", and derives five scalar features per
//! tweet: word count, character count, and presence flags for negations,
//! rare words and question words. A [`linfa-bayes`](https://crates.io/crates/linfa-bayes)
//! Gaussian Naive Bayes model is then fit on a seeded 90/10 train/test split.
//!
//! ## Features
//! - Lexical feature extraction (counts, negation/question/rare-word flags)
//! - Gaussian Naive Bayes classifier
//! - Reproducible seeded train/test split
//! - Benchmarkable with [Criterion](https://crates.io/crates/criterion)
//!
//! ## Example
//! ```rust
//! use tweet2label::{any_neg, clean_text, is_question};
//! let clean = clean_text("Why can't this JUST work?!");
//! let tokens: Vec<&str> = clean.split_whitespace().collect();
//! assert_eq!(any_neg(&tokens), 1);
//! assert_eq!(is_question(&tokens), 1);
//! ```

use anyhow::{Context, Result, bail};
use linfa::prelude::*;
use linfa_bayes::GaussianNb;
use ndarray::{Array1, Array2};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::path::Path;

/// Seed for the train/test shuffle, fixed for reproducibility.
pub const SPLIT_SEED: u64 = 27;
/// Fraction of the dataset held out for evaluation.
pub const TEST_RATIO: f64 = 0.1;
/// How many of the least frequent words count as "rare".
pub const RARE_WORD_COUNT: usize = 100;

const N_FEATURES: usize = 5;

/// Common English words excluded from the frequency table.
pub static STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
    "any", "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "can't", "cannot", "com", "could", "couldn't", "did",
    "didn't", "do", "does", "doesn't", "doing", "don't", "down", "during", "each", "else", "ever",
    "few", "for", "from", "further", "get", "had", "hadn't", "has", "hasn't", "have", "haven't",
    "having", "he", "he'd", "he'll", "he's", "her", "here", "here's", "hers", "herself", "him",
    "himself", "his", "how", "how's", "however", "http", "i", "i'd", "i'll", "i'm", "i've", "if",
    "in", "into", "is", "isn't", "it", "it's", "its", "itself", "just", "k", "let's", "like",
    "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off", "on",
    "once", "only", "or", "other", "otherwise", "ought", "our", "ours", "ourselves", "out",
    "over", "own", "r", "same", "shall", "shan't", "she", "she'd", "she'll", "she's", "should",
    "shouldn't", "since", "so", "some", "such", "than", "that", "that's", "the", "their",
    "theirs", "them", "themselves", "then", "there", "there's", "these", "they", "they'd",
    "they'll", "they're", "they've", "this", "those", "through", "to", "too", "under", "until",
    "up", "very", "was", "wasn't", "we", "we'd", "we'll", "we're", "we've", "were", "weren't",
    "what", "what's", "when", "when's", "where", "where's", "which", "while", "who", "who's",
    "whom", "why", "why's", "with", "won't", "would", "wouldn't", "www", "you", "you'd",
    "you'll", "you're", "you've", "your", "yours", "yourself", "yourselves",
];

/// A record representing a single labeled tweet as read from CSV.
#[derive(Debug, Deserialize, Clone)]
pub struct TweetRecord {
    pub tweet: String,
    pub label: u8,
}

/// One tweet after cleaning and feature derivation.
#[derive(Debug, Clone)]
pub struct Sample {
    pub clean_text: String,
    pub features: Features,
    pub label: usize,
}

/// The five lexical features derived from one tweet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    pub word_count: usize,
    pub any_neg: u8,
    pub any_rare: u8,
    pub char_count: usize,
    pub is_question: u8,
}

impl Features {
    /// The feature vector in canonical column order.
    pub fn to_row(self) -> [f64; N_FEATURES] {
        [
            self.word_count as f64,
            self.any_neg as f64,
            self.any_rare as f64,
            self.char_count as f64,
            self.is_question as f64,
        ]
    }
}

/// A helper type for holding train/test splits.
#[derive(Debug)]
pub struct DatasetSplit {
    pub train: Vec<Sample>,
    pub test: Vec<Sample>,
}

/// Loads labeled tweets from CSV, validating labels against {0, 1}.
pub fn load_records(path: &Path) -> Result<Vec<TweetRecord>> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut rdr = csv::Reader::from_reader(file);

    let mut records = Vec::new();
    for (row, result) in rdr.deserialize().enumerate() {
        let record: TweetRecord =
            result.with_context(|| format!("invalid CSV row {}", row + 1))?;
        if record.label > 1 {
            bail!("row {}: label {} is outside {{0, 1}}", row + 1, record.label);
        }
        records.push(record);
    }

    if records.is_empty() {
        bail!("dataset {} contains no rows", path.display());
    }
    Ok(records)
}

/// Normalizes raw tweet text: anything outside the English alphabet and
/// apostrophe becomes a space, and the result is lowercased.
pub fn clean_text(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() || c == '\'' {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect()
}

/// Builds the corpus-wide word frequency table from cleaned texts.
///
/// Tokens are counted over the flattened whitespace-split stream, stop words
/// are dropped, and the table is ordered by descending count. Ties keep the
/// order in which words first appeared in the corpus, so the ordering is
/// deterministic.
pub fn gen_freq(texts: &[String]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    let mut next_seen = 0usize;

    for text in texts {
        for token in text.split_whitespace() {
            let entry = counts.entry(token).or_insert_with(|| {
                next_seen += 1;
                (0, next_seen)
            });
            entry.0 += 1;
        }
    }

    let mut freq: Vec<(&str, (usize, usize))> = counts
        .into_iter()
        .filter(|(token, _)| !STOP_WORDS.contains(token))
        .collect();
    freq.sort_by(|(_, (count_a, seen_a)), (_, (count_b, seen_b))| {
        count_b.cmp(count_a).then(seen_a.cmp(seen_b))
    });

    freq.into_iter()
        .map(|(token, (count, _))| (token.to_string(), count))
        .collect()
}

/// The `n` least frequent words of the table (all of them if it is shorter).
pub fn rare_words(freq: &[(String, usize)], n: usize) -> HashSet<String> {
    freq[freq.len().saturating_sub(n)..]
        .iter()
        .map(|(token, _)| token.clone())
        .collect()
}

/// 1 if any token is a bare negation (`n`, `no`, `non`, `not`) or a
/// contraction negation (`n't` preceded by a word character), else 0.
pub fn any_neg(words: &[&str]) -> u8 {
    let is_negation = |word: &str| {
        matches!(word, "n" | "no" | "non" | "not")
            || word
                .match_indices("n't")
                .any(|(i, _)| i > 0 && word.as_bytes()[i - 1].is_ascii_alphanumeric())
    };
    words.iter().any(|w| is_negation(w)) as u8
}

/// 1 if any token is one of the question words, else 0.
pub fn is_question(words: &[&str]) -> u8 {
    words
        .iter()
        .any(|w| matches!(*w, "when" | "what" | "how" | "why" | "who")) as u8
}

/// 1 if any token appears in the rare-word set, else 0.
pub fn any_rare(words: &[&str], rare: &HashSet<String>) -> u8 {
    words.iter().any(|w| rare.contains(*w)) as u8
}

/// Derives the five features for one cleaned tweet.
pub fn extract_features(clean: &str, rare: &HashSet<String>) -> Features {
    let tokens: Vec<&str> = clean.split_whitespace().collect();
    Features {
        word_count: tokens.len(),
        any_neg: any_neg(&tokens),
        any_rare: any_rare(&tokens, rare),
        char_count: clean.chars().count(),
        is_question: is_question(&tokens),
    }
}

/// Runs the full derivation pass over the raw records.
///
/// Returns the augmented samples along with the frequency table the
/// rare-word set was taken from.
pub fn derive_samples(records: &[TweetRecord]) -> (Vec<Sample>, Vec<(String, usize)>) {
    let clean: Vec<String> = records.iter().map(|r| clean_text(&r.tweet)).collect();
    let freq = gen_freq(&clean);
    let rare = rare_words(&freq, RARE_WORD_COUNT);

    let samples = records
        .iter()
        .zip(clean)
        .map(|(record, clean_text)| {
            let features = extract_features(&clean_text, &rare);
            Sample {
                clean_text,
                features,
                label: record.label as usize,
            }
        })
        .collect();

    (samples, freq)
}

/// Randomly splits samples into train and test sets based on `test_ratio`,
/// shuffling with a fixed seed so the partition is reproducible.
pub fn train_test_split(data: &[Sample], test_ratio: f64, seed: u64) -> DatasetSplit {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = data.to_vec();
    data.shuffle(&mut rng);

    let test_size = ((data.len() as f64) * test_ratio).round() as usize;
    let test = data[..test_size].to_vec();
    let train = data[test_size..].to_vec();

    DatasetSplit { train, test }
}

fn feature_matrix(samples: &[Sample]) -> Result<Array2<f64>> {
    let rows: Vec<f64> = samples.iter().flat_map(|s| s.features.to_row()).collect();
    Array2::from_shape_vec((samples.len(), N_FEATURES), rows)
        .context("failed to build feature matrix")
}

/// Trained Gaussian Naive Bayes tweet classifier.
pub struct TweetClassifier {
    model: GaussianNb<f64, usize>,
}

impl TweetClassifier {
    /// Fits the classifier on the training samples.
    pub fn fit(train: &[Sample]) -> Result<Self> {
        if train.is_empty() {
            bail!("training set is empty");
        }

        let x = feature_matrix(train)?;
        let y: Array1<usize> = train.iter().map(|s| s.label).collect();
        let dataset = Dataset::new(x, y);

        let model = GaussianNb::params()
            .fit(&dataset)
            .context("failed to fit Gaussian Naive Bayes model")?;
        Ok(TweetClassifier { model })
    }

    /// Predicts labels for the given samples.
    pub fn predict(&self, samples: &[Sample]) -> Result<Array1<usize>> {
        let x = feature_matrix(samples)?;
        Ok(self.model.predict(&x))
    }

    /// Calculates classification accuracy on the given samples.
    pub fn evaluate_on(&self, test: &[Sample]) -> Result<f64> {
        if test.is_empty() {
            bail!("evaluation set is empty");
        }

        let pred = self.predict(test)?;
        let correct = pred
            .iter()
            .zip(test)
            .filter(|(pred, sample)| **pred == sample.label)
            .count();
        Ok(correct as f64 / test.len() as f64)
    }
}
