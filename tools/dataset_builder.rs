/// Dataset Builder: derives word and hashtag pools from a text corpus.
///
/// Usage: dataset_builder --input <corpus.txt> --output <dataset.ron> [--merge <dataset>]
use lorem_sampler::core::hashtag::{extract_hashtags, merge_hashtags};
use lorem_sampler::schema::dataset::Dataset;
use rustc_hash::FxHashSet;
use std::env;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

const USAGE: &str =
    "Usage: dataset_builder --input <corpus.txt> --output <dataset.ron> [--merge <dataset>]";

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let args: Vec<String> = env::args().collect();

    let mut input = None;
    let mut output = None;
    let mut merge = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--input" if i + 1 < args.len() => {
                i += 1;
                input = Some(args[i].clone());
            }
            "--output" if i + 1 < args.len() => {
                i += 1;
                output = Some(args[i].clone());
            }
            "--merge" if i + 1 < args.len() => {
                i += 1;
                merge = Some(args[i].clone());
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let input_path = input.unwrap_or_else(|| {
        eprintln!("Error: --input is required");
        eprintln!("{}", USAGE);
        process::exit(1);
    });

    let output_path = output.unwrap_or_else(|| {
        eprintln!("Error: --output is required");
        eprintln!("{}", USAGE);
        process::exit(1);
    });

    let text = std::fs::read_to_string(&input_path).unwrap_or_else(|e| {
        eprintln!("Error reading input file '{}': {}", input_path, e);
        process::exit(1);
    });

    let base = match merge {
        Some(ref path) => Dataset::load(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Error loading dataset '{}': {}", path, e);
            process::exit(1);
        }),
        None => Dataset::default(),
    };

    println!("Scanning corpus '{}'...", input_path);
    let words = corpus_words(&text, base.words());
    let corpus_tags = extract_hashtags(&text);
    let hashtags = merge_hashtags([base.hashtags(), corpus_tags.as_slice()]);
    println!(
        "Found {} words and {} hashtags ({} from corpus)",
        words.len(),
        hashtags.len(),
        corpus_tags.len()
    );

    let mut builder = Dataset::builder().words(words).hashtags(hashtags);
    for key in base.collections().keys() {
        if let Some(items) = base.collection(key) {
            builder = builder.collection(key, items.to_vec());
        }
    }

    let rendered = builder
        .build()
        .and_then(|dataset| dataset.to_ron())
        .unwrap_or_else(|e| {
            eprintln!("Error building dataset: {}", e);
            process::exit(1);
        });

    std::fs::write(&output_path, rendered).unwrap_or_else(|e| {
        eprintln!("Error writing dataset to '{}': {}", output_path, e);
        process::exit(1);
    });

    println!("Dataset saved to '{}'", output_path);
}

/// Lowercased alphabetic tokens, distinct, appended after `existing`.
/// Hashtags are skipped.
fn corpus_words(text: &str, existing: &[String]) -> Vec<String> {
    let mut seen: FxHashSet<String> = existing.iter().cloned().collect();
    let mut words = existing.to_vec();
    for token in text.split_whitespace() {
        if token.starts_with('#') {
            continue;
        }
        let word: String = token
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        if word.is_empty() || !word.chars().all(char::is_alphabetic) {
            continue;
        }
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }
    words
}
