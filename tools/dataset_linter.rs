/// Dataset Linter: validates word pools, hashtags and collections.
///
/// Usage: dataset_linter <dataset_file_or_dir>

use lorem_sampler::core::hashtag::extract_hashtags;
use lorem_sampler::schema::dataset::Dataset;
use rustc_hash::FxHashSet;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: dataset_linter <dataset_file_or_dir>");
        process::exit(0);
    }

    let target = Path::new(&args[1]);
    let mut files = Vec::new();
    if target.is_file() {
        files.push(target.to_path_buf());
    } else if target.is_dir() {
        collect_dataset_files(target, &mut files);
    } else {
        eprintln!("ERROR: Path '{}' does not exist", args[1]);
        process::exit(1);
    }

    let mut total_errors = 0;
    let mut total_warnings = 0;

    for path in &files {
        println!("\n=== {} ===\n", path.display());
        let dataset = match Dataset::load(path) {
            Ok(ds) => ds,
            Err(e) => {
                println!("ERROR: Failed to load dataset: {}", e);
                total_errors += 1;
                continue;
            }
        };

        let (errors, warnings) = lint_dataset(&dataset);
        if errors.is_empty() && warnings.is_empty() {
            println!("All checks passed!");
        }
        for warning in &warnings {
            println!("WARNING: {}", warning);
        }
        for error in &errors {
            println!("ERROR: {}", error);
        }
        total_errors += errors.len();
        total_warnings += warnings.len();
    }

    println!(
        "\nSummary: {} files, {} errors, {} warnings",
        files.len(),
        total_errors,
        total_warnings
    );

    if total_errors == 0 {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn collect_dataset_files(dir: &Path, files: &mut Vec<std::path::PathBuf>) {
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                collect_dataset_files(&path, files);
            } else if matches!(
                path.extension().and_then(|s| s.to_str()),
                Some("ron") | Some("json")
            ) {
                files.push(path);
            }
        }
    }
    files.sort();
}

fn lint_dataset(dataset: &Dataset) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    // Sentences cannot be composed without words.
    if dataset.words().is_empty() {
        errors.push("Word pool is empty".to_string());
    }
    for (i, word) in dataset.words().iter().enumerate() {
        if word.trim().is_empty() {
            errors.push(format!("Word #{} is blank", i));
        } else if word.contains(char::is_whitespace) {
            warnings.push(format!("Word '{}' contains whitespace", word));
        }
    }

    let mut seen = FxHashSet::default();
    for tag in dataset.hashtags() {
        let extracted = extract_hashtags(tag);
        if extracted.len() != 1 || extracted[0] != tag.to_lowercase() {
            warnings.push(format!(
                "Hashtag '{}' does not round-trip through extraction (got {:?})",
                tag, extracted
            ));
        }
        if !seen.insert(tag.to_lowercase()) {
            warnings.push(format!(
                "Hashtag '{}' duplicates an earlier entry (case-insensitive)",
                tag
            ));
        }
    }
    if dataset.hashtags().is_empty() {
        warnings.push("Hashtag pool is empty; sentences will carry no hashtags".to_string());
    }

    for key in dataset.collections().keys() {
        if dataset.collection(key).is_some_and(<[_]>::is_empty) {
            warnings.push(format!("Collection '{}' is empty", key));
        }
    }

    (errors, warnings)
}
