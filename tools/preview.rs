/// Preview: interactive generation shell for trying datasets and options.
///
/// Usage: preview [--dataset <path>] [--seed <n>]
///
/// Commands:
///   word                                 one random word
///   sentences [min max]                  a block of sentences
///   fulltext                             title, body and merged hashtags
///   int <min> <max>                      random integer in [min, max]
///   sample <key> [min max] [dup] [rev]   draw from a collection
///   one <key> [end]                      draw one element
///   email                                throwaway e-mail address
///   keys                                 list collection keys
///   seed <n>                             reset the RNG seed
///   bulk <n>                             generate n blocks with variety stats
///   help                                 list commands
///   quit                                 exit

use lorem_sampler::core::engine::LoremEngine;
use lorem_sampler::schema::options::{
    EmailOptions, FullTextOptions, IntOptions, SampleOneOptions, SampleOptions, TextOptions,
};
use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

const DEFAULT_DATASET: &str = "data/default/dataset.ron";

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let args: Vec<String> = std::env::args().collect();

    let mut dataset_path = DEFAULT_DATASET.to_string();
    let mut seed: u64 = 42;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--dataset" if i + 1 < args.len() => {
                i += 1;
                dataset_path = args[i].clone();
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = args[i].parse().unwrap_or(42);
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut engine = match LoremEngine::builder()
        .seed(seed)
        .dataset_path(&dataset_path)
        .build()
    {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("ERROR loading dataset {}: {}", dataset_path, e);
            std::process::exit(1);
        }
    };

    println!(
        "Loaded {} words, {} hashtags, {} collections",
        engine.dataset().words().len(),
        engine.dataset().hashtags().len(),
        engine.dataset().collections().len()
    );
    println!("Seed: {}", seed);
    println!("Type 'help' for commands.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("preview> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();

        match cmd.as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye.");
                break;
            }
            "help" | "h" | "?" => {
                print_help();
            }
            "word" => match engine.random_word() {
                Ok(word) => println!("{}", word),
                Err(e) => println!("ERROR: {}", e),
            },
            "sentences" => {
                let mut opts = TextOptions::default();
                if let Some((min, max)) = parse_range(&parts[1..]) {
                    opts = opts.sentences(min, max);
                }
                match engine.random_text_block(&opts) {
                    Ok(block) => {
                        println!("\n{}", block.text);
                        println!("[hashtags] {:?}\n", block.hashtags);
                    }
                    Err(e) => println!("ERROR: {}", e),
                }
            }
            "fulltext" => match engine.random_full_text(&FullTextOptions::default()) {
                Ok(full) => {
                    println!("\n--- Title ---");
                    println!("{}", full.title);
                    println!("--- Text ---");
                    println!("{}", full.text);
                    println!("--- Hashtags ---");
                    println!("{}\n", full.hashtags.join(" "));
                }
                Err(e) => println!("ERROR: {}", e),
            },
            "int" => {
                let bounds: Option<(i64, i64)> = match (parts.get(1), parts.get(2)) {
                    (Some(a), Some(b)) => a.parse().ok().zip(b.parse().ok()),
                    _ => None,
                };
                let Some((min, max)) = bounds else {
                    println!("Usage: int <min> <max>");
                    continue;
                };
                match engine.random_int(&IntOptions::new(min, max)) {
                    Ok(n) => println!("{}", n),
                    Err(e) => println!("ERROR: {}", e),
                }
            }
            "sample" => {
                let Some(key) = parts.get(1) else {
                    println!("Usage: sample <key> [min max] [dup] [rev]");
                    continue;
                };
                let mut opts = SampleOptions::new(*key);
                if let Some((min, max)) = parse_range(&parts[2..]) {
                    opts = opts.with_range(min, max);
                }
                opts = opts
                    .with_duplicates(parts.contains(&"dup"))
                    .reversed(parts.contains(&"rev"));
                match engine.sample_many(&opts) {
                    Ok(values) => {
                        let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                        println!("[{}]", rendered.join(", "));
                    }
                    Err(e) => println!("ERROR: {}", e),
                }
            }
            "one" => {
                let Some(key) = parts.get(1) else {
                    println!("Usage: one <key> [end]");
                    continue;
                };
                let opts = SampleOneOptions::new(*key).from_end(parts.get(2) == Some(&"end"));
                match engine.sample_one(&opts) {
                    Ok(Some(value)) => println!("{}", value),
                    Ok(None) => println!("(empty or unknown collection)"),
                    Err(e) => println!("ERROR: {}", e),
                }
            }
            "email" => {
                println!("{}", engine.random_email(&EmailOptions::default()));
            }
            "keys" => {
                for key in engine.dataset().collections().keys() {
                    let len = engine.dataset().collection(key).map_or(0, <[_]>::len);
                    println!("  {} ({} items)", key, len);
                }
            }
            "seed" => match parts.get(1).and_then(|s| s.parse::<u64>().ok()) {
                Some(n) => {
                    engine.reseed(n);
                    println!("Seed set to {}", n);
                }
                None => println!("Usage: seed <n>"),
            },
            "bulk" => {
                let count: usize = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(20);
                print_bulk_stats(&mut engine, count);
            }
            _ => {
                println!("Unknown command: '{}'. Type 'help' for available commands.", cmd);
            }
        }
    }
}

fn parse_range(parts: &[&str]) -> Option<(usize, usize)> {
    let min = parts.first()?.parse().ok()?;
    let max = parts.get(1)?.parse().ok()?;
    Some((min, max))
}

fn print_bulk_stats(engine: &mut LoremEngine, count: usize) {
    let opts = TextOptions::default();
    let mut blocks = Vec::new();
    let mut errors = 0;
    for _ in 0..count {
        match engine.random_text_block(&opts) {
            Ok(block) => blocks.push(block),
            Err(_) => errors += 1,
        }
    }

    println!("\n=== Bulk Generation: {} blocks ({} errors) ===\n", blocks.len(), errors);

    let openings: std::collections::HashSet<&str> = blocks
        .iter()
        .filter_map(|b| b.text.split(' ').next())
        .collect();
    println!("Unique openings: {} / {}", openings.len(), blocks.len());

    let avg_len: f64 = if blocks.is_empty() {
        0.0
    } else {
        blocks.iter().map(|b| b.text.len() as f64).sum::<f64>() / blocks.len() as f64
    };
    println!("Average length: {:.0} chars", avg_len);

    let mut tag_counts: HashMap<&str, u32> = HashMap::new();
    for block in &blocks {
        for tag in &block.hashtags {
            *tag_counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }
    let mut tag_freq: Vec<(&str, u32)> = tag_counts.into_iter().collect();
    tag_freq.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    println!("\nTop 10 hashtags:");
    for (tag, count) in tag_freq.iter().take(10) {
        println!("  {}: {}", tag, count);
    }

    if let Some(first) = blocks.first() {
        println!("\nSample block:");
        println!("  {}", first.text);
    }
    println!();
}

fn print_usage() {
    println!("Preview: interactive generation shell for datasets and options.");
    println!();
    println!("Usage: preview [--dataset <path>] [--seed <n>]");
    println!();
    println!("  --dataset <path>  RON or JSON dataset (default: {})", DEFAULT_DATASET);
    println!("  --seed <n>        Initial RNG seed (default: 42)");
}

fn print_help() {
    println!("Commands:");
    println!("  word                            One random word");
    println!("  sentences [min max]             A block of sentences with its hashtags");
    println!("  fulltext                        Title, body and merged hashtags");
    println!("  int <min> <max>                 Random integer, inclusive");
    println!("  sample <key> [min max] [dup] [rev]  Draw from a collection");
    println!("  one <key> [end]                 Draw one element");
    println!("  email                           Throwaway e-mail address");
    println!("  keys                            List collection keys");
    println!("  seed <n>                        Reset the RNG seed");
    println!("  bulk <n>                        Generate n blocks with variety statistics");
    println!("  help                            Show this help");
    println!("  quit                            Exit");
}
