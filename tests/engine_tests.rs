/// Engine integration tests: end-to-end generation against fixture datasets.

use lorem_sampler::core::engine::{EngineError, LoremEngine};
use lorem_sampler::core::hashtag::{clean_hashtag, extract_hashtags};
use lorem_sampler::core::random::RangeError;
use lorem_sampler::core::sampler::SampleError;
use lorem_sampler::schema::dataset::{Dataset, Value};
use lorem_sampler::schema::options::{
    EmailOptions, FullTextOptions, IntOptions, SampleOneOptions, SampleOptions, SentenceOptions,
    TextOptions,
};
use rustc_hash::FxHashSet;

fn fixture_engine(seed: u64) -> LoremEngine {
    LoremEngine::builder()
        .seed(seed)
        .dataset_path("tests/fixtures/test_dataset.ron")
        .build()
        .unwrap()
}

#[test]
fn two_word_pool_yields_capitalized_pair() {
    let dataset = Dataset::builder().words(["alpha", "beta"]).build().unwrap();
    let opts = TextOptions::default()
        .sentences(1, 1)
        .with_sentence(SentenceOptions::default().words(2, 2).hashtags(0, 0));
    let allowed = ["Alpha beta.", "Beta alpha.", "Alpha alpha.", "Beta beta."];
    for seed in 0..50 {
        let mut engine = LoremEngine::builder()
            .seed(seed)
            .with_dataset(dataset.clone())
            .build()
            .unwrap();
        let text = engine.random_sentences(&opts).unwrap();
        assert!(allowed.contains(&text.as_str()), "unexpected: {}", text);
    }
}

#[test]
fn full_text_hashtags_deduplicated_and_clean() {
    let opts = FullTextOptions {
        title: TextOptions::default()
            .sentences(1, 2)
            .with_sentence(SentenceOptions::default().hashtags(1, 3)),
        text: TextOptions::default()
            .sentences(3, 6)
            .with_sentence(SentenceOptions::default().hashtags(0, 3)),
    };
    for seed in 0..100 {
        let mut engine = fixture_engine(seed);
        let full = engine.random_full_text(&opts).unwrap();
        let mut seen = FxHashSet::default();
        for tag in &full.hashtags {
            assert_eq!(clean_hashtag(tag), tag.as_str());
            assert!(seen.insert(tag.to_lowercase()), "duplicate {} (seed {})", tag, seed);
        }
        assert!(!full.title.is_empty());
        assert!(!full.text.is_empty());
    }
}

#[test]
fn every_sentence_ends_with_single_period() {
    let opts = TextOptions::default()
        .sentences(4, 4)
        .with_sentence(SentenceOptions::default().hashtags(0, 4));
    for seed in 0..50 {
        let mut engine = fixture_engine(seed);
        let text = engine.random_sentences(&opts).unwrap();
        assert!(text.ends_with('.') && !text.ends_with(".."), "{}", text);
        assert!(!text.contains("  "), "double space: {}", text);
        assert!(!text.contains(".."), "double period: {}", text);
    }
}

#[test]
fn extracted_hashtags_are_idempotent_on_generated_text() {
    let mut engine = fixture_engine(21);
    let block = engine
        .random_text_block(
            &TextOptions::default()
                .sentences(5, 5)
                .with_sentence(SentenceOptions::default().hashtags(1, 2)),
        )
        .unwrap();
    let rejoined: String = block.hashtags.iter().map(|t| format!(" {}", t)).collect();
    assert_eq!(extract_hashtags(&rejoined), block.hashtags);
}

#[test]
fn sample_many_exact_without_replacement() {
    for seed in 0..50 {
        let mut engine = fixture_engine(seed);
        let picked = engine
            .sample_many(&SampleOptions::new("objects.idUsers").with_range(2, 2))
            .unwrap();
        let source = engine.dataset().collection("objects.idUsers").unwrap();
        assert_eq!(picked.len(), 2);
        assert!(picked.iter().all(|v| source.contains(v)));
        assert_ne!(picked[0], picked[1]);
    }
}

#[test]
fn sample_many_with_replacement_has_exact_length() {
    for seed in 0..50 {
        let mut engine = fixture_engine(seed);
        let picked = engine
            .sample_many(
                &SampleOptions::new("objects.idPosts")
                    .with_range(3, 3)
                    .with_duplicates(true),
            )
            .unwrap();
        assert_eq!(picked.len(), 3);
    }
}

#[test]
fn sample_one_edge_cases() {
    let mut engine = fixture_engine(2);
    assert_eq!(
        engine.sample_one(&SampleOneOptions::new("empty")).unwrap(),
        None
    );
    assert_eq!(
        engine
            .sample_one(&SampleOneOptions::new("single").from_end(true))
            .unwrap(),
        Some(Value::from("only"))
    );
}

#[test]
fn unregistered_collection_samples_empty() {
    let mut engine = LoremEngine::builder()
        .seed(3)
        .with_dataset(Dataset::builder().words(["lorem"]).build().unwrap())
        .build()
        .unwrap();
    assert!(engine
        .sample_many(&SampleOptions::new("objectsIdUsers"))
        .unwrap()
        .is_empty());
    assert_eq!(
        engine
            .sample_one(&SampleOneOptions::new("objectsIdUsers"))
            .unwrap(),
        None
    );
    assert_eq!(engine.sample_one(&SampleOneOptions::default()).unwrap(), None);

    let mut fixture = fixture_engine(3);
    assert!(fixture
        .sample_many(&SampleOptions::new("objects.nope").with_range(1, 2))
        .unwrap()
        .is_empty());
}

#[test]
fn inverted_ranges_are_rejected_everywhere() {
    let mut engine = fixture_engine(1);
    assert!(matches!(
        engine.random_int(&IntOptions::new(10, 1)),
        Err(EngineError::Range(RangeError::Inverted { .. }))
    ));
    assert!(matches!(
        engine.random_sentences(&TextOptions::default().sentences(4, 2)),
        Err(EngineError::Compose(_))
    ));
    assert!(matches!(
        engine.sample_many(&SampleOptions::new("scores").with_range(2, 1)),
        Err(EngineError::Sample(SampleError::Range(_)))
    ));
}

#[test]
fn random_int_observes_whole_range() {
    let mut engine = fixture_engine(99);
    let mut seen = FxHashSet::default();
    for _ in 0..500 {
        seen.insert(engine.random_int(&IntOptions::up_to(4)).unwrap());
    }
    assert_eq!(seen.len(), 5);
}

#[test]
fn seeded_runs_are_reproducible() {
    let run = |seed| {
        let mut engine = fixture_engine(seed);
        (
            engine.random_full_text(&FullTextOptions::default()).unwrap(),
            engine
                .sample_many(&SampleOptions::new("objects.idUsers"))
                .unwrap(),
            engine.random_email(&EmailOptions::default()),
        )
    };
    assert_eq!(run(2024), run(2024));
}

#[test]
fn email_uses_configured_domain() {
    let mut engine = fixture_engine(5);
    let opts = EmailOptions {
        local_bytes: 4,
        domain: "example.test".to_string(),
    };
    let email = engine.random_email(&opts);
    assert!(email.ends_with("@example.test"));
    assert_eq!(email.len(), 8 + "@example.test".len());
}

#[test]
fn json_dataset_engine_matches_ron_engine() {
    let mut ron = fixture_engine(77);
    let mut json = LoremEngine::builder()
        .seed(77)
        .dataset_path("tests/fixtures/test_dataset.json")
        .build()
        .unwrap();
    let opts = FullTextOptions::default();
    assert_eq!(
        ron.random_full_text(&opts).unwrap(),
        json.random_full_text(&opts).unwrap()
    );
}
