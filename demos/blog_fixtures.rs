/// Blog Fixtures example: generates a small feed of fake blog posts.
///
/// Each post gets a titled body with its hashtags, an author and a set of
/// likers sampled from the default dataset's user ids, a like count and a
/// throwaway contact address. The feed is printed as pretty JSON.
///
/// Run with: cargo run --example blog_fixtures

use lorem_sampler::core::engine::LoremEngine;
use lorem_sampler::schema::options::{
    EmailOptions, FullTextOptions, IntOptions, SampleOneOptions, SampleOptions, SentenceOptions,
    TextOptions,
};
use serde_json::json;

const POSTS: usize = 4;

fn main() {
    let mut engine = LoremEngine::builder()
        .seed(2024)
        .dataset_path("data/default/dataset.ron")
        .build()
        .expect("Failed to build engine");

    // Short titles with one or two tags, longer bodies.
    let full_text = FullTextOptions {
        title: TextOptions::default()
            .sentences(1, 1)
            .with_sentence(SentenceOptions::default().words(3, 6).hashtags(1, 2)),
        text: TextOptions::default()
            .sentences(3, 6)
            .with_sentence(SentenceOptions::default().hashtags(0, 1)),
    };

    let mut feed = Vec::with_capacity(POSTS);
    for _ in 0..POSTS {
        let post = engine
            .random_full_text(&full_text)
            .expect("Failed to compose post");
        let author = engine
            .sample_one(&SampleOneOptions::new("objects.idUsers"))
            .expect("Failed to sample author");
        let liked_by = engine
            .sample_many(&SampleOptions::new("objects.idUsers").with_range(0, 5))
            .expect("Failed to sample likers");
        let likes = engine
            .random_int(&IntOptions::up_to(500))
            .expect("Failed to draw like count");

        feed.push(json!({
            "author": author.map(|v| v.to_json()),
            "contact": engine.random_email(&EmailOptions::default()),
            "title": post.title,
            "text": post.text,
            "hashtags": post.hashtags,
            "likes": likes,
            "likedBy": liked_by.iter().map(|v| v.to_json()).collect::<Vec<_>>(),
        }));
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&feed).expect("Failed to serialize feed")
    );
}
