/// Hashtag extraction and cleanup.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

/// `#` followed by one or more ASCII word characters.
static HASHTAG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"#[A-Za-z0-9_]+").unwrap_or_else(|e| panic!("invalid hashtag pattern: {e}"))
});

/// Scan `text` for hashtag tokens.
///
/// Matches are lowercased and deduplicated; the result keeps the order in
/// which each tag was first seen.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut tags = Vec::new();
    for m in HASHTAG_PATTERN.find_iter(text) {
        let tag = m.as_str().to_lowercase();
        if seen.insert(tag.clone()) {
            tags.push(tag);
        }
    }
    tags
}

/// Strip exactly one trailing `.` from a tag, if present.
pub fn clean_hashtag(tag: &str) -> &str {
    tag.strip_suffix('.').unwrap_or(tag)
}

/// Clean, lowercase, and deduplicate several tag lists into one,
/// preserving first-seen order across the lists.
pub fn merge_hashtags<'a, I>(lists: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut seen = FxHashSet::default();
    let mut merged = Vec::new();
    for list in lists {
        for tag in list {
            let tag = clean_hashtag(tag).to_lowercase();
            if seen.insert(tag.clone()) {
                merged.push(tag);
            }
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_none() {
        assert!(extract_hashtags("no tags in here.").is_empty());
        assert!(extract_hashtags("").is_empty());
    }

    #[test]
    fn extract_lowercases_and_dedupes_in_order() {
        let tags = extract_hashtags("#Rust is fun. #fixtures and #rust again #Demo_1.");
        assert_eq!(tags, vec!["#rust", "#fixtures", "#demo_1"]);
    }

    #[test]
    fn extract_stops_at_non_word_characters() {
        let tags = extract_hashtags("Ends with #tag. And #two-parts, #x!");
        assert_eq!(tags, vec!["#tag", "#two", "#x"]);
    }

    #[test]
    fn lone_hash_is_not_a_tag() {
        assert!(extract_hashtags("# heading and ## more").is_empty());
    }

    #[test]
    fn extract_is_idempotent() {
        let first = extract_hashtags("Alpha #One beta #two. #ONE gamma #Three.");
        let rejoined: String = first.iter().map(|t| format!(" {}", t)).collect();
        assert_eq!(extract_hashtags(&rejoined), first);
    }

    #[test]
    fn clean_strips_single_trailing_period() {
        assert_eq!(clean_hashtag("#foo."), "#foo");
        assert_eq!(clean_hashtag("#foo"), "#foo");
        assert_eq!(clean_hashtag("#foo.."), "#foo.");
        assert_eq!(clean_hashtag(""), "");
    }

    #[test]
    fn merge_preserves_first_seen_order() {
        let title = vec!["#b".to_string(), "#A.".to_string()];
        let body = vec!["#a".to_string(), "#c".to_string(), "#B".to_string()];
        let merged = merge_hashtags([title.as_slice(), body.as_slice()]);
        assert_eq!(merged, vec!["#b", "#a", "#c"]);
    }
}
