/// Reference dataset: word and hashtag pools plus named sampleable collections.
///
/// Loaded once, then shared read-only. Nested collection groups are
/// flattened into dotted keys (`"objects.idUsers"`) at load time, so an
/// unknown key is a lookup failure rather than a silently empty result.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset file not found at {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("RON serialization error: {0}")]
    RonSerialize(#[from] ron::Error),
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid collection key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },
    #[error("invalid dataset shape at '{path}': {reason}")]
    InvalidShape { path: String, reason: String },
}

/// A sampleable element. The engine never looks inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(x) => write!(f, "{}", x),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Convert to a JSON value (used by the WASM boundary and tools).
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::Int(n) => serde_json::Value::from(*n),
            Self::Float(x) => serde_json::Value::from(*x),
            Self::Bool(b) => serde_json::Value::Bool(*b),
        }
    }
}

/// A node in the on-disk collection tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CollectionNode {
    Items(Vec<Value>),
    Group(BTreeMap<String, CollectionNode>),
}

/// Named collections keyed by dotted path.
#[derive(Debug, Clone, Default)]
pub struct CollectionRegistry {
    collections: HashMap<String, Vec<Value>>,
}

impl CollectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a collection. Keys must be non-empty dotted paths with no
    /// empty segments, and each key may be registered once.
    pub fn insert(&mut self, key: &str, items: Vec<Value>) -> Result<(), DatasetError> {
        if key.is_empty() || key.split('.').any(str::is_empty) {
            return Err(DatasetError::InvalidKey {
                key: key.to_string(),
                reason: "empty path segment".to_string(),
            });
        }
        if self.collections.contains_key(key) {
            return Err(DatasetError::InvalidKey {
                key: key.to_string(),
                reason: "duplicate key".to_string(),
            });
        }
        self.collections.insert(key.to_string(), items);
        Ok(())
    }

    /// Register every `Items` leaf under `node`, prefixing keys with `prefix`.
    pub fn insert_node(&mut self, prefix: &str, node: CollectionNode) -> Result<(), DatasetError> {
        match node {
            CollectionNode::Items(items) => self.insert(prefix, items),
            CollectionNode::Group(children) => {
                for (name, child) in children {
                    self.insert_node(&format!("{}.{}", prefix, name), child)?;
                }
                Ok(())
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&[Value]> {
        self.collections.get(key).map(Vec::as_slice)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.collections.contains_key(key)
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.collections.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

/// The immutable reference dataset consumed by the composers and sampler.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    words: Vec<String>,
    hashtags: Vec<String>,
    collections: CollectionRegistry,
}

// RON file shape. Collections may nest via `Group`.
#[derive(Debug, Serialize, Deserialize)]
struct RonDataset {
    #[serde(default)]
    words: Vec<String>,
    #[serde(default)]
    hashtags: Vec<String>,
    #[serde(default)]
    collections: BTreeMap<String, CollectionNode>,
}

impl Dataset {
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::default()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn hashtags(&self) -> &[String] {
        &self.hashtags
    }

    pub fn collection(&self, key: &str) -> Option<&[Value]> {
        self.collections.get(key)
    }

    pub fn collections(&self) -> &CollectionRegistry {
        &self.collections
    }

    /// Load a dataset file. `.json` files are read as JSON, anything else as RON.
    pub fn load(path: &Path) -> Result<Dataset, DatasetError> {
        if !path.exists() {
            return Err(DatasetError::NotFound(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path)?;
        let dataset = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Self::parse_json(&contents)?,
            _ => Self::parse_ron(&contents)?,
        };
        debug!(
            "[lorem-sampler] loaded dataset from {} ({} words, {} hashtags, {} collections)",
            path.display(),
            dataset.words.len(),
            dataset.hashtags.len(),
            dataset.collections.len()
        );
        Ok(dataset)
    }

    /// Parse a dataset from a RON string.
    pub fn parse_ron(input: &str) -> Result<Dataset, DatasetError> {
        let raw: RonDataset = ron::from_str(input)?;
        let mut collections = CollectionRegistry::new();
        for (name, node) in raw.collections {
            collections.insert_node(&name, node)?;
        }
        Ok(Dataset {
            words: raw.words,
            hashtags: raw.hashtags,
            collections,
        })
    }

    /// Render as a RON dataset file. Collections are written flat, one
    /// `Items` entry per dotted key.
    pub fn to_ron(&self) -> Result<String, DatasetError> {
        let collections = self
            .collections
            .collections
            .iter()
            .map(|(key, items)| (key.clone(), CollectionNode::Items(items.clone())))
            .collect();
        let raw = RonDataset {
            words: self.words.clone(),
            hashtags: self.hashtags.clone(),
            collections,
        };
        Ok(ron::ser::to_string_pretty(
            &raw,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    /// Parse a dataset from a JSON string.
    ///
    /// `words` and `hashtags` are top-level string arrays; every other array
    /// in the tree is registered under its dotted path. Non-array scalars are
    /// ignored.
    pub fn parse_json(input: &str) -> Result<Dataset, DatasetError> {
        let root: serde_json::Value = serde_json::from_str(input)?;
        let serde_json::Value::Object(map) = root else {
            return Err(DatasetError::InvalidShape {
                path: String::new(),
                reason: "top level must be an object".to_string(),
            });
        };

        let mut dataset = Dataset::default();
        for (key, node) in map {
            match key.as_str() {
                "words" => dataset.words = json_string_array(&key, node)?,
                "hashtags" => dataset.hashtags = json_string_array(&key, node)?,
                _ => flatten_json(&key, node, &mut dataset.collections)?,
            }
        }
        Ok(dataset)
    }
}

fn json_string_array(path: &str, node: serde_json::Value) -> Result<Vec<String>, DatasetError> {
    let serde_json::Value::Array(items) = node else {
        return Err(DatasetError::InvalidShape {
            path: path.to_string(),
            reason: "expected an array of strings".to_string(),
        });
    };
    items
        .into_iter()
        .map(|item| match item {
            serde_json::Value::String(s) => Ok(s),
            other => Err(DatasetError::InvalidShape {
                path: path.to_string(),
                reason: format!("expected a string, found {}", other),
            }),
        })
        .collect()
}

fn flatten_json(
    path: &str,
    node: serde_json::Value,
    registry: &mut CollectionRegistry,
) -> Result<(), DatasetError> {
    match node {
        serde_json::Value::Array(items) => {
            let values = items
                .into_iter()
                .map(|item| json_scalar(path, item))
                .collect::<Result<Vec<_>, _>>()?;
            registry.insert(path, values)
        }
        serde_json::Value::Object(children) => {
            for (name, child) in children {
                flatten_json(&format!("{}.{}", path, name), child, registry)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

fn json_scalar(path: &str, item: serde_json::Value) -> Result<Value, DatasetError> {
    match item {
        serde_json::Value::String(s) => Ok(Value::String(s)),
        serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int(i))
            } else if let Some(x) = n.as_f64() {
                Ok(Value::Float(x))
            } else {
                Err(DatasetError::InvalidShape {
                    path: path.to_string(),
                    reason: format!("number {} does not fit i64 or f64", n),
                })
            }
        }
        other => Err(DatasetError::InvalidShape {
            path: path.to_string(),
            reason: format!("collection elements must be scalars, found {}", other),
        }),
    }
}

/// Builder for in-code datasets.
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    words: Vec<String>,
    hashtags: Vec<String>,
    collections: Vec<(String, Vec<Value>)>,
}

impl DatasetBuilder {
    pub fn words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn hashtags<I, S>(mut self, hashtags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hashtags = hashtags.into_iter().map(Into::into).collect();
        self
    }

    pub fn collection<I, V>(mut self, key: &str, items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.collections
            .push((key.to_string(), items.into_iter().map(Into::into).collect()));
        self
    }

    pub fn build(self) -> Result<Dataset, DatasetError> {
        let mut collections = CollectionRegistry::new();
        for (key, items) in self.collections {
            collections.insert(&key, items)?;
        }
        Ok(Dataset {
            words: self.words,
            hashtags: self.hashtags,
            collections,
        })
    }
}
