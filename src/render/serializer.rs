//! Serializer boundary for formatted documents.
//!
//! The formatting engine stops at the [`Document`] model. Producing an actual
//! word-processor file is the job of a [`DocumentSerializer`] registered by
//! the caller; only JSON ships with the crate.
//!
//! # Example
//!
//! ```
//! use thesisfmt::render::SerializerRegistry;
//! use thesisfmt::{build_document, ThesisConfig, ThesisContent};
//!
//! let doc = build_document(&ThesisContent::sample(), &ThesisConfig::default());
//! let registry = SerializerRegistry::with_defaults();
//! let bytes = registry.serialize(&doc, "json")?;
//! assert!(!bytes.is_empty());
//! # Ok::<(), thesisfmt::Error>(())
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use super::json::{to_json, JsonFormat};
use crate::error::{Error, Result};
use crate::model::Document;

/// Trait for document serializers.
///
/// Implement this trait to emit a new file format.
pub trait DocumentSerializer: Send + Sync {
    /// Name of this serializer (e.g. `"json"`).
    fn name(&self) -> &str;

    /// File extension without the leading dot.
    fn extension(&self) -> &str;

    /// MIME type of the output.
    fn media_type(&self) -> &'static str;

    /// Serialize a document.
    fn serialize(&self, doc: &Document) -> Result<Vec<u8>>;
}

/// Serializer writing the document model as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer {
    format: JsonFormat,
}

impl JsonSerializer {
    /// Create a pretty-printing JSON serializer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a serializer with the given JSON format.
    pub fn with_format(format: JsonFormat) -> Self {
        Self { format }
    }
}

impl DocumentSerializer for JsonSerializer {
    fn name(&self) -> &str {
        "json"
    }

    fn extension(&self) -> &str {
        "json"
    }

    fn media_type(&self) -> &'static str {
        "application/json"
    }

    fn serialize(&self, doc: &Document) -> Result<Vec<u8>> {
        Ok(to_json(doc, self.format)?.into_bytes())
    }
}

/// Registry of serializers keyed by name and extension.
pub struct SerializerRegistry {
    by_name: HashMap<String, Arc<dyn DocumentSerializer>>,
    by_extension: HashMap<String, Arc<dyn DocumentSerializer>>,
}

impl SerializerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            by_name: HashMap::new(),
            by_extension: HashMap::new(),
        }
    }

    /// Create a registry with the built-in JSON serializer.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(JsonSerializer::new()));
        registry
    }

    /// Register a serializer under its name and extension.
    pub fn register(&mut self, serializer: Arc<dyn DocumentSerializer>) {
        self.by_extension
            .insert(serializer.extension().to_lowercase(), serializer.clone());
        self.by_name
            .insert(serializer.name().to_lowercase(), serializer);
    }

    /// Look up a serializer by name or extension.
    ///
    /// Fails with [`Error::MissingDependency`] when nothing is registered.
    pub fn get(&self, key: &str) -> Result<Arc<dyn DocumentSerializer>> {
        let key = key.trim_start_matches('.').to_lowercase();
        self.by_name
            .get(&key)
            .or_else(|| self.by_extension.get(&key))
            .cloned()
            .ok_or_else(|| {
                Error::MissingDependency(format!("no serializer registered for '{}'", key))
            })
    }

    /// Check if a name or extension is supported.
    pub fn supports(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }

    /// Names of all registered serializers.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Serialize a document with the serializer registered for `key`.
    pub fn serialize(&self, doc: &Document, key: &str) -> Result<Vec<u8>> {
        let serializer = self.get(key)?;
        log::debug!(
            "Serializing {} paragraphs with '{}'",
            doc.paragraph_count(),
            serializer.name()
        );
        serializer.serialize(doc)
    }
}

impl Default for SerializerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
