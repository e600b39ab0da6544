use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, warn};

/// Language code -> nested content tree, exactly as served.
pub type RawTranslations = BTreeMap<String, Value>;

/// Dotted path (`gallery.items.0.name`) -> leaf text.
pub type FlatDictionary = BTreeMap<String, String>;

/// Flattens a nested translation tree into dotted keys.
///
/// Object keys are joined with `.`, list entries use their index as a path
/// segment. Numbers and booleans keep their JSON text form; `null` leaves are
/// dropped.
pub fn flatten(document: &Value) -> FlatDictionary {
    let mut flat = FlatDictionary::new();
    flatten_into(document, String::new(), &mut flat);
    flat
}

fn flatten_into(value: &Value, prefix: String, flat: &mut FlatDictionary) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(child, join_key(&prefix, key), flat);
            }
        }
        Value::Array(entries) => {
            for (index, child) in entries.iter().enumerate() {
                flatten_into(child, join_key(&prefix, &index.to_string()), flat);
            }
        }
        Value::String(text) => {
            flat.insert(prefix, text.clone());
        }
        Value::Number(n) => {
            flat.insert(prefix, n.to_string());
        }
        Value::Bool(b) => {
            flat.insert(prefix, b.to_string());
        }
        Value::Null => {}
    }
}

fn join_key(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}.{segment}")
    }
}

/// Loaded translations: the raw trees (for structured reads such as the
/// gallery) and their flattened lookup tables.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TranslationStore {
    raw: RawTranslations,
    flat: BTreeMap<String, FlatDictionary>,
}

impl TranslationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_raw(raw: RawTranslations) -> Self {
        let mut store = Self::new();
        store.install(raw);
        store
    }

    /// Replaces the store contents with `raw`. Languages whose tree is not an
    /// object are skipped.
    pub fn install(&mut self, raw: RawTranslations) {
        self.raw.clear();
        self.flat.clear();

        for (lang, document) in raw {
            if !document.is_object() {
                warn!(lang = %lang, "skipping translation document that is not an object");
                continue;
            }
            let dictionary = flatten(&document);
            debug!(lang = %lang, keys = dictionary.len(), "installed translations");
            self.flat.insert(lang.clone(), dictionary);
            self.raw.insert(lang, document);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.flat.is_empty()
    }

    pub fn has_language(&self, lang: &str) -> bool {
        self.flat.contains_key(lang)
    }

    /// The unflattened tree for `lang`.
    pub fn document(&self, lang: &str) -> Option<&Value> {
        self.raw.get(lang)
    }

    /// Stored value for `key`, or the key itself as a visible placeholder.
    pub fn lookup<'a>(&'a self, key: &'a str, lang: &str) -> &'a str {
        self.flat
            .get(lang)
            .and_then(|dictionary| dictionary.get(key))
            .map(String::as_str)
            .unwrap_or(key)
    }

    /// Replacement text for a text node. Missing or empty values yield `None`
    /// so the markup text stays in place.
    pub fn text(&self, key: &str, lang: &str) -> Option<&str> {
        self.flat
            .get(lang)
            .and_then(|dictionary| dictionary.get(key))
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn site_title(&self, lang: &str) -> Option<&str> {
        self.text("siteTitle", lang)
    }
}
