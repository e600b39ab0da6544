use serde_json::Value;
use tracing::debug;

use crate::state::i18n::TranslationStore;

/// One project entry under `gallery.items` in a translation document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryItem {
    pub tag: String,
    pub name: String,
    pub description: String,
    /// Kept untyped: a malformed stack hides the chip list instead of
    /// rejecting the whole item.
    pub stack: Value,
    pub link_label: String,
    pub link: String,
}

impl GalleryItem {
    /// Reads an item leniently: numbers and booleans become text, `null` or
    /// missing fields become empty. `None` when `value` is not an object.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        Some(Self {
            tag: scalar_text(value.get("tag")),
            name: scalar_text(value.get("name")),
            description: scalar_text(value.get("description")),
            stack: value.get("stack").cloned().unwrap_or(Value::Null),
            link_label: scalar_text(value.get("linkLabel")),
            link: scalar_text(value.get("link")),
        })
    }
}

fn scalar_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackChip {
    pub label: String,
    pub icon: Option<String>,
}

/// What the panel currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryView {
    pub tag: String,
    pub title: String,
    pub description: String,
    pub stack: Vec<StackChip>,
    pub stack_hidden: bool,
    pub link_label: String,
    pub link: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryPanel {
    selected: usize,
    view: Option<GalleryView>,
}

impl GalleryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// `None` until some item has been rendered.
    pub fn view(&self) -> Option<&GalleryView> {
        self.view.as_ref()
    }

    pub fn is_active(&self, button_index: usize) -> bool {
        button_index == self.selected
    }

    /// Sets the selection without a bounds check and re-renders. An index
    /// with no item leaves the previous content on screen.
    pub fn select(&mut self, index: usize, store: &TranslationStore, lang: &str) {
        self.selected = index;
        self.render(store, lang);
    }

    pub fn render(&mut self, store: &TranslationStore, lang: &str) {
        let Some(item) = item_at(store, lang, self.selected) else {
            debug!(index = self.selected, lang, "no gallery item, keeping current content");
            return;
        };

        let (stack, stack_hidden) = render_stack(&item.stack);
        self.view = Some(GalleryView {
            tag: item.tag,
            title: item.name,
            description: item.description,
            stack,
            stack_hidden,
            link_label: item.link_label,
            link: item.link,
        });
    }

    /// Declared indices of the trigger buttons: one per item of the active
    /// document.
    pub fn button_indices(store: &TranslationStore, lang: &str) -> Vec<usize> {
        items(store, lang)
            .map(|items| (0..items.len()).collect())
            .unwrap_or_default()
    }
}

fn items<'a>(store: &'a TranslationStore, lang: &str) -> Option<&'a Vec<Value>> {
    store
        .document(lang)?
        .get("gallery")?
        .get("items")?
        .as_array()
}

fn item_at(store: &TranslationStore, lang: &str, index: usize) -> Option<GalleryItem> {
    GalleryItem::from_value(items(store, lang)?.get(index)?)
}

/// Rebuilds the chip list from scratch. Returns the chips and whether the
/// container is hidden.
pub fn render_stack(stack: &Value) -> (Vec<StackChip>, bool) {
    let entries = match stack.as_array() {
        Some(entries) if !entries.is_empty() => entries,
        _ => return (Vec::new(), true),
    };

    let chips = entries
        .iter()
        .filter_map(|entry| {
            let label = non_empty_str(entry.get("label"))?;
            Some(StackChip {
                label: label.to_string(),
                icon: non_empty_str(entry.get("icon")).map(str::to_string),
            })
        })
        .collect();

    (chips, false)
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}
