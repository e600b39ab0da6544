use tracing::{error, info};

use crate::config::SiteConfig;
use crate::io::contact_io::ContactError;
use crate::io::translations_io::TranslationLoadError;
use crate::state::chrome::{AnimationLoader, AnimationNode, CvLink, ScrollTop};
use crate::state::contact::{ContactForm, ContactPayload};
use crate::state::gallery::GalleryPanel;
use crate::state::i18n::{RawTranslations, TranslationStore};

/// `<html lang>` and `<title>` as last synchronized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentMeta {
    pub lang: String,
    pub title: Option<String>,
}

/// Everything the page shares between sections. Each mutation is followed
/// by explicit re-render calls on the parts it affects.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteState {
    config: SiteConfig,
    store: TranslationStore,
    current_lang: String,
    document: DocumentMeta,
    cv_link: Option<CvLink>,
    pub gallery: GalleryPanel,
    pub contact: ContactForm,
    pub scroll_top: ScrollTop,
    pub animations: AnimationLoader,
}

impl SiteState {
    /// `markup_lang` is the language the page was authored in, if known.
    pub fn new(config: SiteConfig, markup_lang: Option<&str>) -> Self {
        let current_lang = markup_lang
            .filter(|lang| !lang.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| config.default_lang.clone());
        let cv_link = CvLink::for_language(&config, &current_lang);
        let scroll_top = ScrollTop::new(config.ui.scroll_top_threshold);

        Self {
            document: DocumentMeta {
                lang: current_lang.clone(),
                title: None,
            },
            current_lang,
            cv_link,
            store: TranslationStore::new(),
            gallery: GalleryPanel::new(),
            contact: ContactForm::new(),
            scroll_top,
            animations: AnimationLoader::default(),
            config,
        }
    }

    pub fn with_animations(mut self, nodes: Vec<AnimationNode>) -> Self {
        self.animations = AnimationLoader::new(nodes);
        self
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    pub fn current_lang(&self) -> &str {
        &self.current_lang
    }

    pub fn document(&self) -> &DocumentMeta {
        &self.document
    }

    pub fn cv_link(&self) -> Option<&CvLink> {
        self.cv_link.as_ref()
    }

    pub fn is_active_language(&self, lang: &str) -> bool {
        self.current_lang == lang
    }

    /// Installs freshly loaded translations and applies the current language.
    pub fn install_translations(&mut self, raw: RawTranslations) {
        self.store.install(raw);
        let lang = self.current_lang.clone();
        if !self.set_language(&lang) {
            info!(lang = %lang, "no translations for markup language, keeping page text");
        }
    }

    /// Leaves the store empty; the page keeps its markup text.
    pub fn translations_failed(&self, err: &TranslationLoadError) {
        error!(error = %err, "failed to load translations");
    }

    /// Switches language and cascades to every dependent view. Returns
    /// `false`, changing nothing, when `lang` has no loaded dictionary.
    pub fn set_language(&mut self, lang: &str) -> bool {
        if !self.store.has_language(lang) {
            return false;
        }

        self.current_lang = lang.to_string();
        self.document.lang = lang.to_string();
        if let Some(title) = self.store.site_title(lang) {
            self.document.title = Some(title.to_string());
        }
        self.cv_link = CvLink::for_language(&self.config, lang);

        self.gallery.render(&self.store, &self.current_lang);
        self.contact.render_status(&self.store, &self.current_lang);
        info!(lang, "language applied");
        true
    }

    pub fn select_gallery(&mut self, index: usize) {
        self.gallery.select(index, &self.store, &self.current_lang);
    }

    pub fn gallery_buttons(&self) -> Vec<usize> {
        GalleryPanel::button_indices(&self.store, &self.current_lang)
    }

    /// Text-node replacement in the current language, if any.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.store.text(key, &self.current_lang)
    }

    /// Like [`SiteState::text`], keeping `markup` when there is no
    /// translation.
    pub fn text_or<'a>(&'a self, key: &str, markup: &'a str) -> &'a str {
        self.text(key).unwrap_or(markup)
    }

    pub fn begin_contact_submit(&mut self) -> ContactPayload {
        self.contact.begin_submit(&self.store, &self.current_lang)
    }

    pub fn finish_contact_submit(&mut self, outcome: Result<(), ContactError>) {
        self.contact.finish(outcome, &self.store, &self.current_lang);
    }
}
