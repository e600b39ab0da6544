use std::collections::BTreeMap;

use tracing::{error, info};

use crate::io::contact_io::ContactError;
use crate::state::i18n::TranslationStore;

/// Field name -> value, posted as a flat JSON object.
pub type ContactPayload = BTreeMap<String, String>;

/// Form fields rendered by the contact section, in display order.
pub const CONTACT_FIELDS: &[&str] = &["name", "email", "message"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    None,
    Pending,
    Success,
    Error,
}

impl ContactStatus {
    /// Value of the status element's `data-state` attribute.
    pub fn as_str(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Pending => Some("pending"),
            Self::Success => Some("success"),
            Self::Error => Some("error"),
        }
    }

    pub fn message_key(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Pending => Some("contact.form.sending"),
            Self::Success => Some("contact.form.success"),
            Self::Error => Some("contact.form.error"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    fields: BTreeMap<String, String>,
    status: ContactStatus,
    message: Option<String>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> ContactStatus {
        self.status
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set_field(&mut self, name: &str, value: String) {
        self.fields.insert(name.to_string(), value);
    }

    pub fn reset(&mut self) {
        self.fields.clear();
    }

    /// Enters `Pending` and returns the serialized fields. Allowed from any
    /// state, including while another submission is in flight.
    pub fn begin_submit(&mut self, store: &TranslationStore, lang: &str) -> ContactPayload {
        self.set_status(ContactStatus::Pending, store, lang);
        let mut payload = self.fields.clone();
        for name in CONTACT_FIELDS {
            payload.entry(name.to_string()).or_default();
        }
        payload
    }

    /// Applies the outcome of one submission. Only success clears the fields.
    pub fn finish(
        &mut self,
        outcome: Result<(), ContactError>,
        store: &TranslationStore,
        lang: &str,
    ) {
        match outcome {
            Ok(()) => {
                info!("contact form submitted");
                self.set_status(ContactStatus::Success, store, lang);
                self.reset();
            }
            Err(err) => {
                error!(error = %err, "contact form submission failed");
                self.set_status(ContactStatus::Error, store, lang);
            }
        }
    }

    fn set_status(&mut self, status: ContactStatus, store: &TranslationStore, lang: &str) {
        self.status = status;
        self.render_status(store, lang);
    }

    /// Re-translates the status message. Nothing happens before the first
    /// submission.
    pub fn render_status(&mut self, store: &TranslationStore, lang: &str) {
        if let Some(key) = self.status.message_key() {
            self.message = Some(store.lookup(key, lang).to_string());
        }
    }
}
