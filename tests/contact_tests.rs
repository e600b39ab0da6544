use folio::io::contact_io::ContactError;
use folio::io::translations_io;
use folio::state::contact::{ContactForm, ContactStatus};
use folio::state::i18n::TranslationStore;

fn fixture_store() -> TranslationStore {
    let manifest_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let path = manifest_dir.join("tests").join("data").join("translations.json");
    TranslationStore::from_raw(translations_io::load_from_path(&path).unwrap())
}

fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.set_field("name", "Ana".to_string());
    form.set_field("email", "ana@example.com".to_string());
    form.set_field("message", "Hola".to_string());
    form
}

#[test]
fn test_initial_status_is_none_without_message() {
    let store = fixture_store();
    let mut form = ContactForm::new();
    form.render_status(&store, "es");

    assert_eq!(form.status(), ContactStatus::None);
    assert_eq!(form.message(), None);
}

#[test]
fn test_begin_submit_sets_pending_and_serializes_fields() {
    let store = fixture_store();
    let mut form = filled_form();

    let payload = form.begin_submit(&store, "es");

    assert_eq!(form.status(), ContactStatus::Pending);
    assert_eq!(form.message(), Some("Enviando"));
    assert_eq!(payload["name"], "Ana");
    assert_eq!(payload["email"], "ana@example.com");
    assert_eq!(payload["message"], "Hola");
}

#[test]
fn test_begin_submit_includes_untouched_fields_as_empty() {
    let store = fixture_store();
    let mut form = ContactForm::new();
    form.set_field("name", "Ana".to_string());

    let payload = form.begin_submit(&store, "es");

    assert_eq!(payload.len(), 3);
    assert_eq!(payload["email"], "");
    assert_eq!(payload["message"], "");
}

#[test]
fn test_success_clears_fields() {
    let store = fixture_store();
    let mut form = filled_form();
    form.begin_submit(&store, "es");

    form.finish(Ok(()), &store, "es");

    assert_eq!(form.status(), ContactStatus::Success);
    assert_eq!(form.message(), Some("Enviado"));
    assert_eq!(form.field("name"), "");
    assert_eq!(form.field("message"), "");
}

#[test]
fn test_error_keeps_fields() {
    let store = fixture_store();
    let mut form = filled_form();
    form.begin_submit(&store, "es");

    form.finish(Err(ContactError::Status(500)), &store, "es");

    assert_eq!(form.status(), ContactStatus::Error);
    assert_eq!(form.message(), Some("Error al enviar"));
    assert_eq!(form.field("email"), "ana@example.com");
}

#[test]
fn test_resubmission_is_always_allowed() {
    let store = fixture_store();
    let mut form = filled_form();
    form.begin_submit(&store, "es");
    form.finish(Err(ContactError::Status(503)), &store, "es");

    form.begin_submit(&store, "es");
    assert_eq!(form.status(), ContactStatus::Pending);

    form.finish(Ok(()), &store, "es");
    form.set_field("message", "Otra vez".to_string());
    form.begin_submit(&store, "es");
    assert_eq!(form.status(), ContactStatus::Pending);
}

#[test]
fn test_overlapping_submissions_last_to_finish_wins() {
    let store = fixture_store();
    let mut form = filled_form();
    form.begin_submit(&store, "es");
    form.begin_submit(&store, "es");

    form.finish(Err(ContactError::Status(500)), &store, "es");
    form.finish(Ok(()), &store, "es");

    assert_eq!(form.status(), ContactStatus::Success);
}

#[test]
fn test_render_status_translates_into_new_language() {
    let store = fixture_store();
    let mut form = filled_form();
    form.begin_submit(&store, "es");
    form.finish(Ok(()), &store, "es");

    form.render_status(&store, "en");

    assert_eq!(form.message(), Some("Sent"));
}

#[test]
fn test_status_message_falls_back_to_key() {
    let store = TranslationStore::new();
    let mut form = filled_form();
    form.begin_submit(&store, "es");

    assert_eq!(form.message(), Some("contact.form.sending"));
}

#[test]
fn test_status_attribute_values() {
    assert_eq!(ContactStatus::None.as_str(), None);
    assert_eq!(ContactStatus::Pending.as_str(), Some("pending"));
    assert_eq!(ContactStatus::Success.as_str(), Some("success"));
    assert_eq!(ContactStatus::Error.as_str(), Some("error"));
    assert_eq!(ContactStatus::None.message_key(), None);
    assert_eq!(
        ContactStatus::Error.message_key(),
        Some("contact.form.error")
    );
}
